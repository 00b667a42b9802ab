use crate::{layers, types};

tl_family! {
    /// [`RestrictionReason`](https://core.telegram.org/type/RestrictionReason)
    pub enum RestrictionReason as "RestrictionReason" {
        RestrictionReason(types::RestrictionReason),
    }
}

tl_family! {
    /// [`Username`](https://core.telegram.org/type/Username)
    pub enum Username as "Username" {
        Username(types::Username),
    }
}

tl_family! {
    /// [`EmojiStatus`](https://core.telegram.org/type/EmojiStatus)
    pub enum EmojiStatus as "EmojiStatus" {
        Empty(types::EmojiStatusEmpty),
        EmojiStatus(types::EmojiStatus),
        Until(types::EmojiStatusUntil),
    }
}

tl_family! {
    /// [`UserStatus`](https://core.telegram.org/type/UserStatus)
    pub enum UserStatus as "UserStatus" {
        Empty(types::UserStatusEmpty),
        Online(types::UserStatusOnline),
        Offline(types::UserStatusOffline),
        Recently(types::UserStatusRecently),
        LastWeek(types::UserStatusLastWeek),
        LastMonth(types::UserStatusLastMonth),
    }
}

tl_family! {
    /// [`UserProfilePhoto`](https://core.telegram.org/type/UserProfilePhoto)
    pub enum UserProfilePhoto as "UserProfilePhoto" {
        Empty(types::UserProfilePhotoEmpty),
        UserProfilePhoto(types::UserProfilePhoto),
    }
    legacy {
        layers::UserProfilePhotoLayer148,
    }
}

tl_family! {
    /// [`User`](https://core.telegram.org/type/User)
    pub enum User as "User" {
        Empty(types::UserEmpty),
        User(types::User),
    }
    legacy {
        layers::UserEmptyLayer132,
        layers::UserLayer132,
        layers::UserLayer143,
        layers::UserLayer144,
    }
}

impl User {
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(u) => u.id,
            Self::User(u) => u.id,
        }
    }
}
