use crate::{enums, types};

tl_revision! {
    /// `userProfilePhoto#cc656077 flags:# has_video:flags.0?true photo_id:long
    /// stripped_thumb:flags.1?bytes dc_id:int = UserProfilePhoto;`
    ///
    /// Same layout as today without the `personal` bit.
    pub struct UserProfilePhotoLayer148(types::UserProfilePhoto) => 0xcc656077, "userProfilePhoto";
    into enums::UserProfilePhoto;
    read = types::UserProfilePhoto::read_revision(false);
}

tl_struct! {
    /// `userEmpty#200250ba id:int = User;`
    pub struct UserEmptyLayer132 => 0x200250ba, "userEmpty" {
        pub id: i32,
    }
}

impl From<UserEmptyLayer132> for enums::User {
    fn from(x: UserEmptyLayer132) -> Self {
        types::UserEmpty { id: x.id.into() }.into()
    }
}

tl_revision! {
    /// `user#938458c1`, the last user with a 32-bit id.
    pub struct UserLayer132(types::User) => 0x938458c1, "user";
    into enums::User;
    read = types::User::read_revision(false, false, false);
}

tl_revision! {
    /// `user#3ff6ecb0`, 64-bit id, before premium and emoji statuses.
    pub struct UserLayer143(types::User) => 0x3ff6ecb0, "user";
    into enums::User;
    read = types::User::read_revision(true, false, false);
}

tl_revision! {
    /// `user#5d99adee`, the last user without a second flags word.
    pub struct UserLayer144(types::User) => 0x5d99adee, "user";
    into enums::User;
    read = types::User::read_revision(true, true, false);
}
