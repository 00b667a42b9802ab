use crate::{layers, types};

tl_family! {
    /// [`ChatPhoto`](https://core.telegram.org/type/ChatPhoto)
    pub enum ChatPhoto as "ChatPhoto" {
        Empty(types::ChatPhotoEmpty),
        ChatPhoto(types::ChatPhoto),
    }
}

tl_family! {
    /// [`ChatAdminRights`](https://core.telegram.org/type/ChatAdminRights)
    pub enum ChatAdminRights as "ChatAdminRights" {
        ChatAdminRights(types::ChatAdminRights),
    }
}

tl_family! {
    /// [`ChatBannedRights`](https://core.telegram.org/type/ChatBannedRights)
    pub enum ChatBannedRights as "ChatBannedRights" {
        ChatBannedRights(types::ChatBannedRights),
    }
}

tl_family! {
    /// [`Chat`](https://core.telegram.org/type/Chat)
    pub enum Chat as "Chat" {
        Empty(types::ChatEmpty),
        Chat(types::Chat),
        Forbidden(types::ChatForbidden),
        Channel(types::Channel),
        ChannelForbidden(types::ChannelForbidden),
    }
    legacy {
        layers::ChatEmptyLayer132,
        layers::ChatLayer132,
        layers::ChatForbiddenLayer132,
        layers::ChannelForbiddenLayer132,
    }
}

impl Chat {
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(c) => c.id,
            Self::Chat(c) => c.id,
            Self::Forbidden(c) => c.id,
            Self::Channel(c) => c.id,
            Self::ChannelForbidden(c) => c.id,
        }
    }
}
