use crate::{layers, types};

tl_family! {
    /// [`Peer`](https://core.telegram.org/type/Peer)
    pub enum Peer as "Peer" {
        User(types::PeerUser),
        Chat(types::PeerChat),
        Channel(types::PeerChannel),
    }
    legacy {
        layers::PeerUserLayer132,
        layers::PeerChatLayer132,
        layers::PeerChannelLayer132,
    }
}

impl Peer {
    /// The bare id, whatever kind of peer this is.
    pub fn id(&self) -> i64 {
        match self {
            Self::User(p) => p.user_id,
            Self::Chat(p) => p.chat_id,
            Self::Channel(p) => p.channel_id,
        }
    }
}

tl_family! {
    /// [`InputUser`](https://core.telegram.org/type/InputUser)
    pub enum InputUser as "InputUser" {
        Empty(types::InputUserEmpty),
        UserSelf(types::InputUserSelf),
        InputUser(types::InputUser),
    }
}

tl_family! {
    /// [`InputChannel`](https://core.telegram.org/type/InputChannel)
    pub enum InputChannel as "InputChannel" {
        Empty(types::InputChannelEmpty),
        InputChannel(types::InputChannel),
    }
    legacy {
        layers::InputChannelLayer132,
    }
}

tl_family! {
    /// [`InputMessage`](https://core.telegram.org/type/InputMessage)
    pub enum InputMessage as "InputMessage" {
        Id(types::InputMessageId),
        ReplyTo(types::InputMessageReplyTo),
        Pinned(types::InputMessagePinned),
    }
}
