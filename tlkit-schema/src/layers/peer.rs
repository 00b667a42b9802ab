//! Peer references from before 64-bit ids.

use crate::{enums, types};

tl_struct! {
    /// `peerUser#9db1bc6d user_id:int = Peer;`
    pub struct PeerUserLayer132 => 0x9db1bc6d, "peerUser" {
        pub user_id: i32,
    }
}

impl From<PeerUserLayer132> for enums::Peer {
    fn from(x: PeerUserLayer132) -> Self {
        types::PeerUser { user_id: x.user_id.into() }.into()
    }
}

tl_struct! {
    /// `peerChat#bad0e5bb chat_id:int = Peer;`
    pub struct PeerChatLayer132 => 0xbad0e5bb, "peerChat" {
        pub chat_id: i32,
    }
}

impl From<PeerChatLayer132> for enums::Peer {
    fn from(x: PeerChatLayer132) -> Self {
        types::PeerChat { chat_id: x.chat_id.into() }.into()
    }
}

tl_struct! {
    /// `peerChannel#bddde532 channel_id:int = Peer;`
    pub struct PeerChannelLayer132 => 0xbddde532, "peerChannel" {
        pub channel_id: i32,
    }
}

impl From<PeerChannelLayer132> for enums::Peer {
    fn from(x: PeerChannelLayer132) -> Self {
        types::PeerChannel { channel_id: x.channel_id.into() }.into()
    }
}

tl_struct! {
    /// `inputChannel#afeb712e channel_id:int access_hash:long = InputChannel;`
    pub struct InputChannelLayer132 => 0xafeb712e, "inputChannel" {
        pub channel_id: i32,
        pub access_hash: i64,
    }
}

impl From<InputChannelLayer132> for enums::InputChannel {
    fn from(x: InputChannelLayer132) -> Self {
        types::InputChannel {
            channel_id: x.channel_id.into(),
            access_hash: x.access_hash,
        }
        .into()
    }
}
