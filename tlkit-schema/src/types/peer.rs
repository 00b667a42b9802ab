//! Peers and the input references that point at them.

tl_struct! {
    /// `peerUser#59511722 user_id:long = Peer;`
    pub struct PeerUser => 0x59511722, "peerUser" {
        pub user_id: i64,
    }
}

tl_struct! {
    /// `peerChat#36c6019a chat_id:long = Peer;`
    pub struct PeerChat => 0x36c6019a, "peerChat" {
        pub chat_id: i64,
    }
}

tl_struct! {
    /// `peerChannel#a2a5371e channel_id:long = Peer;`
    pub struct PeerChannel => 0xa2a5371e, "peerChannel" {
        pub channel_id: i64,
    }
}

tl_unit!(
    /// `inputUserEmpty#b98886cf = InputUser;`
    InputUserEmpty => 0xb98886cf, "inputUserEmpty"
);

tl_unit!(
    /// `inputUserSelf#f7c1b13f = InputUser;`
    InputUserSelf => 0xf7c1b13f, "inputUserSelf"
);

tl_struct! {
    /// `inputUser#f21158c9 user_id:long access_hash:long = InputUser;`
    pub struct InputUser => 0xf21158c9, "inputUser" {
        pub user_id: i64,
        pub access_hash: i64,
    }
}

tl_unit!(
    /// `inputChannelEmpty#ee8c1e86 = InputChannel;`
    InputChannelEmpty => 0xee8c1e86, "inputChannelEmpty"
);

tl_struct! {
    /// `inputChannel#f35aec28 channel_id:long access_hash:long = InputChannel;`
    pub struct InputChannel => 0xf35aec28, "inputChannel" {
        pub channel_id: i64,
        pub access_hash: i64,
    }
}

tl_struct! {
    /// `inputMessageID#a676a322 id:int = InputMessage;`
    pub struct InputMessageId => 0xa676a322, "inputMessageID" {
        pub id: i32,
    }
}

tl_struct! {
    /// `inputMessageReplyTo#bad88395 id:int = InputMessage;`
    pub struct InputMessageReplyTo => 0xbad88395, "inputMessageReplyTo" {
        pub id: i32,
    }
}

tl_unit!(
    /// `inputMessagePinned#86872538 = InputMessage;`
    InputMessagePinned => 0x86872538, "inputMessagePinned"
);
