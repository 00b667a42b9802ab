use crate::{layers, types};

tl_family! {
    /// [`ChatInvite`](https://core.telegram.org/type/ChatInvite)
    pub enum ChatInvite as "ChatInvite" {
        Already(types::ChatInviteAlready),
        Peek(types::ChatInvitePeek),
        ChatInvite(types::ChatInvite),
    }
    legacy {
        layers::ChatInviteLayer124,
    }
}
