//! `messages.*` families.

use crate::types;

tl_family! {
    /// [`messages.Messages`](https://core.telegram.org/type/messages.Messages)
    pub enum Messages as "messages.Messages" {
        Messages(types::messages::Messages),
        Slice(types::messages::MessagesSlice),
        ChannelMessages(types::messages::ChannelMessages),
        NotModified(types::messages::MessagesNotModified),
    }
}

impl Messages {
    /// The messages carried by this response; empty for `NotModified`.
    pub fn messages(&self) -> &[crate::enums::Message] {
        match self {
            Self::Messages(m) => &m.messages,
            Self::Slice(m) => &m.messages,
            Self::ChannelMessages(m) => &m.messages,
            Self::NotModified(_) => &[],
        }
    }
}
