use crate::{layers, types};

use super::Peer;

tl_family! {
    /// [`MessageEntity`](https://core.telegram.org/type/MessageEntity)
    pub enum MessageEntity as "MessageEntity" {
        Unknown(types::MessageEntityUnknown),
        Mention(types::MessageEntityMention),
        Hashtag(types::MessageEntityHashtag),
        Bold(types::MessageEntityBold),
        Italic(types::MessageEntityItalic),
        Code(types::MessageEntityCode),
        Pre(types::MessageEntityPre),
        Url(types::MessageEntityUrl),
        TextUrl(types::MessageEntityTextUrl),
        MentionName(types::MessageEntityMentionName),
        Strike(types::MessageEntityStrike),
        Underline(types::MessageEntityUnderline),
        Spoiler(types::MessageEntitySpoiler),
        CustomEmoji(types::MessageEntityCustomEmoji),
    }
}

tl_family! {
    /// [`MessageReplyHeader`](https://core.telegram.org/type/MessageReplyHeader)
    pub enum MessageReplyHeader as "MessageReplyHeader" {
        MessageReplyHeader(types::MessageReplyHeader),
    }
}

tl_family! {
    /// [`MessageFwdHeader`](https://core.telegram.org/type/MessageFwdHeader)
    pub enum MessageFwdHeader as "MessageFwdHeader" {
        MessageFwdHeader(types::MessageFwdHeader),
    }
}

tl_family! {
    /// [`MessageReplies`](https://core.telegram.org/type/MessageReplies)
    pub enum MessageReplies as "MessageReplies" {
        MessageReplies(types::MessageReplies),
    }
    legacy {
        layers::MessageRepliesLayer132,
    }
}

tl_family! {
    /// [`MessageAction`](https://core.telegram.org/type/MessageAction)
    pub enum MessageAction as "MessageAction" {
        Empty(types::MessageActionEmpty),
        ChatCreate(types::MessageActionChatCreate),
        ChatEditTitle(types::MessageActionChatEditTitle),
        ChatEditPhoto(types::MessageActionChatEditPhoto),
        ChatDeletePhoto(types::MessageActionChatDeletePhoto),
        ChatAddUser(types::MessageActionChatAddUser),
        ChatDeleteUser(types::MessageActionChatDeleteUser),
        ChatJoinedByLink(types::MessageActionChatJoinedByLink),
        ChannelCreate(types::MessageActionChannelCreate),
        PinMessage(types::MessageActionPinMessage),
        HistoryClear(types::MessageActionHistoryClear),
        CustomAction(types::MessageActionCustomAction),
    }
    legacy {
        layers::MessageActionChatCreateLayer132,
        layers::MessageActionChatAddUserLayer132,
        layers::MessageActionChatDeleteUserLayer132,
        layers::MessageActionChatJoinedByLinkLayer132,
    }
}

tl_family! {
    /// [`Message`](https://core.telegram.org/type/Message)
    ///
    /// Decoding fills a missing sender with the chat the message is in, so
    /// every decoded `Message` and `Service` value has `from_id` set.
    pub enum Message as "Message" {
        Empty(types::MessageEmpty),
        Message(types::Message),
        Service(types::MessageService),
    }
    legacy {
        layers::MessageEmptyLayer135,
        layers::MessageServiceLayer118,
        layers::MessageLayer118,
        layers::MessageLayer132,
        layers::MessageLayer135,
    }
    normalize = fill_sender;
}

impl Message {
    pub fn id(&self) -> i32 {
        match self {
            Self::Empty(m) => m.id,
            Self::Message(m) => m.id,
            Self::Service(m) => m.id,
        }
    }

    /// The chat this message belongs to, if known.
    pub fn peer_id(&self) -> Option<&Peer> {
        match self {
            Self::Empty(m) => m.peer_id.as_ref(),
            Self::Message(m) => Some(&m.peer_id),
            Self::Service(m) => Some(&m.peer_id),
        }
    }
}

/// Messages in private chats and channel posts may omit their sender; the
/// sender is then the peer itself.
fn fill_sender(mut message: Message) -> Message {
    let (from_id, peer_id) = match &mut message {
        Message::Message(m) => (&mut m.from_id, &m.peer_id),
        Message::Service(m) => (&mut m.from_id, &m.peer_id),
        Message::Empty(_) => return message,
    };
    if from_id.is_none() {
        log::trace!("[tl] message has no sender, using peer {}", peer_id.id());
        *from_id = Some(peer_id.clone());
    }
    message
}
