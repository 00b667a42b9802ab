use tlkit_wire::{Buffer, Deserializable, Flags, Result};

use crate::{enums, types};

tl_revision! {
    /// `messageReplies#4128faac`, with a 32-bit `channel_id`.
    pub struct MessageRepliesLayer132(types::MessageReplies) => 0x4128faac, "messageReplies";
    into enums::MessageReplies;
    read = types::MessageReplies::read_revision(false);
}

// ─── MessageAction ───────────────────────────────────────────────────────────

fn widen(ids: Vec<i32>) -> Vec<i64> {
    ids.into_iter().map(i64::from).collect()
}

tl_struct! {
    /// `messageActionChatCreate#a6638b9a title:string users:Vector<int> = MessageAction;`
    pub struct MessageActionChatCreateLayer132 => 0xa6638b9a, "messageActionChatCreate" {
        pub title: String,
        pub users: Vec<i32>,
    }
}

impl From<MessageActionChatCreateLayer132> for enums::MessageAction {
    fn from(x: MessageActionChatCreateLayer132) -> Self {
        types::MessageActionChatCreate { title: x.title, users: widen(x.users) }.into()
    }
}

tl_struct! {
    /// `messageActionChatAddUser#488a7337 users:Vector<int> = MessageAction;`
    pub struct MessageActionChatAddUserLayer132 => 0x488a7337, "messageActionChatAddUser" {
        pub users: Vec<i32>,
    }
}

impl From<MessageActionChatAddUserLayer132> for enums::MessageAction {
    fn from(x: MessageActionChatAddUserLayer132) -> Self {
        types::MessageActionChatAddUser { users: widen(x.users) }.into()
    }
}

tl_struct! {
    /// `messageActionChatDeleteUser#b2ae9b0c user_id:int = MessageAction;`
    pub struct MessageActionChatDeleteUserLayer132 => 0xb2ae9b0c, "messageActionChatDeleteUser" {
        pub user_id: i32,
    }
}

impl From<MessageActionChatDeleteUserLayer132> for enums::MessageAction {
    fn from(x: MessageActionChatDeleteUserLayer132) -> Self {
        types::MessageActionChatDeleteUser { user_id: x.user_id.into() }.into()
    }
}

tl_struct! {
    /// `messageActionChatJoinedByLink#f89cf5e8 inviter_id:int = MessageAction;`
    pub struct MessageActionChatJoinedByLinkLayer132 => 0xf89cf5e8, "messageActionChatJoinedByLink" {
        pub inviter_id: i32,
    }
}

impl From<MessageActionChatJoinedByLinkLayer132> for enums::MessageAction {
    fn from(x: MessageActionChatJoinedByLinkLayer132) -> Self {
        types::MessageActionChatJoinedByLink { inviter_id: x.inviter_id.into() }.into()
    }
}

// ─── Message ─────────────────────────────────────────────────────────────────

tl_struct! {
    /// `messageEmpty#83e5de54 id:int = Message;`
    pub struct MessageEmptyLayer135 => 0x83e5de54, "messageEmpty" {
        pub id: i32,
    }
}

impl From<MessageEmptyLayer135> for enums::Message {
    fn from(x: MessageEmptyLayer135) -> Self {
        types::MessageEmpty { id: x.id, peer_id: None }.into()
    }
}

/// Senders were bare user ids before channels could post as themselves.
fn user_peer(user_id: i32) -> enums::Peer {
    types::PeerUser { user_id: user_id.into() }.into()
}

fn reply_header(reply_to_msg_id: i32) -> enums::MessageReplyHeader {
    types::MessageReplyHeader {
        reply_to_scheduled: false,
        forum_topic: false,
        reply_to_msg_id,
        reply_to_peer_id: None,
        reply_to_top_id: None,
    }
    .into()
}

/// `messageService#9e19a1f6 flags:# out:flags.1?true mentioned:flags.4?true
/// media_unread:flags.5?true silent:flags.13?true post:flags.14?true
/// legacy:flags.19?true id:int from_id:flags.8?int to_id:Peer
/// reply_to_msg_id:flags.3?int date:int action:MessageAction = Message;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageServiceLayer118 {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub legacy: bool,
    pub id: i32,
    pub from_id: Option<i32>,
    pub to_id: enums::Peer,
    pub reply_to_msg_id: Option<i32>,
    pub date: i32,
    pub action: enums::MessageAction,
}

tl_id!(MessageServiceLayer118 => 0x9e19a1f6, "messageService");

impl Deserializable for MessageServiceLayer118 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            out: flags.has(1),
            mentioned: flags.has(4),
            media_unread: flags.has(5),
            silent: flags.has(13),
            post: flags.has(14),
            legacy: flags.has(19),
            id: i32::deserialize(buf)?,
            from_id: flags.read(8, buf)?,
            to_id: enums::Peer::deserialize(buf)?,
            reply_to_msg_id: flags.read(3, buf)?,
            date: i32::deserialize(buf)?,
            action: enums::MessageAction::deserialize(buf)?,
        })
    }
}

impl From<MessageServiceLayer118> for enums::Message {
    fn from(x: MessageServiceLayer118) -> Self {
        types::MessageService {
            out: x.out,
            mentioned: x.mentioned,
            media_unread: x.media_unread,
            silent: x.silent,
            post: x.post,
            legacy: x.legacy,
            id: x.id,
            from_id: x.from_id.map(user_peer),
            peer_id: x.to_id,
            reply_to: x.reply_to_msg_id.map(reply_header),
            date: x.date,
            action: x.action,
            ttl_period: None,
        }
        .into()
    }
}

/// `message#452c0e65`, before threads and 64-bit ids.
///
/// The sender is a user id, the chat is `to_id`, and a reply is only the id
/// of the message replied to.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageLayer118 {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub from_scheduled: bool,
    pub legacy: bool,
    pub edit_hide: bool,
    pub id: i32,
    pub from_id: Option<i32>,
    pub to_id: enums::Peer,
    pub fwd_from: Option<enums::MessageFwdHeader>,
    pub via_bot_id: Option<i32>,
    pub reply_to_msg_id: Option<i32>,
    pub date: i32,
    pub message: String,
    pub media: Option<enums::MessageMedia>,
    pub reply_markup: Option<enums::ReplyMarkup>,
    pub entities: Option<Vec<enums::MessageEntity>>,
    pub views: Option<i32>,
    pub edit_date: Option<i32>,
    pub post_author: Option<String>,
    pub grouped_id: Option<i64>,
    pub restriction_reason: Option<Vec<enums::RestrictionReason>>,
}

tl_id!(MessageLayer118 => 0x452c0e65, "message");

impl Deserializable for MessageLayer118 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            out: flags.has(1),
            mentioned: flags.has(4),
            media_unread: flags.has(5),
            silent: flags.has(13),
            post: flags.has(14),
            from_scheduled: flags.has(18),
            legacy: flags.has(19),
            edit_hide: flags.has(21),
            id: i32::deserialize(buf)?,
            from_id: flags.read(8, buf)?,
            to_id: enums::Peer::deserialize(buf)?,
            fwd_from: flags.read(2, buf)?,
            via_bot_id: flags.read(11, buf)?,
            reply_to_msg_id: flags.read(3, buf)?,
            date: i32::deserialize(buf)?,
            message: String::deserialize(buf)?,
            media: flags.read(9, buf)?,
            reply_markup: flags.read(6, buf)?,
            entities: flags.read(7, buf)?,
            views: flags.read(10, buf)?,
            edit_date: flags.read(15, buf)?,
            post_author: flags.read(16, buf)?,
            grouped_id: flags.read(17, buf)?,
            restriction_reason: flags.read(22, buf)?,
        })
    }
}

impl From<MessageLayer118> for enums::Message {
    fn from(x: MessageLayer118) -> Self {
        let mut message = types::Message::new(x.id, x.to_id, x.date, x.message);
        message.out = x.out;
        message.mentioned = x.mentioned;
        message.media_unread = x.media_unread;
        message.silent = x.silent;
        message.post = x.post;
        message.from_scheduled = x.from_scheduled;
        message.legacy = x.legacy;
        message.edit_hide = x.edit_hide;
        message.from_id = x.from_id.map(user_peer);
        message.fwd_from = x.fwd_from;
        message.via_bot_id = x.via_bot_id.map(i64::from);
        message.reply_to = x.reply_to_msg_id.map(reply_header);
        message.media = x.media;
        message.reply_markup = x.reply_markup;
        message.entities = x.entities;
        // forwards were not counted yet
        message.views = x.views.map(|views| types::ViewCounters { views, forwards: 0 });
        message.edit_date = x.edit_date;
        message.post_author = x.post_author;
        message.grouped_id = x.grouped_id;
        message.restriction_reason = x.restriction_reason;
        message.into()
    }
}

tl_revision! {
    /// `message#58ae39c9`, with a 32-bit `via_bot_id` and no reactions.
    pub struct MessageLayer132(types::Message) => 0x58ae39c9, "message";
    into enums::Message;
    read = types::Message::read_revision(false, false);
}

tl_revision! {
    /// `message#85d6cbe2`, the last message without reactions.
    pub struct MessageLayer135(types::Message) => 0x85d6cbe2, "message";
    into enums::Message;
    read = types::Message::read_revision(true, false);
}
