//! Messages and everything a message owns.

use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

// ─── MessageEntity ───────────────────────────────────────────────────────────

tl_struct! {
    /// `messageEntityUnknown#bb92ba95 offset:int length:int = MessageEntity;`
    pub struct MessageEntityUnknown => 0xbb92ba95, "messageEntityUnknown" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityMention#fa04579d offset:int length:int = MessageEntity;`
    pub struct MessageEntityMention => 0xfa04579d, "messageEntityMention" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityHashtag#6f635b0d offset:int length:int = MessageEntity;`
    pub struct MessageEntityHashtag => 0x6f635b0d, "messageEntityHashtag" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityBold#bd610bc9 offset:int length:int = MessageEntity;`
    pub struct MessageEntityBold => 0xbd610bc9, "messageEntityBold" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityItalic#826f8b60 offset:int length:int = MessageEntity;`
    pub struct MessageEntityItalic => 0x826f8b60, "messageEntityItalic" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityCode#28a20571 offset:int length:int = MessageEntity;`
    pub struct MessageEntityCode => 0x28a20571, "messageEntityCode" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityPre#73924be0 offset:int length:int language:string = MessageEntity;`
    pub struct MessageEntityPre => 0x73924be0, "messageEntityPre" {
        pub offset: i32,
        pub length: i32,
        pub language: String,
    }
}

tl_struct! {
    /// `messageEntityUrl#6ed02538 offset:int length:int = MessageEntity;`
    pub struct MessageEntityUrl => 0x6ed02538, "messageEntityUrl" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityTextUrl#76a6d327 offset:int length:int url:string = MessageEntity;`
    pub struct MessageEntityTextUrl => 0x76a6d327, "messageEntityTextUrl" {
        pub offset: i32,
        pub length: i32,
        pub url: String,
    }
}

tl_struct! {
    /// `messageEntityMentionName#dc7b1140 offset:int length:int user_id:long = MessageEntity;`
    pub struct MessageEntityMentionName => 0xdc7b1140, "messageEntityMentionName" {
        pub offset: i32,
        pub length: i32,
        pub user_id: i64,
    }
}

tl_struct! {
    /// `messageEntityStrike#bf0693d4 offset:int length:int = MessageEntity;`
    pub struct MessageEntityStrike => 0xbf0693d4, "messageEntityStrike" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityUnderline#9c4e7e8b offset:int length:int = MessageEntity;`
    pub struct MessageEntityUnderline => 0x9c4e7e8b, "messageEntityUnderline" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntitySpoiler#32ca960f offset:int length:int = MessageEntity;`
    pub struct MessageEntitySpoiler => 0x32ca960f, "messageEntitySpoiler" {
        pub offset: i32,
        pub length: i32,
    }
}

tl_struct! {
    /// `messageEntityCustomEmoji#c8cf05f8 offset:int length:int document_id:long = MessageEntity;`
    pub struct MessageEntityCustomEmoji => 0xc8cf05f8, "messageEntityCustomEmoji" {
        pub offset: i32,
        pub length: i32,
        pub document_id: i64,
    }
}

// ─── Headers ─────────────────────────────────────────────────────────────────

/// `messageReplyHeader#a6d57763 flags:# reply_to_scheduled:flags.2?true
/// forum_topic:flags.3?true reply_to_msg_id:int reply_to_peer_id:flags.0?Peer
/// reply_to_top_id:flags.1?int = MessageReplyHeader;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageReplyHeader {
    pub reply_to_scheduled: bool,
    pub forum_topic: bool,
    pub reply_to_msg_id: i32,
    pub reply_to_peer_id: Option<enums::Peer>,
    pub reply_to_top_id: Option<i32>,
}

tl_id!(MessageReplyHeader => 0xa6d57763, "messageReplyHeader");

impl MessageReplyHeader {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.reply_to_peer_id.is_some())
            .with(1, self.reply_to_top_id.is_some())
            .with(2, self.reply_to_scheduled)
            .with(3, self.forum_topic)
    }
}

impl Serializable for MessageReplyHeader {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.reply_to_msg_id.serialize(buf);
        self.reply_to_peer_id.serialize(buf);
        self.reply_to_top_id.serialize(buf);
    }
}

impl Deserializable for MessageReplyHeader {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            reply_to_scheduled: flags.has(2),
            forum_topic: flags.has(3),
            reply_to_msg_id: i32::deserialize(buf)?,
            reply_to_peer_id: flags.read(0, buf)?,
            reply_to_top_id: flags.read(1, buf)?,
        })
    }
}

/// Where a forwarded message was saved from. Both halves share one flag bit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedFrom {
    pub peer: enums::Peer,
    pub msg_id: i32,
}

impl Serializable for SavedFrom {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.peer.serialize(buf);
        self.msg_id.serialize(buf);
    }
}

impl Deserializable for SavedFrom {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            peer: enums::Peer::deserialize(buf)?,
            msg_id: i32::deserialize(buf)?,
        })
    }
}

/// `messageFwdHeader#5f777dce flags:# imported:flags.7?true from_id:flags.0?Peer
/// from_name:flags.5?string date:int channel_post:flags.2?int
/// post_author:flags.3?string saved_from_peer:flags.4?Peer
/// saved_from_msg_id:flags.4?int psa_type:flags.6?string = MessageFwdHeader;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageFwdHeader {
    pub imported: bool,
    pub from_id: Option<enums::Peer>,
    pub from_name: Option<String>,
    pub date: i32,
    pub channel_post: Option<i32>,
    pub post_author: Option<String>,
    pub saved_from: Option<SavedFrom>,
    pub psa_type: Option<String>,
}

tl_id!(MessageFwdHeader => 0x5f777dce, "messageFwdHeader");

impl MessageFwdHeader {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.from_id.is_some())
            .with(2, self.channel_post.is_some())
            .with(3, self.post_author.is_some())
            .with(4, self.saved_from.is_some())
            .with(5, self.from_name.is_some())
            .with(6, self.psa_type.is_some())
            .with(7, self.imported)
    }
}

impl Serializable for MessageFwdHeader {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.from_id.serialize(buf);
        self.from_name.serialize(buf);
        self.date.serialize(buf);
        self.channel_post.serialize(buf);
        self.post_author.serialize(buf);
        self.saved_from.serialize(buf);
        self.psa_type.serialize(buf);
    }
}

impl Deserializable for MessageFwdHeader {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            imported: flags.has(7),
            from_id: flags.read(0, buf)?,
            from_name: flags.read(5, buf)?,
            date: i32::deserialize(buf)?,
            channel_post: flags.read(2, buf)?,
            post_author: flags.read(3, buf)?,
            saved_from: flags.read(4, buf)?,
            psa_type: flags.read(6, buf)?,
        })
    }
}

/// `messageReplies#83d60fc2 flags:# comments:flags.0?true replies:int
/// replies_pts:int recent_repliers:flags.1?Vector<Peer> channel_id:flags.0?long
/// max_id:flags.2?int read_max_id:flags.3?int = MessageReplies;`
///
/// A thread is a comment section exactly when it names its discussion
/// channel, so `comments` is derived from `channel_id`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageReplies {
    pub replies: i32,
    pub replies_pts: i32,
    pub recent_repliers: Option<Vec<enums::Peer>>,
    pub channel_id: Option<i64>,
    pub max_id: Option<i32>,
    pub read_max_id: Option<i32>,
}

tl_id!(MessageReplies => 0x83d60fc2, "messageReplies");

impl MessageReplies {
    pub fn comments(&self) -> bool {
        self.channel_id.is_some()
    }

    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.channel_id.is_some())
            .with(1, self.recent_repliers.is_some())
            .with(2, self.max_id.is_some())
            .with(3, self.read_max_id.is_some())
    }

    pub(crate) fn read_revision(buf: Buffer, long_channel_id: bool) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            replies: i32::deserialize(buf)?,
            replies_pts: i32::deserialize(buf)?,
            recent_repliers: flags.read(1, buf)?,
            channel_id: if !flags.has(0) {
                None
            } else if long_channel_id {
                Some(i64::deserialize(buf)?)
            } else {
                Some(i32::deserialize(buf)?.into())
            },
            max_id: flags.read(2, buf)?,
            read_max_id: flags.read(3, buf)?,
        })
    }
}

impl Serializable for MessageReplies {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.replies.serialize(buf);
        self.replies_pts.serialize(buf);
        self.recent_repliers.serialize(buf);
        self.channel_id.serialize(buf);
        self.max_id.serialize(buf);
        self.read_max_id.serialize(buf);
    }
}

impl Deserializable for MessageReplies {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Self::read_revision(buf, true)
    }
}

// ─── MessageAction ───────────────────────────────────────────────────────────

tl_unit!(
    /// `messageActionEmpty#b6aef7b0 = MessageAction;`
    MessageActionEmpty => 0xb6aef7b0, "messageActionEmpty"
);

tl_struct! {
    /// `messageActionChatCreate#bd47cbad title:string users:Vector<long> = MessageAction;`
    pub struct MessageActionChatCreate => 0xbd47cbad, "messageActionChatCreate" {
        pub title: String,
        pub users: Vec<i64>,
    }
}

tl_struct! {
    /// `messageActionChatEditTitle#b5a1ce5a title:string = MessageAction;`
    pub struct MessageActionChatEditTitle => 0xb5a1ce5a, "messageActionChatEditTitle" {
        pub title: String,
    }
}

tl_struct! {
    /// `messageActionChatEditPhoto#7fcb13a8 photo:Photo = MessageAction;`
    pub struct MessageActionChatEditPhoto => 0x7fcb13a8, "messageActionChatEditPhoto" {
        pub photo: enums::Photo,
    }
}

tl_unit!(
    /// `messageActionChatDeletePhoto#95e3fbef = MessageAction;`
    MessageActionChatDeletePhoto => 0x95e3fbef, "messageActionChatDeletePhoto"
);

tl_struct! {
    /// `messageActionChatAddUser#15cefd00 users:Vector<long> = MessageAction;`
    pub struct MessageActionChatAddUser => 0x15cefd00, "messageActionChatAddUser" {
        pub users: Vec<i64>,
    }
}

tl_struct! {
    /// `messageActionChatDeleteUser#a43f30cc user_id:long = MessageAction;`
    pub struct MessageActionChatDeleteUser => 0xa43f30cc, "messageActionChatDeleteUser" {
        pub user_id: i64,
    }
}

tl_struct! {
    /// `messageActionChatJoinedByLink#031224c3 inviter_id:long = MessageAction;`
    pub struct MessageActionChatJoinedByLink => 0x031224c3, "messageActionChatJoinedByLink" {
        pub inviter_id: i64,
    }
}

tl_struct! {
    /// `messageActionChannelCreate#95d2ac92 title:string = MessageAction;`
    pub struct MessageActionChannelCreate => 0x95d2ac92, "messageActionChannelCreate" {
        pub title: String,
    }
}

tl_unit!(
    /// `messageActionPinMessage#94bd38ed = MessageAction;`
    MessageActionPinMessage => 0x94bd38ed, "messageActionPinMessage"
);

tl_unit!(
    /// `messageActionHistoryClear#9fbab604 = MessageAction;`
    MessageActionHistoryClear => 0x9fbab604, "messageActionHistoryClear"
);

tl_struct! {
    /// `messageActionCustomAction#fae69f56 message:string = MessageAction;`
    pub struct MessageActionCustomAction => 0xfae69f56, "messageActionCustomAction" {
        pub message: String,
    }
}

// ─── Message ─────────────────────────────────────────────────────────────────

/// `messageEmpty#90a6ca84 flags:# id:int peer_id:flags.0?Peer = Message;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEmpty {
    pub id: i32,
    pub peer_id: Option<enums::Peer>,
}

tl_id!(MessageEmpty => 0x90a6ca84, "messageEmpty");

impl MessageEmpty {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.peer_id.is_some())
    }
}

impl Serializable for MessageEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.id.serialize(buf);
        self.peer_id.serialize(buf);
    }
}

impl Deserializable for MessageEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            id: i32::deserialize(buf)?,
            peer_id: flags.read(0, buf)?,
        })
    }
}

/// `messageService#2b085862`, a service notice such as "user joined".
///
/// `from_id` is filled from `peer_id` after decoding when the wire omits it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageService {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub legacy: bool,
    pub id: i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: enums::Peer,
    pub reply_to: Option<enums::MessageReplyHeader>,
    pub date: i32,
    pub action: enums::MessageAction,
    pub ttl_period: Option<i32>,
}

tl_id!(MessageService => 0x2b085862, "messageService");

impl MessageService {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(1, self.out)
            .with(3, self.reply_to.is_some())
            .with(4, self.mentioned)
            .with(5, self.media_unread)
            .with(8, self.from_id.is_some())
            .with(13, self.silent)
            .with(14, self.post)
            .with(19, self.legacy)
            .with(25, self.ttl_period.is_some())
    }
}

impl Serializable for MessageService {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.id.serialize(buf);
        self.from_id.serialize(buf);
        self.peer_id.serialize(buf);
        self.reply_to.serialize(buf);
        self.date.serialize(buf);
        self.action.serialize(buf);
        self.ttl_period.serialize(buf);
    }
}

impl Deserializable for MessageService {
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
            peer_id: enums::Peer::deserialize(buf)?,
            reply_to: flags.read(3, buf)?,
            date: i32::deserialize(buf)?,
            action: enums::MessageAction::deserialize(buf)?,
            ttl_period: flags.read(25, buf)?,
        })
    }
}

/// View and forward counters of a channel post. Both share one flag bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewCounters {
    pub views: i32,
    pub forwards: i32,
}

impl Serializable for ViewCounters {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.views.serialize(buf);
        self.forwards.serialize(buf);
    }
}

impl Deserializable for ViewCounters {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            views: i32::deserialize(buf)?,
            forwards: i32::deserialize(buf)?,
        })
    }
}

/// `message#38116ee0`, an ordinary message.
///
/// `from_id` is filled from `peer_id` after decoding when the wire omits it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub from_scheduled: bool,
    pub legacy: bool,
    pub edit_hide: bool,
    pub pinned: bool,
    pub noforwards: bool,
    pub id: i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: enums::Peer,
    pub fwd_from: Option<enums::MessageFwdHeader>,
    pub via_bot_id: Option<i64>,
    pub reply_to: Option<enums::MessageReplyHeader>,
    pub date: i32,
    pub message: String,
    pub media: Option<enums::MessageMedia>,
    pub reply_markup: Option<enums::ReplyMarkup>,
    pub entities: Option<Vec<enums::MessageEntity>>,
    pub views: Option<ViewCounters>,
    pub replies: Option<enums::MessageReplies>,
    pub edit_date: Option<i32>,
    pub post_author: Option<String>,
    pub grouped_id: Option<i64>,
    pub reactions: Option<enums::MessageReactions>,
    pub restriction_reason: Option<Vec<enums::RestrictionReason>>,
    pub ttl_period: Option<i32>,
}

tl_id!(Message => 0x38116ee0, "message");

impl Message {
    /// A plain text message with every optional field absent.
    pub fn new(id: i32, peer_id: enums::Peer, date: i32, message: impl Into<String>) -> Self {
        Self {
            out: false,
            mentioned: false,
            media_unread: false,
            silent: false,
            post: false,
            from_scheduled: false,
            legacy: false,
            edit_hide: false,
            pinned: false,
            noforwards: false,
            id,
            from_id: None,
            peer_id,
            fwd_from: None,
            via_bot_id: None,
            reply_to: None,
            date,
            message: message.into(),
            media: None,
            reply_markup: None,
            entities: None,
            views: None,
            replies: None,
            edit_date: None,
            post_author: None,
            grouped_id: None,
            reactions: None,
            restriction_reason: None,
            ttl_period: None,
        }
    }

    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(1, self.out)
            .with(2, self.fwd_from.is_some())
            .with(3, self.reply_to.is_some())
            .with(4, self.mentioned)
            .with(5, self.media_unread)
            .with(6, self.reply_markup.is_some())
            .with(7, self.entities.is_some())
            .with(8, self.from_id.is_some())
            .with(9, self.media.is_some())
            .with(10, self.views.is_some())
            .with(11, self.via_bot_id.is_some())
            .with(13, self.silent)
            .with(14, self.post)
            .with(15, self.edit_date.is_some())
            .with(16, self.post_author.is_some())
            .with(17, self.grouped_id.is_some())
            .with(18, self.from_scheduled)
            .with(19, self.legacy)
            .with(20, self.reactions.is_some())
            .with(21, self.edit_hide)
            .with(22, self.restriction_reason.is_some())
            .with(23, self.replies.is_some())
            .with(24, self.pinned)
            .with(25, self.ttl_period.is_some())
            .with(26, self.noforwards)
    }

    /// Read the body shared by `message` revisions since 64-bit peer ids.
    ///
    /// `noforwards` arrived in the same layer that widened `via_bot_id` to a
    /// `long`. Bits a layout lacks are ignored, together with their fields.
    pub(crate) fn read_revision(buf: Buffer, has_noforwards: bool, has_reactions: bool) -> Result<Self> {
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
            pinned: flags.has(24),
            noforwards: has_noforwards && flags.has(26),
            id: i32::deserialize(buf)?,
            from_id: flags.read(8, buf)?,
            peer_id: enums::Peer::deserialize(buf)?,
            fwd_from: flags.read(2, buf)?,
            via_bot_id: if has_noforwards {
                flags.read(11, buf)?
            } else {
                flags.read::<i32>(11, buf)?.map(i64::from)
            },
            reply_to: flags.read(3, buf)?,
            date: i32::deserialize(buf)?,
            message: String::deserialize(buf)?,
            media: flags.read(9, buf)?,
            reply_markup: flags.read(6, buf)?,
            entities: flags.read(7, buf)?,
            views: flags.read(10, buf)?,
            replies: flags.read(23, buf)?,
            edit_date: flags.read(15, buf)?,
            post_author: flags.read(16, buf)?,
            grouped_id: flags.read(17, buf)?,
            reactions: if has_reactions { flags.read(20, buf)? } else { None },
            restriction_reason: flags.read(22, buf)?,
            ttl_period: flags.read(25, buf)?,
        })
    }
}

impl Serializable for Message {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.id.serialize(buf);
        self.from_id.serialize(buf);
        self.peer_id.serialize(buf);
        self.fwd_from.serialize(buf);
        self.via_bot_id.serialize(buf);
        self.reply_to.serialize(buf);
        self.date.serialize(buf);
        self.message.serialize(buf);
        self.media.serialize(buf);
        self.reply_markup.serialize(buf);
        self.entities.serialize(buf);
        self.views.serialize(buf);
        self.replies.serialize(buf);
        self.edit_date.serialize(buf);
        self.post_author.serialize(buf);
        self.grouped_id.serialize(buf);
        self.reactions.serialize(buf);
        self.restriction_reason.serialize(buf);
        self.ttl_period.serialize(buf);
    }
}

impl Deserializable for Message {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Self::read_revision(buf, true, true)
    }
}
