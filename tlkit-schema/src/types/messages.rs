//! `messages.*` constructors.

use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

tl_struct! {
    /// `messages.messages#8c718e87 messages:Vector<Message> chats:Vector<Chat>
    /// users:Vector<User> = messages.Messages;`
    pub struct Messages => 0x8c718e87, "messages.messages" {
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}

/// `messages.messagesSlice#3a54685e flags:# inexact:flags.1?true count:int
/// next_rate:flags.0?int offset_id_offset:flags.2?int messages:Vector<Message>
/// chats:Vector<Chat> users:Vector<User> = messages.Messages;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessagesSlice {
    pub inexact: bool,
    pub count: i32,
    pub next_rate: Option<i32>,
    pub offset_id_offset: Option<i32>,
    pub messages: Vec<enums::Message>,
    pub chats: Vec<enums::Chat>,
    pub users: Vec<enums::User>,
}

tl_id!(MessagesSlice => 0x3a54685e, "messages.messagesSlice");

impl MessagesSlice {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.next_rate.is_some())
            .with(1, self.inexact)
            .with(2, self.offset_id_offset.is_some())
    }
}

impl Serializable for MessagesSlice {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.count.serialize(buf);
        self.next_rate.serialize(buf);
        self.offset_id_offset.serialize(buf);
        self.messages.serialize(buf);
        self.chats.serialize(buf);
        self.users.serialize(buf);
    }
}

impl Deserializable for MessagesSlice {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            inexact: flags.has(1),
            count: i32::deserialize(buf)?,
            next_rate: flags.read(0, buf)?,
            offset_id_offset: flags.read(2, buf)?,
            messages: Vec::deserialize(buf)?,
            chats: Vec::deserialize(buf)?,
            users: Vec::deserialize(buf)?,
        })
    }
}

/// `messages.channelMessages#64479808 flags:# inexact:flags.1?true pts:int
/// count:int offset_id_offset:flags.2?int messages:Vector<Message>
/// chats:Vector<Chat> users:Vector<User> = messages.Messages;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelMessages {
    pub inexact: bool,
    pub pts: i32,
    pub count: i32,
    pub offset_id_offset: Option<i32>,
    pub messages: Vec<enums::Message>,
    pub chats: Vec<enums::Chat>,
    pub users: Vec<enums::User>,
}

tl_id!(ChannelMessages => 0x64479808, "messages.channelMessages");

impl ChannelMessages {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(1, self.inexact)
            .with(2, self.offset_id_offset.is_some())
    }
}

impl Serializable for ChannelMessages {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.pts.serialize(buf);
        self.count.serialize(buf);
        self.offset_id_offset.serialize(buf);
        self.messages.serialize(buf);
        self.chats.serialize(buf);
        self.users.serialize(buf);
    }
}

impl Deserializable for ChannelMessages {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            inexact: flags.has(1),
            pts: i32::deserialize(buf)?,
            count: i32::deserialize(buf)?,
            offset_id_offset: flags.read(2, buf)?,
            messages: Vec::deserialize(buf)?,
            chats: Vec::deserialize(buf)?,
            users: Vec::deserialize(buf)?,
        })
    }
}

tl_struct! {
    /// `messages.messagesNotModified#74535f21 count:int = messages.Messages;`
    pub struct MessagesNotModified => 0x74535f21, "messages.messagesNotModified" {
        pub count: i32,
    }
}
