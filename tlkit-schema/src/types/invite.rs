use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

tl_struct! {
    /// `chatInviteAlready#5a686d7c chat:Chat = ChatInvite;`
    pub struct ChatInviteAlready => 0x5a686d7c, "chatInviteAlready" {
        pub chat: enums::Chat,
    }
}

tl_struct! {
    /// `chatInvitePeek#61695cb0 chat:Chat expires:int = ChatInvite;`
    pub struct ChatInvitePeek => 0x61695cb0, "chatInvitePeek" {
        pub chat: enums::Chat,
        pub expires: i32,
    }
}

/// `chatInvite#300c44c1`, an invite to a chat the user is not in yet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatInvite {
    pub channel: bool,
    pub broadcast: bool,
    pub public: bool,
    pub megagroup: bool,
    pub request_needed: bool,
    pub title: String,
    pub about: Option<String>,
    pub photo: enums::Photo,
    pub participants_count: i32,
    pub participants: Option<Vec<enums::User>>,
}

tl_id!(ChatInvite => 0x300c44c1, "chatInvite");

impl ChatInvite {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.channel)
            .with(1, self.broadcast)
            .with(2, self.public)
            .with(3, self.megagroup)
            .with(4, self.participants.is_some())
            .with(5, self.about.is_some())
            .with(6, self.request_needed)
    }

    /// Before join requests, invites had neither `request_needed` nor `about`.
    pub(crate) fn read_revision(buf: Buffer, has_about: bool) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            channel: flags.has(0),
            broadcast: flags.has(1),
            public: flags.has(2),
            megagroup: flags.has(3),
            request_needed: has_about && flags.has(6),
            title: String::deserialize(buf)?,
            about: if has_about { flags.read(5, buf)? } else { None },
            photo: enums::Photo::deserialize(buf)?,
            participants_count: i32::deserialize(buf)?,
            participants: flags.read(4, buf)?,
        })
    }
}

impl Serializable for ChatInvite {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.title.serialize(buf);
        self.about.serialize(buf);
        self.photo.serialize(buf);
        self.participants_count.serialize(buf);
        self.participants.serialize(buf);
    }
}

impl Deserializable for ChatInvite {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Self::read_revision(buf, true)
    }
}
