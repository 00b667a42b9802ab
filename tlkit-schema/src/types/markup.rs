//! Bot keyboards attached to messages.

use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

tl_struct! {
    /// `keyboardButton#a2fa4880 text:string = KeyboardButton;`
    pub struct KeyboardButton => 0xa2fa4880, "keyboardButton" {
        pub text: String,
    }
}

tl_struct! {
    /// `keyboardButtonUrl#258aff05 text:string url:string = KeyboardButton;`
    pub struct KeyboardButtonUrl => 0x258aff05, "keyboardButtonUrl" {
        pub text: String,
        pub url: String,
    }
}

/// `keyboardButtonCallback#35bbdb6b flags:# requires_password:flags.0?true
/// text:string data:bytes = KeyboardButton;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonCallback {
    pub requires_password: bool,
    pub text: String,
    pub data: Vec<u8>,
}

tl_id!(KeyboardButtonCallback => 0x35bbdb6b, "keyboardButtonCallback");

impl KeyboardButtonCallback {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.requires_password)
    }
}

impl Serializable for KeyboardButtonCallback {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.text.serialize(buf);
        self.data.serialize(buf);
    }
}

impl Deserializable for KeyboardButtonCallback {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            requires_password: flags.has(0),
            text: String::deserialize(buf)?,
            data: Vec::<u8>::deserialize(buf)?,
        })
    }
}

tl_struct! {
    /// `keyboardButtonRequestPhone#b16a6c29 text:string = KeyboardButton;`
    pub struct KeyboardButtonRequestPhone => 0xb16a6c29, "keyboardButtonRequestPhone" {
        pub text: String,
    }
}

/// `keyboardButtonSwitchInline#0568a748 flags:# same_peer:flags.0?true
/// text:string query:string = KeyboardButton;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonSwitchInline {
    pub same_peer: bool,
    pub text: String,
    pub query: String,
}

tl_id!(KeyboardButtonSwitchInline => 0x0568a748, "keyboardButtonSwitchInline");

impl KeyboardButtonSwitchInline {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.same_peer)
    }
}

impl Serializable for KeyboardButtonSwitchInline {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.text.serialize(buf);
        self.query.serialize(buf);
    }
}

impl Deserializable for KeyboardButtonSwitchInline {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            same_peer: flags.has(0),
            text: String::deserialize(buf)?,
            query: String::deserialize(buf)?,
        })
    }
}

tl_struct! {
    /// `keyboardButtonRow#77608b83 buttons:Vector<KeyboardButton> = KeyboardButtonRow;`
    pub struct KeyboardButtonRow => 0x77608b83, "keyboardButtonRow" {
        pub buttons: Vec<enums::KeyboardButton>,
    }
}

// ─── ReplyMarkup ─────────────────────────────────────────────────────────────

/// `replyKeyboardHide#a03e5b85 flags:# selective:flags.2?true = ReplyMarkup;`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyKeyboardHide {
    pub selective: bool,
}

tl_id!(ReplyKeyboardHide => 0xa03e5b85, "replyKeyboardHide");

impl ReplyKeyboardHide {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(2, self.selective)
    }
}

impl Serializable for ReplyKeyboardHide {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
    }
}

impl Deserializable for ReplyKeyboardHide {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self { selective: flags.has(2) })
    }
}

/// `replyKeyboardForceReply#86b40b08 flags:# single_use:flags.1?true
/// selective:flags.2?true placeholder:flags.3?string = ReplyMarkup;`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyKeyboardForceReply {
    pub single_use: bool,
    pub selective: bool,
    pub placeholder: Option<String>,
}

tl_id!(ReplyKeyboardForceReply => 0x86b40b08, "replyKeyboardForceReply");

impl ReplyKeyboardForceReply {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(1, self.single_use)
            .with(2, self.selective)
            .with(3, self.placeholder.is_some())
    }
}

impl Serializable for ReplyKeyboardForceReply {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.placeholder.serialize(buf);
    }
}

impl Deserializable for ReplyKeyboardForceReply {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            single_use: flags.has(1),
            selective: flags.has(2),
            placeholder: flags.read(3, buf)?,
        })
    }
}

/// `replyKeyboardMarkup#85dd99d1 flags:# resize:flags.0?true single_use:flags.1?true
/// selective:flags.2?true persistent:flags.4?true rows:Vector<KeyboardButtonRow>
/// placeholder:flags.3?string = ReplyMarkup;`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyKeyboardMarkup {
    pub resize: bool,
    pub single_use: bool,
    pub selective: bool,
    pub persistent: bool,
    pub rows: Vec<enums::KeyboardButtonRow>,
    pub placeholder: Option<String>,
}

tl_id!(ReplyKeyboardMarkup => 0x85dd99d1, "replyKeyboardMarkup");

impl ReplyKeyboardMarkup {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.resize)
            .with(1, self.single_use)
            .with(2, self.selective)
            .with(3, self.placeholder.is_some())
            .with(4, self.persistent)
    }
}

impl Serializable for ReplyKeyboardMarkup {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.rows.serialize(buf);
        self.placeholder.serialize(buf);
    }
}

impl Deserializable for ReplyKeyboardMarkup {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            resize: flags.has(0),
            single_use: flags.has(1),
            selective: flags.has(2),
            persistent: flags.has(4),
            rows: Vec::deserialize(buf)?,
            placeholder: flags.read(3, buf)?,
        })
    }
}

tl_struct! {
    /// `replyInlineMarkup#48a30254 rows:Vector<KeyboardButtonRow> = ReplyMarkup;`
    pub struct ReplyInlineMarkup => 0x48a30254, "replyInlineMarkup" {
        pub rows: Vec<enums::KeyboardButtonRow>,
    }
}
