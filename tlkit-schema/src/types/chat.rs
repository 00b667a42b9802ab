//! Basic groups, channels and the rights attached to them.

use bitflags::bitflags;
use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

// ─── ChatPhoto ───────────────────────────────────────────────────────────────

tl_unit!(
    /// `chatPhotoEmpty#37c1011c = ChatPhoto;`
    ChatPhotoEmpty => 0x37c1011c, "chatPhotoEmpty"
);

/// `chatPhoto#1c6e1c11 flags:# has_video:flags.0?true photo_id:long
/// stripped_thumb:flags.1?bytes dc_id:int = ChatPhoto;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatPhoto {
    pub has_video: bool,
    pub photo_id: i64,
    pub stripped_thumb: Option<Vec<u8>>,
    pub dc_id: i32,
}

tl_id!(ChatPhoto => 0x1c6e1c11, "chatPhoto");

impl ChatPhoto {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.has_video)
            .with(1, self.stripped_thumb.is_some())
    }
}

impl Serializable for ChatPhoto {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.photo_id.serialize(buf);
        self.stripped_thumb.serialize(buf);
        self.dc_id.serialize(buf);
    }
}

impl Deserializable for ChatPhoto {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            has_video: flags.has(0),
            photo_id: i64::deserialize(buf)?,
            stripped_thumb: flags.read(1, buf)?,
            dc_id: i32::deserialize(buf)?,
        })
    }
}

// ─── Rights ──────────────────────────────────────────────────────────────────

bitflags! {
    /// `chatAdminRights#5fb224d5 flags:# … = ChatAdminRights;`
    ///
    /// The constructor is nothing but its flags word. Bits this layer does not
    /// name are kept as-is so a re-encode never drops them.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ChatAdminRights: u32 {
        const CHANGE_INFO     = 1 << 0;
        const POST_MESSAGES   = 1 << 1;
        const EDIT_MESSAGES   = 1 << 2;
        const DELETE_MESSAGES = 1 << 3;
        const BAN_USERS       = 1 << 4;
        const INVITE_USERS    = 1 << 5;
        const PIN_MESSAGES    = 1 << 7;
        const ADD_ADMINS      = 1 << 9;
        const ANONYMOUS       = 1 << 10;
        const MANAGE_CALL     = 1 << 11;
        const OTHER           = 1 << 12;
        const MANAGE_TOPICS   = 1 << 13;
    }
}

tl_id!(ChatAdminRights => 0x5fb224d5, "chatAdminRights");

impl ChatAdminRights {
    pub fn flags(&self) -> Flags {
        Flags::from_bits(self.bits())
    }
}

impl Serializable for ChatAdminRights {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
    }
}

impl Deserializable for ChatAdminRights {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Flags::deserialize(buf).map(|f| Self::from_bits_retain(f.bits()))
    }
}

bitflags! {
    /// Bits of `chatBannedRights`; unknown bits are retained.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BannedRights: u32 {
        const VIEW_MESSAGES = 1 << 0;
        const SEND_MESSAGES = 1 << 1;
        const SEND_MEDIA    = 1 << 2;
        const SEND_STICKERS = 1 << 3;
        const SEND_GIFS     = 1 << 4;
        const SEND_GAMES    = 1 << 5;
        const SEND_INLINE   = 1 << 6;
        const EMBED_LINKS   = 1 << 7;
        const SEND_POLLS    = 1 << 8;
        const CHANGE_INFO   = 1 << 10;
        const INVITE_USERS  = 1 << 15;
        const PIN_MESSAGES  = 1 << 17;
        const MANAGE_TOPICS = 1 << 18;
    }
}

/// `chatBannedRights#9f120418 flags:# … until_date:int = ChatBannedRights;`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatBannedRights {
    pub rights: BannedRights,
    /// Unix time the restriction lifts; `0` means forever.
    pub until_date: i32,
}

tl_id!(ChatBannedRights => 0x9f120418, "chatBannedRights");

impl ChatBannedRights {
    pub fn flags(&self) -> Flags {
        Flags::from_bits(self.rights.bits())
    }
}

impl Serializable for ChatBannedRights {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.until_date.serialize(buf);
    }
}

impl Deserializable for ChatBannedRights {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            rights: BannedRights::from_bits_retain(flags.bits()),
            until_date: i32::deserialize(buf)?,
        })
    }
}

// ─── Chat ────────────────────────────────────────────────────────────────────

tl_struct! {
    /// `chatEmpty#29562865 id:long = Chat;`
    pub struct ChatEmpty => 0x29562865, "chatEmpty" {
        pub id: i64,
    }
}

/// `chat#41cbf256`, a basic group.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chat {
    pub creator: bool,
    pub left: bool,
    pub deactivated: bool,
    pub call_active: bool,
    pub call_not_empty: bool,
    pub noforwards: bool,
    pub id: i64,
    pub title: String,
    pub photo: enums::ChatPhoto,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
    pub migrated_to: Option<enums::InputChannel>,
    pub admin_rights: Option<enums::ChatAdminRights>,
    pub default_banned_rights: Option<enums::ChatBannedRights>,
}

tl_id!(Chat => 0x41cbf256, "chat");

impl Chat {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.creator)
            .with(2, self.left)
            .with(5, self.deactivated)
            .with(6, self.migrated_to.is_some())
            .with(14, self.admin_rights.is_some())
            .with(18, self.default_banned_rights.is_some())
            .with(23, self.call_active)
            .with(24, self.call_not_empty)
            .with(25, self.noforwards)
    }
}

impl Serializable for Chat {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.id.serialize(buf);
        self.title.serialize(buf);
        self.photo.serialize(buf);
        self.participants_count.serialize(buf);
        self.date.serialize(buf);
        self.version.serialize(buf);
        self.migrated_to.serialize(buf);
        self.admin_rights.serialize(buf);
        self.default_banned_rights.serialize(buf);
    }
}

impl Deserializable for Chat {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            creator: flags.has(0),
            left: flags.has(2),
            deactivated: flags.has(5),
            call_active: flags.has(23),
            call_not_empty: flags.has(24),
            noforwards: flags.has(25),
            id: i64::deserialize(buf)?,
            title: String::deserialize(buf)?,
            photo: enums::ChatPhoto::deserialize(buf)?,
            participants_count: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            version: i32::deserialize(buf)?,
            migrated_to: flags.read(6, buf)?,
            admin_rights: flags.read(14, buf)?,
            default_banned_rights: flags.read(18, buf)?,
        })
    }
}

tl_struct! {
    /// `chatForbidden#6592a1a7 id:long title:string = Chat;`
    pub struct ChatForbidden => 0x6592a1a7, "chatForbidden" {
        pub id: i64,
        pub title: String,
    }
}

// ─── Channel ─────────────────────────────────────────────────────────────────

/// `channel#8261ac61`, a supergroup or broadcast channel.
///
/// `restricted` shares bit 9 with `restriction_reason` and is derived from it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    pub creator: bool,
    pub left: bool,
    pub broadcast: bool,
    pub verified: bool,
    pub megagroup: bool,
    pub signatures: bool,
    pub min: bool,
    pub scam: bool,
    pub has_link: bool,
    pub has_geo: bool,
    pub slowmode_enabled: bool,
    pub call_active: bool,
    pub call_not_empty: bool,
    pub fake: bool,
    pub gigagroup: bool,
    pub noforwards: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub photo: enums::ChatPhoto,
    pub date: i32,
    pub restriction_reason: Option<Vec<enums::RestrictionReason>>,
    pub admin_rights: Option<enums::ChatAdminRights>,
    pub banned_rights: Option<enums::ChatBannedRights>,
    pub default_banned_rights: Option<enums::ChatBannedRights>,
    pub participants_count: Option<i32>,
}

tl_id!(Channel => 0x8261ac61, "channel");

impl Channel {
    pub fn is_restricted(&self) -> bool {
        self.restriction_reason.is_some()
    }

    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.creator)
            .with(2, self.left)
            .with(5, self.broadcast)
            .with(6, self.username.is_some())
            .with(7, self.verified)
            .with(8, self.megagroup)
            .with(9, self.restriction_reason.is_some())
            .with(11, self.signatures)
            .with(12, self.min)
            .with(13, self.access_hash.is_some())
            .with(14, self.admin_rights.is_some())
            .with(15, self.banned_rights.is_some())
            .with(17, self.participants_count.is_some())
            .with(18, self.default_banned_rights.is_some())
            .with(19, self.scam)
            .with(20, self.has_link)
            .with(21, self.has_geo)
            .with(22, self.slowmode_enabled)
            .with(23, self.call_active)
            .with(24, self.call_not_empty)
            .with(25, self.fake)
            .with(26, self.gigagroup)
            .with(27, self.noforwards)
    }
}

impl Serializable for Channel {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.title.serialize(buf);
        self.username.serialize(buf);
        self.photo.serialize(buf);
        self.date.serialize(buf);
        self.restriction_reason.serialize(buf);
        self.admin_rights.serialize(buf);
        self.banned_rights.serialize(buf);
        self.default_banned_rights.serialize(buf);
        self.participants_count.serialize(buf);
    }
}

impl Deserializable for Channel {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            creator: flags.has(0),
            left: flags.has(2),
            broadcast: flags.has(5),
            verified: flags.has(7),
            megagroup: flags.has(8),
            signatures: flags.has(11),
            min: flags.has(12),
            scam: flags.has(19),
            has_link: flags.has(20),
            has_geo: flags.has(21),
            slowmode_enabled: flags.has(22),
            call_active: flags.has(23),
            call_not_empty: flags.has(24),
            fake: flags.has(25),
            gigagroup: flags.has(26),
            noforwards: flags.has(27),
            id: i64::deserialize(buf)?,
            access_hash: flags.read(13, buf)?,
            title: String::deserialize(buf)?,
            username: flags.read(6, buf)?,
            photo: enums::ChatPhoto::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            restriction_reason: flags.read(9, buf)?,
            admin_rights: flags.read(14, buf)?,
            banned_rights: flags.read(15, buf)?,
            default_banned_rights: flags.read(18, buf)?,
            participants_count: flags.read(17, buf)?,
        })
    }
}

/// `channelForbidden#17d493d5 flags:# broadcast:flags.5?true megagroup:flags.8?true
/// id:long access_hash:long title:string until_date:flags.16?int = Chat;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelForbidden {
    pub broadcast: bool,
    pub megagroup: bool,
    pub id: i64,
    pub access_hash: i64,
    pub title: String,
    pub until_date: Option<i32>,
}

tl_id!(ChannelForbidden => 0x17d493d5, "channelForbidden");

impl ChannelForbidden {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(5, self.broadcast)
            .with(8, self.megagroup)
            .with(16, self.until_date.is_some())
    }

    pub(crate) fn read_revision(buf: Buffer, long_id: bool) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            broadcast: flags.has(5),
            megagroup: flags.has(8),
            id: if long_id { i64::deserialize(buf)? } else { i32::deserialize(buf)?.into() },
            access_hash: i64::deserialize(buf)?,
            title: String::deserialize(buf)?,
            until_date: flags.read(16, buf)?,
        })
    }
}

impl Serializable for ChannelForbidden {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.title.serialize(buf);
        self.until_date.serialize(buf);
    }
}

impl Deserializable for ChannelForbidden {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Self::read_revision(buf, true)
    }
}
