//! Users and the small shapes a user carries.

use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

tl_struct! {
    /// `restrictionReason#d072acb4 platform:string reason:string text:string = RestrictionReason;`
    pub struct RestrictionReason => 0xd072acb4, "restrictionReason" {
        pub platform: String,
        pub reason: String,
        pub text: String,
    }
}

/// `username#b4073647 flags:# editable:flags.0?true active:flags.1?true username:string = Username;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Username {
    pub editable: bool,
    pub active: bool,
    pub username: String,
}

tl_id!(Username => 0xb4073647, "username");

impl Username {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.editable).with(1, self.active)
    }
}

impl Serializable for Username {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.username.serialize(buf);
    }
}

impl Deserializable for Username {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            editable: flags.has(0),
            active: flags.has(1),
            username: String::deserialize(buf)?,
        })
    }
}

// ─── EmojiStatus ─────────────────────────────────────────────────────────────

tl_unit!(
    /// `emojiStatusEmpty#2de11aae = EmojiStatus;`
    EmojiStatusEmpty => 0x2de11aae, "emojiStatusEmpty"
);

tl_struct! {
    /// `emojiStatus#929b619d document_id:long = EmojiStatus;`
    pub struct EmojiStatus => 0x929b619d, "emojiStatus" {
        pub document_id: i64,
    }
}

tl_struct! {
    /// `emojiStatusUntil#fa30a8c7 document_id:long until:int = EmojiStatus;`
    pub struct EmojiStatusUntil => 0xfa30a8c7, "emojiStatusUntil" {
        pub document_id: i64,
        pub until: i32,
    }
}

// ─── UserStatus ──────────────────────────────────────────────────────────────

tl_unit!(
    /// `userStatusEmpty#09d05049 = UserStatus;`
    UserStatusEmpty => 0x09d05049, "userStatusEmpty"
);

tl_struct! {
    /// `userStatusOnline#edb93949 expires:int = UserStatus;`
    pub struct UserStatusOnline => 0xedb93949, "userStatusOnline" {
        pub expires: i32,
    }
}

tl_struct! {
    /// `userStatusOffline#008c703f was_online:int = UserStatus;`
    pub struct UserStatusOffline => 0x008c703f, "userStatusOffline" {
        pub was_online: i32,
    }
}

tl_unit!(
    /// `userStatusRecently#e26f42f1 = UserStatus;`
    UserStatusRecently => 0xe26f42f1, "userStatusRecently"
);

tl_unit!(
    /// `userStatusLastWeek#07bf09fc = UserStatus;`
    UserStatusLastWeek => 0x07bf09fc, "userStatusLastWeek"
);

tl_unit!(
    /// `userStatusLastMonth#77ebc742 = UserStatus;`
    UserStatusLastMonth => 0x77ebc742, "userStatusLastMonth"
);

// ─── UserProfilePhoto ────────────────────────────────────────────────────────

tl_unit!(
    /// `userProfilePhotoEmpty#4f11bae1 = UserProfilePhoto;`
    UserProfilePhotoEmpty => 0x4f11bae1, "userProfilePhotoEmpty"
);

/// `userProfilePhoto#82d1f706 flags:# has_video:flags.0?true personal:flags.2?true
/// photo_id:long stripped_thumb:flags.1?bytes dc_id:int = UserProfilePhoto;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfilePhoto {
    pub has_video: bool,
    pub personal: bool,
    pub photo_id: i64,
    pub stripped_thumb: Option<Vec<u8>>,
    pub dc_id: i32,
}

tl_id!(UserProfilePhoto => 0x82d1f706, "userProfilePhoto");

impl UserProfilePhoto {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.has_video)
            .with(1, self.stripped_thumb.is_some())
            .with(2, self.personal)
    }

    /// Photos set by the user for themselves only came later (`personal`).
    pub(crate) fn read_revision(buf: Buffer, has_personal: bool) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            has_video: flags.has(0),
            personal: has_personal && flags.has(2),
            photo_id: i64::deserialize(buf)?,
            stripped_thumb: flags.read(1, buf)?,
            dc_id: i32::deserialize(buf)?,
        })
    }
}

impl Serializable for UserProfilePhoto {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.photo_id.serialize(buf);
        self.stripped_thumb.serialize(buf);
        self.dc_id.serialize(buf);
    }
}

impl Deserializable for UserProfilePhoto {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Self::read_revision(buf, true)
    }
}

// ─── User ────────────────────────────────────────────────────────────────────

tl_struct! {
    /// `userEmpty#d3bc4b7a id:long = User;`
    pub struct UserEmpty => 0xd3bc4b7a, "userEmpty" {
        pub id: i64,
    }
}

/// `user#8f97c628`, the current full user constructor.
///
/// `bot` and `restricted` share their flag bits with `bot_info_version` and
/// `restriction_reason`, so they are derived from those fields instead of
/// being stored twice.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub is_self: bool,
    pub contact: bool,
    pub mutual_contact: bool,
    pub deleted: bool,
    pub bot_chat_history: bool,
    pub bot_nochats: bool,
    pub verified: bool,
    pub min: bool,
    pub bot_inline_geo: bool,
    pub support: bool,
    pub scam: bool,
    pub apply_min_photo: bool,
    pub fake: bool,
    pub bot_attach_menu: bool,
    pub premium: bool,
    pub attach_menu_enabled: bool,
    pub bot_can_edit: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<enums::UserProfilePhoto>,
    pub status: Option<enums::UserStatus>,
    /// Present exactly for bots.
    pub bot_info_version: Option<i32>,
    /// Present exactly for restricted users.
    pub restriction_reason: Option<Vec<enums::RestrictionReason>>,
    pub bot_inline_placeholder: Option<String>,
    pub lang_code: Option<String>,
    pub emoji_status: Option<enums::EmojiStatus>,
    pub usernames: Option<Vec<enums::Username>>,
}

tl_id!(User => 0x8f97c628, "user");

impl User {
    pub fn is_bot(&self) -> bool {
        self.bot_info_version.is_some()
    }

    pub fn is_restricted(&self) -> bool {
        self.restriction_reason.is_some()
    }

    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.access_hash.is_some())
            .with(1, self.first_name.is_some())
            .with(2, self.last_name.is_some())
            .with(3, self.username.is_some())
            .with(4, self.phone.is_some())
            .with(5, self.photo.is_some())
            .with(6, self.status.is_some())
            .with(10, self.is_self)
            .with(11, self.contact)
            .with(12, self.mutual_contact)
            .with(13, self.deleted)
            .with(14, self.bot_info_version.is_some())
            .with(15, self.bot_chat_history)
            .with(16, self.bot_nochats)
            .with(17, self.verified)
            .with(18, self.restriction_reason.is_some())
            .with(19, self.bot_inline_placeholder.is_some())
            .with(20, self.min)
            .with(21, self.bot_inline_geo)
            .with(22, self.lang_code.is_some())
            .with(23, self.support)
            .with(24, self.scam)
            .with(25, self.apply_min_photo)
            .with(26, self.fake)
            .with(27, self.bot_attach_menu)
            .with(28, self.premium)
            .with(29, self.attach_menu_enabled)
            .with(30, self.emoji_status.is_some())
    }

    pub fn flags2(&self) -> Flags {
        Flags::empty()
            .with(0, self.usernames.is_some())
            .with(1, self.bot_can_edit)
    }

    /// Read the body shared by every `user` revision.
    ///
    /// Before 64-bit ids `id` was an `int`. `has_premium` covers bits 27 to 30
    /// (attachment menu, premium and `emoji_status`), which arrived together.
    /// A layout without them may still have those bits set on the wire; they
    /// are masked off so no field is read that the layout does not carry.
    pub(crate) fn read_revision(
        buf: Buffer,
        long_id: bool,
        has_premium: bool,
        has_flags2: bool,
    ) -> Result<Self> {
        let mut flags = Flags::deserialize(buf)?;
        if !has_premium {
            flags = (27..=30).fold(flags, |flags, bit| flags.with(bit, false));
        }
        let flags2 = if has_flags2 { Flags::deserialize(buf)? } else { Flags::empty() };
        Ok(Self {
            is_self: flags.has(10),
            contact: flags.has(11),
            mutual_contact: flags.has(12),
            deleted: flags.has(13),
            bot_chat_history: flags.has(15),
            bot_nochats: flags.has(16),
            verified: flags.has(17),
            min: flags.has(20),
            bot_inline_geo: flags.has(21),
            support: flags.has(23),
            scam: flags.has(24),
            apply_min_photo: flags.has(25),
            fake: flags.has(26),
            bot_attach_menu: flags.has(27),
            premium: flags.has(28),
            attach_menu_enabled: flags.has(29),
            bot_can_edit: flags2.has(1),
            id: if long_id { i64::deserialize(buf)? } else { i32::deserialize(buf)?.into() },
            access_hash: flags.read(0, buf)?,
            first_name: flags.read(1, buf)?,
            last_name: flags.read(2, buf)?,
            username: flags.read(3, buf)?,
            phone: flags.read(4, buf)?,
            photo: flags.read(5, buf)?,
            status: flags.read(6, buf)?,
            bot_info_version: flags.read(14, buf)?,
            restriction_reason: flags.read(18, buf)?,
            bot_inline_placeholder: flags.read(19, buf)?,
            lang_code: flags.read(22, buf)?,
            emoji_status: flags.read(30, buf)?,
            usernames: flags2.read(0, buf)?,
        })
    }
}

impl Serializable for User {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.flags2().serialize(buf);
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.first_name.serialize(buf);
        self.last_name.serialize(buf);
        self.username.serialize(buf);
        self.phone.serialize(buf);
        self.photo.serialize(buf);
        self.status.serialize(buf);
        self.bot_info_version.serialize(buf);
        self.restriction_reason.serialize(buf);
        self.bot_inline_placeholder.serialize(buf);
        self.lang_code.serialize(buf);
        self.emoji_status.serialize(buf);
        self.usernames.serialize(buf);
    }
}

impl Deserializable for User {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Self::read_revision(buf, true, true, true)
    }
}
