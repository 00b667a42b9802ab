//! The full user profile and its parts.

use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

// ─── PeerSettings ────────────────────────────────────────────────────────────

/// The chat a join request was sent to. Both halves share one flag bit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatRequest {
    pub title: String,
    pub date: i32,
}

impl Serializable for ChatRequest {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.title.serialize(buf);
        self.date.serialize(buf);
    }
}

impl Deserializable for ChatRequest {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            title: String::deserialize(buf)?,
            date: i32::deserialize(buf)?,
        })
    }
}

/// `peerSettings#a518110d`, the action bar shown on top of a private chat.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerSettings {
    pub report_spam: bool,
    pub add_contact: bool,
    pub block_contact: bool,
    pub share_contact: bool,
    pub need_contacts_exception: bool,
    pub report_geo: bool,
    pub autoarchived: bool,
    pub invite_members: bool,
    pub request_chat_broadcast: bool,
    pub geo_distance: Option<i32>,
    pub request_chat: Option<ChatRequest>,
}

tl_id!(PeerSettings => 0xa518110d, "peerSettings");

impl PeerSettings {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.report_spam)
            .with(1, self.add_contact)
            .with(2, self.block_contact)
            .with(3, self.share_contact)
            .with(4, self.need_contacts_exception)
            .with(5, self.report_geo)
            .with(6, self.geo_distance.is_some())
            .with(7, self.autoarchived)
            .with(8, self.invite_members)
            .with(9, self.request_chat.is_some())
            .with(10, self.request_chat_broadcast)
    }

    pub(crate) fn read_revision(buf: Buffer, has_request_chat: bool) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            report_spam: flags.has(0),
            add_contact: flags.has(1),
            block_contact: flags.has(2),
            share_contact: flags.has(3),
            need_contacts_exception: flags.has(4),
            report_geo: flags.has(5),
            autoarchived: flags.has(7),
            invite_members: flags.has(8),
            request_chat_broadcast: has_request_chat && flags.has(10),
            geo_distance: flags.read(6, buf)?,
            request_chat: if has_request_chat { flags.read(9, buf)? } else { None },
        })
    }
}

impl Serializable for PeerSettings {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.geo_distance.serialize(buf);
        self.request_chat.serialize(buf);
    }
}

impl Deserializable for PeerSettings {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Self::read_revision(buf, true)
    }
}

// ─── Notifications ───────────────────────────────────────────────────────────

tl_unit!(
    /// `notificationSoundDefault#97e8bba9 = NotificationSound;`
    NotificationSoundDefault => 0x97e8bba9, "notificationSoundDefault"
);

tl_unit!(
    /// `notificationSoundNone#6f0c34df = NotificationSound;`
    NotificationSoundNone => 0x6f0c34df, "notificationSoundNone"
);

tl_struct! {
    /// `notificationSoundLocal#830b9ae4 title:string data:string = NotificationSound;`
    pub struct NotificationSoundLocal => 0x830b9ae4, "notificationSoundLocal" {
        pub title: String,
        pub data: String,
    }
}

tl_struct! {
    /// `notificationSoundRingtone#ff6c8049 id:long = NotificationSound;`
    pub struct NotificationSoundRingtone => 0xff6c8049, "notificationSoundRingtone" {
        pub id: i64,
    }
}

/// `peerNotifySettings#a83b0426 flags:# show_previews:flags.0?Bool
/// silent:flags.1?Bool mute_until:flags.2?int ios_sound:flags.3?NotificationSound
/// android_sound:flags.4?NotificationSound other_sound:flags.5?NotificationSound
/// = PeerNotifySettings;`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerNotifySettings {
    pub show_previews: Option<bool>,
    pub silent: Option<bool>,
    pub mute_until: Option<i32>,
    pub ios_sound: Option<enums::NotificationSound>,
    pub android_sound: Option<enums::NotificationSound>,
    pub other_sound: Option<enums::NotificationSound>,
}

tl_id!(PeerNotifySettings => 0xa83b0426, "peerNotifySettings");

impl PeerNotifySettings {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.show_previews.is_some())
            .with(1, self.silent.is_some())
            .with(2, self.mute_until.is_some())
            .with(3, self.ios_sound.is_some())
            .with(4, self.android_sound.is_some())
            .with(5, self.other_sound.is_some())
    }
}

impl Serializable for PeerNotifySettings {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.show_previews.serialize(buf);
        self.silent.serialize(buf);
        self.mute_until.serialize(buf);
        self.ios_sound.serialize(buf);
        self.android_sound.serialize(buf);
        self.other_sound.serialize(buf);
    }
}

impl Deserializable for PeerNotifySettings {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            show_previews: flags.read(0, buf)?,
            silent: flags.read(1, buf)?,
            mute_until: flags.read(2, buf)?,
            ios_sound: flags.read(3, buf)?,
            android_sound: flags.read(4, buf)?,
            other_sound: flags.read(5, buf)?,
        })
    }
}

// ─── Bots ────────────────────────────────────────────────────────────────────

tl_struct! {
    /// `botCommand#c27ac8c7 command:string description:string = BotCommand;`
    pub struct BotCommand => 0xc27ac8c7, "botCommand" {
        pub command: String,
        pub description: String,
    }
}

tl_unit!(
    /// `botMenuButtonDefault#7533a588 = BotMenuButton;`
    BotMenuButtonDefault => 0x7533a588, "botMenuButtonDefault"
);

tl_unit!(
    /// `botMenuButtonCommands#4258c205 = BotMenuButton;`
    BotMenuButtonCommands => 0x4258c205, "botMenuButtonCommands"
);

tl_struct! {
    /// `botMenuButton#c7b57ce6 text:string url:string = BotMenuButton;`
    pub struct BotMenuButton => 0xc7b57ce6, "botMenuButton" {
        pub text: String,
        pub url: String,
    }
}

tl_struct! {
    /// `botInfo#e4169b5d user_id:long description:string commands:Vector<BotCommand>
    /// menu_button:BotMenuButton = BotInfo;`
    pub struct BotInfo => 0xe4169b5d, "botInfo" {
        pub user_id: i64,
        pub description: String,
        pub commands: Vec<enums::BotCommand>,
        pub menu_button: enums::BotMenuButton,
    }
}

/// `premiumGiftOption#74c34319 flags:# months:int currency:string amount:long
/// bot_url:string store_product:flags.0?string = PremiumGiftOption;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PremiumGiftOption {
    pub months: i32,
    pub currency: String,
    pub amount: i64,
    pub bot_url: String,
    pub store_product: Option<String>,
}

tl_id!(PremiumGiftOption => 0x74c34319, "premiumGiftOption");

impl PremiumGiftOption {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.store_product.is_some())
    }
}

impl Serializable for PremiumGiftOption {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.months.serialize(buf);
        self.currency.serialize(buf);
        self.amount.serialize(buf);
        self.bot_url.serialize(buf);
        self.store_product.serialize(buf);
    }
}

impl Deserializable for PremiumGiftOption {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            months: i32::deserialize(buf)?,
            currency: String::deserialize(buf)?,
            amount: i64::deserialize(buf)?,
            bot_url: String::deserialize(buf)?,
            store_product: flags.read(0, buf)?,
        })
    }
}

// ─── UserFull ────────────────────────────────────────────────────────────────

/// `userFull#c4b1fc3f`, everything known about a user beyond [`super::User`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserFull {
    pub blocked: bool,
    pub phone_calls_available: bool,
    pub phone_calls_private: bool,
    pub can_pin_message: bool,
    pub has_scheduled: bool,
    pub video_calls_available: bool,
    pub voice_messages_forbidden: bool,
    pub translations_disabled: bool,
    pub id: i64,
    pub about: Option<String>,
    pub settings: enums::PeerSettings,
    pub personal_photo: Option<enums::Photo>,
    pub profile_photo: Option<enums::Photo>,
    pub fallback_photo: Option<enums::Photo>,
    pub notify_settings: enums::PeerNotifySettings,
    pub bot_info: Option<enums::BotInfo>,
    pub pinned_msg_id: Option<i32>,
    pub common_chats_count: i32,
    pub folder_id: Option<i32>,
    pub ttl_period: Option<i32>,
    pub theme_emoticon: Option<String>,
    pub private_forward_name: Option<String>,
    pub bot_group_admin_rights: Option<enums::ChatAdminRights>,
    pub bot_broadcast_admin_rights: Option<enums::ChatAdminRights>,
    pub premium_gifts: Option<Vec<enums::PremiumGiftOption>>,
}

tl_id!(UserFull => 0xc4b1fc3f, "userFull");

impl UserFull {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.blocked)
            .with(1, self.about.is_some())
            .with(2, self.profile_photo.is_some())
            .with(3, self.bot_info.is_some())
            .with(4, self.phone_calls_available)
            .with(5, self.phone_calls_private)
            .with(6, self.pinned_msg_id.is_some())
            .with(7, self.can_pin_message)
            .with(11, self.folder_id.is_some())
            .with(12, self.has_scheduled)
            .with(13, self.video_calls_available)
            .with(14, self.ttl_period.is_some())
            .with(15, self.theme_emoticon.is_some())
            .with(16, self.private_forward_name.is_some())
            .with(17, self.bot_group_admin_rights.is_some())
            .with(18, self.bot_broadcast_admin_rights.is_some())
            .with(19, self.premium_gifts.is_some())
            .with(20, self.voice_messages_forbidden)
            .with(21, self.personal_photo.is_some())
            .with(22, self.fallback_photo.is_some())
            .with(23, self.translations_disabled)
    }

    /// `extended` selects the current layout; without it, bits 17 and up are
    /// not part of the revision and are ignored.
    pub(crate) fn read_revision(buf: Buffer, extended: bool) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        let ext = |bit| extended && flags.has(bit);
        Ok(Self {
            blocked: flags.has(0),
            phone_calls_available: flags.has(4),
            phone_calls_private: flags.has(5),
            can_pin_message: flags.has(7),
            has_scheduled: flags.has(12),
            video_calls_available: flags.has(13),
            voice_messages_forbidden: ext(20),
            translations_disabled: ext(23),
            id: i64::deserialize(buf)?,
            about: flags.read(1, buf)?,
            settings: enums::PeerSettings::deserialize(buf)?,
            personal_photo: if ext(21) { Some(enums::Photo::deserialize(buf)?) } else { None },
            profile_photo: flags.read(2, buf)?,
            fallback_photo: if ext(22) { Some(enums::Photo::deserialize(buf)?) } else { None },
            notify_settings: enums::PeerNotifySettings::deserialize(buf)?,
            bot_info: flags.read(3, buf)?,
            pinned_msg_id: flags.read(6, buf)?,
            common_chats_count: i32::deserialize(buf)?,
            folder_id: flags.read(11, buf)?,
            ttl_period: flags.read(14, buf)?,
            theme_emoticon: flags.read(15, buf)?,
            private_forward_name: flags.read(16, buf)?,
            bot_group_admin_rights: if ext(17) { Some(enums::ChatAdminRights::deserialize(buf)?) } else { None },
            bot_broadcast_admin_rights: if ext(18) { Some(enums::ChatAdminRights::deserialize(buf)?) } else { None },
            premium_gifts: if ext(19) { Some(Vec::deserialize(buf)?) } else { None },
        })
    }
}

impl Serializable for UserFull {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.id.serialize(buf);
        self.about.serialize(buf);
        self.settings.serialize(buf);
        self.personal_photo.serialize(buf);
        self.profile_photo.serialize(buf);
        self.fallback_photo.serialize(buf);
        self.notify_settings.serialize(buf);
        self.bot_info.serialize(buf);
        self.pinned_msg_id.serialize(buf);
        self.common_chats_count.serialize(buf);
        self.folder_id.serialize(buf);
        self.ttl_period.serialize(buf);
        self.theme_emoticon.serialize(buf);
        self.private_forward_name.serialize(buf);
        self.bot_group_admin_rights.serialize(buf);
        self.bot_broadcast_admin_rights.serialize(buf);
        self.premium_gifts.serialize(buf);
    }
}

impl Deserializable for UserFull {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Self::read_revision(buf, true)
    }
}
