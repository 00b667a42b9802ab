use tlkit_wire::{Buffer, Deserializable, Flags, Result};

use crate::{enums, types};

tl_revision! {
    /// `chatInvite#dfc2f58e`, before join requests and invite descriptions.
    pub struct ChatInviteLayer124(types::ChatInvite) => 0xdfc2f58e, "chatInvite";
    into enums::ChatInvite;
    read = types::ChatInvite::read_revision(false);
}

tl_revision! {
    /// `peerSettings#733f2961`, before join request banners.
    pub struct PeerSettingsLayer123(types::PeerSettings) => 0x733f2961, "peerSettings";
    into enums::PeerSettings;
    read = types::PeerSettings::read_revision(false);
}

/// `peerNotifySettings#af509d20 flags:# show_previews:flags.0?Bool
/// silent:flags.1?Bool mute_until:flags.2?int sound:flags.3?string
/// = PeerNotifySettings;`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerNotifySettingsLayer139 {
    pub show_previews: Option<bool>,
    pub silent: Option<bool>,
    pub mute_until: Option<i32>,
    pub sound: Option<String>,
}

tl_id!(PeerNotifySettingsLayer139 => 0xaf509d20, "peerNotifySettings");

impl Deserializable for PeerNotifySettingsLayer139 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            show_previews: flags.read(0, buf)?,
            silent: flags.read(1, buf)?,
            mute_until: flags.read(2, buf)?,
            sound: flags.read(3, buf)?,
        })
    }
}

/// Sounds were file names, with `"default"` and `""` as markers.
fn sound_from_name(name: String) -> enums::NotificationSound {
    match name.as_str() {
        "default" => types::NotificationSoundDefault.into(),
        "" => types::NotificationSoundNone.into(),
        _ => types::NotificationSoundLocal { title: name.clone(), data: name }.into(),
    }
}

/// The single sound applied everywhere, so it lands in `other_sound`.
impl From<PeerNotifySettingsLayer139> for enums::PeerNotifySettings {
    fn from(x: PeerNotifySettingsLayer139) -> Self {
        types::PeerNotifySettings {
            show_previews: x.show_previews,
            silent: x.silent,
            mute_until: x.mute_until,
            ios_sound: None,
            android_sound: None,
            other_sound: x.sound.map(sound_from_name),
        }
        .into()
    }
}

tl_struct! {
    /// `botInfo#1b74b335 user_id:long description:string
    /// commands:Vector<BotCommand> = BotInfo;`
    pub struct BotInfoLayer139 => 0x1b74b335, "botInfo" {
        pub user_id: i64,
        pub description: String,
        pub commands: Vec<enums::BotCommand>,
    }
}

impl From<BotInfoLayer139> for enums::BotInfo {
    fn from(x: BotInfoLayer139) -> Self {
        types::BotInfo {
            user_id: x.user_id,
            description: x.description,
            commands: x.commands,
            menu_button: types::BotMenuButtonDefault.into(),
        }
        .into()
    }
}

tl_struct! {
    /// `botInfo#98e81d3a user_id:int description:string
    /// commands:Vector<BotCommand> = BotInfo;`
    pub struct BotInfoLayer132 => 0x98e81d3a, "botInfo" {
        pub user_id: i32,
        pub description: String,
        pub commands: Vec<enums::BotCommand>,
    }
}

impl From<BotInfoLayer132> for enums::BotInfo {
    fn from(x: BotInfoLayer132) -> Self {
        BotInfoLayer139 {
            user_id: x.user_id.into(),
            description: x.description,
            commands: x.commands,
        }
        .into()
    }
}

tl_revision! {
    /// `userFull#cf366521`, before bot admin rights and premium gifts.
    pub struct UserFullLayer143(types::UserFull) => 0xcf366521, "userFull";
    into enums::UserFull;
    read = types::UserFull::read_revision(false);
}

/// `userFull#edf17c12`, which embedded the whole `User` instead of its id.
#[derive(Clone, Debug, PartialEq)]
pub struct UserFullLayer132 {
    pub blocked: bool,
    pub phone_calls_available: bool,
    pub phone_calls_private: bool,
    pub can_pin_message: bool,
    pub has_scheduled: bool,
    pub video_calls_available: bool,
    pub user: enums::User,
    pub about: Option<String>,
    pub settings: enums::PeerSettings,
    pub profile_photo: Option<enums::Photo>,
    pub notify_settings: enums::PeerNotifySettings,
    pub bot_info: Option<enums::BotInfo>,
    pub pinned_msg_id: Option<i32>,
    pub common_chats_count: i32,
    pub folder_id: Option<i32>,
    pub ttl_period: Option<i32>,
}

tl_id!(UserFullLayer132 => 0xedf17c12, "userFull");

impl Deserializable for UserFullLayer132 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            blocked: flags.has(0),
            phone_calls_available: flags.has(4),
            phone_calls_private: flags.has(5),
            can_pin_message: flags.has(7),
            has_scheduled: flags.has(12),
            video_calls_available: flags.has(13),
            user: enums::User::deserialize(buf)?,
            about: flags.read(1, buf)?,
            settings: enums::PeerSettings::deserialize(buf)?,
            profile_photo: flags.read(2, buf)?,
            notify_settings: enums::PeerNotifySettings::deserialize(buf)?,
            bot_info: flags.read(3, buf)?,
            pinned_msg_id: flags.read(6, buf)?,
            common_chats_count: i32::deserialize(buf)?,
            folder_id: flags.read(11, buf)?,
            ttl_period: flags.read(14, buf)?,
        })
    }
}

impl From<UserFullLayer132> for enums::UserFull {
    fn from(x: UserFullLayer132) -> Self {
        types::UserFull {
            blocked: x.blocked,
            phone_calls_available: x.phone_calls_available,
            phone_calls_private: x.phone_calls_private,
            can_pin_message: x.can_pin_message,
            has_scheduled: x.has_scheduled,
            video_calls_available: x.video_calls_available,
            voice_messages_forbidden: false,
            translations_disabled: false,
            id: x.user.id(),
            about: x.about,
            settings: x.settings,
            personal_photo: None,
            profile_photo: x.profile_photo,
            fallback_photo: None,
            notify_settings: x.notify_settings,
            bot_info: x.bot_info,
            pinned_msg_id: x.pinned_msg_id,
            common_chats_count: x.common_chats_count,
            folder_id: x.folder_id,
            ttl_period: x.ttl_period,
            theme_emoticon: None,
            private_forward_name: None,
            bot_group_admin_rights: None,
            bot_broadcast_admin_rights: None,
            premium_gifts: None,
        }
        .into()
    }
}
