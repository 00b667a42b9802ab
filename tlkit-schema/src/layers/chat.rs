use tlkit_wire::{Buffer, Deserializable, Flags, Result};

use crate::{enums, types};

tl_struct! {
    /// `chatEmpty#9ba2d800 id:int = Chat;`
    pub struct ChatEmptyLayer132 => 0x9ba2d800, "chatEmpty" {
        pub id: i32,
    }
}

impl From<ChatEmptyLayer132> for enums::Chat {
    fn from(x: ChatEmptyLayer132) -> Self {
        types::ChatEmpty { id: x.id.into() }.into()
    }
}

/// `chat#3bda1bde flags:# creator:flags.0?true kicked:flags.1?true
/// left:flags.2?true deactivated:flags.5?true call_active:flags.23?true
/// call_not_empty:flags.24?true id:int title:string photo:ChatPhoto
/// participants_count:int date:int version:int migrated_to:flags.6?InputChannel
/// admin_rights:flags.14?ChatAdminRights default_banned_rights:flags.18?ChatBannedRights
/// = Chat;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLayer132 {
    pub creator: bool,
    pub kicked: bool,
    pub left: bool,
    pub deactivated: bool,
    pub call_active: bool,
    pub call_not_empty: bool,
    pub id: i32,
    pub title: String,
    pub photo: enums::ChatPhoto,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
    pub migrated_to: Option<enums::InputChannel>,
    pub admin_rights: Option<enums::ChatAdminRights>,
    pub default_banned_rights: Option<enums::ChatBannedRights>,
}

tl_id!(ChatLayer132 => 0x3bda1bde, "chat");

impl Deserializable for ChatLayer132 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            creator: flags.has(0),
            kicked: flags.has(1),
            left: flags.has(2),
            deactivated: flags.has(5),
            call_active: flags.has(23),
            call_not_empty: flags.has(24),
            id: i32::deserialize(buf)?,
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

/// A kicked member has left the group as far as later layers are concerned.
impl From<ChatLayer132> for enums::Chat {
    fn from(x: ChatLayer132) -> Self {
        types::Chat {
            creator: x.creator,
            left: x.left || x.kicked,
            deactivated: x.deactivated,
            call_active: x.call_active,
            call_not_empty: x.call_not_empty,
            noforwards: false,
            id: x.id.into(),
            title: x.title,
            photo: x.photo,
            participants_count: x.participants_count,
            date: x.date,
            version: x.version,
            migrated_to: x.migrated_to,
            admin_rights: x.admin_rights,
            default_banned_rights: x.default_banned_rights,
        }
        .into()
    }
}

tl_struct! {
    /// `chatForbidden#07328bdb id:int title:string = Chat;`
    pub struct ChatForbiddenLayer132 => 0x07328bdb, "chatForbidden" {
        pub id: i32,
        pub title: String,
    }
}

impl From<ChatForbiddenLayer132> for enums::Chat {
    fn from(x: ChatForbiddenLayer132) -> Self {
        types::ChatForbidden { id: x.id.into(), title: x.title }.into()
    }
}

tl_revision! {
    /// `channelForbidden#289da732`, with a 32-bit id.
    pub struct ChannelForbiddenLayer132(types::ChannelForbidden) => 0x289da732, "channelForbidden";
    into enums::Chat;
    read = types::ChannelForbidden::read_revision(false);
}
