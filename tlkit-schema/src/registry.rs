//! The tag → name tables of every family and request in this crate.
//!
//! Dispatch itself lives in each family's
//! [`TlObject::read_params`](tlkit_wire::TlObject::read_params); this module
//! only gathers their tables, for diagnostics and for the check that no tag
//! is claimed twice anywhere in the schema.

use tlkit_wire::{Identifiable, TlObject};

use crate::functions;

macro_rules! families {
    ($($family:ty),+ $(,)?) => {
        &[$( (<$family as TlObject>::FAMILY, <$family>::CONSTRUCTORS), )+]
    };
}

macro_rules! requests {
    ($($request:ty),+ $(,)?) => {
        &[$( (<$request as Identifiable>::CONSTRUCTOR_ID, <$request as Identifiable>::NAME), )+]
    };
}

/// Invoke `$callback!` with the path of every family type, in registry order.
///
/// Lets other crates build per-family tables that cannot drift from
/// [`FAMILIES`](crate::registry::FAMILIES):
///
/// ```
/// macro_rules! count {
///     ($($family:ty),+ $(,)?) => { [$(stringify!($family)),+].len() };
/// }
/// assert_eq!(tlkit_schema::for_each_family!(count), tlkit_schema::registry::FAMILIES.len());
/// ```
#[macro_export]
macro_rules! for_each_family {
    ($callback:ident) => {
        $callback! {
            $crate::enums::Peer,
            $crate::enums::InputUser,
            $crate::enums::InputChannel,
            $crate::enums::InputMessage,
            $crate::enums::RestrictionReason,
            $crate::enums::Username,
            $crate::enums::EmojiStatus,
            $crate::enums::UserStatus,
            $crate::enums::UserProfilePhoto,
            $crate::enums::User,
            $crate::enums::ChatPhoto,
            $crate::enums::ChatAdminRights,
            $crate::enums::ChatBannedRights,
            $crate::enums::Chat,
            $crate::enums::PhotoSize,
            $crate::enums::VideoSize,
            $crate::enums::Photo,
            $crate::enums::GeoPoint,
            $crate::enums::MessageMedia,
            $crate::enums::KeyboardButton,
            $crate::enums::KeyboardButtonRow,
            $crate::enums::ReplyMarkup,
            $crate::enums::MessageEntity,
            $crate::enums::MessageReplyHeader,
            $crate::enums::MessageFwdHeader,
            $crate::enums::MessageReplies,
            $crate::enums::MessageAction,
            $crate::enums::Message,
            $crate::enums::Reaction,
            $crate::enums::ReactionCount,
            $crate::enums::MessagePeerReaction,
            $crate::enums::MessageReactions,
            $crate::enums::ChatInvite,
            $crate::enums::PeerSettings,
            $crate::enums::NotificationSound,
            $crate::enums::PeerNotifySettings,
            $crate::enums::BotCommand,
            $crate::enums::BotMenuButton,
            $crate::enums::BotInfo,
            $crate::enums::PremiumGiftOption,
            $crate::enums::UserFull,
            $crate::enums::users::UserFull,
            $crate::enums::messages::Messages,
        }
    };
}

/// Every family with the constructors it decodes, current and legacy.
pub const FAMILIES: &[(&str, &[(u32, &str)])] = crate::for_each_family!(families);

/// Every request in [`functions`].
pub const REQUESTS: &[(u32, &str)] = requests![
    functions::users::GetUsers,
    functions::users::GetFullUser,
    functions::messages::GetMessages,
    functions::messages::CheckChatInvite,
];

/// The built-in constructors of the wire format itself.
const BUILTINS: &[(u32, &str)] = &[
    (tlkit_wire::BOOL_TRUE, "boolTrue"),
    (tlkit_wire::BOOL_FALSE, "boolFalse"),
    (tlkit_wire::VECTOR, "vector"),
];

const fn count_id(id: u32) -> usize {
    let mut n = 0;
    let mut f = 0;
    while f < FAMILIES.len() {
        let table = FAMILIES[f].1;
        let mut i = 0;
        while i < table.len() {
            if table[i].0 == id {
                n += 1;
            }
            i += 1;
        }
        f += 1;
    }
    let mut i = 0;
    while i < REQUESTS.len() {
        if REQUESTS[i].0 == id {
            n += 1;
        }
        i += 1;
    }
    let mut i = 0;
    while i < BUILTINS.len() {
        if BUILTINS[i].0 == id {
            n += 1;
        }
        i += 1;
    }
    n
}

const fn globally_unique() -> bool {
    let mut f = 0;
    while f < FAMILIES.len() {
        let table = FAMILIES[f].1;
        let mut i = 0;
        while i < table.len() {
            if count_id(table[i].0) != 1 {
                return false;
            }
            i += 1;
        }
        f += 1;
    }
    let mut i = 0;
    while i < REQUESTS.len() {
        if count_id(REQUESTS[i].0) != 1 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(globally_unique(), "a constructor id is claimed twice");

/// The family that decodes `id`, if any.
pub fn family_of(id: u32) -> Option<&'static str> {
    FAMILIES
        .iter()
        .find(|(_, table)| table.iter().any(|&(tag, _)| tag == id))
        .map(|&(family, _)| family)
}

/// Number of distinct tags this crate knows, built-ins included.
pub fn constructor_count() -> usize {
    FAMILIES.iter().map(|(_, table)| table.len()).sum::<usize>() + REQUESTS.len() + BUILTINS.len()
}

/// Returns the TL name for a known constructor ID.
///
/// Legacy constructors share their name with the current one, e.g. every
/// `user` revision maps to `"user"`.
#[cfg(feature = "name-for-id")]
pub fn name_for_id(id: u32) -> Option<&'static str> {
    FAMILIES
        .iter()
        .flat_map(|(_, table)| table.iter())
        .chain(REQUESTS)
        .chain(BUILTINS)
        .find(|&&(tag, _)| tag == id)
        .map(|&(_, name)| name)
}
