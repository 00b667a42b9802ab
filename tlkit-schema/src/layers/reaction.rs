//! Reactions from when a reaction was nothing but an emoji string.

use tlkit_wire::{Buffer, Deserializable, Flags, Result};

use crate::{enums, types};

/// `reactionCount#6fb250d1 flags:# chosen:flags.0?true reaction:string count:int
/// = ReactionCount;`
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionCountLayer144 {
    pub chosen: bool,
    pub reaction: String,
    pub count: i32,
}

tl_id!(ReactionCountLayer144 => 0x6fb250d1, "reactionCount");

impl Deserializable for ReactionCountLayer144 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            chosen: flags.has(0),
            reaction: String::deserialize(buf)?,
            count: i32::deserialize(buf)?,
        })
    }
}

/// Only one reaction could be chosen, so it is always the first.
impl From<ReactionCountLayer144> for enums::ReactionCount {
    fn from(x: ReactionCountLayer144) -> Self {
        types::ReactionCount {
            chosen_order: x.chosen.then_some(0),
            reaction: enums::Reaction::from_legacy_emoticon(x.reaction),
            count: x.count,
        }
        .into()
    }
}

/// `messagePeerReaction#51b67eff flags:# big:flags.0?true unread:flags.1?true
/// peer_id:Peer reaction:string = MessagePeerReaction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessagePeerReactionLayer144 {
    pub big: bool,
    pub unread: bool,
    pub peer_id: enums::Peer,
    pub reaction: String,
}

tl_id!(MessagePeerReactionLayer144 => 0x51b67eff, "messagePeerReaction");

impl Deserializable for MessagePeerReactionLayer144 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            big: flags.has(0),
            unread: flags.has(1),
            peer_id: enums::Peer::deserialize(buf)?,
            reaction: String::deserialize(buf)?,
        })
    }
}

impl From<MessagePeerReactionLayer144> for enums::MessagePeerReaction {
    fn from(x: MessagePeerReactionLayer144) -> Self {
        types::MessagePeerReaction {
            big: x.big,
            unread: x.unread,
            peer_id: x.peer_id,
            reaction: enums::Reaction::from_legacy_emoticon(x.reaction),
        }
        .into()
    }
}

tl_struct! {
    /// `messageUserReaction#932844fa user_id:long reaction:string = MessageUserReaction;`
    ///
    /// Lived in a family of its own; recent reactions now name any peer.
    pub struct MessageUserReaction => 0x932844fa, "messageUserReaction" {
        pub user_id: i64,
        pub reaction: String,
    }
}

impl From<MessageUserReaction> for enums::MessagePeerReaction {
    fn from(x: MessageUserReaction) -> Self {
        types::MessagePeerReaction {
            big: false,
            unread: false,
            peer_id: types::PeerUser { user_id: x.user_id }.into(),
            reaction: enums::Reaction::from_legacy_emoticon(x.reaction),
        }
        .into()
    }
}

tl_revision! {
    /// `messageReactions#087b6e36`: the current layout, but its elements were
    /// the older `reactionCount` and `messageUserReaction`, which the element
    /// families still decode.
    pub struct MessageReactionsLayer136(types::MessageReactions) => 0x087b6e36, "messageReactions";
    into enums::MessageReactions;
    read = types::MessageReactions::deserialize();
}

/// `messageReactions#b87a24d1 flags:# min:flags.0?true
/// results:Vector<ReactionCount> = MessageReactions;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageReactionsLayer135 {
    pub min: bool,
    pub results: Vec<enums::ReactionCount>,
}

tl_id!(MessageReactionsLayer135 => 0xb87a24d1, "messageReactions");

impl Deserializable for MessageReactionsLayer135 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            min: flags.has(0),
            results: Vec::deserialize(buf)?,
        })
    }
}

impl From<MessageReactionsLayer135> for enums::MessageReactions {
    fn from(x: MessageReactionsLayer135) -> Self {
        types::MessageReactions {
            min: x.min,
            can_see_list: false,
            results: x.results,
            recent_reactions: None,
        }
        .into()
    }
}
