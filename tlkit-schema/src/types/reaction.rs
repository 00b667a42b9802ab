use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

tl_unit!(
    /// `reactionEmpty#79f5d419 = Reaction;`
    ReactionEmpty => 0x79f5d419, "reactionEmpty"
);

tl_struct! {
    /// `reactionEmoji#1b2286b8 emoticon:string = Reaction;`
    pub struct ReactionEmoji => 0x1b2286b8, "reactionEmoji" {
        pub emoticon: String,
    }
}

tl_struct! {
    /// `reactionCustomEmoji#8935fc73 document_id:long = Reaction;`
    pub struct ReactionCustomEmoji => 0x8935fc73, "reactionCustomEmoji" {
        pub document_id: i64,
    }
}

/// `reactionCount#a3d1cb80 flags:# chosen_order:flags.0?int reaction:Reaction
/// count:int = ReactionCount;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionCount {
    /// Position among the reactions the current user picked, if they did.
    pub chosen_order: Option<i32>,
    pub reaction: enums::Reaction,
    pub count: i32,
}

tl_id!(ReactionCount => 0xa3d1cb80, "reactionCount");

impl ReactionCount {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.chosen_order.is_some())
    }
}

impl Serializable for ReactionCount {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.chosen_order.serialize(buf);
        self.reaction.serialize(buf);
        self.count.serialize(buf);
    }
}

impl Deserializable for ReactionCount {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            chosen_order: flags.read(0, buf)?,
            reaction: enums::Reaction::deserialize(buf)?,
            count: i32::deserialize(buf)?,
        })
    }
}

/// `messagePeerReaction#b156fe9c flags:# big:flags.0?true unread:flags.1?true
/// peer_id:Peer reaction:Reaction = MessagePeerReaction;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessagePeerReaction {
    pub big: bool,
    pub unread: bool,
    pub peer_id: enums::Peer,
    pub reaction: enums::Reaction,
}

tl_id!(MessagePeerReaction => 0xb156fe9c, "messagePeerReaction");

impl MessagePeerReaction {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.big).with(1, self.unread)
    }
}

impl Serializable for MessagePeerReaction {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.peer_id.serialize(buf);
        self.reaction.serialize(buf);
    }
}

impl Deserializable for MessagePeerReaction {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            big: flags.has(0),
            unread: flags.has(1),
            peer_id: enums::Peer::deserialize(buf)?,
            reaction: enums::Reaction::deserialize(buf)?,
        })
    }
}

/// `messageReactions#4f2b9479 flags:# min:flags.0?true can_see_list:flags.2?true
/// results:Vector<ReactionCount> recent_reactions:flags.1?Vector<MessagePeerReaction>
/// = MessageReactions;`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageReactions {
    pub min: bool,
    pub can_see_list: bool,
    pub results: Vec<enums::ReactionCount>,
    pub recent_reactions: Option<Vec<enums::MessagePeerReaction>>,
}

tl_id!(MessageReactions => 0x4f2b9479, "messageReactions");

impl MessageReactions {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.min)
            .with(1, self.recent_reactions.is_some())
            .with(2, self.can_see_list)
    }
}

impl Serializable for MessageReactions {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.results.serialize(buf);
        self.recent_reactions.serialize(buf);
    }
}

impl Deserializable for MessageReactions {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            min: flags.has(0),
            can_see_list: flags.has(2),
            results: Vec::deserialize(buf)?,
            recent_reactions: flags.read(1, buf)?,
        })
    }
}
