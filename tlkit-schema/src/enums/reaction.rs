use crate::{layers, types};

tl_family! {
    /// [`Reaction`](https://core.telegram.org/type/Reaction)
    pub enum Reaction as "Reaction" {
        Empty(types::ReactionEmpty),
        Emoji(types::ReactionEmoji),
        CustomEmoji(types::ReactionCustomEmoji),
    }
}

impl Reaction {
    /// Reactions used to be bare emoji strings; an empty one meant "none".
    pub(crate) fn from_legacy_emoticon(emoticon: String) -> Self {
        if emoticon.is_empty() {
            types::ReactionEmpty.into()
        } else {
            types::ReactionEmoji { emoticon }.into()
        }
    }
}

tl_family! {
    /// [`ReactionCount`](https://core.telegram.org/type/ReactionCount)
    pub enum ReactionCount as "ReactionCount" {
        ReactionCount(types::ReactionCount),
    }
    legacy {
        layers::ReactionCountLayer144,
    }
}

tl_family! {
    /// [`MessagePeerReaction`](https://core.telegram.org/type/MessagePeerReaction)
    pub enum MessagePeerReaction as "MessagePeerReaction" {
        MessagePeerReaction(types::MessagePeerReaction),
    }
    legacy {
        layers::MessagePeerReactionLayer144,
        layers::MessageUserReaction,
    }
}

tl_family! {
    /// [`MessageReactions`](https://core.telegram.org/type/MessageReactions)
    pub enum MessageReactions as "MessageReactions" {
        MessageReactions(types::MessageReactions),
    }
    legacy {
        layers::MessageReactionsLayer136,
        layers::MessageReactionsLayer135,
    }
}
