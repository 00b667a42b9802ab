//! Payloads from older layers decode into today's shapes and re-encode with
//! today's tags.

use tlkit_schema::{enums, types};
use tlkit_wire::{Deserializable, Flags, Identifiable, Mode, Serializable, TlObject};

fn start(tag: u32) -> Vec<u8> {
    tag.to_le_bytes().to_vec()
}

fn tag_of(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes[..4].try_into().unwrap())
}

fn contains_tag(bytes: &[u8], tag: u32) -> bool {
    bytes.windows(4).any(|w| w == tag.to_le_bytes())
}

// ── Peers and ids ─────────────────────────────────────────────────────────────

#[test]
fn int_peer_widens_to_long() {
    let mut b = start(0x9db1bc6d);
    42i32.serialize(&mut b);

    let peer = enums::Peer::from_bytes(&b).unwrap();
    assert_eq!(peer, types::PeerUser { user_id: 42 }.into());

    let again = peer.to_bytes();
    assert_eq!(tag_of(&again), 0x59511722);
    assert_eq!(&again[4..], &42i64.to_le_bytes());
}

#[test]
fn int_chat_peer_widens_to_long() {
    let mut b = start(0xbad0e5bb);
    (-5i32).serialize(&mut b);

    let peer = enums::Peer::from_bytes(&b).unwrap();
    assert_eq!(peer, types::PeerChat { chat_id: -5 }.into());
    assert_eq!(tag_of(&peer.to_bytes()), 0x36c6019a);
}

#[test]
fn legacy_input_channel() {
    let mut b = start(0xafeb712e);
    9i32.serialize(&mut b);
    (-1i64).serialize(&mut b);
    let channel = enums::InputChannel::from_bytes(&b).unwrap();
    assert_eq!(channel, types::InputChannel { channel_id: 9, access_hash: -1 }.into());
}

// ── Users ─────────────────────────────────────────────────────────────────────

#[test]
fn int_id_user() {
    let mut b = start(0x938458c1);
    Flags::empty().with(0, true).with(1, true).with(14, true).serialize(&mut b);
    1234i32.serialize(&mut b);
    55i64.serialize(&mut b);
    "Bot".serialize(&mut b);
    7i32.serialize(&mut b);

    let user = enums::User::from_bytes(&b).unwrap();
    let expected = types::User {
        id: 1234,
        access_hash: Some(55),
        first_name: Some("Bot".into()),
        bot_info_version: Some(7),
        ..Default::default()
    };
    assert_eq!(user, expected.clone().into());
    assert!(expected.is_bot());

    let again = user.to_bytes();
    assert_eq!(tag_of(&again), 0x8f97c628);
    assert_eq!(enums::User::from_bytes(&again).unwrap(), user);
}

#[test]
fn user_without_second_flags_word() {
    let mut b = start(0x5d99adee);
    Flags::empty().with(30, true).serialize(&mut b);
    (1i64 << 35).serialize(&mut b);
    0x929b619du32.serialize(&mut b);
    11i64.serialize(&mut b);

    let enums::User::User(user) = enums::User::from_bytes(&b).unwrap() else {
        panic!("expected user");
    };
    assert_eq!(user.id, 1 << 35);
    assert_eq!(user.emoji_status, Some(types::EmojiStatus { document_id: 11 }.into()));
    assert_eq!(user.usernames, None);
    assert!(!user.bot_can_edit);
}

#[test]
fn legacy_empty_user() {
    let mut b = start(0x200250ba);
    3i32.serialize(&mut b);
    let user = enums::User::from_bytes(&b).unwrap();
    assert_eq!(user.id(), 3);
    assert_eq!(tag_of(&user.to_bytes()), 0xd3bc4b7a);
}

#[test]
fn unknown_tag_inside_legacy_user_is_lenient() {
    let mut b = start(0x3ff6ecb0);
    Flags::empty().with(6, true).serialize(&mut b);
    1i64.serialize(&mut b);
    0xdeadbeefu32.serialize(&mut b);

    assert_eq!(enums::User::from_bytes_with(&b, Mode::Lenient), Ok(None));
    assert!(enums::User::from_bytes_with(&b, Mode::Strict).is_err());
}

#[test]
fn premium_bits_are_ignored_before_they_existed() {
    let mut b = start(0x3ff6ecb0);
    Flags::empty()
        .with(27, true)
        .with(28, true)
        .with(29, true)
        .with(30, true)
        .serialize(&mut b);
    7i64.serialize(&mut b);

    let user = enums::User::from_bytes(&b).unwrap();
    let enums::User::User(inner) = &user else { panic!("{user:?}") };
    assert_eq!(inner.id, 7);
    assert_eq!(inner.emoji_status, None);
    assert!(!inner.bot_attach_menu && !inner.premium && !inner.attach_menu_enabled);

    let again = user.to_bytes();
    assert_eq!(tag_of(&again), 0x8f97c628);
    assert_eq!(&again[4..8], &0u32.to_le_bytes());
}

#[test]
fn int_id_user_ignores_emoji_status_bit() {
    let mut b = start(0x938458c1);
    Flags::empty().with(1, true).with(30, true).serialize(&mut b);
    9i32.serialize(&mut b);
    "Ann".serialize(&mut b);

    let enums::User::User(user) = enums::User::from_bytes(&b).unwrap() else {
        panic!("expected user");
    };
    assert_eq!(user.id, 9);
    assert_eq!(user.first_name.as_deref(), Some("Ann"));
    assert_eq!(user.emoji_status, None);
}

#[test]
fn profile_photo_before_personal_photos() {
    let mut b = start(0xcc656077);
    Flags::empty().with(0, true).with(2, true).serialize(&mut b);
    9i64.serialize(&mut b);
    2i32.serialize(&mut b);

    let photo = enums::UserProfilePhoto::from_bytes(&b).unwrap();
    let expected = types::UserProfilePhoto {
        has_video: true,
        personal: false,
        photo_id: 9,
        stripped_thumb: None,
        dc_id: 2,
    };
    assert_eq!(photo, expected.into());

    let again = photo.to_bytes();
    assert_eq!(tag_of(&again), 0x82d1f706);
    assert_eq!(enums::UserProfilePhoto::from_bytes(&again).unwrap(), photo);
}

// ── Chats ─────────────────────────────────────────────────────────────────────

#[test]
fn kicked_member_has_left() {
    let mut b = start(0x3bda1bde);
    Flags::empty().with(1, true).serialize(&mut b);
    77i32.serialize(&mut b);
    "Old".serialize(&mut b);
    0x37c1011cu32.serialize(&mut b);
    3i32.serialize(&mut b);
    4i32.serialize(&mut b);
    1i32.serialize(&mut b);

    let chat = enums::Chat::from_bytes(&b).unwrap();
    let enums::Chat::Chat(inner) = &chat else { panic!("{chat:?}") };
    assert!(inner.left);
    assert!(!inner.noforwards);
    assert_eq!(inner.id, 77);
    assert_eq!(inner.title, "Old");
    assert_eq!(tag_of(&chat.to_bytes()), 0x41cbf256);
}

#[test]
fn legacy_forbidden_chats() {
    let mut b = start(0x07328bdb);
    5i32.serialize(&mut b);
    "gone".serialize(&mut b);
    assert_eq!(
        enums::Chat::from_bytes(&b).unwrap(),
        types::ChatForbidden { id: 5, title: "gone".into() }.into()
    );

    let mut b = start(0x289da732);
    Flags::empty().with(8, true).serialize(&mut b);
    6i32.serialize(&mut b);
    2i64.serialize(&mut b);
    "banned".serialize(&mut b);
    let chat = enums::Chat::from_bytes(&b).unwrap();
    let enums::Chat::ChannelForbidden(inner) = chat else { panic!() };
    assert!(inner.megagroup);
    assert_eq!(inner.id, 6);
    assert_eq!(inner.until_date, None);
}

// ── Messages ──────────────────────────────────────────────────────────────────

#[test]
fn pre_thread_message() {
    let mut b = start(0x452c0e65);
    Flags::empty()
        .with(3, true)
        .with(8, true)
        .with(10, true)
        .with(14, true)
        .serialize(&mut b);
    100i32.serialize(&mut b);
    42i32.serialize(&mut b);
    // the chat is itself a legacy peer
    0xbddde532u32.serialize(&mut b);
    9i32.serialize(&mut b);
    99i32.serialize(&mut b);
    1000i32.serialize(&mut b);
    "old".serialize(&mut b);
    500i32.serialize(&mut b);

    let message = enums::Message::from_bytes(&b).unwrap();
    let enums::Message::Message(m) = &message else { panic!("{message:?}") };
    assert_eq!(m.id, 100);
    assert!(m.post);
    assert_eq!(m.from_id, Some(types::PeerUser { user_id: 42 }.into()));
    assert_eq!(m.peer_id, types::PeerChannel { channel_id: 9 }.into());
    let Some(enums::MessageReplyHeader::MessageReplyHeader(reply)) = &m.reply_to else {
        panic!("no reply header");
    };
    assert_eq!(reply.reply_to_msg_id, 99);
    assert_eq!(m.views, Some(types::ViewCounters { views: 500, forwards: 0 }));
    assert_eq!(m.reactions, None);

    let again = message.to_bytes();
    assert_eq!(tag_of(&again), 0x38116ee0);
    assert!(!contains_tag(&again, 0xbddde532));
    assert_eq!(enums::Message::from_bytes(&again).unwrap(), message);
}

#[test]
fn message_without_reactions() {
    let mut plain = types::Message::new(1, types::PeerUser { user_id: 2 }.into(), 3, "hi");
    plain.from_id = Some(types::PeerUser { user_id: 2 }.into());
    plain.via_bot_id = Some(1 << 40);

    // Same body, tagged as the layer before reactions.
    let mut b = start(0x85d6cbe2);
    plain.serialize(&mut b);
    assert_eq!(enums::Message::from_bytes(&b).unwrap(), plain.clone().into());
}

#[test]
fn old_service_message_gets_a_sender() {
    let mut b = start(0x9e19a1f6);
    Flags::empty().serialize(&mut b);
    5i32.serialize(&mut b);
    0x9db1bc6du32.serialize(&mut b);
    7i32.serialize(&mut b);
    1i32.serialize(&mut b);
    0x488a7337u32.serialize(&mut b);
    vec![1i32, 2].serialize(&mut b);

    let enums::Message::Service(s) = enums::Message::from_bytes(&b).unwrap() else {
        panic!("expected service message");
    };
    let user_7: enums::Peer = types::PeerUser { user_id: 7 }.into();
    assert_eq!(s.peer_id, user_7);
    assert_eq!(s.from_id, Some(user_7));
    assert_eq!(s.action, types::MessageActionChatAddUser { users: vec![1, 2] }.into());
}

#[test]
fn legacy_empty_message() {
    let mut b = start(0x83e5de54);
    12i32.serialize(&mut b);
    let message = enums::Message::from_bytes(&b).unwrap();
    assert_eq!(message, types::MessageEmpty { id: 12, peer_id: None }.into());
}

#[test]
fn legacy_media() {
    let mut b = start(0x7c3c2609);
    0x0296f104u32.serialize(&mut b);
    1.5f64.serialize(&mut b);
    2.5f64.serialize(&mut b);
    3i64.serialize(&mut b);
    60i32.serialize(&mut b);

    let media = enums::MessageMedia::from_bytes(&b).unwrap();
    let expected = types::MessageMediaGeoLive {
        geo: types::GeoPoint { long: 1.5, lat: 2.5, access_hash: 3, accuracy_radius: None }.into(),
        heading: None,
        period: 60,
        proximity_notification_radius: None,
    };
    assert_eq!(media, expected.into());
}

#[test]
fn message_before_noforwards() {
    let peer: enums::Peer = types::PeerUser { user_id: 2 }.into();
    let mut b = start(0x58ae39c9);
    Flags::empty().with(11, true).with(26, true).serialize(&mut b);
    1i32.serialize(&mut b);
    peer.serialize(&mut b);
    5i32.serialize(&mut b);
    3i32.serialize(&mut b);
    "hi".serialize(&mut b);

    let message = enums::Message::from_bytes(&b).unwrap();
    let mut expected = types::Message::new(1, peer.clone(), 3, "hi");
    expected.from_id = Some(peer);
    expected.via_bot_id = Some(5);
    assert_eq!(message, expected.into());

    let again = message.to_bytes();
    assert_eq!(tag_of(&again), 0x38116ee0);
    assert_eq!(enums::Message::from_bytes(&again).unwrap(), message);
}

#[test]
fn int_id_chat_actions() {
    let mut b = start(0xa6638b9a);
    "group".serialize(&mut b);
    vec![1i32, 2].serialize(&mut b);
    let action = enums::MessageAction::from_bytes(&b).unwrap();
    assert_eq!(
        action,
        types::MessageActionChatCreate { title: "group".into(), users: vec![1, 2] }.into()
    );
    assert_eq!(tag_of(&action.to_bytes()), 0xbd47cbad);

    let mut b = start(0xb2ae9b0c);
    4i32.serialize(&mut b);
    let action = enums::MessageAction::from_bytes(&b).unwrap();
    assert_eq!(action, types::MessageActionChatDeleteUser { user_id: 4 }.into());
    assert_eq!(tag_of(&action.to_bytes()), 0xa43f30cc);

    let mut b = start(0xf89cf5e8);
    6i32.serialize(&mut b);
    let action = enums::MessageAction::from_bytes(&b).unwrap();
    assert_eq!(action, types::MessageActionChatJoinedByLink { inviter_id: 6 }.into());
    assert_eq!(tag_of(&action.to_bytes()), 0x031224c3);
}

#[test]
fn contact_with_int_user_id() {
    let mut b = start(0xcbf24940);
    "+100".serialize(&mut b);
    "Ann".serialize(&mut b);
    "".serialize(&mut b);
    "".serialize(&mut b);
    77i32.serialize(&mut b);

    let media = enums::MessageMedia::from_bytes(&b).unwrap();
    let expected = types::MessageMediaContact {
        phone_number: "+100".into(),
        first_name: "Ann".into(),
        last_name: String::new(),
        vcard: String::new(),
        user_id: 77,
    };
    assert_eq!(media, expected.into());
    assert_eq!(tag_of(&media.to_bytes()), 0x70322949);
}

#[test]
fn comment_thread_with_int_channel() {
    let mut b = start(0x4128faac);
    Flags::empty().with(0, true).serialize(&mut b);
    4i32.serialize(&mut b);
    5i32.serialize(&mut b);
    321i32.serialize(&mut b);

    let enums::MessageReplies::MessageReplies(replies) =
        enums::MessageReplies::from_bytes(&b).unwrap();
    assert!(replies.comments());
    assert_eq!(replies.channel_id, Some(321));
}

// ── Reactions ─────────────────────────────────────────────────────────────────

#[test]
fn emoji_string_reactions() {
    let mut b = start(0x087b6e36);
    Flags::empty().with(1, true).serialize(&mut b);

    tlkit_wire::VECTOR.serialize(&mut b);
    1i32.serialize(&mut b);
    0x6fb250d1u32.serialize(&mut b);
    Flags::empty().with(0, true).serialize(&mut b);
    "❤".serialize(&mut b);
    2i32.serialize(&mut b);

    tlkit_wire::VECTOR.serialize(&mut b);
    1i32.serialize(&mut b);
    0x932844fau32.serialize(&mut b);
    5i64.serialize(&mut b);
    "❤".serialize(&mut b);

    let reactions = enums::MessageReactions::from_bytes(&b).unwrap();
    let heart: enums::Reaction = types::ReactionEmoji { emoticon: "❤".into() }.into();
    let expected = types::MessageReactions {
        min: false,
        can_see_list: false,
        results: vec![
            types::ReactionCount { chosen_order: Some(0), reaction: heart.clone(), count: 2 }.into(),
        ],
        recent_reactions: Some(vec![
            types::MessagePeerReaction {
                big: false,
                unread: false,
                peer_id: types::PeerUser { user_id: 5 }.into(),
                reaction: heart,
            }
            .into(),
        ]),
    };
    assert_eq!(reactions, expected.into());

    let again = reactions.to_bytes();
    assert_eq!(tag_of(&again), 0x4f2b9479);
    assert!(contains_tag(&again, 0xa3d1cb80));
    assert!(contains_tag(&again, 0xb156fe9c));
}

#[test]
fn first_reactions_layout() {
    let mut b = start(0xb87a24d1);
    Flags::empty().with(0, true).serialize(&mut b);
    Vec::<enums::ReactionCount>::new().serialize(&mut b);

    let enums::MessageReactions::MessageReactions(r) =
        enums::MessageReactions::from_bytes(&b).unwrap();
    assert!(r.min);
    assert!(r.results.is_empty());
    assert_eq!(r.recent_reactions, None);
}

#[test]
fn empty_reaction_string_means_no_reaction() {
    let mut b = start(0x51b67eff);
    Flags::empty().serialize(&mut b);
    0x59511722u32.serialize(&mut b);
    1i64.serialize(&mut b);
    "".serialize(&mut b);

    let enums::MessagePeerReaction::MessagePeerReaction(r) =
        enums::MessagePeerReaction::from_bytes(&b).unwrap();
    assert_eq!(r.reaction, types::ReactionEmpty.into());
}

// ── Profiles ──────────────────────────────────────────────────────────────────

fn old_notify_settings(sound: &str) -> enums::PeerNotifySettings {
    let mut b = start(0xaf509d20);
    Flags::empty().with(2, true).with(3, true).serialize(&mut b);
    10i32.serialize(&mut b);
    sound.serialize(&mut b);
    enums::PeerNotifySettings::from_bytes(&b).unwrap()
}

#[test]
fn sound_names_become_notification_sounds() {
    let enums::PeerNotifySettings::PeerNotifySettings(s) = old_notify_settings("default");
    assert_eq!(s.mute_until, Some(10));
    assert_eq!(s.other_sound, Some(types::NotificationSoundDefault.into()));
    assert_eq!(s.ios_sound, None);

    let enums::PeerNotifySettings::PeerNotifySettings(s) = old_notify_settings("");
    assert_eq!(s.other_sound, Some(types::NotificationSoundNone.into()));

    let enums::PeerNotifySettings::PeerNotifySettings(s) = old_notify_settings("chime.mp3");
    assert_eq!(
        s.other_sound,
        Some(
            types::NotificationSoundLocal { title: "chime.mp3".into(), data: "chime.mp3".into() }
                .into()
        )
    );
}

#[test]
fn bot_info_without_menu_button() {
    let mut b = start(0x98e81d3a);
    3i32.serialize(&mut b);
    "helps".serialize(&mut b);
    let commands: Vec<enums::BotCommand> = vec![
        types::BotCommand { command: "start".into(), description: "go".into() }.into(),
    ];
    commands.serialize(&mut b);

    let info = enums::BotInfo::from_bytes(&b).unwrap();
    let expected = types::BotInfo {
        user_id: 3,
        description: "helps".into(),
        commands,
        menu_button: types::BotMenuButtonDefault.into(),
    };
    assert_eq!(info, expected.into());
}

#[test]
fn bot_info_with_long_id_without_menu_button() {
    let mut b = start(0x1b74b335);
    (1i64 << 33).serialize(&mut b);
    "helps".serialize(&mut b);
    Vec::<enums::BotCommand>::new().serialize(&mut b);

    let info = enums::BotInfo::from_bytes(&b).unwrap();
    let expected = types::BotInfo {
        user_id: 1 << 33,
        description: "helps".into(),
        commands: Vec::new(),
        menu_button: types::BotMenuButtonDefault.into(),
    };
    assert_eq!(info, expected.into());
    assert_eq!(tag_of(&info.to_bytes()), 0xe4169b5d);
}

#[test]
fn user_full_with_embedded_user() {
    let mut b = start(0xedf17c12);
    Flags::empty().with(1, true).serialize(&mut b);
    0x200250bau32.serialize(&mut b);
    88i32.serialize(&mut b);
    "hi".serialize(&mut b);
    0x733f2961u32.serialize(&mut b);
    Flags::empty().serialize(&mut b);
    0xaf509d20u32.serialize(&mut b);
    Flags::empty().serialize(&mut b);
    4i32.serialize(&mut b);

    let full = enums::UserFull::from_bytes(&b).unwrap();
    let enums::UserFull::UserFull(inner) = &full;
    assert_eq!(inner.id, 88);
    assert_eq!(inner.about.as_deref(), Some("hi"));
    assert_eq!(inner.settings, types::PeerSettings::default().into());
    assert_eq!(inner.notify_settings, types::PeerNotifySettings::default().into());
    assert_eq!(inner.common_chats_count, 4);
    assert_eq!(inner.theme_emoticon, None);

    assert_eq!(tag_of(&full.to_bytes()), 0xc4b1fc3f);
}

#[test]
fn bits_an_old_layer_never_defined_are_ignored() {
    let mut b = start(0xcf366521);
    Flags::empty().with(20, true).with(21, true).serialize(&mut b);
    5i64.serialize(&mut b);
    types::PeerSettings::CONSTRUCTOR_ID.serialize(&mut b);
    Flags::empty().serialize(&mut b);
    types::PeerNotifySettings::CONSTRUCTOR_ID.serialize(&mut b);
    Flags::empty().serialize(&mut b);
    0i32.serialize(&mut b);

    let enums::UserFull::UserFull(inner) = enums::UserFull::from_bytes(&b).unwrap();
    assert!(!inner.voice_messages_forbidden);
    assert_eq!(inner.personal_photo, None);
    assert_eq!(inner.flags().bits(), 0);
}

#[test]
fn invite_before_descriptions() {
    let mut b = start(0xdfc2f58e);
    Flags::empty().with(0, true).with(5, true).serialize(&mut b);
    "T".serialize(&mut b);
    0x2331b22du32.serialize(&mut b);
    0i64.serialize(&mut b);
    10i32.serialize(&mut b);

    let invite = enums::ChatInvite::from_bytes(&b).unwrap();
    let enums::ChatInvite::ChatInvite(inner) = &invite else { panic!("{invite:?}") };
    assert!(inner.channel);
    assert_eq!(inner.about, None);
    assert_eq!(inner.participants_count, 10);
    assert!(!inner.flags().has(5));
    assert_eq!(tag_of(&invite.to_bytes()), 0x300c44c1);
}

#[test]
fn join_request_banner_is_absent_before_it_existed() {
    let mut b = start(0x733f2961);
    Flags::empty().with(0, true).with(6, true).serialize(&mut b);
    1500i32.serialize(&mut b);

    let enums::PeerSettings::PeerSettings(s) = enums::PeerSettings::from_bytes(&b).unwrap();
    assert!(s.report_spam);
    assert_eq!(s.geo_distance, Some(1500));
    assert_eq!(s.request_chat, None);
}

// ── Registry ──────────────────────────────────────────────────────────────────

fn has(table: &[(u32, &'static str)], id: u32, name: &str) -> bool {
    table.iter().any(|&(tag, n)| tag == id && n == name)
}

#[test]
fn legacy_tags_are_registered_under_their_own_names() {
    assert!(has(enums::Message::CONSTRUCTORS, 0x452c0e65, "message"));
    assert!(has(enums::Message::CONSTRUCTORS, 0x9e19a1f6, "messageService"));
    assert!(has(enums::MessagePeerReaction::CONSTRUCTORS, 0x932844fa, "messageUserReaction"));
    assert_eq!(enums::User::FAMILY, "User");
}
