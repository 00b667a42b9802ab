use tlkit_schema::{enums, types};
use tlkit_wire::{Deserializable, Error, Identifiable, Mode, Serializable, TlObject};

/// Overwrite the first occurrence of `tag` in `bytes` and return its offset.
fn corrupt(bytes: &mut [u8], tag: u32) -> usize {
    let needle = tag.to_le_bytes();
    let at = bytes.windows(4).position(|w| w == needle).expect("tag present");
    bytes[at..at + 4].copy_from_slice(&0xdeadbeefu32.to_le_bytes());
    at
}

fn chat() -> enums::Peer {
    types::PeerChat { chat_id: 1234 }.into()
}

fn sent_message(id: i32, media: Option<enums::MessageMedia>) -> enums::Message {
    let mut m = types::Message::new(id, chat(), 1_700_000_000, format!("message {id}"));
    m.from_id = Some(types::PeerUser { user_id: 42 }.into());
    m.media = media;
    m.into()
}

// ── Tagged encoding ───────────────────────────────────────────────────────────

#[test]
fn peer_is_tag_then_body() {
    let peer: enums::Peer = types::PeerChannel { channel_id: 1 << 40 }.into();
    let bytes = peer.to_bytes();
    assert_eq!(&bytes[..4], &0xa2a5371eu32.to_le_bytes());
    assert_eq!(&bytes[4..], &(1i64 << 40).to_le_bytes());
    assert_eq!(enums::Peer::from_bytes(&bytes).unwrap(), peer);
    assert_eq!(peer.id(), 1 << 40);
}

#[test]
fn unit_constructors_are_just_a_tag() {
    let status: enums::UserStatus = types::UserStatusRecently.into();
    assert_eq!(status.to_bytes(), 0xe26f42f1u32.to_le_bytes());
    assert_eq!(enums::UserStatus::from_bytes(&status.to_bytes()).unwrap(), status);
}

#[test]
fn constructor_id_matches_variant() {
    let a: enums::InputUser = types::InputUserSelf.into();
    let b: enums::InputUser = types::InputUser { user_id: 5, access_hash: -5 }.into();
    assert_eq!(a.constructor_id(), types::InputUserSelf::CONSTRUCTOR_ID);
    assert_eq!(b.constructor_id(), 0xf21158c9);
}

#[test]
fn try_from_returns_the_family_on_mismatch() {
    let peer = chat();
    assert_eq!(types::PeerChat::try_from(peer.clone()).unwrap().chat_id, 1234);
    assert_eq!(types::PeerUser::try_from(peer.clone()), Err(peer));
}

#[test]
fn constructors_list_current_before_legacy() {
    let ids: Vec<u32> = enums::Peer::CONSTRUCTORS.iter().map(|&(id, _)| id).collect();
    assert_eq!(
        ids,
        [0x59511722, 0x36c6019a, 0xa2a5371e, 0x9db1bc6d, 0xbad0e5bb, 0xbddde532]
    );
    assert_eq!(enums::Peer::FAMILY, "Peer");
    assert_eq!(enums::messages::Messages::FAMILY, "messages.Messages");
}

// ── Whole objects ─────────────────────────────────────────────────────────────

#[test]
fn full_user_roundtrips() {
    let user = types::User {
        is_self: true,
        premium: true,
        bot_can_edit: true,
        id: 777_000_111_222,
        access_hash: Some(-99),
        first_name: Some("Ada".into()),
        username: Some("ada".into()),
        photo: Some(
            types::UserProfilePhoto {
                has_video: false,
                personal: true,
                photo_id: 9,
                stripped_thumb: Some(vec![1, 2, 3]),
                dc_id: 2,
            }
            .into(),
        ),
        status: Some(types::UserStatusOffline { was_online: 1000 }.into()),
        bot_info_version: Some(3),
        emoji_status: Some(types::EmojiStatusUntil { document_id: 5, until: 6 }.into()),
        usernames: Some(vec![
            types::Username { editable: true, active: true, username: "ada".into() }.into(),
        ]),
        ..Default::default()
    };
    let family = enums::User::from(user.clone());
    let back = enums::User::from_bytes(&family.to_bytes()).unwrap();
    assert_eq!(back, family);

    let types::User { bot_info_version, .. } = types::User::try_from(back).unwrap();
    assert_eq!(bot_info_version, Some(3));
    assert!(user.is_bot());
    assert!(!user.is_restricted());
}

#[test]
fn channel_with_rights_roundtrips() {
    let channel = types::Channel {
        creator: false,
        left: false,
        broadcast: true,
        verified: true,
        megagroup: false,
        signatures: false,
        min: false,
        scam: false,
        has_link: true,
        has_geo: false,
        slowmode_enabled: false,
        call_active: false,
        call_not_empty: false,
        fake: false,
        gigagroup: false,
        noforwards: true,
        id: 1_000_000_000_123,
        access_hash: Some(7),
        title: "News".into(),
        username: Some("news".into()),
        photo: types::ChatPhotoEmpty.into(),
        date: 1,
        restriction_reason: Some(vec![
            types::RestrictionReason {
                platform: "all".into(),
                reason: "porn".into(),
                text: "nope".into(),
            }
            .into(),
        ]),
        admin_rights: Some(
            (types::ChatAdminRights::POST_MESSAGES | types::ChatAdminRights::ANONYMOUS).into(),
        ),
        banned_rights: None,
        default_banned_rights: Some(
            types::ChatBannedRights {
                rights: types::BannedRights::SEND_POLLS,
                until_date: 0,
            }
            .into(),
        ),
        participants_count: Some(10_000),
    };
    assert!(channel.is_restricted());
    assert!(channel.flags().has(9));

    let chat = enums::Chat::from(channel);
    assert_eq!(enums::Chat::from_bytes(&chat.to_bytes()).unwrap(), chat);
    assert_eq!(chat.id(), 1_000_000_000_123);
}

#[test]
fn admin_rights_keep_unknown_bits() {
    let bits: u32 = (1 << 0) | (1 << 30);
    let mut bytes = Vec::new();
    0x5fb224d5u32.serialize(&mut bytes);
    bits.serialize(&mut bytes);

    let rights = enums::ChatAdminRights::from_bytes(&bytes).unwrap();
    let enums::ChatAdminRights::ChatAdminRights(inner) = rights.clone();
    assert!(inner.contains(types::ChatAdminRights::CHANGE_INFO));
    assert_eq!(rights.to_bytes(), bytes);
}

#[test]
fn message_with_everything_roundtrips() {
    let mut m = types::Message::new(10, chat(), 5, "hello **world**");
    m.out = true;
    m.from_id = Some(types::PeerUser { user_id: 42 }.into());
    m.fwd_from = Some(
        types::MessageFwdHeader {
            imported: false,
            from_id: Some(types::PeerChannel { channel_id: 3 }.into()),
            from_name: None,
            date: 4,
            channel_post: Some(99),
            post_author: Some("editor".into()),
            saved_from: Some(types::SavedFrom {
                peer: types::PeerChannel { channel_id: 3 }.into(),
                msg_id: 99,
            }),
            psa_type: None,
        }
        .into(),
    );
    m.reply_to = Some(
        types::MessageReplyHeader {
            reply_to_scheduled: false,
            forum_topic: true,
            reply_to_msg_id: 9,
            reply_to_peer_id: None,
            reply_to_top_id: Some(1),
        }
        .into(),
    );
    m.media = Some(
        types::MessageMediaGeoLive {
            geo: types::GeoPoint {
                long: 13.4,
                lat: 52.5,
                access_hash: 1,
                accuracy_radius: Some(20),
            }
            .into(),
            heading: Some(90),
            period: 900,
            proximity_notification_radius: None,
        }
        .into(),
    );
    m.reply_markup = Some(
        types::ReplyInlineMarkup {
            rows: vec![
                types::KeyboardButtonRow {
                    buttons: vec![
                        types::KeyboardButtonUrl { text: "site".into(), url: "https://x".into() }
                            .into(),
                        types::KeyboardButtonCallback {
                            requires_password: true,
                            text: "go".into(),
                            data: vec![0, 1, 2],
                        }
                        .into(),
                    ],
                }
                .into(),
            ],
        }
        .into(),
    );
    m.entities = Some(vec![
        types::MessageEntityBold { offset: 6, length: 9 }.into(),
        types::MessageEntityPre { offset: 0, length: 5, language: "rust".into() }.into(),
    ]);
    m.views = Some(types::ViewCounters { views: 100, forwards: 7 });
    m.replies = Some(
        types::MessageReplies {
            replies: 2,
            replies_pts: 3,
            recent_repliers: Some(vec![types::PeerUser { user_id: 1 }.into()]),
            channel_id: Some(1 << 33),
            max_id: Some(8),
            read_max_id: None,
        }
        .into(),
    );
    m.reactions = Some(
        types::MessageReactions {
            min: false,
            can_see_list: true,
            results: vec![
                types::ReactionCount {
                    chosen_order: Some(0),
                    reaction: types::ReactionEmoji { emoticon: "👍".into() }.into(),
                    count: 3,
                }
                .into(),
            ],
            recent_reactions: Some(vec![
                types::MessagePeerReaction {
                    big: true,
                    unread: false,
                    peer_id: types::PeerUser { user_id: 1 }.into(),
                    reaction: types::ReactionCustomEmoji { document_id: 77 }.into(),
                }
                .into(),
            ]),
        }
        .into(),
    );

    let message = enums::Message::from(m);
    let bytes = message.to_bytes();
    assert_eq!(&bytes[..4], &0x38116ee0u32.to_le_bytes());
    assert_eq!(enums::Message::from_bytes(&bytes).unwrap(), message);
}

#[test]
fn vector_results_decode_as_a_family() {
    let users: Vec<enums::User> = vec![
        types::UserEmpty { id: 1 }.into(),
        types::User { id: 2, deleted: true, ..Default::default() }.into(),
    ];
    let bytes = users.to_bytes();
    let decoded = Vec::<enums::User>::from_bytes_with(&bytes, Mode::Strict).unwrap();
    assert_eq!(decoded, Some(users));
}

#[test]
fn messages_helper_lists_messages() {
    let response: enums::messages::Messages = types::messages::MessagesSlice {
        inexact: true,
        count: 100,
        next_rate: None,
        offset_id_offset: Some(3),
        messages: vec![sent_message(1, None), sent_message(2, None)],
        chats: vec![],
        users: vec![],
    }
    .into();
    let back = enums::messages::Messages::from_bytes(&response.to_bytes()).unwrap();
    assert_eq!(back.messages().len(), 2);
    assert_eq!(back, response);

    let none: enums::messages::Messages = types::messages::MessagesNotModified { count: 5 }.into();
    assert!(none.messages().is_empty());
}

// ── Sender fallback ───────────────────────────────────────────────────────────

#[test]
fn missing_sender_is_filled_from_peer() {
    let m = types::Message::new(1, chat(), 2, "anon");
    let bytes = enums::Message::from(m).to_bytes();

    let decoded = enums::Message::from_bytes(&bytes).unwrap();
    let enums::Message::Message(inner) = &decoded else {
        panic!("expected message, got {decoded:?}");
    };
    assert_eq!(inner.from_id, Some(chat()));

    // Re-encoding now carries the sender explicitly.
    assert_ne!(decoded.to_bytes(), bytes);
}

#[test]
fn service_messages_get_a_sender_too() {
    let service = types::MessageService {
        out: false,
        mentioned: false,
        media_unread: false,
        silent: false,
        post: true,
        legacy: false,
        id: 5,
        from_id: None,
        peer_id: types::PeerChannel { channel_id: 8 }.into(),
        reply_to: None,
        date: 1,
        action: types::MessageActionChannelCreate { title: "c".into() }.into(),
        ttl_period: None,
    };
    let decoded = enums::Message::from_bytes(&enums::Message::from(service).to_bytes()).unwrap();
    let enums::Message::Service(inner) = decoded else { panic!() };
    assert_eq!(inner.from_id, Some(types::PeerChannel { channel_id: 8 }.into()));
}

#[test]
fn empty_message_has_no_sender() {
    let empty: enums::Message = types::MessageEmpty { id: 3, peer_id: None }.into();
    let decoded = enums::Message::from_bytes(&empty.to_bytes()).unwrap();
    assert_eq!(decoded, empty);
    assert_eq!(decoded.id(), 3);
    assert_eq!(decoded.peer_id(), None);
}

// ── Unknown constructors ──────────────────────────────────────────────────────

#[test]
fn unknown_top_level_tag() {
    let bytes = 0xdeadbeefu32.to_le_bytes();
    let err = enums::Peer::from_bytes_with(&bytes, Mode::Strict).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownConstructor { family: "Peer", id: 0xdeadbeef, offset: 0, depth: 1 }
    );
    assert_eq!(enums::Peer::from_bytes_with(&bytes, Mode::Lenient), Ok(None));
}

#[test]
fn unknown_nested_tag_reports_inner_family() {
    let mut bytes = sent_message(1, Some(types::MessageMediaUnsupported.into())).to_bytes();
    let at = corrupt(&mut bytes, types::MessageMediaUnsupported::CONSTRUCTOR_ID);

    let err = enums::Message::from_bytes_with(&bytes, Mode::Strict).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownConstructor { family: "MessageMedia", id: 0xdeadbeef, offset: at, depth: 2 }
    );
    assert_eq!(enums::Message::from_bytes_with(&bytes, Mode::Lenient), Ok(None));
}

#[test]
fn one_bad_element_drops_the_whole_response() {
    let messages: Vec<enums::Message> = (1..=10)
        .map(|i| {
            let media = (i == 5).then(|| types::MessageMediaUnsupported.into());
            sent_message(i, media)
        })
        .collect();
    let response: enums::messages::Messages =
        types::messages::Messages { messages, chats: vec![], users: vec![] }.into();
    let mut bytes = response.to_bytes();
    let at = corrupt(&mut bytes, types::MessageMediaUnsupported::CONSTRUCTOR_ID);

    assert_eq!(enums::messages::Messages::from_bytes_with(&bytes, Mode::Lenient), Ok(None));

    let err = enums::messages::Messages::from_bytes_with(&bytes, Mode::Strict).unwrap_err();
    assert_eq!(err.offset(), at);
    assert!(matches!(
        err,
        Error::UnknownConstructor { family: "MessageMedia", depth: 3, .. }
    ));
}

#[test]
fn truncated_input_is_never_hidden() {
    let bytes = sent_message(1, None).to_bytes();
    let cut = &bytes[..bytes.len() - 2];
    for mode in [Mode::Strict, Mode::Lenient] {
        let result = enums::Message::from_bytes_with(cut, mode);
        assert!(matches!(result, Err(Error::UnexpectedEof { .. })), "{mode:?}: {result:?}");
    }
}

#[test]
fn malformed_bool_inside_object() {
    let settings = types::PeerNotifySettings {
        show_previews: Some(false),
        ..Default::default()
    };
    let mut bytes = enums::PeerNotifySettings::from(settings).to_bytes();
    let at = corrupt(&mut bytes, tlkit_wire::BOOL_FALSE);

    let err = enums::PeerNotifySettings::from_bytes_with(&bytes, Mode::Strict).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedField { family: "PeerNotifySettings", depth: 1, .. }
    ));
    assert_eq!(err.offset(), at);
    assert_eq!(enums::PeerNotifySettings::from_bytes_with(&bytes, Mode::Lenient), Ok(None));
}
