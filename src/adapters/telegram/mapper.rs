//! Map wire variants to domain entities.
//!
//! One function per destination type, each an exhaustive `match` over the
//! boxed wire type.

use crate::domain::flags::{ChannelFlags, ChatFlags, UserFlags};
use crate::domain::{
    AnyChat, Channel, ChannelKind, Chat, ChatKind, Contact, Dialog, Document, FileLocation,
    InputContact, Peer, Photo, PhotoSize, ProfilePhoto, User, UserStatus,
};
use crate::tl::{enums, types};
use tracing::debug;

pub fn peer_to_domain(peer: &enums::Peer) -> Peer {
    match *peer {
        enums::Peer::User { user_id } => Peer::User(user_id),
        enums::Peer::Chat { chat_id } => Peer::Chat(chat_id),
        enums::Peer::Channel { channel_id } => Peer::Channel(channel_id),
    }
}

pub fn file_location_to_domain(location: &enums::FileLocation) -> FileLocation {
    match *location {
        enums::FileLocation::Unavailable {
            volume_id,
            local_id,
            secret,
        } => FileLocation {
            dc_id: None,
            volume_id,
            local_id,
            secret,
        },
        enums::FileLocation::Location {
            dc_id,
            volume_id,
            local_id,
            secret,
        } => FileLocation {
            dc_id: Some(dc_id),
            volume_id,
            local_id,
            secret,
        },
    }
}

/// `userProfilePhotoEmpty` maps to `None`.
pub fn profile_photo_to_domain(photo: &enums::UserProfilePhoto) -> Option<ProfilePhoto> {
    match photo {
        enums::UserProfilePhoto::Empty => None,
        enums::UserProfilePhoto::Photo {
            photo_id,
            photo_small,
            photo_big,
        } => Some(ProfilePhoto {
            photo_id: *photo_id,
            small: file_location_to_domain(photo_small),
            big: file_location_to_domain(photo_big),
        }),
    }
}

pub fn user_status_to_domain(status: &enums::UserStatus) -> UserStatus {
    match *status {
        enums::UserStatus::Empty => UserStatus::Empty,
        enums::UserStatus::Online { expires } => UserStatus::Online { expires },
        enums::UserStatus::Offline { was_online } => UserStatus::Offline { was_online },
        enums::UserStatus::Recently => UserStatus::Recently,
        enums::UserStatus::LastWeek => UserStatus::LastWeek,
        enums::UserStatus::LastMonth => UserStatus::LastMonth,
    }
}

pub fn user_to_domain(user: &types::User) -> User {
    User {
        id: user.id,
        access_hash: user.access_hash,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        username: user.username.clone(),
        phone: user.phone.clone(),
        flags: UserFlags::from_raw(user.flags),
        status: user.status.as_ref().map(user_status_to_domain),
        photo: user.photo.as_ref().and_then(profile_photo_to_domain),
    }
}

/// A `userEmpty` carries nothing but its id.
pub fn user_empty_to_domain(user: &types::UserEmpty) -> User {
    User {
        id: user.id,
        ..Default::default()
    }
}

pub fn basic_chat_to_domain(chat: &types::Chat) -> Chat {
    let migrated_to = match chat.migrated_to {
        Some(enums::InputChannel::Channel { channel_id, .. }) => Some(channel_id),
        Some(enums::InputChannel::Empty) | None => None,
    };
    Chat {
        id: chat.id,
        kind: ChatKind::Normal,
        title: chat.title.clone(),
        participants_count: Some(chat.participants_count),
        date: Some(chat.date),
        version: Some(chat.version),
        flags: ChatFlags::from_raw(chat.flags),
        migrated_to,
        ..Default::default()
    }
}

pub fn chat_full_to_domain(full: &types::ChatFull) -> Chat {
    let mut chat = Chat {
        id: full.id,
        kind: ChatKind::Full,
        ..Default::default()
    };
    enrich_chat(&mut chat, full);
    chat
}

/// Merge the full-info fields into a chat built from a side-list entry.
pub fn enrich_chat(chat: &mut Chat, full: &types::ChatFull) {
    chat.kind = ChatKind::Full;
    chat.about = full.about.clone();
    chat.invite_link = full.exported_invite.link().map(String::from);
    match &full.participants {
        enums::ChatParticipants::Participants {
            participants,
            version,
            ..
        } => {
            chat.participant_ids = participants.iter().map(|p| p.user_id()).collect();
            chat.participants_count = Some(participants.len() as i32);
            chat.version = Some(*version);
        }
        enums::ChatParticipants::Forbidden { .. } => {
            debug!(chat_id = full.id, "participants hidden");
        }
    }
}

pub fn channel_to_domain(channel: &types::Channel) -> Channel {
    Channel {
        id: channel.id,
        kind: ChannelKind::Normal,
        access_hash: channel.access_hash,
        title: channel.title.clone(),
        username: channel.username.clone(),
        date: Some(channel.date),
        version: Some(channel.version),
        flags: ChannelFlags::from_raw(channel.flags),
        ..Default::default()
    }
}

pub fn channel_full_to_domain(full: &types::ChannelFull) -> Channel {
    Channel {
        id: full.id,
        kind: ChannelKind::Full,
        about: Some(full.about.clone()),
        participants_count: full.participants_count,
        invite_link: full.exported_invite.link().map(String::from),
        ..Default::default()
    }
}

/// Normalize one entry of a chats side-list. Basic groups and channels come
/// back as their own families.
pub fn any_chat_to_domain(chat: &enums::Chat) -> AnyChat {
    match chat {
        enums::Chat::Empty(c) => AnyChat::Chat(Chat {
            id: c.id,
            kind: ChatKind::Empty,
            ..Default::default()
        }),
        enums::Chat::Chat(c) => AnyChat::Chat(basic_chat_to_domain(c)),
        enums::Chat::Forbidden(c) => AnyChat::Chat(Chat {
            id: c.id,
            kind: ChatKind::Forbidden,
            title: c.title.clone(),
            ..Default::default()
        }),
        enums::Chat::Full(c) => AnyChat::Chat(chat_full_to_domain(c)),
        enums::Chat::Channel(c) => AnyChat::Channel(channel_to_domain(c)),
        enums::Chat::ChannelForbidden(c) => AnyChat::Channel(Channel {
            id: c.id,
            kind: ChannelKind::Forbidden,
            access_hash: Some(c.access_hash),
            title: c.title.clone(),
            flags: ChannelFlags::from_raw(c.flags),
            ..Default::default()
        }),
        enums::Chat::ChannelFull(c) => AnyChat::Channel(channel_full_to_domain(c)),
    }
}

pub fn contact_to_domain(contact: &types::Contact) -> Contact {
    Contact::Mutual {
        user_id: contact.user_id,
        mutual: contact.mutual,
    }
}

pub fn imported_contact_to_domain(contact: &types::ImportedContact) -> Contact {
    Contact::Imported {
        user_id: contact.user_id,
        client_id: contact.client_id,
    }
}

pub fn input_contact_to_domain(contact: &types::InputPhoneContact) -> Contact {
    Contact::Input(InputContact {
        client_id: contact.client_id,
        first_name: contact.first_name.clone(),
        last_name: contact.last_name.clone(),
        phone: contact.phone.clone(),
    })
}

/// `photoEmpty` maps to `None`. Size entries without dimensions are skipped.
pub fn photo_to_domain(photo: &enums::Photo) -> Option<Photo> {
    match photo {
        enums::Photo::Empty { .. } => None,
        enums::Photo::Photo(p) => Some(Photo {
            id: p.id,
            access_hash: p.access_hash,
            date: p.date,
            sizes: p.sizes.iter().filter_map(photo_size_to_domain).collect(),
        }),
    }
}

fn photo_size_to_domain(size: &enums::PhotoSize) -> Option<PhotoSize> {
    match size {
        enums::PhotoSize::Empty { .. } => None,
        enums::PhotoSize::Size { kind, w, h, size } => Some(PhotoSize {
            kind: kind.clone(),
            w: *w,
            h: *h,
            size: *size,
        }),
        enums::PhotoSize::Cached { kind, w, h, bytes } => Some(PhotoSize {
            kind: kind.clone(),
            w: *w,
            h: *h,
            size: bytes.len() as i32,
        }),
    }
}

pub fn document_to_domain(document: &enums::Document) -> Option<Document> {
    match document {
        enums::Document::Empty { .. } => None,
        enums::Document::Document(d) => Some(Document {
            id: d.id,
            access_hash: d.access_hash,
            date: d.date,
            mime_type: d.mime_type.clone(),
            size: d.size,
            dc_id: d.dc_id,
            file_name: d.attributes.iter().find_map(|a| match a {
                enums::DocumentAttribute::Filename { file_name } => Some(file_name.clone()),
                _ => None,
            }),
        }),
    }
}

/// Bare dialog. Top message and peer entity are filled in by the join index.
pub fn dialog_to_domain(dialog: &types::Dialog) -> Dialog {
    Dialog {
        peer: peer_to_domain(&dialog.peer),
        top_message_id: dialog.top_message,
        top_message: None,
        unread_count: dialog.unread_count,
        read_inbox_max_id: dialog.read_inbox_max_id,
        read_outbox_max_id: dialog.read_outbox_max_id,
        pts: dialog.pts,
        peer_access_hash: None,
        entity: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_flags_and_status() {
        let user = types::User {
            flags: (1 << 10) | (1 << 14),
            id: 42,
            access_hash: Some(7),
            first_name: Some("Ada".into()),
            status: Some(enums::UserStatus::Offline { was_online: 1000 }),
            photo: Some(enums::UserProfilePhoto::Empty),
            ..Default::default()
        };
        let mapped = user_to_domain(&user);
        assert!(mapped.flags.is_self);
        assert!(mapped.flags.bot);
        assert!(!mapped.flags.contact);
        assert_eq!(mapped.status, Some(UserStatus::Offline { was_online: 1000 }));
        assert_eq!(mapped.photo, None);
        assert_eq!(mapped.access_hash, Some(7));
    }

    #[test]
    fn test_user_empty_keeps_only_id() {
        let mapped = user_empty_to_domain(&types::UserEmpty { id: 9 });
        assert_eq!(mapped.id, 9);
        assert_eq!(mapped.access_hash, None);
        assert_eq!(mapped.full_name(), "");
    }

    #[test]
    fn test_chat_families_are_routed() {
        let chat = enums::Chat::Chat(types::Chat {
            id: 1,
            title: "group".into(),
            participants_count: 3,
            migrated_to: Some(enums::InputChannel::Channel {
                channel_id: 500,
                access_hash: 1,
            }),
            ..Default::default()
        });
        let channel = enums::Chat::ChannelForbidden(types::ChannelForbidden {
            flags: 1 << 8,
            id: 2,
            access_hash: 99,
            title: "gone".into(),
        });

        match any_chat_to_domain(&chat) {
            AnyChat::Chat(c) => {
                assert_eq!(c.kind, ChatKind::Normal);
                assert_eq!(c.migrated_to, Some(500));
                assert_eq!(c.participants_count, Some(3));
            }
            other => panic!("expected chat, got {:?}", other),
        }
        match any_chat_to_domain(&channel) {
            AnyChat::Channel(c) => {
                assert_eq!(c.kind, ChannelKind::Forbidden);
                assert_eq!(c.access_hash, Some(99));
                assert!(c.flags.megagroup);
            }
            other => panic!("expected channel, got {:?}", other),
        }
    }

    #[test]
    fn test_enrich_chat_with_full_info() {
        let mut chat = basic_chat_to_domain(&types::Chat {
            id: 5,
            title: "team".into(),
            ..Default::default()
        });
        let full = types::ChatFull {
            id: 5,
            participants: enums::ChatParticipants::Participants {
                chat_id: 5,
                participants: vec![
                    enums::ChatParticipant::Creator { user_id: 1 },
                    enums::ChatParticipant::Participant {
                        user_id: 2,
                        inviter_id: 1,
                        date: 10,
                    },
                ],
                version: 4,
            },
            about: Some("about".into()),
            exported_invite: enums::ExportedChatInvite::Invite {
                link: "https://t.me/joinchat/x".into(),
            },
        };
        enrich_chat(&mut chat, &full);
        assert_eq!(chat.kind, ChatKind::Full);
        assert_eq!(chat.title, "team");
        assert_eq!(chat.participant_ids, vec![1, 2]);
        assert_eq!(chat.participants_count, Some(2));
        assert_eq!(chat.invite_link.as_deref(), Some("https://t.me/joinchat/x"));
    }

    #[test]
    fn test_contact_shapes_stay_distinct() {
        let mutual = contact_to_domain(&types::Contact {
            user_id: 3,
            mutual: true,
        });
        let imported = imported_contact_to_domain(&types::ImportedContact {
            user_id: 4,
            client_id: 77,
        });
        let input = input_contact_to_domain(&types::InputPhoneContact {
            client_id: 78,
            phone: "+100".into(),
            first_name: "A".into(),
            last_name: "B".into(),
        });
        assert_eq!(mutual, Contact::Mutual { user_id: 3, mutual: true });
        assert_eq!(imported.user_id(), Some(4));
        assert_eq!(input.user_id(), None);
        assert!(mutual.to_input_contact().is_none());
        assert_eq!(input.to_input_contact().map(|c| c.client_id), Some(78));
    }

    #[test]
    fn test_document_file_name_from_attributes() {
        let document = enums::Document::Document(types::Document {
            id: 1,
            mime_type: "application/pdf".into(),
            attributes: vec![
                enums::DocumentAttribute::HasStickers,
                enums::DocumentAttribute::Filename {
                    file_name: "report.pdf".into(),
                },
            ],
            ..Default::default()
        });
        let mapped = document_to_domain(&document).expect("document");
        assert_eq!(mapped.file_name.as_deref(), Some("report.pdf"));
        assert!(document_to_domain(&enums::Document::Empty { id: 1 }).is_none());
    }
}
