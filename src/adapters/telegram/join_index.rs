//! Join the side-lists of a response into lookups by id.
//!
//! Users arrive as a flat list where `userProfilePhoto*` and `userStatus*`
//! entries carry no id and belong to the closest preceding user. They are
//! collected as patches keyed by that user's id and applied in a second
//! pass, after every user has been built.

use crate::adapters::telegram::{mapper, message_mapper};
use crate::domain::{
    AnyChat, Channel, Chat, Dialog, EntityBundle, Message, Peer, PeerEntity, ProfilePhoto, User,
    UserStatus,
};
use crate::tl::{enums, types};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
enum UserPatch {
    Photo(Option<ProfilePhoto>),
    Status(UserStatus),
}

pub fn normalize_users(entries: &[enums::User]) -> Vec<User> {
    let mut users = Vec::with_capacity(entries.len());
    let mut patches: HashMap<i32, Vec<UserPatch>> = HashMap::new();
    let mut owner: Option<i32> = None;

    for entry in entries {
        let patch = match entry {
            enums::User::User(u) => {
                users.push(mapper::user_to_domain(u));
                owner = Some(u.id);
                continue;
            }
            enums::User::Empty(u) => {
                users.push(mapper::user_empty_to_domain(u));
                owner = Some(u.id);
                continue;
            }
            enums::User::ProfilePhoto(photo) => {
                UserPatch::Photo(mapper::profile_photo_to_domain(photo))
            }
            enums::User::Status(status) => UserPatch::Status(mapper::user_status_to_domain(status)),
        };
        match owner {
            Some(id) => patches.entry(id).or_default().push(patch),
            None => warn!(type_name = entry.name(), "user patch without a preceding user, dropped"),
        }
    }

    for user in &mut users {
        for patch in patches.get(&user.id).into_iter().flatten() {
            match patch {
                UserPatch::Photo(photo) => user.photo = photo.clone(),
                UserPatch::Status(status) => user.status = Some(*status),
            }
        }
    }
    users
}

/// Route a mixed chats side-list into basic groups and channels, keeping order.
pub fn split_chats(entries: &[enums::Chat]) -> (Vec<Chat>, Vec<Channel>) {
    let mut chats = Vec::new();
    let mut channels = Vec::new();
    for entry in entries {
        match mapper::any_chat_to_domain(entry) {
            AnyChat::Chat(c) => chats.push(c),
            AnyChat::Channel(c) => channels.push(c),
        }
    }
    (chats, channels)
}

/// Message ids are per channel for channel messages and account-wide otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageKey {
    pub channel_id: Option<i32>,
    pub id: i32,
}

impl MessageKey {
    pub fn of(message: &Message) -> Self {
        Self {
            channel_id: message.channel_id(),
            id: message.id,
        }
    }

    pub fn for_peer(peer: Peer, id: i32) -> Self {
        let channel_id = match peer {
            Peer::Channel(channel_id) => Some(channel_id),
            Peer::User(_) | Peer::Chat(_) => None,
        };
        Self { channel_id, id }
    }
}

/// Lookups over the side-lists of one response. Built per response and
/// dropped with it.
#[derive(Debug, Default)]
pub struct EntityJoinIndex {
    users: Vec<User>,
    chats: Vec<Chat>,
    channels: Vec<Channel>,
    user_ids: HashMap<i32, usize>,
    chat_ids: HashMap<i32, usize>,
    channel_ids: HashMap<i32, usize>,
    messages: HashMap<MessageKey, Message>,
}

impl EntityJoinIndex {
    pub fn build(chats: &[enums::Chat], users: &[enums::User], messages: &[enums::Message]) -> Self {
        let users = normalize_users(users);
        let (chats, channels) = split_chats(chats);
        let messages = message_mapper::messages_to_domain(messages)
            .into_iter()
            .map(|m| (MessageKey::of(&m), m))
            .collect();

        Self {
            user_ids: position_by_id(users.iter().map(|u| u.id)),
            chat_ids: position_by_id(chats.iter().map(|c| c.id)),
            channel_ids: position_by_id(channels.iter().map(|c| c.id)),
            users,
            chats,
            channels,
            messages,
        }
    }

    pub fn user(&self, id: i32) -> Option<&User> {
        self.user_ids.get(&id).map(|&i| &self.users[i])
    }

    pub fn chat(&self, id: i32) -> Option<&Chat> {
        self.chat_ids.get(&id).map(|&i| &self.chats[i])
    }

    pub fn channel(&self, id: i32) -> Option<&Channel> {
        self.channel_ids.get(&id).map(|&i| &self.channels[i])
    }

    pub fn message(&self, key: MessageKey) -> Option<&Message> {
        self.messages.get(&key)
    }

    pub fn resolve_peer(&self, peer: Peer) -> Option<PeerEntity> {
        match peer {
            Peer::User(id) => self.user(id).cloned().map(PeerEntity::User),
            Peer::Chat(id) => self.chat(id).cloned().map(PeerEntity::Chat),
            Peer::Channel(id) => self.channel(id).cloned().map(PeerEntity::Channel),
        }
    }

    /// Attach the top message, peer entity and access hash to a dialog.
    /// Ids missing from the side-lists leave the fields unset.
    pub fn resolve_dialog(&self, dialog: &types::Dialog) -> Dialog {
        let mut resolved = mapper::dialog_to_domain(dialog);
        resolved.top_message = self
            .message(MessageKey::for_peer(resolved.peer, resolved.top_message_id))
            .cloned();
        resolved.peer_access_hash = match resolved.peer {
            Peer::User(id) => self.user(id).and_then(|u| u.access_hash),
            Peer::Channel(id) => self.channel(id).and_then(|c| c.access_hash),
            Peer::Chat(_) => None,
        };
        resolved.entity = self.resolve_peer(resolved.peer);
        resolved
    }

    pub fn into_bundle(self) -> EntityBundle {
        EntityBundle {
            chats: self.chats,
            channels: self.channels,
            users: self.users,
        }
    }
}

fn position_by_id(ids: impl Iterator<Item = i32>) -> HashMap<i32, usize> {
    ids.enumerate().map(|(i, id)| (id, i)).collect()
}

/// Normalize side-lists that are not joined against anything.
pub fn entity_bundle(chats: &[enums::Chat], users: &[enums::User]) -> EntityBundle {
    let (chats, channels) = split_chats(chats);
    EntityBundle {
        chats,
        channels,
        users: normalize_users(users),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_user(id: i32, access_hash: Option<i64>) -> enums::User {
        enums::User::User(types::User {
            id,
            access_hash,
            ..Default::default()
        })
    }

    fn wire_photo(photo_id: i64) -> enums::User {
        let location = enums::FileLocation::Unavailable {
            volume_id: 1,
            local_id: 2,
            secret: 3,
        };
        enums::User::ProfilePhoto(enums::UserProfilePhoto::Photo {
            photo_id,
            photo_small: location.clone(),
            photo_big: location,
        })
    }

    fn wire_dialog(peer: enums::Peer, top_message: i32) -> types::Dialog {
        types::Dialog {
            flags: 0,
            peer,
            top_message,
            read_inbox_max_id: 0,
            read_outbox_max_id: 0,
            unread_count: 2,
            pts: None,
        }
    }

    #[test]
    fn test_profile_photo_patches_preceding_user() {
        let users = normalize_users(&[wire_user(5, None), wire_photo(77)]);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 5);
        assert_eq!(users[0].photo.as_ref().map(|p| p.photo_id), Some(77));
    }

    #[test]
    fn test_patches_follow_their_own_user() {
        let users = normalize_users(&[
            wire_user(1, None),
            enums::User::Status(enums::UserStatus::Recently),
            wire_user(2, None),
            wire_photo(9),
            enums::User::Status(enums::UserStatus::Online { expires: 50 }),
        ]);
        assert_eq!(users[0].status, Some(UserStatus::Recently));
        assert!(users[0].photo.is_none());
        assert_eq!(users[1].status, Some(UserStatus::Online { expires: 50 }));
        assert_eq!(users[1].photo.as_ref().map(|p| p.photo_id), Some(9));
    }

    #[test]
    fn test_orphan_patch_is_dropped() {
        let users = normalize_users(&[wire_photo(1), wire_user(3, None)]);
        assert_eq!(users.len(), 1);
        assert!(users[0].photo.is_none());
    }

    #[test]
    fn test_split_chats_keeps_order() {
        let (chats, channels) = split_chats(&[
            enums::Chat::Channel(types::Channel {
                id: 10,
                ..Default::default()
            }),
            enums::Chat::Chat(types::Chat {
                id: 1,
                ..Default::default()
            }),
            enums::Chat::Empty(types::ChatEmpty { id: 2 }),
            enums::Chat::Channel(types::Channel {
                id: 11,
                ..Default::default()
            }),
        ]);
        assert_eq!(chats.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            channels.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![10, 11]
        );
    }

    #[test]
    fn test_user_dialog_takes_access_hash() {
        let index = EntityJoinIndex::build(&[], &[wire_user(10, Some(999))], &[]);
        let dialog = index.resolve_dialog(&wire_dialog(enums::Peer::User { user_id: 10 }, 0));
        assert_eq!(dialog.peer_access_hash, Some(999));
        match dialog.entity {
            Some(PeerEntity::User(u)) => assert_eq!(u.id, 10),
            other => panic!("expected user entity, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_user_leaves_dialog_unresolved() {
        let index = EntityJoinIndex::build(&[], &[wire_user(11, Some(1))], &[]);
        let dialog = index.resolve_dialog(&wire_dialog(enums::Peer::User { user_id: 10 }, 0));
        assert_eq!(dialog.peer_access_hash, None);
        assert!(dialog.entity.is_none());
        assert_eq!(
            dialog.input_peer(),
            enums::InputPeer::User {
                user_id: 10,
                access_hash: 0
            }
        );
    }

    #[test]
    fn test_channel_message_ids_do_not_collide() {
        let message = |id: i32, to_id: enums::Peer, text: &str| {
            enums::Message::Message(types::Message {
                flags: 0,
                id,
                from_id: None,
                to_id,
                fwd_from: None,
                via_bot_id: None,
                reply_to_msg_id: None,
                date: 0,
                message: text.into(),
                media: None,
                entities: None,
                views: None,
                edit_date: None,
                post_author: None,
            })
        };
        let index = EntityJoinIndex::build(
            &[enums::Chat::Channel(types::Channel {
                id: 30,
                access_hash: Some(4),
                ..Default::default()
            })],
            &[],
            &[
                message(5, enums::Peer::User { user_id: 1 }, "private"),
                message(5, enums::Peer::Channel { channel_id: 30 }, "channel"),
            ],
        );

        let channel_dialog =
            index.resolve_dialog(&wire_dialog(enums::Peer::Channel { channel_id: 30 }, 5));
        assert_eq!(
            channel_dialog.top_message.map(|m| m.text),
            Some("channel".to_string())
        );
        assert_eq!(channel_dialog.peer_access_hash, Some(4));

        let user_dialog = index.resolve_dialog(&wire_dialog(enums::Peer::User { user_id: 1 }, 5));
        assert_eq!(
            user_dialog.top_message.map(|m| m.text),
            Some("private".to_string())
        );
    }

    #[test]
    fn test_chat_dialog_has_no_access_hash() {
        let index = EntityJoinIndex::build(
            &[enums::Chat::Chat(types::Chat {
                id: 3,
                title: "g".into(),
                ..Default::default()
            })],
            &[],
            &[],
        );
        let dialog = index.resolve_dialog(&wire_dialog(enums::Peer::Chat { chat_id: 3 }, 0));
        assert_eq!(dialog.peer_access_hash, None);
        assert!(matches!(dialog.entity, Some(PeerEntity::Chat(_))));
    }
}
