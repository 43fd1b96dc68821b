//! Domain entities. Pure data structures normalized from wire variants.
//!
//! No wire types here except where an entity must be turned back into a
//! request parameter (`Dialog::input_peer`, `Contact::to_input_contact`).

use crate::domain::flags::{ChannelFlags, ChatFlags, MessageFlags, UserFlags};
use crate::tl;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A conversation partner as addressed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum Peer {
    User(i32),
    Chat(i32),
    Channel(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerKind {
    User,
    Chat,
    Channel,
}

impl Peer {
    pub fn id(&self) -> i32 {
        match *self {
            Peer::User(id) | Peer::Chat(id) | Peer::Channel(id) => id,
        }
    }

    pub fn kind(&self) -> PeerKind {
        match self {
            Peer::User(_) => PeerKind::User,
            Peer::Chat(_) => PeerKind::Chat,
            Peer::Channel(_) => PeerKind::Channel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLocation {
    pub dc_id: Option<i32>,
    pub volume_id: i64,
    pub local_id: i32,
    pub secret: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePhoto {
    pub photo_id: i64,
    pub small: FileLocation,
    pub big: FileLocation,
}

/// Last-seen presence of a user. Timestamps are unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserStatus {
    Empty,
    Online { expires: i32 },
    Offline { was_online: i32 },
    Recently,
    LastWeek,
    LastMonth,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub flags: UserFlags,
    pub status: Option<UserStatus>,
    pub photo: Option<ProfilePhoto>,
}

impl User {
    /// First and last name joined by a space, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Empty,
    #[default]
    Normal,
    Forbidden,
    Full,
}

/// A basic group. Which fields are populated depends on `kind`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chat {
    pub id: i32,
    pub kind: ChatKind,
    pub title: String,
    pub participants_count: Option<i32>,
    pub date: Option<i32>,
    pub version: Option<i32>,
    pub flags: ChatFlags,
    /// Channel this group was upgraded to.
    pub migrated_to: Option<i32>,
    pub about: Option<String>,
    pub participant_ids: Vec<i32>,
    pub invite_link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    #[default]
    Normal,
    Forbidden,
    Full,
}

/// A broadcast channel or supergroup. Which fields are populated depends on `kind`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Channel {
    pub id: i32,
    pub kind: ChannelKind,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub date: Option<i32>,
    pub version: Option<i32>,
    pub flags: ChannelFlags,
    pub about: Option<String>,
    pub participants_count: Option<i32>,
    pub invite_link: Option<String>,
}

/// One entry of a mixed chats side-list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum AnyChat {
    Chat(Chat),
    Channel(Channel),
}

impl AnyChat {
    pub fn id(&self) -> i32 {
        match self {
            AnyChat::Chat(c) => c.id,
            AnyChat::Channel(c) => c.id,
        }
    }
}

/// The entity a peer resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PeerEntity {
    User(User),
    Chat(Chat),
    Channel(Channel),
}

impl From<AnyChat> for PeerEntity {
    fn from(chat: AnyChat) -> Self {
        match chat {
            AnyChat::Chat(c) => PeerEntity::Chat(c),
            AnyChat::Channel(c) => PeerEntity::Channel(c),
        }
    }
}

/// Address-book entry not yet known to the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputContact {
    /// Caller-chosen id correlating the entry with the import result.
    pub client_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// A contact in one of its three wire shapes. The shapes never convert into each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Contact {
    /// Saved contact from the account's contact list.
    Mutual { user_id: i32, mutual: bool },
    /// Result of importing an address-book entry.
    Imported { user_id: i32, client_id: i64 },
    /// Outbound entry, unresolved by the server.
    Input(InputContact),
}

impl Contact {
    pub fn user_id(&self) -> Option<i32> {
        match self {
            Contact::Mutual { user_id, .. } | Contact::Imported { user_id, .. } => Some(*user_id),
            Contact::Input(_) => None,
        }
    }

    /// Wire form for `contacts.importContacts`. Only input contacts have one.
    pub fn to_input_contact(&self) -> Option<tl::types::InputPhoneContact> {
        match self {
            Contact::Input(c) => Some(c.to_input_contact()),
            _ => None,
        }
    }
}

impl InputContact {
    pub fn to_input_contact(&self) -> tl::types::InputPhoneContact {
        tl::types::InputPhoneContact {
            client_id: self.client_id,
            phone: self.phone.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub kind: String,
    pub w: i32,
    pub h: i32,
    pub size: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub sizes: Vec<PhotoSize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub mime_type: String,
    pub size: i32,
    pub dc_id: i32,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Media {
    Photo {
        photo: Option<Photo>,
        caption: Option<String>,
    },
    Contact {
        first_name: String,
        last_name: String,
        user_id: i32,
        phone: String,
    },
    Document {
        document: Option<Document>,
        caption: Option<String>,
    },
    Unsupported {
        type_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageAction {
    ChatCreate { title: String, user_ids: Vec<i32> },
    ChatEditTitle { title: String },
    ChatEditPhoto { photo: Option<Photo> },
    ChatDeletePhoto,
    ChatAddUser { user_ids: Vec<i32> },
    ChatDeleteUser { user_id: i32 },
    ChatJoinedByLink { inviter_id: i32 },
    ChannelCreate { title: String },
    ChatMigrateTo { channel_id: i32 },
    ChannelMigrateFrom { title: String, chat_id: i32 },
    PinMessage,
    HistoryClear,
    GameScore { game_id: i64, score: i32 },
    PhoneCall { call_id: i64, duration: Option<i32> },
    Unsupported { type_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextEntityKind {
    Unknown,
    Mention,
    Hashtag,
    BotCommand,
    Url,
    Email,
    Bold,
    Italic,
    Code,
    Pre { language: String },
    TextUrl { url: String },
    MentionName { user_id: i32 },
    Unsupported { type_name: String },
}

/// A formatted span over the message text. Offsets count UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntity {
    pub kind: TextEntityKind,
    pub offset: i32,
    pub length: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForwardHeader {
    pub from_id: Option<i32>,
    pub date: i32,
    pub channel_id: Option<i32>,
    pub channel_post: Option<i32>,
    pub post_author: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Normal,
    Service,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub kind: MessageKind,
    pub from_id: Option<i32>,
    pub to: Peer,
    pub date: i32,
    pub flags: MessageFlags,
    pub text: String,
    pub action: Option<MessageAction>,
    pub forward: Option<ForwardHeader>,
    pub media: Option<Media>,
    /// Spans over `text`, in the order the server sent them.
    pub entities: Vec<TextEntity>,
    pub views: Option<i32>,
    pub reply_to_msg_id: Option<i32>,
    pub edit_date: Option<i32>,
    pub via_bot_id: Option<i32>,
    pub post_author: Option<String>,
}

impl Message {
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.date), 0)
    }

    /// Channel scope of this message's id, if it was posted to a channel.
    pub fn channel_id(&self) -> Option<i32> {
        match self.to {
            Peer::Channel(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialog {
    pub peer: Peer,
    pub top_message_id: i32,
    pub top_message: Option<Message>,
    pub unread_count: i32,
    pub read_inbox_max_id: i32,
    pub read_outbox_max_id: i32,
    /// Per-channel update cursor. Only channel dialogs carry one.
    pub pts: Option<i32>,
    pub peer_access_hash: Option<i64>,
    pub entity: Option<PeerEntity>,
}

impl Dialog {
    /// Rebuild the wire peer for follow-up requests. Unknown access hashes are sent as 0.
    pub fn input_peer(&self) -> tl::enums::InputPeer {
        let access_hash = self.peer_access_hash.unwrap_or_default();
        match self.peer {
            Peer::User(user_id) => tl::enums::InputPeer::User {
                user_id,
                access_hash,
            },
            Peer::Chat(chat_id) => tl::enums::InputPeer::Chat { chat_id },
            Peer::Channel(channel_id) => tl::enums::InputPeer::Channel {
                channel_id,
                access_hash,
            },
        }
    }
}

/// Users and chats returned alongside a primary result, in wire order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityBundle {
    pub chats: Vec<Chat>,
    pub channels: Vec<Channel>,
    pub users: Vec<User>,
}

impl EntityBundle {
    pub fn is_empty(&self) -> bool {
        self.chats.is_empty() && self.channels.is_empty() && self.users.is_empty()
    }

    /// Append another bundle, keeping order.
    pub fn extend(&mut self, other: EntityBundle) {
        self.chats.extend(other.chats);
        self.channels.extend(other.channels);
        self.users.extend(other.users);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_input_peer_uses_access_hash() {
        let dialog = Dialog {
            peer: Peer::Channel(7),
            top_message_id: 1,
            top_message: None,
            unread_count: 0,
            read_inbox_max_id: 0,
            read_outbox_max_id: 0,
            pts: Some(3),
            peer_access_hash: Some(55),
            entity: None,
        };
        assert_eq!(
            dialog.input_peer(),
            tl::enums::InputPeer::Channel {
                channel_id: 7,
                access_hash: 55
            }
        );
    }

    #[test]
    fn test_only_input_contacts_convert_back() {
        let input = Contact::Input(InputContact {
            client_id: 9,
            first_name: "Ada".into(),
            last_name: "L".into(),
            phone: "+100".into(),
        });
        assert_eq!(input.to_input_contact().map(|c| c.client_id), Some(9));
        assert_eq!(input.user_id(), None);

        let mutual = Contact::Mutual {
            user_id: 4,
            mutual: true,
        };
        assert!(mutual.to_input_contact().is_none());
        assert_eq!(mutual.user_id(), Some(4));
    }

    #[test]
    fn test_full_name_skips_missing_parts() {
        let user = User {
            id: 1,
            first_name: Some("Ada".into()),
            ..Default::default()
        };
        assert_eq!(user.full_name(), "Ada");
    }
}
