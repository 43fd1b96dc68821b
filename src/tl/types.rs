//! Bare constructors of the wire schema.
//!
//! Optional fields are the ones guarded by a `flags.N?` bit on the wire; the
//! raw `flags` word is kept alongside so boolean `flags.N?true` bits can be
//! decoded by the normalizer.

use super::enums;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserEmpty {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    pub flags: i32,
    pub id: i32,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<enums::UserProfilePhoto>,
    pub status: Option<enums::UserStatus>,
    pub bot_info_version: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatEmpty {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chat {
    pub flags: i32,
    pub id: i32,
    pub title: String,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
    pub migrated_to: Option<enums::InputChannel>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatForbidden {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatFull {
    pub id: i32,
    pub participants: enums::ChatParticipants,
    pub about: Option<String>,
    pub exported_invite: enums::ExportedChatInvite,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Channel {
    pub flags: i32,
    pub id: i32,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub date: i32,
    pub version: i32,
    pub restriction_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelForbidden {
    pub flags: i32,
    pub id: i32,
    pub access_hash: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelFull {
    pub flags: i32,
    pub id: i32,
    pub about: String,
    pub participants_count: Option<i32>,
    pub admins_count: Option<i32>,
    pub kicked_count: Option<i32>,
    pub read_inbox_max_id: i32,
    pub read_outbox_max_id: i32,
    pub unread_count: i32,
    pub exported_invite: enums::ExportedChatInvite,
    pub migrated_from_chat_id: Option<i32>,
    pub pinned_msg_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageEmpty {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub flags: i32,
    pub id: i32,
    pub from_id: Option<i32>,
    pub to_id: enums::Peer,
    pub fwd_from: Option<MessageFwdHeader>,
    pub via_bot_id: Option<i32>,
    pub reply_to_msg_id: Option<i32>,
    pub date: i32,
    pub message: String,
    pub media: Option<enums::MessageMedia>,
    pub entities: Option<Vec<enums::MessageEntity>>,
    pub views: Option<i32>,
    pub edit_date: Option<i32>,
    pub post_author: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageService {
    pub flags: i32,
    pub id: i32,
    pub from_id: Option<i32>,
    pub to_id: enums::Peer,
    pub reply_to_msg_id: Option<i32>,
    pub date: i32,
    pub action: enums::MessageAction,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageFwdHeader {
    pub flags: i32,
    pub from_id: Option<i32>,
    pub date: i32,
    pub channel_id: Option<i32>,
    pub channel_post: Option<i32>,
    pub post_author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Photo {
    pub flags: i32,
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub sizes: Vec<enums::PhotoSize>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub mime_type: String,
    pub size: i32,
    pub dc_id: i32,
    pub version: i32,
    pub attributes: Vec<enums::DocumentAttribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub flags: i32,
    pub peer: enums::Peer,
    pub top_message: i32,
    pub read_inbox_max_id: i32,
    pub read_outbox_max_id: i32,
    pub unread_count: i32,
    pub pts: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contact {
    pub user_id: i32,
    pub mutual: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportedContact {
    pub user_id: i32,
    pub client_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputPhoneContact {
    pub client_id: i64,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageRange {
    pub min_id: i32,
    pub max_id: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Updates {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateShortSentMessage {
    pub flags: i32,
    pub id: i32,
    pub pts: i32,
    pub pts_count: i32,
    pub date: i32,
    pub media: Option<enums::MessageMedia>,
    pub entities: Option<Vec<enums::MessageEntity>>,
}

pub mod updates {
    use crate::tl::enums;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct State {
        pub pts: i32,
        pub qts: i32,
        pub date: i32,
        pub seq: i32,
        pub unread_count: i32,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct DifferenceEmpty {
        pub date: i32,
        pub seq: i32,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Difference {
        pub new_messages: Vec<enums::Message>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
        pub state: State,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct DifferenceSlice {
        pub new_messages: Vec<enums::Message>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
        pub intermediate_state: State,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct DifferenceTooLong {
        pub pts: i32,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ChannelDifferenceEmpty {
        pub flags: i32,
        pub pts: i32,
        pub timeout: Option<i32>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ChannelDifferenceTooLong {
        pub flags: i32,
        pub pts: i32,
        pub timeout: Option<i32>,
        pub top_message: i32,
        pub read_inbox_max_id: i32,
        pub read_outbox_max_id: i32,
        pub unread_count: i32,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ChannelDifference {
        pub flags: i32,
        pub pts: i32,
        pub timeout: Option<i32>,
        pub new_messages: Vec<enums::Message>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}

pub mod messages {
    use crate::tl::enums;

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Dialogs {
        pub dialogs: Vec<enums::Dialog>,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct DialogsSlice {
        pub count: i32,
        pub dialogs: Vec<enums::Dialog>,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Messages {
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct MessagesSlice {
        pub count: i32,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ChannelMessages {
        pub flags: i32,
        pub pts: i32,
        pub count: i32,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Chats {
        pub chats: Vec<enums::Chat>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ChatsSlice {
        pub count: i32,
        pub chats: Vec<enums::Chat>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ChatFull {
        pub full_chat: enums::ChatFull,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}

pub mod contacts {
    use crate::tl::{enums, types};

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Contacts {
        pub contacts: Vec<types::Contact>,
        pub users: Vec<enums::User>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ImportedContacts {
        pub imported: Vec<types::ImportedContact>,
        pub retry_contacts: Vec<i64>,
        pub users: Vec<enums::User>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ResolvedPeer {
        pub peer: enums::Peer,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}
