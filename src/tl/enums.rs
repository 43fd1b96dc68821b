//! Boxed (tagged) types of the wire schema.
//!
//! Each enum lists the constructors that may appear where the boxed type is
//! expected. `name()` returns the schema constructor name, which is what the
//! normalizer reports when it meets a variant it does not map.

use super::types;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peer {
    User { user_id: i32 },
    Chat { chat_id: i32 },
    Channel { channel_id: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputPeer {
    #[default]
    Empty,
    PeerSelf,
    Chat {
        chat_id: i32,
    },
    User {
        user_id: i32,
        access_hash: i64,
    },
    Channel {
        channel_id: i32,
        access_hash: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputChannel {
    #[default]
    Empty,
    Channel { channel_id: i32, access_hash: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLocation {
    Unavailable {
        volume_id: i64,
        local_id: i32,
        secret: i64,
    },
    Location {
        dc_id: i32,
        volume_id: i64,
        local_id: i32,
        secret: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserProfilePhoto {
    Empty,
    Photo {
        photo_id: i64,
        photo_small: FileLocation,
        photo_big: FileLocation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Empty,
    Online { expires: i32 },
    Offline { was_online: i32 },
    Recently,
    LastWeek,
    LastMonth,
}

impl UserStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "userStatusEmpty",
            Self::Online { .. } => "userStatusOnline",
            Self::Offline { .. } => "userStatusOffline",
            Self::Recently => "userStatusRecently",
            Self::LastWeek => "userStatusLastWeek",
            Self::LastMonth => "userStatusLastMonth",
        }
    }
}

/// Entries of a `users` side-list.
///
/// Profile photo and status entries carry no user id of their own; they
/// belong to the closest `user`/`userEmpty` entry preceding them.
#[derive(Debug, Clone, PartialEq)]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
    ProfilePhoto(UserProfilePhoto),
    Status(UserStatus),
}

impl User {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty(_) => "userEmpty",
            Self::User(_) => "user",
            Self::ProfilePhoto(UserProfilePhoto::Empty) => "userProfilePhotoEmpty",
            Self::ProfilePhoto(UserProfilePhoto::Photo { .. }) => "userProfilePhoto",
            Self::Status(status) => status.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatParticipant {
    Participant {
        user_id: i32,
        inviter_id: i32,
        date: i32,
    },
    Creator {
        user_id: i32,
    },
    Admin {
        user_id: i32,
        inviter_id: i32,
        date: i32,
    },
}

impl ChatParticipant {
    pub fn user_id(&self) -> i32 {
        match *self {
            Self::Participant { user_id, .. }
            | Self::Creator { user_id }
            | Self::Admin { user_id, .. } => user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatParticipants {
    Forbidden {
        flags: i32,
        chat_id: i32,
        self_participant: Option<ChatParticipant>,
    },
    Participants {
        chat_id: i32,
        participants: Vec<ChatParticipant>,
        version: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportedChatInvite {
    Empty,
    Invite { link: String },
}

impl ExportedChatInvite {
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Invite { link } => Some(link),
        }
    }
}

/// Entries of a `chats` side-list. Basic groups and channels share the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Full(types::ChatFull),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
    ChannelFull(types::ChannelFull),
}

impl Chat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty(_) => "chatEmpty",
            Self::Chat(_) => "chat",
            Self::Forbidden(_) => "chatForbidden",
            Self::Full(_) => "chatFull",
            Self::Channel(_) => "channel",
            Self::ChannelForbidden(_) => "channelForbidden",
            Self::ChannelFull(_) => "channelFull",
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Empty(c) => c.id,
            Self::Chat(c) => c.id,
            Self::Forbidden(c) => c.id,
            Self::Full(c) => c.id,
            Self::Channel(c) => c.id,
            Self::ChannelForbidden(c) => c.id,
            Self::ChannelFull(c) => c.id,
        }
    }

    /// Whether this entry belongs to the channel family.
    pub fn is_channel(&self) -> bool {
        matches!(
            self,
            Self::Channel(_) | Self::ChannelForbidden(_) | Self::ChannelFull(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatFull {
    Full(types::ChatFull),
    ChannelFull(types::ChannelFull),
}

impl From<ChatFull> for Chat {
    fn from(full: ChatFull) -> Self {
        match full {
            ChatFull::Full(f) => Chat::Full(f),
            ChatFull::ChannelFull(f) => Chat::ChannelFull(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty(_) => "messageEmpty",
            Self::Message(_) => "message",
            Self::Service(_) => "messageService",
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Empty(m) => m.id,
            Self::Message(m) => m.id,
            Self::Service(m) => m.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Photo {
    Empty { id: i64 },
    Photo(types::Photo),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSize {
    Empty {
        kind: String,
    },
    Size {
        kind: String,
        w: i32,
        h: i32,
        size: i32,
    },
    Cached {
        kind: String,
        w: i32,
        h: i32,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Empty { id: i64 },
    Document(types::Document),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentAttribute {
    ImageSize {
        w: i32,
        h: i32,
    },
    Animated,
    Sticker {
        alt: String,
    },
    Video {
        duration: i32,
        w: i32,
        h: i32,
    },
    Audio {
        duration: i32,
        title: Option<String>,
        performer: Option<String>,
    },
    Filename {
        file_name: String,
    },
    HasStickers,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageMedia {
    Empty,
    Photo {
        photo: Option<Photo>,
        caption: Option<String>,
    },
    Geo {
        lat: f64,
        long: f64,
    },
    Contact {
        phone_number: String,
        first_name: String,
        last_name: String,
        user_id: i32,
    },
    Unsupported,
    Document {
        document: Option<Document>,
        caption: Option<String>,
    },
    WebPage {
        url: Option<String>,
    },
    Venue {
        title: String,
        address: String,
    },
    Game {
        game_id: i64,
    },
}

impl MessageMedia {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "messageMediaEmpty",
            Self::Photo { .. } => "messageMediaPhoto",
            Self::Geo { .. } => "messageMediaGeo",
            Self::Contact { .. } => "messageMediaContact",
            Self::Unsupported => "messageMediaUnsupported",
            Self::Document { .. } => "messageMediaDocument",
            Self::WebPage { .. } => "messageMediaWebPage",
            Self::Venue { .. } => "messageMediaVenue",
            Self::Game { .. } => "messageMediaGame",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEntity {
    Unknown { offset: i32, length: i32 },
    Mention { offset: i32, length: i32 },
    Hashtag { offset: i32, length: i32 },
    BotCommand { offset: i32, length: i32 },
    Url { offset: i32, length: i32 },
    Email { offset: i32, length: i32 },
    Bold { offset: i32, length: i32 },
    Italic { offset: i32, length: i32 },
    Code { offset: i32, length: i32 },
    Pre { offset: i32, length: i32, language: String },
    TextUrl { offset: i32, length: i32, url: String },
    MentionName { offset: i32, length: i32, user_id: i32 },
    Phone { offset: i32, length: i32 },
    Cashtag { offset: i32, length: i32 },
}

impl MessageEntity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown { .. } => "messageEntityUnknown",
            Self::Mention { .. } => "messageEntityMention",
            Self::Hashtag { .. } => "messageEntityHashtag",
            Self::BotCommand { .. } => "messageEntityBotCommand",
            Self::Url { .. } => "messageEntityUrl",
            Self::Email { .. } => "messageEntityEmail",
            Self::Bold { .. } => "messageEntityBold",
            Self::Italic { .. } => "messageEntityItalic",
            Self::Code { .. } => "messageEntityCode",
            Self::Pre { .. } => "messageEntityPre",
            Self::TextUrl { .. } => "messageEntityTextUrl",
            Self::MentionName { .. } => "messageEntityMentionName",
            Self::Phone { .. } => "messageEntityPhone",
            Self::Cashtag { .. } => "messageEntityCashtag",
        }
    }

    /// The `(offset, length)` span, in UTF-16 code units of the message text.
    pub fn span(&self) -> (i32, i32) {
        match *self {
            Self::Unknown { offset, length }
            | Self::Mention { offset, length }
            | Self::Hashtag { offset, length }
            | Self::BotCommand { offset, length }
            | Self::Url { offset, length }
            | Self::Email { offset, length }
            | Self::Bold { offset, length }
            | Self::Italic { offset, length }
            | Self::Code { offset, length }
            | Self::Pre { offset, length, .. }
            | Self::TextUrl { offset, length, .. }
            | Self::MentionName { offset, length, .. }
            | Self::Phone { offset, length }
            | Self::Cashtag { offset, length } => (offset, length),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageAction {
    Empty,
    ChatCreate { title: String, users: Vec<i32> },
    ChatEditTitle { title: String },
    ChatEditPhoto { photo: Photo },
    ChatDeletePhoto,
    ChatAddUser { users: Vec<i32> },
    ChatDeleteUser { user_id: i32 },
    ChatJoinedByLink { inviter_id: i32 },
    ChannelCreate { title: String },
    ChatMigrateTo { channel_id: i32 },
    ChannelMigrateFrom { title: String, chat_id: i32 },
    PinMessage,
    HistoryClear,
    GameScore { game_id: i64, score: i32 },
    PaymentSent { currency: String, total_amount: i64 },
    PhoneCall { flags: i32, call_id: i64, duration: Option<i32> },
    ScreenshotTaken,
    CustomAction { message: String },
}

impl MessageAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "messageActionEmpty",
            Self::ChatCreate { .. } => "messageActionChatCreate",
            Self::ChatEditTitle { .. } => "messageActionChatEditTitle",
            Self::ChatEditPhoto { .. } => "messageActionChatEditPhoto",
            Self::ChatDeletePhoto => "messageActionChatDeletePhoto",
            Self::ChatAddUser { .. } => "messageActionChatAddUser",
            Self::ChatDeleteUser { .. } => "messageActionChatDeleteUser",
            Self::ChatJoinedByLink { .. } => "messageActionChatJoinedByLink",
            Self::ChannelCreate { .. } => "messageActionChannelCreate",
            Self::ChatMigrateTo { .. } => "messageActionChatMigrateTo",
            Self::ChannelMigrateFrom { .. } => "messageActionChannelMigrateFrom",
            Self::PinMessage => "messageActionPinMessage",
            Self::HistoryClear => "messageActionHistoryClear",
            Self::GameScore { .. } => "messageActionGameScore",
            Self::PaymentSent { .. } => "messageActionPaymentSent",
            Self::PhoneCall { .. } => "messageActionPhoneCall",
            Self::ScreenshotTaken => "messageActionScreenshotTaken",
            Self::CustomAction { .. } => "messageActionCustomAction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMessageAction {
    Typing,
    Cancel,
    RecordVideo,
    UploadVideo { progress: i32 },
    RecordAudio,
    UploadAudio { progress: i32 },
    UploadPhoto { progress: i32 },
    UploadDocument { progress: i32 },
    GeoLocation,
    ChooseContact,
    GamePlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLink {
    Unknown,
    None,
    HasPhone,
    Contact,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    NewMessage {
        message: Message,
        pts: i32,
        pts_count: i32,
    },
    MessageId {
        id: i32,
        random_id: i64,
    },
    DeleteMessages {
        messages: Vec<i32>,
        pts: i32,
        pts_count: i32,
    },
    UserTyping {
        user_id: i32,
        action: SendMessageAction,
    },
    ChatUserTyping {
        chat_id: i32,
        user_id: i32,
        action: SendMessageAction,
    },
    ChatParticipants {
        participants: ChatParticipants,
    },
    UserStatus {
        user_id: i32,
        status: UserStatus,
    },
    UserName {
        user_id: i32,
        first_name: String,
        last_name: String,
        username: String,
    },
    UserPhoto {
        user_id: i32,
        date: i32,
        photo: UserProfilePhoto,
        previous: bool,
    },
    ContactRegistered {
        user_id: i32,
        date: i32,
    },
    ContactLink {
        user_id: i32,
        my_link: ContactLink,
        foreign_link: ContactLink,
    },
    ChatParticipantAdd {
        chat_id: i32,
        user_id: i32,
        inviter_id: i32,
        date: i32,
        version: i32,
    },
    ChatParticipantDelete {
        chat_id: i32,
        user_id: i32,
        version: i32,
    },
    UserPhone {
        user_id: i32,
        phone: String,
    },
    ReadHistoryInbox {
        peer: Peer,
        max_id: i32,
        pts: i32,
        pts_count: i32,
    },
    ReadHistoryOutbox {
        peer: Peer,
        max_id: i32,
        pts: i32,
        pts_count: i32,
    },
    ReadMessagesContents {
        messages: Vec<i32>,
        pts: i32,
        pts_count: i32,
    },
    ChannelTooLong {
        flags: i32,
        channel_id: i32,
        pts: Option<i32>,
    },
    Channel {
        channel_id: i32,
    },
    NewChannelMessage {
        message: Message,
        pts: i32,
        pts_count: i32,
    },
    ReadChannelInbox {
        channel_id: i32,
        max_id: i32,
    },
    DeleteChannelMessages {
        channel_id: i32,
        messages: Vec<i32>,
        pts: i32,
        pts_count: i32,
    },
    ChannelMessageViews {
        channel_id: i32,
        id: i32,
        views: i32,
    },
    ChatAdmins {
        chat_id: i32,
        enabled: bool,
        version: i32,
    },
    ChatParticipantAdmin {
        chat_id: i32,
        user_id: i32,
        is_admin: bool,
        version: i32,
    },
    EditChannelMessage {
        message: Message,
        pts: i32,
        pts_count: i32,
    },
    EditMessage {
        message: Message,
        pts: i32,
        pts_count: i32,
    },
    ReadChannelOutbox {
        channel_id: i32,
        max_id: i32,
    },
    ChannelPinnedMessage {
        channel_id: i32,
        id: i32,
    },
}

impl Update {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMessage { .. } => "updateNewMessage",
            Self::MessageId { .. } => "updateMessageID",
            Self::DeleteMessages { .. } => "updateDeleteMessages",
            Self::UserTyping { .. } => "updateUserTyping",
            Self::ChatUserTyping { .. } => "updateChatUserTyping",
            Self::ChatParticipants { .. } => "updateChatParticipants",
            Self::UserStatus { .. } => "updateUserStatus",
            Self::UserName { .. } => "updateUserName",
            Self::UserPhoto { .. } => "updateUserPhoto",
            Self::ContactRegistered { .. } => "updateContactRegistered",
            Self::ContactLink { .. } => "updateContactLink",
            Self::ChatParticipantAdd { .. } => "updateChatParticipantAdd",
            Self::ChatParticipantDelete { .. } => "updateChatParticipantDelete",
            Self::UserPhone { .. } => "updateUserPhone",
            Self::ReadHistoryInbox { .. } => "updateReadHistoryInbox",
            Self::ReadHistoryOutbox { .. } => "updateReadHistoryOutbox",
            Self::ReadMessagesContents { .. } => "updateReadMessagesContents",
            Self::ChannelTooLong { .. } => "updateChannelTooLong",
            Self::Channel { .. } => "updateChannel",
            Self::NewChannelMessage { .. } => "updateNewChannelMessage",
            Self::ReadChannelInbox { .. } => "updateReadChannelInbox",
            Self::DeleteChannelMessages { .. } => "updateDeleteChannelMessages",
            Self::ChannelMessageViews { .. } => "updateChannelMessageViews",
            Self::ChatAdmins { .. } => "updateChatAdmins",
            Self::ChatParticipantAdmin { .. } => "updateChatParticipantAdmin",
            Self::EditChannelMessage { .. } => "updateEditChannelMessage",
            Self::EditMessage { .. } => "updateEditMessage",
            Self::ReadChannelOutbox { .. } => "updateReadChannelOutbox",
            Self::ChannelPinnedMessage { .. } => "updateChannelPinnedMessage",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Updates {
    TooLong,
    Short { update: Box<Update>, date: i32 },
    Updates(types::Updates),
    ShortSentMessage(types::UpdateShortSentMessage),
}

impl Updates {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TooLong => "updatesTooLong",
            Self::Short { .. } => "updateShort",
            Self::Updates(_) => "updates",
            Self::ShortSentMessage(_) => "updateShortSentMessage",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Dialog(types::Dialog),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChannelMessagesFilter {
    #[default]
    Empty,
    Filter {
        exclude_new_messages: bool,
        ranges: Vec<types::MessageRange>,
    },
}

pub mod updates {
    use crate::tl::types;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Difference {
        Empty(types::updates::DifferenceEmpty),
        Difference(types::updates::Difference),
        Slice(types::updates::DifferenceSlice),
        TooLong(types::updates::DifferenceTooLong),
    }

    impl Difference {
        pub fn name(&self) -> &'static str {
            match self {
                Self::Empty(_) => "updates.differenceEmpty",
                Self::Difference(_) => "updates.difference",
                Self::Slice(_) => "updates.differenceSlice",
                Self::TooLong(_) => "updates.differenceTooLong",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum ChannelDifference {
        Empty(types::updates::ChannelDifferenceEmpty),
        TooLong(types::updates::ChannelDifferenceTooLong),
        Difference(types::updates::ChannelDifference),
    }

    impl ChannelDifference {
        pub fn name(&self) -> &'static str {
            match self {
                Self::Empty(_) => "updates.channelDifferenceEmpty",
                Self::TooLong(_) => "updates.channelDifferenceTooLong",
                Self::Difference(_) => "updates.channelDifference",
            }
        }
    }
}

pub mod messages {
    use crate::tl::types;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Dialogs {
        Dialogs(types::messages::Dialogs),
        Slice(types::messages::DialogsSlice),
    }

    impl Dialogs {
        pub fn name(&self) -> &'static str {
            match self {
                Self::Dialogs(_) => "messages.dialogs",
                Self::Slice(_) => "messages.dialogsSlice",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Messages {
        Messages(types::messages::Messages),
        Slice(types::messages::MessagesSlice),
        ChannelMessages(types::messages::ChannelMessages),
    }

    impl Messages {
        pub fn name(&self) -> &'static str {
            match self {
                Self::Messages(_) => "messages.messages",
                Self::Slice(_) => "messages.messagesSlice",
                Self::ChannelMessages(_) => "messages.channelMessages",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Chats {
        Chats(types::messages::Chats),
        Slice(types::messages::ChatsSlice),
    }

    impl Chats {
        pub fn name(&self) -> &'static str {
            match self {
                Self::Chats(_) => "messages.chats",
                Self::Slice(_) => "messages.chatsSlice",
            }
        }
    }
}

pub mod contacts {
    use crate::tl::types;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Contacts {
        NotModified,
        Contacts(types::contacts::Contacts),
    }

    impl Contacts {
        pub fn name(&self) -> &'static str {
            match self {
                Self::NotModified => "contacts.contactsNotModified",
                Self::Contacts(_) => "contacts.contacts",
            }
        }
    }
}
