//! Remote procedures understood by the RPC substrate.

pub mod messages {
    use crate::tl::enums;

    #[derive(Debug, Clone, PartialEq)]
    pub struct GetDialogs {
        pub offset_date: i32,
        pub offset_id: i32,
        pub offset_peer: enums::InputPeer,
        pub limit: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct GetHistory {
        pub peer: enums::InputPeer,
        pub offset_id: i32,
        pub offset_date: i32,
        pub add_offset: i32,
        pub limit: i32,
        pub max_id: i32,
        pub min_id: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct SendMessage {
        pub no_webpage: bool,
        pub silent: bool,
        pub background: bool,
        pub clear_draft: bool,
        pub peer: enums::InputPeer,
        pub reply_to_msg_id: Option<i32>,
        pub message: String,
        pub random_id: i64,
        pub entities: Option<Vec<enums::MessageEntity>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ImportChatInvite {
        pub hash: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct GetChats {
        pub id: Vec<i32>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct GetFullChat {
        pub chat_id: i32,
    }
}

pub mod contacts {
    use crate::tl::types;

    #[derive(Debug, Clone, PartialEq)]
    pub struct ResolveUsername {
        pub username: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct GetContacts {
        pub hash: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ImportContacts {
        pub contacts: Vec<types::InputPhoneContact>,
    }
}

pub mod updates {
    use crate::tl::enums;

    #[derive(Debug, Clone, PartialEq)]
    pub struct GetState;

    #[derive(Debug, Clone, PartialEq)]
    pub struct GetDifference {
        pub pts: i32,
        pub pts_total_limit: Option<i32>,
        pub date: i32,
        pub qts: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct GetChannelDifference {
        pub force: bool,
        pub channel: enums::InputChannel,
        pub filter: enums::ChannelMessagesFilter,
        pub pts: i32,
        pub limit: i32,
    }
}
