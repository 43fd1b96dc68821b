//! Outbound ports. The application calls into infrastructure through these.
//!
//! `RpcExchange` is what the transport provides; `TgGateway` is what the
//! telegram adapter builds on top of it.

use crate::domain::{
    AnyChat, Chat, ChannelUpdateDifference, Contact, Dialog, DomainError, EntityBundle,
    InputContact, Message, Peer, TransportError, UpdateDifference, UpdateState, User,
};
use crate::tl::{self, Request, Response};
use std::sync::Arc;

/// One request in, one response out. Implemented by the session engine.
#[async_trait::async_trait]
pub trait RpcExchange: Send + Sync {
    async fn exchange(&self, request: Request) -> Result<Response, TransportError>;
}

#[async_trait::async_trait]
impl<T: RpcExchange + ?Sized> RpcExchange for Arc<T> {
    async fn exchange(&self, request: Request) -> Result<Response, TransportError> {
        (**self).exchange(request).await
    }
}

/// Normalized Telegram API. Every call performs exactly one exchange and never retries.
#[async_trait::async_trait]
pub trait TgGateway: Send + Sync {
    async fn resolve_username(&self, username: &str) -> Result<ResolvedPeer, DomainError>;

    /// `hash` is the server's contact-list hash; a match yields `not_modified`.
    async fn get_contacts(&self, hash: i32) -> Result<ContactList, DomainError>;

    async fn import_contacts(
        &self,
        contacts: &[InputContact],
    ) -> Result<ImportedContacts, DomainError>;

    async fn get_dialogs(&self, page: DialogsPage) -> Result<DialogList, DomainError>;

    /// Returns the raw acknowledgement. Only a transport failure is an error.
    async fn send_message(
        &self,
        peer: tl::enums::InputPeer,
        text: &str,
        reply_to_msg_id: Option<i32>,
    ) -> Result<Response, DomainError>;

    /// Joins a chat by invite hash. Server refusals are logged and yield `None`.
    async fn import_chat_invite(&self, hash: &str) -> Result<Option<AnyChat>, DomainError>;

    async fn get_history(
        &self,
        peer: tl::enums::InputPeer,
        window: HistoryWindow,
    ) -> Result<MessageBatch, DomainError>;

    async fn get_chats(&self, ids: &[i32]) -> Result<Vec<AnyChat>, DomainError>;

    async fn get_full_chat(&self, chat_id: i32) -> Result<Chat, DomainError>;

    async fn get_state(&self) -> Result<UpdateState, DomainError>;

    async fn get_difference(&self, state: &UpdateState) -> Result<UpdateDifference, DomainError>;

    async fn get_channel_difference(
        &self,
        channel: tl::enums::InputChannel,
        pts: i32,
        limit: i32,
    ) -> Result<ChannelUpdateDifference, DomainError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPeer {
    pub peer: Peer,
    pub entities: EntityBundle,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactList {
    pub contacts: Vec<Contact>,
    pub users: Vec<User>,
    /// The server reported the caller's copy as current.
    pub not_modified: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportedContacts {
    pub imported: Vec<Contact>,
    /// Client ids the server asked to retry later.
    pub retry_client_ids: Vec<i64>,
    pub users: Vec<User>,
}

/// Offsets of a `messages.getDialogs` page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogsPage {
    pub offset_date: i32,
    pub offset_id: i32,
    pub offset_peer: tl::enums::InputPeer,
    pub limit: i32,
}

impl DialogsPage {
    pub fn first(limit: i32) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogList {
    pub dialogs: Vec<Dialog>,
    /// Server-side total for a sliced list, otherwise the number of dialogs returned.
    pub total: i32,
    pub entities: EntityBundle,
}

/// Window of a `messages.getHistory` request. Zero means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryWindow {
    pub offset_id: i32,
    pub offset_date: i32,
    pub add_offset: i32,
    pub limit: i32,
    pub max_id: i32,
    pub min_id: i32,
}

impl HistoryWindow {
    pub fn latest(limit: i32) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageBatch {
    pub messages: Vec<Message>,
    /// Total messages in the history, as reported by the server.
    pub count: i32,
    pub entities: EntityBundle,
}
