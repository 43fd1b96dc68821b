//! Port traits. API boundaries for the hexagon.
//!
//! - `RpcExchange`: consumed, implemented by the transport
//! - `TgGateway`: produced, implemented by the telegram adapter

pub mod outbound;

pub use outbound::{
    ContactList, DialogList, DialogsPage, HistoryWindow, ImportedContacts, MessageBatch,
    ResolvedPeer, RpcExchange, TgGateway,
};
