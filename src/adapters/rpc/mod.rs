//! `RpcExchange` implementations.

pub mod channel_exchange;
pub mod scripted;

pub use channel_exchange::{CallResult, ChannelExchange, PendingCall};
pub use scripted::ScriptedExchange;
