//! Telegram adapter: normalizes wire variants and implements TgGateway.

pub mod client;
pub mod difference;
pub mod join_index;
pub mod mapper;
pub mod message_mapper;
pub mod update_mapper;

pub use client::{input_channel, MtprotoGateway};
pub use join_index::{EntityJoinIndex, MessageKey};
