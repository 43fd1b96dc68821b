//! Infrastructure adapters. Implement outbound ports.
//!
//! Telegram normalization and request exchanges. Map errors to DomainError.

pub mod rpc;
pub mod telegram;
