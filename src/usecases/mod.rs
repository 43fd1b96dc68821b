//! Application use cases. Orchestrate domain logic via ports.

pub mod catch_up_service;

pub use catch_up_service::{CatchUpReport, CatchUpService, ChannelCatchUpReport};
