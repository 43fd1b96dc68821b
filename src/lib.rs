//! tg-update-sync: update synchronization and entity normalization for an
//! MTProto client, with Hexagonal Architecture.
//!
//! Wire variants from the RPC layer ([`tl`]) are normalized into the records
//! of [`domain`]; [`adapters::telegram::MtprotoGateway`] exposes them through
//! the [`ports::TgGateway`] port, and [`usecases::CatchUpService`] drives the
//! update cursor.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod tl;
pub mod usecases;
