//! Core domain layer. No I/O.
//!
//! Normalized records, flag tables and cursor rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod flags;
pub mod updates;

pub use entities::{
    AnyChat, Channel, ChannelKind, Chat, ChatKind, Contact, Dialog, Document, EntityBundle,
    FileLocation, ForwardHeader, InputContact, Media, Message, MessageAction, MessageKind, Peer,
    PeerEntity, PeerKind, Photo, PhotoSize, ProfilePhoto, TextEntity, TextEntityKind, User,
    UserStatus,
};
pub use errors::{DomainError, TransportError};
pub use flags::{ChannelFlags, ChatFlags, MessageFlags, UserFlags};
pub use updates::{
    ChannelCursor, ChannelPosition, ChannelUpdateDifference, CursorAdvance, DifferenceBatch,
    DifferenceKind, Update, UpdateDifference, UpdateKind, UpdateState,
};
