//! Normalized updates and the synchronization cursor.
//!
//! `UpdateState::apply` and `ChannelCursor::apply` are the only places a
//! cursor moves. Every field moves with `max`, so a cursor never goes back.

use crate::domain::entities::{EntityBundle, Message, Peer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateKind {
    NewMessage,
    NewChannelMessage,
    ReadChannelInbox,
    ReadChannelOutbox,
    ChannelTooLong,
    ReadHistoryInbox,
    ReadHistoryOutbox,
    UserPhoto,
    EditMessage,
    EditChannelMessage,
    ContactLink,
    UserTyping,
    ChatUserTyping,
    ChatParticipantAdd,
    ChatParticipantAdmin,
    ChatParticipantDelete,
    /// A wire update this layer does not map, with its constructor name.
    Unrecognized(String),
}

/// One update. Which optional fields are set depends on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub kind: UpdateKind,
    pub pts: Option<i32>,
    pub pts_count: Option<i32>,
    pub channel_id: Option<i32>,
    pub max_id: Option<i32>,
    pub user_id: Option<i32>,
    pub inviter_id: Option<i32>,
    pub chat_id: Option<i32>,
    pub date: Option<i32>,
    pub version: Option<i32>,
    pub flags: Option<i32>,
    pub peer: Option<Peer>,
    pub message: Option<Message>,
}

impl Update {
    pub fn new(kind: UpdateKind) -> Self {
        Self {
            kind,
            pts: None,
            pts_count: None,
            channel_id: None,
            max_id: None,
            user_id: None,
            inviter_id: None,
            chat_id: None,
            date: None,
            version: None,
            flags: None,
            peer: None,
            message: None,
        }
    }

    pub fn unrecognized(type_name: impl Into<String>) -> Self {
        Self::new(UpdateKind::Unrecognized(type_name.into()))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self.kind, UpdateKind::Unrecognized(_))
    }
}

/// Position in the account-wide update stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateState {
    pub pts: i32,
    pub qts: i32,
    pub seq: i32,
    pub date: i32,
    pub unread_count: i32,
}

/// What applying a difference did to a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAdvance {
    /// Nothing new; the cursor was already current.
    Current,
    /// The cursor moved and is now current.
    Advanced,
    /// The cursor moved but more data remains. Request again with the new cursor.
    MorePending,
    /// The gap is too large to diff. Resync the scope from scratch.
    ResyncRequired { pts: i32 },
}

impl UpdateState {
    pub fn apply(&mut self, difference: &UpdateDifference) -> CursorAdvance {
        match difference {
            UpdateDifference::Empty { date, seq } => {
                self.date = self.date.max(*date);
                self.seq = self.seq.max(*seq);
                CursorAdvance::Current
            }
            UpdateDifference::Full(batch) => {
                self.adopt(&batch.state);
                CursorAdvance::Advanced
            }
            UpdateDifference::Slice(batch) => {
                self.adopt(&batch.state);
                CursorAdvance::MorePending
            }
            UpdateDifference::TooLong { pts } => {
                self.pts = self.pts.max(*pts);
                CursorAdvance::ResyncRequired { pts: *pts }
            }
        }
    }

    /// Take a server-provided state as the new position.
    pub fn adopt(&mut self, state: &UpdateState) {
        self.pts = self.pts.max(state.pts);
        self.qts = self.qts.max(state.qts);
        self.seq = self.seq.max(state.seq);
        self.date = self.date.max(state.date);
        self.unread_count = state.unread_count;
    }
}

/// New data carried by a full or sliced difference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DifferenceBatch {
    pub new_messages: Vec<Message>,
    pub other_updates: Vec<Update>,
    pub entities: EntityBundle,
    /// `state` for a full difference, `intermediate_state` for a slice.
    pub state: UpdateState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifferenceKind {
    Empty,
    Full,
    Slice,
    TooLong,
}

/// Everything that changed since a given account-wide cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UpdateDifference {
    Empty { date: i32, seq: i32 },
    Full(DifferenceBatch),
    Slice(DifferenceBatch),
    TooLong { pts: i32 },
}

impl UpdateDifference {
    pub fn kind(&self) -> DifferenceKind {
        match self {
            UpdateDifference::Empty { .. } => DifferenceKind::Empty,
            UpdateDifference::Full(_) => DifferenceKind::Full,
            UpdateDifference::Slice(_) => DifferenceKind::Slice,
            UpdateDifference::TooLong { .. } => DifferenceKind::TooLong,
        }
    }

    pub fn batch(&self) -> Option<&DifferenceBatch> {
        match self {
            UpdateDifference::Full(batch) | UpdateDifference::Slice(batch) => Some(batch),
            _ => None,
        }
    }

    pub fn into_batch(self) -> Option<DifferenceBatch> {
        match self {
            UpdateDifference::Full(batch) | UpdateDifference::Slice(batch) => Some(batch),
            _ => None,
        }
    }

    /// The caller must request again with the intermediate state.
    pub fn is_more_pending(&self) -> bool {
        matches!(self, UpdateDifference::Slice(_))
    }

    /// The caller must drop local state and resync instead of diffing.
    pub fn is_gap(&self) -> bool {
        matches!(self, UpdateDifference::TooLong { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelPosition {
    pub pts: i32,
    /// No further page is needed to be current.
    pub is_final: bool,
    /// Seconds to wait before polling this channel again.
    pub timeout: Option<i32>,
}

/// Everything that changed in one channel since a given channel `pts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelUpdateDifference {
    Empty {
        position: ChannelPosition,
    },
    Difference {
        position: ChannelPosition,
        new_messages: Vec<Message>,
        other_updates: Vec<Update>,
        entities: EntityBundle,
    },
    TooLong {
        position: ChannelPosition,
        top_message: i32,
        read_inbox_max_id: i32,
        read_outbox_max_id: i32,
        unread_count: i32,
        /// Latest messages of the channel, to rebuild its history from.
        messages: Vec<Message>,
        entities: EntityBundle,
    },
}

impl ChannelUpdateDifference {
    pub fn position(&self) -> ChannelPosition {
        match self {
            ChannelUpdateDifference::Empty { position }
            | ChannelUpdateDifference::Difference { position, .. }
            | ChannelUpdateDifference::TooLong { position, .. } => *position,
        }
    }

    pub fn kind(&self) -> DifferenceKind {
        match self {
            ChannelUpdateDifference::Empty { .. } => DifferenceKind::Empty,
            ChannelUpdateDifference::Difference { position, .. } if position.is_final => {
                DifferenceKind::Full
            }
            ChannelUpdateDifference::Difference { .. } => DifferenceKind::Slice,
            ChannelUpdateDifference::TooLong { .. } => DifferenceKind::TooLong,
        }
    }

    pub fn is_more_pending(&self) -> bool {
        !self.is_gap() && !self.position().is_final
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, ChannelUpdateDifference::TooLong { .. })
    }
}

/// Position in one channel's update stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelCursor {
    pub channel_id: i32,
    pub pts: i32,
}

impl ChannelCursor {
    pub fn new(channel_id: i32, pts: i32) -> Self {
        Self { channel_id, pts }
    }

    pub fn apply(&mut self, difference: &ChannelUpdateDifference) -> CursorAdvance {
        let position = difference.position();
        let before = self.pts;
        self.pts = self.pts.max(position.pts);
        if difference.is_gap() {
            CursorAdvance::ResyncRequired { pts: position.pts }
        } else if !position.is_final {
            CursorAdvance::MorePending
        } else if self.pts == before {
            CursorAdvance::Current
        } else {
            CursorAdvance::Advanced
        }
    }
}
