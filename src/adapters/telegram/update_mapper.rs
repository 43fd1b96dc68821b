//! Map wire updates and update state to domain values.

use crate::adapters::telegram::{mapper, message_mapper};
use crate::domain::{Update, UpdateKind, UpdateState};
use crate::tl::{enums, types};
use tracing::debug;

/// Normalize one update. Wire updates without a domain kind keep their
/// constructor name as `UpdateKind::Unrecognized`.
pub fn update_to_domain(update: &enums::Update) -> Update {
    match update {
        enums::Update::NewMessage {
            message,
            pts,
            pts_count,
        } => with_message(UpdateKind::NewMessage, message, *pts, *pts_count),
        enums::Update::NewChannelMessage {
            message,
            pts,
            pts_count,
        } => with_message(UpdateKind::NewChannelMessage, message, *pts, *pts_count),
        enums::Update::EditMessage {
            message,
            pts,
            pts_count,
        } => with_message(UpdateKind::EditMessage, message, *pts, *pts_count),
        enums::Update::EditChannelMessage {
            message,
            pts,
            pts_count,
        } => with_message(UpdateKind::EditChannelMessage, message, *pts, *pts_count),
        enums::Update::ReadChannelInbox { channel_id, max_id } => Update {
            channel_id: Some(*channel_id),
            max_id: Some(*max_id),
            ..Update::new(UpdateKind::ReadChannelInbox)
        },
        enums::Update::ReadChannelOutbox { channel_id, max_id } => Update {
            channel_id: Some(*channel_id),
            max_id: Some(*max_id),
            ..Update::new(UpdateKind::ReadChannelOutbox)
        },
        enums::Update::ChannelTooLong {
            flags,
            channel_id,
            pts,
        } => Update {
            flags: Some(*flags),
            channel_id: Some(*channel_id),
            pts: *pts,
            ..Update::new(UpdateKind::ChannelTooLong)
        },
        enums::Update::ReadHistoryInbox {
            peer,
            max_id,
            pts,
            pts_count,
        } => Update {
            peer: Some(mapper::peer_to_domain(peer)),
            max_id: Some(*max_id),
            pts: Some(*pts),
            pts_count: Some(*pts_count),
            ..Update::new(UpdateKind::ReadHistoryInbox)
        },
        enums::Update::ReadHistoryOutbox {
            peer,
            max_id,
            pts,
            pts_count,
        } => Update {
            peer: Some(mapper::peer_to_domain(peer)),
            max_id: Some(*max_id),
            pts: Some(*pts),
            pts_count: Some(*pts_count),
            ..Update::new(UpdateKind::ReadHistoryOutbox)
        },
        enums::Update::UserPhoto { user_id, date, .. } => Update {
            user_id: Some(*user_id),
            date: Some(*date),
            ..Update::new(UpdateKind::UserPhoto)
        },
        enums::Update::ContactLink { user_id, .. } => Update {
            user_id: Some(*user_id),
            ..Update::new(UpdateKind::ContactLink)
        },
        enums::Update::UserTyping { user_id, .. } => Update {
            user_id: Some(*user_id),
            ..Update::new(UpdateKind::UserTyping)
        },
        enums::Update::ChatUserTyping {
            chat_id, user_id, ..
        } => Update {
            chat_id: Some(*chat_id),
            user_id: Some(*user_id),
            ..Update::new(UpdateKind::ChatUserTyping)
        },
        enums::Update::ChatParticipantAdd {
            chat_id,
            user_id,
            inviter_id,
            date,
            version,
        } => Update {
            chat_id: Some(*chat_id),
            user_id: Some(*user_id),
            inviter_id: Some(*inviter_id),
            date: Some(*date),
            version: Some(*version),
            ..Update::new(UpdateKind::ChatParticipantAdd)
        },
        enums::Update::ChatParticipantAdmin {
            chat_id,
            user_id,
            version,
            ..
        } => Update {
            chat_id: Some(*chat_id),
            user_id: Some(*user_id),
            version: Some(*version),
            ..Update::new(UpdateKind::ChatParticipantAdmin)
        },
        enums::Update::ChatParticipantDelete {
            chat_id,
            user_id,
            version,
        } => Update {
            chat_id: Some(*chat_id),
            user_id: Some(*user_id),
            version: Some(*version),
            ..Update::new(UpdateKind::ChatParticipantDelete)
        },
        enums::Update::MessageId { .. }
        | enums::Update::DeleteMessages { .. }
        | enums::Update::ChatParticipants { .. }
        | enums::Update::UserStatus { .. }
        | enums::Update::UserName { .. }
        | enums::Update::ContactRegistered { .. }
        | enums::Update::UserPhone { .. }
        | enums::Update::ReadMessagesContents { .. }
        | enums::Update::Channel { .. }
        | enums::Update::DeleteChannelMessages { .. }
        | enums::Update::ChannelMessageViews { .. }
        | enums::Update::ChatAdmins { .. }
        | enums::Update::ChannelPinnedMessage { .. } => {
            debug!(type_name = update.name(), "unrecognized update");
            Update::unrecognized(update.name())
        }
    }
}

fn with_message(kind: UpdateKind, message: &enums::Message, pts: i32, pts_count: i32) -> Update {
    let message = message_mapper::message_to_domain(message);
    Update {
        pts: Some(pts),
        pts_count: Some(pts_count),
        channel_id: message.as_ref().and_then(|m| m.channel_id()),
        message,
        ..Update::new(kind)
    }
}

pub fn updates_to_domain(updates: &[enums::Update]) -> Vec<Update> {
    updates.iter().map(update_to_domain).collect()
}

pub fn update_state_to_domain(state: &types::updates::State) -> UpdateState {
    UpdateState {
        pts: state.pts,
        qts: state.qts,
        seq: state.seq,
        date: state.date,
        unread_count: state.unread_count,
    }
}
