//! Map `updates.getDifference` and `updates.getChannelDifference` results.
//!
//! One response in, one domain value out. Deciding whether to request again
//! is left to the caller via `is_more_pending` / `is_gap`.

use crate::adapters::telegram::{join_index, message_mapper, update_mapper};
use crate::domain::flags::channel_difference_is_final;
use crate::domain::{ChannelPosition, ChannelUpdateDifference, DifferenceBatch, UpdateDifference};
use crate::tl::enums;
use tracing::debug;

pub fn difference_to_domain(difference: &enums::updates::Difference) -> UpdateDifference {
    let mapped = match difference {
        enums::updates::Difference::Empty(d) => UpdateDifference::Empty {
            date: d.date,
            seq: d.seq,
        },
        enums::updates::Difference::Difference(d) => UpdateDifference::Full(DifferenceBatch {
            new_messages: message_mapper::messages_to_domain(&d.new_messages),
            other_updates: update_mapper::updates_to_domain(&d.other_updates),
            entities: join_index::entity_bundle(&d.chats, &d.users),
            state: update_mapper::update_state_to_domain(&d.state),
        }),
        enums::updates::Difference::Slice(d) => UpdateDifference::Slice(DifferenceBatch {
            new_messages: message_mapper::messages_to_domain(&d.new_messages),
            other_updates: update_mapper::updates_to_domain(&d.other_updates),
            entities: join_index::entity_bundle(&d.chats, &d.users),
            state: update_mapper::update_state_to_domain(&d.intermediate_state),
        }),
        enums::updates::Difference::TooLong(d) => UpdateDifference::TooLong { pts: d.pts },
    };
    debug!(type_name = difference.name(), "difference received");
    mapped
}

pub fn channel_difference_to_domain(
    difference: &enums::updates::ChannelDifference,
) -> ChannelUpdateDifference {
    let position = |flags: i32, pts: i32, timeout: Option<i32>| ChannelPosition {
        pts,
        is_final: channel_difference_is_final(flags),
        timeout,
    };
    let mapped = match difference {
        enums::updates::ChannelDifference::Empty(d) => ChannelUpdateDifference::Empty {
            position: position(d.flags, d.pts, d.timeout),
        },
        enums::updates::ChannelDifference::Difference(d) => ChannelUpdateDifference::Difference {
            position: position(d.flags, d.pts, d.timeout),
            new_messages: message_mapper::messages_to_domain(&d.new_messages),
            other_updates: update_mapper::updates_to_domain(&d.other_updates),
            entities: join_index::entity_bundle(&d.chats, &d.users),
        },
        enums::updates::ChannelDifference::TooLong(d) => ChannelUpdateDifference::TooLong {
            position: position(d.flags, d.pts, d.timeout),
            top_message: d.top_message,
            read_inbox_max_id: d.read_inbox_max_id,
            read_outbox_max_id: d.read_outbox_max_id,
            unread_count: d.unread_count,
            messages: message_mapper::messages_to_domain(&d.messages),
            entities: join_index::entity_bundle(&d.chats, &d.users),
        },
    };
    debug!(type_name = difference.name(), "channel difference received");
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CursorAdvance, DifferenceKind, UpdateKind, UpdateState};
    use crate::tl::types;

    fn message(id: i32) -> enums::Message {
        enums::Message::Message(types::Message {
            flags: 0,
            id,
            from_id: Some(1),
            to_id: enums::Peer::User { user_id: 2 },
            fwd_from: None,
            via_bot_id: None,
            reply_to_msg_id: None,
            date: 100 + id,
            message: format!("m{}", id),
            media: None,
            entities: None,
            views: None,
            edit_date: None,
            post_author: None,
        })
    }

    #[test]
    fn test_slice_reports_intermediate_state() {
        let wire = enums::updates::Difference::Slice(types::updates::DifferenceSlice {
            new_messages: vec![message(1), message(2)],
            other_updates: vec![enums::Update::MessageId {
                id: 2,
                random_id: 9,
            }],
            chats: vec![],
            users: vec![enums::User::User(types::User {
                id: 1,
                ..Default::default()
            })],
            intermediate_state: types::updates::State {
                pts: 10,
                qts: 0,
                date: 1000,
                seq: 5,
                unread_count: 0,
            },
        });
        let difference = difference_to_domain(&wire);
        assert!(difference.is_more_pending());
        assert_eq!(difference.kind(), DifferenceKind::Slice);

        let batch = difference.batch().expect("batch");
        assert_eq!(
            batch.new_messages.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            batch.other_updates[0].kind,
            UpdateKind::Unrecognized("updateMessageID".into())
        );
        assert_eq!(batch.entities.users.len(), 1);

        let mut cursor = UpdateState::default();
        assert_eq!(cursor.apply(&difference), CursorAdvance::MorePending);
        assert_eq!((cursor.pts, cursor.seq, cursor.date), (10, 5, 1000));
    }

    #[test]
    fn test_too_long_and_empty_are_distinct() {
        let too_long = difference_to_domain(&enums::updates::Difference::TooLong(
            types::updates::DifferenceTooLong { pts: 400 },
        ));
        let empty = difference_to_domain(&enums::updates::Difference::Empty(
            types::updates::DifferenceEmpty { date: 5, seq: 6 },
        ));
        assert!(too_long.is_gap());
        assert!(!empty.is_gap());
        assert_eq!(too_long, UpdateDifference::TooLong { pts: 400 });
        assert_eq!(empty, UpdateDifference::Empty { date: 5, seq: 6 });
    }

    #[test]
    fn test_channel_difference_final_and_timeout() {
        let wire = enums::updates::ChannelDifference::Difference(
            types::updates::ChannelDifference {
                flags: 0,
                pts: 55,
                timeout: Some(15),
                new_messages: vec![
                    message(1),
                    enums::Message::Empty(types::MessageEmpty { id: 2 }),
                ],
                ..Default::default()
            },
        );
        let difference = channel_difference_to_domain(&wire);
        let position = difference.position();
        assert_eq!(position.pts, 55);
        assert_eq!(position.timeout, Some(15));
        assert!(!position.is_final);
        assert!(difference.is_more_pending());
        match difference {
            ChannelUpdateDifference::Difference { new_messages, .. } => {
                assert_eq!(new_messages.len(), 1)
            }
            other => panic!("expected difference, got {:?}", other),
        }

        let last = channel_difference_to_domain(&enums::updates::ChannelDifference::Empty(
            types::updates::ChannelDifferenceEmpty {
                flags: 1,
                pts: 55,
                timeout: None,
            },
        ));
        assert!(last.position().is_final);
        assert!(!last.is_more_pending());
    }

    #[test]
    fn test_channel_too_long_keeps_snapshot() {
        let wire = enums::updates::ChannelDifference::TooLong(
            types::updates::ChannelDifferenceTooLong {
                flags: 1,
                pts: 900,
                top_message: 3,
                unread_count: 2,
                messages: vec![message(3)],
                ..Default::default()
            },
        );
        let difference = channel_difference_to_domain(&wire);
        assert!(difference.is_gap());
        match difference {
            ChannelUpdateDifference::TooLong {
                top_message,
                messages,
                ..
            } => {
                assert_eq!(top_message, 3);
                assert_eq!(messages.len(), 1);
            }
            other => panic!("expected too long, got {:?}", other),
        }
    }
}
