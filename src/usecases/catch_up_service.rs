//! Catch-up use case: bring the update cursor back to the server's position.
//!
//! - Requests differences until the server reports nothing pending
//! - On a too-long gap, refetches dialogs and a fresh state instead of diffing
//! - Pages channel differences until the server marks one final
//! - Holds the cursor lock for a whole run so passes never interleave

use crate::domain::{
    ChannelCursor, ChannelUpdateDifference, CursorAdvance, Dialog, DomainError, EntityBundle,
    Message, Update, UpdateDifference, UpdateState,
};
use crate::ports::{DialogsPage, TgGateway};
use crate::shared::SyncConfig;
use crate::tl::enums::InputChannel;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Catch-up service. Owns the account-wide cursor; channel cursors are the caller's.
pub struct CatchUpService {
    tg: Arc<dyn TgGateway>,
    config: SyncConfig,
    cursor: Mutex<Option<UpdateState>>,
}

impl CatchUpService {
    pub fn new(tg: Arc<dyn TgGateway>, config: SyncConfig) -> Self {
        Self {
            tg,
            config,
            cursor: Mutex::new(None),
        }
    }

    /// Start from a previously persisted cursor.
    pub fn with_cursor(tg: Arc<dyn TgGateway>, config: SyncConfig, cursor: UpdateState) -> Self {
        Self {
            tg,
            config,
            cursor: Mutex::new(Some(cursor)),
        }
    }

    pub async fn cursor(&self) -> Option<UpdateState> {
        *self.cursor.lock().await
    }

    /// Replace the cursor, e.g. after restoring it from storage.
    pub async fn set_cursor(&self, state: UpdateState) {
        *self.cursor.lock().await = Some(state);
    }

    /// Current cursor, fetched with `updates.getState` if there is none yet.
    pub async fn ensure_cursor(&self) -> Result<UpdateState, DomainError> {
        let mut guard = self.cursor.lock().await;
        self.cursor_or_fetch(&mut guard).await
    }

    async fn cursor_or_fetch(
        &self,
        slot: &mut Option<UpdateState>,
    ) -> Result<UpdateState, DomainError> {
        match *slot {
            Some(state) => Ok(state),
            None => {
                let state = self.tg.get_state().await?;
                info!(pts = state.pts, qts = state.qts, seq = state.seq, "cursor initialized");
                *slot = Some(state);
                Ok(state)
            }
        }
    }

    /// Fetch everything missed since the cursor. The cursor is stored after
    /// every pass, so progress survives a failed later pass. A too-long gap
    /// is only stored once the resync behind it succeeded.
    pub async fn catch_up(&self) -> Result<CatchUpReport, DomainError> {
        let mut guard = self.cursor.lock().await;
        let mut cursor = self.cursor_or_fetch(&mut guard).await?;
        let max_passes = self.config.max_catch_up_passes_or_default();
        let mut report = CatchUpReport::default();

        loop {
            if report.passes >= max_passes {
                warn!(passes = report.passes, pts = cursor.pts, "catch-up did not converge");
                return Err(DomainError::CatchUpExhausted {
                    passes: report.passes,
                });
            }

            let difference = self.tg.get_difference(&cursor).await?;
            report.passes += 1;
            let mut next = cursor;
            let advance = next.apply(&difference);
            debug!(pass = report.passes, ?advance, pts = next.pts, "difference applied");

            match advance {
                CursorAdvance::Current => {
                    cursor = next;
                    *guard = Some(cursor);
                    break;
                }
                CursorAdvance::Advanced => {
                    cursor = next;
                    *guard = Some(cursor);
                    report.absorb(difference);
                    break;
                }
                CursorAdvance::MorePending => {
                    cursor = next;
                    *guard = Some(cursor);
                    report.absorb(difference);
                }
                CursorAdvance::ResyncRequired { pts } => {
                    // the stored cursor stays before the gap until the resync lands
                    warn!(pts, "update gap too long, resyncing");
                    let limit = self.config.resync_dialogs_limit_or_default();
                    let dialogs = self.tg.get_dialogs(DialogsPage::first(limit)).await?;
                    let fresh = self.tg.get_state().await?;
                    next.adopt(&fresh);
                    cursor = next;
                    *guard = Some(cursor);
                    report.resynced = true;
                    report.dialogs = dialogs.dialogs;
                    report.entities.extend(dialogs.entities);
                    break;
                }
            }
        }

        report.cursor = cursor;
        info!(
            passes = report.passes,
            messages = report.new_messages.len(),
            updates = report.other_updates.len(),
            resynced = report.resynced,
            pts = cursor.pts,
            "caught up"
        );
        Ok(report)
    }

    /// Page one channel's difference from `pts` until the server marks it final.
    pub async fn catch_up_channel(
        &self,
        channel: InputChannel,
        pts: i32,
    ) -> Result<ChannelCatchUpReport, DomainError> {
        let channel_id = match channel {
            InputChannel::Channel { channel_id, .. } => channel_id,
            InputChannel::Empty => {
                warn!(pts, "channel catch-up requested for an empty channel");
                return Err(DomainError::EmptyChannel);
            }
        };
        let limit = self.config.channel_difference_limit_or_default();
        let max_passes = self.config.max_catch_up_passes_or_default();
        let mut report = ChannelCatchUpReport {
            cursor: ChannelCursor::new(channel_id, pts),
            ..Default::default()
        };

        loop {
            if report.passes >= max_passes {
                warn!(channel_id, passes = report.passes, "channel catch-up did not converge");
                return Err(DomainError::CatchUpExhausted {
                    passes: report.passes,
                });
            }

            let difference = self
                .tg
                .get_channel_difference(channel.clone(), report.cursor.pts, limit)
                .await?;
            report.passes += 1;
            let advance = report.cursor.apply(&difference);
            report.timeout = difference.position().timeout;

            match difference {
                ChannelUpdateDifference::Empty { .. } => {}
                ChannelUpdateDifference::Difference {
                    new_messages,
                    other_updates,
                    entities,
                    ..
                } => {
                    report.new_messages.extend(new_messages);
                    report.other_updates.extend(other_updates);
                    report.entities.extend(entities);
                }
                ChannelUpdateDifference::TooLong {
                    messages, entities, ..
                } => {
                    warn!(channel_id, pts = report.cursor.pts, "channel gap too long");
                    report.resync_required = true;
                    report.new_messages = messages;
                    report.entities.extend(entities);
                }
            }

            if advance != CursorAdvance::MorePending {
                break;
            }
        }

        info!(
            channel_id,
            passes = report.passes,
            messages = report.new_messages.len(),
            pts = report.cursor.pts,
            "channel caught up"
        );
        Ok(report)
    }
}

/// What one `catch_up` run collected.
#[derive(Debug, Default)]
pub struct CatchUpReport {
    pub passes: u32,
    pub new_messages: Vec<Message>,
    pub other_updates: Vec<Update>,
    pub entities: EntityBundle,
    /// A gap forced a full resync; `dialogs` holds the refetched list.
    pub resynced: bool,
    pub dialogs: Vec<Dialog>,
    pub cursor: UpdateState,
}

impl CatchUpReport {
    fn absorb(&mut self, difference: UpdateDifference) {
        if let Some(batch) = difference.into_batch() {
            self.new_messages.extend(batch.new_messages);
            self.other_updates.extend(batch.other_updates);
            self.entities.extend(batch.entities);
        }
    }
}

/// What one `catch_up_channel` run collected.
#[derive(Debug, Default)]
pub struct ChannelCatchUpReport {
    pub cursor: ChannelCursor,
    pub passes: u32,
    /// New messages, or the channel's latest messages when `resync_required`.
    pub new_messages: Vec<Message>,
    pub other_updates: Vec<Update>,
    pub entities: EntityBundle,
    pub resync_required: bool,
    /// Server-suggested delay before polling the channel again, in seconds.
    pub timeout: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rpc::ScriptedExchange;
    use crate::adapters::telegram::{input_channel, MtprotoGateway};
    use crate::domain::TransportError;
    use crate::tl::{enums, types, Request, Response};

    fn state(pts: i32, seq: i32, date: i32) -> types::updates::State {
        types::updates::State {
            pts,
            qts: 0,
            date,
            seq,
            unread_count: 0,
        }
    }

    fn message(id: i32, to_id: enums::Peer) -> enums::Message {
        enums::Message::Message(types::Message {
            flags: 0,
            id,
            from_id: Some(1),
            to_id,
            fwd_from: None,
            via_bot_id: None,
            reply_to_msg_id: None,
            date: id,
            message: format!("m{}", id),
            media: None,
            entities: None,
            views: None,
            edit_date: None,
            post_author: None,
        })
    }

    fn slice(ids: &[i32], intermediate: types::updates::State) -> Response {
        Response::Difference(enums::updates::Difference::Slice(
            types::updates::DifferenceSlice {
                new_messages: ids
                    .iter()
                    .map(|&id| message(id, enums::Peer::User { user_id: 1 }))
                    .collect(),
                intermediate_state: intermediate,
                ..Default::default()
            },
        ))
    }

    fn full(ids: &[i32], final_state: types::updates::State) -> Response {
        Response::Difference(enums::updates::Difference::Difference(
            types::updates::Difference {
                new_messages: ids
                    .iter()
                    .map(|&id| message(id, enums::Peer::User { user_id: 1 }))
                    .collect(),
                state: final_state,
                ..Default::default()
            },
        ))
    }

    fn service(
        responses: Vec<Response>,
        config: SyncConfig,
    ) -> (CatchUpService, Arc<ScriptedExchange>) {
        let exchange = Arc::new(ScriptedExchange::new(responses));
        let gateway = MtprotoGateway::new(exchange.clone(), config.clone());
        (CatchUpService::new(Arc::new(gateway), config), exchange)
    }

    #[tokio::test]
    async fn test_catch_up_follows_slices() {
        let (svc, exchange) = service(
            vec![
                Response::State(state(10, 1, 100)),
                slice(&[11, 12], state(12, 2, 110)),
                full(&[13], state(13, 3, 120)),
            ],
            SyncConfig::default(),
        );

        let report = svc.catch_up().await.expect("caught up");
        assert_eq!(report.passes, 2);
        assert_eq!(
            report.new_messages.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![11, 12, 13]
        );
        assert!(!report.resynced);
        assert_eq!(report.cursor.pts, 13);
        assert_eq!(svc.cursor().await.map(|c| c.pts), Some(13));

        let requested: Vec<i32> = exchange
            .requests()
            .await
            .iter()
            .filter_map(|r| match r {
                Request::GetDifference(d) => Some(d.pts),
                _ => None,
            })
            .collect();
        assert_eq!(requested, vec![10, 12]);
    }

    #[tokio::test]
    async fn test_empty_difference_stops_without_moving_pts() {
        let (svc, _) = service(
            vec![Response::Difference(enums::updates::Difference::Empty(
                types::updates::DifferenceEmpty { date: 500, seq: 9 },
            ))],
            SyncConfig::default(),
        );
        svc.set_cursor(UpdateState {
            pts: 40,
            qts: 2,
            seq: 3,
            date: 400,
            unread_count: 0,
        })
        .await;

        let report = svc.catch_up().await.expect("caught up");
        assert_eq!(report.passes, 1);
        assert_eq!((report.cursor.pts, report.cursor.qts), (40, 2));
        assert_eq!((report.cursor.seq, report.cursor.date), (9, 500));
    }

    #[tokio::test]
    async fn test_too_long_triggers_resync() {
        let (svc, exchange) = service(
            vec![
                Response::Difference(enums::updates::Difference::TooLong(
                    types::updates::DifferenceTooLong { pts: 5000 },
                )),
                Response::Dialogs(enums::messages::Dialogs::Dialogs(
                    types::messages::Dialogs::default(),
                )),
                Response::State(state(5010, 40, 900)),
            ],
            SyncConfig {
                resync_dialogs_limit: Some(25),
                ..Default::default()
            },
        );
        svc.set_cursor(UpdateState {
            pts: 100,
            ..Default::default()
        })
        .await;

        let report = svc.catch_up().await.expect("resynced");
        assert!(report.resynced);
        assert_eq!(report.cursor.pts, 5010);
        assert_eq!(report.cursor.seq, 40);

        match &exchange.requests().await[1] {
            Request::GetDialogs(d) => assert_eq!(d.limit, 25),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_resync_keeps_cursor_before_gap() {
        let (svc, exchange) = service(
            vec![Response::Difference(enums::updates::Difference::TooLong(
                types::updates::DifferenceTooLong { pts: 5000 },
            ))],
            SyncConfig::default(),
        );
        exchange.push_failure(TransportError::Closed).await;
        svc.set_cursor(UpdateState {
            pts: 100,
            ..Default::default()
        })
        .await;

        let err = svc.catch_up().await.unwrap_err();
        assert!(matches!(err, DomainError::Transport(TransportError::Closed)));
        assert_eq!(svc.cursor().await.map(|c| c.pts), Some(100));

        // the retry diffs from the old cursor and resyncs this time
        exchange
            .push(Response::Difference(enums::updates::Difference::TooLong(
                types::updates::DifferenceTooLong { pts: 5000 },
            )))
            .await;
        exchange
            .push(Response::Dialogs(enums::messages::Dialogs::Dialogs(
                types::messages::Dialogs::default(),
            )))
            .await;
        exchange.push(Response::State(state(5010, 40, 900))).await;

        let report = svc.catch_up().await.expect("resynced");
        assert!(report.resynced);
        assert_eq!(svc.cursor().await.map(|c| c.pts), Some(5010));

        let requested: Vec<i32> = exchange
            .requests()
            .await
            .iter()
            .filter_map(|r| match r {
                Request::GetDifference(d) => Some(d.pts),
                _ => None,
            })
            .collect();
        assert_eq!(requested, vec![100, 100]);
    }

    #[tokio::test]
    async fn test_failed_state_fetch_after_dialogs_keeps_cursor() {
        let (svc, exchange) = service(
            vec![
                Response::Difference(enums::updates::Difference::TooLong(
                    types::updates::DifferenceTooLong { pts: 5000 },
                )),
                Response::Dialogs(enums::messages::Dialogs::Dialogs(
                    types::messages::Dialogs::default(),
                )),
            ],
            SyncConfig::default(),
        );
        exchange.push_failure(TransportError::Dropped).await;
        svc.set_cursor(UpdateState {
            pts: 100,
            ..Default::default()
        })
        .await;

        assert!(svc.catch_up().await.is_err());
        assert_eq!(svc.cursor().await.map(|c| c.pts), Some(100));
    }

    #[tokio::test]
    async fn test_ensure_cursor_fetches_once() {
        let (svc, exchange) = service(
            vec![Response::State(state(77, 5, 300))],
            SyncConfig::default(),
        );
        assert_eq!(svc.cursor().await, None);

        let first = svc.ensure_cursor().await.expect("fetched");
        let second = svc.ensure_cursor().await.expect("cached");
        assert_eq!(first.pts, 77);
        assert_eq!(first, second);

        let requests = exchange.requests().await;
        assert_eq!(requests.len(), 1);
        assert!(matches!(requests[0], Request::GetState(_)));
    }

    #[tokio::test]
    async fn test_with_cursor_skips_state_fetch() {
        let exchange = Arc::new(ScriptedExchange::new(vec![Response::Difference(
            enums::updates::Difference::Empty(types::updates::DifferenceEmpty {
                date: 20,
                seq: 2,
            }),
        )]));
        let gateway = MtprotoGateway::new(exchange.clone(), SyncConfig::default());
        let restored = UpdateState {
            pts: 64,
            qts: 1,
            seq: 1,
            date: 10,
            unread_count: 0,
        };
        let svc = CatchUpService::with_cursor(Arc::new(gateway), SyncConfig::default(), restored);

        assert_eq!(svc.ensure_cursor().await.expect("restored"), restored);
        let report = svc.catch_up().await.expect("caught up");
        assert_eq!(report.cursor.pts, 64);
        assert_eq!(report.cursor.seq, 2);

        let requests = exchange.requests().await;
        assert_eq!(requests.len(), 1);
        match &requests[0] {
            Request::GetDifference(d) => assert_eq!(d.pts, 64),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pass_limit() {
        let (svc, _) = service(
            vec![
                slice(&[1], state(1, 1, 1)),
                slice(&[2], state(2, 2, 2)),
                slice(&[3], state(3, 3, 3)),
            ],
            SyncConfig {
                max_catch_up_passes: Some(2),
                ..Default::default()
            },
        );
        svc.set_cursor(UpdateState::default()).await;

        let err = svc.catch_up().await.unwrap_err();
        assert!(matches!(err, DomainError::CatchUpExhausted { passes: 2 }));
        // progress made before giving up is kept
        assert_eq!(svc.cursor().await.map(|c| c.pts), Some(2));
    }

    #[tokio::test]
    async fn test_channel_pages_until_final() {
        let page = |flags: i32, pts: i32, ids: &[i32]| {
            Response::ChannelDifference(enums::updates::ChannelDifference::Difference(
                types::updates::ChannelDifference {
                    flags,
                    pts,
                    timeout: Some(30),
                    new_messages: ids
                        .iter()
                        .map(|&id| message(id, enums::Peer::Channel { channel_id: 7 }))
                        .collect(),
                    ..Default::default()
                },
            ))
        };
        let (svc, exchange) = service(
            vec![page(0, 150, &[1, 2]), page(1, 160, &[3])],
            SyncConfig {
                channel_difference_limit: Some(50),
                ..Default::default()
            },
        );

        let report = svc
            .catch_up_channel(input_channel(7, Some(70)), 100)
            .await
            .expect("channel caught up");
        assert_eq!(report.passes, 2);
        assert_eq!(report.cursor, ChannelCursor::new(7, 160));
        assert_eq!(report.new_messages.len(), 3);
        assert_eq!(report.timeout, Some(30));
        assert!(!report.resync_required);

        let pts: Vec<(i32, i32)> = exchange
            .requests()
            .await
            .iter()
            .filter_map(|r| match r {
                Request::GetChannelDifference(d) => Some((d.pts, d.limit)),
                _ => None,
            })
            .collect();
        assert_eq!(pts, vec![(100, 50), (150, 50)]);
    }

    #[tokio::test]
    async fn test_channel_too_long_reports_snapshot() {
        let (svc, _) = service(
            vec![Response::ChannelDifference(
                enums::updates::ChannelDifference::TooLong(
                    types::updates::ChannelDifferenceTooLong {
                        flags: 1,
                        pts: 9000,
                        top_message: 44,
                        messages: vec![message(44, enums::Peer::Channel { channel_id: 7 })],
                        ..Default::default()
                    },
                ),
            )],
            SyncConfig::default(),
        );

        let report = svc
            .catch_up_channel(input_channel(7, None), 100)
            .await
            .expect("reported");
        assert!(report.resync_required);
        assert_eq!(report.passes, 1);
        assert_eq!(report.new_messages[0].id, 44);
        assert_eq!(report.cursor.pts, 9000);
    }

    #[tokio::test]
    async fn test_empty_channel_is_rejected() {
        let (svc, exchange) = service(vec![], SyncConfig::default());
        let err = svc
            .catch_up_channel(InputChannel::Empty, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmptyChannel));
        assert!(exchange.requests().await.is_empty());
    }
}
