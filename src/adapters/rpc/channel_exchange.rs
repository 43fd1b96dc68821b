//! Request queue with a one-shot response handle per call.
//!
//! Callers push `PendingCall`s into a bounded queue; whoever drives the
//! connection drains the receiver and answers each call on its own handle.
//! Concurrent callers never share a response slot.

use crate::domain::TransportError;
use crate::ports::RpcExchange;
use crate::tl::{Request, Response};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::trace;

pub type CallResult = Result<Response, TransportError>;

/// A request waiting for the transport, with the handle to answer it on.
#[derive(Debug)]
pub struct PendingCall {
    pub request: Request,
    pub respond_to: oneshot::Sender<CallResult>,
}

impl PendingCall {
    /// Deliver the outcome. Returns `false` if the caller stopped waiting.
    pub fn respond(self, result: CallResult) -> bool {
        self.respond_to.send(result).is_ok()
    }
}

/// Cheaply cloneable handle to the request queue.
#[derive(Debug, Clone)]
pub struct ChannelExchange {
    queue: mpsc::Sender<PendingCall>,
}

impl ChannelExchange {
    /// Create the handle and the receiving end the transport drains.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<PendingCall>) {
        let (queue, calls) = mpsc::channel(capacity.max(1));
        (Self { queue }, calls)
    }
}

#[async_trait]
impl RpcExchange for ChannelExchange {
    async fn exchange(&self, request: Request) -> Result<Response, TransportError> {
        let (respond_to, response) = oneshot::channel();
        trace!(request = request.name(), "queueing request");
        self.queue
            .send(PendingCall {
                request,
                respond_to,
            })
            .await
            .map_err(|_| TransportError::Closed)?;
        response.await.map_err(|_| TransportError::Dropped)?
    }
}
