//! Exchange that answers from a queue of canned responses.
//!
//! Used to replay recorded sessions and to drive the gateway in tests.
//! Every request it receives is recorded in order.

use crate::domain::TransportError;
use crate::ports::RpcExchange;
use crate::tl::{Request, Response};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ScriptedExchange {
    script: Mutex<VecDeque<Result<Response, TransportError>>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedExchange {
    pub fn new(responses: impl IntoIterator<Item = Response>) -> Self {
        Self {
            script: Mutex::new(responses.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn push(&self, response: Response) {
        self.script.lock().await.push_back(Ok(response));
    }

    pub async fn push_failure(&self, error: TransportError) {
        self.script.lock().await.push_back(Err(error));
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.requests.lock().await.clone()
    }

    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl RpcExchange for ScriptedExchange {
    async fn exchange(&self, request: Request) -> Result<Response, TransportError> {
        let name = request.name();
        self.requests.lock().await.push(request);
        let next = self.script.lock().await.pop_front();
        match next {
            Some(result) => result,
            None => {
                debug!(request = name, "script exhausted");
                Err(TransportError::Failed(format!(
                    "no scripted response for {}",
                    name
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tl::{functions, types};

    #[tokio::test]
    async fn test_replays_in_order_and_records() {
        let exchange = ScriptedExchange::new([Response::State(types::updates::State {
            pts: 3,
            ..Default::default()
        })]);
        exchange.push_failure(TransportError::Dropped).await;

        let first = exchange.exchange(functions::updates::GetState.into()).await;
        assert!(matches!(first, Ok(Response::State(s)) if s.pts == 3));

        let second = exchange.exchange(functions::updates::GetState.into()).await;
        assert_eq!(second, Err(TransportError::Dropped));

        let third = exchange.exchange(functions::updates::GetState.into()).await;
        assert!(matches!(third, Err(TransportError::Failed(_))));

        assert_eq!(exchange.requests().await.len(), 3);
        assert_eq!(exchange.remaining().await, 0);
    }
}
