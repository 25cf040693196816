// Copyright PingCAP Inc. 2025.
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; version 2 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! StoreHandle - ClicheStore implementation using actor model

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use crate::actor::messages::StoreCommand;
use crate::actor::metrics::Metrics;
use crate::store::{ClicheStore, StoreError};

/// Cloneable front door to the ClicheStoreActor
///
/// Each call allocates a oneshot reply channel, enqueues the command (waiting
/// while the bounded queue is full) and then waits for the actor's reply.
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreCommand>,
    metrics: Arc<Metrics>,
    /// Upper bound on enqueue plus reply; `None` waits forever
    timeout: Option<Duration>,
}

impl StoreHandle {
    pub fn new(tx: mpsc::Sender<StoreCommand>, metrics: Arc<Metrics>) -> Self {
        Self {
            tx,
            metrics,
            timeout: None,
        }
    }

    /// Bound how long a caller waits for the actor
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Send a command to the actor and wait for its reply
    async fn send_command(
        &self,
        make_command: impl FnOnce(oneshot::Sender<String>) -> StoreCommand,
    ) -> Result<String, StoreError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let cmd = make_command(reply_tx);

        let exchange = async {
            self.tx
                .send(cmd)
                .await
                .map_err(|_| StoreError::ActorClosed)?;
            self.metrics.inc_message_sent();

            reply_rx.await.map_err(|_| StoreError::ReplyDropped)
        };

        match self.timeout {
            None => exchange.await,
            Some(limit) => match tokio::time::timeout(limit, exchange).await {
                Ok(res) => res,
                Err(_) => {
                    self.metrics.inc_message_timeout();
                    tracing::warn!(?limit, "store request timed out");
                    Err(StoreError::Timeout(limit))
                }
            },
        }
    }
}

#[async_trait]
impl ClicheStore for StoreHandle {
    async fn list_all(&self) -> Result<String, StoreError> {
        self.send_command(|reply| StoreCommand::ListAll { reply })
            .await
    }

    async fn get_one(&self, id: u64) -> Result<String, StoreError> {
        self.send_command(|reply| StoreCommand::GetOne { id, reply })
            .await
    }

    async fn create(&self, cliche: String, counter: String) -> Result<String, StoreError> {
        self.send_command(|reply| StoreCommand::Create {
            cliche,
            counter,
            reply,
        })
        .await
    }

    async fn edit(&self, id: u64, cliche: String, counter: String) -> Result<String, StoreError> {
        self.send_command(|reply| StoreCommand::Edit {
            id,
            cliche,
            counter,
            reply,
        })
        .await
    }

    async fn delete(&self, id: u64) -> Result<String, StoreError> {
        self.send_command(|reply| StoreCommand::Delete { id, reply })
            .await
    }
}
