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

//! Cliche store actor
//!
//! This actor owns the collection of cliche pairs and the id counter. It
//! processes commands one at a time, so no locks are needed and every
//! mutation is applied in dequeue order.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::actor::messages::StoreCommand;
use crate::actor::metrics::Metrics;
use crate::observability::metrics as prom_metrics;
use crate::store::Collection;

/// Single-writer owner of the cliche collection
pub struct ClicheStoreActor {
    /// The only copy of the store state
    collection: Collection,

    /// Incoming command channel
    rx: mpsc::Receiver<StoreCommand>,

    /// Lock-free metrics
    metrics: Arc<Metrics>,
}

impl ClicheStoreActor {
    pub fn new(
        collection: Collection,
        rx: mpsc::Receiver<StoreCommand>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            collection,
            rx,
            metrics,
        }
    }

    /// Run the actor event loop
    ///
    /// The actor stops when every sender has been dropped.
    pub async fn run(mut self) {
        tracing::info!(
            records = self.collection.len(),
            next_id = self.collection.next_id(),
            "ClicheStoreActor started"
        );
        prom_metrics::set_store_records(self.collection.len());

        while let Some(cmd) = self.rx.recv().await {
            self.metrics.inc_message_received();
            self.handle(cmd);
        }

        tracing::info!("ClicheStoreActor stopped");
    }

    fn handle(&mut self, cmd: StoreCommand) {
        let op = cmd.op_name();
        let op_start = Instant::now();

        match cmd {
            StoreCommand::ListAll { reply } => {
                self.metrics.inc_list();
                let _ = reply.send(self.collection.read_all());
                tracing::info!(op, records = self.collection.len(), "completed");
            }

            StoreCommand::GetOne { id, reply } => {
                self.metrics.inc_get();
                let found = self.note_lookup(id);
                let _ = reply.send(self.collection.read_one(id));
                tracing::info!(op, id, found, "completed");
            }

            StoreCommand::Create {
                cliche,
                counter,
                reply,
            } => {
                self.metrics.inc_create();
                let id = self.collection.next_id();
                let _ = reply.send(self.collection.create(cliche, counter));
                tracing::info!(op, id, "completed");
            }

            StoreCommand::Edit {
                id,
                cliche,
                counter,
                reply,
            } => {
                self.metrics.inc_edit();
                let found = self.note_lookup(id);
                let _ = reply.send(self.collection.edit(id, cliche, counter));
                tracing::info!(op, id, found, "completed");
            }

            StoreCommand::Delete { id, reply } => {
                self.metrics.inc_delete();
                let found = self.note_lookup(id);
                let _ = reply.send(self.collection.delete(id));
                tracing::info!(op, id, found, "completed");
            }
        }

        prom_metrics::set_store_records(self.collection.len());
        prom_metrics::record_actor_op_total(op, op_start.elapsed().as_secs_f64());
    }

    fn note_lookup(&self, id: u64) -> bool {
        let found = self.collection.contains(id);
        if !found {
            self.metrics.inc_bad_id();
        }
        found
    }
}
