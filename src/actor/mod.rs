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

//! Actor-based store for cliche pairs
//!
//! All store state lives inside a single actor task. Callers talk to it
//! through a bounded channel and get their answer on a per-request oneshot
//! channel, so there is no shared mutable state and no locking.

pub mod cliche_store;
pub mod handle;
pub mod messages;
pub mod metrics;

pub use cliche_store::ClicheStoreActor;
pub use handle::StoreHandle;
pub use messages::StoreCommand;
pub use metrics::Metrics;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::StoreConfig;
use crate::store::Collection;

/// Start the store actor on the current tokio runtime and return its handle
pub fn spawn_store(cfg: &StoreConfig) -> StoreHandle {
    let collection = if cfg.seed {
        Collection::seeded()
    } else {
        Collection::new()
    };
    let metrics = Arc::new(Metrics::new());
    let (tx, rx) = mpsc::channel(cfg.queue_capacity.max(1));

    let actor = ClicheStoreActor::new(collection, rx, metrics.clone());
    tokio::spawn(actor.run());

    tracing::info!(
        queue_capacity = cfg.queue_capacity,
        seeded = cfg.seed,
        "ClicheStoreActor spawned"
    );

    StoreHandle::new(tx, metrics).with_timeout(cfg.request_timeout())
}
