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

//! Lock-free metrics using atomics
//!
//! Counters are shared between the store handle (sender side) and the
//! actor (receiver side) without any locking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free metrics counters
#[derive(Debug, Default)]
pub struct Metrics {
    // Operation counters
    pub list_requests: AtomicU64,
    pub get_requests: AtomicU64,
    pub create_requests: AtomicU64,
    pub edit_requests: AtomicU64,
    pub delete_requests: AtomicU64,

    // Lookups that hit an unknown id
    pub bad_ids: AtomicU64,

    // Actor health
    pub messages_sent: AtomicU64,
    pub messages_received: AtomicU64,
    pub messages_timeout: AtomicU64,
}

impl Metrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_list(&self) {
        self.list_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_get(&self) {
        self.get_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_create(&self) {
        self.create_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_edit(&self) {
        self.edit_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_delete(&self) {
        self.delete_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_bad_id(&self) {
        self.bad_ids.fetch_add(1, Ordering::Relaxed);
    }

    // Actor health
    pub fn inc_message_sent(&self) {
        self.messages_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_message_received(&self) {
        self.messages_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_message_timeout(&self) {
        self.messages_timeout.fetch_add(1, Ordering::Relaxed);
    }

    // Readers
    pub fn get_create_requests(&self) -> u64 {
        self.create_requests.load(Ordering::Relaxed)
    }

    pub fn get_bad_ids(&self) -> u64 {
        self.bad_ids.load(Ordering::Relaxed)
    }

    pub fn get_messages_received(&self) -> u64 {
        self.messages_received.load(Ordering::Relaxed)
    }

    pub fn get_messages_timeout(&self) -> u64 {
        self.messages_timeout.load(Ordering::Relaxed)
    }

    /// Commands enqueued but not yet picked up by the actor
    pub fn get_message_queue_depth(&self) -> i64 {
        let sent = self.messages_sent.load(Ordering::Relaxed) as i64;
        let received = self.messages_received.load(Ordering::Relaxed) as i64;
        sent - received
    }
}
