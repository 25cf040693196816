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

//! Message types for actor communication
//!
//! Every command carries its own oneshot sender, so replies never cross
//! between callers and the store state is never shared.

use tokio::sync::oneshot;

/// Commands sent to the ClicheStoreActor
#[derive(Debug)]
pub enum StoreCommand {
    /// Render every pair in collection order
    ListAll { reply: oneshot::Sender<String> },

    /// Render a single pair
    GetOne {
        id: u64,
        reply: oneshot::Sender<String>,
    },

    /// Append a new pair under the next id
    Create {
        cliche: String,
        counter: String,
        reply: oneshot::Sender<String>,
    },

    /// Overwrite the text of an existing pair
    Edit {
        id: u64,
        cliche: String,
        counter: String,
        reply: oneshot::Sender<String>,
    },

    /// Remove a pair
    Delete {
        id: u64,
        reply: oneshot::Sender<String>,
    },
}

impl StoreCommand {
    /// Short tag used in logs and metric labels
    pub fn op_name(&self) -> &'static str {
        match self {
            StoreCommand::ListAll { .. } => "read all",
            StoreCommand::GetOne { .. } => "read one",
            StoreCommand::Create { .. } => "create",
            StoreCommand::Edit { .. } => "edit",
            StoreCommand::Delete { .. } => "delete",
        }
    }
}
