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

use clap::Parser;
use cliches::actor::spawn_store;
use cliches::config::Config;
use cliches::observability::tracing_setup;
use cliches::server::{ConnectionManager, HttpConnectionManager};
use cliches::store::ClicheStore;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "cliches")]
#[command(about = "In-memory cliche pair service over HTTP", long_about = None)]
struct Args {
    /// Address to listen on (e.g., 0.0.0.0:8888)
    #[arg(short, long)]
    listen: Option<String>,

    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Capacity of the store actor's request queue
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// Start with an empty collection instead of the built-in pairs
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_setup::init_tracing_from_env();

    let args = Args::parse();

    let mut cfg = Config::from_path_or_default(&args.config)?;

    // Command line args override config file
    if let Some(listen) = args.listen {
        cfg.listen_addr = listen;
    }
    if let Some(capacity) = args.queue_capacity {
        cfg.store.queue_capacity = capacity;
    }
    if args.no_seed {
        cfg.store.seed = false;
    }
    cfg.validate()?;

    let addr: SocketAddr = cfg.listen_socket_addr()?;

    let store: Arc<dyn ClicheStore> = Arc::new(spawn_store(&cfg.store));
    let server = HttpConnectionManager::new(store);

    tokio::select! {
        r = server.serve(addr) => {
            if let Err(e) = r {
                tracing::error!("server exited with error: {e}");
                let e: Box<dyn std::error::Error> = e;
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("ctrl-c received, shutting down");
        }
    }

    Ok(())
}
