pub mod actor;
pub mod cliches_http;
pub mod config;
pub mod observability;
pub mod server;
pub mod store;

pub use actor::{spawn_store, StoreHandle};
pub use cliches_http::ClicheHttpHandler;
pub use store::{ClichePair, ClicheStore, StoreError};
