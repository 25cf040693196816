use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub mod collection;

pub use collection::Collection;

/// A cliche and its counter-cliche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClichePair {
    pub id: u64,
    pub cliche: String,
    pub counter: String,
}

impl ClichePair {
    /// `"<id>: <cliche>  <counter>\n"`, the line used by list and read replies.
    pub fn render_line(&self) -> String {
        format!("{}: {}  {}\n", self.id, self.cliche, self.counter)
    }
}

/// Failures of the channel plumbing between a caller and the store actor.
///
/// Unknown ids are not errors: they come back as a normal "Bad Id" reply.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store actor is not running")]
    ActorClosed,
    #[error("store actor dropped the reply")]
    ReplyDropped,
    #[error("store request timed out after {0:?}")]
    Timeout(Duration),
}

/// Operations exposed by the cliche store. Every reply is human-readable text.
#[async_trait]
pub trait ClicheStore: Send + Sync + 'static {
    async fn list_all(&self) -> Result<String, StoreError>;
    async fn get_one(&self, id: u64) -> Result<String, StoreError>;
    async fn create(&self, cliche: String, counter: String) -> Result<String, StoreError>;
    async fn edit(&self, id: u64, cliche: String, counter: String) -> Result<String, StoreError>;
    async fn delete(&self, id: u64) -> Result<String, StoreError>;
}

/// Built-in pairs loaded at startup, in id order.
pub const SEED_PAIRS: [(&str, &str); 3] = [
    (
        "Out of sight, out of mind.",
        "Absence makes the heart grow fonder.",
    ),
    (
        "A penny saved is a penny earned.",
        "Penny-wise and dollar-foolish.",
    ),
    ("He who hesitates is lost.", "Look before you leap."),
];

pub(crate) fn bad_id(id: u64) -> String {
    format!("\nBad Id: {}\n", id)
}
