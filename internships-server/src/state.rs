use serde_json::Value;
use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::sync::RwLock;

/// Shared state needed by requests. Everything lives in memory and goes away
/// when the server stops.
#[derive(Clone, Default)]
pub struct State {
    /// Stored internships, by ID
    internships: Arc<RwLock<BTreeMap<String, Value>>>,

    /// The last ID handed out
    last_id: Arc<AtomicU64>,
}

impl State {
    /// Create a new, empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access to the stored internships
    pub fn internships(&self) -> &RwLock<BTreeMap<String, Value>> {
        &self.internships
    }

    /// Hand out an ID nobody has had before.
    pub fn next_id(&self) -> String {
        (self.last_id.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}
