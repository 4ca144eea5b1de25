//! Engine lookup by name.
//!
//! Aliases resolve to a canonical name before the cache is consulted, so
//! `"sequence"` and `"table"` share one engine and one precomputed table.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::{Engine, FibError};
use crate::fastdoubling::FastDoublingEngine;
use crate::sequence::SequenceTableEngine;

/// Canonical engine names.
pub const ENGINE_NAMES: [&str; 2] = ["table", "fast"];

/// Map an engine name or alias to its canonical name.
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
    match name {
        "table" | "sequence" => Some("table"),
        "fast" | "fastdoubling" => Some("fast"),
        _ => None,
    }
}

/// Resolves engines by name.
pub trait EngineFactory: Send + Sync {
    /// Get or create an engine by name or alias.
    fn get(&self, name: &str) -> Result<Arc<dyn Engine>, FibError>;

    /// Canonical engine names.
    fn available(&self) -> Vec<&str>;
}

/// Factory that builds each engine on first use and keeps it.
pub struct DefaultFactory {
    cache: RwLock<HashMap<&'static str, Arc<dyn Engine>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_engine(canonical: &'static str) -> Arc<dyn Engine> {
        match canonical {
            "fast" => Arc::new(FastDoublingEngine::new()),
            _ => Arc::new(SequenceTableEngine::new()),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Engine>, FibError> {
        let canonical = canonical_name(name)
            .ok_or_else(|| FibError::Config(format!("unknown engine: {name}")))?;
        if let Some(engine) = self.cache.read().get(canonical) {
            return Ok(Arc::clone(engine));
        }

        // Two racing callers may both miss; the first insert wins.
        let mut cache = self.cache.write();
        let engine = cache
            .entry(canonical)
            .or_insert_with(|| Self::create_engine(canonical));
        Ok(Arc::clone(engine))
    }

    fn available(&self) -> Vec<&str> {
        ENGINE_NAMES.to_vec()
    }
}
