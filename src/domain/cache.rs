use std::collections::BTreeSet;

use serde::Serialize;

/// Instructions for the host cache layer: how to key the rendered grid,
/// which contexts it varies by, and how long it stays fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheDirective {
    pub key_parts: Vec<String>,
    pub vary_contexts: BTreeSet<String>,
    pub max_age_seconds: u64,
}
