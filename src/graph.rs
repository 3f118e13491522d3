//! Graph Store Trait - Boundary to the graph database facility
//!
//! The driver itself (transport, retries, authentication) lives outside this
//! crate. The pipeline step only needs to run one parameterized Cypher
//! statement and read back opaque records.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;

/// One row returned by the graph database. Record shape is owned by the
/// database schema; this crate inspects nothing beyond emptiness.
pub type Record = serde_json::Value;

/// Graph database query facility.
///
/// Implementations are supplied by the host application. Faults from the
/// connection or the query itself surface as `KgRagError::Graph` and are not
/// retried or recovered by callers inside this crate.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Run a Cypher statement with string-typed parameter bindings and
    /// return the matching records.
    async fn execute_query(
        &self,
        statement: &str,
        params: &HashMap<String, String>,
    ) -> Result<Vec<Record>>;
}
