//! Constants shared across the predefined Cypher pipeline step.

use lazy_static::lazy_static;
use serde_json::json;

use crate::graph::Record;

/// Marker recorded in `steps` by the predefined Cypher execution step.
pub const EXECUTE_PREDEFINED_CYPHER_STEP: &str = "execute_predefined_cypher";

/// Text carried by the no-results sentinel record.
pub const NO_RESULTS_TEXT: &str = "no records were returned";

lazy_static! {
    /// Sentinel result set substituted whenever a query yields no records
    /// or was never executed.
    pub static ref NO_CYPHER_RESULTS: Vec<Record> = vec![json!({ "records": NO_RESULTS_TEXT })];
}
