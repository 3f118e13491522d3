//! Pipeline state shapes for the predefined Cypher step.
//!
//! The orchestrator threads state between steps as JSON-shaped values, so
//! every type here round-trips through serde and tolerates absent fields on
//! input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{EXECUTE_PREDEFINED_CYPHER_STEP, NO_CYPHER_RESULTS};
use crate::error::Result;
use crate::graph::Record;

/// Structured bag naming the registry key and the values to bind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Registry lookup key for the predefined statement.
    #[serde(default)]
    pub query: String,

    /// Parameter name to value mapping bound into the statement.
    #[serde(default)]
    pub parameters: HashMap<String, Value>,
}

/// One request handled by the predefined Cypher step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CypherRequest {
    /// Free-text description of the originating task, echoed unchanged.
    #[serde(default)]
    pub task: String,

    /// Name the caller used for the query. Diagnostics report this name;
    /// the registry lookup uses `query_parameters.query`.
    #[serde(default)]
    pub query_name: String,

    /// Lookup key and execution parameters.
    #[serde(default)]
    pub query_parameters: QueryParameters,
}

impl CypherRequest {
    /// Build a request from a JSON-shaped pipeline state value.
    pub fn from_state_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Envelope produced for every handled request.
///
/// `errors` is non-empty exactly when `statement` is empty; the two
/// constructors keep that pairing structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CypherOutcome {
    /// Echoed task description.
    pub task: String,

    /// Resolved statement text, empty when the lookup missed.
    pub statement: String,

    /// The original parameter bag from the request, before coercion.
    pub parameters: QueryParameters,

    /// Diagnostics; exactly one entry on a failed lookup, empty otherwise.
    pub errors: Vec<String>,

    /// Database rows, or the no-results sentinel.
    pub records: Vec<Record>,

    /// Pipeline steps that contributed to this outcome.
    pub steps: Vec<String>,
}

impl CypherOutcome {
    /// Outcome for a resolved statement. An empty result set collapses to
    /// the no-results sentinel so `records` is never empty-ambiguous.
    pub fn resolved(
        task: String,
        statement: String,
        parameters: QueryParameters,
        records: Vec<Record>,
    ) -> Self {
        let records = if records.is_empty() {
            NO_CYPHER_RESULTS.clone()
        } else {
            records
        };

        Self {
            task,
            statement,
            parameters,
            errors: Vec::new(),
            records,
            steps: vec![EXECUTE_PREDEFINED_CYPHER_STEP.to_string()],
        }
    }

    /// Outcome for a lookup miss: empty statement, one diagnostic, sentinel
    /// records, no execution.
    pub fn missing_statement(task: String, parameters: QueryParameters, error: String) -> Self {
        Self {
            task,
            statement: String::new(),
            parameters,
            errors: vec![error],
            records: NO_CYPHER_RESULTS.clone(),
            steps: vec![EXECUTE_PREDEFINED_CYPHER_STEP.to_string()],
        }
    }

    /// Whether `records` carries the no-results sentinel.
    pub fn is_no_results(&self) -> bool {
        self.records == *NO_CYPHER_RESULTS
    }
}

/// Partial state update consumed by the orchestrator's merge: a strict
/// superset match to the `cyphers` and `steps` fields of the shared
/// pipeline state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineUpdate {
    /// Outcomes contributed by this step.
    pub cyphers: Vec<CypherOutcome>,

    /// Step markers contributed by this step.
    pub steps: Vec<String>,
}

impl PipelineUpdate {
    /// Single-outcome update, the shape the dispatch step emits.
    pub fn from_outcome(outcome: CypherOutcome) -> Self {
        Self {
            steps: outcome.steps.clone(),
            cyphers: vec![outcome],
        }
    }

    /// Append another update in order; the orchestrator's reducer for both
    /// fields.
    pub fn extend(&mut self, other: PipelineUpdate) {
        self.cyphers.extend(other.cyphers);
        self.steps.extend(other.steps);
    }

    /// Render as a JSON value for threading through JSON-shaped state.
    pub fn to_state_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
