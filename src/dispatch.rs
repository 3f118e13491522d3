//! Predefined Cypher Executor
//!
//! Runs one request end-to-end: registry lookup, parameter coercion,
//! execution against the graph facility, envelope assembly. A missing
//! registry entry is an expected outcome recorded in the envelope; a fault
//! raised by the graph facility is not handled here and propagates to the
//! orchestrator.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::bindings::coerce_parameters;
use crate::error::Result;
use crate::graph::GraphStore;
use crate::registry::CypherRegistry;
use crate::state::{CypherOutcome, CypherRequest, PipelineUpdate};

/// Executor for the predefined Cypher pipeline step.
///
/// Stateless across invocations: the registry is read-only and every
/// `dispatch` call allocates its own local state, so one executor can serve
/// concurrent dispatches without synchronization.
pub struct PredefinedCypherExecutor {
    registry: Arc<CypherRegistry>,
    graph: Arc<dyn GraphStore>,
}

impl PredefinedCypherExecutor {
    pub fn new(registry: Arc<CypherRegistry>, graph: Arc<dyn GraphStore>) -> Self {
        Self { registry, graph }
    }

    /// Handle one request and produce its partial state update.
    ///
    /// A lookup miss still returns `Ok`, with the diagnostic recorded in the
    /// outcome's `errors`; only a graph facility fault maps to `Err`.
    pub async fn dispatch(&self, request: &CypherRequest) -> Result<PipelineUpdate> {
        let bag = request.query_parameters.clone();
        let bindings = coerce_parameters(&bag.parameters);

        debug!(
            "Looking up predefined Cypher statement '{}' ({} parameters)",
            bag.query,
            bindings.len()
        );

        let outcome = match self.registry.lookup(&bag.query) {
            Some(statement) => {
                let records = self.graph.execute_query(statement, &bindings).await?;
                info!(
                    "Executed predefined Cypher statement '{}': {} records",
                    bag.query,
                    records.len()
                );
                CypherOutcome::resolved(
                    request.task.clone(),
                    statement.to_string(),
                    bag,
                    records,
                )
            }
            None => {
                warn!(
                    "No predefined Cypher statement registered under '{}'",
                    bag.query
                );
                CypherOutcome::missing_statement(
                    request.task.clone(),
                    bag,
                    format!(
                        "Unable to find the specified Cypher statement: {}",
                        request.query_name
                    ),
                )
            }
        };

        Ok(PipelineUpdate::from_outcome(outcome))
    }
}
