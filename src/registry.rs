//! Predefined Cypher Registry
//!
//! Immutable mapping from query name to parameterized Cypher statement,
//! supplied once at construction and read-only for the life of the pipeline.

use std::collections::HashMap;

/// A registered Cypher statement and its optional selection description.
#[derive(Debug, Clone)]
pub struct PredefinedQuery {
    /// Parameterized Cypher text, stored verbatim.
    pub statement: String,

    /// What the query answers. Rendered for upstream steps that choose
    /// which predefined query fits a task; never consulted during lookup.
    pub description: Option<String>,
}

/// Immutable name-to-statement registry.
#[derive(Debug, Clone)]
pub struct CypherRegistry {
    queries: HashMap<String, PredefinedQuery>,
}

impl CypherRegistry {
    pub fn new() -> Self {
        Self {
            queries: HashMap::new(),
        }
    }

    /// Build from a plain name-to-statement mapping.
    pub fn from_statements(statements: HashMap<String, String>) -> Self {
        let queries = statements
            .into_iter()
            .map(|(name, statement)| {
                (
                    name,
                    PredefinedQuery {
                        statement,
                        description: None,
                    },
                )
            })
            .collect();

        Self { queries }
    }

    /// Register a statement (construction time only).
    pub fn with_query(mut self, name: &str, statement: &str) -> Self {
        self.queries.insert(
            name.to_string(),
            PredefinedQuery {
                statement: statement.to_string(),
                description: None,
            },
        );
        self
    }

    /// Register a statement together with its selection description.
    pub fn with_described_query(mut self, name: &str, statement: &str, description: &str) -> Self {
        self.queries.insert(
            name.to_string(),
            PredefinedQuery {
                statement: statement.to_string(),
                description: Some(description.to_string()),
            },
        );
        self
    }

    /// Statement text registered under `name`. Absence is a normal outcome
    /// signaled through the `Option`, not an error.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.queries.get(name).map(|query| query.statement.as_str())
    }

    /// Full entry registered under `name`.
    pub fn get(&self, name: &str) -> Option<&PredefinedQuery> {
        self.queries.get(name)
    }

    /// Registered query names, sorted for stable output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.queries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Render a name-sorted listing of the registered queries and their
    /// descriptions, one per line.
    pub fn describe_queries(&self) -> String {
        let mut entries: Vec<(&String, &PredefinedQuery)> = self.queries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .iter()
            .map(|(name, query)| match &query.description {
                Some(description) => format!("- {}: {}", name, description),
                None => format!("- {}", name),
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl Default for CypherRegistry {
    fn default() -> Self {
        Self::new()
    }
}
