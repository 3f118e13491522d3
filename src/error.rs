use thiserror::Error;

#[derive(Error, Debug)]
pub enum KgRagError {
    #[error("Graph error: {0}")]
    Graph(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KgRagError>;
