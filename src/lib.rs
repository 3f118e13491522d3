pub mod bindings;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod graph;
pub mod registry;
pub mod state;
