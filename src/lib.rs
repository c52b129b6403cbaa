pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod graph;
pub mod http;

pub use config::Config;
pub use error::{LegisgraphError, Result};
pub use graph::{GraphStore, SharedGraph};
