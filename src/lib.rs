pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use errors::AnalyzerError;
pub use models::{AnalysisPayload, AnalysisResult, AppState, ContentDetails, ContentType};
pub use routes::routes;
