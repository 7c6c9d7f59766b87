// Library root for the sketchkit prototyping server

pub mod api;
pub mod config;
pub mod core;
pub mod dates;
pub mod pipeline;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::dates::formatter::DateFormatter;
pub use crate::dates::spec::{DateDiffSpec, DateFormatSpec};
pub use crate::pipeline::context::RenderContext;
