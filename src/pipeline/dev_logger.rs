// Start of file: /src/pipeline/dev_logger.rs

// When in development, print the request line and the data stored in the
// prototype into the terminal. Nothing is emitted in production, so the
// prototype data never reaches the logs of a published instance.

use async_trait::async_trait;
use axum::http::Method;
use serde_json::{Map, Value};
use tracing::info;

use crate::pipeline::context::RequestContext;
use crate::pipeline::error::PipelineResult;
use crate::pipeline::{Outcome, RequestHandler};
use crate::utils::json::to_two_space_indented_json;

pub struct DevRequestLogger;

impl DevRequestLogger {
    /// The two entries a development-mode request produces: the request
    /// line, then the session data serialized as indented JSON.
    pub fn entries(
        method: &Method,
        path: &str,
        data: &Map<String, Value>,
    ) -> serde_json::Result<[String; 2]> {
        Ok([
            format!("{method}: {path}"),
            to_two_space_indented_json(data)?,
        ])
    }
}

#[async_trait]
impl RequestHandler for DevRequestLogger {
    async fn handle(&self, ctx: &mut RequestContext) -> PipelineResult<Outcome> {
        // Read per request, not at startup, so toggling the environment
        // takes effect without a restart.
        if ctx.environment.is_development() {
            let data: Map<String, Value> = ctx.session.snapshot().await?;

            for line in Self::entries(&ctx.method, &ctx.path, &data)? {
                info!("{line}");
            }
        }

        Ok(Outcome::Continue)
    }
}

// End of file: /src/pipeline/dev_logger.rs
