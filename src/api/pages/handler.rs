// Start of file: /src/api/pages/handler.rs

/*
    * Stand-in page renderer. A real prototype page goes through the
    * template engine; this handler serializes the same render context
    * (plus the prototype data) so what a page would see is visible
    * over plain HTTP.
*/

use axum::{Extension, Json};
use serde_json::{json, Map, Value};
use tower_sessions::Session;

use crate::dates::{DateDiffSpec, DateFormatSpec};
use crate::pipeline::context::{RenderContext, SessionData};
use crate::pipeline::error::PipelineResult;

#[tracing::instrument(skip_all)]
pub async fn render_page(
    Extension(context): Extension<RenderContext>,
    session: Session,
) -> PipelineResult<Json<Value>> {
    let data: Map<String, Value> = SessionData::new(session).snapshot().await?;

    // What {{ date() }} would print with no arguments.
    let date: Option<String> = context
        .formatter(RenderContext::DATE)
        .map(|formatter| formatter.format(&DateFormatSpec::default(), &DateDiffSpec::default()));

    Ok(Json(json!({
        "date": date,
        "today": context.date_parts(RenderContext::TODAY),
        "yesterday": context.date_parts(RenderContext::YESTERDAY),
        "data": data,
    })))
}

// End of file: /src/api/pages/handler.rs
