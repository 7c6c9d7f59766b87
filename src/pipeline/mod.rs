// Start of file: /src/pipeline/mod.rs

/*
    * The request pipeline: an ordered chain of handlers, each of which
    * either lets the request continue or terminates it with a response.
    * The chain is mounted as a single axum middleware ahead of routing.
*/

pub mod context;
pub mod date_context;
pub mod dev_logger;
pub mod error;
pub mod tilde_redirect;

pub use context::{RenderContext, RequestContext, SessionData};
pub use date_context::DateContextInjector;
pub use dev_logger::DevRequestLogger;
pub use error::{PipelineError, PipelineResult};
pub use tilde_redirect::TildeRedirectInterceptor;

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header::CONTENT_TYPE, request::Parts},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use tower_sessions::Session;

use crate::config::state::AppState;

/// What a pipeline stage decided about the current request.
pub enum Outcome {
    /// Hand the request to the next stage, or to routing after the last one.
    Continue,
    /// The stage produced the response; later stages and routing never run.
    Done(Response),
}

/// One stage of the request pipeline.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, ctx: &mut RequestContext) -> PipelineResult<Outcome>;
}

/// The ordered sequence of stages every request passes through.
pub struct Pipeline {
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl Pipeline {
    /// Date helpers first, then the tilde redirect, then the dev logger.
    /// The order is fixed: a redirect must win before anything is logged.
    pub fn standard() -> Self {
        Self {
            handlers: vec![
                Box::new(DateContextInjector),
                Box::new(TildeRedirectInterceptor),
                Box::new(DevRequestLogger),
            ],
        }
    }

    /// Runs each stage in order, stopping at the first terminal outcome.
    pub async fn run(&self, ctx: &mut RequestContext) -> PipelineResult<Outcome> {
        for handler in &self.handlers {
            if let Outcome::Done(response) = handler.handle(ctx).await? {
                return Ok(Outcome::Done(response));
            }
        }

        Ok(Outcome::Continue)
    }
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn is_form_submission(parts: &Parts) -> bool {
    parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}

fn decode_fields(raw: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(raw).into_owned().collect()
}

/// Axum adapter for the pipeline.
///
/// Buffers the request body so submitted fields can be inspected, builds the
/// explicit per-request context, and drives the chain. A terminal outcome is
/// returned as-is; otherwise the request is reassembled, the render context
/// is attached for the page renderer, and routing proceeds.
pub async fn pipeline_middleware(
    State(state): State<AppState>,
    session: Session,
    req: Request,
    next: Next,
) -> Result<Response, PipelineError> {
    let (parts, body) = req.into_parts();
    let bytes: Bytes = body.collect().await?.to_bytes();

    let form_fields: Vec<(String, String)> = if is_form_submission(&parts) {
        decode_fields(&bytes)
    } else {
        Vec::new()
    };
    let query_fields: Vec<(String, String)> =
        decode_fields(parts.uri.query().unwrap_or_default().as_bytes());

    let mut ctx: RequestContext = RequestContext {
        method: parts.method.clone(),
        path: parts.uri.path().to_string(),
        form_fields,
        query_fields,
        render: RenderContext::default(),
        session: SessionData::new(session),
        environment: state.environment.clone(),
    };

    match Pipeline::standard().run(&mut ctx).await? {
        Outcome::Done(response) => Ok(response),
        Outcome::Continue => {
            let render: RenderContext = ctx.render;

            let mut req: Request = Request::from_parts(parts, Body::from(bytes));
            req.extensions_mut().insert(render);

            Ok(next.run(req).await)
        }
    }
}

// End of file: /src/pipeline/mod.rs
