// Start of file: /src/pipeline/tilde_redirect.rs

/*
    * Radio button redirect.
    *
    * A form field whose value is '<value>~<redirect URL>' asks for a
    * navigation override: the part before the marker is stored in the
    * prototype data under the field's key, and the request is answered
    * with a redirect to the part after it.
*/

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::LOCATION, Method, StatusCode},
    response::Response,
};
use tracing::info;

use crate::pipeline::context::RequestContext;
use crate::pipeline::error::PipelineResult;
use crate::pipeline::{Outcome, RequestHandler};

/// The delimiter separating a kept value from its redirect target.
pub const REDIRECT_MARKER: char = '~';

/// Splits a submitted value at the marker into (kept value, redirect
/// target). Values without a marker yield `None`; anything after a second
/// marker is discarded.
pub fn split_marker(value: &str) -> Option<(&str, &str)> {
    let mut parts = value.split(REDIRECT_MARKER);

    match (parts.next(), parts.next()) {
        (Some(kept), Some(target)) => Some((kept, target)),
        _ => None,
    }
}

// Express-style 302; axum's Redirect only offers 303/307/308. The target
// goes into Location verbatim, unvalidated.
fn redirect_to(target: &str) -> Result<Response, axum::http::Error> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, target)
        .body(Body::empty())
}

pub struct TildeRedirectInterceptor;

#[async_trait]
impl RequestHandler for TildeRedirectInterceptor {
    async fn handle(&self, ctx: &mut RequestContext) -> PipelineResult<Outcome> {
        if ctx.method != Method::POST {
            return Ok(Outcome::Continue);
        }

        // Submitted body fields win; an empty body falls back to the query.
        let fields: &[(String, String)] = if ctx.form_fields.is_empty() {
            &ctx.query_fields
        } else {
            &ctx.form_fields
        };

        for (key, value) in fields {
            if let Some((kept, target)) = split_marker(value) {
                ctx.session.insert(key, kept).await?;
                info!("Found '{REDIRECT_MARKER}': redirecting to {target}");

                return Ok(Outcome::Done(redirect_to(target)?));
            }
        }

        Ok(Outcome::Continue)
    }
}

// End of file: /src/pipeline/tilde_redirect.rs
