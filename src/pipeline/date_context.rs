// Start of file: /src/pipeline/date_context.rs

/*
    * Stores the date helpers used on HTML pages.
    * This stage runs for all requests.
    *
    * In a template:
    *   {{ date() }} shows today's date in the format 5 May 2022
    *   {{ date({day: numeric, month: numeric, year: numeric}) }} is 05/05/2022
    *   {{ date({day: numeric}, {day: -1}) }} is just yesterday's day
    *   {{ today.day }} / {{ today.month }} / {{ today.year }} pre-populate
    *   date fields, and yesterday.* does the same shifted one day back.
*/

use async_trait::async_trait;

use crate::dates::{DateDiffSpec, DateFormatter, DateParts};
use crate::pipeline::context::{ContextValue, RenderContext, RequestContext};
use crate::pipeline::error::PipelineResult;
use crate::pipeline::{Outcome, RequestHandler};

pub struct DateContextInjector;

#[async_trait]
impl RequestHandler for DateContextInjector {
    async fn handle(&self, ctx: &mut RequestContext) -> PipelineResult<Outcome> {
        // Fresh wall-clock capture on every request.
        let date: DateFormatter = DateFormatter::for_today();

        let today: DateParts = date.parts(&DateDiffSpec::default());
        let yesterday: DateParts = date.parts(&DateDiffSpec::days(-1));

        ctx.render.insert(RenderContext::DATE, ContextValue::Formatter(date));
        ctx.render.insert(RenderContext::TODAY, ContextValue::Date(today));
        ctx.render.insert(RenderContext::YESTERDAY, ContextValue::Date(yesterday));

        Ok(Outcome::Continue)
    }
}

// End of file: /src/pipeline/date_context.rs
