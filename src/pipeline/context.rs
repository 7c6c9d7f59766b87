// Start of file: /src/pipeline/context.rs

/*
    * Explicit per-request context objects. Handlers receive everything they
    * touch through these instead of reaching for ambient globals: the
    * request line, the submitted fields, the render context under
    * construction, a scoped view of the session data, and the environment.
*/

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::Method;
use serde_json::{Map, Value};
use tower_sessions::{session::Error as SessionError, Session};

use crate::config::environment::EnvironmentVariables;
use crate::dates::{DateFormatter, DateParts};

/// A value contributed to the page's template environment.
#[derive(Clone, Debug)]
pub enum ContextValue {
    /// A callable date formatter.
    Formatter(DateFormatter),
    /// Pre-formatted day/month/year strings.
    Date(DateParts),
}

/// The key-value environment a rendered page sees.
///
/// Carried through request extensions to whatever renders the page after
/// routing. The pipeline contributes the `date`, `today` and `yesterday`
/// entries on every request.
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    values: HashMap<String, ContextValue>,
}

impl RenderContext {
    pub const DATE: &'static str = "date";
    pub const TODAY: &'static str = "today";
    pub const YESTERDAY: &'static str = "yesterday";

    pub fn insert(&mut self, key: impl Into<String>, value: ContextValue) {
        self.values.insert(key.into(), value);
    }

    pub fn formatter(&self, key: &str) -> Option<&DateFormatter> {
        match self.values.get(key) {
            Some(ContextValue::Formatter(formatter)) => Some(formatter),
            _ => None,
        }
    }

    pub fn date_parts(&self, key: &str) -> Option<&DateParts> {
        match self.values.get(key) {
            Some(ContextValue::Date(parts)) => Some(parts),
            _ => None,
        }
    }
}

const DATA_KEY: &str = "data";

/// Scoped read/write view over the session's prototype data map.
///
/// The session itself (cookie, store, lifecycle) belongs to the session
/// layer; this view only snapshots the map and writes individual keys.
#[derive(Clone, Debug)]
pub struct SessionData {
    session: Session,
}

impl SessionData {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The full current contents of the prototype data map.
    pub async fn snapshot(&self) -> Result<Map<String, Value>, SessionError> {
        Ok(self
            .session
            .get::<Map<String, Value>>(DATA_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Writes one key, overwriting any prior value.
    pub async fn insert(&self, key: &str, value: impl Into<Value>) -> Result<(), SessionError> {
        let mut data: Map<String, Value> = self.snapshot().await?;
        data.insert(key.to_string(), value.into());

        self.session.insert(DATA_KEY, data).await
    }
}

/// Everything a pipeline stage may consult or mutate for one request.
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    /// Fields decoded from a form-encoded body, in submission order.
    pub form_fields: Vec<(String, String)>,
    /// Fields decoded from the query string, in order of appearance.
    pub query_fields: Vec<(String, String)>,
    pub render: RenderContext,
    pub session: SessionData,
    pub environment: Arc<EnvironmentVariables>,
}

// End of file: /src/pipeline/context.rs
