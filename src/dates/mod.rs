// Start of file: /src/dates/mod.rs

/*
    * Date helpers exposed to page templates: the format/diff specs,
    * the per-request formatter, and the pre-formatted today/yesterday parts.
*/

pub mod formatter;
pub mod spec;

pub use formatter::DateFormatter;
pub use spec::{DateDiffSpec, DateFormatSpec, DateParts, MonthStyle, NumberStyle, TextStyle};

// End of file: /src/dates/mod.rs
