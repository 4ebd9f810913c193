//! JSON rendering of reports.
//!
//! Options are passed per call; nothing here is process-wide.

use serde::Serialize;
use serde_json::Value;

/// How a report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Drop fields whose value is null.
    pub omit_nulls: bool,
    /// Indent the output.
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            omit_nulls: false,
            pretty: true,
        }
    }
}

/// Renders a report as JSON text.
pub fn render<T: Serialize>(report: &T, options: OutputOptions) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(report)?;
    if options.omit_nulls {
        strip_nulls(&mut value);
    }
    if options.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

/// Removes null object fields at every depth. Nulls inside arrays are kept.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
