//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace events.

use std::fmt::Display;

use super::record::TraceEvent;

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace events.
pub trait TraceFormatter<K> {
    /// Formats the event at position `index` (zero-based) of its trace.
    fn format(&self, index: usize, event: &TraceEvent<K>) -> String;

    /// Formats a whole event sequence.
    fn format_many(&self, events: &[TraceEvent<K>]) -> String {
        events
            .iter()
            .enumerate()
            .map(|(i, e)| self.format(i, e))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace events in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to prefix each line with its one-based step number.
    pub show_step_numbers: bool,
    /// Whether to include the event type tag.
    pub show_types: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show step numbers.
    #[must_use]
    pub fn with_step_numbers(mut self) -> Self {
        self.show_step_numbers = true;
        self
    }

    /// Builder method to show event type tags.
    #[must_use]
    pub fn with_types(mut self) -> Self {
        self.show_types = true;
        self
    }
}

impl<K: Display> TraceFormatter<K> for HumanFormatter {
    fn format(&self, index: usize, event: &TraceEvent<K>) -> String {
        use std::fmt::Write;
        let mut line = String::new();

        if self.show_step_numbers {
            let _ = write!(line, "[{:03}] ", index + 1);
        }

        if self.show_types {
            let _ = write!(line, "{:<9} ", event.event_type());
        }

        let _ = write!(line, "{event}");
        line
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace events as JSON objects.
///
/// Field names follow the event vocabulary: `type`, `value`, `node`,
/// `direction`, `from`, `to`, `rotation`, and `message`.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print arrays.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Formats a key as a JSON number when it reads as one, otherwise as a string.
    fn format_key<K: Display>(key: &K) -> String {
        let text = key.to_string();
        if is_json_number(&text) {
            text
        } else {
            format!("\"{}\"", Self::escape_string(&text))
        }
    }
}

/// Returns true if `text` is a number under the JSON grammar:
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
fn is_json_number(text: &str) -> bool {
    fn digits(bytes: &[u8], mut i: usize) -> usize {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    }

    let bytes = text.as_bytes();
    let mut i = usize::from(bytes.first() == Some(&b'-'));

    // Integer part: a lone zero or a non-zero-led run.
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits(bytes, i + 1),
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        let end = digits(bytes, i + 1);
        if end == i + 1 {
            return false;
        }
        i = end;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let end = digits(bytes, i);
        if end == i {
            return false;
        }
        i = end;
    }

    i == bytes.len()
}

impl<K: Display> TraceFormatter<K> for JsonFormatter {
    fn format(&self, _index: usize, event: &TraceEvent<K>) -> String {
        let event_data = match event {
            TraceEvent::Insert { key }
            | TraceEvent::Duplicate { key }
            | TraceEvent::Delete { key }
            | TraceEvent::NotFound { key } => {
                format!("\"value\":{}", Self::format_key(key))
            }
            TraceEvent::Traverse { key, at, direction } => format!(
                "\"value\":{},\"node\":{},\"direction\":\"{direction}\"",
                Self::format_key(key),
                Self::format_key(at)
            ),
            TraceEvent::Replace { from, to } => format!(
                "\"from\":{},\"to\":{}",
                Self::format_key(from),
                Self::format_key(to)
            ),
            TraceEvent::Rotation { kind, at } => {
                format!("\"rotation\":\"{kind}\",\"node\":{}", Self::format_key(at))
            }
        };

        format!(
            "{{\"type\":\"{}\",{event_data},\"message\":\"{}\"}}",
            event.event_type(),
            Self::escape_string(&event.message())
        )
    }

    fn format_many(&self, events: &[TraceEvent<K>]) -> String {
        let items: Vec<_> = events
            .iter()
            .enumerate()
            .map(|(i, e)| self.format(i, e))
            .collect();

        if self.pretty {
            if items.is_empty() {
                return "[]".to_string();
            }
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
