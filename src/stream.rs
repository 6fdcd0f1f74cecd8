//! Group-code stream emission
//!
//! A DXF ASCII stream is a flat sequence of group-code/value pairs, each
//! written as two physical lines: the code, then the value. The stream is
//! total: there is no closed code registry, so any pair is accepted
//! verbatim and no operation can fail.

use crate::types::{Handle, Vector3};
use std::fmt;

/// A single group-code value.
///
/// Reals are rendered with an invariant `.` decimal separator and no
/// grouping, regardless of host locale; the format is consumed by software
/// expecting a fixed textual grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupCodeValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl GroupCodeValue {
    /// Render the value exactly as it appears on its output line.
    pub fn render(&self) -> String {
        match self {
            GroupCodeValue::Text(s) => s.clone(),
            GroupCodeValue::Integer(i) => i.to_string(),
            GroupCodeValue::Real(r) => format_real(*r),
        }
    }
}

impl fmt::Display for GroupCodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for GroupCodeValue {
    fn from(s: &str) -> Self {
        GroupCodeValue::Text(s.to_string())
    }
}

impl From<String> for GroupCodeValue {
    fn from(s: String) -> Self {
        GroupCodeValue::Text(s)
    }
}

impl From<i64> for GroupCodeValue {
    fn from(i: i64) -> Self {
        GroupCodeValue::Integer(i)
    }
}

impl From<i32> for GroupCodeValue {
    fn from(i: i32) -> Self {
        GroupCodeValue::Integer(i as i64)
    }
}

impl From<f64> for GroupCodeValue {
    fn from(r: f64) -> Self {
        GroupCodeValue::Real(r)
    }
}

impl From<Handle> for GroupCodeValue {
    fn from(h: Handle) -> Self {
        GroupCodeValue::Text(h.to_hex())
    }
}

/// Render a real with sufficient precision, trimming trailing zeros but
/// always keeping at least one decimal place.
fn format_real(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == value.trunc() && value.abs() < 1e16 {
        return format!("{:.1}", value);
    }
    let formatted = format!("{:.15}", value);
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Accumulates group-code pairs into the final ASCII text.
#[derive(Debug, Clone, Default)]
pub struct GroupCodeStream {
    buf: String,
}

impl GroupCodeStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        GroupCodeStream { buf: String::new() }
    }

    /// Append one code/value pair as two lines.
    pub fn add(&mut self, code: i32, value: impl Into<GroupCodeValue>) -> &mut Self {
        self.buf.push_str(&code.to_string());
        self.buf.push('\n');
        self.buf.push_str(&value.into().render());
        self.buf.push('\n');
        self
    }

    /// Append a 3D point as three pairs with the Y/Z codes offset by
    /// +10/+20 from the X code (10/20/30 convention).
    pub fn add_point(&mut self, x_code: i32, point: Vector3) -> &mut Self {
        self.add(x_code, point.x);
        self.add(x_code + 10, point.y);
        self.add(x_code + 20, point.z)
    }

    /// Append a 2D point as two pairs (X and Y codes only).
    pub fn add_point_2d(&mut self, x_code: i32, x: f64, y: f64) -> &mut Self {
        self.add(x_code, x);
        self.add(x_code + 10, y)
    }

    /// Splice a pre-rendered sub-document verbatim, without re-validating
    /// it. Used when one assembler embeds another's output.
    pub fn append(&mut self, raw: &str) -> &mut Self {
        self.buf.push_str(raw);
        self
    }

    /// Whether anything has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the stream and return the accumulated text.
    pub fn build(self) -> String {
        self.buf
    }

    /// The accumulated text without consuming the stream.
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl fmt::Display for GroupCodeStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
