mod macros;

pub use macros::*;

use serde_json::Value;

/// Returns `true` if `value` would be considered truthy by a browser script:
/// everything but `null`, `false`, `0`, `NaN`, and the empty string.
///
/// ```
/// use serde_json::json;
/// use vitae::util::truthy;
///
/// assert!(truthy(&json!("yes")));
/// assert!(truthy(&json!(1)));
/// assert!(truthy(&json!([])));
/// assert!(!truthy(&json!("")));
/// assert!(!truthy(&json!(0.0)));
/// assert!(!truthy(&json!(null)));
/// ```
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The two-valued presentational marker attached to fragments: `1` when
/// `present`, `0` otherwise.
#[inline(always)]
pub fn int_bool(present: bool) -> u8 {
    present as u8
}

/// `int_bool` for optional text: `1` if `text` is present and nonempty.
#[inline]
pub fn has_text<S: AsRef<str>>(text: Option<S>) -> u8 {
    int_bool(text.map_or(false, |s| !s.as_ref().is_empty()))
}

/// Renders a scalar JSON value the way it would appear when interpolated into
/// markup. Falsy-but-present values other than numbers render as `""`.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
