//! The CV data model.
//!
//! Records deserialize leniently: unknown keys are ignored, optional fields
//! may be missing and display text may be given as any scalar. The only
//! required fields are the ones whose absence would make a record meaningless
//! to render, namely `period` on work and education records.

mod document;
mod section;
mod record;
mod period;
mod activity;

pub use document::*;
pub use section::*;
pub use record::*;
pub use period::*;
pub use activity::*;

pub(crate) mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use crate::model::Period;
    use crate::util::{scalar_text, truthy};

    /// Deserializes any value as a boolean by truthiness.
    pub fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
        Ok(truthy(&Value::deserialize(de)?))
    }

    /// Deserializes an optional string or number as text.
    pub fn scalar<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(de)?;
        Ok(value.filter(|v| !v.is_null()).map(|v| scalar_text(&v)))
    }

    /// Like [`scalar`], with missing values read as empty text.
    pub fn text<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
        Ok(scalar(de)?.unwrap_or_default())
    }

    /// Deserializes an optional period. A falsy value is no period at all; any
    /// other non-sequence is a period with both ends absent.
    pub fn optional_period<'de, D>(de: D) -> Result<Option<Period>, D::Error>
        where D: Deserializer<'de>
    {
        Ok(match Option::<Value>::deserialize(de)? {
            Some(Value::Array(values)) => Some(Period::from_values(&values)),
            Some(value) if truthy(&value) => Some(Period::default()),
            _ => None,
        })
    }
}
