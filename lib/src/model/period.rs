use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::util::{scalar_text, truthy};

/// One end of a [`Period`].
///
/// An absent endpoint renders no date span at all. A blank one is present but
/// falsy: it renders a span flagged empty that still shows its text, so `0`
/// shows as `0` and `null` or `""` as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Endpoint {
    #[default]
    Absent,
    Blank(String),
    Date(String),
}

impl Endpoint {
    fn from_value(value: &Value) -> Endpoint {
        match truthy(value) {
            true => Endpoint::Date(scalar_text(value)),
            false => Endpoint::Blank(scalar_text(value)),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Endpoint::Absent)
    }

    /// The date text, if any. `None` for both absent and blank endpoints.
    pub fn date(&self) -> Option<&str> {
        match self {
            Endpoint::Date(date) => Some(date),
            Endpoint::Absent | Endpoint::Blank(_) => None,
        }
    }
}

/// A `[from, to]` pair, either end of which may be absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Period {
    pub from: Endpoint,
    pub to: Endpoint,
}

impl Period {
    /// The period described by the first two of `values`. Missing indices are
    /// absent endpoints and extra ones are ignored.
    pub fn from_values(values: &[Value]) -> Period {
        let mut endpoints = values.iter().map(Endpoint::from_value);
        Period {
            from: endpoints.next().unwrap_or_default(),
            to: endpoints.next().unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        Ok(Period::from_values(&Vec::<Value>::deserialize(de)?))
    }
}
