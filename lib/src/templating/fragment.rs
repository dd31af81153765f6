use std::fmt;
use std::sync::Arc;

use derive_more::{Deref, From};
use minijinja::value::Value;
use serde::{Serialize, Serializer};

/// A rendered piece of markup, not yet attached to a mount point.
///
/// Fragments are cheap to clone and compose by concatenation: collecting an
/// iterator of fragments yields a single fragment holding all of them in
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, From)]
#[deref(forward)]
pub struct Fragment(Arc<str>);

impl Fragment {
    pub fn empty() -> Self {
        Fragment::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Fragment {
    fn from(value: String) -> Self {
        Fragment(value.into())
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<T: IntoIterator<Item = Fragment>>(iter: T) -> Self {
        let mut iter = iter.into_iter();
        let Some(first) = iter.next() else {
            return Fragment::empty();
        };

        match iter.next() {
            None => first,
            Some(second) => {
                let mut markup = String::from(first.as_str());
                markup.push_str(&second);
                iter.for_each(|f| markup.push_str(&f));
                Fragment::from(markup)
            }
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Serializes as a template-safe string so nested fragments aren't escaped.
impl Serialize for Fragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self.clone()).serialize(serializer)
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        Value::from_safe_string(fragment.as_str().to_string())
    }
}
