use crate::model::{Description, Endpoint};

/// The uniform shape every list entry is normalized into before rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimedActivity<'a> {
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
    pub period_from: Endpoint,
    pub period_to: Endpoint,
    pub location: Option<&'a str>,
    pub link: Option<&'a str>,
    pub link_text: Option<&'a str>,
    pub description: Option<&'a Description>,
}

impl TimedActivity<'_> {
    /// Whether either end of the period carries an actual date.
    pub fn has_period(&self) -> bool {
        self.period_from.date().is_some() || self.period_to.date().is_some()
    }
}
