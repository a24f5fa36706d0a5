//! Primary-or-fallback result policy.

/// Where a pipeline value came from.
///
/// Stages that talk to the provider never fail outward. They return the
/// provider's answer, or a locally computed substitute along with the
/// reason the provider could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    Provider(T),
    Fallback { value: T, reason: String },
}

impl<T> Sourced<T> {
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Sourced::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            Sourced::Provider(value) | Sourced::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Sourced::Provider(value) | Sourced::Fallback { value, .. } => value,
        }
    }
}
