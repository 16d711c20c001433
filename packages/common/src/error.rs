use thiserror::Error;

/// Error when parsing a value outside one of the closed vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} '{invalid}'. Valid values: {expected}")]
pub struct ParseValueError {
    kind: &'static str,
    invalid: String,
    expected: String,
}

impl ParseValueError {
    pub(crate) fn new<'a>(
        kind: &'static str,
        invalid: &str,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            kind,
            invalid: invalid.to_string(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Name of the vocabulary that rejected the value (`grade`, `division`, `status`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}
