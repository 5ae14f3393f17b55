use std::borrow::Cow;
use std::fmt::Display;

/// Error type for model construction. This is used to indicate something wrong
/// with the inputs or with how the model-building API was called. Infeasible
/// models and exhausted searches are not errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(Cow<'static, str>);

impl Error {
    pub const fn new_const(s: &'static str) -> Self {
        Error(Cow::Borrowed(s))
    }

    pub fn new<S: Into<String>>(s: S) -> Self {
        Error(Cow::Owned(s.into()))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Error {}
