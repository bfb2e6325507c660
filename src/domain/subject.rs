use std::fmt;

/// Opaque identifier of an authenticated principal.
///
/// No structure is assumed beyond equality; whatever the user store hands
/// out (an email, a database id) is carried through the token lifecycle
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject(String);

impl Subject {
    pub fn new(id: impl Into<String>) -> Self {
        Subject(id.into())
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
