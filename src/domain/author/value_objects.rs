use crate::domain::constraints::{MAX_TEXT_LENGTH, max_length, positive_id};
use crate::domain::errors::DomainResult;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(i64);

impl AuthorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        positive_id(id).map(Self)
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First or last name of an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        max_length(&value, MAX_TEXT_LENGTH)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_id_must_be_positive() {
        assert!(AuthorId::new(0).is_err());
        assert!(AuthorId::new(-3).is_err());
        assert_eq!(i64::from(AuthorId::new(3).unwrap()), 3);
    }

    #[test]
    fn person_name_allows_empty_but_not_oversized() {
        assert!(PersonName::new("").is_ok());
        assert!(PersonName::new("a".repeat(255)).is_ok());
        assert!(PersonName::new("a".repeat(256)).is_err());
    }
}
