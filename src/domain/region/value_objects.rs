use crate::domain::constraints::{MAX_TEXT_LENGTH, exact_length, max_length, positive_id};
use crate::domain::errors::DomainResult;
use std::fmt;

pub const REGION_CODE_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(i64);

impl RegionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        positive_id(id).map(Self)
    }
}

impl From<RegionId> for i64 {
    fn from(value: RegionId) -> Self {
        value.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two-character region code such as `US` or `AU`. Case is kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        exact_length(&value, REGION_CODE_LENGTH)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RegionName(String);

impl RegionName {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_code_is_exactly_two_chars() {
        assert!(RegionCode::new("US").is_ok());
        assert!(RegionCode::new("").is_err());
        assert!(RegionCode::new("USA").is_err());
        assert_eq!(
            RegionCode::new("U").unwrap_err().message(),
            "Length must be 2."
        );
    }

    #[test]
    fn region_name_defaults_to_empty() {
        assert_eq!(RegionName::default().as_str(), "");
        assert!(RegionName::new("x".repeat(256)).is_err());
    }
}
