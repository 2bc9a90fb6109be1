//! Typed Ids

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Storefront product identifier.
///
/// Serialized as a bare JSON integer so persisted carts and catalog records
/// share one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.into_inner()
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn serializes_as_bare_integer() -> TestResult {
        assert_eq!(serde_json::to_string(&ProductId::new(7))?, "7");
        assert_eq!(serde_json::from_str::<ProductId>("7")?, ProductId::new(7));

        Ok(())
    }

    #[test]
    fn parses_from_command_line_text() -> TestResult {
        assert_eq!("42".parse::<ProductId>()?, ProductId::new(42));
        assert!("-1".parse::<ProductId>().is_err(), "negative ids are rejected");

        Ok(())
    }
}
