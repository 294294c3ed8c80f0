//! Value objects for the order domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of an order number in characters.
pub const ORDER_NUMBER_LEN: usize = 8;

/// Eight-character upper-case alphanumeric order number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generates a fresh number from a random UUID.
    ///
    /// Numbers are not globally unique; a draw equal to `previous` is
    /// discarded so consecutive orders never share a number.
    pub fn generate(previous: Option<&OrderNumber>) -> Self {
        loop {
            let candidate = Self::random();
            if previous != Some(&candidate) {
                return candidate;
            }
        }
    }

    fn random() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(
            simple
                .chars()
                .take(ORDER_NUMBER_LEN)
                .collect::<String>()
                .to_ascii_uppercase(),
        )
    }

    /// Returns the order number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
