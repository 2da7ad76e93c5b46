//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_i32()`, `next()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use gymstore_core::define_id;
/// define_id!(WidgetId);
/// define_id!(GadgetId);
///
/// let widget_id = WidgetId::new(1);
/// let gadget_id = GadgetId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: WidgetId = gadget_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }

            /// The ID following this one, used when allocating new records.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(BrandId);
define_id!(ArticleId);
define_id!(ReviewId);

/// Errors that can occur when parsing an [`OrderNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderNumberError {
    /// The input does not start with the `GS` prefix.
    #[error("order number must start with {prefix}")]
    MissingPrefix {
        /// Expected prefix.
        prefix: &'static str,
    },
    /// The part after the prefix is not exactly five digits.
    #[error("order number must end with {digits} digits")]
    InvalidDigits {
        /// Expected digit count.
        digits: usize,
    },
}

/// Customer-facing order number, e.g. `GS12345`.
///
/// ```
/// use gymstore_core::OrderNumber;
///
/// let number = OrderNumber::from_digits(12345);
/// assert_eq!(number.as_str(), "GS12345");
/// assert!(OrderNumber::parse("GS1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Prefix shared by every order number.
    pub const PREFIX: &'static str = "GS";
    /// Number of digits following the prefix.
    pub const DIGITS: usize = 5;
    /// Smallest numeric part.
    pub const MIN: u32 = 10_000;
    /// Largest numeric part.
    pub const MAX: u32 = 99_999;

    /// Build an order number from its numeric part.
    ///
    /// Values outside `MIN..=MAX` are clamped into range.
    #[must_use]
    pub fn from_digits(value: u32) -> Self {
        let value = value.clamp(Self::MIN, Self::MAX);
        Self(format!("{}{value}", Self::PREFIX))
    }

    /// Parse an order number such as `GS12345`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is missing or the numeric part is not
    /// exactly five ASCII digits.
    pub fn parse(s: &str) -> Result<Self, OrderNumberError> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or(OrderNumberError::MissingPrefix {
                prefix: Self::PREFIX,
            })?;

        if digits.len() != Self::DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OrderNumberError::InvalidDigits {
                digits: Self::DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = OrderNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrderNumber> for String {
    fn from(number: OrderNumber) -> Self {
        number.0
    }
}

impl std::str::FromStr for OrderNumber {
    type Err = OrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(ProductId::new(15).next(), ProductId::new(16));
    }

    #[test]
    fn test_order_number_parse() {
        assert!(OrderNumber::parse("GS12345").is_ok());
        assert_eq!(
            OrderNumber::parse("AB12345"),
            Err(OrderNumberError::MissingPrefix { prefix: "GS" })
        );
        assert_eq!(
            OrderNumber::parse("GS12a45"),
            Err(OrderNumberError::InvalidDigits { digits: 5 })
        );
    }

    #[test]
    fn test_order_number_clamps() {
        assert_eq!(OrderNumber::from_digits(7).as_str(), "GS10000");
    }

    #[test]
    fn test_order_number_serde_rejects_malformed() {
        let ok: OrderNumber = serde_json::from_str("\"GS54321\"").unwrap();
        assert_eq!(ok.as_str(), "GS54321");
        assert!(serde_json::from_str::<OrderNumber>("\"54321\"").is_err());
    }
}
