//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The happy path runs `AwaitingConfirmation -> Processing -> Shipping ->
/// Completed`; `Cancelled` and `Returned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    AwaitingConfirmation,
    Processing,
    Shipping,
    Completed,
    Cancelled,
    Returned,
}

impl OrderStatus {
    /// Stages shown in the order progress tracker.
    pub const TRACKED_STAGES: [Self; 4] = [
        Self::AwaitingConfirmation,
        Self::Processing,
        Self::Shipping,
        Self::Completed,
    ];

    /// Whether a customer may still cancel an order in this status.
    #[must_use]
    pub const fn can_be_cancelled(&self) -> bool {
        matches!(self, Self::AwaitingConfirmation | Self::Processing)
    }

    /// Whether the order left the tracked pipeline for good.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Returned)
    }

    /// Position in the progress tracker, `None` for final states.
    #[must_use]
    pub fn stage_index(&self) -> Option<usize> {
        Self::TRACKED_STAGES.iter().position(|stage| stage == self)
    }

    /// Customer-facing label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AwaitingConfirmation => "Chờ xác nhận",
            Self::Processing => "Đang xử lý",
            Self::Shipping => "Đang giao hàng",
            Self::Completed => "Hoàn thành",
            Self::Cancelled => "Đã Hủy",
            Self::Returned => "Trả hàng",
        }
    }
}

/// Order payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

impl PaymentStatus {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unpaid => "Chưa thanh toán",
            Self::Paid => "Đã thanh toán",
        }
    }
}

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cod,
    /// Card payment, settled at checkout.
    Card,
}

impl PaymentMethod {
    /// Payment status an order starts with for this method.
    #[must_use]
    pub const fn initial_status(&self) -> PaymentStatus {
        match self {
            Self::Cod => PaymentStatus::Unpaid,
            Self::Card => PaymentStatus::Paid,
        }
    }
}

/// Role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Shopper with access to checkout and order history.
    #[default]
    Customer,
    /// Back-office access to products, brands, articles and orders.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Storefront colour theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Default,
    Light,
    Black,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellable_statuses() {
        assert!(OrderStatus::AwaitingConfirmation.can_be_cancelled());
        assert!(OrderStatus::Processing.can_be_cancelled());
        assert!(!OrderStatus::Shipping.can_be_cancelled());
        assert!(!OrderStatus::Cancelled.can_be_cancelled());
    }

    #[test]
    fn test_stage_index() {
        assert_eq!(OrderStatus::Shipping.stage_index(), Some(2));
        assert_eq!(OrderStatus::Returned.stage_index(), None);
        assert!(OrderStatus::Returned.is_final());
    }

    #[test]
    fn test_payment_initial_status() {
        assert_eq!(PaymentMethod::Card.initial_status(), PaymentStatus::Paid);
        assert_eq!(PaymentMethod::Cod.initial_status(), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_role_roundtrip() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(Role::Customer.to_string(), "customer");
        assert!("root".parse::<Role>().is_err());
    }
}
