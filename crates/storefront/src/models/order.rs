//! Order types.

use gymstore_core::{Email, OrderNumber, OrderStatus, PaymentMethod, PaymentStatus, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validation::{ValidationError, required};
use crate::cart::CartLine;

/// Where and to whom an order ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderNumber,
    /// `dd/mm/yyyy`.
    pub date: String,
    pub status: OrderStatus,
    pub total: Decimal,
    pub items: Vec<CartLine>,
    pub customer: CustomerDetails,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Display total in the store currency.
    #[must_use]
    pub fn display_total(&self) -> String {
        Price::vnd(self.total).display()
    }

    /// Whether `email` placed this order.
    #[must_use]
    pub fn belongs_to(&self, email: &Email) -> bool {
        self.customer.email.matches(email)
    }

    /// Cancel on the customer's behalf.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotCancellable`] once the order has shipped or
    /// reached a final state.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if !self.status.can_be_cancelled() {
            return Err(OrderError::NotCancellable {
                id: self.id.clone(),
                status: self.status,
            });
        }
        self.status = OrderStatus::Cancelled;
        Ok(())
    }
}

/// Checkout form: shipping details and payment choice.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Validate the shipping details.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is blank or the email is malformed.
    pub fn customer(&self) -> Result<CustomerDetails, ValidationError> {
        let name = required("name", &self.name)?;
        let email = Email::parse(&required("email", &self.email)?)?;
        Ok(CustomerDetails {
            name,
            email,
            phone: required("phone", &self.phone)?,
            address: required("address", &self.address)?,
        })
    }
}

/// Errors placing or changing orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(OrderNumber),

    #[error("order {id} can no longer be cancelled ({})", .status.label())]
    NotCancellable { id: OrderNumber, status: OrderStatus },

    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    #[error("no order numbers left to assign")]
    NumbersExhausted,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
