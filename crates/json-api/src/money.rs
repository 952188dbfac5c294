//! Money

use rusty_money::{Money, iso::Currency};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// An amount of money in the currency's minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MoneyResponse {
    /// ISO 4217 currency code
    pub currency: String,

    /// Amount in minor units, e.g. cents
    pub minor_units: i64,
}

impl From<&Money<'static, Currency>> for MoneyResponse {
    fn from(money: &Money<'static, Currency>) -> Self {
        Self {
            currency: money.currency().iso_alpha_code.to_string(),
            minor_units: money.to_minor_units(),
        }
    }
}
