//! Auction mechanism parameters.

use crate::error::ParamsError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters governing bid acceptance.
///
/// Each increment is the minimum fractional improvement a new bid must make
/// over the standing bid (or lot, in reverse bidding) of its auction variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MechanismParams {
    /// Hard cap on auction lifetime.
    pub max_auction_duration: Duration,

    /// Time an auction stays open after each new bid.
    pub bid_duration: Duration,

    /// Minimum bid increase in surplus auctions.
    pub increment_surplus: Decimal,

    /// Minimum lot decrease in debt auctions.
    pub increment_debt: Decimal,

    /// Minimum improvement in collateral auctions, both phases.
    pub increment_collateral: Decimal,
}

impl MechanismParams {
    /// Default increment for all auction variants (5%).
    pub const DEFAULT_INCREMENT: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

    /// Set every increment fraction at once.
    pub fn with_increments(mut self, surplus: Decimal, debt: Decimal, collateral: Decimal) -> Self {
        self.increment_surplus = surplus;
        self.increment_debt = debt;
        self.increment_collateral = collateral;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("increment_surplus", self.increment_surplus),
            ("increment_debt", self.increment_debt),
            ("increment_collateral", self.increment_collateral),
        ] {
            if value < Decimal::ZERO {
                return Err(ParamsError::NegativeIncrement { name, value });
            }
        }
        if self.max_auction_duration.is_zero() {
            return Err(ParamsError::ZeroDuration {
                name: "max_auction_duration",
            });
        }
        if self.bid_duration.is_zero() {
            return Err(ParamsError::ZeroDuration {
                name: "bid_duration",
            });
        }
        if self.bid_duration > self.max_auction_duration {
            return Err(ParamsError::BidDurationTooLong);
        }
        Ok(())
    }
}

impl Default for MechanismParams {
    fn default() -> Self {
        Self {
            max_auction_duration: Duration::from_secs(24 * 60 * 60),
            bid_duration: Duration::from_secs(60 * 60),
            increment_surplus: Self::DEFAULT_INCREMENT,
            increment_debt: Self::DEFAULT_INCREMENT,
            increment_collateral: Self::DEFAULT_INCREMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_params_are_valid() {
        let params = MechanismParams::default();
        assert_eq!(params.increment_debt, Decimal::from_str("0.05").unwrap());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_negative_increment_rejected() {
        let params = MechanismParams::default().with_increments(
            Decimal::from_str("0.05").unwrap(),
            Decimal::from_str("-0.01").unwrap(),
            Decimal::ZERO,
        );
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NegativeIncrement {
                name: "increment_debt",
                ..
            })
        ));
    }

    #[test]
    fn test_bid_duration_bounded_by_max() {
        let params = MechanismParams {
            bid_duration: Duration::from_secs(48 * 60 * 60),
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::BidDurationTooLong));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let params = MechanismParams {
            bid_duration: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamsError::ZeroDuration {
                name: "bid_duration"
            })
        );
    }
}
