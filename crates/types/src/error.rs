//! Validation errors for auction and parameter snapshots.

use crate::identifiers::AuctionId;
use num_bigint::BigUint;
use rust_decimal::Decimal;
use thiserror::Error;

/// An auction snapshot violates a data model invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuctionError {
    /// A coin on the auction has an empty denomination.
    #[error("{id}: {field} denomination is empty")]
    EmptyDenom { id: AuctionId, field: &'static str },

    /// The auction is scheduled to close after its hard deadline.
    #[error("{id}: end time is after max end time")]
    EndTimeAfterMax { id: AuctionId },

    /// A collateral auction bid is above its cap.
    #[error("{id}: bid {bid} exceeds max bid {max_bid}")]
    BidExceedsMaxBid {
        id: AuctionId,
        bid: BigUint,
        max_bid: BigUint,
    },

    /// Two coins that must share a denomination do not.
    #[error("{id}: expected denomination {expected}, found {found}")]
    DenomMismatch {
        id: AuctionId,
        expected: String,
        found: String,
    },
}

/// Mechanism parameters are out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("{name} must not be negative, got {value}")]
    NegativeIncrement { name: &'static str, value: Decimal },

    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },

    #[error("bid duration must not exceed max auction duration")]
    BidDurationTooLong,
}

/// An account address could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("address must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
