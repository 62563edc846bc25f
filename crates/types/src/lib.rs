//! Core types for the auction bid simulator.
//!
//! This crate holds the read-only data model the bid engine consumes:
//!
//! - [`Coin`] and [`Balance`]: arbitrary-precision amounts keyed by denomination
//! - [`Auction`]: closed sum type over the debt, surplus and collateral variants
//! - [`MechanismParams`]: per-variant minimum increment fractions
//!
//! Nothing here is mutated by the simulator. The external ledger is the only
//! authority that applies an accepted bid.

mod auction;
mod coin;
mod error;
mod identifiers;
mod msg;
mod params;

pub use auction::{Auction, BaseAuction, CollateralAuction, DebtAuction, SurplusAuction};
pub use coin::{Balance, Coin};
pub use error::{AddressError, AuctionError, ParamsError};
pub use identifiers::{AccountAddress, AuctionId};
pub use msg::MsgPlaceBid;
pub use params::MechanismParams;

pub use num_bigint::BigUint;
pub use rust_decimal::Decimal;
