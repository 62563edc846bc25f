//! Bid generation rules.
//!
//! Given an auction snapshot, the mechanism parameters and a bidder's
//! spendable balance, [`generate_bid`] either picks a random bid the auction
//! would accept or reports why this bidder cannot bid on this auction.
//!
//! Every rule requires a strict improvement of at least one unit over the
//! standing bid or lot, so a bidder can never replace a bid at zero cost:
//!
//! ```text
//! minimum_increment(x, f) = max(1, round_half_away_from_zero(x * f))
//! ```

use crate::random::{uniform_inclusive, RangeError};
use auction_types::{
    Auction, AuctionId, Balance, Coin, CollateralAuction, DebtAuction, MechanismParams,
    SurplusAuction,
};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;
use rust_decimal::Decimal;
use std::time::Duration;
use thiserror::Error;

/// Why no bid could be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BidError {
    /// The bidder cannot afford the minimum acceptable bid.
    #[error("insufficient {denom}: need {required}, have {available}")]
    InsufficientFunds {
        denom: String,
        required: BigUint,
        available: BigUint,
    },

    /// The lot is already zero, so no further reverse bid is possible.
    #[error("{0} cannot receive bids: lot is zero")]
    AuctionClosedToBids(AuctionId),

    /// The auction variant has no bidding rules here.
    #[error("unknown auction variant")]
    UnknownVariant,

    /// A computed bound was malformed.
    #[error(transparent)]
    InvalidRange(#[from] RangeError),
}

impl BidError {
    /// Whether the error only means "this pairing cannot bid right now".
    ///
    /// Everything else indicates a logic or data defect and must abort the
    /// caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BidError::InsufficientFunds { .. } | BidError::AuctionClosedToBids(_)
        )
    }
}

/// Classify a bid attempt for a pairing search.
///
/// Recoverable failures mean "keep searching" (`Ok(false)`), a generated bid
/// means the pairing is usable (`Ok(true)`), fatal failures propagate.
pub fn admits_bid(result: Result<Coin, BidError>) -> Result<bool, BidError> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.is_recoverable() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Minimum improvement over `amount` for increment fraction `fraction`.
///
/// The product is rounded half away from zero and floored at one. Negative
/// fractions behave like zero.
pub fn minimum_increment(amount: &BigUint, fraction: Decimal) -> BigUint {
    let fraction = fraction.max(Decimal::ZERO);
    let numerator = amount * BigUint::from(fraction.mantissa().unsigned_abs());
    let denominator = BigUint::from(10u32).pow(fraction.scale());
    let (quotient, remainder) = numerator.div_rem(&denominator);
    let rounded = if remainder * 2u32 >= denominator {
        quotient + 1u32
    } else {
        quotient
    };
    rounded.max(BigUint::one())
}

/// Generate a random acceptable bid.
///
/// `now` is accepted for rules that depend on block time; none do yet.
pub fn generate_bid<R: Rng + ?Sized>(
    rng: &mut R,
    params: &MechanismParams,
    auction: &Auction,
    balance: &Balance,
    _now: Duration,
) -> Result<Coin, BidError> {
    match auction {
        Auction::Debt(a) => debt_bid(rng, params, a, balance),
        Auction::Surplus(a) => surplus_bid(rng, params, a, balance),
        Auction::Collateral(a) => collateral_bid(rng, params, a, balance),
        _ => Err(BidError::UnknownVariant),
    }
}

/// Bidder pays the fixed debt `bid` and asks for a smaller lot.
fn debt_bid<R: Rng + ?Sized>(
    rng: &mut R,
    params: &MechanismParams,
    auction: &DebtAuction,
    balance: &Balance,
) -> Result<Coin, BidError> {
    let (bid, lot) = (&auction.base.bid, &auction.base.lot);

    require_funds(balance, &bid.denom, &bid.amount)?;
    if lot.is_zero() {
        return Err(BidError::AuctionClosedToBids(auction.base.id));
    }

    let amount = reduced_lot(rng, &lot.amount, params.increment_debt)?;
    Ok(Coin::new(lot.denom.clone(), amount))
}

/// Bidder raises the `bid` for the fixed lot, spending up to their balance.
fn surplus_bid<R: Rng + ?Sized>(
    rng: &mut R,
    params: &MechanismParams,
    auction: &SurplusAuction,
    balance: &Balance,
) -> Result<Coin, BidError> {
    let bid = &auction.base.bid;
    let min_new_bid = &bid.amount + minimum_increment(&bid.amount, params.increment_surplus);

    let available = require_funds(balance, &bid.denom, &min_new_bid)?;

    let amount = draw_amount(rng, &min_new_bid, &available)?;
    Ok(Coin::new(bid.denom.clone(), amount))
}

/// Forward phase raises `bid` toward `max_bid`; reverse phase lowers `lot`.
fn collateral_bid<R: Rng + ?Sized>(
    rng: &mut R,
    params: &MechanismParams,
    auction: &CollateralAuction,
    balance: &Balance,
) -> Result<Coin, BidError> {
    let (bid, lot) = (&auction.base.bid, &auction.base.lot);
    let max_bid = &auction.max_bid.amount;

    // Capped so max_bid stays reachable when the increment would overshoot it.
    let min_new_bid = (&bid.amount + minimum_increment(&bid.amount, params.increment_collateral))
        .min(max_bid.clone());

    let available = require_funds(balance, &bid.denom, &min_new_bid)?;

    if auction.is_reverse_phase() {
        if lot.is_zero() {
            return Err(BidError::AuctionClosedToBids(auction.base.id));
        }
        let amount = reduced_lot(rng, &lot.amount, params.increment_collateral)?;
        return Ok(Coin::new(lot.denom.clone(), amount));
    }

    let upper = available.clone().min(max_bid.clone());
    let mut amount = draw_amount(rng, &min_new_bid, &upper)?;

    // Simulation heuristic, not a mechanism rule: jump straight to max_bid
    // half the time when affordable so runs reach reverse phase more often.
    if rng.gen_range(0..2) == 0 && available >= *max_bid {
        amount = max_bid.clone();
    }
    Ok(Coin::new(bid.denom.clone(), amount))
}

/// Fail with `InsufficientFunds` unless `balance` holds at least `required`.
///
/// Returns the available amount.
fn require_funds(balance: &Balance, denom: &str, required: &BigUint) -> Result<BigUint, BidError> {
    let available = balance.amount_of(denom);
    if available < *required {
        return Err(BidError::InsufficientFunds {
            denom: denom.to_string(),
            required: required.clone(),
            available,
        });
    }
    Ok(available)
}

/// Draw a new lot in `[0, lot - minimum_increment(lot, fraction)]`.
///
/// An increment above the whole lot leaves an empty range, which surfaces as
/// `InvalidRange`.
fn reduced_lot<R: Rng + ?Sized>(
    rng: &mut R,
    lot: &BigUint,
    fraction: Decimal,
) -> Result<BigUint, BidError> {
    let max_new_lot = BigInt::from(lot.clone()) - BigInt::from(minimum_increment(lot, fraction));
    let drawn = uniform_inclusive(rng, &BigInt::zero(), &max_new_lot)?;
    let (_, amount) = drawn.into_parts();
    Ok(amount)
}

/// Draw an amount in `[min, max]`.
fn draw_amount<R: Rng + ?Sized>(
    rng: &mut R,
    min: &BigUint,
    max: &BigUint,
) -> Result<BigUint, BidError> {
    let drawn = uniform_inclusive(rng, &BigInt::from(min.clone()), &BigInt::from(max.clone()))?;
    // Non-negative since min is.
    let (_, amount) = drawn.into_parts();
    Ok(amount)
}
