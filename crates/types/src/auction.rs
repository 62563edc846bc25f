//! Auction variants.
//!
//! Three mechanisms share the same bookkeeping ([`BaseAuction`]) but differ in
//! which side of the trade bidders compete on:
//!
//! | Variant    | Bidders compete by                          |
//! |------------|---------------------------------------------|
//! | Debt       | accepting a smaller `lot` for a fixed `bid` |
//! | Surplus    | paying a larger `bid` for a fixed `lot`     |
//! | Collateral | raising `bid` up to `max_bid`, then lowering `lot` |

use crate::coin::Coin;
use crate::error::AuctionError;
use crate::identifiers::{AccountAddress, AuctionId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fields common to every auction variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAuction {
    pub id: AuctionId,

    /// Current highest bidder, if any bid has been placed.
    pub bidder: Option<AccountAddress>,

    /// Standing bid.
    pub bid: Coin,

    /// Standing lot.
    pub lot: Coin,

    /// When the auction closes unless a new bid extends it.
    pub end_time: Duration,

    /// Hard deadline no bid can extend past.
    pub max_end_time: Duration,
}

impl BaseAuction {
    /// Create an auction with no bids yet.
    pub fn new(id: AuctionId, bid: Coin, lot: Coin, end_time: Duration) -> Self {
        Self {
            id,
            bidder: None,
            bid,
            lot,
            end_time,
            max_end_time: end_time,
        }
    }

    /// Set the hard deadline.
    pub fn with_max_end_time(mut self, max_end_time: Duration) -> Self {
        self.max_end_time = max_end_time;
        self
    }

    /// Set the current highest bidder.
    pub fn with_bidder(mut self, bidder: AccountAddress) -> Self {
        self.bidder = Some(bidder);
        self
    }

    fn validate(&self) -> Result<(), AuctionError> {
        if self.bid.denom.is_empty() {
            return Err(AuctionError::EmptyDenom {
                id: self.id,
                field: "bid",
            });
        }
        if self.lot.denom.is_empty() {
            return Err(AuctionError::EmptyDenom {
                id: self.id,
                field: "lot",
            });
        }
        if self.end_time > self.max_end_time {
            return Err(AuctionError::EndTimeAfterMax { id: self.id });
        }
        Ok(())
    }
}

/// Auction selling newly minted `lot` to cover a fixed debt `bid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtAuction {
    pub base: BaseAuction,
}

/// Auction selling a fixed surplus `lot` for an increasing `bid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurplusAuction {
    pub base: BaseAuction,
}

/// Two-phase auction selling seized collateral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralAuction {
    pub base: BaseAuction,

    /// Ceiling on `bid`. Reaching it switches the auction to reverse bidding.
    pub max_bid: Coin,
}

impl CollateralAuction {
    /// Whether the standing bid has reached `max_bid`.
    ///
    /// In reverse phase bidders pay `max_bid` and compete on a smaller lot.
    pub fn is_reverse_phase(&self) -> bool {
        self.base.bid.amount == self.max_bid.amount
    }

    fn validate(&self) -> Result<(), AuctionError> {
        self.base.validate()?;
        if self.max_bid.denom != self.base.bid.denom {
            return Err(AuctionError::DenomMismatch {
                id: self.base.id,
                expected: self.base.bid.denom.clone(),
                found: self.max_bid.denom.clone(),
            });
        }
        if self.base.bid.amount > self.max_bid.amount {
            return Err(AuctionError::BidExceedsMaxBid {
                id: self.base.id,
                bid: self.base.bid.amount.clone(),
                max_bid: self.max_bid.amount.clone(),
            });
        }
        Ok(())
    }
}

/// An open auction of one of the supported variants.
///
/// Marked non-exhaustive so consumers must decide what an unsupported variant
/// means for them instead of silently defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Auction {
    Debt(DebtAuction),
    Surplus(SurplusAuction),
    Collateral(CollateralAuction),
}

impl Auction {
    /// Shared bookkeeping fields.
    pub fn base(&self) -> &BaseAuction {
        match self {
            Auction::Debt(a) => &a.base,
            Auction::Surplus(a) => &a.base,
            Auction::Collateral(a) => &a.base,
        }
    }

    pub fn id(&self) -> AuctionId {
        self.base().id
    }

    pub fn bid(&self) -> &Coin {
        &self.base().bid
    }

    pub fn lot(&self) -> &Coin {
        &self.base().lot
    }

    /// Short variant name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Auction::Debt(_) => "debt",
            Auction::Surplus(_) => "surplus",
            Auction::Collateral(_) => "collateral",
        }
    }

    /// Check the snapshot against the data model invariants.
    pub fn validate(&self) -> Result<(), AuctionError> {
        match self {
            Auction::Debt(a) => a.base.validate(),
            Auction::Surplus(a) => a.base.validate(),
            Auction::Collateral(a) => a.validate(),
        }
    }
}

impl From<DebtAuction> for Auction {
    fn from(auction: DebtAuction) -> Self {
        Auction::Debt(auction)
    }
}

impl From<SurplusAuction> for Auction {
    fn from(auction: SurplusAuction) -> Self {
        Auction::Surplus(auction)
    }
}

impl From<CollateralAuction> for Auction {
    fn from(auction: CollateralAuction) -> Self {
        Auction::Collateral(auction)
    }
}
