//! Workload generation for simulations.
//!
//! A workload turns the current ledger snapshot into the next message the
//! harness should deliver, or a no-op when nothing can be done this round.

mod place_bid;

pub use place_bid::{PlaceBidWorkload, WorkloadStats};

use crate::accounts::AccountPool;
use crate::bid::BidError;
use crate::ledger::AuctionLedger;
use auction_types::{AccountAddress, AuctionError, MsgPlaceBid, ParamsError};
use thiserror::Error;

/// Trait for generating operations against a ledger.
pub trait WorkloadGenerator {
    /// Run one round.
    ///
    /// The ledger is only read. Applying the returned message is up to the
    /// caller.
    fn generate_one<L: AuctionLedger + ?Sized>(
        &mut self,
        ledger: &L,
        accounts: &AccountPool,
        rng: &mut impl rand::Rng,
    ) -> Result<OperationOutcome, OperationError>;
}

/// Result of a successful round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Nothing to do this round. Not a failure.
    NoOp { reason: String },

    /// A bid the ledger should accept.
    PlaceBid(MsgPlaceBid),
}

impl OperationOutcome {
    /// The generated message, if any.
    pub fn message(&self) -> Option<&MsgPlaceBid> {
        match self {
            OperationOutcome::PlaceBid(msg) => Some(msg),
            OperationOutcome::NoOp { .. } => None,
        }
    }
}

/// Faults that must stop the simulation.
#[derive(Debug, Error)]
pub enum OperationError {
    /// Bid generation hit a defect rather than a business condition.
    #[error("Bid generation failed: {0}")]
    Bid(#[from] BidError),

    /// The ledger returned an auction violating its invariants.
    #[error("Invalid auction: {0}")]
    InvalidAuction(#[from] AuctionError),

    /// The ledger returned out-of-range mechanism parameters.
    #[error("Invalid params: {0}")]
    InvalidParams(#[from] ParamsError),

    /// The chosen bidder disappeared from the ledger.
    #[error("Couldn't find account {0}")]
    AccountNotFound(AccountAddress),
}
