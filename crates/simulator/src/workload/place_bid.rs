//! Bid placement workload generator.

use crate::accounts::{AccountPool, SimAccount};
use crate::bid::{admits_bid, generate_bid, BidError};
use crate::ledger::AuctionLedger;
use crate::pair::{find_pair, Pairing};
use crate::workload::{OperationError, OperationOutcome, WorkloadGenerator};
use auction_types::{Auction, MsgPlaceBid};
use tracing::{debug, warn};

/// Counters over the rounds a workload has run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkloadStats {
    /// Rounds attempted, including failed ones.
    pub rounds: u64,
    /// Rounds that produced a bid.
    pub bids: u64,
    /// Rounds with no valid auction and bidder.
    pub no_ops: u64,
}

/// Generates random bids on open auctions.
#[derive(Debug, Default)]
pub struct PlaceBidWorkload {
    stats: WorkloadStats,
}

impl PlaceBidWorkload {
    /// Create a new bid workload generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters so far.
    pub fn stats(&self) -> WorkloadStats {
        self.stats
    }

    /// Search for an account able to bid on some open auction.
    fn find_bidder<'a, L: AuctionLedger + ?Sized>(
        ledger: &L,
        accounts: &'a [SimAccount],
        auctions: &'a [Auction],
        rng: &mut impl rand::Rng,
    ) -> Result<Option<Pairing<'a, SimAccount, Auction>>, OperationError> {
        let params = ledger.params();
        let now = ledger.block_time();

        let pairing = find_pair(
            rng,
            accounts,
            auctions,
            |rng, account, auction| -> Result<bool, BidError> {
                let Some(balance) = ledger.spendable_balance(&account.address) else {
                    debug!(bidder = %account.address, "Skipping account unknown to ledger");
                    return Ok(false);
                };
                let admitted = admits_bid(generate_bid(rng, &params, auction, &balance, now))?;
                if !admitted {
                    debug!(
                        auction = %auction.id(),
                        kind = auction.kind(),
                        bidder = %account.address,
                        "Pairing cannot bid"
                    );
                }
                Ok(admitted)
            },
        )?;
        Ok(pairing)
    }
}

impl WorkloadGenerator for PlaceBidWorkload {
    fn generate_one<L: AuctionLedger + ?Sized>(
        &mut self,
        ledger: &L,
        accounts: &AccountPool,
        rng: &mut impl rand::Rng,
    ) -> Result<OperationOutcome, OperationError> {
        self.stats.rounds += 1;

        let params = ledger.params();
        params.validate()?;
        let auctions = ledger.open_auctions();
        for auction in &auctions {
            auction.validate()?;
        }

        let Some(Pairing { account, auction }) =
            Self::find_bidder(ledger, accounts.accounts(), &auctions, rng)?
        else {
            self.stats.no_ops += 1;
            debug!(
                auctions = auctions.len(),
                accounts = accounts.len(),
                "No valid auction and bidder"
            );
            return Ok(OperationOutcome::NoOp {
                reason: "no valid auction and bidder".to_string(),
            });
        };

        let Some(balance) = ledger.spendable_balance(&account.address) else {
            warn!(bidder = %account.address, "Bidder vanished after pairing");
            return Err(OperationError::AccountNotFound(account.address));
        };

        // Draws again, so the amount differs from the one the search saw, but
        // the same checks pass against the same snapshot.
        let amount = generate_bid(rng, &params, auction, &balance, ledger.block_time())?;

        debug!(
            auction = %auction.id(),
            kind = auction.kind(),
            bidder = %account.address,
            amount = %amount,
            "Generated bid"
        );
        self.stats.bids += 1;

        Ok(OperationOutcome::PlaceBid(MsgPlaceBid::new(
            auction.id(),
            account.address,
            amount,
        )))
    }
}
