//! Messages produced by the simulator for the ledger.

use crate::coin::Coin;
use crate::identifiers::{AccountAddress, AuctionId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request to place a bid on an auction.
///
/// `amount` is a bid-side amount in forward bidding and a lot-side amount in
/// reverse bidding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgPlaceBid {
    pub auction_id: AuctionId,
    pub bidder: AccountAddress,
    pub amount: Coin,
}

impl MsgPlaceBid {
    pub fn new(auction_id: AuctionId, bidder: AccountAddress, amount: Coin) -> Self {
        Self {
            auction_id,
            bidder,
            amount,
        }
    }
}

impl fmt::Display for MsgPlaceBid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "place_bid({}, {}, {})", self.auction_id, self.bidder, self.amount)
    }
}
