//! Read-only view of the ledger state a simulation round bids against.

use auction_types::{AccountAddress, Auction, AuctionId, Balance, MechanismParams};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Ledger queries needed to pick a bid.
///
/// Implementations hand out snapshots; nothing returned here is written back.
pub trait AuctionLedger {
    /// All currently open auctions, in ledger iteration order.
    fn open_auctions(&self) -> Vec<Auction>;

    /// Current mechanism parameters.
    fn params(&self) -> MechanismParams;

    /// Current block time.
    fn block_time(&self) -> Duration;

    /// Spendable balance of an account, or `None` if the account is unknown.
    fn spendable_balance(&self, address: &AccountAddress) -> Option<Balance>;
}

/// In-memory ledger snapshot.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    auctions: BTreeMap<AuctionId, Auction>,
    balances: HashMap<AccountAddress, Balance>,
    params: MechanismParams,
    block_time: Duration,
}

impl LedgerSnapshot {
    /// Create an empty snapshot.
    pub fn new(params: MechanismParams, block_time: Duration) -> Self {
        Self {
            params,
            block_time,
            ..Default::default()
        }
    }

    /// Add or replace an auction.
    pub fn insert_auction(&mut self, auction: Auction) {
        self.auctions.insert(auction.id(), auction);
    }

    /// Builder form of [`LedgerSnapshot::insert_auction`].
    pub fn with_auction(mut self, auction: impl Into<Auction>) -> Self {
        self.insert_auction(auction.into());
        self
    }

    /// Set an account's spendable balance.
    pub fn set_balance(&mut self, address: AccountAddress, balance: Balance) {
        self.balances.insert(address, balance);
    }

    /// Builder form of [`LedgerSnapshot::set_balance`].
    pub fn with_balance(mut self, address: AccountAddress, balance: Balance) -> Self {
        self.set_balance(address, balance);
        self
    }
}

impl AuctionLedger for LedgerSnapshot {
    fn open_auctions(&self) -> Vec<Auction> {
        self.auctions.values().cloned().collect()
    }

    fn params(&self) -> MechanismParams {
        self.params.clone()
    }

    fn block_time(&self) -> Duration {
        self.block_time
    }

    fn spendable_balance(&self, address: &AccountAddress) -> Option<Balance> {
        self.balances.get(address).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_types::{BaseAuction, Coin, SurplusAuction};

    fn surplus(id: u64) -> SurplusAuction {
        SurplusAuction {
            base: BaseAuction::new(
                AuctionId(id),
                Coin::new("gov", 0u32),
                Coin::new("usdx", 100u32),
                Duration::from_secs(10),
            ),
        }
    }

    #[test]
    fn test_auctions_iterate_by_id() {
        let ledger = LedgerSnapshot::default()
            .with_auction(surplus(3))
            .with_auction(surplus(1))
            .with_auction(surplus(2));
        let ids: Vec<_> = ledger.open_auctions().iter().map(Auction::id).collect();
        assert_eq!(ids, vec![AuctionId(1), AuctionId(2), AuctionId(3)]);
    }

    #[test]
    fn test_unknown_account_has_no_balance() {
        let known = AccountAddress([1; 20]);
        let ledger = LedgerSnapshot::default()
            .with_balance(known, Balance::new().with(Coin::new("gov", 5u32)));
        assert!(ledger.spendable_balance(&known).is_some());
        assert!(ledger.spendable_balance(&AccountAddress([2; 20])).is_none());
    }
}
