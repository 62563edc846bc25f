//! Configuration types for the simulator.

use crate::accounts::AccountPool;
use crate::ledger::LedgerSnapshot;
use auction_types::{Coin, MechanismParams};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Configuration for a simulation run.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    /// Number of bidder accounts to create.
    pub num_accounts: usize,

    /// Coins every account is funded with at genesis.
    pub initial_balances: Vec<Coin>,

    /// Mechanism parameters for the genesis ledger.
    pub params: MechanismParams,

    /// Random seed for deterministic simulation.
    pub seed: u64,
}

impl SimulatorConfig {
    /// Create a new simulator configuration.
    pub fn new(num_accounts: usize) -> Self {
        Self {
            num_accounts,
            initial_balances: vec![
                Coin::new("usdx", 100u64),
                Coin::new("uguu", 1_000_000_000_000u64),
                Coin::new("debt", 100u64),
            ],
            params: MechanismParams::default(),
            seed: 12345,
        }
    }

    /// Set the genesis funding for each account.
    pub fn with_initial_balances(mut self, coins: Vec<Coin>) -> Self {
        self.initial_balances = coins;
        self
    }

    /// Set the mechanism parameters.
    pub fn with_params(mut self, params: MechanismParams) -> Self {
        self.params = params;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Random source seeded for this run.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    /// Generate the account pool for this run.
    pub fn account_pool(&self) -> AccountPool {
        AccountPool::generate(self.num_accounts, self.seed)
    }

    /// Build a ledger snapshot with every pool account funded.
    ///
    /// Auctions are added by the caller.
    pub fn genesis_ledger(&self, accounts: &AccountPool, block_time: Duration) -> LedgerSnapshot {
        accounts
            .genesis_balances(&self.initial_balances)
            .into_iter()
            .fold(
                LedgerSnapshot::new(self.params.clone(), block_time),
                |ledger, (address, balance)| ledger.with_balance(address, balance),
            )
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::AuctionLedger;
    use num_bigint::BigUint;
    use rand::RngCore;

    #[test]
    fn test_default_funding() {
        let config = SimulatorConfig::default();
        assert_eq!(config.num_accounts, 10);
        assert_eq!(config.initial_balances.len(), 3);
        assert!(config.params.validate().is_ok());
    }

    #[test]
    fn test_same_seed_same_rng() {
        let config = SimulatorConfig::default().with_seed(9);
        assert_eq!(config.rng().next_u64(), config.rng().next_u64());
    }

    #[test]
    fn test_genesis_ledger_funds_pool() {
        let config = SimulatorConfig::new(4)
            .with_initial_balances(vec![Coin::new("gov", 500u32)]);
        let pool = config.account_pool();
        let ledger = config.genesis_ledger(&pool, Duration::from_secs(1));

        for account in pool.accounts() {
            let balance = ledger.spendable_balance(&account.address).unwrap();
            assert_eq!(balance.amount_of("gov"), BigUint::from(500u32));
        }
        assert_eq!(ledger.block_time(), Duration::from_secs(1));
    }
}
