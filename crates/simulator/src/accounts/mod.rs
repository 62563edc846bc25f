//! Account management for simulations.
//!
//! Provides an `AccountPool` of bidder accounts derived deterministically from
//! a seed, plus the genesis funding each should receive.

use auction_types::{AccountAddress, Balance, Coin};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// A bidder account known to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimAccount {
    /// The ledger address of this account.
    pub address: AccountAddress,
}

impl SimAccount {
    /// Derive an account from a seed.
    pub fn from_seed(seed: u64) -> Self {
        let mut bytes = [0u8; AccountAddress::LEN];
        ChaCha8Rng::seed_from_u64(seed).fill_bytes(&mut bytes);
        Self {
            address: AccountAddress(bytes),
        }
    }
}

/// Ordered pool of simulation accounts.
///
/// Order is significant: the pairing search tries accounts in pool order.
#[derive(Debug, Clone, Default)]
pub struct AccountPool {
    accounts: Vec<SimAccount>,
}

impl AccountPool {
    /// Create an empty account pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate `count` accounts from consecutive seeds starting at `seed`.
    pub fn generate(count: usize, seed: u64) -> Self {
        info!(count, seed, "Generating account pool");

        let accounts = (0..count as u64)
            .map(|i| SimAccount::from_seed(seed.wrapping_add(i)))
            .collect();
        Self { accounts }
    }

    /// Add an externally created account.
    pub fn push(&mut self, account: SimAccount) {
        self.accounts.push(account);
    }

    /// Accounts in pool order.
    pub fn accounts(&self) -> &[SimAccount] {
        &self.accounts
    }

    /// Look up an account by address.
    pub fn get(&self, address: &AccountAddress) -> Option<&SimAccount> {
        self.accounts.iter().find(|a| a.address == *address)
    }

    /// Total number of accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Get the initial balances to configure in genesis.
    ///
    /// Every account receives the same `coins`.
    pub fn genesis_balances(&self, coins: &[Coin]) -> Vec<(AccountAddress, Balance)> {
        let balance: Balance = coins.iter().cloned().collect();
        self.accounts
            .iter()
            .map(|account| (account.address, balance.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use std::collections::HashSet;

    #[test]
    fn test_account_generation() {
        let pool = AccountPool::generate(10, 100);
        assert_eq!(pool.len(), 10);

        let unique: HashSet<_> = pool.accounts().iter().map(|a| a.address).collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = AccountPool::generate(5, 7);
        let b = AccountPool::generate(5, 7);
        assert_eq!(a.accounts(), b.accounts());
        assert_ne!(a.accounts(), AccountPool::generate(5, 8).accounts());
    }

    #[test]
    fn test_genesis_balances_fund_every_account() {
        let pool = AccountPool::generate(3, 1);
        let balances = pool.genesis_balances(&[Coin::new("usdx", 100u32), Coin::new("debt", 5u32)]);

        assert_eq!(balances.len(), 3);
        for (address, balance) in &balances {
            assert!(pool.get(address).is_some());
            assert_eq!(balance.amount_of("usdx"), BigUint::from(100u32));
            assert_eq!(balance.amount_of("debt"), BigUint::from(5u32));
        }
    }
}
