//! Auction Bid Simulator
//!
//! Randomized bid generation for debt, surplus and collateral auctions, used
//! to drive realistic traffic in ledger simulations. Given the same seed and
//! the same ledger snapshot, every round is exactly reproducible.
//!
//! # Architecture
//!
//! ```text
//! PlaceBidWorkload ──▶ find_pair ──▶ generate_bid ──▶ uniform_inclusive
//!   (workload)          (pair)         (bid)            (random)
//! ```
//!
//! - **Range Random**: uniform draws over arbitrary-precision ranges
//! - **Bid Rules**: per-variant acceptance rules producing a legal bid
//! - **Pair Finder**: shuffled search over auctions × accounts
//! - **Workload**: one round against a read-only [`AuctionLedger`]
//!
//! # Example
//!
//! ```
//! use auction_simulator::{OperationOutcome, PlaceBidWorkload, SimulatorConfig, WorkloadGenerator};
//! use auction_types::{AuctionId, BaseAuction, Coin, DebtAuction};
//! use std::time::Duration;
//!
//! let config = SimulatorConfig::new(10).with_seed(42);
//! let accounts = config.account_pool();
//! let auction = DebtAuction {
//!     base: BaseAuction::new(
//!         AuctionId(1),
//!         Coin::new("debt", 100u32),
//!         Coin::new("uguu", 1000u32),
//!         Duration::from_secs(3600),
//!     ),
//! };
//! let ledger = config
//!     .genesis_ledger(&accounts, Duration::from_secs(0))
//!     .with_auction(auction);
//!
//! let mut rng = config.rng();
//! let mut workload = PlaceBidWorkload::new();
//! match workload.generate_one(&ledger, &accounts, &mut rng)? {
//!     OperationOutcome::PlaceBid(msg) => assert_eq!(msg.amount.denom, "uguu"),
//!     OperationOutcome::NoOp { reason } => panic!("skipped: {reason}"),
//! }
//! # Ok::<(), auction_simulator::OperationError>(())
//! ```

pub mod accounts;
pub mod bid;
pub mod config;
pub mod ledger;
pub mod pair;
pub mod random;
pub mod workload;

pub use accounts::{AccountPool, SimAccount};
pub use bid::{admits_bid, generate_bid, minimum_increment, BidError};
pub use config::SimulatorConfig;
pub use ledger::{AuctionLedger, LedgerSnapshot};
pub use pair::{find_pair, Pairing};
pub use random::{uniform_in_range, uniform_inclusive, RangeError};
pub use workload::{
    OperationError, OperationOutcome, PlaceBidWorkload, WorkloadGenerator, WorkloadStats,
};
