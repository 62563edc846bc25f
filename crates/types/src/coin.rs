//! Denominated amounts and balance snapshots.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An amount of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    /// Serialized as a decimal string so amounts beyond `u64` survive JSON.
    #[serde(with = "amount_serde")]
    pub amount: BigUint,
}

impl Coin {
    /// Create a new coin.
    pub fn new(denom: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Spendable amounts per denomination for one account.
///
/// A read-only snapshot supplied by the caller. Missing denominations read as
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Coin>", into = "Vec<Coin>")]
pub struct Balance(BTreeMap<String, BigUint>);

impl Balance {
    /// Create an empty balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount held of `denom`, zero if absent.
    pub fn amount_of(&self, denom: &str) -> BigUint {
        self.0.get(denom).cloned().unwrap_or_default()
    }

    /// Add a coin, summing with any existing amount of the same denomination.
    pub fn add(&mut self, coin: Coin) {
        *self.0.entry(coin.denom).or_default() += coin.amount;
    }

    /// Builder form of [`Balance::add`].
    pub fn with(mut self, coin: Coin) -> Self {
        self.add(coin);
        self
    }

    /// Iterate over held coins in denomination order.
    pub fn coins(&self) -> impl Iterator<Item = Coin> + '_ {
        self.0
            .iter()
            .map(|(denom, amount)| Coin::new(denom.clone(), amount.clone()))
    }

    /// Whether every held amount is zero.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Zero::is_zero)
    }
}

impl FromIterator<Coin> for Balance {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        let mut balance = Balance::new();
        for coin in iter {
            balance.add(coin);
        }
        balance
    }
}

impl From<Vec<Coin>> for Balance {
    fn from(coins: Vec<Coin>) -> Self {
        coins.into_iter().collect()
    }
}

impl From<Balance> for Vec<Coin> {
    fn from(balance: Balance) -> Self {
        balance.coins().collect()
    }
}

mod amount_serde {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_denom_reads_zero() {
        let balance = Balance::new().with(Coin::new("usdx", 100u32));
        assert_eq!(balance.amount_of("usdx"), BigUint::from(100u32));
        assert!(balance.amount_of("debt").is_zero());
    }

    #[test]
    fn test_add_sums_same_denom() {
        let balance: Balance = vec![Coin::new("gov", 10u32), Coin::new("gov", 5u32)].into();
        assert_eq!(balance.amount_of("gov"), BigUint::from(15u32));
        assert_eq!(balance.coins().count(), 1);
    }

    #[test]
    fn test_coin_display() {
        assert_eq!(Coin::new("uguu", 1000u32).to_string(), "1000uguu");
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let big: BigUint = "123456789012345678901234567890".parse().unwrap();
        let coin = Coin::new("uguu", big.clone());
        let json = serde_json::to_string(&coin).unwrap();
        assert_eq!(
            json,
            r#"{"denom":"uguu","amount":"123456789012345678901234567890"}"#
        );
        let back: Coin = serde_json::from_str(&json).unwrap();
        assert_eq!(back.amount, big);
    }

    #[test]
    fn test_balance_deserializes_from_coin_list() {
        let balance: Balance =
            serde_json::from_str(r#"[{"denom":"usdx","amount":"100"},{"denom":"debt","amount":"7"}]"#)
                .unwrap();
        assert_eq!(balance.amount_of("usdx"), BigUint::from(100u32));
        assert_eq!(balance.amount_of("debt"), BigUint::from(7u32));
    }
}
