//! Search for an (account, auction) pairing that admits a bid.

use rand::seq::SliceRandom;
use rand::Rng;

/// An account and auction the search predicate accepted.
#[derive(Debug)]
pub struct Pairing<'a, A, U> {
    pub account: &'a A,
    pub auction: &'a U,
}

/// Find the first pairing accepted by `predicate`.
///
/// Auctions are visited in an order shuffled with `rng` so repeated rounds do
/// not keep favouring the first auction; accounts are tried in the order
/// given for each auction. The same `rng` is handed to the predicate so one
/// seed drives the whole round.
///
/// Returns `Ok(None)` when no pairing qualifies, which is an expected
/// outcome. An `Err` from the predicate stops the search immediately.
pub fn find_pair<'a, A, U, R, E, F>(
    rng: &mut R,
    accounts: &'a [A],
    auctions: &'a [U],
    mut predicate: F,
) -> Result<Option<Pairing<'a, A, U>>, E>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R, &A, &U) -> Result<bool, E>,
{
    let mut order: Vec<&'a U> = auctions.iter().collect();
    order.shuffle(rng);

    for auction in order {
        for account in accounts {
            if predicate(rng, account, auction)? {
                return Ok(Some(Pairing { account, auction }));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;
    use std::convert::Infallible;

    fn always<R: ?Sized>(_: &mut R, _: &u32, _: &u32) -> Result<bool, Infallible> {
        Ok(true)
    }

    #[test]
    fn test_empty_inputs_find_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let found = find_pair(&mut rng, &[] as &[u32], &[1u32, 2, 3], always).unwrap();
        assert!(found.is_none());
        let found = find_pair(&mut rng, &[1u32, 2], &[] as &[u32], always).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_returns_first_accepted_account() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let accounts = [10u32, 20, 30];
        let auctions = [1u32];

        let found = find_pair(&mut rng, &accounts, &auctions, |_, account, _| {
            Ok::<_, Infallible>(*account >= 20)
        })
        .unwrap()
        .unwrap();
        assert_eq!(*found.account, 20);
        assert_eq!(*found.auction, 1);
    }

    #[test]
    fn test_no_match_exhausts_every_pair() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut visited = Vec::new();

        let found = find_pair(&mut rng, &[1u32, 2], &[7u32, 8, 9], |_, account, auction| {
            visited.push((*account, *auction));
            Ok::<_, Infallible>(false)
        })
        .unwrap();
        assert!(found.is_none());
        assert_eq!(visited.len(), 6);
        // Accounts keep their order within each auction.
        for chunk in visited.chunks(2) {
            assert_eq!((chunk[0].0, chunk[1].0), (1, 2));
            assert_eq!(chunk[0].1, chunk[1].1);
        }
    }

    #[test]
    fn test_predicate_error_stops_search() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut calls = 0;

        let result = find_pair(&mut rng, &[1u32, 2, 3], &[1u32, 2], |_, _, _| {
            calls += 1;
            Err::<bool, _>("fatal")
        });
        assert_eq!(result.unwrap_err(), "fatal");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_auction_order_varies_across_seeds() {
        let auctions: Vec<u32> = (0..10).collect();
        let mut first_picks = HashSet::new();

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let found = find_pair(&mut rng, &[0u32], &auctions, always)
                .unwrap()
                .unwrap();
            first_picks.insert(*found.auction);
        }
        assert!(first_picks.len() > 1, "shuffle always picked the same auction");
    }

    #[test]
    fn test_same_seed_same_pairing() {
        let auctions: Vec<u32> = (0..10).collect();
        let pick = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            *find_pair(&mut rng, &[0u32], &auctions, always)
                .unwrap()
                .unwrap()
                .auction
        };
        assert_eq!(pick(5), pick(5));
    }
}
