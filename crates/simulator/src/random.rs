//! Uniform random integers over arbitrary-precision ranges.
//!
//! Draws shift the range to start at zero and delegate to
//! [`RandBigInt::gen_biguint_below`], so there is no modulo bias regardless of
//! how wide the range is.

use num_bigint::{BigInt, RandBigInt};
use rand::Rng;
use thiserror::Error;

/// A draw was requested from an empty range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid range: lower bound {min} is not below upper bound {max}")]
    InvalidRange { min: BigInt, max: BigInt },
}

/// Draw uniformly from `[inclusive_min, exclusive_max)`.
///
/// Works for negative and positive bounds.
pub fn uniform_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    inclusive_min: &BigInt,
    exclusive_max: &BigInt,
) -> Result<BigInt, RangeError> {
    if inclusive_min >= exclusive_max {
        return Err(RangeError::InvalidRange {
            min: inclusive_min.clone(),
            max: exclusive_max.clone(),
        });
    }
    // Strictly positive given the check above.
    let (_, width) = (exclusive_max - inclusive_min).into_parts();
    let offset = rng.gen_biguint_below(&width);
    Ok(BigInt::from(offset) + inclusive_min)
}

/// Draw uniformly from `[min, max]`.
pub fn uniform_inclusive<R: Rng + ?Sized>(
    rng: &mut R,
    min: &BigInt,
    max: &BigInt,
) -> Result<BigInt, RangeError> {
    if min > max {
        return Err(RangeError::InvalidRange {
            min: min.clone(),
            max: max.clone(),
        });
    }
    uniform_in_range(rng, min, &(max + 1u32))
}
