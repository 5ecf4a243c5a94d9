//! Exhaustive prime listing for small ranges.
//!
//! A Sieve of Eratosthenes over `[min, max)`. Useful for toy-sized keys and
//! as a reference when testing [`is_probable_prime`](crate::is_probable_prime);
//! key generation never uses it.

use alloc::vec::Vec;

use crate::errors::{Error, Result};

/// Largest exclusive upper bound accepted by [`primes_in_range`].
pub const MAX_SIEVE_LIMIT: u64 = 1 << 24;

/// Returns all primes `p` with `min <= p < max`, in increasing order.
///
/// Fails with [`Error::InvalidSeedRange`] if `max` exceeds
/// [`MAX_SIEVE_LIMIT`]. An empty range yields an empty list.
pub fn primes_in_range(min: u64, max: u64) -> Result<Vec<u64>> {
    if max > MAX_SIEVE_LIMIT {
        return Err(Error::InvalidSeedRange);
    }

    if max <= min || max < 3 {
        return Ok(Vec::new());
    }

    let limit = max as usize;
    let mut composite = vec![false; limit];
    composite[0] = true;
    composite[1] = true;

    let mut i = 2;
    while i * i < limit {
        if !composite[i] {
            for multiple in (i * i..limit).step_by(i) {
                composite[multiple] = true;
            }
        }
        i += 1;
    }

    Ok(composite
        .iter()
        .enumerate()
        .skip(min as usize)
        .filter(|(_, is_composite)| !**is_composite)
        .map(|(p, _)| p as u64)
        .collect())
}
