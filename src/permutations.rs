use crate::error::PermutationError;
use crate::factorial::{factorial, factorial_mod};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

pub const MODULUS: u64 = 1_000_000_007;

/// Index of the first child whose complexity does not exceed the root's.
pub fn first_violation(complexity: &[i64]) -> Option<usize> {
    let (&root, children) = complexity.split_first()?;
    children
        .iter()
        .position(|&child| child <= root)
        .map(|index| index + 1)
}

/// Number of orders in which the non-root nodes can be unlocked, modulo
/// [`MODULUS`].
///
/// Every child must be strictly more complex than the root, otherwise nothing
/// can be unlocked and the count is 0. When they all are, any order works and
/// the count is `(n - 1)!`.
pub fn count_permutations(complexity: &[i64]) -> Result<u32, PermutationError> {
    // MODULUS < u32::MAX
    count_permutations_mod(complexity, MODULUS).map(|count| count as u32)
}

pub fn count_permutations_mod(complexity: &[i64], modulus: u64) -> Result<u64, PermutationError> {
    if modulus == 0 {
        return Err(PermutationError::ZeroModulus);
    }
    if !check_root(complexity)? {
        return Ok(0);
    }

    Ok(factorial_mod(complexity.len() - 1, modulus))
}

/// Same as [`count_permutations`], without the modular reduction.
pub fn count_permutations_exact(complexity: &[i64]) -> Result<BigUint, PermutationError> {
    if !check_root(complexity)? {
        return Ok(BigUint::zero());
    }

    Ok(factorial(complexity.len() - 1))
}

fn check_root(complexity: &[i64]) -> Result<bool, PermutationError> {
    if complexity.is_empty() {
        return Err(PermutationError::EmptyInput);
    }

    match first_violation(complexity) {
        Some(index) => {
            debug!(
                index,
                child = complexity[index],
                root = complexity[0],
                "child does not exceed root"
            );
            Ok(false)
        }
        None => Ok(true),
    }
}
