use num_bigint::BigUint;

/// `n!` reduced modulo `modulus`, with the reduction applied after every step.
///
/// Each product is taken in `u128` so any non-zero `u64` modulus is safe.
pub fn factorial_mod(n: usize, modulus: u64) -> u64 {
    let modulus = u128::from(modulus);
    let mut result = 1 % modulus;

    for k in 2..=n as u128 {
        result = result * (k % modulus) % modulus;
    }

    result as u64
}

/// Exact `n!`, the unreduced number of orders for `n` children.
pub fn factorial(n: usize) -> BigUint {
    (2..=n).map(BigUint::from).product()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(4), BigUint::from(24u32));
        assert_eq!(factorial(10), BigUint::from(3_628_800u32));
    }

    #[test]
    fn test_factorial_mod_small() {
        assert_eq!(factorial_mod(0, 1_000_000_007), 1);
        assert_eq!(factorial_mod(1, 1_000_000_007), 1);
        assert_eq!(factorial_mod(5, 1_000_000_007), 120);
        assert_eq!(factorial_mod(5, 7), 120 % 7);
        assert_eq!(factorial_mod(3, 1), 0);
        assert_eq!(factorial_mod(0, 1), 0);
    }

    #[test]
    fn test_factorial_mod_matches_exact() {
        let modulus = 1_000_000_007u64;
        for n in [13usize, 20, 50, 200] {
            let exact = factorial(n) % BigUint::from(modulus);
            assert_eq!(BigUint::from(factorial_mod(n, modulus)), exact, "n = {n}");
        }
    }

    #[test]
    fn test_factorial_mod_past_modulus() {
        // p! contains p as a factor
        assert_eq!(factorial_mod(13, 13), 0);
        assert_eq!(factorial_mod(12, 13), 12);
    }
}
