//! Integer helpers shared by the model and the search algorithms.

use num_traits::PrimInt;

/// Greatest common divisor by the Euclidean algorithm.
///
/// Defined for non-negative inputs, with `gcd(0, b) == b`.
///
/// # Examples
///
/// ```
/// use frobenius_core::gcd;
///
/// assert_eq!(gcd(12i64, 18), 6);
/// assert_eq!(gcd(0u32, 7), 7);
/// assert_eq!(gcd(5u8, 0), 5);
/// ```
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor of a whole sequence.
///
/// Returns `0` for an empty sequence, the identity of `gcd`.
pub fn gcd_all<T: PrimInt>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().fold(T::zero(), gcd)
}

/// Number of bits needed to represent `t` (`0` needs none).
///
/// # Examples
///
/// ```
/// use frobenius_core::bit_length;
///
/// assert_eq!(bit_length(0), 0);
/// assert_eq!(bit_length(1), 1);
/// assert_eq!(bit_length(8), 4);
/// assert_eq!(bit_length(255), 8);
/// ```
pub fn bit_length(t: u64) -> u32 {
    u64::BITS - t.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(3i64, 5), 1);
        assert_eq!(gcd(4i64, 6), 2);
        assert_eq!(gcd(6i64, 4), 2);
        assert_eq!(gcd(17i64, 17), 17);
    }

    #[test]
    fn test_gcd_zero() {
        assert_eq!(gcd(0i64, 9), 9);
        assert_eq!(gcd(9i64, 0), 9);
        assert_eq!(gcd(0i64, 0), 0);
    }

    #[test]
    fn test_gcd_all() {
        assert_eq!(gcd_all([6i64, 10, 15]), 1);
        assert_eq!(gcd_all([4i64, 6]), 2);
        assert_eq!(gcd_all([12u64]), 12);
        assert_eq!(gcd_all(Vec::<i64>::new()), 0);
    }

    #[test]
    fn test_bit_length_powers_of_two() {
        for k in 0..63u32 {
            assert_eq!(bit_length(1u64 << k), k + 1);
        }
        assert_eq!(bit_length(u64::MAX), 64);
    }
}
