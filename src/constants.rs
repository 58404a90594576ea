//! Tuning constants and the signed/unsigned value mapping.

use crate::tables::FIB;

/// Rank sampling block size in bits. `ranks[q]` counts the codeword
/// marker pairs strictly before bit `q * SR`.
pub const SR: usize = 512;

/// Select sampling block size in marker pairs. `indices[j]` anchors the
/// word containing the `(j * SS + 1)`-th pair.
pub const SS: usize = 640;

/// Largest magnitude that can be stored.
///
/// Codewords are capped at 63 bits so they always fit a single `u64`,
/// which bounds the offset value at `F(63) - 1`. After the sign fold and
/// the `+2` offset this leaves `(F(63) - 4) / 2` for the magnitude.
pub const MAX_VALUE: i64 = ((FIB[63] - 4) / 2) as i64;

/// Smallest value that can be stored.
pub const MIN_VALUE: i64 = -MAX_VALUE;

/// Fold a signed value into an unsigned one so that small magnitudes of
/// either sign map to small numbers: 0, -1, 1, -2, 2, ... become
/// 0, 1, 2, 3, 4, ...
#[inline]
pub(crate) fn to_sign_magnitude(v: i64) -> u64 {
    let mag = v.unsigned_abs() << 1;
    if v < 0 {
        mag | 1
    } else {
        mag
    }
}

/// Inverse of [`to_sign_magnitude`].
#[inline]
pub(crate) fn from_sign_magnitude(u: u64) -> i64 {
    let mag = (u >> 1) as i64;
    if u & 1 != 0 {
        -mag
    } else {
        mag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_magnitude_fold() {
        let cases = [
            (0i64, 0u64),
            (-1, 1),
            (1, 2),
            (-2, 3),
            (2, 4),
            (MAX_VALUE, 2 * MAX_VALUE as u64),
            (MIN_VALUE, 2 * MAX_VALUE as u64 + 1),
        ];
        for (v, u) in cases {
            assert_eq!(to_sign_magnitude(v), u, "fold of {v}");
            assert_eq!(from_sign_magnitude(u), v, "unfold of {u}");
        }
    }

    #[test]
    fn test_max_value_fits_offset_budget() {
        // The largest folded value plus the +2 offset must stay encodable.
        assert!(to_sign_magnitude(MIN_VALUE) + 2 <= FIB[63] - 1);
        assert!(to_sign_magnitude(MAX_VALUE) + 2 <= FIB[63] - 1);
    }
}
