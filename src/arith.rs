//! Big-integer helpers backing table validation. Everything here is
//! computed once per construction; none of it is on an arithmetic fast
//! path.

use num::bigint::BigInt;
use num::{BigUint, Integer, ToPrimitive};

// Witnesses for the Miller-Rabin test. A fixed set keeps construction
// deterministic; 24 prime bases are far beyond what a hand-transcribed
// table constant could survive by accident.
const MR_BASES: [u64; 24] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
];

/// Miller-Rabin probable-prime test with fixed witnesses.
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::from(1u32);
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    if n.is_even() {
        return n == &two;
    }
    // n - 1 = d * 2^s with d odd
    let n1 = n - &one;
    let s = n1.trailing_zeros().unwrap();
    let d = &n1 >> s;

    'witness: for base in MR_BASES {
        let a = BigUint::from(base);
        if a >= n1 {
            continue;
        }
        let mut x = a.modpow(&d, n);
        if x == one || x == n1 {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// (2^(base_bits * nlimbs))^2 mod p, the conversion constant into
/// Montgomery form.
pub(crate) fn mont_r2(p: &BigUint, base_bits: u32, nlimbs: usize) -> BigUint {
    let r = BigUint::from(1u32) << (base_bits as usize * nlimbs);
    (&r * &r) % p
}

/// (-p^-1) mod 2^base_bits, the per-limb Montgomery multiplier.
/// None if p is even.
pub(crate) fn mont_neg_inv(p: &BigUint, base_bits: u32) -> Option<u64> {
    let m = BigUint::from(1u32) << base_bits;
    let inv = p.modinv(&m)?;
    (&m - inv).to_u64()
}

/// Does (x, y) satisfy y^2 = x^3 + a*x + b over GF(p)?
pub(crate) fn on_curve(x: &BigUint, y: &BigUint, a: i64, b: &BigUint, p: &BigUint) -> bool {
    let xp = BigInt::from(x.clone());
    let pp = BigInt::from(p.clone());
    let rhs = (&xp * &xp * &xp + BigInt::from(a) * &xp + BigInt::from(b.clone())).mod_floor(&pp);
    let lhs = BigInt::from((y * y) % p);
    lhs == rhs
}

/// v mod p for a small signed constant, as an unsigned residue.
pub(crate) fn small_residue(v: i64, p: &BigUint) -> BigUint {
    BigInt::from(v)
        .mod_floor(&BigInt::from(p.clone()))
        .to_biguint()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probable_prime_small() {
        let primes = [2u32, 3, 5, 97, 7919];
        let composites = [0u32, 1, 4, 91, 561, 7917]; // 561 is a Carmichael number
        for v in primes {
            assert!(is_probable_prime(&BigUint::from(v)), "{v}");
        }
        for v in composites {
            assert!(!is_probable_prime(&BigUint::from(v)), "{v}");
        }
    }

    #[test]
    fn test_probable_prime_512() {
        let p = (BigUint::from(1u32) << 512) - 569u32;
        assert!(is_probable_prime(&p));
        assert!(!is_probable_prime(&(p + 2u32)));
    }

    #[test]
    fn test_mont_constants_small() {
        // p = 23, B = 5: 23 * 7 = 161 = 1 mod 32, so -p^-1 = 32 - 7 = 25.
        let p = BigUint::from(23u32);
        assert_eq!(mont_neg_inv(&p, 5), Some(25));
        assert_eq!(mont_neg_inv(&BigUint::from(24u32), 5), None);
        // R = 2^10, R^2 mod 23 = 6.
        assert_eq!(mont_r2(&p, 5, 2), BigUint::from(6u32));
    }

    #[test]
    fn test_on_curve_small() {
        // y^2 = x^3 - 3x + 5 over GF(23): x = 1 gives rhs = 3 = 7^2, so
        // (1, 7) is on the curve and (1, 8) is not.
        let p = BigUint::from(23u32);
        let b = BigUint::from(5u32);
        assert!(on_curve(&BigUint::from(1u32), &BigUint::from(7u32), -3, &b, &p));
        assert!(!on_curve(&BigUint::from(1u32), &BigUint::from(8u32), -3, &b, &p));
    }

    #[test]
    fn test_small_residue() {
        let p = BigUint::from(23u32);
        assert_eq!(small_residue(-3, &p), BigUint::from(20u32));
        assert_eq!(small_residue(30, &p), BigUint::from(7u32));
    }
}
