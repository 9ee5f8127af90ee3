//! Elligator2 representability for Curve25519 public keys
//!
//! A Montgomery u-coordinate can be encoded as a uniform random string by
//! Elligator2 only when the inverse map is defined for it. Using the
//! non-square 2, that inverse exists iff `u != -A` and `-2 * u * (u + A)` is a
//! square in GF(2^255 - 19). Roughly half of all public keys qualify.

use num_bigint::BigUint;

/// Montgomery curve coefficient A for Curve25519
const CURVE_A: u32 = 486_662;

fn field_prime() -> BigUint {
    (BigUint::from(1u8) << 255u32) - BigUint::from(19u8)
}

/// Returns true if `x` is zero or a quadratic residue mod `p` (Euler's criterion)
fn is_square(x: &BigUint, p: &BigUint) -> bool {
    let exponent = (p - BigUint::from(1u8)) >> 1u32;
    let legendre = x.modpow(&exponent, p);
    legendre == BigUint::from(0u8) || legendre == BigUint::from(1u8)
}

/// Returns true if the public key has an Elligator2 representative
///
/// `public` is a little-endian Montgomery u-coordinate as produced by X25519.
pub fn is_representable(public: &[u8; 32]) -> bool {
    let p = field_prime();
    let a = BigUint::from(CURVE_A);
    let u = BigUint::from_bytes_le(public) % &p;

    if u == &p - &a {
        return false;
    }

    let product = (BigUint::from(2u8) * &u * ((&u + &a) % &p)) % &p;
    let negated = (&p - product) % &p;
    is_square(&negated, &p)
}
