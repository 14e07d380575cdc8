//! Number-theoretic helpers.
//!
//! All functions are pure. Values that may be negative are reduced with a
//! Euclidean remainder, so results always lie in `[0, m)`.

use num_traits::{PrimInt, Signed};

/// Greatest common divisor of `a` and `b`.
///
/// Works on absolute values, so `gcd(-4, 6) == 2`. By convention
/// `gcd(0, m) == |m|` and `gcd(0, 0) == 0`.
///
/// # Examples
///
/// ```
/// use congruent_core::math::gcd;
///
/// assert_eq!(gcd(12_i64, 1 << 31), 4);
/// assert_eq!(gcd(13_i64, 1 << 31), 1);
/// assert_eq!(gcd(-4_i64, 6), 2);
/// assert_eq!(gcd(0_i64, 9), 9);
/// ```
pub fn gcd<T: PrimInt + Signed>(a: T, b: T) -> T {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Trial division covers primes below this bound; larger cofactors go to
/// Miller–Rabin and Pollard's rho.
const TRIAL_DIVISION_LIMIT: u64 = 1 << 10;

/// Returns the distinct prime divisors of `n` in ascending order.
///
/// Small primes are removed by trial division. Whatever cofactor is left is
/// tested with a deterministic Miller–Rabin and, if composite, split with
/// Pollard's rho, so a 62-bit semiprime costs milliseconds rather than the
/// seconds that `√n` trial division would take.
/// `n <= 1` has no prime divisors and yields an empty vector.
///
/// # Examples
///
/// ```
/// use congruent_core::math::distinct_prime_factors;
///
/// assert_eq!(distinct_prime_factors(1 << 31), vec![2]);
/// assert_eq!(distinct_prime_factors(360), vec![2, 3, 5]);
/// assert_eq!(distinct_prime_factors(4_294_967_295), vec![3, 5, 17, 257, 65_537]);
/// assert!(distinct_prime_factors(1).is_empty());
/// ```
pub fn distinct_prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }

    let mut rest = n;
    strip_factor(&mut rest, 2, &mut factors);
    strip_factor(&mut rest, 3, &mut factors);

    let mut candidate = 5_u64;
    while candidate < TRIAL_DIVISION_LIMIT && candidate <= rest / candidate {
        strip_factor(&mut rest, candidate, &mut factors);
        strip_factor(&mut rest, candidate + 2, &mut factors);
        candidate += 6;
    }

    if rest > 1 {
        if candidate > rest / candidate {
            // no divisor up to √rest
            factors.push(rest);
        } else {
            let mut large = Vec::new();
            split_into_primes(rest, &mut large);
            large.sort_unstable();
            large.dedup();
            factors.extend(large);
        }
    }
    factors
}

fn strip_factor(rest: &mut u64, p: u64, factors: &mut Vec<u64>) {
    if *rest % p == 0 {
        factors.push(p);
        while *rest % p == 0 {
            *rest /= p;
        }
    }
}

/// Pushes every prime factor of `n` (with repetition) onto `primes`.
///
/// `n` must have no prime factor below [`TRIAL_DIVISION_LIMIT`].
fn split_into_primes(n: u64, primes: &mut Vec<u64>) {
    if n == 1 {
        return;
    }
    if is_prime(n) {
        primes.push(n);
        return;
    }
    let divisor = pollard_rho(n);
    split_into_primes(divisor, primes);
    split_into_primes(n / divisor, primes);
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    // the remainder is below m, which fits in u64
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Deterministic Miller–Rabin primality test.
///
/// The first twelve primes as witnesses are exact for every `u64`.
pub(crate) fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let shift = (n - 1).trailing_zeros();
    let odd = (n - 1) >> shift;

    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, odd, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..shift {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Finds a non-trivial divisor of an odd composite `n` (Floyd cycle
/// detection on `x² + c`). Restarts with the next `c` when a cycle closes
/// without a divisor, so the result is deterministic.
fn pollard_rho(n: u64) -> u64 {
    let mut c = 1_u64;
    loop {
        let step = |x: u64| ((u128::from(mul_mod(x, x, n)) + u128::from(c)) % u128::from(n)) as u64;
        let (mut tortoise, mut hare) = (2_u64, 2_u64);
        let mut divisor = 1_i128;
        while divisor == 1 {
            tortoise = step(tortoise);
            hare = step(step(hare));
            divisor = gcd(i128::from(tortoise.abs_diff(hare)), i128::from(n));
        }
        if divisor != i128::from(n) {
            // a proper divisor of n fits in u64
            return divisor as u64;
        }
        c += 1;
    }
}

/// Modular inverse of `x` modulo `m`.
///
/// Returns `Some(y)` with `y` in `[0, m)` and `x·y ≡ 1 (mod m)` when
/// `gcd(x, m) == 1`, and `None` otherwise. `x` may be negative or larger
/// than `m`; it is reduced first. For `m == 1` every residue is congruent to
/// zero and the inverse is `Some(0)`.
///
/// # Arguments
///
/// * `x` - Value to invert
/// * `m` - Positive modulus
///
/// # Examples
///
/// ```
/// use congruent_core::math::mod_inverse;
///
/// assert_eq!(mod_inverse(3, 7), Some(5));
/// assert_eq!(mod_inverse(4, 8), None);
/// assert_eq!(mod_inverse(0, 11), None);
/// assert_eq!(mod_inverse(5, 1), Some(0));
/// ```
pub fn mod_inverse(x: i128, m: u64) -> Option<u64> {
    let m = i128::from(m);
    if m <= 0 {
        return None;
    }

    let (mut old_r, mut r) = (x.rem_euclid(m), m);
    let (mut old_s, mut s) = (1_i128, 0_i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }
    // old_s lies in (-m, m), so the reduced value fits in u64
    u64::try_from(old_s.rem_euclid(m)).ok()
}

/// Evaluates `(a·x + b) mod m` in 128-bit arithmetic.
///
/// The result is reduced with a Euclidean remainder and always lies in
/// `[0, m)`, including for negative `a`, `x` or `b`.
///
/// # Panics
///
/// Panics if `m == 0`. Callers hold a validated [`crate::types::Modulus`].
///
/// # Examples
///
/// ```
/// use congruent_core::math::mul_add_mod;
///
/// assert_eq!(mul_add_mod(5, 123, 13, 1 << 31), 628);
/// assert_eq!(mul_add_mod(-1, 3, 0, 8), 5);
/// ```
#[inline]
pub fn mul_add_mod(a: i128, x: i128, b: i128, m: u64) -> u64 {
    let m = i128::from(m);
    let value = (a * x + b).rem_euclid(m);
    value as u64
}
