// src/noyau/lecture.rs
//
// Lecture décimale tronquée (entiers “scalés” ×10^digits) :
// - rendu décimal d’un rationnel
// - π (Machin) avec cache par précision
// - √ d’un rationnel (Newton, tronqué)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// r -> entier “scalé” = trunc(r * 10^digits) (vers zéro, comme la division BigInt)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Lecture décimale tronquée d’un rationnel.
pub fn rationnel_en_decimal(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}

/// Entier scalé -> rationnel exact (scaled / 10^digits).
fn scaled_to_rational(scaled: BigInt, digits: usize) -> BigRational {
    BigRational::new(scaled, pow10(digits))
}

/* ------------------------ π (Machin) + cache ------------------------ */

/// arctan(1/q) en entier scalé (troncature) via série:
/// atan(z) = z - z^3/3 + z^5/5 - ...
fn arctan_inv_q_scaled(q: i64, scale: &BigInt) -> BigInt {
    let q = BigInt::from(q);

    let mut k: usize = 0;
    let mut sign_pos = true;

    // q^(2k+1)
    let mut q_pow = q.clone();
    let mut sum = BigInt::zero();

    loop {
        let denom = BigInt::from((2 * k + 1) as i64);
        let d = &q_pow * &denom;

        let term = scale / &d;
        if term.is_zero() {
            break;
        }

        if sign_pos {
            sum += &term;
        } else {
            sum -= &term;
        }

        q_pow *= &q;
        q_pow *= &q;

        sign_pos = !sign_pos;
        k += 1;
    }

    sum
}

fn pi_scaled_compute(digits: usize) -> BigInt {
    // extra pour amortir les erreurs de troncature
    let extra = 10usize;
    let scale = pow10(digits + extra);

    // Machin : π = 16*atan(1/5) - 4*atan(1/239)
    let a = arctan_inv_q_scaled(5, &scale);
    let b = arctan_inv_q_scaled(239, &scale);

    let mut pi = BigInt::from(16) * a - BigInt::from(4) * b;

    pi /= pow10(extra);
    pi
}

static PI_CACHE: OnceLock<Mutex<HashMap<usize, BigInt>>> = OnceLock::new();

fn pi_scaled_cached(digits: usize) -> BigInt {
    let m = PI_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    // un cache empoisonné reste cohérent (insertion atomique d’une valeur complète)
    let mut guard = m.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(v) = guard.get(&digits) {
        return v.clone();
    }

    let v = pi_scaled_compute(digits);
    guard.insert(digits, v.clone());
    v
}

/// π tronqué à `digits` décimales, sous forme rationnelle.
pub fn pi_rationnel(digits: usize) -> BigRational {
    scaled_to_rational(pi_scaled_cached(digits), digits)
}

/* ------------------------ √ (approx scalée) ------------------------ */

/// sqrt(r) en entier scalé : floor( sqrt(r) * 10^digits ), r = n/d >= 0
fn rational_sqrt_scaled(r: &BigRational, digits: usize) -> BigInt {
    let n = r.numer().clone();
    let d = r.denom().clone();

    if n.is_zero() {
        return BigInt::zero();
    }

    // y^2 ≈ (n * 10^(2*digits)) / d
    let scale2 = pow10(2 * digits);
    let target = n * scale2;

    let mut y = pow10(digits);
    if y.is_zero() {
        y = BigInt::one();
    }

    // Newton sur y pour sqrt(target/d)
    loop {
        let denom = &d * &y;
        if denom.is_zero() {
            break;
        }

        let q = &target / denom;
        let y_next = (&y + q) >> 1;

        if y_next == y || y_next == (&y - 1u32) {
            // ajustement final (floor)
            let mut y_adj = y_next;

            while (&y_adj + 1u32) * (&y_adj + 1u32) * &d <= target {
                y_adj += 1u32;
            }
            while &y_adj * &y_adj * &d > target {
                y_adj -= 1u32;
            }
            return y_adj;
        }

        y = y_next;
    }

    y
}

/// √r tronquée à `digits` décimales (exacte si r est un carré parfait de décimal à `digits`).
/// Retourne None si r < 0.
pub fn racine_rationnelle(r: &BigRational, digits: usize) -> Option<BigRational> {
    if r.is_negative() {
        return None;
    }
    Some(scaled_to_rational(rational_sqrt_scaled(r, digits), digits))
}
