// src/noyau/rationnel.rs
//
// Backend rationnel exact (BigRational).
//
// Littéraux acceptés (un jeton, sans espaces):
// - entiers           : 12, -3, +7
// - décimaux          : 1.25, -.5, 5., 3e-2, 1.5E3
// - fractions         : 12/34, -1/2 (dénominateur > 0, sans signe)
//
// + - * / sont exacts ; √ et π sont tronqués à `digits` décimales (réglage du contexte).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::format::format_rat_pretty;
use super::lecture::{pi_rationnel, racine_rationnelle};
use super::nombre::{EchecArithmetique, LitteralInvalide, Nombre, EXPOSANT_PUISSANCE_MAX};
use super::registre::Fonction;

/// Précision par défaut (√, π).
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Exposant décimal max accepté dans un littéral (1e4096).
const EXPOSANT_LITTERAL_MAX: u32 = 4096;

/// Borne la précision demandée dans [0, DIGITS_MAX].
pub fn borner_digits(digits: usize) -> usize {
    digits.min(DIGITS_MAX)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReglagesRationnel {
    digits: usize,
}

impl ReglagesRationnel {
    pub fn new(digits: usize) -> Self {
        Self {
            digits: borner_digits(digits),
        }
    }

    pub fn digits(&self) -> usize {
        self.digits
    }
}

impl Default for ReglagesRationnel {
    fn default() -> Self {
        Self::new(DIGITS_DEFAUT)
    }
}

/* ------------------------ Lecture des littéraux ------------------------ */

fn est_chiffres(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn entier(s: &str) -> Option<BigInt> {
    BigInt::parse_bytes(s.as_bytes(), 10)
}

/// Sépare un signe optionnel en tête.
fn signe(s: &str) -> (bool, &str) {
    if let Some(reste) = s.strip_prefix('-') {
        (true, reste)
    } else if let Some(reste) = s.strip_prefix('+') {
        (false, reste)
    } else {
        (false, s)
    }
}

/// Fraction littérale a/b (sans espaces).
fn lire_fraction(texte: &str) -> Option<BigRational> {
    let (num, den) = texte.split_once('/')?;
    let (neg, num) = signe(num);
    if !est_chiffres(num) || !est_chiffres(den) {
        return None;
    }
    let d = entier(den)?;
    if d.is_zero() {
        return None;
    }
    let n = entier(num)?;
    let r = BigRational::new(n, d);
    Some(if neg { -r } else { r })
}

/// Décimal : [signe] chiffres [. chiffres] [e [signe] chiffres]
fn lire_decimal(texte: &str) -> Option<BigRational> {
    let (neg, corps) = signe(texte);

    let (mantisse, exposant) = match corps.find(['e', 'E']) {
        Some(i) => (&corps[..i], Some(&corps[i + 1..])),
        None => (corps, None),
    };

    let (ent, frac) = match mantisse.split_once('.') {
        Some((e, f)) => (e, f),
        None => (mantisse, ""),
    };
    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !(ent.is_empty() || est_chiffres(ent)) || !(frac.is_empty() || est_chiffres(frac)) {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let mut puissance: i64 = -(frac.len() as i64);

    if let Some(exp) = exposant {
        let (exp_neg, exp) = signe(exp);
        if !est_chiffres(exp) {
            return None;
        }
        let e: u32 = exp.parse().ok()?;
        if e > EXPOSANT_LITTERAL_MAX {
            return None;
        }
        puissance += if exp_neg { -i64::from(e) } else { i64::from(e) };
    }

    let n = entier(&chiffres)?;
    let dix = BigInt::from(10);
    let r = if puissance >= 0 {
        BigRational::from_integer(n * dix.pow(puissance as u32))
    } else {
        BigRational::new(n, dix.pow((-puissance) as u32))
    };

    Some(if neg { -r } else { r })
}

/* ------------------------ Fonctions ------------------------ */

fn division_par_zero() -> EchecArithmetique {
    EchecArithmetique::new("division par zéro")
}

fn exposant_trop_grand() -> EchecArithmetique {
    EchecArithmetique::new("exposant trop grand")
}

/// Puissance entière exacte (exposant rationnel entier).
/// |exposant| borné à EXPOSANT_PUISSANCE_MAX, sauf pour les bases 0, 1 et -1.
fn puissance(base: &BigRational, exposant: &BigRational) -> Result<BigRational, EchecArithmetique> {
    if !exposant.denom().is_one() {
        return Err(EchecArithmetique::new("exposant doit être entier"));
    }
    let n = exposant.numer();

    if base.is_zero() {
        return if n.is_negative() {
            Err(division_par_zero())
        } else if n.is_zero() {
            Ok(BigRational::one())
        } else {
            Ok(BigRational::zero())
        };
    }
    if base.abs().is_one() {
        // (±1)^n : seule la parité compte
        let pair = (n % 2u32).is_zero();
        return Ok(if pair { BigRational::one() } else { base.clone() });
    }

    let n = n
        .to_i32()
        .filter(|n| n.unsigned_abs() <= EXPOSANT_PUISSANCE_MAX)
        .ok_or_else(exposant_trop_grand)?;

    let mut e = n.unsigned_abs();
    let mut acc = BigRational::one();
    let mut b = base.clone();

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }

    Ok(if n < 0 { acc.recip() } else { acc })
}

impl Nombre for BigRational {
    type Reglages = ReglagesRationnel;

    const NOM: &'static str = "rationnel";

    fn lire_litteral(texte: &str, _reglages: &ReglagesRationnel) -> Result<Self, LitteralInvalide> {
        let r = if texte.contains('/') {
            lire_fraction(texte)
        } else {
            lire_decimal(texte)
        };
        r.ok_or_else(|| LitteralInvalide::new(texte))
    }

    fn additionner(&self, autre: &Self) -> Result<Self, EchecArithmetique> {
        Ok(self + autre)
    }

    fn soustraire(&self, autre: &Self) -> Result<Self, EchecArithmetique> {
        Ok(self - autre)
    }

    fn multiplier(&self, autre: &Self) -> Result<Self, EchecArithmetique> {
        Ok(self * autre)
    }

    fn diviser(&self, autre: &Self) -> Result<Self, EchecArithmetique> {
        if autre.is_zero() {
            return Err(division_par_zero());
        }
        Ok(self / autre)
    }

    fn table_fonctions(reglages: &ReglagesRationnel) -> Vec<(&'static str, Fonction<Self>)> {
        let digits = reglages.digits();

        let racine = Fonction::unaire(move |x: &BigRational| {
            racine_rationnelle(x, digits)
                .ok_or_else(|| EchecArithmetique::new("racine carrée d’un nombre négatif"))
        });
        let pi = Fonction::constante(pi_rationnel(digits));

        vec![
            ("sqrt", racine.clone()),
            ("√", racine),
            ("pi", pi.clone()),
            ("π", pi),
            ("abs", Fonction::unaire(|x: &BigRational| Ok(x.abs()))),
            ("neg", Fonction::unaire(|x: &BigRational| Ok(-x))),
            (
                "inv",
                Fonction::unaire(|x: &BigRational| {
                    if x.is_zero() {
                        Err(division_par_zero())
                    } else {
                        Ok(x.recip())
                    }
                }),
            ),
            ("^", Fonction::binaire(puissance)),
        ]
    }

    fn rendre(&self) -> String {
        format_rat_pretty(self)
    }
}
