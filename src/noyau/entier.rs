// src/noyau/entier.rs
//
// Backend entier (BigInt), précision arbitraire.
// - littéraux : [signe] chiffres décimaux ASCII
// - `/` tronque vers zéro, `%` a le signe du dividende (convention BigInt)
// - √ : partie entière

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::nombre::{EchecArithmetique, LitteralInvalide, Nombre, EXPOSANT_PUISSANCE_MAX};
use super::registre::Fonction;

fn division_par_zero() -> EchecArithmetique {
    EchecArithmetique::new("division par zéro")
}

/// a^n, n ≥ 0 ; n borné à EXPOSANT_PUISSANCE_MAX sauf pour a ∈ {-1, 0, 1}.
fn puissance(a: &BigInt, n: &BigInt) -> Result<BigInt, EchecArithmetique> {
    if n.is_negative() {
        return Err(EchecArithmetique::new("exposant négatif"));
    }
    if a.is_zero() {
        return Ok(if n.is_zero() { BigInt::one() } else { BigInt::zero() });
    }
    if a.abs().is_one() {
        let pair = (n % 2u32).is_zero();
        return Ok(if pair { BigInt::one() } else { a.clone() });
    }
    let n = n
        .to_u32()
        .filter(|n| *n <= EXPOSANT_PUISSANCE_MAX)
        .ok_or_else(|| EchecArithmetique::new("exposant trop grand"))?;
    Ok(a.pow(n))
}

fn est_litteral_entier(texte: &str) -> bool {
    let chiffres = texte
        .strip_prefix('-')
        .or_else(|| texte.strip_prefix('+'))
        .unwrap_or(texte);
    !chiffres.is_empty() && chiffres.bytes().all(|b| b.is_ascii_digit())
}

impl Nombre for BigInt {
    type Reglages = ();

    const NOM: &'static str = "entier";

    fn lire_litteral(texte: &str, _reglages: &()) -> Result<Self, LitteralInvalide> {
        // parse_bytes tolère les '_' : on filtre avant
        if !est_litteral_entier(texte) {
            return Err(LitteralInvalide::new(texte));
        }
        BigInt::parse_bytes(texte.as_bytes(), 10).ok_or_else(|| LitteralInvalide::new(texte))
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

    fn table_fonctions(_reglages: &()) -> Vec<(&'static str, Fonction<Self>)> {
        vec![
            ("abs", Fonction::unaire(|x: &BigInt| Ok(x.abs()))),
            ("neg", Fonction::unaire(|x: &BigInt| Ok(-x))),
            (
                "sqrt",
                Fonction::unaire(|x: &BigInt| {
                    if x.is_negative() {
                        Err(EchecArithmetique::new("racine carrée d’un nombre négatif"))
                    } else {
                        Ok(x.sqrt())
                    }
                }),
            ),
            (
                "%",
                Fonction::binaire(|a: &BigInt, b: &BigInt| {
                    if b.is_zero() {
                        Err(division_par_zero())
                    } else {
                        Ok(a % b)
                    }
                }),
            ),
            ("^", Fonction::binaire(puissance)),
        ]
    }
}
