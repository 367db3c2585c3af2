// src/noyau/flottant.rs
//
// Backend flottant (f64).
// - littéraux : syntaxe Rust de f64, FINIS seulement ("inf", "NaN" restent des noms)
// - tout résultat non fini (NaN, ±∞) est un échec arithmétique
// - fonctions : celles de std, table statique

use num_traits::Zero;

use super::nombre::{EchecArithmetique, LitteralInvalide, Nombre};
use super::registre::Fonction;

fn fini(nom: &str, x: f64) -> Result<f64, EchecArithmetique> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(EchecArithmetique::new(format!("{nom}: résultat hors domaine")))
    }
}

/// Fonction unaire std, avec contrôle de domaine sur le résultat.
fn unaire(nom: &'static str, f: fn(f64) -> f64) -> (&'static str, Fonction<f64>) {
    (nom, Fonction::unaire(move |x: &f64| fini(nom, f(*x))))
}

impl Nombre for f64 {
    type Reglages = ();

    const NOM: &'static str = "flottant";

    fn lire_litteral(texte: &str, _reglages: &()) -> Result<Self, LitteralInvalide> {
        match texte.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(x),
            _ => Err(LitteralInvalide::new(texte)),
        }
    }

    fn additionner(&self, autre: &Self) -> Result<Self, EchecArithmetique> {
        fini("+", self + autre)
    }

    fn soustraire(&self, autre: &Self) -> Result<Self, EchecArithmetique> {
        fini("-", self - autre)
    }

    fn multiplier(&self, autre: &Self) -> Result<Self, EchecArithmetique> {
        fini("*", self * autre)
    }

    fn diviser(&self, autre: &Self) -> Result<Self, EchecArithmetique> {
        if autre.is_zero() {
            return Err(EchecArithmetique::new("division par zéro"));
        }
        fini("/", self / autre)
    }

    fn table_fonctions(_reglages: &()) -> Vec<(&'static str, Fonction<Self>)> {
        vec![
            unaire("sin", f64::sin),
            unaire("cos", f64::cos),
            unaire("tan", f64::tan),
            unaire("asin", f64::asin),
            unaire("acos", f64::acos),
            unaire("atan", f64::atan),
            unaire("sinh", f64::sinh),
            unaire("cosh", f64::cosh),
            unaire("tanh", f64::tanh),
            unaire("sqrt", f64::sqrt),
            unaire("cbrt", f64::cbrt),
            unaire("ln", f64::ln),
            unaire("log10", f64::log10),
            unaire("log2", f64::log2),
            unaire("exp", f64::exp),
            unaire("abs", f64::abs),
            unaire("floor", f64::floor),
            unaire("ceil", f64::ceil),
            unaire("round", f64::round),
            ("neg", Fonction::unaire(|x: &f64| Ok(-x))),
            ("^", Fonction::binaire(|a: &f64, b: &f64| fini("^", a.powf(*b)))),
            ("pi", Fonction::constante(std::f64::consts::PI)),
            ("e", Fonction::constante(std::f64::consts::E)),
        ]
    }
}
