// src/noyau/format.rs

use num_rational::BigRational;
use num_traits::One;

use super::eval::{Demarche, Nature};
use super::nombre::Nombre;

/* ------------------------ Helpers rationnels ------------------------ */

/// n/d, ou n seul si le dénominateur vaut 1.
pub fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Pile ------------------------ */

/// Rend une pile, du bas vers le haut.
pub fn format_pile<T: Nombre>(pile: &[T]) -> Vec<String> {
    pile.iter().map(T::rendre).collect()
}

/* ------------------------ Démarche ------------------------ */

/// Une ligne par jeton : position, élément, nature, pile après effet.
///
/// Exemple ("3 4 +"):
///   1  3   littéral   [3]
///   2  4   littéral   [3, 4]
///   3  +   fonction/2 [7]
pub fn format_demarche(d: &Demarche) -> String {
    let largeur = d
        .etapes
        .iter()
        .map(|e| e.element.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for e in &d.etapes {
        let nature = match e.nature {
            Nature::Litteral => "littéral".to_string(),
            Nature::Fonction { arite } => format!("fonction/{arite}"),
        };
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "{:>3}  {:<largeur$}  {:<10} [{}]",
            e.position,
            e.element,
            nature,
            e.pile.join(", "),
        ));
    }
    out
}
