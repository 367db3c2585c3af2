// src/noyau/jetons.rs
//
// Découpage d’une équation RPN en jetons.
// - séparateur : une ou plusieurs espaces (au sens Unicode)
// - position : rang 1-based du jeton parmi les morceaux non vides (pas un offset caractère)
// - équation vide / blanche : erreur AVANT tout découpage

use super::erreur::ErreurCalcul;

/// Jeton : texte emprunté à l’équation + rang 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jeton<'a> {
    pub texte: &'a str,
    pub position: usize,
}

/// Découpe paresseusement `equation`.
///
/// Exemple:
///   "  5 1\t2  + " -> [("5",1), ("1",2), ("2",3), ("+",4)]
pub fn decouper(equation: &str) -> Result<impl Iterator<Item = Jeton<'_>>, ErreurCalcul> {
    let s = equation.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::EquationVide);
    }

    Ok(s
        .split_whitespace()
        .enumerate()
        .map(|(i, texte)| Jeton {
            texte,
            position: i + 1,
        }))
}
