//! Noyau — évaluation RPN (machine à pile).
//!
//! Pour chaque jeton, dans l’ordre :
//! - littéral d’abord (toujours tenté en premier, même si le nom est enregistré) => empiler
//! - sinon fonction : dépiler `arite` valeurs (ordre de l’équation), appliquer, empiler
//!
//! À la fin, la pile doit contenir exactement une valeur.
//! Pas de retour arrière : un jeton consommé n’est jamais revisité.

use super::contexte::Contexte;
use super::erreur::ErreurCalcul;
use super::format::format_pile;
use super::jetons::{decouper, Jeton};
use super::nombre::Nombre;

/// Ce qu’un jeton a été pour le moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nature {
    Litteral,
    Fonction { arite: usize },
}

/// Une ligne de démarche : le jeton et l’état de la pile APRÈS son effet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    pub element: String,
    pub position: usize,
    pub nature: Nature,
    pub pile: Vec<String>,
}

/// Démarche complète d’une évaluation réussie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    pub etapes: Vec<Etape>,
}

/// API publique : évalue `equation` dans `contexte`.
pub fn evaluer<T: Nombre>(equation: &str, contexte: &Contexte<T>) -> Result<T, ErreurCalcul> {
    reduire(equation, contexte, |_, _, _| {})
}

/// Comme `evaluer`, en gardant la pile après chaque jeton.
pub fn evaluer_avec_demarche<T: Nombre>(
    equation: &str,
    contexte: &Contexte<T>,
) -> Result<(T, Demarche), ErreurCalcul> {
    let mut demarche = Demarche::default();

    let valeur = reduire(equation, contexte, |jeton, nature, pile| {
        demarche.etapes.push(Etape {
            element: jeton.texte.to_string(),
            position: jeton.position,
            nature,
            pile: format_pile(pile),
        });
    })?;

    Ok((valeur, demarche))
}

/// Réduction. `observer` est appelé après l’effet de chaque jeton.
fn reduire<T, O>(equation: &str, contexte: &Contexte<T>, mut observer: O) -> Result<T, ErreurCalcul>
where
    T: Nombre,
    O: FnMut(&Jeton<'_>, Nature, &[T]),
{
    let jetons = decouper(equation)?;

    let mut pile: Vec<T> = Vec::new();

    for jeton in jetons {
        let nature = match contexte.lire_litteral(jeton.texte) {
            Ok(valeur) => {
                log::trace!("{}@{}: littéral {}", jeton.texte, jeton.position, valeur.rendre());
                pile.push(valeur);
                Nature::Litteral
            }
            Err(_) => {
                let fonction = contexte
                    .chercher(jeton.texte)
                    .ok_or_else(|| ErreurCalcul::element_invalide(jeton.texte, jeton.position))?;

                let arite = fonction.arite();
                if pile.len() < arite {
                    return Err(ErreurCalcul::arguments_manquants(jeton.texte, jeton.position));
                }

                // split_off garde l’ordre d’empilement : premier argument = le plus profond
                let args = pile.split_off(pile.len() - arite);
                let resultat = fonction.appliquer(&args)?;

                log::trace!(
                    "{}@{}: fonction/{arite} -> {}",
                    jeton.texte,
                    jeton.position,
                    resultat.rendre()
                );
                pile.push(resultat);
                Nature::Fonction { arite }
            }
        };

        observer(&jeton, nature, &pile);
    }

    if pile.len() == 1 {
        if let Some(valeur) = pile.pop() {
            log::debug!("{equation:?} = {}", valeur.rendre());
            return Ok(valeur);
        }
    }

    Err(ErreurCalcul::EquationInvalide {
        pile: format_pile(&pile),
    })
}
