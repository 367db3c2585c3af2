//! Noyau — taxonomie des erreurs d’évaluation.
//!
//! Chaque erreur arrête l’évaluation (pas de résultat partiel, pas de reprise).
//! Le texte `Display` est un rendu par défaut ; une couche de présentation qui veut
//! localiser doit s’appuyer sur `genre()` / `code()` et sur les champs, pas sur le message.

use thiserror::Error;

use super::nombre::EchecArithmetique;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Entrée vide ou composée uniquement d’espaces.
    #[error("équation vide")]
    EquationVide,

    /// Ni littéral valide, ni nom enregistré.
    #[error("élément invalide {element:?} en position {position}")]
    ElementInvalide { element: String, position: usize },

    /// La pile contient moins de valeurs que l’arité de la fonction.
    #[error("arguments manquants pour {element:?} en position {position}")]
    ArgumentsManquants { element: String, position: usize },

    /// Échec signalé par l’opération elle-même (message d’origine, sans retouche).
    #[error(transparent)]
    EchecArithmetique(#[from] EchecArithmetique),

    /// La pile finale ne contient pas exactement une valeur.
    /// `pile` est rendue du bas vers le haut (première valeur empilée en tête).
    #[error("équation invalide, pile finale: [{}]", .pile.join(", "))]
    EquationInvalide { pile: Vec<String> },
}

/// Genre d’erreur, stable, pour les couches qui localisent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenreErreur {
    EquationVide,
    ElementInvalide,
    ArgumentsManquants,
    EchecArithmetique,
    EquationInvalide,
}

impl GenreErreur {
    pub fn code(self) -> &'static str {
        match self {
            GenreErreur::EquationVide => "equation-vide",
            GenreErreur::ElementInvalide => "element-invalide",
            GenreErreur::ArgumentsManquants => "arguments-manquants",
            GenreErreur::EchecArithmetique => "echec-arithmetique",
            GenreErreur::EquationInvalide => "equation-invalide",
        }
    }
}

impl ErreurCalcul {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalcul::EquationVide => GenreErreur::EquationVide,
            ErreurCalcul::ElementInvalide { .. } => GenreErreur::ElementInvalide,
            ErreurCalcul::ArgumentsManquants { .. } => GenreErreur::ArgumentsManquants,
            ErreurCalcul::EchecArithmetique(_) => GenreErreur::EchecArithmetique,
            ErreurCalcul::EquationInvalide { .. } => GenreErreur::EquationInvalide,
        }
    }

    pub fn code(&self) -> &'static str {
        self.genre().code()
    }

    /// Texte du jeton fautif (si l’erreur en porte un).
    pub fn element(&self) -> Option<&str> {
        match self {
            ErreurCalcul::ElementInvalide { element, .. }
            | ErreurCalcul::ArgumentsManquants { element, .. } => Some(element.as_str()),
            _ => None,
        }
    }

    /// Position 1-based du jeton fautif (si l’erreur en porte une).
    pub fn position(&self) -> Option<usize> {
        match self {
            ErreurCalcul::ElementInvalide { position, .. }
            | ErreurCalcul::ArgumentsManquants { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Pile résiduelle rendue (EquationInvalide seulement).
    pub fn pile(&self) -> Option<&[String]> {
        match self {
            ErreurCalcul::EquationInvalide { pile } => Some(pile.as_slice()),
            _ => None,
        }
    }

    pub(crate) fn element_invalide(element: &str, position: usize) -> Self {
        ErreurCalcul::ElementInvalide {
            element: element.to_string(),
            position,
        }
    }

    pub(crate) fn arguments_manquants(element: &str, position: usize) -> Self {
        ErreurCalcul::ArgumentsManquants {
            element: element.to_string(),
            position,
        }
    }
}
