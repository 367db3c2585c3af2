// src/noyau/nombre.rs
//
// Contrat numérique : ce qu’un type doit savoir faire pour être branché sur le noyau RPN.
// - lire un littéral (sans effet de bord, échec = signal, jamais panic)
// - + - * / vérifiés (échec arithmétique distinguable)
// - fournir sa table de fonctions/constantes (statique, pas d’introspection)
// - se rendre en texte (utilisé tel quel dans les diagnostics)

use std::fmt;

use thiserror::Error;

use super::registre::Fonction;

/// Exposant max accepté par `^` (hors bases 0, 1 et -1) : garde-fou anti-gel.
pub const EXPOSANT_PUISSANCE_MAX: u32 = 4096;

/// Échec du domaine arithmétique (division par zéro, racine d’un négatif…).
/// Le message est propagé tel quel jusqu’à l’appelant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EchecArithmetique {
    message: String,
}

impl EchecArithmetique {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Le texte n’est pas un littéral valide pour le type : le moteur essaiera un nom de fonction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("littéral invalide: {texte:?}")]
pub struct LitteralInvalide {
    pub texte: String,
}

impl LitteralInvalide {
    pub fn new(texte: &str) -> Self {
        Self {
            texte: texte.to_string(),
        }
    }
}

/// Contrat numérique.
///
/// `Reglages` porte la configuration propre au type (ex: précision en digits pour les
/// rationnels). Il vit dans le contexte, pas dans les valeurs.
pub trait Nombre: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    type Reglages: Clone + fmt::Debug + Default + Send + Sync + 'static;

    /// Nom court du backend (CLI, journaux).
    const NOM: &'static str;

    fn lire_litteral(texte: &str, reglages: &Self::Reglages) -> Result<Self, LitteralInvalide>;

    fn additionner(&self, autre: &Self) -> Result<Self, EchecArithmetique>;
    fn soustraire(&self, autre: &Self) -> Result<Self, EchecArithmetique>;
    fn multiplier(&self, autre: &Self) -> Result<Self, EchecArithmetique>;
    fn diviser(&self, autre: &Self) -> Result<Self, EchecArithmetique>;

    /// Fonctions et constantes fournies par le backend, enregistrées à la construction du contexte.
    fn table_fonctions(reglages: &Self::Reglages) -> Vec<(&'static str, Fonction<Self>)>;

    /// Rendu texte pour les diagnostics : la convention d’affichage du type, sans retouche.
    fn rendre(&self) -> String {
        self.to_string()
    }
}
