//! Noyau RPN générique
//!
//! Organisation interne :
//! - nombre.rs    : contrat numérique (littéral, + - * /, table de fonctions, rendu)
//! - registre.rs  : nom -> (arité, opération)
//! - jetons.rs    : découpage en jetons positionnés
//! - erreur.rs    : taxonomie des erreurs
//! - contexte.rs  : registre + réglages du type
//! - eval.rs      : machine à pile (+ démarche)
//! - format.rs    : rendu pile / démarche / rationnels
//! - lecture.rs   : décimal tronqué, π (cache), √ approchée
//! - rationnel.rs / flottant.rs / entier.rs : backends

pub mod contexte;
pub mod entier;
pub mod erreur;
pub mod eval;
pub mod flottant;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod nombre;
pub mod rationnel;
pub mod registre;

#[cfg(test)]
mod tests_rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use contexte::Contexte;
pub use erreur::{ErreurCalcul, GenreErreur};
pub use eval::{evaluer, evaluer_avec_demarche, Demarche, Etape, Nature};
pub use nombre::{EchecArithmetique, LitteralInvalide, Nombre};
pub use rationnel::ReglagesRationnel;
pub use registre::{Fonction, Registre};

pub type ContexteRationnel = Contexte<num_rational::BigRational>;
pub type ContexteFlottant = Contexte<f64>;
pub type ContexteEntier = Contexte<num_bigint::BigInt>;
