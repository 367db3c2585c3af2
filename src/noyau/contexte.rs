// src/noyau/contexte.rs
//
// Contexte d’évaluation : registre des fonctions + réglages du type numérique.
//
// Construction:
// - + - * / (arité 2), branchés sur l’arithmétique vérifiée du type
// - puis la table de fonctions/constantes fournie par le type
//
// Concurrence : `evaluer` prend &self (lecture seule, partageable entre threads),
// `enregistrer` prend &mut self (le borrow checker sérialise les écritures).

use std::collections::BTreeSet;
use std::fmt;

use super::eval::{self, Demarche};
use super::erreur::ErreurCalcul;
use super::nombre::{EchecArithmetique, LitteralInvalide, Nombre};
use super::registre::{Fonction, Registre};

pub struct Contexte<T: Nombre> {
    reglages: T::Reglages,
    registre: Registre<T>,
}

impl<T: Nombre> Contexte<T> {
    /// Contexte avec les réglages par défaut du type.
    pub fn new() -> Self {
        Self::avec_reglages(T::Reglages::default())
    }

    pub fn avec_reglages(reglages: T::Reglages) -> Self {
        let mut registre = Registre::new();

        registre.enregistrer("+", Fonction::binaire(T::additionner));
        registre.enregistrer("-", Fonction::binaire(T::soustraire));
        registre.enregistrer("*", Fonction::binaire(T::multiplier));
        registre.enregistrer("/", Fonction::binaire(T::diviser));

        for (nom, fonction) in T::table_fonctions(&reglages) {
            registre.enregistrer(nom, fonction);
        }

        log::debug!(
            "contexte {}: {} fonctions enregistrées ({:?})",
            T::NOM,
            registre.len(),
            reglages
        );

        Self { reglages, registre }
    }

    /// Enregistre (ou remplace) une fonction. Chaînable.
    ///
    /// ```
    /// use calculatrice_rpn::noyau::{Contexte, EchecArithmetique};
    ///
    /// let mut ctx = Contexte::<f64>::new();
    /// ctx.enregistrer("moy", 2, |args: &[f64]| Ok((args[0] + args[1]) / 2.0))
    ///     .enregistrer("dix", 0, |_: &[f64]| Ok::<_, EchecArithmetique>(10.0));
    /// assert_eq!(ctx.evaluer("dix 4 moy").unwrap(), 7.0);
    /// ```
    pub fn enregistrer<F>(&mut self, nom: impl Into<String>, arite: usize, operation: F) -> &mut Self
    where
        F: Fn(&[T]) -> Result<T, EchecArithmetique> + Send + Sync + 'static,
    {
        self.enregistrer_fonction(nom, Fonction::new(arite, operation))
    }

    /// Enregistre une `Fonction` déjà construite (ex: `Fonction::unaire`).
    pub fn enregistrer_fonction(&mut self, nom: impl Into<String>, fonction: Fonction<T>) -> &mut Self {
        self.registre.enregistrer(nom, fonction);
        self
    }

    pub fn chercher(&self, nom: &str) -> Option<&Fonction<T>> {
        self.registre.chercher(nom)
    }

    pub fn noms(&self) -> BTreeSet<String> {
        self.registre.noms()
    }

    pub fn reglages(&self) -> &T::Reglages {
        &self.reglages
    }

    pub fn lire_litteral(&self, texte: &str) -> Result<T, LitteralInvalide> {
        T::lire_litteral(texte, &self.reglages)
    }

    pub fn evaluer(&self, equation: &str) -> Result<T, ErreurCalcul> {
        eval::evaluer(equation, self)
    }

    pub fn evaluer_avec_demarche(&self, equation: &str) -> Result<(T, Demarche), ErreurCalcul> {
        eval::evaluer_avec_demarche(equation, self)
    }
}

impl<T: Nombre> Default for Contexte<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Nombre> Clone for Contexte<T> {
    fn clone(&self) -> Self {
        Self {
            reglages: self.reglages.clone(),
            registre: self.registre.clone(),
        }
    }
}

impl<T: Nombre> fmt::Debug for Contexte<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contexte")
            .field("nombre", &T::NOM)
            .field("reglages", &self.reglages)
            .field("registre", &self.registre)
            .finish()
    }
}
