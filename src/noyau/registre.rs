// src/noyau/registre.rs
//
// Registre des fonctions : nom -> (arité, opération).
// Opérateurs, fonctions et constantes partagent le même mécanisme : seule l’arité change
// (une constante a l’arité 0 et ignore sa liste d’arguments vide).
//
// Règles:
// - un nom = une entrée ; ré-enregistrer remplace sans erreur ni fusion
// - pas de suppression
// - l’arité est un usize : une arité négative n’est pas représentable

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use super::nombre::EchecArithmetique;

/// Opération partagée (Send + Sync : un contexte peut servir plusieurs threads en lecture).
pub type Operation<T> = Arc<dyn Fn(&[T]) -> Result<T, EchecArithmetique> + Send + Sync>;

/// Fonction enregistrée.
pub struct Fonction<T> {
    arite: usize,
    operation: Operation<T>,
}

impl<T> Clone for Fonction<T> {
    fn clone(&self) -> Self {
        Self {
            arite: self.arite,
            operation: Arc::clone(&self.operation),
        }
    }
}

impl<T> fmt::Debug for Fonction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fonction")
            .field("arite", &self.arite)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Fonction<T> {
    /// `operation` reçoit exactement `arite` arguments, dans l’ordre de l’équation.
    pub fn new<F>(arite: usize, operation: F) -> Self
    where
        F: Fn(&[T]) -> Result<T, EchecArithmetique> + Send + Sync + 'static,
    {
        Self {
            arite,
            operation: Arc::new(operation),
        }
    }

    /// Constante (arité 0).
    pub fn constante(valeur: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(0, move |_| Ok(valeur.clone()))
    }

    pub fn unaire<F>(f: F) -> Self
    where
        F: Fn(&T) -> Result<T, EchecArithmetique> + Send + Sync + 'static,
    {
        Self::new(1, move |args| f(&args[0]))
    }

    pub fn binaire<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Result<T, EchecArithmetique> + Send + Sync + 'static,
    {
        Self::new(2, move |args| f(&args[0], &args[1]))
    }
}

impl<T> Fonction<T> {
    pub fn arite(&self) -> usize {
        self.arite
    }

    /// Applique l’opération. L’appelant garantit `args.len() == arite`.
    pub fn appliquer(&self, args: &[T]) -> Result<T, EchecArithmetique> {
        debug_assert_eq!(args.len(), self.arite);
        (self.operation)(args)
    }
}

/// Table nom -> fonction.
pub struct Registre<T> {
    table: HashMap<String, Fonction<T>>,
}

impl<T> Default for Registre<T> {
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<T> Clone for Registre<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T> fmt::Debug for Registre<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registre")
            .field("noms", &self.noms())
            .finish()
    }
}

impl<T> Registre<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère ou remplace. Retourne l’ancienne entrée si le nom était déjà pris.
    pub fn enregistrer(&mut self, nom: impl Into<String>, fonction: Fonction<T>) -> Option<Fonction<T>> {
        let nom = nom.into();
        log::debug!("registre: {nom:?} (arité {})", fonction.arite());
        let ancienne = self.table.insert(nom, fonction);
        if ancienne.is_some() {
            log::debug!("registre: entrée remplacée");
        }
        ancienne
    }

    pub fn chercher(&self, nom: &str) -> Option<&Fonction<T>> {
        self.table.get(nom)
    }

    /// Instantané des noms (ordre trié, sans signification).
    pub fn noms(&self) -> BTreeSet<String> {
        self.table.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
