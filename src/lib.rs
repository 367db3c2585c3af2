//! Calculatrice RPN — noyau générique
//!
//! Évalue des équations en notation polonaise inversée (`"5 1 2 + 4 * + 3 -"`)
//! sur un type numérique au choix (rationnel exact, f64, entier arbitraire),
//! avec une table de fonctions extensible.
//!
//! ```
//! use calculatrice_rpn::noyau::{ContexteRationnel, ErreurCalcul};
//!
//! let ctx = ContexteRationnel::new();
//! assert_eq!(ctx.evaluer("1/2 1/3 +").unwrap().to_string(), "5/6");
//!
//! let e = ctx.evaluer("12 * 2").unwrap_err();
//! assert_eq!(e, ErreurCalcul::ArgumentsManquants { element: "*".into(), position: 2 });
//! ```

pub mod noyau;
