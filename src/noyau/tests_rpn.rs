//! Tests de scénario : propriétés observables du noyau, sur les trois backends.
//!
//! Ordre de la pile résiduelle : du bas vers le haut (première valeur survivante en tête).

use num_bigint::BigInt;
use num_rational::BigRational;

use super::{Contexte, ContexteEntier, ContexteFlottant, ContexteRationnel, ErreurCalcul, GenreErreur};

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn err<T: super::Nombre>(ctx: &Contexte<T>, eq: &str) -> ErreurCalcul {
    match ctx.evaluer(eq) {
        Ok(v) => panic!("eq={eq:?} devait échouer, obtenu {}", v.rendre()),
        Err(e) => e,
    }
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn exemple_14_sur_les_trois_backends() {
    let eq = "5 1 2 + 4 * + 3 -";
    assert_eq!(ContexteRationnel::new().evaluer(eq), Ok(rat(14)));
    assert_eq!(ContexteFlottant::new().evaluer(eq), Ok(14.0));
    assert_eq!(ContexteEntier::new().evaluer(eq), Ok(BigInt::from(14)));
}

#[test]
fn pile_residuelle_40_3() {
    let e = err(&ContexteRationnel::new(), "12 2 3 4 * 10 5 / + * + 3");
    assert_eq!(
        e,
        ErreurCalcul::EquationInvalide {
            pile: vec!["40".into(), "3".into()]
        }
    );
    assert_eq!(e.pile(), Some(&["40".to_string(), "3".to_string()][..]));
}

#[test]
fn arguments_manquants_en_position_2() {
    let e = err(&ContexteRationnel::new(), "12 * 2 3 4 * 10 5 / + * +");
    assert_eq!(
        e,
        ErreurCalcul::ArgumentsManquants {
            element: "*".into(),
            position: 2
        }
    );
}

#[test]
fn element_invalide_en_position_4() {
    let e = err(&ContexteRationnel::new(), "12 2 3 sinx 4 * 10 5 / + * +");
    assert_eq!(
        e,
        ErreurCalcul::ElementInvalide {
            element: "sinx".into(),
            position: 4
        }
    );
}

#[test]
fn equation_vide_ou_blanche() {
    let ctx = ContexteFlottant::new();
    assert_eq!(err(&ctx, ""), ErreurCalcul::EquationVide);
    assert_eq!(err(&ctx, "   "), ErreurCalcul::EquationVide);
    assert_eq!(err(&ctx, "\t \n"), ErreurCalcul::EquationVide);
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn un_seul_litteral_rend_sa_valeur_sans_toucher_au_registre() {
    let ctx = ContexteRationnel::new();
    let avant = ctx.noms();

    for (eq, attendu) in [("7", rat(7)), ("  -3 ", rat(-3)), ("0", rat(0))] {
        assert_eq!(ctx.evaluer(eq), Ok(attendu), "eq={eq:?}");
    }
    assert_eq!(ctx.noms(), avant);
}

#[test]
fn idempotence() {
    let ctx = ContexteRationnel::new();
    for eq in ["1/3 2/7 + 5 *", "2 sqrt", "pi 2 /", "1 0 /", "1 2", "x"] {
        assert_eq!(ctx.evaluer(eq), ctx.evaluer(eq), "eq={eq:?}");
    }
}

#[test]
fn positions_sont_des_rangs_de_jetons() {
    // espaces multiples : la position ne dépend pas des offsets
    let e = err(&ContexteFlottant::new(), "   1      2     +    nope ");
    assert_eq!(e.element(), Some("nope"));
    assert_eq!(e.position(), Some(4));
}

#[test]
fn manque_d_arguments_pour_une_fonction_unaire() {
    let e = err(&ContexteFlottant::new(), "sqrt");
    assert_eq!(e.genre(), GenreErreur::ArgumentsManquants);
    assert_eq!(e.position(), Some(1));
}

#[test]
fn trop_de_valeurs_apres_une_constante() {
    let e = err(&ContexteFlottant::new(), "1 pi");
    assert_eq!(e.genre(), GenreErreur::EquationInvalide);
    assert_eq!(e.pile().map(|p| p.len()), Some(2));
    assert_eq!(e.pile().map(|p| p[0].as_str()), Some("1"));
}

/* ------------------------ Extension ------------------------ */

#[test]
fn surcharge_d_un_operateur_de_base() {
    let mut ctx = ContexteRationnel::new();
    let avant = ctx.evaluer("6 3 /");
    assert_eq!(avant, Ok(rat(2)));

    ctx.enregistrer("/", 2, |a| Ok(&a[0] * &a[1]));

    assert_eq!(ctx.evaluer("6 3 /"), Ok(rat(18)));
    // le résultat déjà obtenu ne bouge pas
    assert_eq!(avant, Ok(rat(2)));
}

#[test]
fn fonction_utilisateur_arite_3() {
    let mut ctx = ContexteEntier::new();
    ctx.enregistrer("mad", 3, |a| Ok(&a[0] * &a[1] + &a[2]));

    assert_eq!(ctx.evaluer("2 3 4 mad"), Ok(BigInt::from(10)));
    assert_eq!(
        err(&ctx, "2 3 mad"),
        ErreurCalcul::ArgumentsManquants {
            element: "mad".into(),
            position: 3
        }
    );
}

#[test]
fn division_par_zero_garde_son_message() {
    for e in [
        err(&ContexteRationnel::new(), "1 0 /"),
        err(&ContexteFlottant::new(), "1 0 /"),
        err(&ContexteEntier::new(), "1 0 /"),
    ] {
        assert_eq!(e.genre(), GenreErreur::EchecArithmetique);
        assert_eq!(e.to_string(), "division par zéro");
    }
}

/* ------------------------ Concurrence (lecture seule) ------------------------ */

#[test]
fn evaluations_concurrentes_sur_un_meme_contexte() {
    let ctx = ContexteRationnel::new();

    std::thread::scope(|s| {
        let handles: Vec<_> = (1..=8)
            .map(|i| {
                let ctx = &ctx;
                s.spawn(move || ctx.evaluer(&format!("{i} {i} * 1 +")))
            })
            .collect();

        for (i, h) in (1..=8).zip(handles) {
            let v = h.join().unwrap_or_else(|_| panic!("thread {i} a paniqué"));
            assert_eq!(v, Ok(rat(i * i + 1)));
        }
    });
}
