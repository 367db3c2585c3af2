//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - équations bien formées : seule la division par zéro est une erreur acceptable
//! - soupe de jetons : jamais de panic, diagnostics cohérents avec l’équation

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::{ContexteRationnel, ErreurCalcul, GenreErreur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’équations (bornée) ------------------------ */

fn gen_litteral(rng: &mut Rng) -> String {
    // inclut 0 : la division par zéro doit arriver via "/"
    let a = rng.pick(8) as i64 - 2;
    let b = rng.pick(6) + 1;
    match rng.pick(3) {
        0 => format!("{a}/{b}"),
        1 => format!("{a}.{b}"),
        _ => format!("{a}"),
    }
}

/// Équation RPN bien formée (arbre aléatoire émis en postfixé).
fn gen_rpn(rng: &mut Rng, depth: usize, out: &mut Vec<String>) {
    if depth == 0 || rng.pick(4) == 0 {
        out.push(gen_litteral(rng));
        return;
    }

    match rng.pick(7) {
        0 => {
            gen_rpn(rng, depth - 1, out);
            out.push(if rng.coin() { "abs" } else { "neg" }.to_string());
        }
        1 => out.push("pi".to_string()),
        _ => {
            gen_rpn(rng, depth - 1, out);
            gen_rpn(rng, depth - 1, out);
            let op = ["+", "-", "*", "/"][rng.pick(4) as usize];
            out.push(op.to_string());
        }
    }
}

/// Soupe de jetons : littéraux, opérateurs, noms inconnus, mélangés sans structure.
fn gen_soupe(rng: &mut Rng) -> Vec<String> {
    let n = rng.pick(12) as usize + 1;
    (0..n)
        .map(|_| match rng.pick(6) {
            0 | 1 => gen_litteral(rng),
            2 => ["+", "-", "*", "/"][rng.pick(4) as usize].to_string(),
            3 => ["sqrt", "inv", "pi", "^"][rng.pick(4) as usize].to_string(),
            4 => ["x", "sinx", "1/0", "--"][rng.pick(4) as usize].to_string(),
            _ => "1".to_string(),
        })
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_equations_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let ctx = ContexteRationnel::new();
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let mut jetons = Vec::new();
        gen_rpn(&mut rng, 5, &mut jetons);
        let eq = jetons.join(" ");

        match ctx.evaluer(&eq) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert_eq!(e.to_string(), "division par zéro", "eq={eq:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_soupe_diagnostics_coherents() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let ctx = ContexteRationnel::new();
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut genres = std::collections::HashSet::new();

    for _ in 0..300 {
        budget(t0, max);

        let jetons = gen_soupe(&mut rng);
        let eq = jetons.join("  ");

        let Err(e) = ctx.evaluer(&eq) else {
            continue;
        };
        genres.insert(e.genre());

        // position => le jeton à ce rang est bien l’élément fautif
        if let (Some(el), Some(pos)) = (e.element(), e.position()) {
            assert!(pos >= 1 && pos <= jetons.len(), "eq={eq:?} pos={pos}");
            assert_eq!(jetons[pos - 1], el, "eq={eq:?}");
        }

        if let ErreurCalcul::EquationInvalide { pile } = &e {
            assert_ne!(pile.len(), 1, "eq={eq:?}");
        }
    }

    assert!(genres.contains(&GenreErreur::ElementInvalide));
    assert!(genres.contains(&GenreErreur::ArgumentsManquants));
    assert!(genres.contains(&GenreErreur::EquationInvalide));
}

#[test]
fn fuzz_safe_determinisme() {
    let ctx = ContexteRationnel::new();

    let tirage = |seed: u64| {
        let mut rng = Rng::new(seed);
        (0..40)
            .map(|_| {
                let eq = gen_soupe(&mut rng).join(" ");
                ctx.evaluer(&eq)
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(tirage(42), tirage(42));
}

#[test]
fn fuzz_safe_pile_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 5000 littéraux empilés puis 4999 additions : pile profonde, aucune récursion
    let n = 5000usize;
    let mut eq = vec!["1/2"; n];
    eq.extend(std::iter::repeat("+").take(n - 1));

    let ctx = ContexteRationnel::new();
    let v = ctx.evaluer(&eq.join(" ")).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, BigRational::from_integer(BigInt::from(2500)));
}
