// src/main.rs
//
// Calculatrice RPN — point d’entrée CLI
// -------------------------------------
// But:
// - choisir le backend numérique (rationnel exact / flottant / entier)
// - évaluer les équations passées en argument, sinon une par ligne sur stdin
// - rendre les erreurs du noyau (genre + champs) ; le noyau, lui, ne fait aucun affichage
//
// Journalisation : RUST_LOG=debug (ou trace pour suivre chaque jeton).

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use num_rational::BigRational;

use calculatrice_rpn::noyau::format::format_demarche;
use calculatrice_rpn::noyau::lecture::rationnel_en_decimal;
use calculatrice_rpn::noyau::rationnel::DIGITS_DEFAUT;
use calculatrice_rpn::noyau::{
    Contexte, ContexteEntier, ContexteFlottant, ContexteRationnel, ErreurCalcul, Nombre,
    ReglagesRationnel,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Rationnels exacts (√ et π tronqués à --digits)
    Rationnel,
    /// Flottants f64
    Flottant,
    /// Entiers arbitraires
    Entier,
}

#[derive(Parser, Debug)]
#[command(name = "calculatrice-rpn", version, about = "Évalue des équations en notation polonaise inversée")]
struct Args {
    /// Équations (ex: "5 1 2 + 4 * + 3 -"). Sans équation : lecture ligne à ligne sur stdin.
    equations: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = Backend::Rationnel)]
    backend: Backend,

    /// Précision (décimales) du backend rationnel, bornée à 200.
    #[arg(short, long, env = "CALC_RPN_DIGITS", default_value_t = DIGITS_DEFAUT)]
    digits: usize,

    /// Affiche les résultats rationnels en décimal tronqué à --digits.
    #[arg(long)]
    decimal: bool,

    /// Affiche la pile après chaque jeton.
    #[arg(long)]
    demarche: bool,

    /// Liste les opérateurs, fonctions et constantes du backend puis quitte.
    #[arg(long)]
    liste: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("{args:?}");

    let tout_ok = match args.backend {
        Backend::Rationnel => {
            let reglages = ReglagesRationnel::new(args.digits);
            if reglages.digits() != args.digits {
                log::warn!("précision bornée à {} décimales", reglages.digits());
            }
            let rendu = rendu_rationnel(args.decimal, reglages.digits());
            let ctx = ContexteRationnel::avec_reglages(reglages);
            executer(&ctx, &args, rendu)?
        }
        Backend::Flottant => executer(&ContexteFlottant::new(), &args, Nombre::rendre)?,
        Backend::Entier => executer(&ContexteEntier::new(), &args, Nombre::rendre)?,
    };

    Ok(if tout_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Rendu d’un résultat rationnel : fraction réduite, ou décimal tronqué (`--decimal`).
fn rendu_rationnel(decimal: bool, digits: usize) -> impl Fn(&BigRational) -> String {
    move |r: &BigRational| {
        if decimal {
            rationnel_en_decimal(r, digits)
        } else {
            r.rendre()
        }
    }
}

/// Évalue toutes les équations demandées. Retourne false si au moins une a échoué.
fn executer<T, R>(ctx: &Contexte<T>, args: &Args, rendu: R) -> Result<bool>
where
    T: Nombre,
    R: Fn(&T) -> String,
{
    if args.liste {
        for nom in ctx.noms() {
            let arite = ctx.chercher(&nom).map(|f| f.arite()).unwrap_or_default();
            println!("{nom}\t{arite}");
        }
        return Ok(true);
    }

    let mut tout_ok = true;

    if args.equations.is_empty() {
        for ligne in io::stdin().lock().lines() {
            let ligne = ligne.context("lecture de l’entrée standard")?;
            // ligne blanche : on passe (pas d’erreur EquationVide en mode flux)
            if ligne.trim().is_empty() {
                continue;
            }
            tout_ok &= evaluer_une(ctx, &ligne, args.demarche, &rendu);
        }
    } else {
        for eq in &args.equations {
            tout_ok &= evaluer_une(ctx, eq, args.demarche, &rendu);
        }
    }

    Ok(tout_ok)
}

fn evaluer_une<T, R>(ctx: &Contexte<T>, equation: &str, demarche: bool, rendu: &R) -> bool
where
    T: Nombre,
    R: Fn(&T) -> String,
{
    let resultat = if demarche {
        ctx.evaluer_avec_demarche(equation).map(|(v, d)| {
            println!("{}", format_demarche(&d));
            v
        })
    } else {
        ctx.evaluer(equation)
    };

    match resultat {
        Ok(v) => {
            println!("{}", rendu(&v));
            true
        }
        Err(e) => {
            eprintln!("{}", message_erreur(&e));
            false
        }
    }
}

/// Rendu utilisateur d’une erreur du noyau, à partir de son genre et de ses champs.
fn message_erreur(e: &ErreurCalcul) -> String {
    match e {
        ErreurCalcul::EquationVide => "erreur: équation vide".to_string(),
        ErreurCalcul::ElementInvalide { element, position } => {
            format!("erreur: « {element} » (position {position}) n’est ni un nombre ni une fonction connue")
        }
        ErreurCalcul::ArgumentsManquants { element, position } => {
            format!("erreur: pas assez de valeurs sur la pile pour « {element} » (position {position})")
        }
        ErreurCalcul::EchecArithmetique(echec) => format!("erreur de calcul: {echec}"),
        ErreurCalcul::EquationInvalide { pile } => format!(
            "erreur: il devrait rester une seule valeur, pile finale [{}]",
            pile.join(", ")
        ),
    }
}
