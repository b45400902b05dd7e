//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> analyse (descente récursive) -> marche d'arbre (liste blanche)
//!        -> contrôle de finitude -> f64
//!
//! La marche est post-ordre, récursive, sans mutation ni état partagé.
//! La répartition passe par une table explicite d'opérations admises :
//! toute forme hors table est refusée (`NonSupportee`), pas exécutée.

use super::analyse::analyser;
use super::erreurs::{ErreurCalc, ErreurEval, ErreurParse};
use super::expr::{Expr, OpBin, OpUn};
use super::jetons::tokenize;

/// Table des opérations binaires admises.
///
/// `None` signifierait "hors liste blanche" ; avec l'enum fermé actuel, toutes
/// les entrées sont `Some`, mais la forme Option garde la répartition totale :
/// ajouter un variant à `OpBin` force une décision ici, jamais une exécution
/// par défaut.
fn op_binaire(op: OpBin) -> Option<fn(f64, f64) -> f64> {
    match op {
        OpBin::Add => Some(|a, b| a + b),
        OpBin::Sub => Some(|a, b| a - b),
        OpBin::Mul => Some(|a, b| a * b),
        OpBin::Div => Some(|a, b| a / b),
        OpBin::Pow => Some(f64::powf),
    }
}

/// Table des opérations unaires admises.
fn op_unaire(op: OpUn) -> Option<fn(f64) -> f64> {
    match op {
        OpUn::Neg => Some(|x| -x),
    }
}

/// Marche post-ordre de l'arbre.
///
/// Politique division par zéro : si un nœud Div produit une valeur non finie
/// (x/0, 0/0), on signale `DivisionParZero` au lieu de laisser inf/NaN
/// remonter jusqu'à l'affichage.
pub fn eval_node(e: &Expr) -> Result<f64, ErreurEval> {
    match e {
        Expr::Nombre(v) => Ok(*v),

        Expr::Binaire { op, gauche, droite } => {
            let f = op_binaire(*op).ok_or(ErreurEval::NonSupportee)?;
            let g = eval_node(gauche)?;
            let d = eval_node(droite)?;
            let v = f(g, d);

            if matches!(op, OpBin::Div) && !v.is_finite() {
                return Err(ErreurEval::DivisionParZero);
            }

            Ok(v)
        }

        Expr::Unaire { op, operande } => {
            let f = op_unaire(*op).ok_or(ErreurEval::NonSupportee)?;
            Ok(f(eval_node(operande)?))
        }
    }
}

/// API publique : texte -> résultat.
///
/// Jetons et AST sont construits pour cet appel et jetés ensuite — aucun état
/// ne survit d'un appel à l'autre. Un résultat final non fini (ex. 10^10^10)
/// est refusé : l'affichage ne montre jamais inf/NaN.
pub fn eval_expression(texte: &str) -> Result<f64, ErreurCalc> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurParse::EntreeVide.into());
    }

    let jetons = tokenize(s)?;
    let arbre = analyser(&jetons)?;
    let v = eval_node(&arbre)?;

    if !v.is_finite() {
        return Err(ErreurEval::ResultatNonFini.into());
    }

    Ok(v)
}
