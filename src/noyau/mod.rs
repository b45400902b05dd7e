//! Noyau arithmétique
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation
//! - expr.rs      : AST fermé (Nombre / Binaire / Unaire)
//! - analyse.rs   : descente récursive -> Expr
//! - eval.rs      : marche d'arbre à liste blanche + pipeline complet
//! - format.rs    : affichage du résultat (aller-retour garanti)
//! - fonctions.rs : transformations unaires du pavé (√, x², %, trig degrés)
//! - erreurs.rs   : taxonomie (parse / éval / fonctions)

pub mod analyse;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;


#[cfg(test)]
mod tests_surete;

// API publique minimale
pub use eval::eval_expression;
pub use fonctions::{appliquer, valeur_affichage, Transforme};
pub use format::format_nombre;
