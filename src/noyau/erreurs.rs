// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau.
// -----------------------------
// Trois familles, trois frontières :
// - ErreurParse    : texte mal formé (jetons + structure). Pour l'UI, tout cela
//                    se résume à "expression invalide" ; les variantes servent
//                    aux messages et aux tests.
// - ErreurEval     : échec pendant la marche de l'arbre (division par zéro,
//                    résultat non fini, opération hors liste blanche).
// - ErreurFonction : transformations unaires de l'UI (√, x², %, trig) — classe
//                    séparée, ne passe jamais par le parseur.
//
// Toutes sont interceptées à la frontière UI et converties en un seul état
// visible ("Error" dans l'affichage). Rien ne remonte plus haut.

use thiserror::Error;

/// Erreur de tokenisation ou d'analyse syntaxique.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurParse {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("parenthèse non fermée")]
    ParentheseNonFermee,

    #[error("jeton inattendu: {0}")]
    JetonInattendu(String),

    /// Garde-fou anti-débordement de pile (imbrication pathologique).
    #[error("expression trop profonde")]
    ExpressionTropProfonde,
}

/// Erreur d'évaluation (marche de l'arbre).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Politique choisie : une division dont le résultat n'est pas fini
    /// (x/0, 0/0) est signalée, pas affichée en inf/NaN.
    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat final hors domaine affichable (ex. débordement de puissance).
    #[error("résultat non fini")]
    ResultatNonFini,

    /// Opération absente de la liste blanche. Inatteignable avec la grammaire
    /// actuelle (l'AST est un enum fermé), mais la branche existe pour que la
    /// répartition reste totale.
    #[error("opération non supportée")]
    NonSupportee,
}

/// Erreur des transformations unaires (niveau UI, hors grammaire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurFonction {
    #[error("l'affichage ne contient pas un nombre")]
    PasUnNombre,

    #[error("racine carrée d'un nombre négatif")]
    RacineNegative,

    #[error("résultat non fini")]
    ResultatNonFini,
}

/// Erreur combinée du pipeline texte -> résultat.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    #[error(transparent)]
    Parse(#[from] ErreurParse),

    #[error(transparent)]
    Eval(#[from] ErreurEval),
}
