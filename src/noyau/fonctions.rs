// src/noyau/fonctions.rs
//
// Transformations unaires (boutons √, x², %, sin, cos, tan)
// ---------------------------------------------------------
// Appliquées directement à la valeur numérique de l'affichage, SANS passer
// par le parseur : ce ne sont pas des éléments de la grammaire. La trig est
// en DEGRÉS (convention calculatrice de bureau : sin 30 = 0.5).
//
// Classe d'erreur séparée (ErreurFonction) : affichage non numérique,
// racine d'un négatif, résultat non fini.

use super::erreurs::ErreurFonction;

/// Transformation unaire offerte par le pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transforme {
    Racine,
    Carre,
    Pourcent,
    Sin,
    Cos,
    Tan,
}

/// Applique une transformation à une valeur.
pub fn appliquer(t: Transforme, x: f64) -> Result<f64, ErreurFonction> {
    let v = match t {
        Transforme::Racine => {
            if x < 0.0 {
                return Err(ErreurFonction::RacineNegative);
            }
            x.sqrt()
        }
        Transforme::Carre => x * x,
        Transforme::Pourcent => x / 100.0,

        // trig en degrés
        Transforme::Sin => x.to_radians().sin(),
        Transforme::Cos => x.to_radians().cos(),
        Transforme::Tan => x.to_radians().tan(),
    };

    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurFonction::ResultatNonFini)
    }
}

/// Lit la valeur courante de l'affichage (pour les transformations).
/// `parse::<f64>` est plus permissif que notre tokeniseur (il accepte "1e3",
/// "inf"...) ; on filtre donc sur la finitude.
pub fn valeur_affichage(texte: &str) -> Result<f64, ErreurFonction> {
    let v: f64 = texte
        .trim()
        .parse()
        .map_err(|_| ErreurFonction::PasUnNombre)?;

    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurFonction::PasUnNombre)
    }
}
