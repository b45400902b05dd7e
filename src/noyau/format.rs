// src/noyau/format.rs

/// Formate un résultat pour l'affichage.
///
/// `Display` de f64 produit la plus courte écriture décimale qui re-parse à la
/// même valeur — exactement la propriété d'aller-retour voulue : tout ce qui
/// s'affiche peut être repris tel quel comme début d'une nouvelle expression.
///
/// Seul ajustement : `-0` est normalisé en `0` (personne ne veut voir -0 sur
/// une calculatrice).
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
