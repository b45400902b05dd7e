//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le tampon d'affichage et offrir les actions du pavé
//! (saisie, C, =, transformations unaires) sans logique d'affichage.
//!
//! Contrats :
//! - Toute erreur (parse, éval, fonction) s'arrête ici : le tampon devient
//!   le sentinelle "Error", rien ne remonte, rien ne panique.
//! - Chaque frappe est une tentative indépendante — pas d'état entre appels.
//! - Une fois "Error" affiché, la saisie suivante repart d'un tampon neuf
//!   (jamais de "Error7").

use crate::noyau::{appliquer, eval_expression, format_nombre, valeur_affichage, Transforme};

/// Sentinelle affichée sur n'importe quel échec.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct AppCalc {
    /// Tampon d'affichage : entrée en cours OU dernier résultat OU "Error".
    pub affichage: String,

    // Permet à vue.rs de redonner le focus au champ après un clic sur un bouton.
    pub focus_affichage: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            focus_affichage: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// Saisie d'un fragment (chiffre, point, opérateur, parenthèse).
    /// Si l'affichage montre "Error", on repart d'un tampon neuf.
    pub fn saisir(&mut self, fragment: &str) {
        if self.affichage == TEXTE_ERREUR {
            self.affichage.clear();
        }
        self.affichage.push_str(fragment);
        self.focus_affichage = true;
    }

    /// C : tout effacer.
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.focus_affichage = true;
    }

    /// = : évalue le tampon via le noyau, remplace par le résultat formaté
    /// (réutilisable comme début d'expression) ou par "Error".
    pub fn egal(&mut self) {
        self.affichage = match eval_expression(&self.affichage) {
            Ok(v) => format_nombre(v),
            Err(_) => TEXTE_ERREUR.to_string(),
        };
        self.focus_affichage = true;
    }

    /// Transformation unaire (√, x², %, sin, cos, tan) : appliquée à la valeur
    /// numérique courante, sans passer par le parseur.
    pub fn transformer(&mut self, t: Transforme) {
        let resultat = valeur_affichage(&self.affichage).and_then(|x| appliquer(t, x));

        self.affichage = match resultat {
            Ok(v) => format_nombre(v),
            Err(_) => TEXTE_ERREUR.to_string(),
        };
        self.focus_affichage = true;
    }

    /// Après une édition clavier directe dans le champ : si l'utilisateur a
    /// tapé par-dessus "Error", on ne garde que ce qu'il vient d'ajouter.
    pub fn normaliser_apres_erreur(&mut self) {
        if let Some(reste) = self.affichage.strip_prefix(TEXTE_ERREUR) {
            if !reste.is_empty() {
                self.affichage = reste.to_string();
            }
        }
    }
}
