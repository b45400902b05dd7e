// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : le champ d'affichage est un TextEdit, donc chiffres/opérateurs
//   se tapent directement ; Enter évalue quand le champ a le focus
// - Tactile : gros boutons, focus redonné après clic (focus_affichage)
//
// Disposition du pavé (5x4) :
//   C    √    x²   /
//   sin  7    8    9
//   cos  4    5    6
//   tan  1    2    3
//   %    0    .    =
// plus une rangée d'opérateurs ( ) + - * ^ au-dessus du pavé.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Transforme;

/// Ce que déclenche un bouton du pavé.
#[derive(Clone, Copy, Debug)]
enum Touche {
    /// Insère le texte dans le tampon (chiffres, point, opérateurs, parenthèses).
    Texte(&'static str),
    /// Transformation unaire sur la valeur courante (hors grammaire).
    Fonction(Transforme),
    Effacer,
    Egal,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Pro");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_operateurs(ui);

        ui.add_space(4.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 2^10, -2^2")
                .id_source("affichage_edit")
                .font(egui::TextStyle::Monospace),
        );

        // Frappe clavier directe : si on vient de taper par-dessus "Error",
        // on repart du fragment tapé (idempotence de l'état d'erreur).
        if resp.changed() {
            self.normaliser_apres_erreur();
        }

        // Si on a cliqué un bouton du pavé, on redonne le focus au champ
        if self.focus_affichage {
            resp.request_focus();
            self.focus_affichage = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements "globaux" quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.egal();
            self.focus_affichage = true;
        }
    }

    fn ui_operateurs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "(", Touche::Texte("("));
            self.bouton(ui, ")", Touche::Texte(")"));
            self.bouton(ui, "+", Touche::Texte("+"));
            self.bouton(ui, "-", Touche::Texte("-"));
            self.bouton(ui, "*", Touche::Texte("*"));
            self.bouton(ui, "^", Touche::Texte("^"));
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Effacer);
                self.bouton(ui, "√", Touche::Fonction(Transforme::Racine));
                self.bouton(ui, "x²", Touche::Fonction(Transforme::Carre));
                self.bouton(ui, "/", Touche::Texte("/"));
                ui.end_row();

                self.bouton(ui, "sin", Touche::Fonction(Transforme::Sin));
                self.bouton(ui, "7", Touche::Texte("7"));
                self.bouton(ui, "8", Touche::Texte("8"));
                self.bouton(ui, "9", Touche::Texte("9"));
                ui.end_row();

                self.bouton(ui, "cos", Touche::Fonction(Transforme::Cos));
                self.bouton(ui, "4", Touche::Texte("4"));
                self.bouton(ui, "5", Touche::Texte("5"));
                self.bouton(ui, "6", Touche::Texte("6"));
                ui.end_row();

                self.bouton(ui, "tan", Touche::Fonction(Transforme::Tan));
                self.bouton(ui, "1", Touche::Texte("1"));
                self.bouton(ui, "2", Touche::Texte("2"));
                self.bouton(ui, "3", Touche::Texte("3"));
                ui.end_row();

                self.bouton(ui, "%", Touche::Fonction(Transforme::Pourcent));
                self.bouton(ui, "0", Touche::Texte("0"));
                self.bouton(ui, ".", Touche::Texte("."));
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([70.0, 48.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Texte(t) => self.saisir(t),
            Touche::Fonction(t) => self.transformer(t),
            Touche::Effacer => self.effacer(),
            Touche::Egal => self.egal(),
        }
    }
}
