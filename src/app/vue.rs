// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran une ligne (+ ligne d’attente "12 *" et indicateur M)
// - DEG / RAD : le mode actif est surligné
// - Pavé 5 colonnes : chaque bouton envoie son jeton texte au moteur
//
// Note :
// - Libellés ASCII seulement (polices egui par défaut)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::ModeAngle;

pub const TITRE: &str = "Calculatrice scientifique";

/// (libellé, jeton) — une ligne = 5 boutons.
const PAVE: [[(&str, &str); 5]; 7] = [
    [("MC", "mc"), ("MR", "mr"), ("M+", "m_plus"), ("M-", "m_minus"), ("AC", "ac")],
    [("sin", "sin"), ("cos", "cos"), ("tan", "tan"), ("log", "log"), ("ln", "ln")],
    [("sqrt", "sqrt"), ("x!", "fact"), ("10^x", "ten_pow"), ("e^x", "exp"), ("x^y", "^")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("/", "/"), ("DEL", "del")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("*", "*"), ("pi", "pi")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("-", "-"), ("e", "e")],
    [("0", "0"), (".", "."), ("+/-", "neg"), ("+", "+"), ("=", "=")],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(TITRE);
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        self.ui_modes(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let couleur = if self.moteur.est_en_erreur() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        let attente = self.ligne_attente();
        let memoire = if self.moteur.memoire() != 0.0 { "M" } else { "" };
        let ecran = self.moteur.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.monospace(memoire);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(attente);
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(ecran)
                            .monospace()
                            .size(32.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui) {
        let mode = self.moteur.mode_angle();

        ui.horizontal(|ui| {
            if ui.selectable_label(mode == ModeAngle::Deg, "DEG").clicked() {
                self.clic("deg");
            }
            if ui.selectable_label(mode == ModeAngle::Rad, "RAD").clicked() {
                self.clic("rad");
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE.iter() {
                    for (libelle, jeton) in ligne.iter() {
                        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(*libelle));
                        if resp.clicked() {
                            self.clic(jeton);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
