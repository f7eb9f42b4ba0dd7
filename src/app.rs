// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier : chiffres, . + - * / ^ =, Enter (=), Backspace (del), Escape (ac)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::touches::{Chiffre, Operateur, Touche};

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de champ texte : le clavier est global (natif + web).
        let touches = ctx.input(touches_clavier);
        for t in touches {
            self.presser(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événements clavier de la frame -> touches (dans l’ordre de frappe).
fn touches_clavier(input: &egui::InputState) -> Vec<Touche> {
    let mut out = Vec::new();

    for ev in &input.events {
        match ev {
            egui::Event::Text(texte) => out.extend(texte.chars().filter_map(touche_du_caractere)),
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                if let Some(t) = touche_de_la_cle(*key) {
                    out.push(t);
                }
            }
            _ => {}
        }
    }

    out
}

/// Caractère tapé -> touche (None si sans rôle).
fn touche_du_caractere(c: char) -> Option<Touche> {
    if let Some(chiffre) = Chiffre::new(c) {
        return Some(Touche::Chiffre(chiffre));
    }

    let t = match c {
        '+' => Touche::Operateur(Operateur::Plus),
        '-' => Touche::Operateur(Operateur::Moins),
        '*' => Touche::Operateur(Operateur::Fois),
        '/' => Touche::Operateur(Operateur::Divise),
        '^' => Touche::Operateur(Operateur::Puissance),
        '=' => Touche::Egal,
        _ => return None,
    };
    Some(t)
}

/// Touches “non texte”.
fn touche_de_la_cle(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace => Some(Touche::Supprime),
        egui::Key::Escape => Some(Touche::EffaceTout),
        _ => None,
    }
}
