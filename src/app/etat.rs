//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur (un seul pour toute la vie de l’app) et traduire
//! les jetons texte des boutons en touches.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Moteur::presser`.
//! - Un jeton inconnu est journalisé puis ignoré (jamais transmis au moteur).

use tracing::warn;

use crate::config::Config;
use crate::noyau::{ErreurTouche, Moteur, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        Self {
            moteur: Moteur::avec_mode(config.mode_angle),
        }
    }

    pub fn presser(&mut self, touche: Touche) {
        self.moteur.presser(touche);
    }

    /// Bouton : jeton texte ("7", "sin", "m_plus"…).
    pub fn presser_symbole(&mut self, symbole: &str) -> Result<(), ErreurTouche> {
        let touche: Touche = symbole.parse()?;
        self.presser(touche);
        Ok(())
    }

    /// Variante “bouton” : erreur journalisée, jamais propagée à l’UI.
    pub fn clic(&mut self, symbole: &str) {
        if let Err(e) = self.presser_symbole(symbole) {
            warn!(erreur = %e, "bouton ignoré");
        }
    }

    /// Ligne d’attente au-dessus de l’écran : "12 *" quand un opérateur attend.
    pub fn ligne_attente(&self) -> String {
        match self.moteur.en_attente() {
            Some(op) => format!(
                "{} {}",
                op.gauche.texte(),
                Touche::Operateur(op.op).symbole()
            ),
            None => String::new(),
        }
    }
}
