//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - touches.rs      : vocabulaire des touches (jeton texte <-> Touche)
//! - erreur.rs       : erreur de domaine + touche inconnue
//! - saisie.rs       : valeur courante (texte / nombre / erreur) + lecture préfixe
//! - format.rs       : f64 -> texte écran
//! - calcul.rs       : + - * / ^
//! - scientifique.rs : sin, cos, tan, log, ln, sqrt, fact, neg, 10^x, e^x
//! - moteur.rs       : machine à états (une touche = une transition)

pub mod calcul;
pub mod erreur;
pub mod format;
pub mod moteur;
pub mod saisie;
pub mod scientifique;
pub mod touches;

#[cfg(test)]
mod tests_sequences;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurTouche;
pub use moteur::Moteur;
pub use touches::{ModeAngle, Touche};
