// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// - ErreurDomaine : la seule erreur “calcul”. Elle ne remonte jamais à l’appelant :
//   elle est rangée dans la saisie et l’écran montre MARQUEUR_ERREUR.
// - ErreurTouche  : jeton inconnu à la frontière UI (jamais vu par le moteur).

use thiserror::Error;

/// Texte affiché pour toute erreur de domaine.
pub const MARQUEUR_ERREUR: &str = "Error";

#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ErreurDomaine {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("racine carrée d’un négatif ({0})")]
    RacineNegative(f64),

    /// n! défini seulement pour n entier, 0 <= n <= 170.
    #[error("factorielle hors domaine ({0})")]
    FactorielleHorsDomaine(f64),

    /// NaN ou ±∞ (log(-1), ln(0), 0^-1, 10^400…).
    #[error("résultat non fini")]
    NonFini,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurTouche {
    #[error("touche inconnue: {0:?}")]
    Inconnue(String),
}
