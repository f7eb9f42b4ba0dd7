//! src/noyau/saisie.rs
//!
//! Valeur courante de la calculatrice (ce que montre l’écran).
//!
//! Trois formes :
//! - `Texte`  : nombre en cours de frappe ("3.", "0.50", "12")
//! - `Valeur` : résultat calculé (formaté seulement à l’affichage)
//! - `Erreur` : erreur de domaine (écran = "Error")
//!
//! Invariant : `Valeur` est toujours fini. `depuis_resultat` range NaN/±∞ en `Erreur`.

use super::erreur::{ErreurDomaine, MARQUEUR_ERREUR};
use super::format::format_nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Saisie {
    Texte(String),
    Valeur(f64),
    Erreur(ErreurDomaine),
}

impl Default for Saisie {
    fn default() -> Self {
        Saisie::Texte("0".to_string())
    }
}

impl Saisie {
    /// Range un résultat de calcul (non fini => erreur de domaine).
    pub fn depuis_resultat(r: Result<f64, ErreurDomaine>) -> Self {
        match r {
            Ok(v) if v.is_finite() => Saisie::Valeur(v),
            Ok(_) => Saisie::Erreur(ErreurDomaine::NonFini),
            Err(e) => Saisie::Erreur(e),
        }
    }

    pub fn est_erreur(&self) -> bool {
        matches!(self, Saisie::Erreur(_))
    }

    /// Valeur numérique, ou None si illisible / erreur.
    pub fn nombre(&self) -> Option<f64> {
        match self {
            Saisie::Texte(t) => lire_nombre(t),
            // -0 relu depuis l’écran vaut 0
            Saisie::Valeur(v) if *v == 0.0 => Some(0.0),
            Saisie::Valeur(v) => Some(*v),
            Saisie::Erreur(_) => None,
        }
    }

    /// Texte écran.
    pub fn texte(&self) -> String {
        match self {
            Saisie::Texte(t) => t.clone(),
            Saisie::Valeur(v) => format_nombre(*v),
            Saisie::Erreur(_) => MARQUEUR_ERREUR.to_string(),
        }
    }
}

/// Lecture “préfixe” d’un littéral décimal (comme parseFloat) :
/// le plus long préfixe `[+-]chiffres[.chiffres][e[+-]chiffres]` qui contient au moins un chiffre.
///
/// "3." -> 3 ; "1e-" -> 1 ; "." / "-" / "" -> None
pub fn lire_nombre(s: &str) -> Option<f64> {
    let b = s.as_bytes();
    let mut i = 0usize;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let mut nb_chiffres = 0usize;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        nb_chiffres += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            nb_chiffres += 1;
        }
    }
    if nb_chiffres == 0 {
        return None;
    }

    // exposant : seulement s’il est complet
    let mut fin = i;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut {
            fin = j;
        }
    }

    s[..fin].parse::<f64>().ok()
}
