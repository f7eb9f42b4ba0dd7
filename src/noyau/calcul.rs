// src/noyau/calcul.rs
//
// Opérations binaires (+ - * / ^) en f64.
// Division par zéro exact => ErreurDomaine ; résultat non fini => ErreurDomaine.

use super::erreur::ErreurDomaine;
use super::touches::Operateur;

pub fn operer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurDomaine> {
    let r = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurDomaine::DivisionParZero);
            }
            a / b
        }
        Operateur::Puissance => a.powf(b),
    };
    fini(r)
}

/// NaN / ±∞ => NonFini.
pub fn fini(v: f64) -> Result<f64, ErreurDomaine> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurDomaine::NonFini)
    }
}
