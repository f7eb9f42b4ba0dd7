// src/noyau/scientifique.rs
//
// Fonctions unaires (touches "sin", "sqrt", "fact"…)
// --------------------------------------------------
// - sin/cos/tan : angle converti selon ModeAngle
// - sqrt(x<0)   : erreur de domaine
// - fact        : entier 0..=170 seulement, calcul exact (BigUint) puis un seul arrondi f64
// - tout résultat non fini (log(0), ln(-1), e^1000…) : erreur de domaine

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::calcul::fini;
use super::erreur::ErreurDomaine;
use super::touches::{FonctionSci, ModeAngle};

/// Plus grand n tel que n! tient dans un f64.
pub const FACTORIELLE_MAX: u32 = 170;

pub fn appliquer(f: FonctionSci, x: f64, mode: ModeAngle) -> Result<f64, ErreurDomaine> {
    let r = match f {
        FonctionSci::Sin => mode.en_radians(x).sin(),
        FonctionSci::Cos => mode.en_radians(x).cos(),
        FonctionSci::Tan => mode.en_radians(x).tan(),
        FonctionSci::Log => x.log10(),
        FonctionSci::Ln => x.ln(),
        FonctionSci::Racine => {
            if x < 0.0 {
                return Err(ErreurDomaine::RacineNegative(x));
            }
            x.sqrt()
        }
        FonctionSci::Factorielle => factorielle(x)?,
        FonctionSci::Oppose => -x,
        FonctionSci::DixPuissance => 10f64.powf(x),
        FonctionSci::Exp => x.exp(),
    };
    fini(r)
}

pub fn factorielle(x: f64) -> Result<f64, ErreurDomaine> {
    if !(0.0..=f64::from(FACTORIELLE_MAX)).contains(&x) || x.fract() != 0.0 {
        return Err(ErreurDomaine::FactorielleHorsDomaine(x));
    }

    // x entier dans 0..=170 : conversion sans perte
    let n = x as u32;
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }

    acc.to_f64().ok_or(ErreurDomaine::NonFini)
}
