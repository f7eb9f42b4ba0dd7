// src/noyau/touches.rs
//
// Vocabulaire des touches (jetons symboliques envoyés par l’UI)
// -------------------------------------------------------------
// - Chaque bouton porte un symbole texte ("7", "+", "sin", "m_plus", "ac"…)
// - FromStr : texte -> Touche (inconnu => ErreurTouche)
// - symbole() : Touche -> texte (aller-retour stable)

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::erreur::ErreurTouche;

/// Opérateur binaire en attente.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

/// Fonctions unaires (appliquées à la saisie courante).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionSci {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Racine,
    Factorielle,
    Oppose,
    DixPuissance,
    Exp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionMemoire {
    Efface,
    Rappel,
    Ajoute,
    Retranche,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

/// Mode d’angle pour sin/cos/tan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeAngle {
    #[default]
    Deg,
    Rad,
}

impl ModeAngle {
    /// Angle saisi -> radians.
    pub fn en_radians(self, angle: f64) -> f64 {
        match self {
            ModeAngle::Deg => angle * (std::f64::consts::PI / 180.0),
            ModeAngle::Rad => angle,
        }
    }
}

/// Touche de saisie : '0'..='9' ou '.'. Seul `Chiffre::new` la construit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chiffre(char);

impl Chiffre {
    pub const POINT: Chiffre = Chiffre('.');

    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Chiffre(c))
    }

    pub fn caractere(self) -> char {
        self.0
    }

    pub fn est_point(self) -> bool {
        self.0 == '.'
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(Chiffre),
    Operateur(Operateur),
    Egal,
    Fonction(FonctionSci),
    Constante(Constante),
    Angle(ModeAngle),
    Memoire(FonctionMemoire),
    EffaceTout,
    Supprime,
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chiffres + point : un seul octet ASCII
        if let [c] = s.as_bytes() {
            if let Some(ch) = Chiffre::new(char::from(*c)) {
                return Ok(Touche::Chiffre(ch));
            }
        }

        let t = match s {
            "+" => Touche::Operateur(Operateur::Plus),
            "-" => Touche::Operateur(Operateur::Moins),
            "*" => Touche::Operateur(Operateur::Fois),
            "/" => Touche::Operateur(Operateur::Divise),
            "^" => Touche::Operateur(Operateur::Puissance),
            "=" => Touche::Egal,

            "sin" => Touche::Fonction(FonctionSci::Sin),
            "cos" => Touche::Fonction(FonctionSci::Cos),
            "tan" => Touche::Fonction(FonctionSci::Tan),
            "log" => Touche::Fonction(FonctionSci::Log),
            "ln" => Touche::Fonction(FonctionSci::Ln),
            "sqrt" => Touche::Fonction(FonctionSci::Racine),
            "fact" => Touche::Fonction(FonctionSci::Factorielle),
            "neg" => Touche::Fonction(FonctionSci::Oppose),
            "ten_pow" => Touche::Fonction(FonctionSci::DixPuissance),
            "exp" => Touche::Fonction(FonctionSci::Exp),

            "pi" => Touche::Constante(Constante::Pi),
            "e" => Touche::Constante(Constante::E),
            "deg" => Touche::Angle(ModeAngle::Deg),
            "rad" => Touche::Angle(ModeAngle::Rad),

            "mc" => Touche::Memoire(FonctionMemoire::Efface),
            "mr" => Touche::Memoire(FonctionMemoire::Rappel),
            "m_plus" => Touche::Memoire(FonctionMemoire::Ajoute),
            "m_minus" => Touche::Memoire(FonctionMemoire::Retranche),

            "ac" => Touche::EffaceTout,
            "del" => Touche::Supprime,

            _ => return Err(ErreurTouche::Inconnue(s.to_string())),
        };

        Ok(t)
    }
}

impl Touche {
    /// Symbole texte (inverse de FromStr).
    pub fn symbole(self) -> &'static str {
        match self {
            Touche::Chiffre(c) => {
                const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
                match c.caractere().to_digit(10) {
                    Some(d) => CHIFFRES[d as usize],
                    None => ".",
                }
            }

            Touche::Operateur(op) => match op {
                Operateur::Plus => "+",
                Operateur::Moins => "-",
                Operateur::Fois => "*",
                Operateur::Divise => "/",
                Operateur::Puissance => "^",
            },
            Touche::Egal => "=",

            Touche::Fonction(f) => match f {
                FonctionSci::Sin => "sin",
                FonctionSci::Cos => "cos",
                FonctionSci::Tan => "tan",
                FonctionSci::Log => "log",
                FonctionSci::Ln => "ln",
                FonctionSci::Racine => "sqrt",
                FonctionSci::Factorielle => "fact",
                FonctionSci::Oppose => "neg",
                FonctionSci::DixPuissance => "ten_pow",
                FonctionSci::Exp => "exp",
            },

            Touche::Constante(Constante::Pi) => "pi",
            Touche::Constante(Constante::E) => "e",
            Touche::Angle(ModeAngle::Deg) => "deg",
            Touche::Angle(ModeAngle::Rad) => "rad",

            Touche::Memoire(m) => match m {
                FonctionMemoire::Efface => "mc",
                FonctionMemoire::Rappel => "mr",
                FonctionMemoire::Ajoute => "m_plus",
                FonctionMemoire::Retranche => "m_minus",
            },

            Touche::EffaceTout => "ac",
            Touche::Supprime => "del",
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}
