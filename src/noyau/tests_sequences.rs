//! Tests de séquences : suites de touches telles que l’UI les envoie (jetons texte).
//!
//! Chaque scénario part d’un moteur neuf (mode deg) et vérifie l’écran final.

use super::moteur::Moteur;
use super::saisie::lire_nombre;
use super::touches::{ModeAngle, Operateur, Touche};

/// Jetons séparés par des espaces : "3 + 4 * 2 =".
fn taper(m: &mut Moteur, jetons: &str) {
    for j in jetons.split_whitespace() {
        let t: Touche = j
            .parse()
            .unwrap_or_else(|e| panic!("jeton {j:?} refusé: {e}"));
        m.presser(t);
    }
}

fn ecran(jetons: &str) -> String {
    let mut m = Moteur::default();
    taper(&mut m, jetons);
    m.affichage()
}

fn assert_ecran(jetons: &str, attendu: &str) {
    assert_eq!(ecran(jetons), attendu, "jetons={jetons:?}");
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn seq_division() {
    assert_ecran("1 0 / 2 =", "5");
    assert_ecran("5 / 0 =", "Error");
}

#[test]
fn seq_enchainement() {
    let mut m = Moteur::default();
    taper(&mut m, "3 + 4 *");
    // résolution intermédiaire 3+4
    assert_eq!(m.affichage(), "7");
    assert_eq!(m.en_attente().map(|o| o.op), Some(Operateur::Fois));

    taper(&mut m, "2 =");
    assert_eq!(m.affichage(), "14");
    assert!(m.en_attente().is_none());
}

#[test]
fn seq_changement_avis() {
    let mut m = Moteur::default();
    taper(&mut m, "8 + - *");
    let op = m.en_attente().cloned().unwrap();
    assert_eq!(op.op, Operateur::Fois);
    assert_eq!(op.gauche.texte(), "8");
    assert_eq!(m.affichage(), "8");

    taper(&mut m, "2 =");
    assert_eq!(m.affichage(), "16");
}

#[test]
fn seq_flottants() {
    assert_ecran(". 1 + . 2 =", "0.30000000000000004");
    assert_ecran("1 0 ^ 2 1 =", "1e+21");
    assert_ecran("2 ^ 1 0 =", "1024");
    assert_ecran("7 - 9 =", "-2");
}

#[test]
fn seq_resultat_puis_chiffre() {
    // après "=", un chiffre démarre un nouveau nombre
    assert_ecran("2 + 2 = 9", "9");
    // … et un opérateur réutilise le résultat
    assert_ecran("2 + 2 = * 3 =", "12");
}

#[test]
fn seq_erreur_puis_chiffre() {
    assert_ecran("5 / 0 = 4", "4");
    assert_ecran("5 / 0 = ac", "0");
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn seq_factorielle() {
    assert_ecran("5 fact", "120");
    assert_ecran("1 7 1 fact", "Error");
    assert_ecran("1 neg fact", "Error");
    assert_ecran("2 . 5 fact", "Error");
    assert_ecran("0 fact", "1");
}

#[test]
fn seq_racine() {
    assert_ecran("1 6 sqrt", "4");
    assert_ecran("9 neg sqrt", "Error");
}

#[test]
fn seq_oppose_de_zero() {
    assert_ecran("neg", "0");
    assert_ecran("0 neg neg", "0");
}

#[test]
fn seq_trig_degres_radians() {
    assert_ecran("0 cos", "1");
    assert_ecran("9 0 sin", "1");
    assert_ecran("rad 0 sin", "0");
    assert_ecran("rad pi cos", "-1");

    let mut m = Moteur::default();
    taper(&mut m, "3 0 sin");
    let v = lire_nombre(&m.affichage()).unwrap();
    assert!((v - 0.5).abs() < 1e-15);
}

#[test]
fn seq_mode_angle_conserve() {
    let mut m = Moteur::default();
    taper(&mut m, "rad 1 2 ac");
    assert_eq!(m.mode_angle(), ModeAngle::Rad);
    taper(&mut m, "deg");
    assert_eq!(m.mode_angle(), ModeAngle::Deg);
}

#[test]
fn seq_logs_et_puissances() {
    assert_ecran("1 0 0 log", "2");
    assert_ecran("1 ln", "0");
    assert_ecran("3 ten_pow", "1000");
    assert_ecran("0 exp", "1");
    assert_ecran("0 log", "Error");
    assert_ecran("1 neg ln", "Error");
}

#[test]
fn seq_fonction_dans_operation() {
    // la fonction s’applique au second opérande
    assert_ecran("3 + 1 6 sqrt =", "7");
}

#[test]
fn seq_constantes() {
    assert_ecran("pi", "3.141592653589793");
    assert_ecran("e", "2.718281828459045");
    assert_ecran("2 * pi =", "6.283185307179586");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn seq_memoire_apres_ac() {
    let mut m = Moteur::default();
    taper(&mut m, "4 2 m_plus ac");
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.memoire(), 42.0);

    taper(&mut m, "mr");
    assert_eq!(m.affichage(), "42");
}

#[test]
fn seq_memoire_cumul() {
    assert_ecran("1 0 m_plus 3 m_minus 1 m_plus mr", "8");
    assert_ecran("5 m_plus mc mr", "0");
}

#[test]
fn seq_memoire_dans_operation() {
    assert_ecran("6 m_plus ac 4 * mr =", "24");
}

/* ------------------------ Édition ------------------------ */

#[test]
fn seq_supprimer() {
    assert_ecran("1 2 3 del", "12");
    assert_ecran("del", "0");
    assert_ecran("7 del del", "0");
    assert_ecran("1 . del", "1");
}

#[test]
fn seq_supprimer_exposant() {
    assert_ecran("1 0 ^ 2 1 = del", "1e+2");
    assert_ecran("1 0 ^ 2 1 = del del", "1");
    assert_ecran("1 / 7 ten_pow = del", "1");
    assert_ecran("1 / 7 ten_pow = del del", "0");
    assert_ecran("1 0 ^ 2 1 = neg del del", "-1");
    assert_ecran("1 0 ^ 2 1 = del del del", "0");
}

#[test]
fn seq_deux_points() {
    let s = ecran("1 . . 5 .");
    assert_eq!(s.matches('.').count(), 1);
    assert_eq!(s, "1.5");
}

#[test]
fn seq_chiffres_toujours_lisibles() {
    // écran = littéral f64 strict ("3." accepté, "1e+" refusé)
    for jetons in [
        ". . .",
        "0 . 0",
        ". 5",
        "0 0 0",
        "9 . 9 . 9",
        ".",
        "1 0 ^ 2 1 = del del",
        "1 / 7 ten_pow = neg del",
        "5 neg del",
    ] {
        let s = ecran(jetons);
        assert!(
            s.parse::<f64>().is_ok_and(f64::is_finite),
            "jetons={jetons:?} écran={s:?}"
        );
    }
}
