//! Tests fuzz safe : touches au hasard, sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariant clé : après chaque touche, l’écran est un littéral f64 strict OU "Error"
//! - invariant clé : opérateur en attente <=> premier opérande présent (porté par le type)

use std::time::{Duration, Instant};

use super::erreur::MARQUEUR_ERREUR;
use super::moteur::Moteur;
use super::touches::Touche;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

const JETONS: [&str; 37] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "^", "=", "sin",
    "cos", "tan", "log", "ln", "sqrt", "fact", "neg", "ten_pow", "exp", "pi", "e", "deg", "rad",
    "mc", "mr", "m_plus", "m_minus", "ac", "del",
];

const CHIFFRES: [&str; 11] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "."];

fn touche(jeton: &str) -> Touche {
    jeton
        .parse()
        .unwrap_or_else(|e| panic!("jeton {jeton:?} refusé: {e}"))
}

// "1e+2" -> del -> del : exposants tronqués
const SUPPRESSIONS: [&str; 8] = ["2", "1", "ten_pow", "neg", "del", "del", "del", "del"];

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres favorisés : sinon on ne bâtit jamais de nombres
    match rng.pick(8) {
        0..=3 => touche(CHIFFRES[rng.pick(CHIFFRES.len() as u32) as usize]),
        4 => touche(SUPPRESSIONS[rng.pick(SUPPRESSIONS.len() as u32) as usize]),
        _ => touche(JETONS[rng.pick(JETONS.len() as u32) as usize]),
    }
}

/// Littéral strict (pas de lecture par préfixe) : "1e+" ou "-" sont refusés.
fn ecran_lisible(s: &str) -> bool {
    s == MARQUEUR_ERREUR || s.parse::<f64>().is_ok_and(f64::is_finite)
}

fn check_ecran(m: &Moteur, trace: &[Touche]) {
    let s = m.affichage();
    let ok = ecran_lisible(&s);
    assert!(ok, "écran invalide {s:?} après {trace:?}");
    assert!(!s.is_empty(), "écran vide après {trace:?}");
    if s != MARQUEUR_ERREUR {
        assert!(s.matches('.').count() <= 1, "deux points: {s:?} après {trace:?}");
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn ecran_lisible_est_strict() {
    assert!(ecran_lisible("3."));
    assert!(ecran_lisible("1e+21"));
    assert!(ecran_lisible("-1.5e-7"));
    assert!(ecran_lisible("Error"));
    assert!(!ecran_lisible("1e+"));
    assert!(!ecran_lisible("1e"));
    assert!(!ecran_lisible("-"));
    assert!(!ecran_lisible(""));
    assert!(!ecran_lisible("Infinity"));
}

#[test]
fn fuzz_safe_suppressions_dans_exposant() {
    let mut m = Moteur::default();
    let mut trace = Vec::new();
    for jeton in ["2", "1", "ten_pow"].iter().chain(["del"; 6].iter()) {
        let t = touche(jeton);
        trace.push(t);
        m.presser(t);
        check_ecran(&m, &trace);
    }
    assert_eq!(m.affichage(), "0");
}

#[test]
fn fuzz_safe_invariant_ecran() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_err = 0usize;
    let mut seen_ok = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut m = Moteur::default();
        let mut trace = Vec::with_capacity(40);

        for _ in 0..40 {
            let t = gen_touche(&mut rng);
            trace.push(t);
            m.presser(t);
            check_ecran(&m, &trace);
        }

        if m.est_en_erreur() {
            seen_err += 1;
        } else {
            seen_ok += 1;
        }
    }

    // le fuzz doit balayer les deux issues
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let joue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut m = Moteur::default();
        let mut ecrans = Vec::new();
        for _ in 0..300 {
            m.presser(gen_touche(&mut rng));
            ecrans.push(m.affichage());
        }
        (ecrans, m.memoire().to_bits())
    };

    assert_eq!(joue(0xBADC0DE), joue(0xBADC0DE));
}

#[test]
fn fuzz_safe_chiffres_seulement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        budget(t0, max);

        let mut m = Moteur::default();
        let mut trace = Vec::new();
        for _ in 0..30 {
            let t = touche(CHIFFRES[rng.pick(CHIFFRES.len() as u32) as usize]);
            trace.push(t);
            m.presser(t);
        }
        // jamais d’erreur en ne tapant que des chiffres
        assert!(!m.est_en_erreur());
        check_ecran(&m, &trace);
    }
}

#[test]
fn fuzz_safe_ac_remet_a_zero() {
    let mut rng = Rng::new(0xAC_u64);

    for _ in 0..100 {
        let mut m = Moteur::default();
        for _ in 0..25 {
            m.presser(gen_touche(&mut rng));
        }
        let memoire = m.memoire().to_bits();
        let mode = m.mode_angle();

        m.presser(touche("ac"));

        assert_eq!(m.affichage(), "0");
        assert!(m.en_attente().is_none());
        assert!(!m.attend_second_operande());
        assert_eq!(m.memoire().to_bits(), memoire);
        assert_eq!(m.mode_angle(), mode);
    }
}
