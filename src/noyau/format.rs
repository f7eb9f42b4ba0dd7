// src/noyau/format.rs
//
// Affichage d’un f64 (frontière de présentation)
// ----------------------------------------------
// Même texte que Number.prototype.toString côté navigateur :
// - chiffres les plus courts qui relisent la même valeur (5, pas 5.0)
// - -0 s’affiche 0
// - notation simple si l’exposant décimal n vérifie -6 < n <= 21
// - sinon notation exposant : 1e+21, 1.5e-7

/// Formate un nombre pour l’écran.
///
/// Le moteur n’y passe que des valeurs finies (`Saisie::Valeur`) ; NaN et ±∞
/// gardent quand même le texte du navigateur pour que la fonction reste totale.
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // couvre aussi -0
    if x == 0.0 {
        return "0".to_string();
    }

    let corps = format_positif(x.abs());
    if x < 0.0 {
        format!("-{corps}")
    } else {
        corps
    }
}

fn format_positif(x: f64) -> String {
    // `{:e}` donne la mantisse la plus courte : "1.2345e3", "5e-7"
    let sci = format!("{x:e}");
    let (mantisse, exposant) = match sci.split_once('e') {
        Some(p) => p,
        None => return sci,
    };
    let exposant: i32 = match exposant.parse() {
        Ok(e) => e,
        Err(_) => return sci,
    };

    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    let k = chiffres.len() as i32;
    let n = exposant + 1;

    if k <= n && n <= 21 {
        // entier : chiffres + zéros
        let mut s = chiffres;
        s.push_str(&"0".repeat((n - k) as usize));
        s
    } else if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        format!("{ent}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let signe = if e >= 0 { '+' } else { '-' };
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            format!("{tete}e{signe}{}", e.abs())
        } else {
            format!("{tete}.{reste}e{signe}{}", e.abs())
        }
    }
}
