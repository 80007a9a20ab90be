// src/noyau/nombre.rs
//
// Lecture / écriture des nombres affichés
// ---------------------------------------
// L’écran manipule du TEXTE ("5.", "-0.25", "1e+21") et le calcul des f64.
// Deux conversions, symétriques et totales (jamais d’erreur) :
// - lire_nombre  : plus long préfixe numérique (comme parseFloat), sinon NaN
// - format_nombre : écriture la plus courte qui relit le même f64
//
// Règles d’écriture :
// - 0 et -0 => "0"
// - NaN / ±Infinity écrits en toutes lettres
// - notation fixe si l’exposant décimal est dans ]-7, 21[, sinon "1.5e+21" / "1e-7"

/// Seuil haut de la notation fixe (exclu).
const EXPOSANT_FIXE_MAX: i32 = 21;

/// Seuil bas de la notation fixe (exclu).
const EXPOSANT_FIXE_MIN: i32 = -6;

/* ------------------------ Lecture ------------------------ */

/// Lit la valeur numérique d’un texte d’écran.
///
/// Accepte les formes partielles produites par la saisie ("5.", "-.5", "12")
/// et les libellés spéciaux écrits par `format_nombre` ("Infinity", "NaN").
/// Tout ce qui suit le préfixe numérique est ignoré.
pub fn lire_nombre(texte: &str) -> f64 {
    let s = texte.trim_start();
    let octets = s.as_bytes();
    let n = octets.len();

    let negatif = octets.first() == Some(&b'-');
    let mut i = usize::from(matches!(octets.first(), Some(b'+') | Some(b'-')));

    if s[i..].starts_with("Infinity") {
        return if negatif {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // Mantisse : chiffres [. chiffres]
    let mut nb_chiffres = 0usize;
    while i < n && octets[i].is_ascii_digit() {
        i += 1;
        nb_chiffres += 1;
    }
    if i < n && octets[i] == b'.' {
        i += 1;
        while i < n && octets[i].is_ascii_digit() {
            i += 1;
            nb_chiffres += 1;
        }
    }
    if nb_chiffres == 0 {
        return f64::NAN;
    }

    // Exposant : seulement s’il est complet (au moins un chiffre)
    if i < n && (octets[i] == b'e' || octets[i] == b'E') {
        let mut j = i + 1;
        if j < n && (octets[j] == b'+' || octets[j] == b'-') {
            j += 1;
        }
        let debut = j;
        while j < n && octets[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut {
            i = j;
        }
    }

    // préfixe 100% ASCII => découpage sûr
    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/* ------------------------ Écriture ------------------------ */

/// Écrit un f64 sous sa forme d’écran canonique.
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let signe = if v < 0.0 { "-" } else { "" };
    let (chiffres, point) = decomposer(v.abs());
    format!("{signe}{}", placer_point(&chiffres, point))
}

/// Décompose |v| en (chiffres significatifs, position du point décimal).
///
/// v = 0.chiffres × 10^point ; ex. 12.5 => ("125", 2), 0.05 => ("5", -1).
fn decomposer(v: f64) -> (String, i32) {
    // `{:e}` donne déjà la plus courte écriture qui relit le même f64 : "1.25e1"
    let sci = format!("{v:e}");
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant: i32 = exposant.parse().unwrap_or(0);
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    (chiffres, exposant + 1)
}

fn placer_point(chiffres: &str, point: i32) -> String {
    let k = chiffres.len() as i32;

    // entier : chiffres + zéros
    if k <= point && point <= EXPOSANT_FIXE_MAX {
        return format!("{chiffres}{}", "0".repeat((point - k) as usize));
    }

    // point à l’intérieur des chiffres
    if 0 < point && point <= EXPOSANT_FIXE_MAX {
        let (ent, frac) = chiffres.split_at(point as usize);
        return format!("{ent}.{frac}");
    }

    // petit nombre : 0.000ddd
    if EXPOSANT_FIXE_MIN < point && point <= 0 {
        return format!("0.{}{chiffres}", "0".repeat((-point) as usize));
    }

    // notation exponentielle
    let e = point - 1;
    let signe_e = if e < 0 { '-' } else { '+' };
    let (tete, reste) = chiffres.split_at(1);
    if reste.is_empty() {
        format!("{tete}e{signe_e}{}", e.abs())
    } else {
        format!("{tete}.{reste}e{signe_e}{}", e.abs())
    }
}
