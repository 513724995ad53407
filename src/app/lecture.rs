// src/app/lecture.rs
//
// Lecture décimale du résultat (ligne du bas de l’affichage).
//
// Le f64 est converti en rationnel EXACT (BigRational::from_float), puis arrondi
// à `chiffres` décimales en entier “scalé” (demi loin de zéro).
// 0.1 + 0.2 s’affiche 0.3 ; 0.7 ne devient pas 0.699999.
//
// Distinct de la description (texte canonique complet, côté noyau).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// r -> entier “scalé” = round(r * 10^chiffres)
fn rationnel_scale(r: &BigRational, chiffres: usize) -> BigInt {
    (r * BigRational::from_integer(pow10(chiffres)))
        .round()
        .to_integer()
}

/// Convertit un entier “scalé” (×10^chiffres) en texte décimal.
fn scale_vers_decimal(mut scale: BigInt, chiffres: usize) -> String {
    let neg = scale.is_negative();
    if neg {
        scale = -scale;
    }

    let base = pow10(chiffres);
    let entier = &scale / &base;
    let reste = &scale % &base;

    let signe = if neg { "-" } else { "" };
    if chiffres == 0 || reste.is_zero() {
        return format!("{signe}{entier}");
    }

    let mut frac = reste.to_str_radix(10);
    while frac.len() < chiffres {
        frac.insert(0, '0');
    }
    // pas de zéros inutiles : 2.5 et non 2.500000
    let frac = frac.trim_end_matches('0');

    format!("{signe}{entier}.{frac}")
}

/// Texte du résultat, au plus `chiffres` décimales.
pub fn lecture(v: f64, chiffres: usize) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    match BigRational::from_float(v) {
        Some(r) => scale_vers_decimal(rationnel_scale(&r, chiffres), chiffres),
        None => format!("{v}"),
    }
}
