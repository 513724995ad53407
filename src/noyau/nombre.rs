// src/noyau/nombre.rs
//
// Texte des nombres dans la description (forme canonique, indépendante de la locale)
// + validation du texte brut saisi par l’appelant.

/// Représentation canonique d’un f64 pour la description.
///
/// Forme décimale la plus courte qui relit la même valeur : `3` pour 3.0,
/// `0.1`, `NaN`, `inf`. Jamais d’arrondi d’affichage ici.
pub fn texte_canonique(v: f64) -> String {
    format!("{v}")
}

/// Vrai si `texte` se lit comme un nombre fini (`"3"`, `"3."`, `".5"`, `"1e3"`).
///
/// Refuse le vide, `"."`, les espaces, et les formes non finies (`"inf"`, `"NaN"`).
pub fn contains_valid_number(texte: &str) -> bool {
    texte.parse::<f64>().is_ok_and(f64::is_finite)
}
