// src/noyau/operateurs.rs
//
// Table des opérateurs : symbole -> comportement.
//
// Règles:
// - table figée (static), construite une seule fois pour tout le processus
// - un symbole inconnu donne None : l’appelant l’ignore, sans erreur
// - trigonométrie en radians

use std::f64::consts;

/// Comportement associé à un symbole.
#[derive(Clone, Copy, Debug)]
pub enum Operateur {
    Constante(f64),
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
    Egal,
    /// Tirage uniforme dans [0, 1) depuis la source injectée.
    Aleatoire,
}

fn ajoute(a: f64, b: f64) -> f64 {
    a + b
}

fn soustrait(a: f64, b: f64) -> f64 {
    a - b
}

fn multiplie(a: f64, b: f64) -> f64 {
    a * b
}

fn divise(a: f64, b: f64) -> f64 {
    a / b
}

fn oppose(x: f64) -> f64 {
    -x
}

static TABLE: [(&str, Operateur); 17] = [
    ("π", Operateur::Constante(consts::PI)),
    ("e", Operateur::Constante(consts::E)),
    ("√", Operateur::Unaire(f64::sqrt)),
    ("cos", Operateur::Unaire(f64::cos)),
    ("sin", Operateur::Unaire(f64::sin)),
    ("tan", Operateur::Unaire(f64::tan)),
    ("log2", Operateur::Unaire(f64::log2)),
    ("±", Operateur::Unaire(oppose)),
    ("+", Operateur::Binaire(ajoute)),
    ("−", Operateur::Binaire(soustrait)),
    // alias ASCII du moins
    ("-", Operateur::Binaire(soustrait)),
    ("×", Operateur::Binaire(multiplie)),
    ("÷", Operateur::Binaire(divise)),
    ("^", Operateur::Binaire(f64::powf)),
    ("=", Operateur::Egal),
    ("Ran", Operateur::Aleatoire),
    // alias ASCII de la racine
    ("sqrt", Operateur::Unaire(f64::sqrt)),
];

/// Cherche le comportement d’un symbole. Pur, sans effet de bord.
pub fn lookup(symbole: &str) -> Option<Operateur> {
    TABLE
        .iter()
        .find(|(s, _)| *s == symbole)
        .map(|(_, op)| *op)
}

/// Vrai si le symbole tire un nombre aléatoire (son tirage suit dans le programme).
pub fn est_aleatoire(symbole: &str) -> bool {
    matches!(lookup(symbole), Some(Operateur::Aleatoire))
}
