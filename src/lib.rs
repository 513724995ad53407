//! Noyau de calculatrice scientifique « deux lignes ».
//!
//! Consomme des opérandes et des symboles un par un, tient le résultat courant
//! et l’équation affichée (`3+4...` en cours de frappe, `3+4=` une fois résolue).
//! L’interface egui (binaire) n’en est qu’un appelant.

pub mod noyau;
