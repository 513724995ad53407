//! Noyau de la calculatrice (évaluation immédiate + équation affichée)
//!
//! Organisation interne :
//! - operateurs.rs   : table symbole -> comportement (figée)
//! - evaluation.rs   : accumulateur + opération binaire en attente
//! - description.rs  : équation texte, construite en une passe
//! - programme.rs    : journal des jetons, rejeu, export JSON
//! - calculatrice.rs : API publique (variables, reset/clear/undo/rerun)
//! - aleatoire.rs    : source injectée de la touche "Ran"
//! - nombre.rs       : texte canonique des nombres + validation de saisie

pub mod aleatoire;
pub mod calculatrice;
pub mod description;
pub mod evaluation;
pub mod nombre;
pub mod operateurs;
pub mod programme;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use calculatrice::{Calculatrice, Operande};
pub use programme::{ErreurProgramme, Jeton, Programme};
