//! API publique du noyau : ce que l’interface appelle.
//!
//! Contrats :
//! - aucune opération n’échoue ; un symbole inconnu est journalisé puis ignoré
//! - `reset` remet tout à zéro, variables comprises ; `clear` garde les variables
//! - `undo` et `rerun_program` rejouent le programme sur un état neuf,
//!   avec les valeurs *actuelles* des variables

use std::fmt;

use super::aleatoire::{SourceAleatoire, SourceSysteme};
use super::evaluation::{Evaluateur, Variables};
use super::nombre;
use super::programme::{rejouer, ErreurProgramme, Jeton, Programme};

/// Opérande fourni par l’appelant : un nombre saisi ou un nom de variable.
#[derive(Clone, Debug, PartialEq)]
pub enum Operande {
    Valeur(f64),
    Variable(String),
}

impl From<f64> for Operande {
    fn from(v: f64) -> Self {
        Operande::Valeur(v)
    }
}

impl From<&str> for Operande {
    fn from(nom: &str) -> Self {
        Operande::Variable(nom.to_string())
    }
}

impl From<String> for Operande {
    fn from(nom: String) -> Self {
        Operande::Variable(nom)
    }
}

pub struct Calculatrice {
    etat: Evaluateur,
    variables: Variables,
    source: Box<dyn SourceAleatoire>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculatrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculatrice")
            .field("etat", &self.etat)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::avec_source(SourceSysteme::new())
    }

    /// Calculatrice dont la touche "Ran" tire dans `source`.
    pub fn avec_source(source: impl SourceAleatoire + 'static) -> Self {
        Self {
            etat: Evaluateur::new(),
            variables: Variables::new(),
            source: Box::new(source),
        }
    }

    /* ------------------------ Entrées ------------------------ */

    pub fn set_operand(&mut self, operande: impl Into<Operande>) {
        match operande.into() {
            Operande::Valeur(v) => self.etat.set_operand(v),
            Operande::Variable(nom) => self.etat.set_variable(&nom, &mut self.variables),
        }
    }

    pub fn perform_operation(&mut self, symbole: &str) {
        let source = &mut self.source;
        self.etat.perform_operation(symbole, || source.echantillon());
    }

    /* ------------------------ Lectures ------------------------ */

    pub fn is_partial_result(&self) -> bool {
        self.etat.est_partiel()
    }

    pub fn output(&self) -> f64 {
        self.etat.accumulateur()
    }

    pub fn description(&self) -> &str {
        self.etat.description()
    }

    pub fn ends_in_operand(&self) -> bool {
        self.etat.finit_par_operande()
    }

    /* ------------------------ Variables ------------------------ */

    pub fn variable_values(&self) -> &Variables {
        &self.variables
    }

    /// Accès direct aux liaisons ; appeler `rerun_program` pour en voir l’effet.
    pub fn variable_values_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    pub fn set_variable(&mut self, nom: impl Into<String>, valeur: f64) {
        self.variables.insert(nom.into(), valeur);
    }

    /* ------------------------ Remises à zéro + rejeu ------------------------ */

    /// Remise à zéro totale : état, programme et variables.
    pub fn reset(&mut self) {
        self.clear();
        self.variables.clear();
    }

    /// Nouvelle équation : état et programme effacés, variables conservées.
    pub fn clear(&mut self) {
        self.etat = Evaluateur::new();
    }

    /// Retire le dernier jeton puis rejoue le reste.
    pub fn undo(&mut self) {
        let mut programme = self.etat.programme().clone();
        let retire = programme.retire_dernier();
        log::debug!("undo: {retire:?} retiré, {} jetons restants", programme.len());
        self.rejoue(programme.jetons());
    }

    /// Rejoue tout le programme (après un changement de variable).
    pub fn rerun_program(&mut self) {
        let programme = self.etat.programme().clone();
        self.rejoue(programme.jetons());
    }

    fn rejoue(&mut self, jetons: &[Jeton]) {
        self.etat = rejouer(jetons, &mut self.variables, self.source.as_mut());
    }

    /* ------------------------ Programme ------------------------ */

    pub fn program(&self) -> &Programme {
        self.etat.programme()
    }

    /// Remise à zéro totale, puis rejeu de chaque jeton.
    pub fn set_program(&mut self, programme: impl Into<Programme>) {
        let programme = programme.into();
        self.reset();
        self.rejoue(programme.jetons());
    }

    pub fn export_program(&self) -> Result<String, ErreurProgramme> {
        self.program().to_json()
    }

    /// Charge un programme JSON ; en cas d’erreur, l’état courant est conservé.
    ///
    /// Une chaîne est une variable si ce nom est lié avant l’import, sinon un
    /// symbole : un symbole inconnu reste journalisé et sans effet.
    pub fn import_program(&mut self, json: &str) -> Result<(), ErreurProgramme> {
        let variables = &self.variables;
        let programme = Programme::from_json(json, |nom| variables.contains_key(nom))?;
        log::debug!("import d’un programme de {} jetons", programme.len());
        self.set_program(programme);
        Ok(())
    }

    /// Validation du texte brut avant `set_operand`.
    pub fn contains_valid_number(texte: &str) -> bool {
        nombre::contains_valid_number(texte)
    }
}
