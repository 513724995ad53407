//! Moteur d’évaluation : un accumulateur + au plus une opération binaire en attente.
//!
//! Évaluation immédiate de gauche à droite, sans priorité : `2 + 3 ×` calcule
//! déjà `5` avant d’attendre l’opérande du `×`. Chaque jeton reçu est ajouté au
//! programme et prolonge la description.

use std::collections::HashMap;

use super::description::{Avant, Description};
use super::operateurs::{lookup, Operateur};
use super::programme::{Jeton, Programme};

/// Valeurs des variables (nom -> valeur), 0.0 pour un nom jamais affecté.
pub type Variables = HashMap<String, f64>;

#[derive(Clone, Copy, Debug)]
struct OperationEnAttente {
    combine: fn(f64, f64) -> f64,
    premier: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Evaluateur {
    accumulateur: f64,
    attente: Option<OperationEnAttente>,
    description: Description,
    finit_par_operande: bool,
    programme: Programme,
}

impl Evaluateur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulateur(&self) -> f64 {
        self.accumulateur
    }

    /// Une opération binaire attend son second opérande.
    pub fn est_partiel(&self) -> bool {
        self.attente.is_some()
    }

    pub fn description(&self) -> &str {
        self.description.texte()
    }

    pub fn finit_par_operande(&self) -> bool {
        self.finit_par_operande
    }

    pub fn programme(&self) -> &Programme {
        &self.programme
    }

    pub fn dernier_binaire(&self) -> Option<usize> {
        self.description.dernier_binaire()
    }

    fn avant(&self) -> Avant {
        Avant {
            partiel: self.est_partiel(),
            finit_par_operande: self.finit_par_operande,
            accumulateur: self.accumulateur,
        }
    }

    fn resout_attente(&mut self) {
        if let Some(op) = self.attente.take() {
            self.accumulateur = (op.combine)(op.premier, self.accumulateur);
        }
    }

    /// Opérande littéral : ne touche ni à l’attente ni à la description.
    pub fn set_operand(&mut self, valeur: f64) {
        self.accumulateur = valeur;
        self.programme.push(Jeton::Operande(valeur));
    }

    /// Opérande variable : un nom inconnu est lié à 0.0 au premier accès.
    pub fn set_variable(&mut self, nom: &str, variables: &mut Variables) {
        let valeur = *variables.entry(nom.to_string()).or_insert(0.0);
        self.accumulateur = valeur;
        self.finit_par_operande = true;
        self.programme.push(Jeton::Variable(nom.to_string()));
        self.description.variable(nom);
    }

    /// Applique un symbole. `tirage` n’est appelé que pour un opérateur aléatoire.
    ///
    /// Le symbole est toujours ajouté au programme ; inconnu, il ne fait rien d’autre.
    pub fn perform_operation(&mut self, symbole: &str, tirage: impl FnOnce() -> f64) {
        self.programme.push(Jeton::Operation(symbole.to_string()));

        let Some(operateur) = lookup(symbole) else {
            log::debug!("symbole inconnu ignoré: {symbole:?}");
            return;
        };

        let avant = self.avant();
        match operateur {
            Operateur::Constante(valeur) => {
                self.description.constante(symbole, avant);
                self.accumulateur = valeur;
                self.finit_par_operande = true;
            }
            Operateur::Unaire(f) => {
                self.description.unaire(symbole, avant);
                self.accumulateur = f(self.accumulateur);
                self.finit_par_operande = true;
            }
            Operateur::Binaire(f) => {
                self.description.binaire(symbole, avant);
                self.resout_attente();
                self.attente = Some(OperationEnAttente {
                    combine: f,
                    premier: self.accumulateur,
                });
                self.finit_par_operande = false;
            }
            Operateur::Egal => {
                self.description.egal(avant);
                self.resout_attente();
                self.finit_par_operande = true;
            }
            Operateur::Aleatoire => {
                let valeur = tirage();
                self.description.aleatoire(valeur, avant);
                self.set_operand(valeur);
                self.finit_par_operande = true;
            }
        }
    }
}
