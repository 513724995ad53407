//! src/app/etat.rs
//!
//! État UI (sans vue) : l’appelant du noyau.
//!
//! Rôle : accumuler la saisie (chiffres, point), décider quand une nouvelle
//! équation commence, alimenter la Calculatrice et relire résultat + équation.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice`.
//! - Nouvelle équation = `clear()` (la mémoire M survit) ; bouton C = `reset()`.
//! - Garde-fou : bornes sur le nombre de décimales affichées.

use calculatrice_equation::noyau::Calculatrice;

use super::lecture::lecture;

/// Décimales affichées par défaut.
const CHIFFRES_DEFAUT: usize = 6;

/// Garde-fou : au-delà, un f64 n’a plus rien à dire.
const CHIFFRES_MAX: usize = 15;

/// Nom de la variable liée par "→M" et lue par "M".
pub const VARIABLE_MEMOIRE: &str = "M";

#[derive(Debug)]
pub struct AppCalc {
    pub calculatrice: Calculatrice,

    // --- affichage deux lignes ---
    pub affichage: String, // ligne du bas : saisie en cours ou résultat ("" = vide)
    pub equation: String,  // ligne du haut : description + "..." ou "="
    pub erreur: String,    // message (sauvegarde / restauration)

    // --- programme sauvegardé (JSON) ---
    pub sauvegarde: Option<String>,

    // --- paramètres ---
    pub chiffres: usize,

    // --- saisie ---
    saisie_en_cours: bool,
    // la prochaine opération démarre une nouvelle équation
    nouvelle_equation: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calculatrice: Calculatrice::new(),
            affichage: "0".to_string(),
            equation: String::new(),
            erreur: String::new(),
            sauvegarde: None,
            chiffres: CHIFFRES_DEFAUT,
            saisie_en_cours: false,
            nouvelle_equation: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Vrai si la saisie ne prolonge pas une expression : elle en commence une.
    fn saisie_demarre_equation(&self) -> bool {
        self.affichage.is_empty()
            || (!self.calculatrice.is_partial_result() && !self.saisie_en_cours)
    }

    pub fn chiffre(&mut self, c: char) {
        if self.saisie_demarre_equation() {
            self.affichage = c.to_string();
            self.nouvelle_equation = true;
        } else if self.saisie_en_cours {
            self.affichage.push(c);
        } else {
            self.affichage = c.to_string();
        }
        self.saisie_en_cours = true;
    }

    pub fn point(&mut self) {
        if self.saisie_demarre_equation() {
            self.affichage = ".".to_string();
            self.nouvelle_equation = true;
        } else if !self.saisie_en_cours {
            self.affichage = ".".to_string();
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
        self.saisie_en_cours = true;
    }

    fn backspace(&mut self) {
        self.affichage.pop();
    }

    /// "↶" : efface un caractère pendant la saisie, sinon annule le dernier jeton.
    pub fn annuler(&mut self) {
        if self.saisie_en_cours {
            self.backspace();
        } else {
            self.calculatrice.undo();
            self.rafraichir();
        }
    }

    /* ------------------------ Opérations ------------------------ */

    /// Opérateur ("+", "√", "=", ...) appliqué à la saisie en cours ou à l’accumulateur.
    pub fn operation(&mut self, symbole: &str) {
        if self.saisie_en_cours {
            if !Calculatrice::contains_valid_number(&self.affichage) {
                return;
            }
            if self.nouvelle_equation {
                self.calculatrice.clear();
                self.nouvelle_equation = false;
            }
            // contains_valid_number garantit la lecture
            if let Ok(v) = self.affichage.parse::<f64>() {
                self.calculatrice.set_operand(v);
            }
        } else if self.affichage.is_empty() {
            return;
        }

        self.calculatrice.perform_operation(symbole);
        self.rafraichir();
    }

    /// Constante ou "Ran" : commence une nouvelle équation si la précédente est close.
    pub fn operande(&mut self, symbole: &str) {
        self.nouvelle_equation_si_close();
        self.calculatrice.perform_operation(symbole);
        self.rafraichir();
    }

    /// "M" : la variable mémoire comme opérande.
    pub fn rappel_memoire(&mut self) {
        self.nouvelle_equation_si_close();
        self.calculatrice.set_operand(VARIABLE_MEMOIRE);
        self.rafraichir();
    }

    /// "→M" : lie M à la valeur affichée, puis rejoue tout le programme.
    pub fn memoriser(&mut self) {
        if !Calculatrice::contains_valid_number(&self.affichage) {
            return;
        }
        let Ok(v) = self.affichage.parse::<f64>() else {
            return;
        };
        self.calculatrice.set_variable(VARIABLE_MEMOIRE, v);
        self.calculatrice.rerun_program();
        self.nouvelle_equation = false;
        self.rafraichir();
    }

    fn nouvelle_equation_si_close(&mut self) {
        if self.nouvelle_equation || self.calculatrice.ends_in_operand() {
            self.calculatrice.clear();
            self.nouvelle_equation = false;
        }
    }

    /* ------------------------ Remises à zéro ------------------------ */

    /// C : remise à zéro totale (noyau + mémoire M + affichage).
    pub fn reset_total(&mut self) {
        self.calculatrice.reset();
        self.erreur.clear();
        self.nouvelle_equation = false;
        self.rafraichir();
    }

    /* ------------------------ Programme ------------------------ */

    pub fn sauver(&mut self) {
        match self.calculatrice.export_program() {
            Ok(json) => {
                self.sauvegarde = Some(json);
                self.erreur.clear();
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    pub fn restaurer(&mut self) {
        let Some(json) = self.sauvegarde.clone() else {
            self.set_erreur("Aucun programme sauvegardé");
            return;
        };
        // "M" relu comme la variable mémoire, même après un C
        self.calculatrice
            .variable_values_mut()
            .entry(VARIABLE_MEMOIRE.to_string())
            .or_insert(0.0);
        match self.calculatrice.import_program(&json) {
            Ok(()) => {
                self.erreur.clear();
                self.nouvelle_equation = false;
                self.rafraichir();
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /* ------------------------ Affichage ------------------------ */

    /// Relit le noyau : résultat + équation ; la saisie est terminée.
    fn rafraichir(&mut self) {
        self.affichage = lecture(self.calculatrice.output(), self.chiffres);
        self.equation = self.texte_equation();
        self.saisie_en_cours = false;
    }

    fn texte_equation(&self) -> String {
        let description = self.calculatrice.description();
        if description.is_empty() {
            return String::new();
        }
        let suffixe = if self.calculatrice.is_partial_result() {
            "..."
        } else {
            "="
        };
        format!("{description}{suffixe}")
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
    }

    /// Garde-fou : limite les décimales affichées.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.clamp(0, CHIFFRES_MAX);
        if !self.saisie_en_cours {
            self.affichage = lecture(self.calculatrice.output(), self.chiffres);
        }
    }
}
