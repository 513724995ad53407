//! Construction incrémentale de l’équation affichée ("3+4", "√(9)", "2+3×4").
//!
//! Une seule passe vers l’avant, règles locales uniquement : on ne relit jamais
//! la chaîne. L’état nécessaire arrive par [`Avant`] (photo de l’évaluateur
//! juste avant l’opérateur) et par l’ancre du dernier opérateur binaire, qui
//! permet à un unaire d’envelopper seulement « ce qui suit le dernier binaire ».

use super::nombre::texte_canonique;

/// État de l’évaluateur juste avant l’application d’un opérateur.
#[derive(Clone, Copy, Debug)]
pub struct Avant {
    /// Une opération binaire était en attente.
    pub partiel: bool,
    /// La description finissait par un opérande (constante, unaire, variable, "=").
    pub finit_par_operande: bool,
    pub accumulateur: f64,
}

/// Position (octets) et largeur du dernier symbole binaire dans le texte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Ancre {
    position: usize,
    largeur: usize,
}

impl Ancre {
    fn fin(self) -> usize {
        self.position + self.largeur
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description {
    texte: String,
    ancre: Option<Ancre>,
}

impl Description {
    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Position du dernier symbole binaire (longueur du texte juste avant lui).
    pub fn dernier_binaire(&self) -> Option<usize> {
        self.ancre.map(|a| a.position)
    }

    /// Hors attente, une constante démarre une nouvelle expression.
    pub fn constante(&mut self, symbole: &str, avant: Avant) {
        if avant.partiel {
            self.texte.push_str(symbole);
        } else {
            self.texte = symbole.to_string();
        }
    }

    pub fn aleatoire(&mut self, tirage: f64, avant: Avant) {
        self.constante(&texte_canonique(tirage), avant);
    }

    pub fn variable(&mut self, nom: &str) {
        self.texte.push_str(nom);
    }

    pub fn unaire(&mut self, symbole: &str, avant: Avant) {
        match (avant.partiel, avant.finit_par_operande) {
            (true, true) => {
                // n’envelopper que la fin, après le dernier binaire
                let coupe = self.ancre.map_or(0, Ancre::fin);
                let suffixe = self.texte.split_off(coupe);
                self.texte.push_str(&format!("{symbole}({suffixe})"));
            }
            (true, false) => {
                let acc = texte_canonique(avant.accumulateur);
                self.texte.push_str(&format!("{symbole}({acc})"));
            }
            (false, true) => {
                self.texte = format!("{symbole}({})", self.texte);
            }
            (false, false) => {
                self.texte = format!("{symbole}({})", texte_canonique(avant.accumulateur));
            }
        }
    }

    pub fn binaire(&mut self, symbole: &str, avant: Avant) {
        match (avant.partiel, avant.finit_par_operande) {
            // deux binaires de suite, ou opérande tapé : l’accumulateur s’écrit d’abord
            (true, false) => self.texte.push_str(&texte_canonique(avant.accumulateur)),
            // premier opérateur d’une expression neuve
            (false, false) => self.texte = texte_canonique(avant.accumulateur),
            (_, true) => {}
        }

        self.ancre = Some(Ancre {
            position: self.texte.len(),
            largeur: symbole.len(),
        });
        self.texte.push_str(symbole);
    }

    /// Sans attente, "=" ne touche pas au texte.
    pub fn egal(&mut self, avant: Avant) {
        if avant.partiel && !avant.finit_par_operande {
            self.texte.push_str(&texte_canonique(avant.accumulateur));
        }
    }
}
