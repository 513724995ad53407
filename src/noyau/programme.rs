//! Programme : la suite exacte des jetons reçus, et son rejeu.
//!
//! Rejouer le programme depuis un évaluateur neuf redonne exactement
//! l’accumulateur et la description (aux valeurs des variables près, qui
//! peuvent avoir changé : c’est tout l’intérêt du rejeu).
//!
//! Forme sérialisée : tableau JSON de nombres et de chaînes, `[3, "+", "x", "="]`.
//! À la relecture, une chaîne est une variable si le lecteur connaît ce nom,
//! sinon un symbole (connu ou non de la table : un inconnu reste sans effet).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aleatoire::SourceAleatoire;
use super::evaluation::{Evaluateur, Variables};
use super::operateurs::est_aleatoire;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(into = "JetonBrut")]
pub enum Jeton {
    Operande(f64),
    Operation(String),
    Variable(String),
}

/// Ce que voit le JSON : un nombre ou une chaîne.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum JetonBrut {
    Nombre(f64),
    Texte(String),
}

impl From<Jeton> for JetonBrut {
    fn from(jeton: Jeton) -> Self {
        match jeton {
            Jeton::Operande(v) => JetonBrut::Nombre(v),
            Jeton::Operation(s) | Jeton::Variable(s) => JetonBrut::Texte(s),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurProgramme {
    #[error("programme illisible: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nombre non représentable dans le programme: {0}")]
    NombreNonFini(f64),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Programme {
    jetons: Vec<Jeton>,
}

impl Programme {
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn len(&self) -> usize {
        self.jetons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jetons.is_empty()
    }

    pub(crate) fn push(&mut self, jeton: Jeton) {
        self.jetons.push(jeton);
    }

    /// Retire le dernier jeton.
    ///
    /// Si c’était le tirage d’un opérateur aléatoire, l’opérateur part avec lui :
    /// les deux jetons viennent de la même touche.
    pub fn retire_dernier(&mut self) -> Option<Jeton> {
        let dernier = self.jetons.pop()?;
        if matches!(dernier, Jeton::Operande(_)) {
            if let Some(Jeton::Operation(s)) = self.jetons.last() {
                if est_aleatoire(s) {
                    self.jetons.pop();
                }
            }
        }
        Some(dernier)
    }

    pub fn to_json(&self) -> Result<String, ErreurProgramme> {
        for jeton in &self.jetons {
            if let Jeton::Operande(v) = jeton {
                if !v.is_finite() {
                    return Err(ErreurProgramme::NombreNonFini(*v));
                }
            }
        }
        Ok(serde_json::to_string(self)?)
    }

    /// Relit un programme exporté. `est_variable` tranche pour chaque chaîne :
    /// vrai, c’est une variable ; faux, un symbole passé tel quel à l’évaluateur.
    pub fn from_json(
        texte: &str,
        est_variable: impl Fn(&str) -> bool,
    ) -> Result<Self, ErreurProgramme> {
        let bruts: Vec<JetonBrut> = serde_json::from_str(texte)?;
        let jetons = bruts
            .into_iter()
            .map(|brut| match brut {
                JetonBrut::Nombre(v) => Jeton::Operande(v),
                JetonBrut::Texte(s) if est_variable(&s) => Jeton::Variable(s),
                JetonBrut::Texte(s) => Jeton::Operation(s),
            })
            .collect::<Vec<_>>();
        Ok(Self::from(jetons))
    }
}

impl From<Vec<Jeton>> for Programme {
    fn from(jetons: Vec<Jeton>) -> Self {
        Self { jetons }
    }
}

/// Rejoue `jetons` sur un évaluateur neuf.
///
/// Un opérateur aléatoire suivi d’un opérande réutilise ce tirage journalisé ;
/// sans tirage derrière lui, il en demande un nouveau à `source`.
/// Les noms jamais liés rencontrés en route sont liés à 0.0 dans `variables`.
pub fn rejouer(
    jetons: &[Jeton],
    variables: &mut Variables,
    source: &mut dyn SourceAleatoire,
) -> Evaluateur {
    let mut eval = Evaluateur::new();
    let mut iter = jetons.iter().peekable();

    while let Some(jeton) = iter.next() {
        match jeton {
            Jeton::Operande(v) => eval.set_operand(*v),
            Jeton::Variable(nom) => eval.set_variable(nom, variables),
            Jeton::Operation(symbole) => {
                let journalise = match iter.peek() {
                    Some(Jeton::Operande(v)) if est_aleatoire(symbole) => {
                        let v = *v;
                        iter.next();
                        Some(v)
                    }
                    _ => None,
                };
                eval.perform_operation(symbole, || {
                    journalise.unwrap_or_else(|| source.echantillon())
                });
            }
        }
    }

    log::trace!(
        "rejeu de {} jetons -> {} ({:?})",
        jetons.len(),
        eval.accumulateur(),
        eval.description()
    );
    eval
}
