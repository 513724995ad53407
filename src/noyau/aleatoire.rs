// src/noyau/aleatoire.rs
//
// Source injectée pour l’opérateur "Ran".

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fournit des tirages uniformes dans [0, 1).
pub trait SourceAleatoire {
    fn echantillon(&mut self) -> f64;
}

/// Source par défaut : `StdRng` (graine OS, ou fixée pour rejouer une séance).
#[derive(Clone, Debug)]
pub struct SourceSysteme {
    rng: StdRng,
}

impl SourceSysteme {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn avec_graine(graine: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(graine),
        }
    }
}

impl Default for SourceSysteme {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceAleatoire for SourceSysteme {
    fn echantillon(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
