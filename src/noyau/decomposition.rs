// src/noyau/decomposition.rs
//
// Décomposition BBP : π = Σ 16^(−k) [ 4/(8k+1) − 2/(8k+4) − 1/(8k+5) − 1/(8k+6) ].
// Quatre coefficients fixes {1,4,5,6}, poids fixes {+4,−2,−1,−1},
// chaque coefficient scindé en deux partitions (finie / queue)
// => 8 tâches indépendantes par extraction, sans état partagé.

use super::sommes::{somme_finie, somme_queue};

/// Les quatre coefficients de dénominateur et leur poids dans la combinaison.
/// Indépendants de l'appel : jamais modifiés, jamais globaux mutables.
pub const COEFFICIENTS: [(u64, f64); 4] = [(1, 4.0), (4, -2.0), (5, -1.0), (6, -1.0)];

/// Moitié de série portée par une tâche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Partition {
    /// k = 0..=n, numérateur réduit modulo 8k+coeff.
    Finie,
    /// k > n, reste convergent tronqué.
    Queue,
}

/// Une unité de travail autonome : décrit entièrement son calcul,
/// ne dépend d'aucune autre tâche, produit exactement un scalaire.
#[derive(Clone, Copy, Debug)]
pub struct TachePartielle {
    /// Indice interne (0-indexé, déjà normalisé).
    pub indice: u64,
    /// Coefficient ∈ {1,4,5,6}.
    pub coefficient: u64,
    pub partition: Partition,
}

impl TachePartielle {
    /// Calcule le scalaire de la tâche (pur, sans effet de bord).
    pub fn calculer(&self, termes_queue: u32) -> Result<f64, String> {
        match self.partition {
            Partition::Finie => somme_finie(self.indice, self.coefficient),
            Partition::Queue => somme_queue(self.indice, self.coefficient, termes_queue),
        }
    }
}

/// Les 8 tâches d'une extraction, dans l'ordre de combinaison :
/// pour chaque coefficient (ordre de COEFFICIENTS), la finie puis la queue.
/// L'ordonnanceur rend ses résultats dans ce même ordre — c'est lui qui
/// garantit l'attribution (coefficient, partition) → résultat.
pub fn taches_pour(indice: u64) -> Vec<TachePartielle> {
    let mut taches = Vec::with_capacity(2 * COEFFICIENTS.len());

    for (coefficient, _poids) in COEFFICIENTS {
        taches.push(TachePartielle {
            indice,
            coefficient,
            partition: Partition::Finie,
        });
        taches.push(TachePartielle {
            indice,
            coefficient,
            partition: Partition::Queue,
        });
    }

    taches
}
