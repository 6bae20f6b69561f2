// src/noyau/extraction.rs
//
// Pipeline complet d'extraction : position publique (1-indexée)
//   -> normalisation n' = n − 1
//   -> 8 tâches (4 coefficients × {finie, queue}) via l'ordonnanceur
//   -> combinaison pondérée p1 = 4·S(1) − 2·S(4) − S(5) − S(6)
//   -> partie fractionnaire -> chiffre = ⌊frac × 16⌋
//
// Pur, sans état : une passe, pas de machine à états.

use super::decomposition::{taches_pour, Partition, COEFFICIENTS};
use super::ordonnanceur::{executer, Strategie};

/// Termes supplémentaires de la somme queue par défaut
/// (convergence ~16^−t : 5 suffit à la double précision).
pub const TERMES_QUEUE_DEFAUT: u32 = 5;

/// Réglages d'une extraction. Toujours passés explicitement :
/// pas de constante ambiante, les tests font varier librement.
#[derive(Clone, Copy, Debug)]
pub struct Reglages {
    /// Troncature de la somme queue (≥ 1).
    pub termes_queue: u32,
    /// Stratégie d'exécution des 8 tâches.
    pub strategie: Strategie,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            termes_queue: TERMES_QUEUE_DEFAUT,
            strategie: Strategie::default(),
        }
    }
}

/// Une somme partielle attribuée (trace de la démarche).
#[derive(Clone, Copy, Debug)]
pub struct SommePartielle {
    pub coefficient: u64,
    pub partition: Partition,
    pub valeur: f64,
}

/// Démarche d'une extraction : les valeurs intermédiaires observables,
/// pour les tests et l'affichage, sans recalcul.
#[derive(Clone, Debug, Default)]
pub struct DemarcheExtraction {
    /// Indice interne réellement utilisé (n_public − 1).
    pub n_interne: u64,
    /// Les 8 sommes partielles, dans l'ordre de combinaison.
    pub sommes: Vec<SommePartielle>,
    /// p1, la combinaison pondérée.
    pub combinaison: f64,
    /// p1 − ⌊p1⌋. Garanti dans [0,1) par construction BBP ; l'arrondi
    /// flottant peut le pousser à 1.0 près d'une frontière de chiffre.
    pub fraction: f64,
    /// Renseigné si `fraction` sort de [0,1). Jamais corrigé d'office :
    /// un écrêtage cacherait les régressions de précision aux tests.
    pub avertissement: Option<String>,
}

/// Extrait le `n_public`-ième chiffre hexadécimal de π (1-indexé).
///
/// Retour :
/// - le chiffre, entier dans [0,15] (rendu via [`chiffre_hexa`])
/// - la démarche (sommes partielles, combinaison, fraction, avertissement)
pub fn extraire_chiffre(
    n_public: u64,
    reglages: &Reglages,
) -> Result<(u8, DemarcheExtraction), String> {
    // Refus synchrone, avant tout lancement de tâche.
    if n_public < 1 {
        return Err(format!("position invalide: {n_public} (doit être ≥ 1)"));
    }
    let n_interne = n_public - 1;

    // 8 tâches indépendantes, jointes en barrière complète.
    let taches = taches_pour(n_interne);
    let resultats = executer(reglages.strategie, &taches, |t| {
        t.calculer(reglages.termes_queue)
    })?;

    // Combinaison pondérée : resultats[2i] = finie, resultats[2i+1] = queue
    // du i-ème coefficient (ordre garanti par l'ordonnanceur).
    let mut combinaison = 0.0_f64;
    let mut sommes = Vec::with_capacity(taches.len());

    for (i, (coefficient, poids)) in COEFFICIENTS.iter().enumerate() {
        let finie = resultats[2 * i];
        let queue = resultats[2 * i + 1];
        combinaison += poids * (finie + queue);

        sommes.push(SommePartielle {
            coefficient: *coefficient,
            partition: Partition::Finie,
            valeur: finie,
        });
        sommes.push(SommePartielle {
            coefficient: *coefficient,
            partition: Partition::Queue,
            valeur: queue,
        });
    }

    let fraction = combinaison - combinaison.floor();

    // Cas limite connu : près d'une frontière, l'arrondi peut rendre
    // fraction == 1.0. On signale, on ne masque pas (voir DESIGN.md).
    let avertissement = if (0.0..1.0).contains(&fraction) {
        None
    } else {
        let msg = format!(
            "fraction hors [0,1): {fraction} pour n = {n_public} (arrondi flottant près d'une frontière)"
        );
        log::warn!("{msg}");
        Some(msg)
    };

    let chiffre = (fraction * 16.0).floor() as u8;

    let demarche = DemarcheExtraction {
        n_interne,
        sommes,
        combinaison,
        fraction,
        avertissement,
    };

    Ok((chiffre, demarche))
}

/// Rendu d'un chiffre en caractère hexadécimal minuscule, sans préfixe.
/// Une valeur impossible (> 15, cas limite signalé ci-dessus) rend '?'.
pub fn chiffre_hexa(chiffre: u8) -> char {
    char::from_digit(chiffre as u32, 16).unwrap_or('?')
}
