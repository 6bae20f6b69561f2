// src/noyau/ordonnanceur.rs
//
// Exécution fork-join des tâches indépendantes.
// - barrière complète : rien n'est rendu avant que tout soit fini
// - attribution par position : resultats[i] correspond à taches[i],
//   quel que soit l'ordre d'achèvement
// - échec d'une tâche => échec de l'appel entier (pas de résultat partiel),
//   après que les autres tâches ont pu se terminer
//
// Générique sur le type de tâche et la fonction de travail : les tests
// d'attribution passent des tâches sentinelles synthétiques.

use rayon::prelude::*;

/// Stratégie d'exécution. Aucun effet sur le chiffre produit,
/// seulement sur la manière de le calculer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategie {
    /// Une tâche après l'autre (référence, déterminisme trivial).
    Sequentielle,
    /// Un fil dédié par tâche, créé puis joint à chaque appel.
    FilsDedies,
    /// Réservoir de travail partagé (rayon).
    #[default]
    Reservoir,
}

/// Exécute `travail` sur chaque tâche et rend les scalaires
/// DANS L'ORDRE DU TABLEAU D'ENTRÉE.
pub fn executer<T, F>(strategie: Strategie, taches: &[T], travail: F) -> Result<Vec<f64>, String>
where
    T: Sync,
    F: Fn(&T) -> Result<f64, String> + Sync,
{
    match strategie {
        Strategie::Sequentielle => taches.iter().map(|t| travail(t)).collect(),

        Strategie::FilsDedies => std::thread::scope(|portee| {
            let travail = &travail;

            // Lancement de tous les fils, puis jointure dans l'ordre de
            // lancement : l'attribution suit la position, pas l'achèvement.
            let poignees: Vec<_> = taches
                .iter()
                .map(|t| portee.spawn(move || travail(t)))
                .collect();

            poignees
                .into_iter()
                .map(|p| match p.join() {
                    Ok(resultat) => resultat,
                    Err(_) => Err("panique dans un fil de calcul".to_string()),
                })
                .collect()
        }),

        // rayon conserve l'ordre d'indexation à la collecte ; un Err
        // court-circuite la collecte et se propage tel quel.
        Strategie::Reservoir => taches.par_iter().map(|t| travail(t)).collect(),
    }
}
