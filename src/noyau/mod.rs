//! Noyau BBP — extraction directe d'un chiffre hexadécimal de π
//!
//! Organisation interne :
//! - modulaire.rs      : exponentiation modulaire exacte (carrés successifs)
//! - sommes.rs         : somme finie (k ≤ n) + somme queue (k > n)
//! - decomposition.rs  : coefficients {1,4,5,6}, poids {+4,−2,−1,−1}, tâches
//! - ordonnanceur.rs   : fork-join des 8 tâches (séquentiel / fils / réservoir)
//! - extraction.rs     : pipeline complet -> chiffre dans [0,15]

pub mod decomposition;
pub mod extraction;
pub mod modulaire;
pub mod ordonnanceur;
pub mod sommes;



// API publique minimale
pub use extraction::{chiffre_hexa, extraire_chiffre, Reglages};
pub use ordonnanceur::Strategie;
