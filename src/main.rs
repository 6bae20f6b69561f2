// src/main.rs
//
// π hexa — point d'entrée CLI (pilote mince)
// ------------------------------------------
// Rôle :
// - lire la position n (1-indexée) et la stratégie sur la ligne de commande
// - appeler le noyau (noyau::extraire_chiffre)
// - afficher le n utilisé, le chiffre (hexa minuscule) et la durée
//   (+ la démarche complète avec --demarche)
//
// Toute la substance est dans src/noyau/ ; ici : entrées/sorties seulement.

use std::time::Instant;

mod noyau;

use noyau::extraction::DemarcheExtraction;
use noyau::{chiffre_hexa, extraire_chiffre, Reglages, Strategie};

const USAGE: &str = "usage: pi_hexa <n ≥ 1> [--sequentiel | --fils | --reservoir] [--demarche]";

/* ------------------------ Lecture des arguments ------------------------ */

struct Arguments {
    position: u64,
    strategie: Strategie,
    montrer_demarche: bool,
}

fn lire_arguments() -> Result<Arguments, String> {
    let mut position: Option<u64> = None;
    let mut strategie = Strategie::default();
    let mut montrer_demarche = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--sequentiel" => strategie = Strategie::Sequentielle,
            "--fils" => strategie = Strategie::FilsDedies,
            "--reservoir" => strategie = Strategie::Reservoir,
            "--demarche" => montrer_demarche = true,
            autre => {
                if position.is_some() {
                    return Err(format!("argument en trop: {autre}"));
                }
                let n: u64 = autre
                    .parse()
                    .map_err(|_| format!("position invalide: {autre}"))?;
                position = Some(n);
            }
        }
    }

    let position = position.ok_or_else(|| "position manquante".to_string())?;
    Ok(Arguments {
        position,
        strategie,
        montrer_demarche,
    })
}

/* ------------------------ Affichage de la démarche ------------------------ */

fn afficher_demarche(d: &DemarcheExtraction) {
    println!("Démarche (n interne = {}):", d.n_interne);
    for s in &d.sommes {
        println!(
            "  coefficient {} ({:?}) : {:.17}",
            s.coefficient, s.partition, s.valeur
        );
    }
    println!("  combinaison p1 = {:.17}", d.combinaison);
    println!("  fraction       = {:.17}", d.fraction);
    if let Some(avertissement) = &d.avertissement {
        println!("  avertissement  : {avertissement}");
    }
}

/* ------------------------ Entrée ------------------------ */

fn main() {
    env_logger::init();

    let arguments = match lire_arguments() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("erreur: {e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let n = arguments.position;
    println!("Calcul pour n = {n} ({:?})", arguments.strategie);

    let reglages = Reglages {
        strategie: arguments.strategie,
        ..Reglages::default()
    };

    let depart = Instant::now();
    let resultat = extraire_chiffre(n, &reglages);
    let duree = depart.elapsed();

    match resultat {
        Ok((chiffre, demarche)) => {
            println!(
                "Le chiffre n°{n} de π en hexadécimal est {}",
                chiffre_hexa(chiffre)
            );
            println!("Exécuté en {duree:?}");
            if arguments.montrer_demarche {
                afficher_demarche(&demarche);
            }
        }
        Err(e) => {
            eprintln!("erreur: {e}");
            std::process::exit(1);
        }
    }
}
