// src/noyau/modulaire.rs
//
// Exponentiation modulaire exacte (carrés successifs).
// - 16^(n−k) a des milliers de bits avant réduction pour n grand :
//   on réduit à chaque étape, jamais de puissance complète.
// - Arithmétique élargie en u128 : module ≤ i64::MAX, donc tout produit
//   de deux résidus réduits tient dans u128 sans débordement.

/// `base^exposant mod module`, résultat dans [0, module).
///
/// Préconditions (refus explicite, jamais implicite) :
/// - `module > 0` ;
/// - `exposant ≥ 0` — un exposant négatif appartient à la somme queue
///   (puissance fractionnaire, non modulaire) et ne doit jamais arriver ici.
pub fn puissance_mod(base: u64, exposant: i64, module: i64) -> Result<u64, String> {
    if module <= 0 {
        return Err(format!("module invalide: {module} (doit être > 0)"));
    }
    if exposant < 0 {
        return Err(format!(
            "exposant négatif: {exposant} (réservé à la somme queue, hors domaine modulaire)"
        ));
    }

    let m = module as u128;

    // x^e mod 1 = 0 pour tout e (y compris e = 0).
    if m == 1 {
        return Ok(0);
    }

    let mut e = exposant as u64;
    let mut acc: u128 = 1;
    let mut b = base as u128 % m;

    while e > 0 {
        if (e & 1) == 1 {
            acc = (acc * b) % m;
        }
        e >>= 1;
        if e > 0 {
            b = (b * b) % m;
        }
    }

    Ok(acc as u64)
}
