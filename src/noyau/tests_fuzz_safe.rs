//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur avec des suites de touches aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur de suite bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche (point unique, valeur non vide, etc.)

use std::time::{Duration, Instant};

use super::moteur::Moteur;
use super::nombre::lire_nombre;
use super::operateur::Operateur;
use super::touche::Touche;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres majoritaires (sinon presque aucune saisie multi-chiffres)
    match rng.pick(20) {
        0..=9 => Touche::chiffre(rng.pick(10) as u8),
        10..=13 => Touche::Operateur(Operateur::TOUS[rng.pick(4) as usize]),
        14 => Touche::Egal,
        15 => Touche::PlusMoins,
        16 => Touche::Pourcent,
        17 | 18 => Touche::Virgule,
        _ => {
            // AC rare : on veut des sessions longues
            if rng.pick(4) == 0 {
                Touche::Effacer
            } else {
                Touche::Egal
            }
        }
    }
}

fn gen_suite(rng: &mut Rng, max_len: u32) -> Vec<Touche> {
    let n = 1 + rng.pick(max_len);
    (0..n).map(|_| gen_touche(rng)).collect()
}

fn check_invariants(m: &Moteur, suite: &[Touche]) {
    if let Err(e) = m.verifier_invariants() {
        panic!("invariant cassé: {e} ; suite={suite:?}");
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_invariants_apres_chaque_touche() {
    let start = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, max);

        let suite = gen_suite(&mut rng, 40);
        let mut m = Moteur::new();
        for (i, t) in suite.iter().enumerate() {
            m.appliquer(*t);
            check_invariants(&m, &suite[..=i]);
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut rng = Rng::new(42);

    for _ in 0..500 {
        let suite = gen_suite(&mut rng, 30);

        let mut a = Moteur::new();
        let mut b = Moteur::new();
        for t in &suite {
            a.appliquer(*t);
            b.appliquer(*t);
        }
        assert_eq!(a, b, "suite={suite:?}");
    }
}

#[test]
fn fuzz_effacer_revient_toujours_a_l_etat_initial() {
    let mut rng = Rng::new(7);

    for _ in 0..500 {
        let suite = gen_suite(&mut rng, 30);
        let mut m = Moteur::new();
        for t in &suite {
            m.appliquer(*t);
        }
        m.appliquer(Touche::Effacer);
        assert_eq!(m, Moteur::new(), "suite={suite:?}");
        assert_eq!(m.affichage_resultat(), "0");
        assert_eq!(m.affichage_expression(), "");
    }
}

#[test]
fn fuzz_egal_repete_est_stable() {
    let mut rng = Rng::new(1234);

    for _ in 0..500 {
        let suite = gen_suite(&mut rng, 30);
        let mut m = Moteur::new();
        for t in &suite {
            m.appliquer(*t);
        }
        m.appliquer(Touche::Egal);
        let apres_un = m.clone();
        m.appliquer(Touche::Egal);
        assert_eq!(m, apres_un, "suite={suite:?}");
        assert_eq!(m.operateur_en_attente(), None);
    }
}

#[test]
fn fuzz_plus_moins_involution() {
    let mut rng = Rng::new(99);

    for _ in 0..500 {
        let suite = gen_suite(&mut rng, 30);
        let mut m = Moteur::new();
        for t in &suite {
            m.appliquer(*t);
        }
        let avant = m.clone();
        m.appliquer(Touche::PlusMoins);
        m.appliquer(Touche::PlusMoins);
        // "-0" n’est jamais produit à partir de "0" : l’aller-retour est exact
        if avant.affichage_resultat() != "0" {
            assert_eq!(m, avant, "suite={suite:?}");
        }
    }
}

#[test]
fn fuzz_valeur_toujours_lisible() {
    let mut rng = Rng::new(2024);

    for _ in 0..1_000 {
        let suite = gen_suite(&mut rng, 25);
        let mut m = Moteur::new();
        for t in &suite {
            m.appliquer(*t);
            // les suites générées ne débordent jamais : pas de NaN à l’écran
            let v = lire_nombre(m.affichage_resultat());
            assert!(!v.is_nan(), "NaN pour {:?} ; suite={suite:?}", m.affichage_resultat());
        }
    }
}
