//! Noyau — moteur de la calculatrice à pavé
//!
//! Réducteur d’état : une touche => une transition, totale et déterministe.
//!
//! Deux modes logiques :
//! - saisie du premier opérande (aucune opération en attente)
//! - saisie du second opérande (opérateur en attente)
//!
//! Seuls Opérateur et Égal changent de mode ; Effacer remet tout à zéro ;
//! chiffre / virgule / ± / % ne touchent qu’à la valeur courante.
//!
//! Chaînage gauche-droite sans priorité : chaque opérateur replie
//! immédiatement l’opération en attente (5 + 3 × 2 = 16).

use super::nombre::{format_nombre, lire_nombre};
use super::operateur::Operateur;
use super::touche::{Chiffre, Touche};

/// Valeur affichée au démarrage et après AC.
const VALEUR_INITIALE: &str = "0";

/// Opération en attente de son second opérande.
#[derive(Clone, Debug, PartialEq)]
struct Attente {
    gauche: String,
    operateur: Operateur,
}

/// État de session (unique, possédé par le moteur).
#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    courante: String,
    // opérande gauche + opérateur : présents ensemble ou absents ensemble
    attente: Option<Attente>,
    expression: String,
    saisie_neuve: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            courante: VALEUR_INITIALE.to_string(),
            attente: None,
            expression: String::new(),
            saisie_neuve: true,
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Projections (affichages) ------------------------ */

    /// Grand afficheur : valeur en cours de saisie ou dernier résultat.
    pub fn affichage_resultat(&self) -> &str {
        &self.courante
    }

    /// Petit afficheur : trace de l’opération ("25 +", "25 + 15 =").
    pub fn affichage_expression(&self) -> &str {
        &self.expression
    }

    /// Opérateur en attente (pour surligner la touche active).
    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.attente.as_ref().map(|a| a.operateur)
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Applique une touche du pavé.
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
            Touche::PlusMoins => self.plus_moins(),
            Touche::Pourcent => self.pourcent(),
            Touche::Virgule => self.virgule(),
        }

        log::debug!(
            "touche {touche} -> résultat={:?} expression={:?}",
            self.courante,
            self.expression
        );
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn chiffre(&mut self, c: Chiffre) {
        if self.saisie_neuve || self.courante == VALEUR_INITIALE {
            self.courante.clear();
            self.saisie_neuve = false;
        }
        self.courante.push_str(c.libelle());
    }

    /// Ajoute le point décimal s’il n’y en a pas encore (idempotent).
    pub fn virgule(&mut self) {
        if !self.courante.contains('.') {
            self.courante.push('.');
        }
    }

    /// Change le signe par manipulation du texte ; zéro n’a pas de forme négative.
    pub fn plus_moins(&mut self) {
        if let Some(reste) = self.courante.strip_prefix('-') {
            self.courante = reste.to_string();
        } else if self.courante != VALEUR_INITIALE {
            self.courante.insert(0, '-');
        }
    }

    pub fn pourcent(&mut self) {
        self.courante = format_nombre(lire_nombre(&self.courante) / 100.0);
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn operateur(&mut self, op: Operateur) {
        let gauche = match self.attente.take() {
            Some(attente) => format_nombre(self.calculer(&attente)),
            None => self.courante.clone(),
        };

        self.expression = format!("{gauche} {op}");
        self.attente = Some(Attente {
            gauche,
            operateur: op,
        });
        self.saisie_neuve = true;
    }

    /// Termine l’opération en attente ; sans opération, ne fait rien.
    pub fn egal(&mut self) {
        let Some(attente) = self.attente.take() else {
            return;
        };

        let resultat = format_nombre(self.calculer(&attente));
        self.expression = format!(
            "{} {} {} =",
            attente.gauche, attente.operateur, self.courante
        );
        self.courante = resultat;
        self.saisie_neuve = true;
    }

    /// AC : retour à l’état initial.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    fn calculer(&self, attente: &Attente) -> f64 {
        attente
            .operateur
            .appliquer(lire_nombre(&attente.gauche), lire_nombre(&self.courante))
    }
}

#[cfg(test)]
impl Moteur {
    /// Vérifie les invariants de session (tests uniquement).
    pub(crate) fn verifier_invariants(&self) -> Result<(), String> {
        if self.courante.is_empty() {
            return Err("valeur courante vide".into());
        }
        if self.courante.matches('.').count() > 1 {
            return Err(format!("plusieurs points : {:?}", self.courante));
        }
        if let Some(a) = &self.attente {
            if a.gauche.is_empty() {
                return Err("opérande gauche vide".into());
            }
        }
        Ok(())
    }

    pub(crate) fn saisie_neuve(&self) -> bool {
        self.saisie_neuve
    }
}
