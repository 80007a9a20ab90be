//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique moteur de la session et traduire les entrées
//! (clic sur une touche, texte tapé au clavier) en touches du moteur.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Moteur::appliquer`.
//! - Les deux afficheurs sont relus dans le moteur à chaque frame (pas de copie).
//! - Une entrée clavier inconnue est ignorée (journalisée), jamais une erreur.

use crate::noyau::{Moteur, Touche};

/// Entrées clavier d’une frame, déjà extraites du contexte egui.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clavier {
    /// Texte tapé (événements `Text`).
    pub texte: String,
    /// Entrée pressée.
    pub egal: bool,
    /// Échap ou Suppr pressé.
    pub effacer: bool,
}

/// Mise en relief d’une touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relief {
    Aucun,
    /// Dernière touche appliquée.
    Derniere,
    /// Opérateur qui attend son second opérande (prioritaire).
    Attente,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- UX ---
    // Dernière touche appliquée (clic ou clavier) : la vue la met en relief.
    pub derniere_touche: Option<Touche>,
}

impl AppCalc {
    /// Applique une touche (bouton du pavé ou raccourci clavier).
    pub fn presser(&mut self, touche: Touche) {
        self.moteur.appliquer(touche);
        self.derniere_touche = Some(touche);
    }

    /// Texte tapé au clavier : un caractère = une touche.
    ///
    /// Alias acceptés : `*`/`x` pour ×, `/` pour ÷, `,` pour le point, `c` pour AC.
    pub fn saisir_texte(&mut self, texte: &str) {
        let mut tampon = [0u8; 4];
        for c in texte.chars() {
            match c.encode_utf8(&mut tampon).parse::<Touche>() {
                Ok(touche) => self.presser(touche),
                Err(e) => log::trace!("clavier ignoré : {e}"),
            }
        }
    }

    /// AC (bouton ou Échap / Suppr).
    pub fn reset_total(&mut self) {
        self.presser(Touche::Effacer);
    }

    /// Applique les entrées clavier d’une frame, dans l’ordre texte, Entrée, Échap.
    pub fn appliquer_clavier(&mut self, clavier: &Clavier) {
        if !clavier.texte.is_empty() {
            self.saisir_texte(&clavier.texte);
        }
        if clavier.egal {
            self.presser(Touche::Egal);
        }
        if clavier.effacer {
            self.reset_total();
        }
    }

    /// Relief d’une touche pour la vue.
    pub fn relief(&self, touche: Touche) -> Relief {
        match touche {
            Touche::Operateur(op) if self.moteur.operateur_en_attente() == Some(op) => {
                Relief::Attente
            }
            _ if self.derniere_touche == Some(touche) => Relief::Derniere,
            _ => Relief::Aucun,
        }
    }
}
