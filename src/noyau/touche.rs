// src/noyau/touche.rs
//
// Touches du pavé
// ---------------
// Une touche = un événement du moteur. Le type est fermé :
// impossible de fabriquer un chiffre 12 ou un opérateur "%%".
//
// Lecture texte (clavier / libellés) :
// - chiffres 0-9
// - + - * x × / ÷ (opérateurs)
// - = (égal), % (pourcent), . ou , (virgule)
// - "AC", "C" (effacer), "±", "+/-" (changement de signe)

use std::fmt;
use std::str::FromStr;

use super::operateur::Operateur;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurTouche {
    #[error("touche vide")]
    Vide,

    #[error("touche inconnue : {0:?}")]
    Inconnue(String),
}

const LIBELLES_CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Chiffre décimal validé (0..=9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre(u8);

impl Chiffre {
    pub fn valeur(self) -> u8 {
        self.0
    }

    pub fn libelle(self) -> &'static str {
        LIBELLES_CHIFFRES[self.0 as usize]
    }

    pub fn depuis_caractere(c: char) -> Option<Chiffre> {
        c.to_digit(10).map(|d| Chiffre(d as u8))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(Chiffre),
    Operateur(Operateur),
    Egal,
    Effacer,
    PlusMoins,
    Pourcent,
    Virgule,
}

impl Touche {
    /// Raccourci pour les chiffres connus à la compilation.
    ///
    /// Panique si `d > 9` (réservé aux constantes et aux tests).
    pub(crate) const fn chiffre(d: u8) -> Touche {
        assert!(d <= 9, "chiffre hors bornes");
        Touche::Chiffre(Chiffre(d))
    }

    /// Libellé imprimé sur la touche.
    pub fn libelle(self) -> &'static str {
        match self {
            Touche::Chiffre(c) => c.libelle(),
            Touche::Operateur(op) => op.symbole(),
            Touche::Egal => "=",
            Touche::Effacer => "AC",
            Touche::PlusMoins => "±",
            Touche::Pourcent => "%",
            Touche::Virgule => ".",
        }
    }

    /// Touche correspondant à un caractère tapé au clavier.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        if let Some(ch) = Chiffre::depuis_caractere(c) {
            return Some(Touche::Chiffre(ch));
        }
        let t = match c {
            '+' => Touche::Operateur(Operateur::Plus),
            '-' => Touche::Operateur(Operateur::Moins),
            '*' | 'x' | 'X' | '×' => Touche::Operateur(Operateur::Fois),
            '/' | '÷' => Touche::Operateur(Operateur::Divise),
            '=' => Touche::Egal,
            '%' => Touche::Pourcent,
            '.' | ',' => Touche::Virgule,
            '±' => Touche::PlusMoins,
            _ => return None,
        };
        Some(t)
    }
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ErreurTouche::Vide);
        }

        if s.eq_ignore_ascii_case("ac") || s.eq_ignore_ascii_case("c") {
            return Ok(Touche::Effacer);
        }
        if s == "+/-" {
            return Ok(Touche::PlusMoins);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Touche::depuis_caractere(c).ok_or_else(|| ErreurTouche::Inconnue(s.to_string()))
            }
            _ => Err(ErreurTouche::Inconnue(s.to_string())),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}
