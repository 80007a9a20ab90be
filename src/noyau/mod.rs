//! Noyau de la calculatrice à pavé
//!
//! Organisation interne :
//! - nombre.rs    : lecture / écriture des nombres affichés (texte <-> f64)
//! - operateur.rs : + - × ÷ (division par zéro => 0)
//! - touche.rs    : touches du pavé + lecture clavier
//! - moteur.rs    : état de session + transitions
//!
//! Aucune dépendance à l’UI : tout se teste sans fenêtre.

pub mod moteur;
pub mod nombre;
pub mod operateur;
pub mod touche;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::Moteur;
pub use operateur::Operateur;
pub use touche::Touche;
