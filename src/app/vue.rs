// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Deux afficheurs alignés à droite : expression (petit) + résultat (grand)
// - Pavé fixe, même disposition que la calculatrice de poche :
//     AC  ±  %  ÷
//     7   8  9  ×
//     4   5  6  -
//     1   2  3  +
//     0 (large) .  =
// - L’opérateur en attente est entouré (on sait ce qui sera calculé),
//   la dernière touche appliquée d’un trait fin
//
// Note :
// - La vue ne calcule rien : elle lit le moteur et lui envoie des touches.

use eframe::egui;

use super::etat::{AppCalc, Relief};
use crate::noyau::{Operateur, Touche};

/// Taille d’une touche standard (le 0 en prend deux).
const TOUCHE: [f32; 2] = [64.0, 52.0];

/// Espacement entre touches.
const ECART: f32 = 8.0;

const TAILLE_EXPRESSION: f32 = 18.0;
const TAILLE_RESULTAT: f32 = 40.0;
const TAILLE_LIBELLE: f32 = 22.0;

const COULEUR_OPERATEUR: egui::Color32 = egui::Color32::from_rgb(255, 159, 10);
const COULEUR_FONCTION: egui::Color32 = egui::Color32::from_rgb(165, 165, 165);

/// Disposition du pavé, ligne par ligne.
pub const PAVE: [&[Touche]; 5] = [
    &[
        Touche::Effacer,
        Touche::PlusMoins,
        Touche::Pourcent,
        Touche::Operateur(Operateur::Divise),
    ],
    &[
        Touche::chiffre(7),
        Touche::chiffre(8),
        Touche::chiffre(9),
        Touche::Operateur(Operateur::Fois),
    ],
    &[
        Touche::chiffre(4),
        Touche::chiffre(5),
        Touche::chiffre(6),
        Touche::Operateur(Operateur::Moins),
    ],
    &[
        Touche::chiffre(1),
        Touche::chiffre(2),
        Touche::chiffre(3),
        Touche::Operateur(Operateur::Plus),
    ],
    &[Touche::chiffre(0), Touche::Virgule, Touche::Egal],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ECART, ECART);

        let largeur = 4.0 * TOUCHE[0] + 3.0 * ECART;
        ui.vertical_centered(|ui| {
            ui.set_max_width(largeur);
            self.ui_afficheurs(ui);
            ui.add_space(ECART);
            self.ui_pave(ui);
        });
    }

    fn ui_afficheurs(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // expression : hauteur réservée même vide (l’écran ne “saute” pas)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.set_min_height(TAILLE_EXPRESSION + 4.0);
                    ui.label(
                        egui::RichText::new(self.moteur.affichage_expression())
                            .monospace()
                            .size(TAILLE_EXPRESSION)
                            .weak(),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.moteur.affichage_resultat())
                            .monospace()
                            .size(TAILLE_RESULTAT)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        for ligne in PAVE {
            ui.horizontal(|ui| {
                for &touche in ligne {
                    self.bouton(ui, touche);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let taille = match touche {
            Touche::Chiffre(c) if c.valeur() == 0 => [2.0 * TOUCHE[0] + ECART, TOUCHE[1]],
            _ => TOUCHE,
        };

        let texte = egui::RichText::new(touche.libelle()).size(TAILLE_LIBELLE);
        let mut bouton = egui::Button::new(texte);

        bouton = match touche {
            Touche::Operateur(_) | Touche::Egal => bouton.fill(COULEUR_OPERATEUR),
            Touche::Effacer | Touche::PlusMoins | Touche::Pourcent => {
                bouton.fill(COULEUR_FONCTION)
            }
            Touche::Chiffre(_) | Touche::Virgule => bouton,
        };

        bouton = match self.relief(touche) {
            Relief::Attente => {
                bouton.stroke(egui::Stroke::new(2.0, ui.visuals().strong_text_color()))
            }
            Relief::Derniere => bouton.stroke(egui::Stroke::new(1.0, ui.visuals().text_color())),
            Relief::Aucun => bouton,
        };

        if ui.add_sized(taille, bouton).clicked() {
            self.presser(touche);
        }
    }
}
