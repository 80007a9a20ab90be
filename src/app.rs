// src/app.rs
//
// Calculatrice à pavé — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, safe natif + web) :
// - texte tapé : chiffres, + - * x / % . , = c
// - Enter = égal ; Échap / Suppr = AC

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Clavier;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let clavier = ctx.input(|i| Clavier {
            texte: i
                .events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect(),
            egal: i.key_pressed(egui::Key::Enter),
            effacer: i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Delete),
        });
        self.appliquer_clavier(&clavier);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
