// src/app/vue.rs
//
// Vue (UI egui), natif + web
// --------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage deux lignes : équation ("3+4..." / "3+4=") puis résultat
// - Clavier : chiffres, point, + - * / ^, Enter (=), Backspace (↶)
// - Tactile : gros boutons
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_programme(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        Self::champ_monospace(ui, "equation_out", &self.equation, egui::TextStyle::Monospace);
        Self::champ_monospace(ui, "affichage_out", &self.affichage, egui::TextStyle::Heading);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Reset);
                self.bouton(ui, "↶", Touche::Annuler);
                self.bouton(ui, "→M", Touche::Memoriser);
                self.bouton(ui, "M", Touche::Memoire);
                self.bouton(ui, "Ran", Touche::Operande("Ran"));
                ui.end_row();

                self.bouton(ui, "π", Touche::Operande("π"));
                self.bouton(ui, "e", Touche::Operande("e"));
                self.bouton(ui, "√", Touche::Operation("√"));
                self.bouton(ui, "log2", Touche::Operation("log2"));
                self.bouton(ui, "^", Touche::Operation("^"));
                ui.end_row();

                self.bouton(ui, "sin", Touche::Operation("sin"));
                self.bouton(ui, "cos", Touche::Operation("cos"));
                self.bouton(ui, "tan", Touche::Operation("tan"));
                self.bouton(ui, "±", Touche::Operation("±"));
                self.bouton(ui, "÷", Touche::Operation("÷"));
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "×", Touche::Operation("×"));
                ui.label("");
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "−", Touche::Operation("−"));
                ui.label("");
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "+", Touche::Operation("+"));
                ui.label("");
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Operation("="));
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_programme(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "Sauver", Touche::Sauver);
            self.bouton(ui, "Restaurer", Touche::Restaurer);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.chiffres as u32;
            let resp = ui.add(egui::DragValue::new(&mut d).speed(1).range(0..=15));
            if resp.changed() {
                self.set_chiffres(d as usize);
            }
        });

        if let Some(json) = &self.sauvegarde {
            ui.add_space(4.0);
            ui.label("Programme sauvegardé :");
            Self::champ_monospace(ui, "programme_out", json, egui::TextStyle::Monospace);
        }
    }

    /// Clavier physique : seulement les touches qui ont un bouton.
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        match c {
                            '0'..='9' => self.chiffre(c),
                            '.' | ',' => self.point(),
                            '+' => self.operation("+"),
                            '-' => self.operation("−"),
                            '*' => self.operation("×"),
                            '/' => self.operation("÷"),
                            '^' => self.operation("^"),
                            '=' => self.operation("="),
                            _ => {}
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.operation("="),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.annuler(),
                _ => {}
            }
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, style: egui::TextStyle) {
        // Affichage lecture seule “stable”, aligné à droite comme un écran de calculatrice.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(ui.text_style_height(&style));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(contenu).text_style(style.clone()));
                    });
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([56.0, 34.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Point => self.point(),
            Touche::Operation(s) => self.operation(s),
            Touche::Operande(s) => self.operande(s),
            Touche::Memoire => self.rappel_memoire(),
            Touche::Memoriser => self.memoriser(),
            Touche::Annuler => self.annuler(),
            Touche::Reset => self.reset_total(),
            Touche::Sauver => self.sauver(),
            Touche::Restaurer => self.restaurer(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Point,
    Operation(&'static str),
    Operande(&'static str),
    Memoire,
    Memoriser,
    Annuler,
    Reset,
    Sauver,
    Restaurer,
}
