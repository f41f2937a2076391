// Page body rendering: the section stack plus hero/about/skills
use crate::app::Folio;
use crate::content;
use crate::style;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

impl Folio {
    /// Lay the sections out top to bottom in document order, recording each
    /// one's screen rect for visibility tracking and scroll-target math.
    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui) {
        self.section_rects.clear();
        for section in content::SECTIONS {
            let response = ui
                .scope(|ui| {
                    ui.set_max_width(style::CONTENT_MAX_WIDTH);
                    match section.id {
                        "home" => self.render_hero(ui),
                        "about" => self.render_about(ui),
                        "skills" => self.render_skills(ui),
                        "projects" => self.render_projects(ui),
                        "certifications" => self.render_certifications(ui),
                        "contact" => self.render_contact(ui),
                        _ => {}
                    }
                })
                .response;
            self.section_rects.push((section.id, response.rect));
            ui.add_space(style::SECTION_SPACING);
        }
    }

    fn render_hero(&mut self, ui: &mut egui::Ui) {
        ui.add_space(style::HERO_EXTRA_SPACING);
        ui.label(
            egui::RichText::new(content::PROFILE.name)
                .size(36.0)
                .strong(),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(content::PROFILE.tagline)
                .size(17.0)
                .color(self.ui.theme.muted()),
        );
        ui.add_space(18.0);
        ui.horizontal(|ui| {
            if ui.button("View projects").clicked() {
                self.navigate_to("projects");
            }
            if ui.button("Get in touch").clicked() {
                self.navigate_to("contact");
            }
            ui.add_space(12.0);
            if ui.link("GitHub").clicked() {
                self.open_link(content::PROFILE.github);
            }
            if ui.link("LinkedIn").clicked() {
                self.open_link(content::PROFILE.linkedin);
            }
        });
        ui.add_space(style::HERO_EXTRA_SPACING);
    }

    fn render_about(&mut self, ui: &mut egui::Ui) {
        ui.heading("About");
        ui.separator();
        ui.add_space(8.0);
        for paragraph in content::PROFILE.about {
            ui.label(*paragraph);
            ui.add_space(8.0);
        }
    }

    fn render_skills(&mut self, ui: &mut egui::Ui) {
        ui.heading("Skills");
        ui.separator();
        ui.add_space(8.0);
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(130.0))
            .column(Column::remainder())
            .body(|body| {
                body.rows(26.0, content::SKILLS.len(), |mut row| {
                    let group = &content::SKILLS[row.index()];
                    row.col(|ui| {
                        ui.label(egui::RichText::new(group.name).strong());
                    });
                    row.col(|ui| {
                        ui.label(group.items.join(", "));
                    });
                });
            });
    }
}
