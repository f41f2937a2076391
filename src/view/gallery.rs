// Project gallery rendering: filter chips, card grid, detail modal
use crate::app::Folio;
use crate::content;
use crate::style;
use eframe::egui;

impl Folio {
    pub(crate) fn render_projects(&mut self, ui: &mut egui::Ui) {
        ui.heading("Projects");
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.gallery.filter.is_none(), "All")
                .clicked()
            {
                self.gallery.set_filter(None);
            }
            for category in content::project_categories() {
                let selected = self.gallery.filter == Some(category);
                if ui.selectable_label(selected, category).clicked() {
                    self.gallery.set_filter(Some(category));
                }
            }
        });
        ui.add_space(10.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(style::CARD_GAP, style::CARD_GAP);
            for (i, project) in content::PROJECTS.iter().enumerate() {
                if !self.gallery.matches(project) {
                    continue;
                }
                if self.render_project_card(ui, i, project) {
                    self.gallery.open_modal(i);
                }
            }
        });
    }

    /// One card in the grid. Returns true when clicked.
    fn render_project_card(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        project: &content::Project,
    ) -> bool {
        let size = egui::vec2(style::CARD_WIDTH, style::CARD_HEIGHT);
        let response = ui
            .push_id(index, |ui| {
                ui.allocate_ui(size, |ui| {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_min_size(ui.available_size());
                            ui.label(egui::RichText::new(project.name).strong().size(16.0));
                            ui.label(
                                egui::RichText::new(project.category)
                                    .small()
                                    .color(self.ui.theme.accent()),
                            );
                            ui.add_space(6.0);
                            ui.label(egui::RichText::new(project.summary).small());
                        });
                })
            })
            .response;

        let response = response.interact(egui::Sense::click());
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        response.clicked()
    }

    /// Detail modal for the selected project. At most one is open; Escape
    /// handling lives in the frame loop.
    pub(crate) fn render_project_modal(&mut self, ctx: &egui::Context) {
        let Some(index) = self.gallery.open_project else {
            return;
        };
        let Some(project) = content::PROJECTS.get(index) else {
            self.gallery.close_modal();
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(project.name)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_max_height(style::modal_max_height(ctx));
                ui.label(
                    egui::RichText::new(project.category)
                        .small()
                        .color(self.ui.theme.accent()),
                );
                ui.add_space(6.0);
                ui.label(project.summary);
                ui.add_space(10.0);
                ui.horizontal_wrapped(|ui| {
                    for tech in project.tech {
                        ui.label(
                            egui::RichText::new(format!("[{tech}]"))
                                .small()
                                .color(self.ui.theme.muted()),
                        );
                    }
                });
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Open project page").clicked() {
                        self.open_link(project.url);
                    }
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked {
            self.gallery.close_modal();
        }
    }
}
