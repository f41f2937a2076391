// Nav bar and status bar rendering
use crate::app::Folio;
use crate::content;
use crate::style::{self, Theme};
use eframe::egui;

impl Folio {
    /// Fixed header: logo on the left, section links and the theme toggle
    /// on the right. The measured height feeds the scroll-offset math.
    pub(crate) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        let panel = egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let logo = egui::RichText::new(content::PROFILE.name)
                    .strong()
                    .size(18.0);
                if ui
                    .add(egui::Button::new(logo).frame(false))
                    .on_hover_text("Back to top")
                    .clicked()
                {
                    if let Some(first) = content::SECTIONS.first() {
                        self.navigate_to(first.id);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = match self.ui.theme {
                        Theme::Dark => "☀",
                        Theme::Light => "🌙",
                    };
                    if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                        self.toggle_theme(ctx);
                    }
                    ui.add_space(style::NAV_LINK_GAP);

                    for section in content::SECTIONS.iter().rev() {
                        let active = self.nav.is_active(section.id);
                        let text = if active {
                            egui::RichText::new(section.title)
                                .color(self.ui.theme.accent())
                                .strong()
                        } else {
                            egui::RichText::new(section.title)
                        };
                        if ui.selectable_label(active, text).clicked() {
                            self.navigate_to(section.id);
                        }
                        ui.add_space(style::NAV_LINK_GAP / 2.0);
                    }
                });
            });
            ui.add_space(8.0);
        });
        self.header_height = panel.response.rect.height();
    }

    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let has_message = self.ui.error_message.is_some() || self.ui.info_message.is_some();
        if !has_message {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, _)) = &self.ui.error_message {
                    ui.colored_label(egui::Color32::RED, msg);
                } else if let Some((msg, _)) = &self.ui.info_message {
                    ui.colored_label(self.ui.theme.accent(), msg);
                }
            });
        });
    }
}
