// Certifications carousel rendering
use crate::app::Folio;
use crate::content;
use eframe::egui;

impl Folio {
    pub(crate) fn render_certifications(&mut self, ui: &mut egui::Ui) {
        ui.heading("Certifications");
        ui.separator();
        ui.add_space(8.0);

        let certs = content::CERTIFICATIONS;
        if certs.is_empty() {
            ui.label("Nothing here yet.");
            return;
        }
        // The index only moves through next/prev, but clamp anyway in case
        // the list shrinks between builds.
        let index = self.carousel.index.min(certs.len() - 1);
        let cert = &certs[index];

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(cert.name).strong().size(16.0));
                ui.label(egui::RichText::new(cert.issuer).color(self.ui.theme.muted()));
                if let Some(date) = cert.issued_date() {
                    ui.label(
                        egui::RichText::new(format!("Issued {}", date.format("%B %Y")))
                            .small()
                            .color(self.ui.theme.muted()),
                    );
                }
                ui.add_space(6.0);
                if ui.link("View credential").clicked() {
                    self.open_link(cert.credential_url);
                }
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.carousel.prev(certs.len());
            }
            ui.label(format!("{} / {}", index + 1, certs.len()));
            if ui.button("▶").clicked() {
                self.carousel.next(certs.len());
            }
        });
    }
}
