// Contact form rendering
use crate::app::Folio;
use crate::content;
use crate::state::SubmitStatus;
use eframe::egui;

impl Folio {
    pub(crate) fn render_contact(&mut self, ui: &mut egui::Ui) {
        ui.heading("Contact");
        ui.separator();
        ui.add_space(8.0);
        ui.label(format!(
            "Drop me a line, or email {} directly.",
            content::PROFILE.email
        ));
        ui.add_space(10.0);

        let sending = self.contact.is_sending();
        ui.add_enabled_ui(!sending, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.contact.name)
                    .hint_text("Name")
                    .desired_width(320.0),
            );
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.contact.email)
                    .hint_text("Email")
                    .desired_width(320.0),
            );
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::multiline(&mut self.contact.message)
                    .hint_text("Your message")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!sending, egui::Button::new("Send message"))
                .clicked()
            {
                self.submit_contact();
            }
            match &self.contact.status {
                SubmitStatus::Sending => {
                    ui.spinner();
                    ui.label("Sending...");
                }
                SubmitStatus::Sent => {
                    ui.colored_label(self.ui.theme.accent(), "Message sent. Thank you!");
                }
                SubmitStatus::Failed(e) => {
                    ui.colored_label(egui::Color32::RED, e.describe());
                }
                SubmitStatus::Idle => {}
            }
        });
    }
}
