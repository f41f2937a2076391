use crate::config::Config;
use crate::content;
use crate::io::{spawn_worker, IoCommand, IoResult};
use crate::state::{
    CarouselState, ContactState, GalleryState, NavigationSync, SectionGeometry, SubmitStatus,
    UiState,
};
use crate::style::{self, Theme};
use eframe::egui;
use log::warn;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

/// An in-flight programmatic scroll. The scroll offset is eased between the
/// endpoints over [`style::SCROLL_ANIM_MS`]; the target is fixed once the
/// animation starts.
pub struct ScrollAnim {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
}

impl ScrollAnim {
    /// Offset to apply at `now`, and whether the animation has finished.
    pub fn offset_at(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let t = (elapsed / (style::SCROLL_ANIM_MS as f32 / 1000.0)).clamp(0.0, 1.0);
        (self.from + (self.to - self.from) * ease_in_out_cubic(t), t >= 1.0)
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

pub struct Folio {
    pub config: Config,

    // Widget states
    pub nav: NavigationSync,
    pub gallery: GalleryState,
    pub carousel: CarouselState,
    pub contact: ContactState,
    pub ui: UiState,

    // Frame-measured layout
    pub header_height: f32,
    pub scroll_offset: f32,
    pub scroll_anim: Option<ScrollAnim>,
    pub(crate) section_rects: Vec<(&'static str, egui::Rect)>,

    // Background IO
    pub(crate) command_tx: Sender<IoCommand>,
    result_rx: Receiver<IoResult>,

    last_title: String,
}

impl Folio {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let theme = Theme::from_mode(&config.theme.mode);
        theme.apply(&cc.egui_ctx);

        let (command_tx, result_rx) = spawn_worker(cc.egui_ctx.clone());

        let mut nav = NavigationSync::new(content::SECTIONS.iter().map(|s| s.id));
        // Restore the last reading position. Geometry is unknown until the
        // first frames paint, so the scroll lands via the retry schedule.
        nav.on_external_route_change(&config.nav.last_section, 0.0, Instant::now());

        Self {
            nav,
            gallery: GalleryState::new(),
            carousel: CarouselState::new(),
            contact: ContactState::new(),
            ui: UiState::new(theme),
            config,
            header_height: 0.0,
            scroll_offset: 0.0,
            scroll_anim: None,
            section_rects: Vec::new(),
            command_tx,
            result_rx,
            last_title: String::new(),
        }
    }

    /// Explicit navigation from a nav link or any in-page button.
    pub(crate) fn navigate_to(&mut self, id: &str) {
        let now = Instant::now();
        if let Some(target) = self.nav.on_nav_link_activated(id, self.header_height, now) {
            self.start_scroll(target, now);
        }
    }

    fn start_scroll(&mut self, target: f32, now: Instant) {
        self.scroll_anim = Some(ScrollAnim {
            from: self.scroll_offset,
            to: target,
            started: now,
        });
    }

    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.ui.theme = self.ui.theme.toggled();
        self.ui.theme.apply(ctx);
        self.config.theme.mode = self.ui.theme.mode().to_string();
        if let Err(e) = self.config.save() {
            warn!("failed to save config: {e}");
        }
    }

    pub(crate) fn open_link(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            self.ui.set_error(format!("Could not open link: {e}"));
        }
    }

    pub(crate) fn submit_contact(&mut self) {
        match self.contact.validate() {
            Ok(payload) => {
                self.contact.status = SubmitStatus::Sending;
                let _ = self.command_tx.send(IoCommand::SubmitContact {
                    endpoint: self.config.contact.relay_endpoint.clone(),
                    timeout_secs: self.config.contact.timeout_secs,
                    payload,
                });
            }
            Err(msg) => self.ui.set_error(msg),
        }
    }

    fn poll_worker(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                IoResult::ContactSubmitted => {
                    self.contact.status = SubmitStatus::Sent;
                    self.contact.clear_fields();
                    self.ui.set_info("Message sent. Thank you!".to_string());
                }
                IoResult::ContactFailed(e) => {
                    self.ui.set_error(e.describe());
                    self.contact.status = SubmitStatus::Failed(e);
                }
            }
        }
    }

    /// Feed the sections currently intersecting the reading band to the
    /// navigation tracker. Rects are screen-space, sampled once per frame.
    fn sample_visibility(&mut self, ctx: &egui::Context, now: Instant) {
        let viewport = ctx.screen_rect();
        let band = crate::state::navigation::visibility_band(viewport.top(), viewport.height());
        let mut visible: Vec<(&str, f32)> = Vec::new();
        for (id, rect) in &self.section_rects {
            let ratio = crate::state::navigation::intersection_ratio(band, rect.top(), rect.height());
            if ratio > 0.0 {
                visible.push((*id, ratio));
            }
        }
        self.nav.on_visibility_change(&visible, now);
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = match self.nav.active_section() {
            Some(id) => {
                let section = content::SECTIONS.iter().find(|s| s.id == id);
                match section {
                    Some(s) => format!("{} | {}", content::PROFILE.name, s.title),
                    None => content::PROFILE.name.to_string(),
                }
            }
            None => content::PROFILE.name.to_string(),
        };
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}

impl eframe::App for Folio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.poll_worker();
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.gallery.close_modal();
        }

        self.render_nav_bar(ctx);
        self.render_status_bar(ctx);

        // Step the programmatic scroll before laying the page out so the
        // offset applies this frame.
        let forced_offset = self.scroll_anim.as_ref().map(|anim| anim.offset_at(now));

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false]);
            if let Some((offset, _)) = forced_offset {
                scroll = scroll.vertical_scroll_offset(offset);
            }
            let output = scroll.show(ui, |ui| {
                self.render_page(ui);
            });

            self.scroll_offset = output.state.offset.y;
            let inner_top = output.inner_rect.top();

            // Convert screen rects to page coordinates (y from the document
            // top at zero scroll, headers included) for the scroll math.
            for (id, rect) in &self.section_rects {
                self.nav.set_geometry(
                    *id,
                    SectionGeometry {
                        top: rect.top() - inner_top + self.scroll_offset + self.header_height,
                        height: rect.height(),
                    },
                );
            }
        });

        if let Some((_, finished)) = forced_offset {
            if finished {
                self.scroll_anim = None;
            } else {
                ctx.request_repaint();
            }
        }

        self.sample_visibility(ctx, now);

        if let Some(target) = self.nav.take_due_retry(self.header_height, now) {
            self.start_scroll(target, now);
        }
        if let Some(deadline) = self.nav.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        self.render_project_modal(ctx);
        self.sync_window_title(ctx);

        self.config.nav.last_section = self.nav.fragment().to_string();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save() {
            warn!("failed to save config on exit: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_scroll_anim_endpoints() {
        let t0 = Instant::now();
        let anim = ScrollAnim { from: 100.0, to: 500.0, started: t0 };
        let (start, done) = anim.offset_at(t0);
        assert_eq!(start, 100.0);
        assert!(!done);
        let (end, done) = anim.offset_at(t0 + Duration::from_millis(style::SCROLL_ANIM_MS + 50));
        assert_eq!(end, 500.0);
        assert!(done);
    }

    #[test]
    fn test_scroll_anim_is_monotonic() {
        let t0 = Instant::now();
        let anim = ScrollAnim { from: 0.0, to: 1000.0, started: t0 };
        let mut last = -1.0;
        for ms in (0..=style::SCROLL_ANIM_MS).step_by(25) {
            let (v, _) = anim.offset_at(t0 + Duration::from_millis(ms));
            assert!(v >= last, "offset regressed at {ms}ms");
            last = v;
        }
    }

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }
}
