use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        visuals.selection.bg_fill = self.accent().linear_multiply(0.35);
        visuals.hyperlink_color = self.accent();
        ctx.set_visuals(visuals);
    }

    pub fn accent(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(0, 110, 200),
            Theme::Dark => egui::Color32::from_rgb(120, 180, 255),
        }
    }

    pub fn muted(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_gray(110),
            Theme::Dark => egui::Color32::from_gray(150),
        }
    }
}

// --- Sizing ---
pub const CONTENT_MAX_WIDTH: f32 = 820.0;
pub const SECTION_SPACING: f32 = 96.0;
pub const HERO_EXTRA_SPACING: f32 = 120.0;
pub const CARD_WIDTH: f32 = 250.0;
pub const CARD_HEIGHT: f32 = 150.0;
pub const CARD_GAP: f32 = 12.0;
pub const NAV_LINK_GAP: f32 = 14.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;
pub const MODAL_HEIGHT_RATIO: f32 = 0.8;

// --- Timing ---
pub const SCROLL_ANIM_MS: u64 = 450;
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn modal_max_height(ctx: &egui::Context) -> f32 {
    let height = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.height())
            .unwrap_or(600.0)
    });
    height * MODAL_HEIGHT_RATIO
}
