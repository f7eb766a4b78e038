use eframe::egui;

/// Dark theme with the result card accents of the prediction page
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(14, 17, 23); // #0E1117
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(22, 27, 34); // #161B22
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(28, 33, 40);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(15, 18, 24);
    pub const BG_RESULT: egui::Color32 = egui::Color32::from_rgb(240, 242, 246); // #F0F2F6

    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(30, 136, 229); // #1E88E5
    pub const PRICE_GREEN: egui::Color32 = egui::Color32::from_rgb(76, 175, 80); // #4CAF50
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 75, 75);
    pub const DANGER_BG: egui::Color32 = egui::Color32::from_rgb(62, 24, 28);

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);
    pub const TEXT_ON_LIGHT: egui::Color32 = egui::Color32::from_rgb(49, 51, 63);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 10.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 20.0;

    pub const BUTTON_HEIGHT: f32 = 40.0;

    // --- Styles ---

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;
        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.4);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Column container for a group of inputs
    pub fn section_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Light panel holding the predicted band
    pub fn result_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_RESULT)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .inner_margin(Self::SPACING_LARGE as i8)
    }

    pub fn error_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::DANGER_BG)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::DANGER))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
