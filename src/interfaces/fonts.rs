use eframe::egui;
use std::sync::Arc;
use tracing::{debug, info};

/// System fonts known to carry the rupee sign (U+20B9), which egui's bundled fonts lack.
const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Appends the first readable system font as a fallback for both families.
pub fn configure_fonts(ctx: &egui::Context) {
    let Some((path, bytes)) = FALLBACK_FONT_PATHS
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        debug!("No fallback font found; currency symbols may not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "currency_fallback".to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("currency_fallback".to_owned());
    }

    ctx.set_fonts(fonts);
    info!("Loaded fallback font from {}", path);
}
