use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// One titled column of the device form
pub struct Section {
    title: String,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        DesignSystem::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(self.title)
                    .size(18.0)
                    .color(DesignSystem::TEXT_PRIMARY)
                    .strong(),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);

            // Sliders fill the column instead of egui's fixed default width
            ui.spacing_mut().slider_width = (ui.available_width() - 70.0).max(80.0);

            add_contents(ui)
        })
    }
}
