use crate::infrastructure::i18n::I18nService;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::ResultView;
use eframe::egui;

/// Renders the outcome of the last submission below the form.
pub fn render_result(ui: &mut egui::Ui, result: &ResultView, i18n: &I18nService) {
    match result {
        ResultView::Empty => {}
        ResultView::Success { band, .. } => {
            DesignSystem::result_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(i18n.t("result_title"))
                            .size(22.0)
                            .strong()
                            .color(DesignSystem::ACCENT_PRIMARY),
                    );
                    ui.add_space(DesignSystem::SPACING_SMALL);

                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(i18n.t("result_category"))
                                .size(20.0)
                                .color(DesignSystem::TEXT_ON_LIGHT),
                        );
                        ui.label(
                            egui::RichText::new(band.label)
                                .size(20.0)
                                .strong()
                                .color(DesignSystem::TEXT_ON_LIGHT),
                        );
                    });

                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(i18n.t("result_estimate"))
                                .size(24.0)
                                .color(DesignSystem::PRICE_GREEN),
                        );
                        ui.label(
                            egui::RichText::new(band.inr)
                                .size(24.0)
                                .strong()
                                .color(DesignSystem::PRICE_GREEN),
                        );
                    });
                });
            });
        }
        ResultView::Error { detail } => {
            DesignSystem::error_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                let message = i18n.tf("prediction_error", &[("detail", detail.as_str())]);
                ui.label(egui::RichText::new(message).color(DesignSystem::DANGER));
            });
        }
    }
}
