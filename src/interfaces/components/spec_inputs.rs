//! Input widgets bound to the bounds in `domain::phone_specs`.

use crate::domain::phone_specs::{BinaryInput, FloatInput, IntInput};
use crate::infrastructure::i18n::I18nService;
use eframe::egui;

/// Integer slider whose value always lands on the input's grid.
pub fn int_slider(ui: &mut egui::Ui, input: &IntInput, value: &mut i64, i18n: &I18nService) {
    ui.label(i18n.t(input.label_key));
    let response = ui.add(egui::Slider::new(value, input.min..=input.max_reachable()));
    // Snap only on user edits; defaults such as RAM 2000 sit between grid points
    if response.changed() {
        *value = input.snap(*value);
    }
    ui.add_space(6.0);
}

pub fn float_slider(ui: &mut egui::Ui, input: &FloatInput, value: &mut f64, i18n: &I18nService) {
    ui.label(i18n.t(input.label_key));
    let response = ui.add(egui::Slider::new(value, input.min..=input.max).fixed_decimals(1));
    if response.changed() {
        *value = input.snap(*value);
    }
    ui.add_space(6.0);
}

/// Dropdown over every value of a discrete input.
pub fn int_selector(ui: &mut egui::Ui, input: &IntInput, value: &mut i64, i18n: &I18nService) {
    ui.label(i18n.t(input.label_key));
    egui::ComboBox::from_id_salt(input.key)
        .width(ui.available_width())
        .selected_text(value.to_string())
        .show_ui(ui, |ui| {
            for option in input.values() {
                ui.selectable_value(value, option, option.to_string());
            }
        });
    ui.add_space(6.0);
}

/// "No" / "Yes" dropdown, in that order.
pub fn yes_no_selector(
    ui: &mut egui::Ui,
    input: &BinaryInput,
    value: &mut bool,
    i18n: &I18nService,
) {
    let yes = i18n.t("option_yes");
    let no = i18n.t("option_no");

    ui.label(i18n.t(input.label_key));
    egui::ComboBox::from_id_salt(input.key)
        .width(ui.available_width())
        .selected_text(if *value { yes } else { no })
        .show_ui(ui, |ui| {
            ui.selectable_value(value, false, no);
            ui.selectable_value(value, true, yes);
        });
    ui.add_space(6.0);
}
