use crate::domain::phone_specs::{
    BATTERY_POWER, CLOCK_SPEED, CORE_COUNT, FOUR_G, FRONT_CAMERA, INTERNAL_MEMORY, MOBILE_WEIGHT,
    PIXEL_HEIGHT, PIXEL_WIDTH, PRIMARY_CAMERA, RAM, THREE_G,
};
use crate::infrastructure::i18n::I18nService;
use crate::interfaces::components::balloons::BalloonShow;
use crate::interfaces::components::result_card::render_result;
use crate::interfaces::components::section::Section;
use crate::interfaces::components::spec_inputs;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::{
    AppState, PredictionViewModel, ResultView, startup_guidance,
};
use eframe::egui;
use tracing::info;

/// The single-page prediction form.
pub struct PredictorApp {
    state: AppState,
    i18n: I18nService,
    balloons: Option<BalloonShow>,
}

impl PredictorApp {
    pub fn new(state: AppState, i18n: I18nService) -> Self {
        Self {
            state,
            i18n,
            balloons: None,
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(self.i18n.t("window_title")).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let current_code = self.i18n.current_language_code().to_string();
                    let current_label = self
                        .i18n
                        .current_language_info()
                        .map(|l| format!("{} {}", l.flag, l.native_name))
                        .unwrap_or_else(|| current_code.clone());

                    let mut selected = current_code.clone();
                    egui::ComboBox::from_id_salt("language")
                        .selected_text(current_label)
                        .show_ui(ui, |ui| {
                            for lang in self.i18n.available_languages() {
                                ui.selectable_value(
                                    &mut selected,
                                    lang.code.clone(),
                                    format!("{} {}", lang.flag, lang.native_name),
                                );
                            }
                        });
                    ui.label(self.i18n.t("language_label"));

                    if selected != current_code && self.i18n.set_language(&selected) {
                        info!("UI language switched to {}", selected);
                        ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                            self.i18n.t("window_title").to_string(),
                        ));
                    }
                });
            });
        });
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_bar(ctx);

        let now = ctx.input(|i| i.time);
        let mut launch_balloons = false;

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match &mut self.state {
                        AppState::Fatal { error } => {
                            render_fatal(ui, &startup_guidance(error, &self.i18n), &self.i18n)
                        }
                        AppState::Ready(vm) => {
                            launch_balloons = render_form(ui, vm, &self.i18n);
                        }
                    });

                if launch_balloons {
                    self.balloons = Some(BalloonShow::launch(now));
                }

                if let Some(show) = &self.balloons {
                    if show.is_finished(now) {
                        self.balloons = None;
                    } else {
                        let painter = ctx.layer_painter(egui::LayerId::new(
                            egui::Order::Foreground,
                            egui::Id::new("balloons"),
                        ));
                        show.paint(&painter, ui.clip_rect(), now);
                        ctx.request_repaint();
                    }
                }
            });
    }
}

/// Draws the form and handles the predict button. Returns true when balloons should start.
fn render_form(ui: &mut egui::Ui, vm: &mut PredictionViewModel, i18n: &I18nService) -> bool {
    ui.label(
        egui::RichText::new(i18n.t("app_title"))
            .size(30.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.label(egui::RichText::new(i18n.t("app_intro")).color(DesignSystem::TEXT_SECONDARY));
    ui.add_space(DesignSystem::SPACING_LARGE);

    ui.label(
        egui::RichText::new(i18n.t("section_specs"))
            .size(22.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    let specs = &mut vm.specs;
    ui.columns(3, |columns| {
        Section::new(i18n.t("column_core")).show(&mut columns[0], |ui| {
            spec_inputs::int_slider(ui, &RAM, &mut specs.ram, i18n);
            spec_inputs::int_slider(ui, &INTERNAL_MEMORY, &mut specs.int_memory, i18n);
            spec_inputs::int_slider(ui, &BATTERY_POWER, &mut specs.battery_power, i18n);
            spec_inputs::int_slider(ui, &MOBILE_WEIGHT, &mut specs.mobile_wt, i18n);
        });

        Section::new(i18n.t("column_camera")).show(&mut columns[1], |ui| {
            spec_inputs::int_slider(ui, &PIXEL_HEIGHT, &mut specs.px_height, i18n);
            spec_inputs::int_slider(ui, &PIXEL_WIDTH, &mut specs.px_width, i18n);
            spec_inputs::int_slider(ui, &PRIMARY_CAMERA, &mut specs.pc, i18n);
            spec_inputs::int_slider(ui, &FRONT_CAMERA, &mut specs.fc, i18n);
        });

        Section::new(i18n.t("column_processor")).show(&mut columns[2], |ui| {
            spec_inputs::int_selector(ui, &CORE_COUNT, &mut specs.n_cores, i18n);
            spec_inputs::float_slider(ui, &CLOCK_SPEED, &mut specs.clock_speed, i18n);
            spec_inputs::yes_no_selector(ui, &FOUR_G, &mut specs.four_g, i18n);
            spec_inputs::yes_no_selector(ui, &THREE_G, &mut specs.three_g, i18n);
        });
    });

    ui.add_space(DesignSystem::SPACING_LARGE);

    let button = egui::Button::new(
        egui::RichText::new(i18n.t("predict_button"))
            .size(16.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    )
    .fill(DesignSystem::ACCENT_PRIMARY);
    let width = ui.available_width();
    let clicked = ui
        .add_sized([width, DesignSystem::BUTTON_HEIGHT], button)
        .clicked();

    let mut celebrate = false;
    if clicked {
        celebrate = matches!(
            vm.submit(),
            ResultView::Success {
                celebrate: true,
                ..
            }
        );
    }

    ui.add_space(DesignSystem::SPACING_LARGE);
    render_result(ui, vm.result(), i18n);

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.label(
        egui::RichText::new(i18n.tf("model_label", &[("name", vm.model_name())]))
            .small()
            .color(DesignSystem::TEXT_SECONDARY),
    );

    celebrate
}

/// Startup failed: show why, and nothing else.
fn render_fatal(ui: &mut egui::Ui, message: &str, i18n: &I18nService) {
    ui.label(
        egui::RichText::new(i18n.t("app_title"))
            .size(30.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_LARGE);

    DesignSystem::error_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(i18n.t("startup_failed_title"))
                .size(18.0)
                .strong()
                .color(DesignSystem::DANGER),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(egui::RichText::new(message).color(DesignSystem::TEXT_PRIMARY));
    });
}
