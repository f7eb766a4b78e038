use crate::application::prediction_service::PredictionAdapter;
use crate::domain::errors::ModelLoadError;
use crate::domain::phone_specs::PhoneSpecs;
use crate::domain::pricing::PriceBand;
use crate::infrastructure::i18n::I18nService;

/// What the result area shows after the latest click.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Empty,
    Success {
        band: &'static PriceBand,
        celebrate: bool,
    },
    Error {
        detail: String,
    },
}

/// Form values plus the last outcome; no egui types so it can be tested headless.
pub struct PredictionViewModel {
    pub specs: PhoneSpecs,
    adapter: PredictionAdapter,
    result: ResultView,
}

impl PredictionViewModel {
    pub fn new(adapter: PredictionAdapter) -> Self {
        Self {
            specs: PhoneSpecs::default(),
            adapter,
            result: ResultView::Empty,
        }
    }

    pub fn model_name(&self) -> &str {
        self.adapter.model_name()
    }

    /// Handles one "Predict Price Range" click.
    pub fn submit(&mut self) -> &ResultView {
        self.result = match self.adapter.predict(&self.specs) {
            Ok(prediction) => ResultView::Success {
                band: prediction.band,
                celebrate: prediction.celebrate(),
            },
            Err(e) => ResultView::Error {
                detail: e.to_string(),
            },
        };
        &self.result
    }

    pub fn result(&self) -> &ResultView {
        &self.result
    }
}

/// Top-level screen: the form, or the startup failure notice.
pub enum AppState {
    Ready(Box<PredictionViewModel>),
    Fatal { error: ModelLoadError },
}

impl AppState {
    pub fn from_startup(startup: Result<PredictionAdapter, ModelLoadError>) -> Self {
        match startup {
            Ok(adapter) => AppState::Ready(Box::new(PredictionViewModel::new(adapter))),
            Err(error) => AppState::Fatal { error },
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, AppState::Ready(_))
    }

    pub fn view_model_mut(&mut self) -> Option<&mut PredictionViewModel> {
        match self {
            AppState::Ready(vm) => Some(vm),
            AppState::Fatal { .. } => None,
        }
    }
}

/// Localized text for the startup failure screen.
pub fn startup_guidance(error: &ModelLoadError, i18n: &I18nService) -> String {
    match error {
        ModelLoadError::NotFound { .. } => i18n.t("startup_model_missing").to_string(),
        other => {
            let detail = other.to_string();
            i18n.tf("startup_model_invalid", &[("detail", detail.as_str())])
        }
    }
}
