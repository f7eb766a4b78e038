use crate::application::ml::smartcore_predictor::SmartCorePipeline;
use crate::application::prediction_service::PredictionAdapter;
use crate::config::Config;
use crate::domain::errors::ModelLoadError;
use std::sync::Arc;
use tracing::info;

/// Everything the form needs once startup succeeded.
pub struct Application {
    pub adapter: PredictionAdapter,
}

impl Application {
    /// Loads the trained pipeline once. There is no reload path afterwards.
    pub fn build(config: &Config) -> Result<Self, ModelLoadError> {
        info!("Loading price model from {:?}...", config.model.model_path);

        let pipeline = SmartCorePipeline::load(&config.model.model_path)?;
        let adapter = PredictionAdapter::new(Arc::new(pipeline));

        info!("Model ready: {}", adapter.model_name());
        Ok(Self { adapter })
    }
}
