use crate::application::ml::predictor::PricePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureRecord;
use crate::domain::phone_specs::PhoneSpecs;
use crate::domain::pricing::{self, PriceBand};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub code: i64,
    pub band: &'static PriceBand,
}

impl Prediction {
    pub fn celebrate(&self) -> bool {
        self.band.category.is_top_tier()
    }
}

/// Turns form values into a price band using the loaded pipeline.
#[derive(Clone)]
pub struct PredictionAdapter {
    predictor: Arc<dyn PricePredictor>,
}

impl PredictionAdapter {
    pub fn new(predictor: Arc<dyn PricePredictor>) -> Self {
        Self { predictor }
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }

    /// Runs one inference. Failures are returned, never panicked on.
    pub fn predict(&self, specs: &PhoneSpecs) -> Result<Prediction, PredictionError> {
        let record = FeatureRecord::from_specs(specs);

        let code = self.predictor.predict(&record).map_err(|e| {
            warn!("Inference failed: {}", e);
            PredictionError::from(e)
        })?;

        let Some(band) = pricing::lookup(code) else {
            warn!("Model returned unknown price category {}", code);
            return Err(PredictionError::UnknownCategory(code));
        };

        info!(code, label = band.label, "Prediction complete");
        Ok(Prediction { code, band })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::InferenceError;

    struct FixedPredictor(i64);

    impl PricePredictor for FixedPredictor {
        fn predict(&self, _record: &FeatureRecord) -> Result<i64, InferenceError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingPredictor;

    impl PricePredictor for FailingPredictor {
        fn predict(&self, _record: &FeatureRecord) -> Result<i64, InferenceError> {
            Err(InferenceError::Model("boom".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_known_code_maps_to_band() {
        let adapter = PredictionAdapter::new(Arc::new(FixedPredictor(2)));
        let prediction = adapter.predict(&PhoneSpecs::default()).unwrap();
        assert_eq!(prediction.band.label, "High Cost");
        assert_eq!(prediction.band.inr, "₹20,000 - ₹40,000");
        assert!(!prediction.celebrate());
    }

    #[test]
    fn test_top_tier_celebrates() {
        let adapter = PredictionAdapter::new(Arc::new(FixedPredictor(3)));
        let prediction = adapter.predict(&PhoneSpecs::default()).unwrap();
        assert_eq!(prediction.band.label, "Very High Cost");
        assert!(prediction.celebrate());
    }

    #[test]
    fn test_out_of_range_code_is_an_error() {
        let adapter = PredictionAdapter::new(Arc::new(FixedPredictor(9)));
        let err = adapter.predict(&PhoneSpecs::default()).unwrap_err();
        assert!(matches!(err, PredictionError::UnknownCategory(9)));
    }

    #[test]
    fn test_inference_failure_is_an_error() {
        let adapter = PredictionAdapter::new(Arc::new(FailingPredictor));
        let err = adapter.predict(&PhoneSpecs::default()).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
