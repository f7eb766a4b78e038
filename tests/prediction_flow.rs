use phone_price_predictor::application::ml::predictor::PricePredictor;
use phone_price_predictor::application::prediction_service::PredictionAdapter;
use phone_price_predictor::domain::errors::{InferenceError, PredictionError};
use phone_price_predictor::domain::features::{FEATURE_NAMES, FeatureRecord};
use phone_price_predictor::domain::phone_specs::PhoneSpecs;
use phone_price_predictor::interfaces::view_models::prediction_view_model::{
    AppState, ResultView,
};
use std::sync::Arc;

/// Row for the default form with both radios switched on.
const DEFAULT_SCENARIO: [f64; 20] = [
    1250.0, // battery_power
    1.0,    // blue
    1.5,    // clock_speed
    1.0,    // dual_sim
    5.0,    // fc
    1.0,    // four_g
    32.0,   // int_memory
    0.5,    // m_dep
    140.0,  // mobile_wt
    4.0,    // n_cores
    10.0,   // pc
    650.0,  // px_height
    1250.0, // px_width
    2000.0, // ram
    12.0,   // sc_h
    7.0,    // sc_w
    10.0,   // talk_time
    1.0,    // three_g
    1.0,    // touch_screen
    1.0,    // wifi
];

/// Answers 1 for exactly the default scenario row, 0 for anything else.
struct ScenarioPredictor;

impl PricePredictor for ScenarioPredictor {
    fn predict(&self, record: &FeatureRecord) -> Result<i64, InferenceError> {
        if record.names().ne(FEATURE_NAMES.iter().copied()) {
            return Err(InferenceError::SchemaMismatch {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                actual: record.names().map(str::to_string).collect(),
            });
        }
        Ok(if record.to_f64_vector() == DEFAULT_SCENARIO {
            1
        } else {
            0
        })
    }

    fn name(&self) -> &str {
        "scenario"
    }
}

struct OutOfRangePredictor;

impl PricePredictor for OutOfRangePredictor {
    fn predict(&self, _record: &FeatureRecord) -> Result<i64, InferenceError> {
        Ok(4)
    }

    fn name(&self) -> &str {
        "out-of-range"
    }
}

fn scenario_specs() -> PhoneSpecs {
    PhoneSpecs {
        four_g: true,
        three_g: true,
        ..PhoneSpecs::default()
    }
}

#[test]
fn test_default_scenario_is_medium_cost() {
    let adapter = PredictionAdapter::new(Arc::new(ScenarioPredictor));

    let prediction = adapter.predict(&scenario_specs()).unwrap();

    assert_eq!(prediction.code, 1);
    assert_eq!(prediction.band.label, "Medium Cost");
    assert_eq!(prediction.band.inr, "₹10,000 - ₹20,000");
    assert!(!prediction.celebrate());
}

#[test]
fn test_scenario_record_is_fully_determined() {
    let record = FeatureRecord::from_specs(&scenario_specs());
    assert_eq!(record.to_f64_vector(), DEFAULT_SCENARIO.to_vec());
}

#[test]
fn test_repeated_submissions_render_identically() {
    let mut state = AppState::from_startup(Ok(PredictionAdapter::new(Arc::new(ScenarioPredictor))));
    let vm = state.view_model_mut().expect("form is available");
    vm.specs = scenario_specs();

    let first = vm.submit().clone();
    let second = vm.submit().clone();

    assert_eq!(first, second);
    assert!(matches!(first, ResultView::Success { band, .. } if band.label == "Medium Cost"));
}

#[test]
fn test_out_of_range_code_keeps_form_alive() {
    let adapter = PredictionAdapter::new(Arc::new(OutOfRangePredictor));
    let err = adapter.predict(&PhoneSpecs::default()).unwrap_err();
    assert!(matches!(err, PredictionError::UnknownCategory(4)));

    let mut state = AppState::from_startup(Ok(adapter));
    let vm = state.view_model_mut().expect("form is available");
    assert!(matches!(vm.submit(), ResultView::Error { .. }));
    // Still interactive: another submission goes through the same path
    assert!(matches!(vm.submit(), ResultView::Error { .. }));
    assert!(state.is_interactive());
}
