use crate::domain::phone_specs::PhoneSpecs;

/// Ordered list of feature names.
/// This order MUST match the column order the pipeline was trained on.
/// Any change here is a breaking change for saved models.
pub const FEATURE_NAMES: [&str; 20] = [
    "battery_power",
    "blue",
    "clock_speed",
    "dual_sim",
    "fc",
    "four_g",
    "int_memory",
    "m_dep",
    "mobile_wt",
    "n_cores",
    "pc",
    "px_height",
    "px_width",
    "ram",
    "sc_h",
    "sc_w",
    "talk_time",
    "three_g",
    "touch_screen",
    "wifi",
];

/// Features the form does not expose. Every record carries these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFeatures {
    pub blue: i64,
    pub dual_sim: i64,
    pub m_dep: f64,
    pub sc_h: i64,
    pub sc_w: i64,
    pub talk_time: i64,
    pub touch_screen: i64,
    pub wifi: i64,
}

pub const FIXED_FEATURES: FixedFeatures = FixedFeatures {
    blue: 1,
    dual_sim: 1,
    m_dep: 0.5,
    sc_h: 12,
    sc_w: 7,
    talk_time: 10,
    touch_screen: 1,
    wifi: 1,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
}

impl FeatureValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            FeatureValue::Int(v) => *v as f64,
            FeatureValue::Float(v) => *v,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, FeatureValue::Float(_))
    }
}

/// One row of model input: named scalars in a fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    entries: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRecord {
    /// Builds the full 20-feature row from the form values and [`FIXED_FEATURES`].
    pub fn from_specs(specs: &PhoneSpecs) -> Self {
        use FeatureValue::{Float, Int};
        let fixed = FIXED_FEATURES;

        Self {
            entries: vec![
                ("battery_power", Int(specs.battery_power)),
                ("blue", Int(fixed.blue)),
                ("clock_speed", Float(specs.clock_speed)),
                ("dual_sim", Int(fixed.dual_sim)),
                ("fc", Int(specs.fc)),
                ("four_g", Int(specs.four_g as i64)),
                ("int_memory", Int(specs.int_memory)),
                ("m_dep", Float(fixed.m_dep)),
                ("mobile_wt", Int(specs.mobile_wt)),
                ("n_cores", Int(specs.n_cores)),
                ("pc", Int(specs.pc)),
                ("px_height", Int(specs.px_height)),
                ("px_width", Int(specs.px_width)),
                ("ram", Int(specs.ram)),
                ("sc_h", Int(fixed.sc_h)),
                ("sc_w", Int(fixed.sc_w)),
                ("talk_time", Int(fixed.talk_time)),
                ("three_g", Int(specs.three_g as i64)),
                ("touch_screen", Int(fixed.touch_screen)),
                ("wifi", Int(fixed.wifi)),
            ],
        }
    }

    /// Arbitrary rows, e.g. for exercising schema checks.
    pub fn from_entries(entries: Vec<(&'static str, FeatureValue)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, FeatureValue)> {
        self.entries.iter()
    }

    /// Values in record order, widened to f64 for the matrix backend.
    pub fn to_f64_vector(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, value)| value.as_f64()).collect()
    }
}
