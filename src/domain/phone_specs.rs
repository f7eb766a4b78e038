//! User-adjustable phone specifications and the bounds of each input widget.

/// A bounded integer input (slider or discrete selector).
///
/// Reachable values are `min + k * step`, never above `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntInput {
    pub key: &'static str,
    pub label_key: &'static str,
    pub min: i64,
    pub max: i64,
    pub default: i64,
    pub step: i64,
}

impl IntInput {
    /// Clamps `value` into range and moves it onto the nearest step.
    pub fn snap(&self, value: i64) -> i64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) as f64 / self.step as f64).round() as i64;
        let snapped = self.min + steps * self.step;
        if snapped > self.max {
            snapped - self.step
        } else {
            snapped
        }
    }

    /// Largest value a user can actually select.
    pub fn max_reachable(&self) -> i64 {
        self.min + (self.max - self.min) / self.step * self.step
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        (self.min..=self.max).step_by(self.step as usize)
    }
}

/// A bounded floating-point slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatInput {
    pub key: &'static str,
    pub label_key: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl FloatInput {
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        // Strip accumulated binary noise so 0.5 + 10 * 0.1 reads back as 1.5
        let snapped = ((self.min + steps * self.step) * 1e6).round() / 1e6;
        snapped.min(self.max)
    }
}

/// A Yes/No selector encoded as 0/1 for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryInput {
    pub key: &'static str,
    pub label_key: &'static str,
    pub default: bool,
}

pub const RAM: IntInput = IntInput {
    key: "ram",
    label_key: "input_ram",
    min: 250,
    max: 4000,
    default: 2000,
    step: 128,
};

pub const INTERNAL_MEMORY: IntInput = IntInput {
    key: "int_memory",
    label_key: "input_int_memory",
    min: 2,
    max: 64,
    default: 32,
    step: 2,
};

pub const BATTERY_POWER: IntInput = IntInput {
    key: "battery_power",
    label_key: "input_battery_power",
    min: 500,
    max: 2000,
    default: 1250,
    step: 50,
};

pub const MOBILE_WEIGHT: IntInput = IntInput {
    key: "mobile_wt",
    label_key: "input_mobile_wt",
    min: 80,
    max: 200,
    default: 140,
    step: 1,
};

pub const PIXEL_HEIGHT: IntInput = IntInput {
    key: "px_height",
    label_key: "input_px_height",
    min: 0,
    max: 2000,
    default: 650,
    step: 10,
};

pub const PIXEL_WIDTH: IntInput = IntInput {
    key: "px_width",
    label_key: "input_px_width",
    min: 500,
    max: 2000,
    default: 1250,
    step: 10,
};

pub const PRIMARY_CAMERA: IntInput = IntInput {
    key: "pc",
    label_key: "input_pc",
    min: 0,
    max: 21,
    default: 10,
    step: 1,
};

pub const FRONT_CAMERA: IntInput = IntInput {
    key: "fc",
    label_key: "input_fc",
    min: 0,
    max: 20,
    default: 5,
    step: 1,
};

/// Rendered as a dropdown over 1..=8 rather than a slider.
pub const CORE_COUNT: IntInput = IntInput {
    key: "n_cores",
    label_key: "input_n_cores",
    min: 1,
    max: 8,
    default: 4,
    step: 1,
};

pub const CLOCK_SPEED: FloatInput = FloatInput {
    key: "clock_speed",
    label_key: "input_clock_speed",
    min: 0.5,
    max: 3.0,
    default: 1.5,
    step: 0.1,
};

// Selectors start on their first option, which is "No".
pub const FOUR_G: BinaryInput = BinaryInput {
    key: "four_g",
    label_key: "input_four_g",
    default: false,
};

pub const THREE_G: BinaryInput = BinaryInput {
    key: "three_g",
    label_key: "input_three_g",
    default: false,
};

/// Current values of the twelve user-controlled inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneSpecs {
    pub ram: i64,
    pub int_memory: i64,
    pub battery_power: i64,
    pub mobile_wt: i64,
    pub px_height: i64,
    pub px_width: i64,
    pub pc: i64,
    pub fc: i64,
    pub n_cores: i64,
    pub clock_speed: f64,
    pub four_g: bool,
    pub three_g: bool,
}

impl Default for PhoneSpecs {
    fn default() -> Self {
        Self {
            ram: RAM.default,
            int_memory: INTERNAL_MEMORY.default,
            battery_power: BATTERY_POWER.default,
            mobile_wt: MOBILE_WEIGHT.default,
            px_height: PIXEL_HEIGHT.default,
            px_width: PIXEL_WIDTH.default,
            pc: PRIMARY_CAMERA.default,
            fc: FRONT_CAMERA.default,
            n_cores: CORE_COUNT.default,
            clock_speed: CLOCK_SPEED.default,
            four_g: FOUR_G.default,
            three_g: THREE_G.default,
        }
    }
}

impl PhoneSpecs {
    /// Returns a copy with every value forced onto its widget's grid.
    pub fn snapped(&self) -> Self {
        Self {
            ram: RAM.snap(self.ram),
            int_memory: INTERNAL_MEMORY.snap(self.int_memory),
            battery_power: BATTERY_POWER.snap(self.battery_power),
            mobile_wt: MOBILE_WEIGHT.snap(self.mobile_wt),
            px_height: PIXEL_HEIGHT.snap(self.px_height),
            px_width: PIXEL_WIDTH.snap(self.px_width),
            pc: PRIMARY_CAMERA.snap(self.pc),
            fc: FRONT_CAMERA.snap(self.fc),
            n_cores: CORE_COUNT.snap(self.n_cores),
            clock_speed: CLOCK_SPEED.snap(self.clock_speed),
            four_g: self.four_g,
            three_g: self.three_g,
        }
    }
}
