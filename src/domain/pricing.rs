/// Price tier predicted by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceCategory {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl PriceCategory {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PriceCategory::Low),
            1 => Some(PriceCategory::Medium),
            2 => Some(PriceCategory::High),
            3 => Some(PriceCategory::VeryHigh),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            PriceCategory::Low => 0,
            PriceCategory::Medium => 1,
            PriceCategory::High => 2,
            PriceCategory::VeryHigh => 3,
        }
    }

    pub fn band(self) -> &'static PriceBand {
        &PRICE_MAP[self.code() as usize]
    }

    /// The top tier gets the balloon treatment.
    pub fn is_top_tier(self) -> bool {
        self == PriceCategory::VeryHigh
    }
}

/// Display label and estimated retail range in Indian Rupees.
#[derive(Debug, PartialEq, Eq)]
pub struct PriceBand {
    pub category: PriceCategory,
    pub label: &'static str,
    pub inr: &'static str,
}

/// Indexed by class code.
pub const PRICE_MAP: [PriceBand; 4] = [
    PriceBand {
        category: PriceCategory::Low,
        label: "Low Cost",
        inr: "< ₹10,000",
    },
    PriceBand {
        category: PriceCategory::Medium,
        label: "Medium Cost",
        inr: "₹10,000 - ₹20,000",
    },
    PriceBand {
        category: PriceCategory::High,
        label: "High Cost",
        inr: "₹20,000 - ₹40,000",
    },
    PriceBand {
        category: PriceCategory::VeryHigh,
        label: "Very High Cost",
        inr: "> ₹40,000",
    },
];

/// Looks up a raw model output. Codes the table does not know yield `None`.
pub fn lookup(code: i64) -> Option<&'static PriceBand> {
    PriceCategory::from_code(code).map(PriceCategory::band)
}
