// ─────────────────────────────────────────────────────────────────────────────
// Efficiency tiers (kcal per Rupiah)
// ─────────────────────────────────────────────────────────────────────────────

pub const EFFICIENCY_VERY_HIGH: f64 = 0.06;
pub const EFFICIENCY_HIGH: f64 = 0.04;
pub const EFFICIENCY_MEDIUM: f64 = 0.02;

// ─────────────────────────────────────────────────────────────────────────────
// Price tiers (Rupiah)
// ─────────────────────────────────────────────────────────────────────────────

pub const PRICE_VERY_AFFORDABLE: i64 = 5_000;
pub const PRICE_AFFORDABLE: i64 = 10_000;
pub const PRICE_MODERATE: i64 = 15_000;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Number of accepted items explained in detail by default.
pub const DEFAULT_EXPLAIN_COUNT: usize = 3;

/// Ratios are shown per this many currency units.
pub const RATIO_DISPLAY_UNIT: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EfficiencyTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl EfficiencyTier {
    pub fn name(&self) -> &'static str {
        match self {
            EfficiencyTier::VeryHigh => "very high",
            EfficiencyTier::High => "high",
            EfficiencyTier::Medium => "medium",
            EfficiencyTier::Low => "low",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EfficiencyTier::VeryHigh => "a lot of energy for a low price",
            EfficiencyTier::High => "plenty of energy at an affordable price",
            EfficiencyTier::Medium => "reasonable energy for a fair price",
            EfficiencyTier::Low => "picked because it still fits the budget despite low efficiency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceTier {
    VeryAffordable,
    Affordable,
    Moderate,
    Premium,
}

impl PriceTier {
    pub fn name(&self) -> &'static str {
        match self {
            PriceTier::VeryAffordable => "very affordable",
            PriceTier::Affordable => "affordable",
            PriceTier::Moderate => "moderate",
            PriceTier::Premium => "premium",
        }
    }
}

/// Classify a kcal-per-Rupiah ratio.
pub fn efficiency_tier(ratio: f64) -> EfficiencyTier {
    if ratio >= EFFICIENCY_VERY_HIGH {
        EfficiencyTier::VeryHigh
    } else if ratio >= EFFICIENCY_HIGH {
        EfficiencyTier::High
    } else if ratio >= EFFICIENCY_MEDIUM {
        EfficiencyTier::Medium
    } else {
        EfficiencyTier::Low
    }
}

/// Classify a price.
pub fn price_tier(price: i64) -> PriceTier {
    if price <= PRICE_VERY_AFFORDABLE {
        PriceTier::VeryAffordable
    } else if price <= PRICE_AFFORDABLE {
        PriceTier::Affordable
    } else if price <= PRICE_MODERATE {
        PriceTier::Moderate
    } else {
        PriceTier::Premium
    }
}
