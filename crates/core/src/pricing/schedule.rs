//! Named, versioned volume discount tables.
//!
//! Two tables are in use and it is not settled which one is canonical, so
//! both ship as presets and callers pick one explicitly:
//!
//! | preset     | 11-20 | 21-99 | 100+ |
//! |------------|-------|-------|------|
//! | `standard` | 5%    | 10%   | 10%  |
//! | `bulk`     | 5%    | 10%   | 15%  |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::volume::{NextTier, VolumeDiscountResult, VolumeDiscountTier};
use super::{LineItem, TierScheduleError, apply_volume_discount, next_volume_tier};

/// A versioned volume discount tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSchedule {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    pub tiers: Vec<VolumeDiscountTier>,
}

const fn default_version() -> u32 {
    1
}

impl TierSchedule {
    /// Names of the built-in presets.
    pub const PRESETS: &'static [&'static str] = &["standard", "bulk"];

    /// 5% from 11 units, 10% from 21 units.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            name: "standard".to_owned(),
            version: 1,
            tiers: vec![
                VolumeDiscountTier::new(11, 20, Decimal::from(5)),
                VolumeDiscountTier::unbounded(21, Decimal::from(10)),
            ],
        }
    }

    /// 5% from 11 units, 10% from 21 units, 15% from 100 units.
    #[must_use]
    pub fn bulk() -> Self {
        Self {
            name: "bulk".to_owned(),
            version: 1,
            tiers: vec![
                VolumeDiscountTier::new(11, 20, Decimal::from(5)),
                VolumeDiscountTier::new(21, 99, Decimal::from(10)),
                VolumeDiscountTier::unbounded(100, Decimal::from(15)),
            ],
        }
    }

    /// Look up a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`TierScheduleError::UnknownPreset`] for names other than
    /// those in [`Self::PRESETS`].
    pub fn preset(name: &str) -> Result<Self, TierScheduleError> {
        match name {
            "standard" => Ok(Self::standard()),
            "bulk" => Ok(Self::bulk()),
            _ => Err(TierScheduleError::UnknownPreset(name.to_owned())),
        }
    }

    /// Apply this schedule to a set of items.
    #[must_use]
    pub fn apply(&self, items: &[LineItem]) -> VolumeDiscountResult {
        apply_volume_discount(items, &self.tiers)
    }

    /// The next tier reachable from `quantity`, if any.
    #[must_use]
    pub fn next_tier(&self, quantity: u64) -> Option<NextTier> {
        next_volume_tier(quantity, &self.tiers)
    }

    /// Every problem that breaks the contiguity and monotonicity this
    /// schedule is expected to have. Empty when the schedule is sound.
    ///
    /// Pricing does not require a valid schedule; this exists for operators
    /// loading tables from files.
    #[must_use]
    pub fn problems(&self) -> Vec<TierScheduleError> {
        let mut problems = Vec::new();

        if self.tiers.is_empty() {
            problems.push(TierScheduleError::Empty(self.name.clone()));
            return problems;
        }

        let hundred = Decimal::ONE_HUNDRED;
        let mut previous: Option<&VolumeDiscountTier> = None;

        for (index, tier) in self.tiers.iter().enumerate() {
            if let Some(max) = tier.max
                && max < tier.min
            {
                problems.push(TierScheduleError::InvertedRange {
                    index,
                    min: tier.min,
                    max,
                });
            }

            if tier.discount_percent < Decimal::ZERO || tier.discount_percent > hundred {
                problems.push(TierScheduleError::PercentOutOfRange {
                    index,
                    percent: tier.discount_percent,
                });
            }

            if let Some(prev) = previous {
                if tier.min < prev.min {
                    problems.push(TierScheduleError::OutOfOrder { index });
                } else {
                    match prev.max {
                        None => problems.push(TierScheduleError::Overlap { index }),
                        Some(prev_max) if tier.min <= prev_max => {
                            problems.push(TierScheduleError::Overlap { index });
                        }
                        Some(prev_max) if tier.min > prev_max.saturating_add(1) => {
                            problems.push(TierScheduleError::Gap {
                                index,
                                expected_min: prev_max.saturating_add(1),
                            });
                        }
                        Some(_) => {}
                    }
                }

                if tier.discount_percent < prev.discount_percent {
                    problems.push(TierScheduleError::DecreasingDiscount { index });
                }
            }

            previous = Some(tier);
        }

        problems
    }

    /// Check the schedule, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns the first entry of [`Self::problems`].
    pub fn validate(&self) -> Result<(), TierScheduleError> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }
}
