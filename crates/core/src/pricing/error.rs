//! Pricing errors.
//!
//! Arithmetic never fails. These errors only cover configuration: tier
//! schedules and which schedule a document needs.

use rust_decimal::Decimal;
use thiserror::Error;

/// Problems found in a volume discount tier schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierScheduleError {
    /// No preset with that name exists.
    #[error("unknown tier schedule: {0}")]
    UnknownPreset(String),

    /// The schedule has no tiers.
    #[error("tier schedule {0} has no tiers")]
    Empty(String),

    /// A tier's `max` is below its `min`.
    #[error("tier {index} has max {max} below min {min}")]
    InvertedRange {
        /// Position of the tier in the schedule.
        index: usize,
        /// Lower bound.
        min: u64,
        /// Upper bound.
        max: u64,
    },

    /// A tier starts before the tier preceding it.
    #[error("tier {index} is not ordered ascending by min")]
    OutOfOrder {
        /// Position of the tier in the schedule.
        index: usize,
    },

    /// A tier overlaps the tier preceding it.
    #[error("tier {index} overlaps the previous tier")]
    Overlap {
        /// Position of the tier in the schedule.
        index: usize,
    },

    /// Quantities between two tiers match neither.
    #[error("tier {index} leaves a gap: expected min {expected_min}")]
    Gap {
        /// Position of the tier in the schedule.
        index: usize,
        /// The `min` that would make the schedule contiguous.
        expected_min: u64,
    },

    /// A discount outside `[0, 100]`.
    #[error("tier {index} has discount {percent}% outside 0-100")]
    PercentOutOfRange {
        /// Position of the tier in the schedule.
        index: usize,
        /// The offending percentage.
        percent: Decimal,
    },

    /// A higher tier gives a smaller discount than a lower one.
    #[error("tier {index} lowers the discount of the previous tier")]
    DecreasingDiscount {
        /// Position of the tier in the schedule.
        index: usize,
    },
}

/// Errors from pricing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A volume-priced document was submitted without a tier schedule.
    #[error("volume pricing requires a tier schedule")]
    MissingSchedule,
}
