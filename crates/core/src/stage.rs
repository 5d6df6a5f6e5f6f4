//! Enumerated stage fields and their normalization policy.
//!
//! Unlike the validated fields, `durationUnit` and `status` are never
//! rejected: an absent or unrecognized value silently falls back to the
//! default member. This coercion is a deliberate, documented policy
//! carried over from the system this service replaces — do not turn it
//! into a validation error without an explicit product decision.

/// Granularity in which the derived `duration` field is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationUnit {
    Hours,
    #[default]
    Days,
    Weeks,
}

impl DurationUnit {
    /// Normalize a caller-supplied unit, falling back to `DAYS`.
    ///
    /// Infallible by design: only an exact match on one of the three
    /// members is honored, everything else (including `None`) coerces
    /// to the default.
    pub fn from_input(value: Option<&str>) -> Self {
        match value {
            Some("HOURS") => Self::Hours,
            Some("DAYS") => Self::Days,
            Some("WEEKS") => Self::Weeks,
            _ => Self::Days,
        }
    }

    /// Canonical stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hours => "HOURS",
            Self::Days => "DAYS",
            Self::Weeks => "WEEKS",
        }
    }
}

/// Lifecycle status of a construction stage.
///
/// `Deleted` is terminal: the soft-delete operation is one-directional
/// and update refuses to touch a deleted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageStatus {
    #[default]
    New,
    Planned,
    Deleted,
}

impl StageStatus {
    /// Normalize a caller-supplied status, falling back to `NEW`.
    ///
    /// Infallible by design, same policy as [`DurationUnit::from_input`].
    pub fn from_input(value: Option<&str>) -> Self {
        match value {
            Some("NEW") => Self::New,
            Some("PLANNED") => Self::Planned,
            Some("DELETED") => Self::Deleted,
            _ => Self::New,
        }
    }

    /// Canonical stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Planned => "PLANNED",
            Self::Deleted => "DELETED",
        }
    }
}
