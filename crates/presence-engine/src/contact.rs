//! Gate for outgoing contact actions, plus the notices shown to the visitor.
//!
//! Only the weekly schedule is consulted: a holiday on its own does not block
//! contact.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::oracle::{AvailabilityOracle, OracleConfig};
use crate::schedule::WeeklySchedule;

/// How long a notice stays visible by default.
pub const NOTICE_DURATION_MS: u64 = 3_000;

pub const CONTACT_LATER: &str = "Please, contact me later. I'm sleeping";
pub const ADDRESS_COPIED: &str = "Address copied to clipboard!";

/// A transient message for the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub text: &'static str,
    pub is_error: bool,
    pub duration_ms: u64,
}

impl Notice {
    pub const fn info(text: &'static str) -> Self {
        Self {
            text,
            is_error: false,
            duration_ms: NOTICE_DURATION_MS,
        }
    }

    pub const fn error(text: &'static str) -> Self {
        Self {
            text,
            is_error: true,
            duration_ms: NOTICE_DURATION_MS,
        }
    }

    /// Confirmation after a contact address was copied.
    pub const fn address_copied() -> Self {
        Self::info(ADDRESS_COPIED)
    }
}

/// Outcome of a contact attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ContactDecision {
    Allowed,
    Blocked { notice: Notice },
}

impl ContactDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, ContactDecision::Allowed)
    }
}

/// Decides whether a contact action goes through at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct ContactGate<'a> {
    schedule: &'a WeeklySchedule,
    config: OracleConfig,
}

impl<'a> ContactGate<'a> {
    pub fn new(schedule: &'a WeeklySchedule, config: OracleConfig) -> Self {
        Self { schedule, config }
    }

    /// Blocked with an error notice while the schedule says do-not-disturb.
    pub fn check(&self, now: DateTime<Utc>) -> ContactDecision {
        let (weekday, hour) = self.config.schedule_slot(now);
        let entry = self.schedule.resolve(weekday, hour);
        if entry.do_not_disturb {
            tracing::debug!(%weekday, hour, status = ?entry.status, "contact blocked");
            ContactDecision::Blocked {
                notice: Notice::error(CONTACT_LATER),
            }
        } else {
            ContactDecision::Allowed
        }
    }
}

impl AvailabilityOracle {
    /// Contact gate backed by this oracle's schedule and configuration.
    pub fn contact_gate(&self) -> ContactGate<'_> {
        ContactGate::new(self.schedule(), *self.config())
    }
}
