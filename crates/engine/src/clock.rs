//! Wall-clock abstraction.
//!
//! The ledger never reads the system time directly: the operation timestamp
//! comes from an injected [`Clock`] so tests can pin it to a known instant.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
