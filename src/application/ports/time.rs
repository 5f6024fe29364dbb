// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Wall clock used to stamp notices; swapped for a fixed clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
