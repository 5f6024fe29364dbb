// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content;
pub mod time;

pub use content::{Call, RecordingContentRepo, RendezvousContentRepo};
pub use time::{FixedClock, fixed_now};
