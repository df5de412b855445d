//! Match events and their subscribers.
//!
//! ## Key Types
//!
//! - `GameEvent`: one typed record per state change, displayed as a log line
//! - `EventSubscriber`: passive observer notified by `Session`
//! - `LogSubscriber`, `EventRecorder`: stock subscribers

mod event;
mod subscriber;

pub use event::{DamageSource, GameEvent};
pub use subscriber::{EventRecorder, EventSubscriber, LogSubscriber};
