//! Infrastructure layer: storage backends and event fan-out.

pub mod notifier;
pub mod persistence;
