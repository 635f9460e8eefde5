//! Domain layer: entities, events, and repository contracts.

pub mod click_event;
pub mod entities;
pub mod repositories;
