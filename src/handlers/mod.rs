//! HTTP handlers, one per route.

pub mod activities;
pub mod campers;
pub mod signups;
