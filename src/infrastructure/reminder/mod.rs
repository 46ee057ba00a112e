//! Remote reminder scheduler.

pub mod client;
pub mod dto;

pub use client::{DEFAULT_API_URL, ReminderClient};
