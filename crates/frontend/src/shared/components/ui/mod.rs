pub mod badge;

pub use badge::{Badge, ReminderBadge, StatusBadge};
