pub mod amount_field;
pub mod config;
pub mod locale_number;
pub mod notifications;
pub mod pagination;
pub mod status;
