pub mod components;
pub mod config;
pub mod icons;
pub mod storage;
pub mod theme;
pub mod toast;
