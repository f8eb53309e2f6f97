pub mod amount_input;
pub mod pagination_controls;
pub mod ui;

pub use amount_input::AmountInput;
pub use pagination_controls::PaginationControls;
