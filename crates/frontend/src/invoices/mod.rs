pub mod list;
pub mod sample;

pub use list::InvoiceListPage;
