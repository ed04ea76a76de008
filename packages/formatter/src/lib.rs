// ABOUTME: Output formatting for PartnerDesk
// ABOUTME: Agreement export and shared display helpers

pub mod agreement;
pub mod display;

pub use agreement::{agreement_file_name, render_agreement, write_agreement, ExportError};
pub use display::{format_date, format_datetime, or_placeholder, type_caption};
