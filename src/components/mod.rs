// Reusable UI components

pub mod confirm;
pub mod dialog_helpers;
pub mod form_field;
pub mod formula_dialog;

pub use confirm::open_confirm_dialog;
pub use dialog_helpers::{cancel_button, primary_button};
pub use form_field::FormField;
pub use formula_dialog::FormulaDialog;
