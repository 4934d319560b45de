// Data structures and types

pub mod draft;
pub mod formula;

pub use draft::{
    DEFAULT_ESTIMATED_TIME, DraftError, DraftField, DraftFields, FormulaDraft, IngredientDraft,
};
pub use formula::{Formula, FormulaCategory, FormulaStatus, Ingredient, Unit, formula_id};
