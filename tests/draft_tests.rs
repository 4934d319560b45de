//! Tests for the formula form state machine and its submission contract
//! (`aromalab::models::draft`).

use aromalab::models::{
    DEFAULT_ESTIMATED_TIME, DraftError, DraftField, FormulaCategory, FormulaDraft, FormulaStatus,
    IngredientDraft, Unit,
};
use chrono::{DateTime, TimeZone, Utc};

fn creation_time() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_700_000_123_456).unwrap()
}

/// A draft that passes validation: all required metadata plus one valid row.
fn filled_draft() -> FormulaDraft {
    let mut draft = FormulaDraft::default();
    draft.set_field(DraftField::Name, "Lavanda");
    draft.set_field(DraftField::Description, "x");
    draft.set_field(DraftField::Category, "Floral");
    draft.set_field(DraftField::BatchSize, "50");
    draft.set_ingredient_name(0, "Aceite");
    draft.set_ingredient_required(0, 3.0);
    draft.set_ingredient_unit(0, Unit::L);
    draft
}

// =============================================================================
// Field and row editing
// =============================================================================

#[test]
fn test_default_draft_is_empty_with_one_row() {
    let draft = FormulaDraft::default();
    assert_eq!(draft.fields.name, "");
    assert_eq!(draft.fields.description, "");
    assert_eq!(draft.fields.category, "");
    assert_eq!(draft.fields.batch_size, "");
    assert_eq!(draft.fields.estimated_time, "");
    assert_eq!(draft.ingredients, vec![IngredientDraft::default()]);
    assert_eq!(draft.ingredients[0].unit, Unit::Kg);
}

#[test]
fn test_set_field_overwrites_exactly_one_scalar() {
    let mut draft = FormulaDraft::default();
    draft.set_field(DraftField::Name, "Lavanda");
    assert_eq!(draft.fields.name, "Lavanda");
    assert_eq!(draft.fields.description, "");

    // Overwrite, not append
    draft.set_field(DraftField::Name, "Rosa");
    assert_eq!(draft.fields.name, "Rosa");

    // Invalid values are representable while editing
    draft.set_field(DraftField::BatchSize, "abc");
    assert_eq!(draft.fields.batch_size, "abc");
}

#[test]
fn test_add_row_appends_default_row() {
    let mut draft = FormulaDraft::default();
    draft.set_ingredient_name(0, "Aceite");
    draft.add_row();
    assert_eq!(draft.ingredients.len(), 2);
    assert_eq!(draft.ingredients[1], IngredientDraft::default());
    // Existing rows untouched
    assert_eq!(draft.ingredients[0].name, "Aceite");
}

#[test]
fn test_remove_row_never_removes_the_last_row() {
    let mut draft = FormulaDraft::default();
    draft.set_ingredient_name(0, "Aceite");

    let before = draft.ingredients.clone();
    assert!(!draft.remove_row(0));
    assert_eq!(draft.ingredients, before);

    draft.add_row();
    assert!(draft.remove_row(1));
    assert_eq!(draft.ingredients.len(), 1);
    // And the guard holds again
    assert!(!draft.remove_row(0));
}

#[test]
fn test_remove_row_out_of_range_is_a_noop() {
    let mut draft = FormulaDraft::default();
    draft.add_row();
    assert!(!draft.remove_row(5));
    assert_eq!(draft.ingredients.len(), 2);
}

#[test]
fn test_row_edits_target_only_their_row() {
    let mut draft = FormulaDraft::default();
    draft.add_row();
    draft.add_row();
    draft.set_ingredient_name(1, "Bergamota");
    draft.set_ingredient_required(1, 2.5);
    draft.set_ingredient_unit(1, Unit::Ml);

    assert_eq!(draft.ingredients[0], IngredientDraft::default());
    assert_eq!(draft.ingredients[1].name, "Bergamota");
    assert_eq!(draft.ingredients[1].required, 2.5);
    assert_eq!(draft.ingredients[1].unit, Unit::Ml);
    assert_eq!(draft.ingredients[2], IngredientDraft::default());

    // Out-of-range edits do nothing
    draft.set_ingredient_name(9, "fantasma");
    assert_eq!(draft.ingredients.len(), 3);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut draft = filled_draft();
    draft.add_row();
    draft.set_field(DraftField::EstimatedTime, "2 horas");

    draft.reset();
    assert_eq!(draft, FormulaDraft::default());
}

// =============================================================================
// Validation gates
// =============================================================================

#[test]
fn test_missing_required_field_gate() {
    // Leaving only the category empty still rejects, even with a valid row
    let mut draft = filled_draft();
    draft.set_field(DraftField::Category, "");
    assert_eq!(draft.build(creation_time()), Err(DraftError::MissingRequiredField));

    for field in [DraftField::Name, DraftField::Description, DraftField::BatchSize] {
        let mut draft = filled_draft();
        draft.set_field(field, "   ");
        assert_eq!(draft.build(creation_time()), Err(DraftError::MissingRequiredField));
    }
}

#[test]
fn test_blank_estimated_time_is_not_required() {
    let draft = filled_draft();
    assert!(draft.build(creation_time()).is_ok());
}

#[test]
fn test_non_numeric_batch_size_is_rejected() {
    for raw in ["abc", "0", "-5", "1.5"] {
        let mut draft = filled_draft();
        draft.set_field(DraftField::BatchSize, raw);
        assert_eq!(
            draft.build(creation_time()),
            Err(DraftError::MissingRequiredField),
            "batch size {raw:?} should be rejected"
        );
    }
}

#[test]
fn test_unknown_category_is_rejected() {
    let mut draft = filled_draft();
    draft.set_field(DraftField::Category, "Especiada");
    assert_eq!(draft.build(creation_time()), Err(DraftError::MissingRequiredField));
}

#[test]
fn test_no_valid_ingredients_gate() {
    let mut draft = filled_draft();
    // Blank name and zero quantity are both invalid rows
    draft.set_ingredient_name(0, "   ");
    assert_eq!(draft.build(creation_time()), Err(DraftError::NoValidIngredients));

    let mut draft = filled_draft();
    draft.set_ingredient_required(0, 0.0);
    assert_eq!(draft.build(creation_time()), Err(DraftError::NoValidIngredients));
}

#[test]
fn test_failed_build_leaves_draft_untouched() {
    let mut draft = filled_draft();
    draft.set_field(DraftField::Category, "");
    let before = draft.clone();
    let _ = draft.build(creation_time());
    assert_eq!(draft, before);
}

#[test]
fn test_error_notices_are_the_fixed_strings() {
    assert_eq!(
        DraftError::MissingRequiredField.to_string(),
        "Por favor completa todos los campos requeridos"
    );
    assert_eq!(
        DraftError::NoValidIngredients.to_string(),
        "Debe agregar al menos un ingrediente válido"
    );
}

// =============================================================================
// Record assembly
// =============================================================================

#[test]
fn test_invalid_rows_are_filtered_out() {
    let mut draft = filled_draft();
    draft.set_ingredient_name(0, "A");
    draft.set_ingredient_required(0, 2.0);
    draft.add_row();
    draft.set_ingredient_required(1, 5.0); // blank name
    draft.add_row();
    draft.set_ingredient_name(2, "B"); // zero quantity
    draft.add_row();
    draft.set_ingredient_name(3, "C");
    draft.set_ingredient_required(3, 1.5);

    let formula = draft.build(creation_time()).unwrap();
    let names: Vec<&str> = formula.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
    assert!(formula.ingredients.iter().all(|i| i.available == 0.0));
}

#[test]
fn test_estimated_time_defaults_when_blank() {
    let formula = filled_draft().build(creation_time()).unwrap();
    assert_eq!(formula.estimated_time, DEFAULT_ESTIMATED_TIME);
    assert_eq!(formula.estimated_time, "4 horas");

    let mut draft = filled_draft();
    draft.set_field(DraftField::EstimatedTime, "2 horas");
    let formula = draft.build(creation_time()).unwrap();
    assert_eq!(formula.estimated_time, "2 horas");
}

#[test]
fn test_successful_build_end_to_end() {
    let draft = filled_draft();
    let formula = draft.build(creation_time()).unwrap();

    assert!(!formula.id.is_empty());
    assert!(formula.id.starts_with('F'));
    assert_eq!(formula.name, "Lavanda");
    assert_eq!(formula.description, "x");
    assert_eq!(formula.category, FormulaCategory::Floral);
    assert_eq!(formula.batch_size, 50u32);
    assert_eq!(formula.status, FormulaStatus::Incomplete);
    assert_eq!(formula.ingredients.len(), 1);
    assert_eq!(formula.ingredients[0].name, "Aceite");
    assert_eq!(formula.ingredients[0].required, 3.0);
    assert_eq!(formula.ingredients[0].unit, Unit::L);
    assert_eq!(formula.ingredients[0].available, 0.0);
}

#[test]
fn test_id_derives_from_timestamp_millis() {
    // 1_700_000_123_456 ends in 456
    let formula = filled_draft().build(creation_time()).unwrap();
    assert_eq!(formula.id, "F456");
}

#[test]
fn test_name_and_description_are_not_trimmed_in_the_record() {
    // Blank-checks trim, but the stored values are what the user typed
    let mut draft = filled_draft();
    draft.set_field(DraftField::Name, " Lavanda Premium ");
    let formula = draft.build(creation_time()).unwrap();
    assert_eq!(formula.name, " Lavanda Premium ");
}
