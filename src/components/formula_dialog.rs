//! "Nueva Fórmula" dialog: metadata fields plus an editable ingredient list.
//!
//! The dialog owns a [`FormulaDraft`] as its single source of truth for
//! structural state (row count, units, category). Text widgets are
//! snapshotted into the draft right before validation, so submission runs
//! through the same pure path the tests exercise.

use chrono::Utc;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::dialog::Dialog;
use gpui_component::input::{Input, InputState, NumberInput};
use gpui_component::menu::{DropdownMenu, PopupMenuItem};
use gpui_component::{Disableable as _, Icon, IconName, Sizable as _, Size, WindowExt as _};

use crate::components::{FormField, cancel_button};
use crate::models::{DraftField, FormulaCategory, FormulaDraft, Unit};
use crate::state::AppState;
use crate::theme::{borders, colors, spacing};

/// Widget states for one ingredient row. Position in `FormulaDialog::rows`
/// mirrors the draft's ingredient list; the id only keys elements and
/// click handlers across re-renders.
struct IngredientRowInputs {
    id: u64,
    name_state: Entity<InputState>,
    required_state: Entity<InputState>,
}

pub struct FormulaDialog {
    state: Entity<AppState>,
    draft: FormulaDraft,
    name_state: Entity<InputState>,
    description_state: Entity<InputState>,
    batch_size_state: Entity<InputState>,
    estimated_time_state: Entity<InputState>,
    rows: Vec<IngredientRowInputs>,
    next_row_id: u64,
    error_message: Option<String>,
}

impl FormulaDialog {
    pub fn open(state: Entity<AppState>, window: &mut Window, cx: &mut App) {
        let dialog_view = cx.new(|cx| FormulaDialog::new(state.clone(), window, cx));
        window.open_dialog(cx, move |dialog: Dialog, _window: &mut Window, _cx: &mut App| {
            dialog.title("Nueva Fórmula").w(px(640.0)).child(dialog_view.clone())
        });
    }

    fn new(state: Entity<AppState>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let name_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("Ej: Lavanda Premium"));
        let description_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Describe las características de esta fórmula...")
                .code_editor("text")
                .soft_wrap(true)
        });
        let batch_size_state = cx.new(|cx| InputState::new(window, cx).placeholder("50"));
        let estimated_time_state = cx.new(|cx| InputState::new(window, cx).placeholder("4 horas"));

        let mut dialog = Self {
            state,
            draft: FormulaDraft::default(),
            name_state,
            description_state,
            batch_size_state,
            estimated_time_state,
            rows: Vec::new(),
            next_row_id: 1,
            error_message: None,
        };

        // One widget row per draft row; the default draft starts with one.
        for _ in 0..dialog.draft.ingredients.len() {
            dialog.push_row_inputs(window, cx);
        }

        dialog
    }

    fn push_row_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let row_id = self.next_row_id;
        self.next_row_id += 1;
        let name_state = cx
            .new(|cx| InputState::new(window, cx).placeholder("Ej: Aceite Esencial de Lavanda"));
        let required_state = cx.new(|cx| InputState::new(window, cx).placeholder("0"));
        self.rows.push(IngredientRowInputs { id: row_id, name_state, required_state });
    }

    fn add_row(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.draft.add_row();
        self.push_row_inputs(window, cx);
    }

    fn remove_row(&mut self, row_id: u64) {
        let Some(pos) = self.rows.iter().position(|row| row.id == row_id) else {
            return;
        };
        // The draft enforces the at-least-one-row invariant.
        if self.draft.remove_row(pos) {
            self.rows.remove(pos);
        }
    }

    fn select_category(&mut self, category: FormulaCategory) {
        self.draft.set_field(DraftField::Category, category.label());
    }

    fn set_row_unit(&mut self, row_id: u64, unit: Unit) {
        if let Some(pos) = self.rows.iter().position(|row| row.id == row_id) {
            self.draft.set_ingredient_unit(pos, unit);
        }
    }

    /// Copy current widget text into the draft. Category and units are
    /// already there, set directly by their dropdowns.
    fn snapshot(&mut self, cx: &App) {
        let name = self.name_state.read(cx).value().to_string();
        let description = self.description_state.read(cx).value().to_string();
        let batch_size = self.batch_size_state.read(cx).value().to_string();
        let estimated_time = self.estimated_time_state.read(cx).value().to_string();
        self.draft.set_field(DraftField::Name, name);
        self.draft.set_field(DraftField::Description, description);
        self.draft.set_field(DraftField::BatchSize, batch_size);
        self.draft.set_field(DraftField::EstimatedTime, estimated_time);

        for pos in 0..self.rows.len() {
            let name = self.rows[pos].name_state.read(cx).value().to_string();
            let raw = self.rows[pos].required_state.read(cx).value().to_string();
            let required = raw.trim().parse::<f64>().unwrap_or(0.0);
            self.draft.set_ingredient_name(pos, name);
            self.draft.set_ingredient_required(pos, required);
        }
    }

    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.snapshot(cx);
        match self.draft.build(Utc::now()) {
            Ok(formula) => {
                self.state.update(cx, |state, cx| state.add_formula(formula, cx));
                self.draft.reset();
                self.error_message = None;
                window.close_dialog(cx);
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
                cx.notify();
            }
        }
    }

    fn render_category_dropdown(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let view = cx.entity();
        let label = if self.draft.fields.category.is_empty() {
            "Selecciona una categoría".to_string()
        } else {
            self.draft.fields.category.clone()
        };

        Button::new("category-dropdown")
            .compact()
            .label(label)
            .dropdown_caret(true)
            .rounded(borders::radius_sm())
            .with_size(Size::Small)
            .dropdown_menu_with_anchor(Corner::BottomLeft, move |mut menu, _window, _cx| {
                for category in FormulaCategory::all() {
                    let view = view.clone();
                    let category = *category;
                    menu = menu.item(PopupMenuItem::new(category.label()).on_click(
                        move |_, _window, cx| {
                            view.update(cx, |this, cx| {
                                this.select_category(category);
                                cx.notify();
                            });
                        },
                    ));
                }
                menu
            })
    }

    fn render_unit_dropdown(&self, row_id: u64, unit: Unit, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity();

        Button::new(("unit-dropdown", row_id))
            .compact()
            .label(unit.label())
            .dropdown_caret(true)
            .rounded(borders::radius_sm())
            .with_size(Size::Small)
            .dropdown_menu_with_anchor(Corner::BottomLeft, move |mut menu, _window, _cx| {
                for unit in Unit::all() {
                    let view = view.clone();
                    let unit = *unit;
                    menu = menu.item(PopupMenuItem::new(unit.label()).on_click(
                        move |_, _window, cx| {
                            view.update(cx, |this, cx| {
                                this.set_row_unit(row_id, unit);
                                cx.notify();
                            });
                        },
                    ));
                }
                menu
            })
    }

    fn render_ingredient_rows(&self, cx: &mut Context<Self>) -> Vec<AnyElement> {
        let view = cx.entity();
        let show_remove = self.rows.len() > 1;
        let mut rows = Vec::new();

        for (pos, row) in self.rows.iter().enumerate() {
            let row_id = row.id;
            let unit = self.draft.ingredients.get(pos).map(|row| row.unit).unwrap_or_default();
            let unit_dropdown = self.render_unit_dropdown(row_id, unit, cx);

            let row_view = div()
                .flex()
                .items_end()
                .gap(spacing::sm())
                .p(spacing::sm())
                .border_1()
                .border_color(colors::border_subtle())
                .rounded(borders::radius_md())
                .bg(colors::bg_surface())
                .child(
                    FormField::new("Nombre del Ingrediente")
                        .compact()
                        .child(Input::new(&row.name_state)),
                )
                .child(
                    div().w(px(140.0)).child(
                        FormField::new("Cantidad Requerida")
                            .compact()
                            .child(NumberInput::new(&row.required_state)),
                    ),
                )
                .child(div().w(px(80.0)).child(FormField::new("Unidad").compact().child(unit_dropdown)))
                .child(
                    Button::new(("remove-ingredient", row_id))
                        .ghost()
                        .compact()
                        .icon(Icon::new(IconName::Delete).xsmall())
                        .disabled(!show_remove)
                        .on_click({
                            let view = view.clone();
                            move |_: &ClickEvent, _window: &mut Window, cx: &mut App| {
                                view.update(cx, |this, cx| {
                                    this.remove_row(row_id);
                                    cx.notify();
                                });
                            }
                        }),
                );

            rows.push(row_view.into_any_element());
        }

        rows
    }
}

impl Render for FormulaDialog {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity();
        let category_dropdown = self.render_category_dropdown(cx);
        let ingredient_rows = self.render_ingredient_rows(cx);

        let error_notice = match &self.error_message {
            Some(message) => div()
                .text_sm()
                .text_color(colors::status_error())
                .child(message.clone())
                .into_any_element(),
            None => div().into_any_element(),
        };

        div()
            .flex()
            .flex_col()
            .gap(spacing::md())
            .p(spacing::md())
            .child(
                div().text_sm().text_color(colors::text_secondary()).child("Información Básica"),
            )
            .child(
                div()
                    .flex()
                    .gap(spacing::md())
                    .child(
                        FormField::new("Nombre de la Fórmula")
                            .required(true)
                            .child(Input::new(&self.name_state)),
                    )
                    .child(FormField::new("Categoría").required(true).child(category_dropdown)),
            )
            .child(
                div()
                    .flex()
                    .gap(spacing::md())
                    .child(
                        FormField::new("Tamaño del Lote (kg)")
                            .required(true)
                            .child(NumberInput::new(&self.batch_size_state)),
                    )
                    .child(
                        FormField::new("Tiempo Estimado")
                            .child(Input::new(&self.estimated_time_state)),
                    ),
            )
            .child(
                FormField::new("Descripción")
                    .required(true)
                    .child(Input::new(&self.description_state).h(px(72.0))),
            )
            .child(div().h(px(1.0)).bg(colors::border_subtle()))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div().text_sm().text_color(colors::text_secondary()).child("Ingredientes"),
                    )
                    .child(
                        Button::new("add-ingredient")
                            .ghost()
                            .compact()
                            .icon(Icon::new(IconName::Plus).xsmall())
                            .label("Agregar Ingrediente")
                            .on_click({
                                let view = view.clone();
                                move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
                                    view.update(cx, |this, cx| {
                                        this.add_row(window, cx);
                                        cx.notify();
                                    });
                                }
                            }),
                    ),
            )
            .child(div().flex().flex_col().gap(spacing::sm()).children(ingredient_rows))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap(spacing::sm())
                    .child(error_notice)
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(spacing::sm())
                            .child(cancel_button("cancel-formula"))
                            .child(
                                Button::new("create-formula")
                                    .primary()
                                    .label("Crear Fórmula")
                                    .on_click({
                                        let view = view.clone();
                                        move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
                                            view.update(cx, |this, cx| {
                                                this.submit(window, cx);
                                            });
                                        }
                                    }),
                            ),
                    ),
            )
    }
}
