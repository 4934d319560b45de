//! Root view: formula list plus the entry point into the creation dialog.

use gpui::prelude::{InteractiveElement as _, StatefulInteractiveElement as _};
use gpui::*;
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::{ActiveTheme as _, Icon, IconName, Sizable as _};

use crate::components::{FormulaDialog, open_confirm_dialog};
use crate::models::{Formula, FormulaStatus};
use crate::state::AppState;
use crate::theme::{borders, colors, sizing, spacing, typography};

pub struct AppRoot {
    state: Entity<AppState>,
}

impl AppRoot {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let state = cx.new(|_| AppState::new());
        cx.observe(&state, |_, _, cx| cx.notify()).detach();
        Self { state }
    }

    fn render_header(&self) -> impl IntoElement {
        let state = self.state.clone();

        div()
            .flex()
            .items_center()
            .justify_between()
            .h(sizing::header_height())
            .px(spacing::lg())
            .border_b_1()
            .border_color(colors::border_subtle())
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(spacing::sm())
                    .child(
                        div()
                            .w(sizing::status_dot())
                            .h(sizing::status_dot())
                            .rounded_full()
                            .bg(colors::accent()),
                    )
                    .child(
                        div()
                            .text_size(typography::text_lg())
                            .text_color(colors::text_primary())
                            .child("AromaLab"),
                    ),
            )
            .child(
                Button::new("new-formula")
                    .primary()
                    .icon(Icon::new(IconName::Plus).xsmall())
                    .label("Nueva Fórmula")
                    .on_click(move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
                        FormulaDialog::open(state.clone(), window, cx);
                    }),
            )
    }

    fn render_empty(&self) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .justify_center()
            .gap(spacing::sm())
            .child(
                div().text_sm().text_color(colors::text_secondary()).child("No hay fórmulas todavía"),
            )
            .child(
                div()
                    .text_size(typography::text_xs())
                    .text_color(colors::text_muted())
                    .child("Crea tu primera fórmula con el botón \"Nueva Fórmula\""),
            )
            .into_any_element()
    }

    fn render_formula_card(&self, index: usize, formula: &Formula) -> AnyElement {
        let state = self.state.clone();
        let id = formula.id.clone();
        let name = formula.name.clone();
        let status_color = match formula.status {
            FormulaStatus::Incomplete => colors::status_warning(),
            FormulaStatus::Complete => colors::status_ok(),
        };

        let ingredient_summary = formula
            .ingredients
            .iter()
            .map(|ingredient| {
                format!("{} ({} {})", ingredient.name, ingredient.required, ingredient.unit.label())
            })
            .collect::<Vec<_>>()
            .join(", ");

        div()
            .flex()
            .flex_col()
            .gap(spacing::xs())
            .p(spacing::md())
            .border_1()
            .border_color(colors::border_subtle())
            .rounded(borders::radius_md())
            .bg(colors::bg_surface())
            .hover(|style| style.bg(colors::bg_surface_hover()))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(spacing::sm())
                            .child(div().text_sm().text_color(colors::text_primary()).child(name.clone()))
                            .child(
                                div()
                                    .text_size(typography::text_xs())
                                    .text_color(colors::text_muted())
                                    .child(formula.category.label()),
                            )
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap(spacing::xs())
                                    .child(
                                        div()
                                            .w(px(6.0))
                                            .h(px(6.0))
                                            .rounded_full()
                                            .bg(status_color),
                                    )
                                    .child(
                                        div()
                                            .text_size(typography::text_xs())
                                            .text_color(colors::text_secondary())
                                            .child(formula.status.label()),
                                    ),
                            ),
                    )
                    .child(
                        Button::new(("delete-formula", index as u64))
                            .ghost()
                            .compact()
                            .icon(Icon::new(IconName::Delete).xsmall())
                            .on_click(move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
                                let state = state.clone();
                                let id = id.clone();
                                open_confirm_dialog(
                                    window,
                                    cx,
                                    "Eliminar fórmula",
                                    format!("¿Eliminar la fórmula \"{name}\"?"),
                                    "Eliminar",
                                    true,
                                    move |_window, cx| {
                                        state.update(cx, |state, cx| {
                                            state.remove_formula(&id, cx);
                                        });
                                    },
                                );
                            }),
                    ),
            )
            .child(
                div()
                    .text_size(typography::text_xs())
                    .text_color(colors::text_secondary())
                    .child(format!(
                        "{} · Lote: {} kg · Tiempo estimado: {}",
                        formula.id, formula.batch_size, formula.estimated_time
                    )),
            )
            .child(
                div()
                    .text_size(typography::text_xs())
                    .text_color(colors::text_muted())
                    .child(format!(
                        "{} ingredientes: {}",
                        formula.ingredients.len(),
                        ingredient_summary
                    )),
            )
            .into_any_element()
    }

    fn render_footer(&self, count: usize) -> impl IntoElement {
        let label = if count == 1 { "1 fórmula".to_string() } else { format!("{count} fórmulas") };

        div()
            .flex()
            .items_center()
            .justify_end()
            .h(sizing::footer_height())
            .px(spacing::lg())
            .border_t_1()
            .border_color(colors::border_subtle())
            .child(div().text_size(typography::text_xs()).text_color(colors::text_muted()).child(label))
    }
}

impl Render for AppRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let formulas = self.state.read(cx).formulas().to_vec();
        let count = formulas.len();

        let content = if formulas.is_empty() {
            self.render_empty()
        } else {
            let cards = formulas
                .iter()
                .enumerate()
                .map(|(index, formula)| self.render_formula_card(index, formula))
                .collect::<Vec<_>>();
            div()
                .id("formula-list")
                .flex()
                .flex_col()
                .flex_1()
                .gap(spacing::sm())
                .p(spacing::lg())
                .overflow_y_scroll()
                .children(cards)
                .into_any_element()
        };

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(cx.theme().background)
            .text_color(colors::text_primary())
            .child(self.render_header())
            .child(content)
            .child(self.render_footer(count))
    }
}
