//! Dialog helper utilities to reduce boilerplate in dialog creation.

use gpui::*;
use gpui_component::WindowExt as _;
use gpui_component::button::{Button, ButtonVariants as _};

/// Standard "Cancelar" button that just closes the dialog.
pub fn cancel_button(id: impl Into<ElementId>) -> AnyElement {
    Button::new(id)
        .label("Cancelar")
        .on_click(|_, window, cx| {
            window.close_dialog(cx);
        })
        .into_any_element()
}

/// Standard primary action button for dialogs.
pub fn primary_button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&mut Window, &mut App) + 'static,
) -> AnyElement {
    Button::new(id)
        .primary()
        .label(label)
        .on_click(move |_, window, cx| {
            on_click(window, cx);
        })
        .into_any_element()
}
