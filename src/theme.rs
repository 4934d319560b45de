// Design token system for AromaLab
// gpui-component's theme drives the widgets themselves; these tokens cover
// layout metrics and the handful of colors the custom chrome needs.

// =============================================================================
// Colors
// =============================================================================

pub mod colors {
    use gpui::{Hsla, hsla};

    pub fn text_primary() -> Hsla {
        hsla(0.0, 0.0, 0.92, 1.0)
    }
    pub fn text_secondary() -> Hsla {
        hsla(0.0, 0.0, 0.72, 1.0)
    }
    pub fn text_muted() -> Hsla {
        hsla(0.0, 0.0, 0.52, 1.0)
    }

    pub fn accent() -> Hsla {
        hsla(270.0 / 360.0, 0.55, 0.68, 1.0)
    }
    pub fn status_error() -> Hsla {
        hsla(0.0, 0.72, 0.62, 1.0)
    }
    pub fn status_warning() -> Hsla {
        hsla(38.0 / 360.0, 0.85, 0.60, 1.0)
    }
    pub fn status_ok() -> Hsla {
        hsla(140.0 / 360.0, 0.50, 0.55, 1.0)
    }

    pub fn bg_surface() -> Hsla {
        hsla(0.0, 0.0, 0.14, 1.0)
    }
    pub fn bg_surface_hover() -> Hsla {
        hsla(0.0, 0.0, 0.18, 1.0)
    }
    pub fn border_subtle() -> Hsla {
        hsla(0.0, 0.0, 0.24, 1.0)
    }
}

// =============================================================================
// Spacing
// =============================================================================

pub mod spacing {
    use gpui::{Pixels, px};

    pub fn xs() -> Pixels {
        px(4.0)
    }
    pub fn sm() -> Pixels {
        px(8.0)
    }
    pub fn md() -> Pixels {
        px(12.0)
    }
    pub fn lg() -> Pixels {
        px(16.0)
    }
}

// =============================================================================
// Sizing
// =============================================================================

pub mod sizing {
    use gpui::{Pixels, px};

    pub fn header_height() -> Pixels {
        px(44.0)
    }
    pub fn footer_height() -> Pixels {
        px(24.0)
    }
    pub fn icon_sm() -> Pixels {
        px(14.0)
    }
    pub fn status_dot() -> Pixels {
        px(8.0)
    }
}

// =============================================================================
// Typography
// =============================================================================

pub mod typography {
    use gpui::{Pixels, px};

    pub fn text_xs() -> Pixels {
        px(10.0)
    }
    pub fn text_sm() -> Pixels {
        px(12.0)
    }
    pub fn text_lg() -> Pixels {
        px(16.0)
    }
}

// =============================================================================
// Fonts
// =============================================================================

pub mod fonts {
    pub fn ui() -> &'static str {
        "Inter"
    }
    pub fn mono() -> &'static str {
        "JetBrains Mono"
    }
}

// =============================================================================
// Borders
// =============================================================================

pub mod borders {
    use gpui::{Pixels, px};

    pub fn radius_sm() -> Pixels {
        px(3.0)
    }
    pub fn radius_md() -> Pixels {
        px(6.0)
    }
}
