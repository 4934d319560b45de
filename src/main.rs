#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use aromalab::app::AppRoot;
use aromalab::theme;
use gpui::*;
use gpui_component::Root;

fn main() {
    env_logger::init();

    Application::new().with_assets(gpui_component_assets::Assets).run(|cx: &mut gpui::App| {
        // Initialize gpui-component library
        gpui_component::init(cx);

        {
            let theme = gpui_component::theme::Theme::global_mut(cx);
            theme.font_family = theme::fonts::ui().into();
            theme.mono_font_family = theme::fonts::mono().into();
        }

        let bounds = Bounds::centered(None, size(px(960.0), px(700.0)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("AromaLab".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                // Quit the app when the window is closed
                window.on_window_should_close(cx, |_window, cx| {
                    cx.quit();
                    true
                });

                let app_view = cx.new(|cx| AppRoot::new(window, cx));
                cx.new(|cx| Root::new(app_view, window, cx))
            },
        )
        .unwrap();
    });
}
