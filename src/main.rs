use dealsheet::ui::app::App;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Dealsheet")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(App);
}
