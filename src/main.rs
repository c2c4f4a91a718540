use dioxus::prelude::*;
use firmscope::components::App as FirmscopeApp;

const MAIN_CSS: Asset = asset!("/assets/firmscope.css");

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    // Platform-specific launch configuration
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Firmscope")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1100.0, 800.0))
                .with_min_inner_size(LogicalSize::new(700.0, 500.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(feature = "mobile")]
    {
        dioxus::LaunchBuilder::mobile().launch(App);
    }

    #[cfg(feature = "web")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // CSS loading: asset! macro has issues on desktop, use include_str! as workaround
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/firmscope.css")} }
        }

        body { class: "fs-body",
            FirmscopeApp {}
        }
    }
}
