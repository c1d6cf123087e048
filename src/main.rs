use coming_soon::components::Background;
use coming_soon::utils::{get_initial_theme, ThemeMode};
use coming_soon::views::Home;
use dioxus::prelude::*;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const ICON_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(get_initial_theme);
    use_context_provider(|| theme);

    let tokens = theme().tokens();
    let theme_vars = format!(
        "--background: {}; --foreground: {}; --accent: {}; --icon: {}; --icon-hover: {};",
        tokens.background, tokens.foreground, tokens.accent, tokens.icon, tokens.icon_hover
    );

    rsx! {
        div {
            class: if theme() == ThemeMode::Dark { "app dark" } else { "app light" },
            style: theme_vars,
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: ICON_CSS }
            Background {}
            Home {}
        }
    }
}
