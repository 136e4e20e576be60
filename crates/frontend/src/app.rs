use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::load_config_or_default;
use crate::shared::theme::ThemeProvider;
use crate::system::settings::state::provide_settings;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config_or_default());

    let settings = provide_settings();

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    let title = Signal::derive(move || settings.settings.with(|s| s.display_name()));

    view! {
        <ThemeProvider>
            <Shell title=title />
        </ThemeProvider>
    }
}
