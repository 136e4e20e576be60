//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title and the theme toggle.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader(
    /// Application name shown next to the toggle
    #[prop(into)]
    title: Signal<String>,
) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || title.get()}</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />
            </div>
        </div>
    }
}
