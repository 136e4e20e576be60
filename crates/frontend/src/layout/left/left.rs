use super::sidebar::Sidebar;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Левая зона с навигацией; скрывается кнопкой в шапке
#[component]
pub fn Left() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            <Sidebar />
        </aside>
    }
}
