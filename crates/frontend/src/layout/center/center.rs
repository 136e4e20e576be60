use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_user::ui::list::UsersListPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::system::settings::SettingsPage;
use leptos::prelude::*;

/// Содержимое центральной зоны для страницы
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Users => view! { <UsersListPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

/// Центральная зона: перерисовывается только при смене страницы
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let active = Memo::new(move |_| ctx.active.get());

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || render_page(active.get())}
        </div>
    }
}
