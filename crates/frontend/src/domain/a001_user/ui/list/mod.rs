mod state;

use leptos::prelude::*;
use thaw::*;

use super::table::UsersTable;
use crate::domain::a001_user::hooks::{use_users, LoadStatus};
use crate::shared::components::pagination_controls::{total_pages, PaginationControls};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_user::UserSortField;
use state::create_state;

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! { <UsersList /> }
}

#[component]
fn UsersList() -> impl IntoView {
    let page_size = use_context::<AppConfig>()
        .expect("AppConfig context not found")
        .users
        .page_size;

    let state = create_state();
    let query = Signal::derive(move || state.with(|s| s.query(page_size)));
    let users = use_users(query);

    let pages = Signal::derive(move || total_pages(users.total_count.get(), page_size));
    // Memo: смена Loading/Ready не пересоздаёт таблицу
    let failure = Memo::new(move |_| match users.status() {
        LoadStatus::Failed(message) => Some(message),
        LoadStatus::Loading | LoadStatus::Ready => None,
    });

    let on_search = Callback::new(move |value: String| {
        state.update(|s| s.set_search(value));
    });

    let on_sort = Callback::new(move |field: UserSortField| {
        state.update(|s| s.toggle_sort(field));
    });

    let on_page_change = Callback::new(move |page: usize| {
        let total = pages.get_untracked();
        state.update(|s| s.go_to_page(page, total));
    });

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>
                        {move || users.total_count.get().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| users.refetch.run(())
                        disabled=users.loading
                    >
                        {icon("refresh")}
                        {move || if users.loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=on_search
                        placeholder="Search users by name or email..."
                    />
                </div>

                {move || match failure.get() {
                    Some(message) => view! {
                        <div class="alert alert--error">
                            <div class="alert__title">"Error loading users"</div>
                            <div class="alert__message">{message}</div>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <UsersTable
                            users=users.users
                            loading=users.loading
                            sort_field=Signal::derive(move || state.with(|s| s.sort_field))
                            sort_direction=Signal::derive(move || state.with(|s| s.sort_direction))
                            on_sort=on_sort
                        />
                        <Show when=move || { users.total_count.get() > 0 }>
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page))
                                total_pages=pages
                                total_count=users.total_count
                                page_size=Signal::derive(move || page_size)
                                on_page_change=on_page_change
                            />
                        </Show>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
