//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Email"
//!     sort_field=UserSortField::Email
//!     current_sort_field=Signal::derive(move || state.with(|s| s.sort_field))
//!     sort_direction=Signal::derive(move || state.with(|s| s.sort_direction))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::a001_user::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Заголовок колонки: клик вызывает `on_sort(sort_field)`, индикатор ▲/▼
/// виден только у активной колонки.
#[component]
pub fn SortableHeaderCell<F>(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    sort_field: F,

    /// Текущее поле сортировки из state
    #[prop(into)]
    current_sort_field: Signal<F>,

    /// Направление сортировки из state
    #[prop(into)]
    sort_direction: Signal<SortDirection>,

    /// Callback при клике на заголовок
    on_sort: Callback<F>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView
where
    F: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                on:click=move |_| on_sort.run(sort_field)
            >
                <span>{label}</span>
                <span class=move || get_sort_class(current_sort_field.get(), sort_field)>
                    {move || get_sort_indicator(current_sort_field.get(), sort_field, sort_direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
