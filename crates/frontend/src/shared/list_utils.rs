/// Утилиты для списков: строка поиска и индикаторы сортировки
use crate::shared::icons::icon;
use contracts::domain::a001_user::SortDirection;
use leptos::prelude::*;

/// Строка поиска без debounce: каждое нажатие сразу уходит в `on_change`
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Индикатор сортировки для заголовка: только у активной колонки
pub fn get_sort_indicator<F: PartialEq>(current_field: F, field: F, direction: SortDirection) -> &'static str {
    if current_field != field {
        return "";
    }
    if direction.is_ascending() {
        "▲"
    } else {
        "▼"
    }
}

pub fn get_sort_class<F: PartialEq>(current_field: F, field: F) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}
