use crate::shared::icons::icon;
use leptos::prelude::*;

/// Maximum number of numbered page buttons rendered at once.
const PAGE_WINDOW: usize = 5;

/// Clamps a 1-based page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// `ceil(total_items / page_size)`; zero when there is nothing to show.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// "Showing 11–20 of 25"
pub fn pagination_summary(current_page: usize, total_items: usize, page_size: usize) -> String {
    if total_items == 0 || page_size == 0 {
        return "Showing 0–0 of 0".to_string();
    }
    let page = clamp_page(current_page, total_pages(total_items, page_size));
    let from = (page - 1) * page_size + 1;
    let to = (page * page_size).min(total_items);
    format!("Showing {}–{} of {}", from, to, total_items)
}

/// Numbered pages to render: up to `PAGE_WINDOW` pages centred on the
/// current one. Always contains at least page 1.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let total = total_pages.max(1);
    let current = clamp_page(current_page, total);
    let half = PAGE_WINDOW / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + PAGE_WINDOW - 1).min(total);
    if end + 1 - start < PAGE_WINDOW {
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    }
    (start..=end).collect()
}

/// PaginationControls component - first/prev/numbered/next/last + summary
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes, always called with a clamped page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go = move |page: usize| {
        let target = clamp_page(page, total_pages.get_untracked());
        if target != current_page.get_untracked() {
            on_page_change.run(target);
        }
    };

    let at_start = move || current_page.get() <= 1;
    let at_end = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || pagination_summary(current_page.get(), total_count.get(), page_size.get())}
            </span>
            <div class="pagination-buttons">
                <button
                    class="pagination-btn"
                    on:click=move |_| go(1)
                    disabled=at_start
                    title="First page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                    disabled=at_start
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination-btn pagination-btn--page"
                                    class:pagination-btn--active={page == current}
                                    on:click=move |_| go(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked() + 1)
                    disabled=at_end
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| go(total_pages.get_untracked())
                    disabled=at_end
                    title="Last page"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_middle_page() {
        assert_eq!(pagination_summary(2, 25, 10), "Showing 11–20 of 25");
    }

    #[test]
    fn test_summary_last_partial_page() {
        assert_eq!(pagination_summary(3, 25, 10), "Showing 21–25 of 25");
        assert_eq!(pagination_summary(1, 3, 10), "Showing 1–3 of 3");
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(pagination_summary(1, 0, 10), "Showing 0–0 of 0");
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(2, 1), 1);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 0), vec![1]);
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    }
}
