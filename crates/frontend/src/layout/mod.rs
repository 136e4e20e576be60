pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |   Active page    |
/// |   (Left)  |    (Center)      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(
    /// Title shown in the top header
    #[prop(into)]
    title: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader title=title />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left />

                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}
