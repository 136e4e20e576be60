//! Обзорный дашборд: статичные показатели и быстрые действия

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::stat_card::{StatCard, Trend};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;

struct Stat {
    label: &'static str,
    icon: &'static str,
    value: &'static str,
    change: &'static str,
    trend: Trend,
}

const STATS: [Stat; 4] = [
    Stat { label: "Total Users", icon: "users", value: "25", change: "+2.1%", trend: Trend::Positive },
    Stat { label: "Active Users", icon: "user-check", value: "21", change: "+5.4%", trend: Trend::Positive },
    Stat { label: "Inactive Users", icon: "user-x", value: "4", change: "-1.2%", trend: Trend::Negative },
    Stat { label: "Admins", icon: "crown", value: "3", change: "0%", trend: Trend::Neutral },
];

/// (title, description, target page)
const QUICK_ACTIONS: [(&str, &str, Option<Page>); 3] = [
    ("Manage Users", "View and manage user accounts", Some(Page::Users)),
    ("System Settings", "Configure application settings", Some(Page::Settings)),
    ("View Reports", "Access detailed analytics", None),
];

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <span class="page__subtitle">"Welcome to your admin dashboard"</span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    {STATS
                        .iter()
                        .map(|s| view! {
                            <StatCard
                                label=s.label
                                icon_name=s.icon
                                value=s.value
                                change=s.change
                                trend=s.trend
                            />
                        })
                        .collect_view()}
                </div>

                <div class="quick-actions">
                    <h2 class="quick-actions__title">"Quick Actions"</h2>
                    <div class="quick-actions__grid">
                        {QUICK_ACTIONS
                            .into_iter()
                            .map(|(title, description, target)| view! {
                                <button
                                    class="quick-actions__item"
                                    on:click=move |_| {
                                        if let Some(page) = target {
                                            ctx.navigate(page);
                                        }
                                    }
                                >
                                    <h3 class="quick-actions__item-title">{title}</h3>
                                    <p class="quick-actions__item-text">{description}</p>
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
