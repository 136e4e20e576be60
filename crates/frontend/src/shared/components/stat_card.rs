use crate::shared::icons::icon;
use leptos::prelude::*;

/// Direction of the change shown next to the value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    fn css_class(self) -> &'static str {
        match self {
            Trend::Positive => "stat-card__change stat-card__change--up",
            Trend::Negative => "stat-card__change stat-card__change--down",
            Trend::Neutral => "stat-card__change stat-card__change--flat",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    value: &'static str,
    /// Change relative to the previous period, e.g. "+2.1%"
    change: &'static str,
    trend: Trend,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    <span class=trend.css_class()>{change}</span>
                </div>
            </div>
        </div>
    }
}
