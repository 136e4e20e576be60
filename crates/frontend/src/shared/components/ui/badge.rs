use leptos::prelude::*;

/// Визуальный стиль бейджа
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant, `Neutral` when omitted
    #[prop(optional, into)]
    variant: MaybeProp<BadgeVariant>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant.get().unwrap_or_default().css_class(), additional_class())>
            {children()}
        </span>
    }
}
