use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Страницы приложения. Ключ страницы попадает в URL как `?active=<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    Dashboard,
    #[default]
    Users,
    Settings,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Users, Page::Settings];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Users => "users",
            Page::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Page named by `?active=...`; missing or unknown keys open the users page.
pub fn page_from_query(search: &str) -> Page {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .and_then(|key| Page::from_key(key))
        .unwrap_or_default()
}

pub fn query_for_page(page: Page) -> String {
    let query_string = serde_qs::to_string(&HashMap::from([(
        "active".to_string(),
        page.key().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query_string)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Восстанавливает активную страницу из URL и держит URL в синхроне с ней.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(page_from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_page(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: '{}'", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?active=settings"), Page::Settings);
        assert_eq!(page_from_query("active=dashboard"), Page::Dashboard);
        assert_eq!(page_from_query(""), Page::Users);
        assert_eq!(page_from_query("?active=reports"), Page::Users);
    }

    #[test]
    fn test_query_round_trip() {
        for page in Page::ALL {
            assert_eq!(page_from_query(&query_for_page(page)), page);
        }
        assert_eq!(query_for_page(Page::Users), "?active=users");
    }
}
