//! Hook загрузки списка пользователей.
//!
//! Каждое изменение запроса запускает новую загрузку. Ответы на устаревшие
//! запросы отбрасываются по номеру запроса: в сигналы попадает только
//! результат последнего.

use super::api::{fetch_users, FetchError, UserSource};
use crate::shared::config::AppConfig;
use contracts::domain::a001_user::{UserListQuery, UserListResponse, UserRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Copy)]
pub struct UseUsers {
    pub users: Signal<Vec<UserRecord>>,
    pub total_count: Signal<usize>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    /// Повторить текущий запрос
    pub refetch: Callback<()>,
}

impl UseUsers {
    pub fn status(&self) -> LoadStatus {
        load_status(self.loading.get(), self.error.get())
    }
}

/// Первая загрузка стартует сразу: до ответа показываем спиннер, а не
/// пустую таблицу
const INITIAL_LOADING: bool = true;

fn load_status(loading: bool, error: Option<String>) -> LoadStatus {
    match error {
        Some(message) => LoadStatus::Failed(message),
        None if loading => LoadStatus::Loading,
        None => LoadStatus::Ready,
    }
}

/// Rows, total and error message to publish for a finished request.
/// A failed request leaves nothing on screen but the error.
fn settle(result: Result<UserListResponse, FetchError>) -> (Vec<UserRecord>, usize, Option<String>) {
    match result {
        Ok(response) => (response.items, response.total_count, None),
        Err(e) => (Vec::new(), 0, Some(e.to_string())),
    }
}

/// Номера запросов: у каждого запуска свой, актуален только последний.
#[derive(Clone, Copy)]
pub struct RequestSeq {
    latest: StoredValue<u64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self {
            latest: StoredValue::new(0),
        }
    }

    /// Registers a new request and returns its number.
    pub fn issue(&self) -> u64 {
        let id = self.latest.get_value() + 1;
        self.latest.set_value(id);
        id
    }

    /// `false` once a newer request was issued or the owner was disposed.
    pub fn is_current(&self, id: u64) -> bool {
        self.latest.try_get_value() == Some(id)
    }
}

impl Default for RequestSeq {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_users(query: Signal<UserListQuery>) -> UseUsers {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let source = StoredValue::new(UserSource::from_config(&config));

    let users = RwSignal::new(Vec::<UserRecord>::new());
    let total_count = RwSignal::new(0usize);
    let loading = RwSignal::new(INITIAL_LOADING);
    let error = RwSignal::new(None::<String>);
    let requests = RequestSeq::new();

    let load = move |query: UserListQuery| {
        let request_id = requests.issue();
        loading.set(true);
        error.set(None);

        let source = source.get_value();
        spawn_local(async move {
            let result = fetch_users(&source, &query).await;

            // Страница закрыта или пришёл более новый запрос
            if !requests.is_current(request_id) {
                log::debug!("Dropping stale users response #{}", request_id);
                return;
            }

            if let Err(e) = &result {
                log::error!("Failed to fetch users: {}", e);
            }
            let (items, total, message) = settle(result);
            users.set(items);
            total_count.set(total);
            error.set(message);
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        load(query.get());
    });

    let refetch = Callback::new(move |_: ()| load(query.get_untracked()));

    UseUsers {
        users: users.into(),
        total_count: total_count.into(),
        loading: loading.into(),
        error: error.into(),
        refetch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_hook_starts_in_loading_state() {
        assert_eq!(load_status(INITIAL_LOADING, None), LoadStatus::Loading);
        assert_eq!(load_status(false, None), LoadStatus::Ready);
        assert_eq!(
            load_status(true, Some("HTTP 500".to_string())),
            LoadStatus::Failed("HTTP 500".to_string())
        );
    }

    #[test]
    fn test_older_response_is_dropped_after_newer_request() {
        let owner = Owner::new();
        owner.with(|| {
            let requests = RequestSeq::new();
            let first = requests.issue();
            let second = requests.issue();
            assert!(second > first);

            // #2 settles first, then #1 arrives late
            assert!(requests.is_current(second));
            assert!(!requests.is_current(first));
        });
    }

    #[test]
    fn test_refetch_makes_in_flight_response_stale() {
        let owner = Owner::new();
        owner.with(|| {
            let requests = RequestSeq::new();
            let in_flight = requests.issue();
            assert!(requests.is_current(in_flight));

            // refetch re-issues the same query under a new number
            let refetched = requests.issue();
            assert!(!requests.is_current(in_flight));
            assert!(requests.is_current(refetched));
        });
    }

    #[test]
    fn test_disposed_owner_makes_every_response_stale() {
        let owner = Owner::new();
        let (requests, id) = owner.with(|| {
            let requests = RequestSeq::new();
            let id = requests.issue();
            (requests, id)
        });
        owner.cleanup();
        assert!(!requests.is_current(id));
    }

    #[test]
    fn test_failed_request_clears_rows() {
        let (items, total, message) = settle(Err(FetchError::Status {
            status: 404,
            message: "relation \"public.user-data\" does not exist".to_string(),
        }));
        assert!(items.is_empty());
        assert_eq!(total, 0);
        assert_eq!(
            message.as_deref(),
            Some("relation \"public.user-data\" does not exist")
        );
    }

    #[test]
    fn test_successful_request_publishes_page() {
        let response = UserListResponse {
            items: super::super::demo_data::demo_users().into_iter().take(3).collect(),
            total_count: 25,
        };
        let (items, total, message) = settle(Ok(response));
        assert_eq!(items.len(), 3);
        assert_eq!(total, 25);
        assert!(message.is_none());
    }
}
