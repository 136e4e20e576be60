use contracts::domain::a001_user::{parse_content_range, UserListQuery, UserListResponse, UserRecord};
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use super::demo_data::demo_users;
use crate::shared::config::AppConfig;

/// Ошибка загрузки списка. Для UI это один вид ошибки: "fetch failed".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Тело ошибки PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

/// Откуда берутся записи пользователей
#[derive(Debug, Clone, PartialEq)]
pub enum UserSource {
    /// PostgREST endpoint of the hosted store
    Remote {
        base_url: String,
        anon_key: String,
        table: String,
    },
    /// Built-in records, used when no store URL is configured
    Demo(Vec<UserRecord>),
}

impl UserSource {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.is_demo() {
            log::warn!("Backing store URL is not configured, serving demo users");
            return UserSource::Demo(demo_users());
        }
        UserSource::Remote {
            base_url: config.backing_store.url.trim_end_matches('/').to_string(),
            anon_key: config.backing_store.anon_key.clone(),
            table: config.backing_store.table.clone(),
        }
    }
}

/// `{base}/rest/v1/{table}?select=*&order=...&offset=...&limit=...`
pub fn users_url(base_url: &str, table: &str, query: &UserListQuery) -> String {
    let params: Vec<String> = query
        .to_postgrest_params()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect();
    format!(
        "{}/rest/v1/{}?{}",
        base_url,
        urlencoding::encode(table),
        params.join("&")
    )
}

/// Fetch one page of users together with the total number of matches
pub async fn fetch_users(
    source: &UserSource,
    query: &UserListQuery,
) -> Result<UserListResponse, FetchError> {
    match source {
        UserSource::Demo(records) => Ok(query.apply(records)),
        UserSource::Remote {
            base_url,
            anon_key,
            table,
        } => fetch_remote(base_url, anon_key, table, query).await,
    }
}

async fn fetch_remote(
    base_url: &str,
    anon_key: &str,
    table: &str,
    query: &UserListQuery,
) -> Result<UserListResponse, FetchError> {
    let url = users_url(base_url, table, query);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("apikey", anon_key)
        .header("Authorization", &format!("Bearer {}", anon_key))
        .header("Accept", "application/json")
        .header("Prefer", "count=exact")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status,
            message: error_message(status, &body),
        });
    }

    let content_range = response.headers().get("content-range");
    let items = response
        .json::<Vec<UserRecord>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    let total_count = match content_range.as_deref().and_then(parse_content_range) {
        Some(total) => total,
        None => {
            log::warn!(
                "No exact total in Content-Range ({:?}), falling back to loaded rows",
                content_range
            );
            query.offset() + items.len()
        }
    };

    Ok(UserListResponse { items, total_count })
}

/// PostgREST error `message`, or `HTTP <status>` when the body is not one
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<PostgrestError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| format!("HTTP {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;

    #[test]
    fn test_users_url_encodes_filter() {
        let query = UserListQuery {
            search: "ann lee".to_string(),
            ..UserListQuery::default()
        };
        let url = users_url("https://demo.supabase.co", "user-data", &query);
        assert!(url.starts_with("https://demo.supabase.co/rest/v1/user-data?select=%2A&or="));
        assert!(url.contains("order=created_at.desc"));
        assert!(url.ends_with("&offset=0&limit=10"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_error_message_prefers_postgrest_body() {
        assert_eq!(
            error_message(400, r#"{"code":"42703","message":"column user-data.phon does not exist","details":null,"hint":null}"#),
            "column user-data.phon does not exist"
        );
        assert_eq!(error_message(502, "<html>Bad gateway</html>"), "HTTP 502");
    }

    #[test]
    fn test_status_error_displays_message_only() {
        let err = FetchError::Status {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[test]
    fn test_source_from_config() {
        let demo = parse_config(
            "[backing_store]\nurl = \"\"\nanon_key = \"\"\ntable = \"user-data\"\n[users]\npage_size = 10\n",
        )
        .unwrap();
        assert!(matches!(UserSource::from_config(&demo), UserSource::Demo(ref rows) if rows.len() == 25));

        let remote = parse_config(
            "[backing_store]\nurl = \"https://x.supabase.co/\"\nanon_key = \"k\"\ntable = \"user-data\"\n[users]\npage_size = 10\n",
        )
        .unwrap();
        assert_eq!(
            UserSource::from_config(&remote),
            UserSource::Remote {
                base_url: "https://x.supabase.co".to_string(),
                anon_key: "k".to_string(),
                table: "user-data".to_string(),
            }
        );
    }
}
