//! Запрос страницы списка пользователей: фильтр + сортировка + диапазон.
//!
//! `UserListQuery` описывает запрос независимо от транспорта. Из него
//! строятся параметры PostgREST (`to_postgrest_params`), и он же умеет
//! выполниться над срезом записей в памяти (`apply`) с той же семантикой.

use super::aggregate::{SortDirection, UserRecord, UserSortField};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Columns matched by the free-text search.
const SEARCH_COLUMNS: [UserSortField; 3] = [
    UserSortField::Name,
    UserSortField::Email,
    UserSortField::Phone,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListQuery {
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub sort_field: UserSortField,
    pub sort_direction: SortDirection,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: String::new(),
            sort_field: UserSortField::CreatedAt,
            sort_direction: SortDirection::Desc,
        }
    }
}

/// Ответ: строки запрошенной страницы и общее число совпавших записей.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<UserRecord>,
    pub total_count: usize,
}

impl UserListQuery {
    pub fn offset(&self) -> usize {
        self.page.max(1).saturating_sub(1) * self.page_size
    }

    /// Zero-based inclusive row range `(from, to)`.
    pub fn range(&self) -> (usize, usize) {
        let from = self.offset();
        (from, from + self.page_size.max(1) - 1)
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Query pairs for a PostgREST `GET /rest/v1/<table>` request, not yet
    /// percent-encoded.
    pub fn to_postgrest_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_string())];

        if self.has_search() {
            let pattern = quote_postgrest_value(&format!("*{}*", self.search));
            let conditions: Vec<String> = SEARCH_COLUMNS
                .iter()
                .map(|field| format!("{}.ilike.{}", field.column(), pattern))
                .collect();
            params.push(("or", format!("({})", conditions.join(","))));
        }

        params.push((
            "order",
            format!("{}.{}", self.sort_field.column(), self.sort_direction.as_str()),
        ));
        let (from, to) = self.range();
        params.push(("offset", from.to_string()));
        params.push(("limit", (to - from + 1).to_string()));
        params
    }

    /// Выполняет запрос над записями в памяти.
    ///
    /// Фильтр: подстрока без учёта регистра в name OR email OR phone.
    /// `total_count` считает все совпадения без учёта пагинации.
    pub fn apply(&self, records: &[UserRecord]) -> UserListResponse {
        let needle = self.search.to_lowercase();
        let mut matched: Vec<&UserRecord> = records
            .iter()
            .filter(|record| {
                needle.is_empty()
                    || SEARCH_COLUMNS
                        .iter()
                        .any(|field| record.field(*field).to_lowercase().contains(&needle))
            })
            .collect();

        matched.sort_by(|a, b| {
            let cmp = compare_by_field(a, b, self.sort_field);
            if self.sort_direction.is_ascending() {
                cmp
            } else {
                cmp.reverse()
            }
        });

        let total_count = matched.len();
        let items = matched
            .into_iter()
            .skip(self.offset())
            .take(self.page_size)
            .cloned()
            .collect();

        UserListResponse { items, total_count }
    }
}

fn compare_by_field(a: &UserRecord, b: &UserRecord, field: UserSortField) -> Ordering {
    match field {
        UserSortField::CreatedAt => {
            match (
                DateTime::parse_from_rfc3339(&a.created_at),
                DateTime::parse_from_rfc3339(&b.created_at),
            ) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => a.created_at.cmp(&b.created_at),
            }
        }
        _ => {
            let (x, y) = (a.field(field), b.field(field));
            x.to_lowercase()
                .cmp(&y.to_lowercase())
                .then_with(|| x.cmp(y))
        }
    }
}

/// Оборачивает значение в кавычки, если в нём есть зарезервированные
/// символы синтаксиса фильтров PostgREST.
fn quote_postgrest_value(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| matches!(c, ',' | '.' | ':' | '(' | ')' | '"' | '\\') || c.is_whitespace());
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Total row count from a `Content-Range` header (`0-9/25`, `*/0`).
///
/// Returns `None` when the total is unknown (`0-9/*`) or the header is
/// malformed.
pub fn parse_content_range(header: &str) -> Option<usize> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str, email: &str, phone: &str, created_at: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn fixture(count: u32) -> Vec<UserRecord> {
        (1..=count)
            .map(|i| {
                record(
                    i,
                    &format!("user {i:02}"),
                    &format!("user{i:02}@example.com"),
                    if i % 5 == 0 { "admin" } else { "user" },
                    &format!("2024-01-{i:02}T09:00:00+00:00"),
                )
            })
            .collect()
    }

    fn query(page: usize, page_size: usize) -> UserListQuery {
        UserListQuery {
            page,
            page_size,
            ..UserListQuery::default()
        }
    }

    #[test]
    fn test_range_is_zero_based_inclusive() {
        assert_eq!(query(1, 10).range(), (0, 9));
        assert_eq!(query(3, 10).range(), (20, 29));
        assert_eq!(query(0, 10).range(), (0, 9));
    }

    #[test]
    fn test_request_window_matches_range() {
        let q = query(3, 7);
        let (from, to) = q.range();
        let params = q.to_postgrest_params();
        assert!(params.contains(&("offset", from.to_string())));
        assert!(params.contains(&("limit", (to - from + 1).to_string())));
        assert_eq!((from, to), (14, 20));
    }

    #[test]
    fn test_rows_never_exceed_page_size() {
        let records = fixture(25);
        for page_size in 1..=30 {
            let pages = (25 + page_size - 1) / page_size;
            for page in 1..=pages + 1 {
                let q = query(page, page_size);
                let response = q.apply(&records);
                let remaining = 25usize.saturating_sub(q.offset());
                assert_eq!(response.items.len(), page_size.min(remaining));
                assert_eq!(response.total_count, 25);
            }
        }
    }

    #[test]
    fn test_search_matches_any_of_three_fields_case_insensitive() {
        let records = vec![
            record(1, "Alice Smith", "alice@example.com", "user", "2024-01-01T00:00:00Z"),
            record(2, "Bob", "BOB@corp.io", "moderator", "2024-01-02T00:00:00Z"),
            record(3, "Carol", "carol@example.com", "ADMIN", "2024-01-03T00:00:00Z"),
        ];

        let mut q = query(1, 10);
        q.search = "SMITH".to_string();
        assert_eq!(q.apply(&records).total_count, 1);

        q.search = "corp".to_string();
        assert_eq!(q.apply(&records).items[0].id, "2");

        q.search = "admin".to_string();
        assert_eq!(q.apply(&records).items[0].id, "3");

        q.search = "example".to_string();
        assert_eq!(q.apply(&records).total_count, 2);
    }

    #[test]
    fn test_unmatched_search_yields_no_rows_and_zero_total() {
        let mut q = query(1, 10);
        q.search = "zzz-no-such-user".to_string();
        let response = q.apply(&fixture(25));
        assert!(response.items.is_empty());
        assert_eq!(response.total_count, 0);
    }

    #[test]
    fn test_total_count_respects_filter_not_paging() {
        let mut q = query(2, 2);
        q.search = "admin".to_string();
        let response = q.apply(&fixture(25));
        // ids 5, 10, 15, 20, 25
        assert_eq!(response.total_count, 5);
        assert_eq!(response.items.len(), 2);
    }

    #[test]
    fn test_sort_direction_reverses_order() {
        let records = vec![
            record(1, "bravo", "b@x.io", "user", "2024-01-02T00:00:00Z"),
            record(2, "alpha", "a@x.io", "user", "2024-01-03T00:00:00Z"),
            record(3, "charlie", "c@x.io", "user", "2024-01-01T00:00:00Z"),
        ];
        let mut q = query(1, 10);
        q.sort_field = UserSortField::Name;
        q.sort_direction = SortDirection::Asc;
        let asc: Vec<String> = q.apply(&records).items.into_iter().map(|r| r.id).collect();
        assert_eq!(asc, ["2", "1", "3"]);

        q.sort_direction = SortDirection::Desc;
        let desc: Vec<String> = q.apply(&records).items.into_iter().map(|r| r.id).collect();
        assert_eq!(desc, ["3", "1", "2"]);
    }

    #[test]
    fn test_created_at_sorts_chronologically_across_offsets() {
        let records = vec![
            record(1, "a", "", "", "2024-01-01T10:00:00+03:00"),
            record(2, "b", "", "", "2024-01-01T08:00:00+00:00"),
        ];
        let mut q = query(1, 10);
        q.sort_direction = SortDirection::Asc;
        // 10:00+03:00 is 07:00 UTC
        assert_eq!(q.apply(&records).items[0].id, "1");
    }

    #[test]
    fn test_postgrest_params_without_search() {
        let params = query(2, 10).to_postgrest_params();
        assert_eq!(
            params,
            vec![
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
                ("offset", "10".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_postgrest_or_filter_over_three_columns() {
        let mut q = query(1, 10);
        q.search = "ann".to_string();
        q.sort_field = UserSortField::Email;
        q.sort_direction = SortDirection::Asc;
        let params = q.to_postgrest_params();
        assert!(params.contains(&(
            "or",
            "(name.ilike.*ann*,email.ilike.*ann*,phone.ilike.*ann*)".to_string()
        )));
        assert!(params.contains(&("order", "email.asc".to_string())));
    }

    #[test]
    fn test_postgrest_value_with_reserved_characters_is_quoted() {
        let mut q = query(1, 10);
        q.search = "a.b,\"c\"".to_string();
        let or = q
            .to_postgrest_params()
            .into_iter()
            .find(|(key, _)| *key == "or")
            .map(|(_, value)| value)
            .unwrap();
        assert_eq!(
            or,
            r#"(name.ilike."*a.b,\"c\"*",email.ilike."*a.b,\"c\"*",phone.ilike."*a.b,\"c\"*")"#
        );
    }

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("0-9/25"), Some(25));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("0-9/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }
}
