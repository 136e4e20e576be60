use crate::shared::components::pagination_controls::clamp_page;
use contracts::domain::a001_user::{SortDirection, UserListQuery, UserSortField};
use leptos::prelude::*;

/// Состояние страницы списка: всё, из чего строится запрос к хранилищу.
/// Размер страницы берётся из конфигурации.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersListState {
    /// 1-based
    pub page: usize,
    pub search: String,
    pub sort_field: UserSortField,
    pub sort_direction: SortDirection,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            sort_field: UserSortField::CreatedAt,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl UsersListState {
    /// Клик по активной колонке меняет направление, по другой колонке
    /// выбирает её по возрастанию. Страница не сбрасывается.
    pub fn toggle_sort(&mut self, field: UserSortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    pub fn query(&self, page_size: usize) -> UserListQuery {
        UserListQuery {
            page: self.page,
            page_size,
            search: self.search.clone(),
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::pagination_controls::total_pages;
    use contracts::domain::a001_user::UserRecord;

    fn users() -> Vec<UserRecord> {
        [("1", "anna"), ("2", "boris"), ("3", "clara")]
            .iter()
            .map(|(id, name)| UserRecord {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@example.com", name),
                phone: "user".to_string(),
                created_at: format!("2024-03-0{}T12:00:00+00:00", id),
            })
            .collect()
    }

    fn names(state: &UsersListState, records: &[UserRecord]) -> Vec<String> {
        state
            .query(10)
            .apply(records)
            .items
            .into_iter()
            .map(|u| u.name)
            .collect()
    }

    #[test]
    fn test_default_state_is_newest_first() {
        let state = UsersListState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.sort_field, UserSortField::CreatedAt);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(names(&state, &users()), vec!["clara", "boris", "anna"]);
    }

    #[test]
    fn test_toggle_active_column_reverses_order() {
        let records = users();
        let mut state = UsersListState::default();
        state.toggle_sort(UserSortField::Name);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert_eq!(names(&state, &records), vec!["anna", "boris", "clara"]);

        state.toggle_sort(UserSortField::Name);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(names(&state, &records), vec!["clara", "boris", "anna"]);
    }

    #[test]
    fn test_new_column_starts_ascending_and_keeps_page() {
        let mut state = UsersListState {
            page: 2,
            sort_direction: SortDirection::Asc,
            ..UsersListState::default()
        };
        state.toggle_sort(UserSortField::CreatedAt);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        state.toggle_sort(UserSortField::Email);
        assert_eq!(state.sort_field, UserSortField::Email);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = UsersListState {
            page: 3,
            ..UsersListState::default()
        };
        state.set_search("boris".to_string());
        assert_eq!(state.page, 1);
        let query = state.query(10);
        assert_eq!(query.search, "boris");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = UsersListState::default();
        state.go_to_page(7, 3);
        assert_eq!(state.page, 3);
        state.go_to_page(0, 3);
        assert_eq!(state.page, 1);
        state.go_to_page(4, 0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_unmatched_search_hides_pagination() {
        let mut state = UsersListState::default();
        state.set_search("nobody-matches-this".to_string());
        let response = state.query(10).apply(&users());
        assert!(response.items.is_empty());
        assert_eq!(response.total_count, 0);
        assert_eq!(total_pages(response.total_count, 10), 0);
    }
}
