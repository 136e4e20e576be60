//! a001 User: запись таблицы пользователей во внешнем хранилище.
//!
//! Только чтение: создание, изменение и удаление записей происходят вне
//! этого приложения.

pub mod aggregate;
pub mod query;

pub use aggregate::{SortDirection, UserRecord, UserSortField};
pub use query::{parse_content_range, UserListQuery, UserListResponse};
