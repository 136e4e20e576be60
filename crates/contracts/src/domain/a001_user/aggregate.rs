use serde::{Deserialize, Deserializer, Serialize};

/// Строка таблицы `user-data` во внешнем хранилище.
///
/// `phone` хранит классификацию записи (роль: "admin", "moderator", ...),
/// несмотря на имя колонки. Набор значений не ограничен.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

impl UserRecord {
    /// Значение поля, по которому идёт сортировка/поиск
    pub fn field(&self, field: UserSortField) -> &str {
        match field {
            UserSortField::Name => &self.name,
            UserSortField::Email => &self.email,
            UserSortField::Phone => &self.phone,
            UserSortField::CreatedAt => &self.created_at,
        }
    }
}

/// The store may hand out either integer or uuid primary keys.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        UInt(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::UInt(n) => n.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sortable columns of the users listing, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSortField {
    Name,
    Email,
    Phone,
    CreatedAt,
}

impl UserSortField {
    pub const ALL: [UserSortField; 4] = [
        UserSortField::Name,
        UserSortField::Email,
        UserSortField::Phone,
        UserSortField::CreatedAt,
    ];

    /// Имя колонки в хранилище
    pub fn column(&self) -> &'static str {
        match self {
            UserSortField::Name => "name",
            UserSortField::Email => "email",
            UserSortField::Phone => "phone",
            UserSortField::CreatedAt => "created_at",
        }
    }

    /// Заголовок колонки в таблице и в CSV
    pub fn label(&self) -> &'static str {
        match self {
            UserSortField::Name => "Name",
            UserSortField::Email => "Email",
            UserSortField::Phone => "Phone",
            UserSortField::CreatedAt => "Created",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }

    /// Суффикс для PostgREST `order=<column>.<suffix>`
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}
