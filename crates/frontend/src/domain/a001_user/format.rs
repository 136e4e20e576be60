//! Отображение полей записи: имя, бейдж классификации, дата, строка CSV

use crate::shared::components::ui::BadgeVariant;
use crate::shared::date_utils::format_date_short;
use crate::shared::export::CsvExportable;
use contracts::domain::a001_user::{UserRecord, UserSortField};

/// Title-cases a name: every space-separated word lower-cased, then its
/// first letter upper-cased. Spacing is preserved as is.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split(' ')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Стиль бейджа для значения классификации. Неизвестные значения получают
/// нейтральный стиль.
pub fn classification_badge(value: &str) -> BadgeVariant {
    match value {
        "admin" => BadgeVariant::Error,
        "moderator" => BadgeVariant::Warning,
        _ => BadgeVariant::Neutral,
    }
}

impl CsvExportable for UserRecord {
    fn headers() -> Vec<&'static str> {
        UserSortField::ALL.iter().map(|f| f.label()).collect()
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            normalize_name(&self.name),
            self.email.clone(),
            self.phone.clone(),
            format_date_short(&self.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    fn user(id: &str, name: &str, email: &str, phone: &str, created_at: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("jOHN doe"), "John Doe");
        assert_eq!(normalize_name("ANNA"), "Anna");
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("mary  ann"), "Mary  Ann");
        assert_eq!(normalize_name("élodie ÉTIENNE"), "Élodie Étienne");
    }

    #[test]
    fn test_classification_badge() {
        assert_eq!(classification_badge("admin"), BadgeVariant::Error);
        assert_eq!(classification_badge("moderator"), BadgeVariant::Warning);
        assert_eq!(classification_badge("user"), BadgeVariant::Neutral);
        assert_eq!(classification_badge("Admin"), BadgeVariant::Neutral);
        assert_eq!(classification_badge("+1 555 0100"), BadgeVariant::Neutral);
    }

    #[test]
    fn test_csv_of_two_loaded_records() {
        let users = vec![
            user("1", "jOHN doe", "john@example.com", "admin", "2024-01-05T10:00:00+00:00"),
            user("2", "mary ann", "mary@example.com", "user", "2024-02-10T08:30:00+00:00"),
        ];
        let csv = build_csv(&users);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name,Email,Phone,Created");
        assert_eq!(
            lines[1],
            "\"John Doe\",\"john@example.com\",\"admin\",\"Jan 5, 2024\""
        );
        assert_eq!(
            lines[2],
            "\"Mary Ann\",\"mary@example.com\",\"user\",\"Feb 10, 2024\""
        );
    }
}
