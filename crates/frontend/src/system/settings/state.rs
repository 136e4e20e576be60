use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "app-settings-v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeZone {
    #[default]
    #[serde(rename = "UTC")]
    Utc,
    #[serde(rename = "EST")]
    Est,
    #[serde(rename = "PST")]
    Pst,
}

impl TimeZone {
    pub const ALL: [TimeZone; 3] = [TimeZone::Utc, TimeZone::Est, TimeZone::Pst];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeZone::Utc => "UTC",
            TimeZone::Est => "EST",
            TimeZone::Pst => "PST",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tz| tz.as_str() == s)
    }
}

/// Настройки приложения, сохраняемые в localStorage
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // General
    pub site_name: String,
    pub time_zone: TimeZone,

    // Notifications
    pub email_notifications: bool,
    pub push_notifications: bool,

    // Database
    pub database_url: String,
    pub max_connections: u32,
    pub timeout_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            site_name: "Admin Dashboard".to_string(),
            time_zone: TimeZone::Utc,
            email_notifications: true,
            push_notifications: false,
            database_url: String::new(),
            max_connections: 10,
            timeout_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Имя для шапки: пустое имя заменяется значением по умолчанию
    pub fn display_name(&self) -> String {
        let name = self.site_name.trim();
        if name.is_empty() {
            AppSettings::default().site_name
        } else {
            name.to_string()
        }
    }
}

/// Поля формы как их вводит пользователь; числа проверяются при сохранении.
#[derive(Clone, Copy)]
pub struct SettingsForm {
    pub site_name: RwSignal<String>,
    pub time_zone: RwSignal<String>,
    pub email_notifications: RwSignal<bool>,
    pub push_notifications: RwSignal<bool>,
    pub database_url: RwSignal<String>,
    pub max_connections: RwSignal<String>,
    pub timeout_ms: RwSignal<String>,
}

impl SettingsForm {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            site_name: RwSignal::new(settings.site_name.clone()),
            time_zone: RwSignal::new(settings.time_zone.as_str().to_string()),
            email_notifications: RwSignal::new(settings.email_notifications),
            push_notifications: RwSignal::new(settings.push_notifications),
            database_url: RwSignal::new(settings.database_url.clone()),
            max_connections: RwSignal::new(settings.max_connections.to_string()),
            timeout_ms: RwSignal::new(settings.timeout_ms.to_string()),
        }
    }

    pub fn to_settings(&self) -> Result<AppSettings, String> {
        parse_form(
            &self.site_name.get_untracked(),
            &self.time_zone.get_untracked(),
            self.email_notifications.get_untracked(),
            self.push_notifications.get_untracked(),
            &self.database_url.get_untracked(),
            &self.max_connections.get_untracked(),
            &self.timeout_ms.get_untracked(),
        )
    }
}

fn parse_form(
    site_name: &str,
    time_zone: &str,
    email_notifications: bool,
    push_notifications: bool,
    database_url: &str,
    max_connections: &str,
    timeout_ms: &str,
) -> Result<AppSettings, String> {
    let time_zone =
        TimeZone::parse(time_zone).ok_or_else(|| format!("Unknown time zone: {}", time_zone))?;
    let max_connections = max_connections
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| "Max connections must be a positive number".to_string())?;
    let timeout_ms = timeout_ms
        .trim()
        .parse::<u64>()
        .map_err(|_| "Timeout must be a number of milliseconds".to_string())?;

    Ok(AppSettings {
        site_name: site_name.trim().to_string(),
        time_zone,
        email_notifications,
        push_notifications,
        database_url: database_url.trim().to_string(),
        max_connections,
        timeout_ms,
    })
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_settings() -> AppSettings {
    let Some(raw) = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) else {
        return AppSettings::default();
    };
    serde_json::from_str::<AppSettings>(&raw).unwrap_or_else(|e| {
        log::warn!("Ignoring stored settings: {}", e);
        AppSettings::default()
    })
}

pub fn save_settings(settings: &AppSettings) -> Result<(), String> {
    let storage = storage().ok_or_else(|| "localStorage is not available".to_string())?;
    let raw = serde_json::to_string(settings).map_err(|e| e.to_string())?;
    storage
        .set_item(STORAGE_KEY, &raw)
        .map_err(|e| format!("Failed to save settings: {:?}", e))
}

/// Текущие настройки, общие для страницы настроек и шапки
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: RwSignal<AppSettings>,
}

pub fn provide_settings() -> SettingsContext {
    let ctx = SettingsContext {
        settings: RwSignal::new(load_settings()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().expect("SettingsContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert_eq!(s.site_name, "Admin Dashboard");
        assert_eq!(s.time_zone, TimeZone::Utc);
        assert!(s.email_notifications);
        assert!(!s.push_notifications);
        assert_eq!(s.database_url, "");
        assert_eq!(s.max_connections, 10);
        assert_eq!(s.timeout_ms, 5000);
    }

    #[test]
    fn test_json_round_trip_and_partial_document() {
        let s = AppSettings {
            site_name: "Ops".to_string(),
            time_zone: TimeZone::Pst,
            push_notifications: true,
            ..AppSettings::default()
        };
        let raw = serde_json::to_string(&s).unwrap();
        assert!(raw.contains("\"time_zone\":\"PST\""));
        assert_eq!(serde_json::from_str::<AppSettings>(&raw).unwrap(), s);

        let partial: AppSettings = serde_json::from_str(r#"{"site_name":"Ops"}"#).unwrap();
        assert_eq!(partial.site_name, "Ops");
        assert_eq!(partial.timeout_ms, 5000);
    }

    #[test]
    fn test_parse_form() {
        let s = parse_form(" Ops ", "EST", false, true, "", "25", "3000").unwrap();
        assert_eq!(s.site_name, "Ops");
        assert_eq!(s.time_zone, TimeZone::Est);
        assert_eq!(s.max_connections, 25);
        assert_eq!(s.timeout_ms, 3000);

        assert!(parse_form("Ops", "CET", true, false, "", "10", "5000").is_err());
        assert!(parse_form("Ops", "UTC", true, false, "", "0", "5000").is_err());
        assert!(parse_form("Ops", "UTC", true, false, "", "10", "soon").is_err());
    }

    #[test]
    fn test_display_name_falls_back() {
        let blank = AppSettings {
            site_name: "  ".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(blank.display_name(), "Admin Dashboard");
    }
}
