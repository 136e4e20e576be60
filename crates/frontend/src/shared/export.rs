/// Экспорт загруженных строк таблицы в CSV и скачивание файла браузером
use chrono::{DateTime, SecondsFormat, Utc};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait для типов, которые могут быть экспортированы в CSV
pub trait CsvExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Преобразует объект в массив значений для CSV (уже отформатированных)
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV document: an unquoted header line, then one line per item
/// with every field wrapped in double quotes.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join(","));
    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(|cell| quote_csv_cell(cell)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Always quoted; embedded quotes are doubled.
fn quote_csv_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// `users_2024-01-05T10:00:00.000Z.csv`
pub fn csv_filename(prefix: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}_{}.csv",
        prefix,
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Экспортирует список данных в CSV файл и инициирует скачивание
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let csv_content = build_csv(data);
    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)?;

    log::info!("Exported {} rows to {}", data.len(), filename);
    Ok(())
}

/// Создает Blob объект с CSV данными
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    // Добавляем в DOM, кликаем и удаляем
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Row(&'static str, &'static str);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Email"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_header_plus_quoted_rows() {
        let csv = build_csv(&[Row("Ann Lee", "ann@x.io"), Row("Bob", "bob@x.io")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name,Email",
                "\"Ann Lee\",\"ann@x.io\"",
                "\"Bob\",\"bob@x.io\"",
            ]
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_commas_stay_inside_quotes_and_quotes_are_doubled() {
        let csv = build_csv(&[Row("Lee, Ann", "say \"hi\"")]);
        assert_eq!(csv.lines().nth(1), Some("\"Lee, Ann\",\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_empty_input_is_header_only() {
        assert_eq!(build_csv::<Row>(&[]), "Name,Email");
    }

    #[test]
    fn test_filename_embeds_iso_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        assert_eq!(csv_filename("users", now), "users_2024-01-05T10:00:00.000Z.csv");
    }
}
