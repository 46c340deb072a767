/// CSV export of typed lists, downloaded through a temporary anchor
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// One CSV cell
#[derive(Debug, Clone, PartialEq)]
pub enum CsvField {
    /// Always quoted, inner quotes doubled
    Text(String),
    /// Numbers and dates, written as is
    Plain(String),
}

impl CsvField {
    fn render(&self) -> String {
        match self {
            CsvField::Text(s) => format!("\"{}\"", s.replace('"', "\"\"")),
            CsvField::Plain(s) => s.clone(),
        }
    }
}

/// Types that can be exported as CSV rows
pub trait CsvExportable {
    /// Column names of the header line
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<CsvField>;
}

/// CSV text: header line, then one line per item, comma separated
pub fn to_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join(","));
    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(CsvField::render).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Builds the CSV and starts the browser download
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nenhum dado para exportar".to_string());
    }

    let blob = create_csv_blob(&to_csv(data))?;
    download_blob(&blob, filename)?;

    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

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
        .set_property("visibility", "hidden")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

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

    struct Item {
        name: &'static str,
        qty: u32,
    }

    impl CsvExportable for Item {
        fn headers() -> Vec<&'static str> {
            vec!["name", "qty"]
        }

        fn to_csv_row(&self) -> Vec<CsvField> {
            vec![
                CsvField::Text(self.name.to_string()),
                CsvField::Plain(self.qty.to_string()),
            ]
        }
    }

    #[test]
    fn test_text_fields_are_always_quoted() {
        let csv = to_csv(&[Item { name: "plain", qty: 1 }, Item { name: "a, b", qty: 22 }]);
        assert_eq!(csv, "name,qty\n\"plain\",1\n\"a, b\",22");
    }

    #[test]
    fn test_inner_quotes_are_doubled() {
        let csv = to_csv(&[Item { name: "Bar \"do Zé\"", qty: 3 }]);
        assert_eq!(csv, "name,qty\n\"Bar \"\"do Zé\"\"\",3");
    }

    #[test]
    fn test_empty_list_is_header_only() {
        let csv = to_csv::<Item>(&[]);
        assert_eq!(csv, "name,qty");
        assert!(!csv.starts_with('\u{FEFF}'));
    }
}
