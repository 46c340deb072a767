use contracts::dashboards::d405_query_builder::QueryResponse;
use leptos::prelude::*;
use thaw::*;

/// SQL the API generated for an ad-hoc query, with its bound parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedSql {
    pub sql: String,
    pub params: Vec<serde_json::Value>,
}

impl From<&QueryResponse> for ExecutedSql {
    fn from(response: &QueryResponse) -> Self {
        Self {
            sql: response.query_sql.clone(),
            params: response.params.clone(),
        }
    }
}

#[component]
pub fn SqlViewer(sql: ExecutedSql) -> impl IntoView {
    let sql_text = sql.sql.clone();
    let highlighted = highlight_sql(&sql.sql);
    let params = sql.params;

    view! {
        <div class="sql-viewer-container">
            <div class="sql-content">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3 class="sql-section-title">"SQL Executado"</h3>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let plain_text_sql = html_to_plain_text(&highlight_sql(&sql_text));
                                let _ = window.navigator().clipboard().write_text(&plain_text_sql);
                            }
                        }
                    >
                        "Copiar"
                    </Button>
                </Flex>

                <div class="sql-query-section">
                    <div class="sql-query" inner_html=highlighted></div>
                </div>

                {(!params.is_empty()).then(|| {
                    view! {
                        <div class="sql-params-section">
                            <h3 class="sql-section-title">"Parâmetros"</h3>
                            <div class="sql-params">
                                {params
                                    .iter()
                                    .enumerate()
                                    .map(|(i, param)| {
                                        let text = match param {
                                            serde_json::Value::String(s) => s.clone(),
                                            other => other.to_string(),
                                        };
                                        view! {
                                            <div class="sql-param">
                                                <span class="param-index">{format!("${}", i + 1)}</span>
                                                <span class="param-value">{text}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP BY", "ORDER BY", "LEFT JOIN", "INNER JOIN", "JOIN", "ON",
    "AND", "OR", "AS", "IN", "LIKE", "DISTINCT", "LIMIT", "ASC", "DESC",
];

const FUNCTIONS: &[&str] = &["SUM", "COUNT", "AVG", "MIN", "MAX", "COALESCE"];

/// Escaped, line-broken SQL with keyword and function spans
fn highlight_sql(sql: &str) -> String {
    let mut result = format_sql_structure(&html_escape(sql));

    for (words, class) in [(KEYWORDS, "sql-keyword"), (FUNCTIONS, "sql-function")] {
        for word in words {
            let highlighted = format!("<span class=\"{}\">{}</span>", class, word);
            result = result.replace(&format!(" {} ", word), &format!(" {} ", highlighted));
            result = result.replace(&format!(" {}(", word), &format!(" {}(", highlighted));
            result = result.replace(&format!("({}(", word), &format!("({}(", highlighted));
            result = result.replace(&format!("<br/>{}", word), &format!("<br/>{}", highlighted));
            result = result.replace(
                &format!("&nbsp;&nbsp;{}(", word),
                &format!("&nbsp;&nbsp;{}(", highlighted),
            );
            if result.starts_with(word) {
                result = format!("{}{}", highlighted, &result[word.len()..]);
            }
        }
    }

    result
}

/// One clause per line, select and group lists indented
fn format_sql_structure(sql: &str) -> String {
    let mut result = sql.trim().to_string();

    result = result.replace(" FROM ", "<br/>FROM<br/>&nbsp;&nbsp;");
    result = result.replace(" WHERE ", "<br/>WHERE<br/>&nbsp;&nbsp;");
    result = result.replace(" GROUP BY ", "<br/>GROUP BY<br/>&nbsp;&nbsp;");
    result = result.replace(" ORDER BY ", "<br/>ORDER BY<br/>&nbsp;&nbsp;");
    result = result.replace(" LIMIT ", "<br/>LIMIT ");

    if let Some(rest) = result.strip_prefix("SELECT ") {
        result = format!("SELECT<br/>&nbsp;&nbsp;{}", rest);
    }

    result = result.replace(", ", ",<br/>&nbsp;&nbsp;");
    result = result.replace(" AND ", "<br/>&nbsp;&nbsp;AND ");

    result
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Formatted SQL back to plain text, line breaks preserved
fn html_to_plain_text(html: &str) -> String {
    let result = html
        .replace("<br/>", "\n")
        .replace("&nbsp;", " ");

    let mut clean = String::new();
    let mut in_tag = false;
    for ch in result.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => clean.push(ch),
            _ => {}
        }
    }

    clean
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
