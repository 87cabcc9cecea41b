use crate::error::{ReportError, Result};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

pub const REPORT_TITLE: &str = "Employee Performance Report";

/// Prefix of the `src` attribute carrying the embedded chart.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 24px; color: #222; }
  .stat { font-size: 16px; }
</style>
</head>
<body>
<h2>__TITLE__</h2>
<p><b>Email:</b> __CONTACT__</p>
<p class="stat">__LABEL__: __VALUE__</p>
<img src="__DATA_URI__" width="500" alt="__LABEL_ALT__">
</body>
</html>
"#;

/// Write the self-contained HTML report to `report_path`.
///
/// The chart at `chart_image_path` is read and base64-encoded before the
/// report file is opened, so an unreadable chart leaves no report behind.
pub fn write_report(
    report_path: &Path,
    contact_email: &str,
    frequency_label: &str,
    frequency_value: usize,
    chart_image_path: &Path,
) -> Result<()> {
    let png = fs::read(chart_image_path).map_err(|e| ReportError::io(chart_image_path, e))?;
    let html = render_report(contact_email, frequency_label, frequency_value, &png);

    fs::write(report_path, html).map_err(|e| ReportError::io(report_path, e))
}

/// Build the report document around already-encoded PNG bytes.
pub fn render_report(
    contact_email: &str,
    frequency_label: &str,
    frequency_value: usize,
    png: &[u8],
) -> String {
    let data_uri = format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(png));
    let contact = escape_html(contact_email);
    let label = escape_html(frequency_label);
    let value = frequency_value.to_string();

    fill_template(
        TEMPLATE,
        &[
            ("TITLE", REPORT_TITLE),
            ("CONTACT", contact.as_str()),
            ("LABEL", label.as_str()),
            ("VALUE", value.as_str()),
            ("LABEL_ALT", "Department distribution chart"),
            ("DATA_URI", data_uri.as_str()),
        ],
    )
}

/// Substitute `__KEY__` placeholders in a single pass over `template`.
/// Inserted values are never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("__") {
        let after = &rest[start + 2..];
        let hit = after.find("__").and_then(|end| {
            let key = &after[..end];
            values.iter().find(|(k, _)| *k == key)
        });

        match hit {
            Some((key, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &after[key.len() + 2..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
