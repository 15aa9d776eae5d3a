use std::fmt::Write;

use crate::models::RequestContext;

const STYLE: &str = "body{background:#111;color:#f2f5fa;font-family:sans-serif;margin:2rem}\
form{margin-bottom:1.5rem}\
input{background:#222;color:#f2f5fa;border:1px solid #283442;padding:.4rem;margin-right:.5rem}\
button{background:#636efa;color:#fff;border:0;padding:.45rem 1rem;cursor:pointer}\
.error{color:#ef553b;margin:1rem 0}\
.chart{margin:1.5rem 0}";

/// Escape text for use inside HTML element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the index page: the form, any error, the prediction slot and the
/// chart fragments in the order they were produced
pub fn render_index(context: &RequestContext) -> String {
    let symbol = escape_html(context.stock_symbol.as_deref().unwrap_or(""));
    let currency = escape_html(context.currency.as_deref().unwrap_or(""));

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Stock Trend</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n<h1>Stock Trend</h1>\n");

    html.push_str("<form method=\"post\" action=\"/\">\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" name=\"stock_symbol\" placeholder=\"Stock symbol (e.g. AAPL)\" value=\"{}\">",
        symbol
    );
    let _ = writeln!(
        html,
        "<input type=\"text\" name=\"currency\" placeholder=\"Currency (e.g. EUR)\" value=\"{}\">",
        currency
    );
    html.push_str("<button type=\"submit\">Show charts</button>\n</form>\n");

    if let Some(error) = &context.error {
        let _ = writeln!(html, "<div class=\"error\">{}</div>", escape_html(error));
    }

    if let Some(prediction) = &context.prediction {
        let _ = writeln!(html, "<div class=\"prediction\">{}</div>", escape_html(prediction));
    }

    // fragments are generated markup, inserted as-is
    for fragment in &context.chart_fragments {
        let _ = writeln!(html, "<div class=\"chart\">{}</div>", fragment);
    }

    html.push_str("</body>\n</html>\n");
    html
}
