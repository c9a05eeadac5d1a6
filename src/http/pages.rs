use crate::data::model::TradeDataset;

// ---------------------------------------------------------------------------
// Page assembly: a shared layout plus the three page kinds
// ---------------------------------------------------------------------------

pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #0b111a;
  --panel: #111a26;
  --border: rgba(255, 255, 255, 0.08);
  --text: #e6edf7;
  --text-dim: #7f8ba0;
  --accent: #5cb0ff;
  --negative: #f0635c;
  --radius: 10px;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: "Inter", "SF Pro Text", system-ui, sans-serif;
}
main { max-width: 960px; margin: 0 auto; padding: 24px; }
h1 { font-size: 22px; margin: 8px 0 4px; }
h2 { font-size: 15px; margin: 0 0 4px; }
.subtitle { color: var(--text-dim); margin-top: 0; }
form {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 16px 18px;
  margin: 0 0 14px;
}
form p { color: var(--text-dim); font-size: 13px; margin: 0 0 10px; }
label {
  display: inline-block;
  margin: 0 14px 10px 0;
  font-size: 13px;
  color: var(--text-dim);
}
select {
  display: block;
  margin-top: 4px;
  min-width: 220px;
  padding: 6px 8px;
  background: var(--bg);
  color: var(--text);
  border: 1px solid var(--border);
  border-radius: 6px;
}
button {
  display: block;
  padding: 7px 16px;
  background: var(--accent);
  color: #04121f;
  font-weight: 600;
  border: none;
  border-radius: 6px;
  cursor: pointer;
}
.chart { background: #fff; border-radius: var(--radius); padding: 8px; }
.chart svg { display: block; width: 100%; height: auto; }
.error {
  background: var(--panel);
  border: 1px solid var(--border);
  border-left: 3px solid var(--negative);
  border-radius: var(--radius);
  padding: 14px 16px;
}
a { color: var(--accent); }
"#;

/// Wrap a page body in the shared HTML document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{css}</style>\n</head>\n<body>\n<main>\n\
         {body}\n</main>\n</body>\n</html>\n",
        title = escape_html(title),
        css = GLOBAL_CSS,
        body = body,
    )
}

/// The landing page: one form per chart, each with two dimension selectors.
pub fn index_page(dataset: &TradeDataset) -> String {
    let mut body = String::new();
    body.push_str("<h1>Trade indicator dashboard</h1>\n");
    body.push_str(&format!(
        "<p class=\"subtitle\">{} observations · {} countries · {} indicators</p>\n",
        dataset.len(),
        dataset.countries.len(),
        dataset.indicators.len(),
    ));

    body.push_str(&form_card(
        "/cnt_trade_plot",
        "Country trend",
        "Trade value over the years for one country and indicator.",
        &[
            select_box("country", "Country", &dataset.countries),
            select_box("indicator", "Indicator", &dataset.indicators),
        ],
        "Plot trend",
    ));

    body.push_str(&form_card(
        "/decade_plot",
        "Decade summary",
        "Mean trade value per decade for one country and indicator.",
        &[
            select_box("country_decade", "Country", &dataset.countries),
            select_box("indicator_decade", "Indicator", &dataset.indicators),
        ],
        "Plot decades",
    ));

    body.push_str(&form_card(
        "/region_year_plot",
        "Region comparison",
        "Mean trade value across a region, year by year.",
        &[
            select_box("region_year", "Region", &dataset.regions),
            select_box("indicator_year", "Indicator", &dataset.indicators),
        ],
        "Plot region",
    ));

    body.push_str(&form_card(
        "/income_year_plot",
        "Income group comparison",
        "Mean trade value across an income group, year by year.",
        &[
            select_box("income_year", "Income group", &dataset.income_groups),
            select_box("indicator_year", "Indicator", &dataset.indicators),
        ],
        "Plot income group",
    ));

    layout("Trade indicator dashboard", &body)
}

/// A rendered chart with a link back to the selection page.
pub fn chart_page(title: &str, svg: &str) -> String {
    let body = format!(
        "<h1>{title}</h1>\n<div class=\"chart\">{svg}</div>\n\
         <p><a href=\"/\">&larr; Back to selection</a></p>\n",
        title = escape_html(title),
        svg = svg,
    );
    layout(title, &body)
}

/// Generic error page with a static message.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Nothing to plot</h1>\n<p class=\"error\">{}</p>\n\
         <p><a href=\"/\">&larr; Back to selection</a></p>\n",
        escape_html(message),
    );
    layout("Nothing to plot", &body)
}

// -- Building blocks --

fn form_card(action: &str, title: &str, blurb: &str, selects: &[String], submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n<h2>{title}</h2>\n<p>{blurb}</p>\n\
         {selects}<button type=\"submit\">{submit}</button>\n</form>\n",
        action = action,
        title = escape_html(title),
        blurb = escape_html(blurb),
        selects = selects.concat(),
        submit = escape_html(submit),
    )
}

fn select_box(name: &str, label: &str, options: &[String]) -> String {
    let mut out = format!(
        "<label>{label}\n<select name=\"{name}\">\n",
        label = escape_html(label),
        name = name,
    );
    for option in options {
        let escaped = escape_html(option);
        out.push_str(&format!("<option value=\"{escaped}\">{escaped}</option>\n"));
    }
    out.push_str("</select>\n</label>\n");
    out
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TradeRecord;

    fn dataset() -> TradeDataset {
        TradeDataset::from_records(vec![TradeRecord {
            country: "Trinidad & Tobago".to_string(),
            indicator: "Trade share".to_string(),
            region: "Latin America".to_string(),
            income_group: "High income".to_string(),
            year: 2000,
            value: Some(40.0),
        }])
    }

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">&"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;"
        );
    }

    #[test]
    fn index_page_lists_all_four_forms() {
        let html = index_page(&dataset());
        for action in [
            "/cnt_trade_plot",
            "/decade_plot",
            "/region_year_plot",
            "/income_year_plot",
        ] {
            assert!(html.contains(action), "missing form action {action}");
        }
    }

    #[test]
    fn index_page_escapes_option_values() {
        let html = index_page(&dataset());
        assert!(html.contains("Trinidad &amp; Tobago"));
        assert!(!html.contains("Trinidad & Tobago"));
    }

    #[test]
    fn error_page_carries_the_message() {
        let html = error_page("No data available for the selected country and indicator.");
        assert!(html.contains("No data available"));
        assert!(html.contains("class=\"error\""));
    }

    #[test]
    fn chart_page_embeds_svg_unescaped() {
        let html = chart_page("A chart", "<svg><circle/></svg>");
        assert!(html.contains("<svg><circle/></svg>"));
    }
}
