// Page chrome shared by the form and the overview.

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn layout(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="de">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; }}
.notice {{ padding: .6rem 1rem; border-radius: .3rem; margin-bottom: 1rem; }}
.notice-success {{ background: #d1e7dd; }}
.notice-warning {{ background: #fff3cd; }}
.notice-danger {{ background: #f8d7da; }}
</style>
{head_extra}
</head>
<body>
<nav><a href="/">Bestellformular</a> · <a href="/overview">Übersicht</a></nav>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Fehler",
        "",
        &format!("<h1>Fehler</h1>\n<p>{}</p>", escape(message)),
    )
}
