//! HTML document shell

/// Comment in the shell body that framework templates replace with mount markup
pub const TEMPLATE_MARKER: &str = "<!-- template -->";

/// Build the HTML document shell with the given page title
pub fn html_shell(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta http-equiv="X-UA-Compatible" content="IE=edge" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{}</title>
</head>
<body>
  {}
</body>
</html>
"#,
        escape_text(title),
        TEMPLATE_MARKER
    )
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
