//! Shared page chrome: head, navigation, flash messages.

use super::escape::escape_html;

const STYLE: &str = "
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
nav a { margin-right: 1rem; }
label { display: block; margin-top: 0.75rem; }
.flash { padding: 0.5rem 0.75rem; margin: 0.5rem 0; border-radius: 4px; }
.flash-error { background: #fde8e8; color: #9b1c1c; }
.flash-info { background: #e8f0fd; color: #1c3d9b; }
pre.command { background: #1e1e1e; color: #f0f0f0; padding: 1rem; white-space: pre-wrap; word-break: break-all; }
";

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashCategory {
    Error,
    Info,
}

impl FlashCategory {
    fn as_str(&self) -> &'static str {
        match self {
            FlashCategory::Error => "error",
            FlashCategory::Info => "info",
        }
    }
}

/// A one-shot message shown at the top of the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }
}

/// Wrap page content in the common document.
pub fn render(title: &str, flashes: &[Flash], content: &str) -> String {
    let flashes: String = flashes
        .iter()
        .map(|f| {
            format!(
                "<div class=\"flash flash-{}\" role=\"alert\">{}</div>\n",
                f.category.as_str(),
                escape_html(&f.message)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Conference User Management</title>
<style>{STYLE}</style>
</head>
<body>
<nav>
<a href="/">Home</a>
<a href="/create">Create Users</a>
<a href="/remove">Remove Users</a>
<a href="/about">About</a>
</nav>
<main>
{flashes}{content}
</main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}
