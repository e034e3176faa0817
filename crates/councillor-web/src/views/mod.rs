/// Server-rendered HTML for the directory.
///
/// Every view is a pure function from store data to a `String`. All text taken from the
/// results file goes through [`escape`] before it reaches markup.
pub mod detail;
pub mod list;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left alone by `encodeURIComponent`.
const NAME_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 1.5rem; color: #1f2933; }
a { color: inherit; }
.search { width: 100%; padding: 0.6rem; font-size: 1rem; margin-bottom: 1rem; box-sizing: border-box; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.councillor-card { display: block; border: 1px solid #d9e2ec; border-radius: 8px; padding: 1rem; text-decoration: none; }
.councillor-card:hover { border-color: #829ab1; }
.councillor-card h2 { margin: 0 0 0.5rem; font-size: 1.1rem; }
.badge { display: inline-block; background: #f0f4f8; border-radius: 4px; padding: 0.1rem 0.4rem; margin-right: 0.3rem; font-size: 0.85rem; }
.controversy-alert { color: #c62828; font-weight: 600; }
.empty-state, .not-found { color: #627d98; }
.detail-header { border-bottom: 1px solid #d9e2ec; margin-bottom: 1rem; }
.category { border: 1px solid #d9e2ec; border-radius: 8px; margin-bottom: 0.75rem; padding: 0.5rem 1rem; }
.category summary { cursor: pointer; font-weight: 600; }
.result-card { border-top: 1px solid #f0f4f8; padding: 0.5rem 0; }
.result-card h3 { font-size: 1rem; margin: 0.25rem 0; }
.meta span { margin-right: 1rem; font-size: 0.85rem; color: #627d98; }
"#;

/// Minimal HTML escaping for text and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Detail route for a councillor, name encoded as a single path segment.
pub fn councillor_href(name: &str) -> String {
    format!("/councillor/{}", utf8_percent_encode(name, NAME_SEGMENT))
}

/// Only http(s) links are rendered as anchors.
pub fn is_external_link(link: &str) -> bool {
    let lower = link.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Wrap a body fragment in a complete document.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn href_matches_encode_uri_component() {
        assert_eq!(councillor_href("Jane Doe"), "/councillor/Jane%20Doe");
        assert_eq!(councillor_href("O'Neil-Smith"), "/councillor/O'Neil-Smith");
        assert_eq!(councillor_href("A/B?c#d"), "/councillor/A%2FB%3Fc%23d");
        assert_eq!(councillor_href("Zoë"), "/councillor/Zo%C3%AB");
    }

    #[test]
    fn only_http_links_are_external() {
        assert!(is_external_link("https://example.org"));
        assert!(is_external_link("HTTP://example.org"));
        assert!(!is_external_link("javascript:alert(1)"));
        assert!(!is_external_link(""));
    }

    #[test]
    fn page_escapes_title() {
        let html = page("<x>", "<p>body</p>");
        assert!(html.contains("<title>&lt;x&gt;</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
