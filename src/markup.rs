//! Row Markup
//!
//! String rendering of the todo row fragment, used as `innerHTML` of the
//! custom element. Title text is escaped before it is embedded.

use crate::models::TodoItem;

/// Class names of the row layout, shared with the Leptos row component
pub mod classes {
    pub const LIST: &str = "list-group list-group-horizontal rounded-0 mb-2";
    pub const CHECK_CELL: &str =
        "list-group-item d-flex align-items-center ps-0 pe-3 py-1 rounded-0 border-0 bg-transparent";
    pub const CHECK: &str = "form-check";
    pub const INPUT: &str = "form-check-input me-0";
    pub const LABEL_CELL: &str =
        "list-group-item px-3 py-1 d-flex align-items-center flex-grow-1 border-0 bg-transparent";
    pub const LABEL: &str = "lead fw-normal mb-0 bg-body-tertiary w-100 ms-n2 ps-2 py-1 rounded";
}

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the two-cell row for an item
///
/// Output depends only on `item`, so repeated renders of the same state
/// produce identical markup.
pub fn render_fragment(item: &TodoItem) -> String {
    let title = escape_html(&item.title);
    let checked = if item.checked { " checked" } else { "" };

    format!(
        concat!(
            r#"<ul class="{list}">"#,
            r#"<li class="{check_cell}">"#,
            r#"<div class="{check}">"#,
            r#"<input class="{input}" type="checkbox"{checked} aria-label="{title}" />"#,
            r#"</div>"#,
            r#"</li>"#,
            r#"<li class="{label_cell}">"#,
            r#"<p class="{label}">{title}</p>"#,
            r#"</li>"#,
            r#"</ul>"#,
        ),
        list = classes::LIST,
        check_cell = classes::CHECK_CELL,
        check = classes::CHECK,
        input = classes::INPUT,
        checked = checked,
        title = title,
        label_cell = classes::LABEL_CELL,
        label = classes::LABEL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        // No double escaping of the entities produced for other characters
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_checked_row() {
        let html = render_fragment(&TodoItem::new("Buy milk", true));
        assert!(html.contains(r#"type="checkbox" checked aria-label="Buy milk""#));
        assert!(html.contains(r#"py-1 rounded">Buy milk</p>"#));
    }

    #[test]
    fn test_unchecked_row() {
        let html = render_fragment(&TodoItem::new("Buy milk", false));
        assert!(html.contains(r#"type="checkbox" aria-label="Buy milk""#));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn test_empty_row() {
        let html = render_fragment(&TodoItem::default());
        assert!(!html.contains(" checked"));
        assert!(html.contains(r#"py-1 rounded"></p>"#));
    }

    #[test]
    fn test_structure() {
        let html = render_fragment(&TodoItem::new("x", false));
        assert!(html.starts_with(r#"<ul class="list-group list-group-horizontal rounded-0 mb-2">"#));
        assert!(html.ends_with("</ul>"));
        assert_eq!(html.matches("<li ").count(), 2);
        assert_eq!(html.matches("<input ").count(), 1);
        assert_eq!(html.matches("<p ").count(), 1);
    }

    #[test]
    fn test_title_markup_is_escaped() {
        let html = render_fragment(&TodoItem::new("<script>alert(1)</script>", false));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));

        let html = render_fragment(&TodoItem::new(r#"" onclick="x"#, false));
        assert!(!html.contains(r#"" onclick="#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let item = TodoItem::new("Same", true);
        assert_eq!(render_fragment(&item), render_fragment(&item));
    }
}
