//! HTML renderer.
//!
//! Paints highlighted segments into a `<pre>` block. Text is always escaped;
//! classification only selects class names from the [`Theme`].

use crate::theme::Theme;
use rwa_highlight::{first_active, highlight, StyledSegment};

/// `id` of the first active span, for scroll-into-view.
pub const ACTIVE_ANCHOR_ID: &str = "rwa-active";

/// Render segments as a `<pre>` element.
pub fn render(segments: &[StyledSegment], theme: &Theme) -> String {
    let anchor = first_active(segments);
    let mut out = String::new();

    out.push_str("<pre");
    push_class_attr(&mut out, &theme.container);
    out.push('>');

    for (i, segment) in segments.iter().enumerate() {
        render_segment(segment, theme, anchor == Some(i), &mut out);
    }

    out.push_str("</pre>");
    out
}

/// Highlight `source` and render it in one step.
pub fn render_source<S: AsRef<str>>(source: &str, active: &[S], theme: &Theme) -> String {
    render(&highlight(source, active), theme)
}

fn render_segment(segment: &StyledSegment, theme: &Theme, is_anchor: bool, out: &mut String) {
    let mut class = theme.class_for(segment.kind).to_string();
    if segment.active && !theme.active.is_empty() {
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str(&theme.active);
    }

    if class.is_empty() && !segment.active {
        out.push_str(&escape_html(&segment.text));
        return;
    }

    out.push_str("<span");
    if is_anchor {
        out.push_str(&format!(" id=\"{ACTIVE_ANCHOR_ID}\""));
    }
    push_class_attr(out, &class);
    if segment.active {
        out.push_str(" data-active=\"true\"");
    }
    out.push('>');
    out.push_str(&escape_html(&segment.text));
    out.push_str("</span>");
}

fn push_class_attr(out: &mut String, class: &str) {
    if !class.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape_html(class)));
    }
}

/// Escape text for element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
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
