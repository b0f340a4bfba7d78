use percent_encoding::percent_decode_str;

use crate::theme::Theme;
use crate::toolbar;

/// Placeholder comment in the template that receives the external
/// stylesheet link. Left untouched when no `url` parameter is supplied.
pub const INJECT_MARKER: &str = "<!--injectSpace-->";

/// Apply the four substitutions to the template: stylesheet link (optional),
/// root class tags, and the theme toolbar before `</body>`. Each marker is
/// replaced at its first occurrence only.
pub fn render_preview(template: &str, theme: Theme, stylesheet_url: Option<&str>) -> String {
    let mut html = template.to_string();

    if let Some(raw) = stylesheet_url {
        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        let link = format!("<link rel=\"stylesheet\" href=\"{}\">", escape_html(&decoded));
        html = html.replacen(INJECT_MARKER, &link, 1);
    }

    html = html.replacen(
        "<html",
        &format!("<html class=\"{}\"", theme.class_tags()),
        1,
    );

    let toolbar = toolbar::toolbar_html(theme);
    html = html.replacen("</body>", &format!("{toolbar}</body>"), 1);

    html
}

/// Escape text for use inside an HTML attribute. `&` must be replaced first
/// so entities produced by the later steps are not double-escaped.
pub fn escape_html(unsafe_text: &str) -> String {
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
