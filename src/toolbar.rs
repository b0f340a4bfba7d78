use maud::{Markup, PreEscaped, html};

use crate::builtin;
use crate::theme::{self, Theme};

/// Build the slide-out theme toolbar fragment: markup, inline styles, and
/// the toggle script with the theme map embedded as JSON. The fragment is
/// inserted before `</body>` by the renderer.
pub fn toolbar_html(initial: Theme) -> String {
    let script = builtin::TOOLBAR_JS
        .replace("__THEME_MAP_JSON__", &theme::class_map_json())
        .replace("__INITIAL_THEME__", initial.name());

    let markup: Markup = html! {
        div id="theme-toolbar" class={ "theme-toolbar " (initial.name()) } {
            div class="toolbar-slide" {
                span class="toolbar-arrow" { "\u{2039}" }
                div class="toolbar-content" {
                    button id="theme-toggle" class="theme-toggle" { "Light Mode" }
                    span class="theme-help" {
                        "Nothing changing? The theme might not "
                        br;
                        "support both modes!"
                    }
                }
                div class="toolbar-footer" {
                    span class="theme-disclaimer" {
                        "Previewed themes are provided by their authors; no affiliation or endorsement is implied."
                    }
                }
            }
        }
        style { (PreEscaped(builtin::TOOLBAR_CSS)) }
        script type="module" { (PreEscaped(script)) }
    };
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_map(fragment: &str) -> serde_json::Value {
        let start = fragment.find("JSON.parse('").unwrap() + "JSON.parse('".len();
        let end = fragment[start..].find("')").unwrap() + start;
        serde_json::from_str(&fragment[start..end]).unwrap()
    }

    #[test]
    fn embedded_map_matches_server_map() {
        let fragment = toolbar_html(Theme::Dark);
        let map = embedded_map(&fragment);
        let server: serde_json::Value = serde_json::from_str(&theme::class_map_json()).unwrap();
        assert_eq!(map, server);
        let keys: Vec<_> = map.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["light", "ash", "dark", "onyx"]);
    }

    #[test]
    fn initial_theme_lands_in_markup_and_script() {
        let fragment = toolbar_html(Theme::Onyx);
        assert!(fragment.contains("class=\"theme-toolbar onyx\""));
        assert!(fragment.contains("themeTypes.indexOf('onyx')"));
        assert!(fragment.contains("e.stopPropagation()"));
    }
}
