use serde_json::{Map, Value};

/// The fixed set of preview themes, in toggle-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Ash,
    Dark,
    Onyx,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Ash, Theme::Dark, Theme::Onyx];

    /// Resolve the `theme` query parameter. Anything that is not an exact
    /// key falls back to `dark`.
    pub fn from_query(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            Some("ash") => Theme::Ash,
            Some("dark") => Theme::Dark,
            Some("onyx") => Theme::Onyx,
            _ => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Ash => "ash",
            Theme::Dark => "dark",
            Theme::Onyx => "onyx",
        }
    }

    /// CSS class tokens applied to the document root for this theme.
    pub fn class_tags(self) -> &'static str {
        match self {
            Theme::Light => {
                "platform-web theme-light images-light density-cozy font-size-16 \
                 has-webkit-scrollbar full-motion visual-refresh mana-toggle-inputs"
            }
            Theme::Ash => {
                "platform-web theme-dark images-dark density-cozy font-size-16 \
                 has-webkit-scrollbar full-motion visual-refresh mana-toggle-inputs"
            }
            Theme::Dark => {
                "platform-web theme-dark theme-darker images-dark density-cozy font-size-16 \
                 has-webkit-scrollbar mouse-mode full-motion app-focused visual-refresh \
                 mana-toggle-inputs"
            }
            Theme::Onyx => {
                "platform-web theme-dark theme-midnight images-dark density-cozy font-size-16 \
                 has-webkit-scrollbar full-motion visual-refresh mana-toggle-inputs"
            }
        }
    }
}

/// The theme map as a JSON object string, keys in `Theme::ALL` order. The
/// client-side toggle cycles `Object.keys` of this object, so key order is
/// part of the contract.
pub fn class_map_json() -> String {
    let mut map = Map::new();
    for theme in Theme::ALL {
        map.insert(
            theme.name().to_string(),
            Value::String(theme.class_tags().to_string()),
        );
    }
    Value::Object(map).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_missing_fall_back_to_dark() {
        assert_eq!(Theme::from_query(None), Theme::Dark);
        assert_eq!(Theme::from_query(Some("purple")), Theme::Dark);
        assert_eq!(Theme::from_query(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_query(Some("")), Theme::Dark);
    }

    #[test]
    fn known_names_resolve() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_query(Some(theme.name())), theme);
        }
    }

    #[test]
    fn class_map_json_keeps_cycle_order() {
        let value: serde_json::Value = serde_json::from_str(&class_map_json()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["light", "ash", "dark", "onyx"]);
        for theme in Theme::ALL {
            assert_eq!(value[theme.name()], theme.class_tags());
        }
    }
}
