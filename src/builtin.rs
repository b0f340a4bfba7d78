pub const TOOLBAR_CSS: &str = include_str!("toolbar.css");

/// Client-side theme toggle. `__THEME_MAP_JSON__` and `__INITIAL_THEME__`
/// are filled in by `toolbar::toolbar_html`.
pub const TOOLBAR_JS: &str = r#"const toolbar = document.getElementById('theme-toolbar');
const toggle = document.getElementById('theme-toggle');
const themeClassMap = JSON.parse('__THEME_MAP_JSON__');
const themeTypes = Object.keys(themeClassMap);
let currentThemeIdx = themeTypes.indexOf('__INITIAL_THEME__');
function setTheme(idx) {
  const theme = themeTypes[idx];
  document.documentElement.className = themeClassMap[theme];
  toolbar.className = 'theme-toolbar ' + theme;
  toggle.className = 'theme-toggle ' + theme;
  const nextIdx = (idx + 1) % themeTypes.length;
  toggle.textContent = themeTypes[nextIdx].charAt(0).toUpperCase() + themeTypes[nextIdx].slice(1) + ' Mode';
}
setTheme(currentThemeIdx);
toggle.addEventListener('click', (e) => {
  e.stopPropagation();
  currentThemeIdx = (currentThemeIdx + 1) % themeTypes.length;
  setTheme(currentThemeIdx);
});"#;
