// File: crates/scope-core/src/theme.rs
// Summary: Light/Dark theming for scope rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub frame: skia::Color,
    pub tick_label: skia::Color,
    /// Default trace color when a plot call does not specify one.
    pub accent: skia::Color,
    pub annotation: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 16, 16, 19),
            grid: skia::Color::from_argb(255, 42, 42, 48),
            frame: skia::Color::from_argb(255, 170, 170, 182),
            tick_label: skia::Color::from_argb(255, 225, 225, 236),
            accent: skia::Color::from_argb(255, 64, 160, 255),
            annotation: skia::Color::from_argb(255, 255, 214, 90),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 228, 228, 234),
            frame: skia::Color::from_argb(255, 70, 70, 82),
            tick_label: skia::Color::from_argb(255, 24, 24, 34),
            accent: skia::Color::from_argb(255, 32, 120, 200),
            annotation: skia::Color::from_argb(255, 168, 96, 12),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
