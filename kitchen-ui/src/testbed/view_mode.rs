//! Viewport and colour mode for the preview

/// Preview width presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Tablet,
    Desktop,
    #[default]
    Full,
}

impl Viewport {
    pub const ALL: &'static [Viewport] = &[
        Viewport::Mobile,
        Viewport::Tablet,
        Viewport::Desktop,
        Viewport::Full,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile (320px)",
            Self::Tablet => "Tablet (768px)",
            Self::Desktop => "Desktop (1024px)",
            Self::Full => "Full Width",
        }
    }

    /// CSS width value
    pub fn width(self) -> &'static str {
        match self {
            Self::Mobile => "320px",
            Self::Tablet => "768px",
            Self::Desktop => "1024px",
            Self::Full => "100%",
        }
    }

    pub fn from_width(width: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.width() == width)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the button that switches away from this mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }

    /// Inline colours for the harness root, so the mode shows without a
    /// stylesheet.
    pub fn style(self) -> &'static str {
        match self {
            Self::Light => "background-color: #f3f4f6; color: #111827;",
            Self::Dark => "background-color: #111827; color: #f9fafb;",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light bg-gray-100 text-gray-900",
            Self::Dark => "dark bg-gray-900 text-white",
        }
    }
}

/// Session-local presentation state, independent of the props.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewMode {
    pub viewport: Viewport,
    pub color_mode: ColorMode,
}

impl ViewMode {
    /// Inline style for the bordered preview region at the chosen width.
    pub fn preview_style(&self) -> String {
        format!(
            "border: 1px dashed #6b7280; border-radius: 0.5rem; padding: 1.5rem; \
             margin: 0 auto; width: 100%; max-width: {};",
            self.viewport.width()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_full_width_light() {
        let mode = ViewMode::default();
        assert_eq!(mode.viewport.width(), "100%");
        assert_eq!(mode.color_mode, ColorMode::Light);
        assert_eq!(mode.color_mode.toggle_label(), "Dark Mode");
    }

    #[test]
    fn viewport_round_trips_through_width() {
        for viewport in Viewport::ALL {
            assert_eq!(Viewport::from_width(viewport.width()), Some(*viewport));
        }
        assert_eq!(Viewport::from_width("42px"), None);
    }

    #[test]
    fn preview_is_bordered_at_viewport_width() {
        let mode = ViewMode {
            viewport: Viewport::Tablet,
            color_mode: ColorMode::Dark,
        };
        let style = mode.preview_style();
        assert!(style.contains("border: 1px dashed"));
        assert!(style.ends_with("max-width: 768px;"));
    }

    #[test]
    fn color_modes_set_distinct_colours() {
        assert_ne!(ColorMode::Light.style(), ColorMode::Dark.style());
        assert!(ColorMode::Dark.style().contains("background-color: #111827"));
        assert!(ColorMode::Dark.class().starts_with("dark"));
    }
}
