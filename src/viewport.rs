//! Viewport classification for the responsive header.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Full,
}

/// Widths at or below this render the collapsible presentation.
pub const COMPACT_MAX_WIDTH: f64 = 600.0;

pub fn classify(width: f64) -> ViewportClass {
    if width <= COMPACT_MAX_WIDTH {
        ViewportClass::Compact
    } else {
        ViewportClass::Full
    }
}

/// Computed per render pass, never cached across renders.
pub fn current() -> ViewportClass {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map_or(ViewportClass::Full, classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify(320.0), ViewportClass::Compact);
        assert_eq!(classify(600.0), ViewportClass::Compact);
        assert_eq!(classify(601.0), ViewportClass::Full);
        assert_eq!(classify(1920.0), ViewportClass::Full);
    }
}
