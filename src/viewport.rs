//! Viewport classification.
//!
//! Maps the current content width to a coarse device class. The class is
//! derived, never stored: callers classify the width they have right now.

/// Widths at or below this many logical pixels are treated as mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Coarse device-width bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Overlay sidebar with a visible toggle.
    Mobile,
    /// Inline sidebar, toggle hidden.
    Desktop,
}

impl ViewportClass {
    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }
}

/// Classifies a viewport width.
pub fn classify(width_px: f32) -> ViewportClass {
    if width_px <= MOBILE_BREAKPOINT {
        ViewportClass::Mobile
    } else {
        ViewportClass::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(classify(768.0), ViewportClass::Mobile);
        assert_eq!(classify(769.0), ViewportClass::Desktop);
        assert_eq!(classify(768.5), ViewportClass::Desktop);
    }

    #[test]
    fn test_monotonic() {
        let mut seen_desktop = false;
        for width in (0..2000).step_by(7) {
            let class = classify(width as f32);
            if seen_desktop {
                assert_eq!(class, ViewportClass::Desktop, "width {width} went back to mobile");
            }
            seen_desktop |= class == ViewportClass::Desktop;
            assert_eq!(class.is_mobile(), width as f32 <= MOBILE_BREAKPOINT);
        }
    }
}
