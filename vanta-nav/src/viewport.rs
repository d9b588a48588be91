/// Widest viewport, in logical pixels, still classified as mobile.
pub const MOBILE_MAX_WIDTH: f32 = 768.0;
/// Widest viewport, in logical pixels, still classified as tablet.
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

/// Coarse device-size bucket derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Tablet => "tablet",
            ViewportClass::Desktop => "desktop",
        }
    }
}

/// Classify a viewport width.
///
/// The ranges partition every `f32`: `(.., 768]` is mobile, `(768, 1024]` is
/// tablet and everything wider is desktop. Widths that cannot describe a
/// real surface (negative, NaN, infinite) classify as desktop, which keeps
/// the full navigation visible and never shows the overlay.
pub fn classify(width_px: f32) -> ViewportClass {
    if !width_px.is_finite() || width_px < 0.0 {
        return ViewportClass::Desktop;
    }

    if width_px <= MOBILE_MAX_WIDTH {
        ViewportClass::Mobile
    } else if width_px <= TABLET_MAX_WIDTH {
        ViewportClass::Tablet
    } else {
        ViewportClass::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewportClass, classify};

    #[test]
    fn given_boundary_widths_when_classified_then_ranges_have_no_gap() {
        assert_eq!(classify(0.0), ViewportClass::Mobile);
        assert_eq!(classify(768.0), ViewportClass::Mobile);
        assert_eq!(classify(768.5), ViewportClass::Tablet);
        assert_eq!(classify(769.0), ViewportClass::Tablet);
        assert_eq!(classify(1024.0), ViewportClass::Tablet);
        assert_eq!(classify(1024.5), ViewportClass::Desktop);
        assert_eq!(classify(1025.0), ViewportClass::Desktop);
        assert_eq!(classify(f32::MAX), ViewportClass::Desktop);
    }

    #[test]
    fn given_malformed_widths_when_classified_then_defaults_to_desktop() {
        for width in [-1.0, -0.5, f32::MIN, f32::NAN, f32::INFINITY] {
            assert_eq!(classify(width), ViewportClass::Desktop, "{width}");
        }
        assert_eq!(classify(f32::NEG_INFINITY), ViewportClass::Desktop);
    }

    #[test]
    fn given_sampled_widths_when_classified_then_class_is_monotonic() {
        let rank = |class: ViewportClass| match class {
            ViewportClass::Mobile => 0,
            ViewportClass::Tablet => 1,
            ViewportClass::Desktop => 2,
        };

        let mut previous = rank(classify(0.0));
        for step in 0..=4000 {
            let current = rank(classify(step as f32 * 0.5));
            assert!(current >= previous);
            previous = current;
        }
    }
}
