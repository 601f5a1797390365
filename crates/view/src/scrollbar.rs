//! Scroll-axis scale state for the external scrollbar widget.
//!
//! The widget speaks a fixed logical range (`0..=WIDGET_RANGE`) regardless
//! of how many lines the document has, so each axis carries a scale factor
//! translating internal positions into widget ticks and back. The factor is
//! recomputed on every rebuild; a stale factor would leave the widget's
//! indicator drifting away from the true position.
//!
//! An axis is either `Hidden` (the content fits in one page — nothing to
//! scroll, the widget should not be shown) or `Active` with a scale. The
//! state is evaluated fresh each rebuild; there are no other states and no
//! transitions besides flipping between these two.

/// The scrollbar widget's fixed logical range.
pub const WIDGET_RANGE: u32 = 65530;

/// Per-axis scale state, recomputed every rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAxis {
    /// Content fits in one page; the widget is not shown.
    Hidden,
    /// Scrollable: `scale` maps `[0, total - page]` onto the widget range.
    Active {
        /// `WIDGET_RANGE / (total_units - page_units)`
        scale: f64,
    },
}

impl ScrollAxis {
    /// Evaluates the axis state for one rebuild.
    ///
    /// `Active` only when `total_units > page_units`; at equality the only
    /// valid position is 0 and the axis hides (which also keeps the scale
    /// denominator non-zero).
    pub fn compute(total_units: usize, page_units: usize) -> Self {
        if total_units > page_units {
            ScrollAxis::Active {
                scale: f64::from(WIDGET_RANGE) / (total_units - page_units) as f64,
            }
        } else {
            ScrollAxis::Hidden
        }
    }

    /// Returns true if the widget should be shown for this axis.
    pub fn is_visible(&self) -> bool {
        matches!(self, ScrollAxis::Active { .. })
    }

    /// Translates an internal position into widget ticks.
    ///
    /// Rounds to the nearest tick so the two endpoints map exactly; a
    /// hidden axis always reports 0.
    pub fn to_widget(&self, pos: usize) -> u32 {
        match self {
            ScrollAxis::Hidden => 0,
            ScrollAxis::Active { scale } => {
                ((pos as f64 * scale).round() as u32).min(WIDGET_RANGE)
            }
        }
    }

    /// Translates widget ticks back into an internal position.
    ///
    /// Rounds to the nearest position (a thumb dragged to the end must land
    /// on the last page, not one short of it); the result still goes
    /// through the viewport's clamps. A hidden axis always reports 0.
    pub fn from_widget(&self, widget_pos: u32) -> usize {
        match self {
            ScrollAxis::Hidden => 0,
            ScrollAxis::Active { scale } => (f64::from(widget_pos) / scale).round() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== compute ====================

    #[test]
    fn test_compute_scrollable() {
        // 100 total, 10 per page: scale = WIDGET_RANGE / 90.
        let axis = ScrollAxis::compute(100, 10);
        assert!(axis.is_visible());
        match axis {
            ScrollAxis::Active { scale } => {
                assert!((scale - f64::from(WIDGET_RANGE) / 90.0).abs() < 1e-9);
            }
            ScrollAxis::Hidden => unreachable!(),
        }
    }

    #[test]
    fn test_compute_hidden_when_content_fits() {
        assert_eq!(ScrollAxis::compute(3, 5), ScrollAxis::Hidden);
    }

    #[test]
    fn test_compute_hidden_at_exact_page() {
        // total == page has nothing to scroll and must not divide by zero.
        assert_eq!(ScrollAxis::compute(10, 10), ScrollAxis::Hidden);
    }

    #[test]
    fn test_compute_hidden_for_empty_content() {
        assert_eq!(ScrollAxis::compute(0, 1), ScrollAxis::Hidden);
    }

    // ==================== widget translation ====================

    #[test]
    fn test_to_widget_endpoints() {
        let axis = ScrollAxis::compute(100, 10);
        assert_eq!(axis.to_widget(0), 0);
        // The far end lands on the last widget tick, modulo truncation.
        assert!(axis.to_widget(90) >= WIDGET_RANGE - 1);
    }

    #[test]
    fn test_to_widget_midpoint() {
        let axis = ScrollAxis::compute(100, 10);
        // 45 of 90 maps to half the widget range, give or take the
        // truncation tick.
        let mid = axis.to_widget(45);
        assert!(mid.abs_diff(WIDGET_RANGE / 2) <= 1, "mid={mid}");
    }

    #[test]
    fn test_from_widget_endpoints() {
        let axis = ScrollAxis::compute(100, 10);
        assert_eq!(axis.from_widget(0), 0);
        // The far end must reach the last scroll position.
        assert_eq!(axis.from_widget(WIDGET_RANGE), 90);
    }

    #[test]
    fn test_widget_round_trip_drift_at_most_one() {
        // Rounding each way may drift; it never accumulates past one
        // position.
        let axis = ScrollAxis::compute(1000, 25);
        for pos in [0usize, 1, 13, 500, 974, 975] {
            let back = axis.from_widget(axis.to_widget(pos));
            assert!(back.abs_diff(pos) <= 1, "pos={pos} back={back}");
        }
    }

    #[test]
    fn test_hidden_axis_translates_to_zero() {
        let axis = ScrollAxis::Hidden;
        assert_eq!(axis.to_widget(42), 0);
        assert_eq!(axis.from_widget(42), 0);
        assert!(!axis.is_visible());
    }

    #[test]
    fn test_scale_larger_than_one_for_short_content() {
        // 12 total, 10 per page: two scroll positions spread across the
        // whole widget range.
        let axis = ScrollAxis::compute(12, 10);
        assert_eq!(axis.to_widget(2), WIDGET_RANGE);
        assert_eq!(axis.from_widget(WIDGET_RANGE / 2), 1);
    }
}
