//! Visual slot of each carousel item relative to the active one.

use crate::constants;

/// Page layout the carousel is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Center, near and far tiers
    #[default]
    Desktop,
    /// Center and immediate neighbors only
    Mobile,
}

impl LayoutMode {
    /// Pick the layout for a viewport width using the default breakpoint.
    pub fn from_viewport_width(width_px: f64) -> Self {
        Self::from_viewport_width_with(width_px, constants::carousel::MOBILE_BREAKPOINT_PX)
    }

    /// Pick the layout for a viewport width and an explicit breakpoint.
    pub fn from_viewport_width_with(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px < breakpoint_px {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

/// Visual role of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselSlot {
    /// The active item
    Center,
    /// One step before the active item
    NearLeft,
    /// One step after the active item
    NearRight,
    /// Two steps before (desktop only)
    FarLeft,
    /// Two steps after (desktop only)
    FarRight,
    /// Not shown
    Hidden,
}

impl CarouselSlot {
    /// CSS class the page styles this slot with.
    pub fn css_class(&self) -> &'static str {
        match self {
            CarouselSlot::Center => "center",
            CarouselSlot::NearLeft => "left",
            CarouselSlot::NearRight => "right",
            CarouselSlot::FarLeft => "far-left",
            CarouselSlot::FarRight => "far-right",
            CarouselSlot::Hidden => "hidden",
        }
    }

    /// Whether the item is drawn at all.
    pub fn is_visible(&self) -> bool {
        !matches!(self, CarouselSlot::Hidden)
    }
}

/// Signed circular distance from `active` to `item`.
///
/// The result lies in `(-len/2, len/2]` with exact (non-truncated) halves, so
/// an odd carousel is symmetric and an even one puts the opposite item on the
/// right.
///
/// # Panics
///
/// Panics if `len` is 0. [`CarouselController`](super::CarouselController)
/// never holds an empty carousel.
pub fn signed_distance(active: usize, item: usize, len: usize) -> isize {
    assert!(len > 0, "distance in an empty carousel");
    let len = len as isize;
    let forward = (item as isize - active as isize).rem_euclid(len);
    if forward > len / 2 {
        forward - len
    } else {
        forward
    }
}

/// Slot of `item` when `active` is centered in a carousel of `len` items.
///
/// # Panics
///
/// Panics if `len` is 0.
pub fn position_of(active: usize, item: usize, len: usize, layout: LayoutMode) -> CarouselSlot {
    match (signed_distance(active, item, len), layout) {
        (0, _) => CarouselSlot::Center,
        (-1, _) => CarouselSlot::NearLeft,
        (1, _) => CarouselSlot::NearRight,
        (-2, LayoutMode::Desktop) => CarouselSlot::FarLeft,
        (2, LayoutMode::Desktop) => CarouselSlot::FarRight,
        _ => CarouselSlot::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(active: usize, len: usize, layout: LayoutMode) -> Vec<CarouselSlot> {
        (0..len).map(|i| position_of(active, i, len, layout)).collect()
    }

    #[test]
    fn test_five_items_from_zero() {
        let d = LayoutMode::Desktop;
        assert_eq!(position_of(0, 0, 5, d), CarouselSlot::Center);
        assert_eq!(position_of(0, 1, 5, d), CarouselSlot::NearRight);
        assert_eq!(position_of(0, 4, 5, d), CarouselSlot::NearLeft);
        assert_eq!(position_of(0, 2, 5, d), CarouselSlot::FarRight);
        assert_eq!(position_of(0, 3, 5, d), CarouselSlot::FarLeft);
    }

    #[test]
    fn test_mobile_collapses_far_tiers() {
        assert_eq!(
            slots(0, 5, LayoutMode::Mobile),
            vec![
                CarouselSlot::Center,
                CarouselSlot::NearRight,
                CarouselSlot::Hidden,
                CarouselSlot::Hidden,
                CarouselSlot::NearLeft,
            ]
        );
    }

    #[test]
    fn test_tier_counts_for_larger_carousels() {
        for len in 5..12 {
            for active in 0..len {
                let all = slots(active, len, LayoutMode::Desktop);
                let count = |slot: CarouselSlot| all.iter().filter(|s| **s == slot).count();

                assert_eq!(all[active], CarouselSlot::Center);
                assert_eq!(count(CarouselSlot::Center), 1);
                assert_eq!(count(CarouselSlot::NearLeft) + count(CarouselSlot::NearRight), 2);
                assert_eq!(count(CarouselSlot::FarLeft) + count(CarouselSlot::FarRight), 2);
                assert_eq!(count(CarouselSlot::Hidden), len - 5);
            }
        }
    }

    #[test]
    fn test_single_item_has_no_neighbors() {
        assert_eq!(slots(0, 1, LayoutMode::Desktop), vec![CarouselSlot::Center]);
    }

    #[test]
    fn test_small_carousels() {
        // Two items: the other one sits on the right (distance +1, not -1)
        assert_eq!(
            slots(0, 2, LayoutMode::Desktop),
            vec![CarouselSlot::Center, CarouselSlot::NearRight]
        );
        assert_eq!(
            slots(1, 4, LayoutMode::Desktop),
            vec![
                CarouselSlot::NearLeft,
                CarouselSlot::Center,
                CarouselSlot::NearRight,
                CarouselSlot::FarRight,
            ]
        );
    }

    #[test]
    fn test_signed_distance_range() {
        for len in 1..10usize {
            let len_i = len as isize;
            for active in 0..len {
                for item in 0..len {
                    let d = signed_distance(active, item, len);
                    assert!(2 * d > -len_i, "d={d} len={len}");
                    assert!(2 * d <= len_i, "d={d} len={len}");
                    assert_eq!((active as isize + d).rem_euclid(len_i), item as isize);
                }
            }
        }
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(LayoutMode::from_viewport_width(375.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_viewport_width(767.9), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_viewport_width(768.0), LayoutMode::Desktop);
        assert_eq!(LayoutMode::from_viewport_width_with(900.0, 1024.0), LayoutMode::Mobile);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(CarouselSlot::Center.css_class(), "center");
        assert_eq!(CarouselSlot::NearLeft.css_class(), "left");
        assert_eq!(CarouselSlot::FarRight.css_class(), "far-right");
        assert!(!CarouselSlot::Hidden.is_visible());
        assert!(CarouselSlot::FarLeft.is_visible());
    }

    #[test]
    #[should_panic(expected = "empty carousel")]
    fn test_empty_carousel_panics() {
        signed_distance(0, 0, 0);
    }
}
