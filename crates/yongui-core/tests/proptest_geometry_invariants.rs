//! Property-based invariant tests for the geometry used by dropdown layout.
//!
//! 1. Intersection is commutative and fits within both inputs.
//! 2. `split_top` partitions the rectangle without losing rows.
//! 3. `row` is always contained in its rectangle.
//! 4. No panics on extreme u16 values.

use proptest::prelude::*;
use yongui_core::geometry::{Rect, Sides};

fn small_rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_commutative(a in small_rect_strategy(), b in small_rect_strategy()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_fits_within_inputs(a in small_rect_strategy(), b in small_rect_strategy()) {
        let r = a.intersection(&b);
        if !r.is_empty() {
            prop_assert!(r.x >= a.x && r.right() <= a.right());
            prop_assert!(r.y >= b.y && r.bottom() <= b.bottom());
        }
    }

    #[test]
    fn split_top_partitions(rect in small_rect_strategy(), h in 0u16..=600) {
        let (top, rest) = rect.split_top(h);
        prop_assert_eq!(top.height + rest.height, rect.height);
        prop_assert_eq!(top.y, rect.y);
        prop_assert_eq!(rest.y, rect.y + top.height);
        prop_assert_eq!(top.width, rect.width);
    }

    #[test]
    fn row_is_contained(rect in small_rect_strategy(), dy in 0u16..=600) {
        if let Some(row) = rect.row(dy) {
            prop_assert_eq!(row.height, 1);
            if !row.is_empty() {
                prop_assert_eq!(rect.intersection(&row), row);
            }
        } else {
            prop_assert!(dy >= rect.height);
        }
    }

    #[test]
    fn no_panic_on_extremes(rect in rect_strategy(), margin in any::<u16>()) {
        let _ = rect.inner(Sides::all(margin));
        let _ = rect.split_top(margin);
        let _ = rect.contains(margin, margin);
        let _ = rect.area();
    }
}
