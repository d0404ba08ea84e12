//! Layout utilities.
//!
//! [`PaneLayout`] is recomputed from the window size and tree visibility on
//! every resize or toggle; panes never size themselves.

use ratatui::layout::Rect;

/// Tree pane width when shown.
pub const TREE_WIDTH: u16 = 30;
/// Rows taken by the outer frame.
pub const FRAME_ROWS: u16 = 2;
/// Columns reserved for borders and gaps with the tree shown.
pub const PADDING_WITH_TREE: u16 = 4;
/// Columns reserved for borders with the tree hidden.
pub const PADDING_WITHOUT_TREE: u16 = 2;
pub const MIN_CONTENT_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneLayout {
    pub tree_visible: bool,
    pub tree_width: u16,
    pub tree_height: u16,
    pub content_width: u16,
    pub content_height: u16,
}

impl PaneLayout {
    pub fn compute(width: u16, height: u16, tree_visible: bool) -> Self {
        let (tree_width, padding) = if tree_visible {
            (TREE_WIDTH, PADDING_WITH_TREE)
        } else {
            (0, PADDING_WITHOUT_TREE)
        };
        let content_width = width
            .saturating_sub(tree_width)
            .saturating_sub(padding)
            .max(MIN_CONTENT_WIDTH);
        Self {
            tree_visible,
            tree_width,
            tree_height: height.saturating_sub(FRAME_ROWS),
            content_width,
            content_height: height.saturating_sub(FRAME_ROWS),
        }
    }

    /// Tree rect within `area`, when the tree is shown.
    pub fn tree_area(&self, area: Rect) -> Option<Rect> {
        if !self.tree_visible {
            return None;
        }
        let rect = Rect {
            width: self.tree_width,
            ..area
        };
        Some(rect.intersection(area))
    }

    /// Outer (bordered) content rect within `area`. Sits to the right of
    /// the tree and its gap, and is clipped to `area`.
    pub fn content_area(&self, area: Rect) -> Rect {
        let gap = if self.tree_visible {
            PADDING_WITH_TREE - PADDING_WITHOUT_TREE
        } else {
            0
        };
        let rect = Rect {
            x: area.x.saturating_add(self.tree_width + gap),
            y: area.y,
            width: self.content_width.saturating_add(PADDING_WITHOUT_TREE),
            height: self.content_height.saturating_add(FRAME_ROWS),
        };
        rect.intersection(area)
    }
}

/// Inset a rect horizontally by padding on both sides.
pub fn inset_horizontal(area: Rect, padding: u16) -> Rect {
    if area.width <= padding * 2 {
        return area;
    }
    Rect {
        x: area.x + padding,
        width: area.width - padding * 2,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::{inset_horizontal, PaneLayout};
    use ratatui::layout::Rect;

    #[test]
    fn layout_with_tree_visible() {
        let layout = PaneLayout::compute(100, 40, true);
        assert_eq!(layout.tree_width, 30);
        assert_eq!(layout.tree_height, 38);
        assert_eq!(layout.content_width, 66);
        assert_eq!(layout.content_height, 38);
    }

    #[test]
    fn layout_with_tree_hidden() {
        let layout = PaneLayout::compute(100, 40, false);
        assert_eq!(layout.tree_width, 0);
        assert_eq!(layout.content_width, 98);
        assert_eq!(layout.content_height, 38);
    }

    #[test]
    fn content_width_has_a_floor() {
        assert_eq!(PaneLayout::compute(20, 10, true).content_width, 10);
        assert_eq!(PaneLayout::compute(0, 0, false).content_width, 10);
        assert_eq!(PaneLayout::compute(0, 0, false).content_height, 0);
    }

    #[test]
    fn areas_fill_the_window_exactly() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = PaneLayout::compute(100, 40, true);
        assert_eq!(layout.tree_area(area), Some(Rect::new(0, 0, 30, 40)));
        assert_eq!(layout.content_area(area), Rect::new(32, 0, 68, 40));

        let hidden = PaneLayout::compute(100, 40, false);
        assert_eq!(hidden.tree_area(area), None);
        assert_eq!(hidden.content_area(area), area);
    }

    #[test]
    fn content_area_is_clipped_to_small_windows() {
        let area = Rect::new(0, 0, 40, 10);
        let layout = PaneLayout::compute(40, 10, true);
        assert_eq!(layout.content_width, 10);
        assert_eq!(layout.content_area(area), Rect::new(32, 0, 8, 10));

        let tiny = Rect::new(0, 0, 12, 5);
        let layout = PaneLayout::compute(12, 5, true);
        assert!(layout.content_area(tiny).is_empty());
    }

    #[test]
    fn inset_horizontal_skips_narrow_areas() {
        assert_eq!(inset_horizontal(Rect::new(0, 0, 10, 1), 1), Rect::new(1, 0, 8, 1));
        assert_eq!(inset_horizontal(Rect::new(0, 0, 2, 1), 1), Rect::new(0, 0, 2, 1));
    }
}
