//! Slice-and-dice treemap of a scanned tree

use crate::canvas::{Canvas, Cell};
use crate::model::{FileTree, NodeId};
use ratatui::layout::Rect;

/// Paint the subtree at `id` into `rect` of `canvas`.
///
/// Files fill their whole rectangle. A directory splits its rectangle among
/// its non-empty children, largest first, along its longer side (width when
/// strictly wider than tall). Each child gets `max(1, floor(share * side))`
/// cells; the remainder is not redistributed, so a strip at the end of the
/// side may stay blank and late children may spill past the parent. Only the
/// canvas bounds clip.
pub fn render_treemap(tree: &FileTree, id: NodeId, rect: Rect, canvas: &mut Canvas) {
    let node = tree.node(id);
    if !node.is_dir {
        canvas.fill_rect(rect, Cell::from(node.effective_style()));
        return;
    }

    let mut children: Vec<NodeId> = node
        .children()
        .iter()
        .copied()
        .filter(|&c| tree.node(c).size > 0)
        .collect();
    if children.is_empty() {
        return;
    }
    children.sort_by(|&a, &b| tree.node(b).size.cmp(&tree.node(a).size));

    let total: u64 = children.iter().map(|&c| tree.node(c).size).sum();
    let split_width = rect.width > rect.height;
    let side = if split_width { rect.width } else { rect.height };

    let mut offset: u16 = 0;
    for child in children {
        let share = tree.node(child).size as f64 / total as f64;
        let extent = ((share * side as f64).floor() as u16).max(1);

        let child_rect = if split_width {
            Rect {
                x: rect.x.saturating_add(offset),
                y: rect.y,
                width: extent,
                height: rect.height,
            }
        } else {
            Rect {
                x: rect.x,
                y: rect.y.saturating_add(offset),
                width: rect.width,
                height: extent,
            }
        };

        render_treemap(tree, child, child_rect, canvas);
        offset = offset.saturating_add(extent);
    }
}
