use crate::model::Node;

/// The `k` largest nodes at depth `<= max_depth`, largest first.
///
/// Equal sizes keep their order in `nodes` (discovery order for a scanned
/// tree). With `exclude_dirs` only files qualify.
pub fn filter_top_k(nodes: &[Node], k: usize, exclude_dirs: bool, max_depth: usize) -> Vec<&Node> {
    let mut ranked: Vec<&Node> = nodes
        .iter()
        .filter(|n| n.depth <= max_depth && !(exclude_dirs && n.is_dir))
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.size.cmp(&a.size));
    ranked.truncate(k);
    ranked
}
