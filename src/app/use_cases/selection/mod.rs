//! Use-Cases rund um die Selektion.

pub mod drag;
pub mod pick;
pub mod rect;

pub use drag::{begin_drag, end_drag, update_drag};
pub use pick::{
    clear_segment_selection, clear_vertex_selection, select_all_vertices, select_segment,
    select_vertex,
};
pub use rect::select_vertices_in_rect;

use indexmap::IndexSet;

/// Renummeriert eine Index-Menge nach dem Löschen von Elementen.
///
/// `removed` muss aufsteigend sortiert sein. Gelöschte Indizes fallen aus
/// der Menge heraus, alle späteren rücken um die Anzahl der darunter
/// gelöschten nach.
pub(crate) fn remap_indices_after_removal(set: &mut IndexSet<usize>, removed: &[usize]) {
    if removed.is_empty() || set.is_empty() {
        return;
    }
    *set = set
        .iter()
        .filter(|&&i| removed.binary_search(&i).is_err())
        .map(|&i| i - removed.partition_point(|&r| r < i))
        .collect();
}
