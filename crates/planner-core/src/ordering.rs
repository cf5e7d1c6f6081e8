//! Task Display Ordering
//!
//! Presentation-only; recomputed on every render and never sent back.

use crate::domain::Task;

/// Open tasks first, then completed. Within each group dated tasks come
/// first in ascending due date; undated tasks keep their fetch order.
pub fn display_order(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    // Stable sort: ties keep server order.
    ordered.sort_by_key(|t| (t.completed, t.due_date.is_none(), t.due_date));
    ordered
}
