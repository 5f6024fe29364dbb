pub mod planner;
pub mod value_objects;

pub use planner::{SwapPlan, display_sorted, next_order, plan_move, sorted_by_order};
pub use value_objects::{MoveDirection, SortOrder};
