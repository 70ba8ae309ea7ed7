pub mod cell_code;
pub mod goal_map;
pub mod marker;
