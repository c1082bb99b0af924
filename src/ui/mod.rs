pub mod chart;
pub mod map;
pub mod overview;
pub mod panels;
pub mod table;
