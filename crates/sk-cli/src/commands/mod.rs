pub mod dispatch;
pub mod graph;
pub mod inspect;
pub mod panel;
pub mod shared;
