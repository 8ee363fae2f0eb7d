pub mod rects;
pub mod transparent;
