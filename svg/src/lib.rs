pub mod color;
pub mod document;
pub mod errors;
pub mod opacity;
pub mod transform;
