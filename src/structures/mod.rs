pub mod matrix;
pub mod poly;
