pub mod admin;
pub mod error_shape;
