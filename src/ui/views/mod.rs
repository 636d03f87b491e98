pub mod filters;
pub mod questions;
