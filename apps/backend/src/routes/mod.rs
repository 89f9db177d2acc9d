pub mod cloze;
pub mod questions;
