pub mod emit;
pub mod levels;
