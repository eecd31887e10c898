pub mod console;
pub mod generate;
pub mod seed;
