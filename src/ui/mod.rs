pub mod display;
pub mod terminal;
