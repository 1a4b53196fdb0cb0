pub mod calculator;
pub mod console;
pub mod token;
