pub mod choice;
pub mod engine;
pub mod outcome;
pub mod round;
