pub mod outcome;
pub mod surmise;
