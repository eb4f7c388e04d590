pub mod catalog;
pub mod export;
pub mod intake;
pub mod matching;
