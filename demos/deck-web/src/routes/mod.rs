pub mod catalog;
pub mod deck;
