pub mod card;
pub mod catalog;
pub mod page;

pub use card::*;
pub use catalog::*;
pub use page::*;
