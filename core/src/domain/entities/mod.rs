pub mod token;

pub use token::{Claims, TokenClass, TokenPair};
