pub mod token;

pub use token::{Token, TokenSet, merge};
