pub mod parse;
pub mod security;
