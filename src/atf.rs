//! Main module for ATF library functionality

pub mod ast;
pub mod config;
pub mod corpus;
pub mod fragment;
pub mod lexing;
pub mod parsing;
pub mod reconstruction;
pub mod signs;
pub mod testing;

pub use ast::{Line, Text, Token};
pub use lexing::cleaning::{clean_line, clean_transliteration};
pub use parsing::{parse_atf, parse_line};
