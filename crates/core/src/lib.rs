#![deny(warnings)]

pub mod config;
pub mod documentation;
pub mod lang;
pub mod translate;
pub mod util;

pub use lang::Lang;
