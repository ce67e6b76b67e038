#![doc = include_str!("../README.md")]

mod category;
mod config;
mod grouper;
mod labels;
pub mod locale;
mod mapping;
mod subject;

pub use category::*;
pub use config::*;
pub use grouper::*;
pub use labels::*;
pub use mapping::*;
pub use subject::*;
