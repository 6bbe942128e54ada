#![no_std]

extern crate alloc;

pub use board::*;
pub use clue::*;
pub use error::*;
pub use sample::*;
pub use setup::*;
pub use source::*;
pub use types::*;

mod board;
mod clue;
mod error;
mod sample;
mod setup;
mod source;
mod types;
