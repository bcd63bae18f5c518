pub mod client;
pub mod toi;

pub use client::*;
pub use toi::*;
