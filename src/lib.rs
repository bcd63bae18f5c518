pub mod catalog;
pub mod cli;
pub mod lookup;
pub mod prompt;
pub mod render;
pub mod session;
pub mod starlist;

pub use cli::{Cli, Commands};
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};
