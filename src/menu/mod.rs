//! Interactive text menu
//!
//! A numbered menu over the contact service, driven through a [`Prompter`]
//! so it runs the same against a terminal or a scripted test.

pub mod prompter;
pub mod runner;

pub use prompter::{ConsolePrompter, Prompter, ScriptedPrompter};
pub use runner::{run_menu, MenuAction, MenuOptions, MenuOutcome};
