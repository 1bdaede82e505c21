pub mod actions;
pub mod choices;
pub mod dispatcher;
pub mod elicit;
pub mod statements;

pub use crate::domain::model::{Action, Choice, Record};
pub use crate::domain::ports::{ConfigProvider, Prompter, Store};
pub use crate::utils::error::Result;
