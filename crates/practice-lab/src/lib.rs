#![allow(missing_docs)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod events;
pub mod logging;
pub mod session;

pub use config::{ConfigError, Dataset, LabConfig};
pub use events::{EventScript, UiEvent};
pub use session::{Session, SessionError, StepReport};
