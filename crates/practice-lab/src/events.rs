use practice_core::PageId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One user interaction, addressed by test id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Replace the text of an input.
    Input { target: String, value: String },
    /// Set a checkbox.
    Toggle { target: String, checked: bool },
    /// Pick one option of a radio group.
    Select { target: String },
    Click { target: String },
    /// Let the pending simulated delay elapse.
    Wait,
}

impl UiEvent {
    pub fn target(&self) -> Option<&str> {
        match self {
            UiEvent::Input { target, .. }
            | UiEvent::Toggle { target, .. }
            | UiEvent::Select { target }
            | UiEvent::Click { target } => Some(target),
            UiEvent::Wait => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Input { .. } => "input",
            UiEvent::Toggle { .. } => "toggle",
            UiEvent::Select { .. } => "select",
            UiEvent::Click { .. } => "click",
            UiEvent::Wait => "wait",
        }
    }
}

/// A page plus the events to replay against it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EventScript {
    pub page: PageId,
    #[serde(default)]
    pub events: Vec<UiEvent>,
}
