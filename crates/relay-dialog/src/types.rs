//! Dialog boundary value types.
//!
//! Everything a confirmation prompt needs is collapsed into one
//! [`DialogPrompt`] configuration struct; the presenting toolkit decides how
//! each field maps onto its own dialog API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a message dialog.
///
/// A dialog service that cannot produce an outcome returns `None` from
/// [`show`](crate::service::MessageDialog::show) instead; absence is always
/// treated as "not approved" by the confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DialogResult {
    Ok,
    Cancel,
    Yes,
    No,
}

impl fmt::Display for DialogResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogResult::Ok => write!(f, "ok"),
            DialogResult::Cancel => write!(f, "cancel"),
            DialogResult::Yes => write!(f, "yes"),
            DialogResult::No => write!(f, "no"),
        }
    }
}

impl std::str::FromStr for DialogResult {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(DialogResult::Ok),
            "cancel" => Ok(DialogResult::Cancel),
            "yes" => Ok(DialogResult::Yes),
            "no" => Ok(DialogResult::No),
            _ => Err(format!("Unknown dialog result: {}", s)),
        }
    }
}

/// Button sets a dialog can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogButtons {
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
}

impl fmt::Display for DialogButtons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogButtons::Ok => write!(f, "ok"),
            DialogButtons::OkCancel => write!(f, "ok_cancel"),
            DialogButtons::YesNo => write!(f, "yes_no"),
            DialogButtons::YesNoCancel => write!(f, "yes_no_cancel"),
        }
    }
}

impl std::str::FromStr for DialogButtons {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(DialogButtons::Ok),
            "ok_cancel" => Ok(DialogButtons::OkCancel),
            "yes_no" => Ok(DialogButtons::YesNo),
            "yes_no_cancel" => Ok(DialogButtons::YesNoCancel),
            _ => Err(format!("Unknown dialog buttons: {}", s)),
        }
    }
}

/// Icon shown next to the dialog text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogIcon {
    Information,
    Warning,
    Error,
    Question,
}

impl fmt::Display for DialogIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogIcon::Information => write!(f, "information"),
            DialogIcon::Warning => write!(f, "warning"),
            DialogIcon::Error => write!(f, "error"),
            DialogIcon::Question => write!(f, "question"),
        }
    }
}

impl std::str::FromStr for DialogIcon {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "information" => Ok(DialogIcon::Information),
            "warning" => Ok(DialogIcon::Warning),
            "error" => Ok(DialogIcon::Error),
            "question" => Ok(DialogIcon::Question),
            _ => Err(format!("Unknown dialog icon: {}", s)),
        }
    }
}

/// Presentation flags forwarded to the dialog service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOptions {
    pub right_align: bool,
    pub rtl_reading: bool,
    pub default_desktop_only: bool,
    pub service_notification: bool,
}

/// Opaque reference to the window that should own the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowHandle(pub u64);

/// Fixed presentation configuration of a confirmation prompt.
///
/// Only the text is required. Every other field is optional and forwarded
/// verbatim to the dialog service; the service applies its own defaults for
/// fields left unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogPrompt {
    pub text: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub owner: Option<WindowHandle>,
    #[serde(default)]
    pub buttons: Option<DialogButtons>,
    #[serde(default)]
    pub icon: Option<DialogIcon>,
    #[serde(default)]
    pub default_result: Option<DialogResult>,
    #[serde(default)]
    pub options: Option<DialogOptions>,
}

impl DialogPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            caption: None,
            owner: None,
            buttons: None,
            icon: None,
            default_result: None,
            options: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_owner(mut self, owner: WindowHandle) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_buttons(mut self, buttons: DialogButtons) -> Self {
        self.buttons = Some(buttons);
        self
    }

    pub fn with_icon(mut self, icon: DialogIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_default_result(mut self, default_result: DialogResult) -> Self {
        self.default_result = Some(default_result);
        self
    }

    pub fn with_options(mut self, options: DialogOptions) -> Self {
        self.options = Some(options);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_dialog_result_display_round_trip() {
        for result in [
            DialogResult::Ok,
            DialogResult::Cancel,
            DialogResult::Yes,
            DialogResult::No,
        ] {
            assert_eq!(DialogResult::from_str(&result.to_string()), Ok(result));
        }
    }

    #[test]
    fn test_dialog_result_unknown_string_is_rejected() {
        let err = DialogResult::from_str("maybe").unwrap_err();
        assert_eq!(err, "Unknown dialog result: maybe");
    }

    #[test]
    fn test_dialog_buttons_display_round_trip() {
        for buttons in [
            DialogButtons::Ok,
            DialogButtons::OkCancel,
            DialogButtons::YesNo,
            DialogButtons::YesNoCancel,
        ] {
            assert_eq!(DialogButtons::from_str(&buttons.to_string()), Ok(buttons));
        }
    }

    #[test]
    fn test_dialog_icon_display_round_trip() {
        for icon in [
            DialogIcon::Information,
            DialogIcon::Warning,
            DialogIcon::Error,
            DialogIcon::Question,
        ] {
            assert_eq!(DialogIcon::from_str(&icon.to_string()), Ok(icon));
        }
    }

    #[test]
    fn test_prompt_setters_fill_every_field() {
        let prompt = DialogPrompt::new("Discard changes?")
            .with_caption("Editor")
            .with_owner(WindowHandle(12))
            .with_buttons(DialogButtons::YesNoCancel)
            .with_icon(DialogIcon::Warning)
            .with_default_result(DialogResult::No)
            .with_options(DialogOptions {
                right_align: true,
                ..DialogOptions::default()
            });

        assert_eq!(prompt.text, "Discard changes?");
        assert_eq!(prompt.caption.as_deref(), Some("Editor"));
        assert_eq!(prompt.owner, Some(WindowHandle(12)));
        assert_eq!(prompt.buttons, Some(DialogButtons::YesNoCancel));
        assert_eq!(prompt.icon, Some(DialogIcon::Warning));
        assert_eq!(prompt.default_result, Some(DialogResult::No));
        assert!(prompt.options.unwrap().right_align);
    }

    #[test]
    fn test_prompt_deserializes_with_text_only() {
        let prompt: DialogPrompt =
            serde_json::from_value(serde_json::json!({"text": "Save?"})).unwrap();
        assert_eq!(prompt, DialogPrompt::new("Save?"));
    }

    #[test]
    fn test_prompt_serde_uses_snake_case_outcomes() {
        let prompt = DialogPrompt::new("Save?").with_default_result(DialogResult::Yes);
        let value = serde_json::to_value(&prompt).unwrap();
        assert_eq!(value["default_result"], "yes");
    }
}
