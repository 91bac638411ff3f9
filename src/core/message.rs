use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::core::responses::CannedResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Origin {
    User,
    Bot,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::Bot => "bot",
        }
    }

    /// Speaker label shown in the transcript and the log file.
    pub fn display_name(self) -> &'static str {
        match self {
            Origin::User => "Você",
            Origin::Bot => "Assistente",
        }
    }

    pub fn is_user(self) -> bool {
        self == Origin::User
    }

    pub fn is_bot(self) -> bool {
        self == Origin::Bot
    }
}

impl AsRef<str> for Origin {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for Origin {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Origin::User),
            "bot" => Ok(Origin::Bot),
            _ => Err(format!("invalid message origin: {value}")),
        }
    }
}

impl TryFrom<String> for Origin {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Origin> for String {
    fn from(value: Origin) -> Self {
        value.as_str().to_string()
    }
}

/// A single entry in the help-chat transcript.
///
/// Messages are never edited after creation; the widget only appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rendered_markup: Option<String>,
    origin: Origin,
    timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rendered_markup: None,
            origin,
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Origin::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Origin::Bot, text)
    }

    /// Build a bot message from a canned response. Markup is kept only when
    /// `rich` is set and the response has an HTML form.
    pub fn from_response(response: &CannedResponse, rich: bool) -> Self {
        let mut message = Self::bot(response.text);
        if rich {
            message.rendered_markup = response.markup.map(str::to_string);
        }
        message
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rendered_markup(&self) -> Option<&str> {
        self.rendered_markup.as_deref()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn is_user(&self) -> bool {
        self.origin.is_user()
    }

    pub fn is_bot(&self) -> bool {
        self.origin.is_bot()
    }

    /// `HH:MM` in local time, as shown under each bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
