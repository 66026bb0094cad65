use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A notification delivery category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    InApp,
    Email,
    Chat,
    Push,
    Sms,
}

/// Error returned when a channel name from a route or config file is unknown.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown channel: {0}")]
pub struct ParseChannelError(String);

impl Channel {
    /// Number of channel variants; sizes the catalog's fixed channel map.
    pub const COUNT: usize = 5;

    /// All channels in the order the picker displays them (in-app first).
    pub const ORDER: [Channel; Channel::COUNT] = [
        Channel::InApp,
        Channel::Email,
        Channel::Chat,
        Channel::Push,
        Channel::Sms,
    ];

    /// Stable slot index into the catalog's channel map.
    pub(crate) fn index(self) -> usize {
        match self {
            Channel::InApp => 0,
            Channel::Email => 1,
            Channel::Chat => 2,
            Channel::Push => 3,
            Channel::Sms => 4,
        }
    }

    /// Wire name used in routes and serialized forms.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::InApp => "in_app",
            Channel::Email => "email",
            Channel::Chat => "chat",
            Channel::Push => "push",
            Channel::Sms => "sms",
        }
    }

    /// Human-readable title for tabs and section headers.
    pub fn title(self) -> &'static str {
        match self {
            Channel::InApp => "In-App",
            Channel::Email => "Email",
            Channel::Chat => "Chat",
            Channel::Push => "Push",
            Channel::Sms => "SMS",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_app" => Ok(Channel::InApp),
            "email" => Ok(Channel::Email),
            "chat" => Ok(Channel::Chat),
            "push" => Ok(Channel::Push),
            "sms" => Ok(Channel::Sms),
            other => Err(ParseChannelError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_round_trip() {
        for channel in Channel::ORDER {
            let parsed: Channel = channel.as_str().parse().unwrap();
            assert_eq!(parsed, channel);
        }
    }

    #[test]
    fn test_order_covers_every_channel_once() {
        for channel in Channel::ORDER {
            let occurrences = Channel::ORDER.iter().filter(|&&c| c == channel).count();
            assert_eq!(occurrences, 1);
        }
        assert_eq!(Channel::ORDER.len(), Channel::COUNT);
    }

    #[test]
    fn test_unknown_channel_is_an_error() {
        let err = "smoke_signal".parse::<Channel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown channel: smoke_signal");
    }

    #[test]
    fn test_index_matches_order() {
        for (i, channel) in Channel::ORDER.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
    }
}
