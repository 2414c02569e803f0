//! Notification vocabulary shared with the client.
//!
//! Each type has a closed set of literal string forms. `NotificationType`
//! and `RecipientType` also accept the empty string as "unset".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! literal_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $lit:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $lit)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $lit),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok($name::$variant),)+
                    other => Err(UnknownLiteral {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// A string that is not one of a type's literals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownLiteral {
    pub kind: &'static str,
    pub value: String,
}

literal_enum!(
    /// Filterable notification field.
    NotificationField {
        NotificationType => "notificationType",
        RecipientFilter => "recipientFilter",
    }
);

literal_enum!(
    /// Any value a notification field may take.
    NotificationValue {
        Inbox => "inbox",
        Push => "push",
        Everyone => "everyone",
        Event => "event",
        Claimed => "claimed",
        Unclaimed => "unclaimed",
    }
);

literal_enum!(
    /// Delivery channel.
    NotificationType {
        Inbox => "inbox",
        Push => "push",
        Unset => "",
    }
);

literal_enum!(
    /// Audience of a notification.
    RecipientType {
        Everyone => "everyone",
        Event => "event",
        Unset => "",
    }
);
