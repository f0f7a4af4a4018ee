use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// System-assigned ticket identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    /// Wrap a raw database id
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw database id
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Ticket status
///
/// There is no transition graph: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// Stored and submitted form of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Closed => "Closed",
        }
    }

    /// CSS class for the status badge
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Open => "badge-blue",
            Self::InProgress => "badge-yellow",
            Self::Closed => "badge-green",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Stored and submitted form of the priority
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// CSS class for the priority badge
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Low => "badge-gray",
            Self::Medium => "badge-orange",
            Self::High => "badge-red",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A value outside an enum's closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value '{0}'")]
pub struct UnknownVariant(pub String);

/// A stored support ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for a ticket that has not been stored yet
///
/// Produced by [`crate::core::TicketBuilder`] or by validating a submitted
/// form. Id and timestamps are assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
}

/// Validated changes to an existing ticket
///
/// `None` for description, status or priority keeps the stored value.
/// `Some(None)` clears the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketChanges {
    pub title: String,
    pub description: Option<Option<String>>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("open".parse::<Status>(), Ok(Status::Open));
        assert_eq!("in_progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("closed".parse::<Status>(), Ok(Status::Closed));
        assert!("invalid_status".parse::<Status>().is_err());
        assert!("Open".parse::<Status>().is_err());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
        assert!("critical".parse::<Priority>().is_err());
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Status::default(), Status::Open);
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn test_display_matches_storage_form() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>(), Ok(status));
        }
        assert_eq!(Status::InProgress.label(), "In progress");
        assert_eq!(Priority::High.badge_class(), "badge-red");
    }

    #[test]
    fn test_ticket_id_from_str() {
        assert_eq!("42".parse::<TicketId>(), Ok(TicketId::new(42)));
        assert!("abc".parse::<TicketId>().is_err());
    }
}
