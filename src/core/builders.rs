use super::{NewTicket, Priority, Status};

/// Builder for creating NewTicket instances
#[derive(Default)]
pub struct TicketBuilder {
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Build the ticket, defaulting status to open and priority to low
    pub fn build(self) -> NewTicket {
        NewTicket {
            title: self.title.unwrap_or_default(),
            description: self.description.filter(|d| !d.is_empty()),
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
        }
    }
}
