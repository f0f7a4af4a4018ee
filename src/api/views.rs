//! Page rendering with Tera
//!
//! Templates are compiled into the binary, so the server does not depend on
//! its working directory.

use crate::core::{Priority, Status, Ticket, TicketForm, ValidationErrors};
use crate::error::Result;
use crate::storage::Page;
use serde::Serialize;
use tera::{Context, Tera};

const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";

const TEMPLATES: [(&str, &str); 4] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("tickets/index.html", include_str!("../../templates/tickets/index.html")),
    ("tickets/create.html", include_str!("../../templates/tickets/create.html")),
    ("tickets/show.html", include_str!("../../templates/tickets/show.html")),
];

/// Ticket fields prepared for display
#[derive(Debug, Clone, Serialize)]
pub struct TicketView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub priority: &'static str,
    pub priority_label: &'static str,
    pub priority_class: &'static str,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Ticket> for TicketView {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.value(),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status.as_str(),
            status_label: ticket.status.label(),
            status_class: ticket.status.badge_class(),
            priority: ticket.priority.as_str(),
            priority_label: ticket.priority.label(),
            priority_class: ticket.priority.badge_class(),
            created_at: ticket.created_at.format(DATETIME_FORMAT).to_string(),
            updated_at: ticket.updated_at.format(DATETIME_FORMAT).to_string(),
        }
    }
}

/// Form values to re-display, blank where nothing was submitted
#[derive(Debug, Clone, Default, Serialize)]
struct FormView {
    title: String,
    description: String,
    status: String,
    priority: String,
}

impl FormView {
    fn from_form(form: &TicketForm) -> Self {
        Self {
            title: form.title.clone().unwrap_or_default(),
            description: form.description.clone().unwrap_or_default(),
            status: form.status.clone().unwrap_or_default(),
            priority: form.priority.clone().unwrap_or_default(),
        }
    }

    fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone().unwrap_or_default(),
            status: ticket.status.as_str().to_string(),
            priority: ticket.priority.as_str().to_string(),
        }
    }

    fn blank() -> Self {
        Self {
            status: Status::default().as_str().to_string(),
            priority: Priority::default().as_str().to_string(),
            ..Self::default()
        }
    }
}

/// Messages for each form field; always present so templates can loop
#[derive(Debug, Clone, Default, Serialize)]
struct FieldErrors {
    title: Vec<String>,
    description: Vec<String>,
    status: Vec<String>,
    priority: Vec<String>,
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            title: errors.get("title").to_vec(),
            description: errors.get("description").to_vec(),
            status: errors.get("status").to_vec(),
            priority: errors.get("priority").to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct OptionView {
    value: &'static str,
    label: &'static str,
}

/// Active list filters, echoed back into the filter form and page links
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListFilters {
    pub search: String,
    pub status: String,
    pub priority: String,
}

impl ListFilters {
    /// List URL for a page with these filters
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        let mut url = format!("/tickets?page={page}");
        for (key, value) in [
            ("search", &self.search),
            ("status", &self.status),
            ("priority", &self.priority),
        ] {
            if !value.is_empty() {
                url.push_str(&format!("&{key}={}", urlencoding::encode(value)));
            }
        }
        url
    }
}

#[derive(Debug, Clone, Serialize)]
struct PaginationView {
    page: u32,
    last_page: u32,
    per_page: u32,
    total: u64,
    previous_url: Option<String>,
    next_url: Option<String>,
}

/// Renders the application's pages
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile the built-in templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Ticket list with filters and pagination
    pub fn index(&self, page: &Page<Ticket>, filters: &ListFilters, flash: Option<&str>) -> Result<String> {
        let pagination = PaginationView {
            page: page.page,
            last_page: page.last_page,
            per_page: page.per_page,
            total: page.total,
            previous_url: page.has_previous().then(|| filters.page_url(page.page - 1)),
            next_url: page.has_next().then(|| filters.page_url(page.page + 1)),
        };
        let tickets: Vec<TicketView> = page.items.iter().map(TicketView::from).collect();

        let mut context = Self::base_context(flash);
        context.insert("tickets", &tickets);
        context.insert("pagination", &pagination);
        context.insert("filters", filters);
        self.render("tickets/index.html", &context)
    }

    /// Creation form, optionally re-displaying a rejected submission
    pub fn create(&self, submitted: Option<(&TicketForm, &ValidationErrors)>) -> Result<String> {
        let (form, errors) = match submitted {
            Some((form, errors)) => (FormView::from_form(form), FieldErrors::from(errors)),
            None => (FormView::blank(), FieldErrors::default()),
        };

        let mut context = Self::base_context(None);
        context.insert("form", &form);
        context.insert("errors", &errors);
        self.render("tickets/create.html", &context)
    }

    /// Ticket detail with its edit form
    pub fn show(
        &self,
        ticket: &Ticket,
        submitted: Option<(&TicketForm, &ValidationErrors)>,
        flash: Option<&str>,
    ) -> Result<String> {
        let (form, errors) = match submitted {
            Some((form, errors)) => (FormView::from_form(form), FieldErrors::from(errors)),
            None => (FormView::from_ticket(ticket), FieldErrors::default()),
        };

        let mut context = Self::base_context(flash);
        context.insert("ticket", &TicketView::from(ticket));
        context.insert("form", &form);
        context.insert("errors", &errors);
        self.render("tickets/show.html", &context)
    }

    fn base_context(flash: Option<&str>) -> Context {
        let statuses: Vec<OptionView> = Status::ALL
            .into_iter()
            .map(|s| OptionView { value: s.as_str(), label: s.label() })
            .collect();
        let priorities: Vec<OptionView> = Priority::ALL
            .into_iter()
            .map(|p| OptionView { value: p.as_str(), label: p.label() })
            .collect();

        let mut context = Context::new();
        context.insert("statuses", &statuses);
        context.insert("priorities", &priorities);
        context.insert("flash", &flash);
        context
    }

    fn render(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}
