//! Ticket request handlers
//!
//! Each handler is one request/response cycle over the repository. Writes
//! answer with a 303 redirect carrying a flash message; rejected forms are
//! re-rendered with status 422.

use crate::api::AppState;
use crate::api::flash::{self, Flash};
use crate::api::views::ListFilters;
use crate::core::{Priority, Status, TicketForm, TicketId};
use crate::error::{Result, TicketDeskError};
use crate::storage::{PageRequest, TicketFilter};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// Query string of the ticket list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub page: Option<String>,
}

impl ListParams {
    /// Typed filter; unrecognized status or priority values are ignored
    #[must_use]
    pub fn filter(&self) -> TicketFilter {
        TicketFilter::new()
            .search(self.search.as_deref())
            .status(known_value::<Status>("status", self.status.as_deref()))
            .priority(known_value::<Priority>("priority", self.priority.as_deref()))
    }

    /// Requested page; missing or malformed pages resolve to the first
    #[must_use]
    pub fn page(&self) -> PageRequest {
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1);
        PageRequest::new(page)
    }

    fn echo(&self) -> ListFilters {
        ListFilters {
            search: self.search.clone().unwrap_or_default(),
            status: self.status.clone().unwrap_or_default(),
            priority: self.priority.clone().unwrap_or_default(),
        }
    }
}

fn known_value<T: FromStr>(name: &str, value: Option<&str>) -> Option<T> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    let parsed = value.parse().ok();
    if parsed.is_none() {
        debug!("Ignoring unknown {name} filter '{value}'");
    }
    parsed
}

fn parse_id(raw: &str) -> Result<TicketId> {
    raw.parse().map_err(|_| TicketDeskError::TicketNotFound {
        id: raw.to_string(),
    })
}

fn redirect_with_flash(to: &str, message: &str) -> Response {
    (AppendHeaders([flash::set_header(message)]), Redirect::to(to)).into_response()
}

fn page_with_flash(status: StatusCode, html: String, flash: &Flash) -> Response {
    (status, AppendHeaders(flash.clear_header()), Html(html)).into_response()
}

/// `GET /`
pub async fn home() -> Redirect {
    Redirect::to("/tickets")
}

/// `GET /tickets`
pub async fn index(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Query(params): Query<ListParams>,
) -> Result<Response> {
    let page = state
        .repository
        .list(&params.filter(), params.page())
        .await?;
    let html = state.views.index(&page, &params.echo(), flash.message())?;
    Ok(page_with_flash(StatusCode::OK, html, &flash))
}

/// `GET /tickets/create`
pub async fn create(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    Ok(Html(state.views.create(None)?))
}

/// `POST /tickets`
pub async fn store(State(state): State<Arc<AppState>>, Form(form): Form<TicketForm>) -> Result<Response> {
    let ticket = match form.validate_create() {
        Ok(ticket) => ticket,
        Err(errors) => {
            debug!("Rejected ticket creation: {errors}");
            let html = state.views.create(Some((&form, &errors)))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        },
    };

    let created = state.repository.create(ticket).await?;
    info!("Ticket {} created", created.id);
    Ok(redirect_with_flash("/tickets", "Ticket created successfully!"))
}

/// `GET /tickets/{id}`
pub async fn show(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Path(id): Path<String>,
) -> Result<Response> {
    let ticket = state.repository.find(parse_id(&id)?).await?;
    let html = state.views.show(&ticket, None, flash.message())?;
    Ok(page_with_flash(StatusCode::OK, html, &flash))
}

/// `PUT /tickets/{id}`
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<TicketForm>,
) -> Result<Response> {
    update_ticket(&state, parse_id(&id)?, form).await
}

/// `DELETE /tickets/{id}`
pub async fn destroy(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<Response> {
    delete_ticket(&state, parse_id(&id)?).await
}

/// `POST /tickets/{id}` with a `_method` field, for HTML forms
pub async fn method_override(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<TicketForm>,
) -> Result<Response> {
    let method = form.method.as_deref().map(str::to_ascii_uppercase);
    match method.as_deref() {
        Some("PUT" | "PATCH") => update_ticket(&state, parse_id(&id)?, form).await,
        Some("DELETE") => delete_ticket(&state, parse_id(&id)?).await,
        _ => Ok(StatusCode::METHOD_NOT_ALLOWED.into_response()),
    }
}

async fn update_ticket(state: &AppState, id: TicketId, form: TicketForm) -> Result<Response> {
    let existing = state.repository.find(id).await?;

    let changes = match form.validate_update() {
        Ok(changes) => changes,
        Err(errors) => {
            debug!("Rejected update of ticket {id}: {errors}");
            let html = state.views.show(&existing, Some((&form, &errors)), None)?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        },
    };

    state.repository.update(id, changes).await?;
    info!("Ticket {id} updated");
    Ok(redirect_with_flash(&format!("/tickets/{id}"), "Ticket updated successfully!"))
}

async fn delete_ticket(state: &AppState, id: TicketId) -> Result<Response> {
    state.repository.delete(id).await?;
    info!("Ticket {id} deleted");
    Ok(redirect_with_flash("/tickets", "Ticket deleted successfully!"))
}
