use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse,
    },
    Form, Json,
};
use chrono::Utc;
use serde::Deserialize;
use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

use super::{AppState, ROLES_STREAM_PATH};
use crate::config::ContactConfig;
use crate::effects::{ProjectFilter, Typewriter, TypewriterCycler};
use crate::models::*;
use crate::render::{render_page, ContactBanner, ContactForm, PageState};

const CONTACT_SUCCESS: &str = "Message sent successfully! I'll get back to you soon.";

// ============================================================
// Error Handling
// ============================================================

fn not_found(what: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("{} not found", what))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Page
// ============================================================

/// Tab and modal selection carried in the page URL.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub category: Option<String>,
    pub skills: Option<String>,
    pub project: Option<u32>,
}

fn page_state<'a>(state: &'a AppState, query: &PageQuery) -> PageState<'a> {
    let mut page = PageState::new(&state.portfolio, &state.config)
        .with_filter(ProjectFilter::from_query(query.category.as_deref()))
        .with_selected_project(query.project)
        .with_roles_stream(ROLES_STREAM_PATH);
    if let Some(skills) = query.skills.as_deref() {
        page = page.with_skills_tab(skills);
    }
    page
}

pub async fn page(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    Html(render_page(&page_state(&state, &query)))
}

// ============================================================
// Content
// ============================================================

pub async fn get_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub category: Option<String>,
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Json<Vec<Project>> {
    let filter = ProjectFilter::from_query(query.category.as_deref());
    Json(filter.apply(&state.portfolio.projects).into_iter().cloned().collect())
}

pub async fn list_project_categories(State(state): State<AppState>) -> Json<Vec<CategoryTab>> {
    Json(state.portfolio.project_categories.clone())
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Project>, (StatusCode, String)> {
    state
        .portfolio
        .project(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Project"))
}

pub async fn get_skill_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<SkillCategory>, (StatusCode, String)> {
    state
        .portfolio
        .skill_category(&category)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Skill category"))
}

// ============================================================
// Hero typewriter
// ============================================================

/// Stream typewriter frames as `frame` events. Each connection runs its own
/// cycle, cancelled when the client disconnects.
pub async fn stream_roles(
    State(state): State<AppState>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, (StatusCode, String)> {
    let typewriter = Typewriter::new(&state.portfolio.profile.roles, state.config.typewriter)
        .ok_or_else(|| not_found("Roles"))?;

    tracing::debug!("Starting typewriter stream");
    let events = TypewriterCycler::start(typewriter)
        .into_stream()
        .map(|frame| Event::default().event("frame").json_data(frame));

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

// ============================================================
// Contact
// ============================================================

/// Simulate sending a contact message: wait, then acknowledge.
///
/// Nothing is delivered or stored. Blank required fields are rejected before
/// the wait.
async fn simulate_submission(
    config: &ContactConfig,
    message: &ContactMessage,
) -> Result<ContactReceipt, Vec<&'static str>> {
    let missing = message.missing_fields();
    if !missing.is_empty() {
        tracing::warn!("Rejected contact submission, missing: {}", missing.join(", "));
        return Err(missing);
    }

    tokio::time::sleep(config.simulated_delay()).await;

    let receipt = ContactReceipt {
        id: Uuid::new_v4(),
        received_at: Utc::now(),
        message: CONTACT_SUCCESS.to_string(),
    };
    tracing::info!("Simulated contact submission {}", receipt.id);
    Ok(receipt)
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<ContactReceipt>, (StatusCode, String)> {
    simulate_submission(&state.config.contact, &message)
        .await
        .map(Json)
        .map_err(|missing| {
            (
                StatusCode::BAD_REQUEST,
                format!("Missing required fields: {}", missing.join(", ")),
            )
        })
}

/// HTML form submission. Re-renders the page with the outcome banner.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Form(message): Form<ContactMessage>,
) -> (StatusCode, Html<String>) {
    let (status, form) = match simulate_submission(&state.config.contact, &message).await {
        Ok(_) => (
            StatusCode::OK,
            ContactForm {
                values: ContactMessage::default(),
                banner: ContactBanner::Sent,
            },
        ),
        Err(missing) => (
            StatusCode::BAD_REQUEST,
            ContactForm {
                banner: ContactBanner::Missing(missing.iter().map(|f| f.to_string()).collect()),
                values: message,
            },
        ),
    };

    let page = page_state(&state, &PageQuery::default()).with_contact(form);
    (status, Html(render_page(&page)))
}
