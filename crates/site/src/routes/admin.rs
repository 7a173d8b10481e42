//! Admin login and dashboard handlers.
//!
//! Access is gated by the `adminLoggedIn` session flag, set by a successful
//! login with the configured username and password.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use aris_farm_core::{
    CSV_FILENAME, Cart, PreferenceCounts, Registration, Statistics, export_csv as render_csv,
    preference_label,
};

use super::with_store;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::session;
use crate::state::AppState;

const NOT_SPECIFIED: &str = "Not specified";

/// Login form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub error: Option<&'static str>,
}

/// One preference bar on the dashboard.
pub struct BarView {
    pub label: String,
    pub count: usize,
    pub percent: String,
}

fn bars(counts: &PreferenceCounts, stats: &Statistics) -> Vec<BarView> {
    counts
        .iter()
        .map(|(value, count)| BarView {
            label: preference_label(value).to_string(),
            count,
            percent: format!("{:.1}%", stats.percent_of_registrations(count)),
        })
        .collect()
}

/// One row of the registrations table.
pub struct RegistrationRow {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub attendees: String,
    pub meal: String,
    pub beverage: String,
    pub accessibility: String,
    pub date: String,
    pub confirmation_id: String,
}

fn label_or_not_specified(value: &str) -> String {
    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        preference_label(value).to_string()
    }
}

impl From<&Registration> for RegistrationRow {
    fn from(reg: &Registration) -> Self {
        let noun = if reg.attendees == 1 { "person" } else { "people" };
        Self {
            full_name: reg.full_name.clone(),
            email: reg.email.clone(),
            phone: reg.phone.clone(),
            attendees: format!("{} {noun}", reg.attendees),
            meal: label_or_not_specified(&reg.meal_preference),
            beverage: label_or_not_specified(&reg.beverage_preference),
            accessibility: reg.accessibility.clone(),
            date: reg.timestamp.format("%Y-%m-%d").to_string(),
            confirmation_id: reg.confirmation_id.to_string(),
        }
    }
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub stats: Statistics,
    pub meal_bars: Vec<BarView>,
    pub beverage_bars: Vec<BarView>,
    pub rows: Vec<RegistrationRow>,
    pub selection: Cart,
    pub default_password: bool,
}

/// Show the login page, or go straight to the dashboard if already logged in.
#[instrument(skip(session))]
pub async fn login_page(session: Session) -> Response {
    if session::is_admin(&session).await {
        return Redirect::to("/admin/dashboard").into_response();
    }
    LoginTemplate {
        username: String::new(),
        error: None,
    }
    .into_response()
}

/// Check the submitted credentials.
#[instrument(skip(state, session, form), fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if !state.config().admin.verify(&form.username, &form.password) {
        tracing::warn!("Dashboard login failed");
        let page = LoginTemplate {
            username: form.username,
            error: Some("Invalid credentials"),
        };
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    }

    session::set_admin(&session).await?;
    add_breadcrumb("auth", "Dashboard login", None);
    tracing::info!("Dashboard login");
    Ok(Redirect::to("/admin/dashboard").into_response())
}

/// Log out and return to the login page.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = session::clear_admin(&session).await {
        tracing::warn!("Failed to clear dashboard login: {e}");
    }
    Redirect::to("/admin")
}

/// Registration statistics, the full registrations table and the last saved
/// drink selection.
#[instrument(skip(state, _admin))]
pub async fn dashboard(_admin: RequireAdmin, State(state): State<AppState>) -> Result<Response> {
    let (registrations, selection) = with_store(&state, |store| {
        (store.list_registrations(), store.saved_selection())
    })
    .await?;

    let stats = Statistics::compute(&registrations);
    Ok(DashboardTemplate {
        meal_bars: bars(&stats.meal_stats, &stats),
        beverage_bars: bars(&stats.beverage_stats, &stats),
        rows: registrations.iter().map(RegistrationRow::from).collect(),
        selection,
        default_password: state.config().admin.uses_default_password(),
        stats,
    }
    .into_response())
}

/// Download every registration as CSV.
///
/// # Errors
///
/// Returns 500 if the CSV cannot be produced.
#[instrument(skip(state, _admin))]
pub async fn export_csv(_admin: RequireAdmin, State(state): State<AppState>) -> Result<Response> {
    let registrations = with_store(&state, |store| store.list_registrations()).await?;
    let csv = render_csv(&registrations)?;
    tracing::info!(rows = registrations.len(), "Registrations exported");

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
