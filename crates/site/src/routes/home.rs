//! Landing page, countdown and RSVP handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use aris_farm_core::{
    BEVERAGE_OPTIONS, Countdown, MEAL_OPTIONS, PreferenceOption, Registration, RegistrationDraft,
};

use super::{is_htmx, with_store};
use crate::content::{
    CONTACT, Contact, EventWhen, HIGHLIGHTS, Highlight, SCHEDULE, ScheduleItem, VENUE, VENUE_AREA,
};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// RSVP form fields as posted.
///
/// Every field is a string so that a half-filled form still deserializes and
/// can be re-rendered with a message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RsvpForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub attendees: String,
    pub accessibility: String,
    pub meal_preference: String,
    pub beverage_preference: String,
}

impl RsvpForm {
    /// Value for the attendees input, `1` when left blank.
    #[must_use]
    pub fn attendees_value(&self) -> &str {
        let value = self.attendees.trim();
        if value.is_empty() { "1" } else { value }
    }

    /// Convert to a draft, enforcing the form's constraints.
    ///
    /// # Errors
    ///
    /// Returns a message for the guest if a constraint is violated.
    pub fn to_draft(&self) -> std::result::Result<RegistrationDraft, String> {
        let attendees = self
            .attendees_value()
            .parse::<u32>()
            .map_err(|_| "Number of attendees must be a whole number.".to_string())?;

        let draft = RegistrationDraft {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            attendees,
            accessibility: self.accessibility.trim().to_string(),
            meal_preference: self.meal_preference.clone(),
            beverage_preference: self.beverage_preference.clone(),
        };
        draft
            .validate()
            .map_err(|e| format!("Please check your details: {e}."))?;
        Ok(draft)
    }
}

/// State of the RSVP card: the form (possibly with an error) or a confirmation.
pub struct RsvpView {
    pub form: RsvpForm,
    pub error: Option<String>,
    pub confirmed: Option<Registration>,
    pub meal_options: &'static [PreferenceOption],
    pub beverage_options: &'static [PreferenceOption],
}

impl RsvpView {
    fn blank() -> Self {
        Self::with_form(RsvpForm::default())
    }

    fn with_form(form: RsvpForm) -> Self {
        Self {
            form,
            error: None,
            confirmed: None,
            meal_options: MEAL_OPTIONS,
            beverage_options: BEVERAGE_OPTIONS,
        }
    }

    fn invalid(form: RsvpForm, message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::with_form(form)
        }
    }

    fn confirmed(registration: Registration) -> Self {
        Self {
            confirmed: Some(registration),
            ..Self::blank()
        }
    }
}

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub when: EventWhen,
    pub venue: &'static str,
    pub venue_area: &'static str,
    pub countdown: Countdown,
    pub schedule: &'static [ScheduleItem],
    pub highlights: &'static [Highlight],
    pub contact: Contact,
    pub rsvp: RsvpView,
}

impl HomeTemplate {
    fn new(state: &AppState, rsvp: RsvpView) -> Self {
        let starts_at = state.config().event_starts_at;
        Self {
            when: EventWhen::from_start(&starts_at),
            venue: VENUE,
            venue_area: VENUE_AREA,
            countdown: Countdown::until(&starts_at, &Utc::now()),
            schedule: SCHEDULE,
            highlights: HIGHLIGHTS,
            contact: CONTACT,
            rsvp,
        }
    }
}

/// Countdown fragment template (for HTMX polling).
#[derive(Template, WebTemplate)]
#[template(path = "partials/countdown.html")]
pub struct CountdownTemplate {
    pub countdown: Countdown,
}

/// RSVP card fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/rsvp.html")]
pub struct RsvpTemplate {
    pub rsvp: RsvpView,
}

/// Display the landing page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate::new(&state, RsvpView::blank())
}

/// Time left until the event (HTMX, polled every second).
#[instrument(skip(state))]
pub async fn countdown(State(state): State<AppState>) -> impl IntoResponse {
    CountdownTemplate {
        countdown: Countdown::until(&state.config().event_starts_at, &Utc::now()),
    }
}

/// Submit an RSVP.
///
/// Invalid submissions are answered with 400 and the form re-rendered with a
/// message; nothing is stored. Valid ones are appended and the persisted
/// confirmation ID is shown.
#[instrument(skip(state, headers, form))]
pub async fn rsvp(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<RsvpForm>,
) -> Result<Response> {
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(message) => {
            tracing::info!(reason = %message, "RSVP rejected");
            let page = render_rsvp(&state, &headers, RsvpView::invalid(form, message));
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    add_breadcrumb("rsvp", "Registration submitted", None);
    let registration = with_store(&state, move |store| store.append_registration(draft)).await??;

    Ok(render_rsvp(
        &state,
        &headers,
        RsvpView::confirmed(registration),
    ))
}

/// HTMX requests get the RSVP card alone; plain form posts get the whole page.
fn render_rsvp(state: &AppState, headers: &HeaderMap, rsvp: RsvpView) -> Response {
    if is_htmx(headers) {
        RsvpTemplate { rsvp }.into_response()
    } else {
        HomeTemplate::new(state, rsvp).into_response()
    }
}
