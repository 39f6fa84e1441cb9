// Axum API server module
//
// Serves language metadata, localized form descriptions and advice bundles
// (JSON or printable HTML) over HTTP. The advisor is immutable and shared.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::AdvisorError;
use crate::formatters::HtmlFormatter;
use crate::resolver::{AdviceBundle, Advisor};
use crate::selection::{LanguageCode, SelectionField, SelectionForm};
use crate::tables::OptionLabel;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<Advisor>,
    /// Pause before advice is returned; zero disables it
    pub result_delay: Duration,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let advisor = match &config.data_dir {
            Some(dir) => {
                tracing::info!("Loading advisory tables from {}", dir.display());
                Advisor::from_dir(dir)?
            }
            None => {
                tracing::info!("Loading bundled advisory tables...");
                Advisor::bundled()?
            }
        };

        Ok(Self::with_advisor(advisor, config.result_delay))
    }

    pub fn with_advisor(advisor: Advisor, result_delay: Duration) -> Self {
        Self {
            advisor: Arc::new(advisor),
            result_delay,
        }
    }
}

// ============================================================================
// Router Setup
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Language and form metadata
        .route("/api/languages", get(list_languages))
        .route("/api/languages/:lang/form", get(get_form))

        // Advice endpoints
        .route("/api/advice", post(get_advice))
        .route("/api/advice/print", post(print_advice))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Advice request body: a language plus the raw form fields
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    /// Absent means English
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(flatten)]
    pub form: SelectionForm,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: LanguageCode,
    pub native_name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormField {
    pub field: SelectionField,
    pub icon: &'static str,
    pub label: String,
    pub options: Vec<OptionLabel>,
}

/// Everything a client needs to render the selection form in one language
#[derive(Debug, Serialize)]
pub struct FormDescription {
    pub lang: LanguageCode,
    pub title: String,
    pub subtitle: String,
    pub form_title: String,
    pub form_subtitle: String,
    pub placeholder: String,
    pub submit_text: String,
    pub loading_text: String,
    pub fields: Vec<FormField>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_languages() -> Json<Vec<LanguageInfo>> {
    let languages = LanguageCode::ALL
        .iter()
        .map(|&code| LanguageInfo {
            code,
            native_name: code.native_name(),
        })
        .collect();
    Json(languages)
}

async fn get_form(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<FormDescription>, AppError> {
    let lang = LanguageCode::from_str(&lang)?;
    let advisor = &state.advisor;
    let text = |key: &str| advisor.ui_text(lang, key).to_string();

    let fields = SelectionField::ALL
        .iter()
        .map(|&field| FormField {
            field,
            icon: field.icon(),
            label: advisor.field_label(lang, field).to_string(),
            options: match field {
                SelectionField::Crop => advisor.crop_options(lang),
                _ => advisor.option_labels(lang, field),
            },
        })
        .collect();

    Ok(Json(FormDescription {
        lang,
        title: text("appTitle"),
        subtitle: text("appSubtitle"),
        form_title: text("formTitle"),
        form_subtitle: text("formSubtitle"),
        placeholder: text("cropPlaceholder"),
        submit_text: text("submitText"),
        loading_text: text("loadingText"),
        fields,
    }))
}

async fn get_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceBundle>, AppError> {
    let (_, bundle) = resolve_request(&state, &request).await?;
    Ok(Json(bundle))
}

async fn print_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Html<String>, AppError> {
    let (lang, bundle) = resolve_request(&state, &request).await?;
    let labels = state.advisor.report_labels(lang);
    let page = HtmlFormatter::format(&bundle, &labels, lang.as_str())
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))?;
    Ok(Html(page))
}

/// Validate the request, resolve it and hold the result for the configured delay.
/// Dropping the request future cancels the pending sleep.
async fn resolve_request(
    state: &AppState,
    request: &AdviceRequest,
) -> Result<(LanguageCode, AdviceBundle), AppError> {
    let lang = match &request.lang {
        Some(code) => LanguageCode::from_str(code)?,
        None => {
            tracing::debug!("Advice request without lang, using {}", LanguageCode::FALLBACK);
            LanguageCode::FALLBACK
        }
    };

    let bundle = state
        .advisor
        .submit(&request.form, lang)
        .map_err(|err| match err {
            AdvisorError::IncompleteSelection { missing } => AppError::Incomplete {
                message: state.advisor.incomplete_message(lang).to_string(),
                missing,
            },
            other => AppError::from(other),
        })?;

    if !state.result_delay.is_zero() {
        tokio::time::sleep(state.result_delay).await;
    }

    Ok((lang, bundle))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    /// Form left incomplete; `message` is already localized
    Incomplete {
        message: String,
        missing: Vec<SelectionField>,
    },
    BadRequest(String),
    Internal(String),
}

impl From<AdvisorError> for AppError {
    fn from(err: AdvisorError) -> Self {
        if err.is_user_error() {
            AppError::BadRequest(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::Incomplete { message, missing } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": message,
                    "missing": missing
                }),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
