use crate::achievements::{evaluate, AchievementsResponse};
use crate::chat;
use crate::errors::AppError;
use crate::form::{DaySink, LogForm};
use crate::models::{
    ChatMessage, ChatRequest, GoalRequest, LogEntry, LogFormInput, TodayResponse,
    ValidationResponse,
};
use crate::progress::{build_progress, set_quit_date, ProgressReport};
use crate::state::AppState;
use crate::stats::{build_stats, build_stats_at, entries_on, yesterday_mg, StatsResponse};
use crate::storage::persist_data;
use crate::ui::{self, PageContext};
use crate::validation::LogDraft;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    #[serde(default)]
    pub return_to: String,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let now = now();
    let data = state.data.lock().await;
    let ctx = PageContext::new(data.settings.theme, now, "/");
    let stats = build_stats_at(now.date(), &data);
    let progress = build_progress(&data, now, state.daily_cost_cents);
    let today = entries_on(&data, now.date());
    Html(ui::render_dashboard(&ctx, &stats, &progress, today))
}

pub async fn log_form(State(state): State<AppState>) -> Html<String> {
    let now = now();
    let data = state.data.lock().await;
    let ctx = PageContext::new(data.settings.theme, now, "/log");
    let yesterday = yesterday_mg(&data, now.date());
    Html(ui::render_log_form(&ctx, &LogDraft::default(), yesterday))
}

pub async fn submit_log_form(
    State(state): State<AppState>,
    Form(input): Form<LogFormInput>,
) -> Result<Response, AppError> {
    let now = now();
    let draft = LogDraft::from_input(input)?;
    let mut form = LogForm::new(draft, state.confirm_delay);
    let mut data = state.data.lock().await;
    let ctx = PageContext::new(data.settings.theme, now, "/log");

    if !form.can_submit() {
        let yesterday = yesterday_mg(&data, now.date());
        let page = ui::render_log_form(&ctx, &form.draft, yesterday);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
    }

    let confirmation = form.submit(&mut DaySink::new(&mut data, now.date()))?;
    persist_data(&state.data_path, &data).await?;
    log_saved(&confirmation.entry);

    Ok(Html(ui::render_confirmation(&ctx, &confirmation)).into_response())
}

pub async fn insights(State(state): State<AppState>) -> Html<String> {
    let now = now();
    let data = state.data.lock().await;
    let ctx = PageContext::new(data.settings.theme, now, "/insights");
    let stats = build_stats_at(now.date(), &data);
    let progress = build_progress(&data, now, state.daily_cost_cents);
    Html(ui::render_insights(&ctx, &stats, &progress))
}

pub async fn achievements(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let ctx = PageContext::new(data.settings.theme, now(), "/achievements");
    let response = evaluate(&data, state.daily_cost_cents);
    Html(ui::render_achievements(&ctx, &response))
}

pub async fn community(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let ctx = PageContext::new(data.settings.theme, now(), "/community");
    Html(ui::render_community(&ctx, &data.messages, None))
}

pub async fn post_community(
    State(state): State<AppState>,
    Form(payload): Form<ChatRequest>,
) -> Result<Response, AppError> {
    let now = now();
    let mut data = state.data.lock().await;
    match chat::post_message(&mut data, &payload.message, now.time()) {
        Ok(message) => {
            persist_data(&state.data_path, &data).await?;
            info!(id = message.id, "community message posted");
            Ok(Redirect::to("/community").into_response())
        }
        Err(err) => {
            let ctx = PageContext::new(data.settings.theme, now, "/community");
            let page = ui::render_community(&ctx, &data.messages, Some(err.to_string().as_str()));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
    }
}

pub async fn like_community(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    apply_like(&state, id).await?;
    Ok(Redirect::to("/community"))
}

pub async fn set_goal(
    State(state): State<AppState>,
    Form(payload): Form<GoalRequest>,
) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    let quit_date = set_quit_date(&mut data, &payload.quit_date, now().date())?;
    persist_data(&state.data_path, &data).await?;
    info!(%quit_date, "quit date set");

    Ok(Redirect::to("/"))
}

pub async fn toggle_theme(
    State(state): State<AppState>,
    Form(payload): Form<ThemeRequest>,
) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    data.settings.theme = data.settings.theme.toggle();
    persist_data(&state.data_path, &data).await?;
    info!(theme = data.settings.theme.as_str(), "theme changed");

    Ok(Redirect::to(safe_return_path(&payload.return_to)))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let today = now().date();
    let data = state.data.lock().await;

    Ok(Json(TodayResponse {
        date: today.to_string(),
        entries: entries_on(&data, today).to_vec(),
        yesterday_mg: yesterday_mg(&data, today),
    }))
}

pub async fn create_log(
    State(state): State<AppState>,
    Json(input): Json<LogFormInput>,
) -> Result<(StatusCode, Json<LogEntry>), AppError> {
    let today = now().date();
    let mut form = LogForm::new(LogDraft::from_input(input)?, state.confirm_delay);
    let mut data = state.data.lock().await;

    let confirmation = form.submit(&mut DaySink::new(&mut data, today))?;
    persist_data(&state.data_path, &data).await?;
    log_saved(&confirmation.entry);

    Ok((StatusCode::CREATED, Json(confirmation.entry)))
}

pub async fn validate_log(
    Json(input): Json<LogFormInput>,
) -> Result<Json<ValidationResponse>, AppError> {
    let draft = LogDraft::from_input(input)?;
    Ok(Json(ValidationResponse {
        valid: draft.is_valid(),
        message: draft.validation_message(),
        amount_required: draft.amount_required(),
        placeholder: draft.amount_placeholder().to_string(),
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_stats(&data)))
}

pub async fn get_achievements(
    State(state): State<AppState>,
) -> Result<Json<AchievementsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(evaluate(&data, state.daily_cost_cents)))
}

pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ProgressReport>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_progress(&data, now(), state.daily_cost_cents)))
}

pub async fn update_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<ProgressReport>, AppError> {
    let now = now();
    let mut data = state.data.lock().await;
    let quit_date = set_quit_date(&mut data, &payload.quit_date, now.date())?;
    persist_data(&state.data_path, &data).await?;
    info!(%quit_date, "quit date set");

    Ok(Json(build_progress(&data, now, state.daily_cost_cents)))
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.messages.clone()))
}

pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), AppError> {
    let mut data = state.data.lock().await;
    let message = chat::post_message(&mut data, &payload.message, now().time())?;
    persist_data(&state.data_path, &data).await?;
    info!(id = message.id, "community message posted");

    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn like_message(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ChatMessage>, AppError> {
    Ok(Json(apply_like(&state, id).await?))
}

async fn apply_like(state: &AppState, id: u64) -> Result<ChatMessage, AppError> {
    let mut data = state.data.lock().await;
    let message = chat::like(&mut data, id)
        .ok_or_else(|| AppError::not_found(format!("no message with id {id}")))?;
    persist_data(&state.data_path, &data).await?;
    Ok(message)
}

fn log_saved(entry: &LogEntry) {
    info!(
        mood = entry.mood.as_str(),
        craving = entry.craving_level.as_str(),
        product = entry.nicotine_product.map(|p| p.as_str()).unwrap_or("none"),
        "log entry saved"
    );
}

/// Only same-site absolute paths are followed after a theme switch.
fn safe_return_path(path: &str) -> &str {
    if path.starts_with('/') && !path.starts_with("//") {
        path
    } else {
        "/"
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
