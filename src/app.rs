use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/log", get(handlers::log_form).post(handlers::submit_log_form))
        .route("/insights", get(handlers::insights))
        .route("/achievements", get(handlers::achievements))
        .route("/community", get(handlers::community).post(handlers::post_community))
        .route("/community/:id/like", post(handlers::like_community))
        .route("/goal", post(handlers::set_goal))
        .route("/theme", post(handlers::toggle_theme))
        .route("/api/today", get(handlers::get_today))
        .route("/api/logs", post(handlers::create_log))
        .route("/api/validate", post(handlers::validate_log))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/achievements", get(handlers::get_achievements))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/goal", post(handlers::update_goal))
        .route("/api/messages", get(handlers::list_messages).post(handlers::create_message))
        .route("/api/messages/:id/like", post(handlers::like_message))
        .with_state(state)
}
