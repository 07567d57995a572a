use crate::calendar::{week_dates, DAY_LABELS, MONTH_LABELS, PREFERRED_DAYS};
use crate::completions::CompletionStore;
use crate::errors::AppError;
use crate::models::{
    ConfigResponse, DateKey, DateRequest, NavigateRequest, StatsResponse, ToggleResponse,
    ViewMode, ViewModeRequest, ViewResponse,
};
use crate::navigation;
use crate::state::AppState;
use crate::stats::{week_completion_count, WEEKLY_GOAL};
use crate::view::{build_stats, build_view};
use axum::{extract::State, Json};
use tracing::{info, warn};

pub async fn get_config() -> Json<ConfigResponse> {
    let preferred_days = PREFERRED_DAYS
        .iter()
        .map(|day| DAY_LABELS[day.num_days_from_monday() as usize])
        .collect();

    Json(ConfigResponse {
        day_labels: DAY_LABELS,
        month_labels: MONTH_LABELS,
        preferred_days,
        weekly_goal: WEEKLY_GOAL,
    })
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let tracker = state.tracker.lock().await;
    Json(build_view(&tracker))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let tracker = state.tracker.lock().await;
    Json(build_stats(&tracker))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<DateRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let key = parse_key(&payload.date)?;
    let mut tracker = state.tracker.lock().await;
    let completed = tracker.toggle(key);
    let week_count = week_completion_count(tracker.completions(), &week_dates(key.date()));
    info!(date = %key, completed, week_count, "toggled workout day");

    Ok(Json(ToggleResponse {
        date: key.to_string(),
        completed,
        week_completion_count: week_count,
    }))
}

pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    match payload.action.trim() {
        "previous" => tracker.previous(),
        "next" => tracker.next(),
        "today" => tracker.go_to_today(navigation::today()),
        other => {
            warn!(action = other, "rejected navigation action");
            return Err(AppError::bad_request(
                "action must be 'previous', 'next' or 'today'",
            ));
        }
    }
    info!(reference_date = %tracker.reference_date(), "navigated");

    Ok(Json(build_view(&tracker)))
}

pub async fn set_view_mode(
    State(state): State<AppState>,
    Json(payload): Json<ViewModeRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let Some(mode) = ViewMode::parse(&payload.mode) else {
        warn!(mode = %payload.mode, "rejected view mode");
        return Err(AppError::bad_request("mode must be 'week' or 'month'"));
    };

    let mut tracker = state.tracker.lock().await;
    tracker.set_view_mode(mode);
    info!(?mode, "switched view mode");

    Ok(Json(build_view(&tracker)))
}

pub async fn set_reference_date(
    State(state): State<AppState>,
    Json(payload): Json<DateRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let key = parse_key(&payload.date)?;
    let mut tracker = state.tracker.lock().await;
    tracker.set_reference_date(key.date());
    info!(reference_date = %key, "set reference date");

    Ok(Json(build_view(&tracker)))
}

pub async fn export_completions(State(state): State<AppState>) -> Json<CompletionStore> {
    let tracker = state.tracker.lock().await;
    Json(tracker.completions().clone())
}

pub async fn restore_completions(
    State(state): State<AppState>,
    Json(completions): Json<CompletionStore>,
) -> Json<StatsResponse> {
    let mut tracker = state.tracker.lock().await;
    info!(days = completions.completed_count(), "restored completions");
    tracker.replace_completions(completions);
    Json(build_stats(&tracker))
}

fn parse_key(raw: &str) -> Result<DateKey, AppError> {
    raw.parse::<DateKey>().map_err(|err| {
        warn!(date = raw, "rejected date key");
        AppError::from(err)
    })
}
