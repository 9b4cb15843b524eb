//! Handlers for the `/camps` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use codecamp_core::camp as camp_rules;
use codecamp_core::error::CoreError;
use codecamp_db::models::camp::{Camp, CampModel};
use codecamp_db::repositories::ChangeSet;

use crate::error::{AppError, AppResult};
use crate::query::{IncludeTalksParams, SearchParams};
use crate::response::CampListResponse;
use crate::state::AppState;

/// Validate the fields of an incoming camp body.
fn validate_camp_model(model: &CampModel) -> AppResult<()> {
    camp_rules::validate_moniker(&model.moniker)?;
    camp_rules::validate_name(model.name.as_deref())?;
    camp_rules::validate_length(model.length)?;
    Ok(())
}

/// Load a camp by moniker (without talks) or fail with a 404 naming it.
async fn find_camp(state: &AppState, moniker: &str) -> AppResult<Camp> {
    state
        .camps
        .get_camp(moniker, false)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::camp_not_found(moniker)))
}

/// Persist `changes`, turning a save that touched no rows into a bare 400.
async fn save(state: &AppState, changes: ChangeSet) -> AppResult<()> {
    if state.camps.save_changes(changes).await? {
        Ok(())
    } else {
        Err(AppError::BadRequest(String::new()))
    }
}

// ---------------------------------------------------------------------------
// GET /camps
// ---------------------------------------------------------------------------

/// List every camp. An empty store is still a success.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeTalksParams>,
) -> AppResult<Json<CampListResponse>> {
    let camps = state.camps.get_all_camps(params.include_talks).await?;
    let results: Vec<CampModel> = camps.iter().map(|c| state.mapper.to_model(c)).collect();
    tracing::debug!(count = results.len(), "Listed camps");
    Ok(Json(CampListResponse::from(results)))
}

// ---------------------------------------------------------------------------
// GET /camps/{moniker}
// ---------------------------------------------------------------------------

/// A missing camp is a bare 404 here; PUT and DELETE name the moniker.
pub async fn get_by_moniker(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> AppResult<Json<CampModel>> {
    let camp = state
        .camps
        .get_camp(&moniker, false)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(state.mapper.to_model(&camp)))
}

// ---------------------------------------------------------------------------
// GET /camps/search
// ---------------------------------------------------------------------------

/// Camps on a given event date.
///
/// Unlike [`list`], an empty result is reported as a bare 404. A request
/// without `theDate` matches nothing and gets the same answer.
pub async fn search_by_date(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<CampModel>>> {
    let Some(raw_date) = params.the_date.as_deref() else {
        return Err(AppError::NotFound);
    };
    let date = camp_rules::parse_event_date(raw_date)?;
    let camps = state
        .camps
        .get_camps_by_event_date(date, params.include_talks)
        .await?;

    if camps.is_empty() {
        return Err(AppError::NotFound);
    }

    tracing::debug!(%date, count = camps.len(), "Searched camps by date");
    Ok(Json(camps.iter().map(|c| state.mapper.to_model(c)).collect()))
}

// ---------------------------------------------------------------------------
// POST /camps
// ---------------------------------------------------------------------------

/// Create a camp, answering 201 with its `Location`.
///
/// The moniker check is not atomic with the insert; a concurrent duplicate
/// is caught by the store's unique constraint and surfaces as a 500.
pub async fn create(
    State(state): State<AppState>,
    Json(model): Json<CampModel>,
) -> AppResult<impl IntoResponse> {
    validate_camp_model(&model)?;

    if state.camps.get_camp(&model.moniker, false).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Moniker in use".to_string(),
        )));
    }

    let location = state
        .links
        .camp_path(&model.moniker)
        .ok_or_else(|| AppError::BadRequest("Could not use current moniker".to_string()))?;

    let camp = state.mapper.to_entity(&model);
    let created = state.mapper.to_model(&camp);

    let mut changes = ChangeSet::new();
    changes.add(camp);
    save(&state, changes).await?;

    tracing::info!(moniker = %created.moniker, %location, "Camp created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

// ---------------------------------------------------------------------------
// PUT /camps/{moniker}
// ---------------------------------------------------------------------------

/// Overlay the body onto an existing camp.
///
/// A body that changes nothing stages no write, so the save affects no
/// rows and the request is answered with 400.
pub async fn update(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Json(model): Json<CampModel>,
) -> AppResult<Json<CampModel>> {
    validate_camp_model(&model)?;

    let existing = find_camp(&state, &moniker).await?;
    let mut camp = existing.clone();
    state.mapper.apply(&model, &mut camp);
    let updated = state.mapper.to_model(&camp);

    let mut changes = ChangeSet::new();
    if camp != existing {
        changes.modify(camp);
    }
    save(&state, changes).await?;

    tracing::info!(%moniker, new_moniker = %updated.moniker, "Camp updated");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /camps/{moniker}
// ---------------------------------------------------------------------------

pub async fn delete(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> AppResult<StatusCode> {
    let camp = find_camp(&state, &moniker).await?;

    let mut changes = ChangeSet::new();
    changes.delete(camp);
    save(&state, changes).await?;

    tracing::info!(%moniker, "Camp deleted");
    Ok(StatusCode::OK)
}
