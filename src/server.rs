use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::balances::PointBalance;
use crate::catalog::sweet_spots::{filter_sweet_spots, SpotSort};
use crate::catalog::{CabinClass, Catalog, LoyaltyProgram, Region, SweetSpot};
use crate::config::Config;
use crate::engine::cache;
use crate::engine::matcher::award_opportunities;
use crate::engine::positioning::positioning_options;
use crate::engine::resolver::resolve_accessible_programs;
use crate::engine::summary::summarize;
use crate::engine::{
    available_destinations, AccessibleProgram, AwardOpportunity, OpportunitySummary,
    PositioningOption,
};

#[derive(Clone)]
struct ApiState {
    config: Config,
    catalog: Arc<Catalog>,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Clone, Deserialize)]
struct BalanceInput {
    program: String,
    points: u64,
}

/// Shared request context: balances replace the configured ones when given;
/// destination and home airport fall back to the configured profile.
#[derive(Debug, Clone, Default, Deserialize)]
struct ExploreContextRequest {
    balances: Option<Vec<BalanceInput>>,
    destination: Option<String>,
    home_airport: Option<String>,
}

#[derive(Debug, Clone)]
struct EffectiveContext {
    balances: Vec<PointBalance>,
    destination: Option<String>,
    home_airport: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ProgramsRequest {
    #[serde(flatten)]
    context: ExploreContextRequest,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct OpportunitiesRequest {
    #[serde(flatten)]
    context: ExploreContextRequest,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct PositioningRequest {
    #[serde(flatten)]
    context: ExploreContextRequest,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct SummaryRequest {
    #[serde(flatten)]
    context: ExploreContextRequest,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ExploreRequest {
    #[serde(flatten)]
    context: ExploreContextRequest,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct SweetSpotQuery {
    cabin: Option<String>,
    region: Option<String>,
    sort: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct ProgramsResponse {
    programs: Vec<AccessibleProgram>,
}

#[derive(Debug, Serialize)]
struct OpportunitiesResponse {
    opportunities: Vec<AwardOpportunity>,
}

#[derive(Debug, Serialize)]
struct PositioningResponse {
    options: Vec<PositioningOption>,
}

#[derive(Debug, Serialize)]
struct SummaryResponse {
    summary: OpportunitySummary,
}

#[derive(Debug, Serialize)]
struct ExploreResponse {
    opportunities: Vec<AwardOpportunity>,
    positioning: Vec<PositioningOption>,
    summary: OpportunitySummary,
    available_destinations: Vec<String>,
}

pub async fn run_server(config: Config, catalog: Catalog, bind: SocketAddr) -> Result<()> {
    let state = ApiState {
        config,
        catalog: Arc::new(catalog),
    };
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/v1/catalog/programs", get(catalog_programs))
        .route("/v1/catalog/sweet-spots", get(catalog_sweet_spots))
        .route("/v1/catalog/regions", get(catalog_regions))
        .route("/v1/programs", post(programs))
        .route("/v1/opportunities", post(opportunities))
        .route("/v1/positioning", post(positioning))
        .route("/v1/summary", post(summary))
        .route("/v1/explore", post(explore))
        .route("/v1/config", get(show_config))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("REST API listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn show_config(State(state): State<ApiState>) -> Json<ApiResponse<Config>> {
    ok(state.config)
}

async fn catalog_programs(State(state): State<ApiState>) -> Json<ApiResponse<Vec<LoyaltyProgram>>> {
    ok(state.catalog.programs().to_vec())
}

async fn catalog_sweet_spots(
    State(state): State<ApiState>,
    Query(query): Query<SweetSpotQuery>,
) -> ApiResult<Vec<SweetSpot>> {
    let cabin = query
        .cabin
        .as_deref()
        .map(CabinClass::from_str)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let sort = query
        .sort
        .as_deref()
        .map(SpotSort::from_str)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?
        .unwrap_or_default();
    Ok(ok(filter_sweet_spots(
        state.catalog.sweet_spots(),
        cabin,
        query.region.as_deref(),
        sort,
    )))
}

async fn catalog_regions(State(state): State<ApiState>) -> Json<ApiResponse<Vec<Region>>> {
    ok(state.catalog.regions().to_vec())
}

async fn programs(
    State(state): State<ApiState>,
    Json(request): Json<ProgramsRequest>,
) -> Json<ApiResponse<ProgramsResponse>> {
    let effective = resolve_effective_context(&state, &request.context);
    let programs = resolve_accessible_programs(&state.catalog, &effective.balances);
    ok(ProgramsResponse { programs })
}

async fn opportunities(
    State(state): State<ApiState>,
    Json(request): Json<OpportunitiesRequest>,
) -> Json<ApiResponse<OpportunitiesResponse>> {
    let effective = resolve_effective_context(&state, &request.context);
    let opportunities = cached_opportunities(&state.catalog, &effective);
    ok(OpportunitiesResponse { opportunities })
}

async fn positioning(
    State(state): State<ApiState>,
    Json(request): Json<PositioningRequest>,
) -> Json<ApiResponse<PositioningResponse>> {
    let effective = resolve_effective_context(&state, &request.context);
    let options = positioning_for_context(&state.catalog, &effective);
    ok(PositioningResponse { options })
}

async fn summary(
    State(state): State<ApiState>,
    Json(request): Json<SummaryRequest>,
) -> Json<ApiResponse<SummaryResponse>> {
    let effective = resolve_effective_context(&state, &request.context);
    let opportunities = cached_opportunities(&state.catalog, &effective);
    ok(SummaryResponse {
        summary: summarize(&opportunities),
    })
}

async fn explore(
    State(state): State<ApiState>,
    Json(request): Json<ExploreRequest>,
) -> Json<ApiResponse<ExploreResponse>> {
    let effective = resolve_effective_context(&state, &request.context);
    let opportunities = cached_opportunities(&state.catalog, &effective);
    let positioning = positioning_for_context(&state.catalog, &effective);
    let summary = summarize(&opportunities);
    let destinations = available_destinations(&state.catalog, &effective.balances);
    ok(ExploreResponse {
        opportunities,
        positioning,
        summary,
        available_destinations: destinations,
    })
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}

fn resolve_effective_context(state: &ApiState, context: &ExploreContextRequest) -> EffectiveContext {
    let balances = match &context.balances {
        Some(inputs) => inputs
            .iter()
            .map(|input| PointBalance::new(input.program.clone(), input.points))
            .collect(),
        None => state.config.point_balances(),
    };
    let destination = context
        .destination
        .clone()
        .or_else(|| {
            let configured = state.config.profile.default_destination.clone();
            (!configured.is_empty()).then_some(configured)
        })
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    let home_airport = context
        .home_airport
        .clone()
        .unwrap_or_else(|| state.config.profile.home_airport.clone())
        .trim()
        .to_ascii_uppercase();

    EffectiveContext {
        balances,
        destination,
        home_airport,
    }
}

fn cached_opportunities(catalog: &Catalog, effective: &EffectiveContext) -> Vec<AwardOpportunity> {
    let key = cache::fingerprint(&effective.balances, effective.destination.as_deref());
    if let Some(hit) = cache::get(&key) {
        return hit;
    }
    let opportunities =
        award_opportunities(catalog, &effective.balances, effective.destination.as_deref());
    cache::put(key, opportunities.clone());
    opportunities
}

/// Positioning is only computed when both a home airport and a destination
/// are set; otherwise the response is an empty list, matching why the
/// suggestions stay hidden in a client.
fn positioning_for_context(
    catalog: &Catalog,
    effective: &EffectiveContext,
) -> Vec<PositioningOption> {
    let Some(destination) = effective.destination.as_deref() else {
        return Vec::new();
    };
    if effective.home_airport.is_empty() {
        return Vec::new();
    }
    let opportunities = cached_opportunities(catalog, effective);
    positioning_options(catalog, &effective.home_airport, &opportunities, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(config: Config) -> ApiState {
        ApiState {
            config,
            catalog: Arc::new(Catalog::builtin()),
        }
    }

    #[test]
    fn request_balances_replace_configured_ones() {
        let mut config = Config::default();
        config.balances = vec![crate::config::BalanceEntry {
            program: "chase-ur".to_string(),
            points: 10_000,
        }];
        let state = state_with(config);

        let context = ExploreContextRequest {
            balances: Some(vec![BalanceInput {
                program: "bilt".to_string(),
                points: 40_000,
            }]),
            ..Default::default()
        };
        let effective = resolve_effective_context(&state, &context);
        assert_eq!(effective.balances.len(), 1);
        assert_eq!(effective.balances[0].program_id, "bilt");

        let effective = resolve_effective_context(&state, &ExploreContextRequest::default());
        assert_eq!(effective.balances[0].program_id, "chase-ur");
    }

    #[test]
    fn home_airport_is_normalized_and_falls_back_to_profile() {
        let mut config = Config::default();
        config.profile.home_airport = "bos".to_string();
        let state = state_with(config);

        let effective = resolve_effective_context(&state, &ExploreContextRequest::default());
        assert_eq!(effective.home_airport, "BOS");

        let context = ExploreContextRequest {
            home_airport: Some(" lax ".to_string()),
            ..Default::default()
        };
        let effective = resolve_effective_context(&state, &context);
        assert_eq!(effective.home_airport, "LAX");
    }

    #[test]
    fn positioning_is_gated_on_home_and_destination() {
        let state = state_with(Config::default());
        let effective = EffectiveContext {
            balances: vec![PointBalance::new("chase-ur", 80_000)],
            destination: None,
            home_airport: "BOS".to_string(),
        };
        assert!(positioning_for_context(&state.catalog, &effective).is_empty());

        let effective = EffectiveContext {
            balances: vec![PointBalance::new("chase-ur", 80_000)],
            destination: Some("Asia".to_string()),
            home_airport: String::new(),
        };
        assert!(positioning_for_context(&state.catalog, &effective).is_empty());

        let effective = EffectiveContext {
            balances: vec![PointBalance::new("chase-ur", 80_000)],
            destination: Some("Asia".to_string()),
            home_airport: "BOS".to_string(),
        };
        assert!(!positioning_for_context(&state.catalog, &effective).is_empty());
    }

    #[test]
    fn blank_destination_resolves_to_none() {
        let state = state_with(Config::default());
        let context = ExploreContextRequest {
            destination: Some("   ".to_string()),
            ..Default::default()
        };
        let effective = resolve_effective_context(&state, &context);
        assert!(effective.destination.is_none());
    }
}
