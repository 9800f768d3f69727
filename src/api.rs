//! JSON endpoints for the bracket page. Stateless: every request carries the
//! teams or the tournament it works on.

use crate::config::AppConfig;
use crate::logic::{
    generate_bracket, generate_layout, parse_score, record_result, set_match_status, Outcome,
};
use crate::models::{BracketLayout, MatchStatus, Team, TournamentData};
use crate::teams::teams_from_csv;
use actix_web::{
    get, post,
    web::{self, Data, Json, Query},
    HttpResponse, Responder,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

type AppState = Data<AppConfig>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Freshly generated bracket plus its layout.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketResponse {
    pub generated_at: DateTime<Utc>,
    pub tournament: TournamentData,
    pub layout: BracketLayout,
}

/// Bracket after a change, with a recomputed layout.
#[derive(Debug, Serialize, Deserialize)]
pub struct TournamentResponse {
    pub tournament: TournamentData,
    pub layout: BracketLayout,
}

#[derive(Deserialize)]
struct GenerateBracketBody {
    sport: String,
    #[serde(default)]
    teams: Vec<Team>,
}

#[derive(Deserialize)]
struct SportQuery {
    sport: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordResultBody {
    tournament: TournamentData,
    match_id: String,
    /// Winning slot (0 or 1); ignored when `score` is given.
    #[serde(default)]
    winner: Option<usize>,
    /// Score text, e.g. "2 x 1" or "25-20,25-22".
    #[serde(default)]
    score: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetStatusBody {
    tournament: TournamentData,
    match_id: String,
    /// Our labels or the backend's (`EM_ANDAMENTO`, `CANCELADO`, ...).
    status: String,
}

fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message.to_string() }))
}

fn unknown_sport(sport: &str) -> HttpResponse {
    bad_request(format!("Unknown sport '{}'", sport))
}

fn bracket_response(config: &AppConfig, sport: &str, teams: &[Team]) -> HttpResponse {
    let tournament = generate_bracket(teams, sport, &config.naming);
    let layout = generate_layout(&tournament, &config.layout);
    HttpResponse::Ok().json(BracketResponse {
        generated_at: Utc::now(),
        tournament,
        layout,
    })
}

fn tournament_response(config: &AppConfig, tournament: TournamentData) -> HttpResponse {
    let layout = generate_layout(&tournament, &config.layout);
    HttpResponse::Ok().json(TournamentResponse { tournament, layout })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "interclasse-bracket",
    })
}

/// Sports a bracket can be generated for.
#[get("/api/sports")]
async fn api_sports(config: AppState) -> HttpResponse {
    HttpResponse::Ok().json(&config.sports)
}

/// Generate a bracket (and its layout) for a sport from a JSON team list.
#[post("/api/bracket")]
async fn api_generate_bracket(config: AppState, body: Json<GenerateBracketBody>) -> HttpResponse {
    if !config.is_known_sport(&body.sport) {
        return unknown_sport(&body.sport);
    }
    bracket_response(&config, &body.sport, &body.teams)
}

/// Generate a bracket from a CSV team list (`?sport=futsal`).
#[post("/api/bracket/csv")]
async fn api_generate_bracket_csv(
    config: AppState,
    query: Query<SportQuery>,
    body: String,
) -> HttpResponse {
    if !config.is_known_sport(&query.sport) {
        return unknown_sport(&query.sport);
    }
    match teams_from_csv(body.as_bytes()) {
        Ok(teams) => bracket_response(&config, &query.sport, &teams),
        Err(e) => bad_request(e),
    }
}

/// Recompute the layout of a bracket the client already holds.
#[post("/api/bracket/layout")]
async fn api_layout(config: AppState, body: Json<TournamentData>) -> HttpResponse {
    HttpResponse::Ok().json(generate_layout(&body, &config.layout))
}

/// Record a match result and advance the winner.
#[post("/api/bracket/result")]
async fn api_record_result(config: AppState, body: Json<RecordResultBody>) -> HttpResponse {
    let body = body.into_inner();
    let outcome = match (&body.score, body.winner) {
        (Some(score), _) => parse_score(score).map(Outcome::Score),
        (None, Some(slot)) => Outcome::winner_index(slot),
        (None, None) => return bad_request("Either winner or score is required"),
    };
    let mut tournament = body.tournament;
    match outcome.and_then(|o| record_result(&mut tournament, &body.match_id, o)) {
        Ok(()) => tournament_response(&config, tournament),
        Err(e) => bad_request(e),
    }
}

/// Mark a match live, upcoming, or postponed.
#[post("/api/bracket/status")]
async fn api_set_status(config: AppState, body: Json<SetStatusBody>) -> HttpResponse {
    let body = body.into_inner();
    let status: MatchStatus = match body.status.parse() {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    let mut tournament = body.tournament;
    match set_match_status(&mut tournament, &body.match_id, status) {
        Ok(()) => tournament_response(&config, tournament),
        Err(e) => bad_request(e),
    }
}

/// Register every endpoint. Expects an [`AppConfig`] in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_sports)
        .service(api_generate_bracket)
        .service(api_generate_bracket_csv)
        .service(api_layout)
        .service(api_record_result)
        .service(api_set_status);
}
