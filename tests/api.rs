//! HTTP tests for the bracket endpoints.

use actix_web::{http::StatusCode, test, web::Data, App};
use interclasse_bracket::api::{self, BracketResponse, TournamentResponse};
use interclasse_bracket::{generate_bracket, AppConfig, MatchStatus, RoundNaming, Team};
use serde_json::json;

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(Data::new(AppConfig::default()))
                .configure(api::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_and_sports() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], true);

    let req = test::TestRequest::get().uri("/api/sports").to_request();
    let sports: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert!(sports.contains(&"futsal".to_string()));
}

#[actix_web::test]
async fn generates_bracket_and_layout() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/bracket")
        .set_json(json!({
            "sport": "futsal",
            "teams": [{ "nome": "1A" }, { "name": "1B", "id": 7 }, { "name": "2A" }]
        }))
        .to_request();
    let resp: BracketResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.tournament.total_teams, 3);
    assert_eq!(resp.tournament.total_rounds, 2);
    assert_eq!(resp.layout.nodes.len(), 3);
    assert_eq!(resp.layout.edges.len(), 2);
}

#[actix_web::test]
async fn not_enough_teams_is_an_empty_bracket() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/bracket")
        .set_json(json!({ "sport": "volei", "teams": [{ "name": "Solo" }] }))
        .to_request();
    let resp: BracketResponse = test::call_and_read_body_json(&app, req).await;
    assert!(resp.tournament.rounds.is_empty());
    assert!(resp.layout.nodes.is_empty());
}

#[actix_web::test]
async fn unknown_sport_is_rejected() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/bracket")
        .set_json(json!({ "sport": "xadrez", "teams": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn generates_from_csv() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/bracket/csv?sport=handebol")
        .insert_header(("content-type", "text/csv"))
        .set_payload("nome,color\n1A,#fff\n1B,\n2A,\n2B,\n")
        .to_request();
    let resp: BracketResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.tournament.total_teams, 4);
    assert_eq!(resp.tournament.rounds[0].name, "Semifinal");
}

#[actix_web::test]
async fn csv_without_a_name_column_is_rejected() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/bracket/csv?sport=futsal")
        .insert_header(("content-type", "text/csv"))
        .set_payload("id,icon\n1,shield\n2,star\n")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some());
}

#[actix_web::test]
async fn records_a_result_and_relays_out() {
    let app = app!();
    let teams = vec![Team::new("1A"), Team::new("1B")];
    let tournament = generate_bracket(&teams, "futsal", &RoundNaming::default());
    let req = test::TestRequest::post()
        .uri("/api/bracket/result")
        .set_json(json!({ "tournament": tournament, "matchId": "futsal-r1-1", "score": "2 x 0" }))
        .to_request();
    let resp: TournamentResponse = test::call_and_read_body_json(&app, req).await;
    let final_match = &resp.tournament.rounds[0].matches[0];
    assert_eq!(final_match.status, MatchStatus::Completed);
    assert_eq!(
        resp.tournament.champion().map(|c| c.name.clone()),
        Some(final_match.teams[0].name.clone())
    );
    assert_eq!(resp.layout.nodes[0].data.status, MatchStatus::Completed);

    // Already decided.
    let req = test::TestRequest::post()
        .uri("/api/bracket/result")
        .set_json(json!({ "tournament": resp.tournament, "matchId": "futsal-r1-1", "winner": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn result_needs_winner_or_score() {
    let app = app!();
    let teams = [Team::new("A"), Team::new("B")];
    let tournament = generate_bracket(&teams, "futsal", &RoundNaming::default());
    let req = test::TestRequest::post()
        .uri("/api/bracket/result")
        .set_json(json!({ "tournament": tournament, "matchId": "futsal-r1-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn sets_status_with_backend_names() {
    let app = app!();
    let teams = [Team::new("A"), Team::new("B")];
    let tournament = generate_bracket(&teams, "futsal", &RoundNaming::default());
    let req = test::TestRequest::post()
        .uri("/api/bracket/status")
        .set_json(json!({
            "tournament": tournament,
            "matchId": "futsal-r1-1",
            "status": "EM_ANDAMENTO"
        }))
        .to_request();
    let resp: TournamentResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.tournament.rounds[0].matches[0].status, MatchStatus::Live);

    let req = test::TestRequest::post()
        .uri("/api/bracket/status")
        .set_json(json!({
            "tournament": resp.tournament,
            "matchId": "futsal-r1-1",
            "status": "adiado"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn relayouts_a_posted_bracket() {
    let app = app!();
    let tournament = generate_bracket(
        &(0..8).map(|i| Team::new(format!("T{i}"))).collect::<Vec<_>>(),
        "basquete",
        &RoundNaming::default(),
    );
    let req = test::TestRequest::post()
        .uri("/api/bracket/layout")
        .set_json(&tournament)
        .to_request();
    let layout: interclasse_bracket::BracketLayout = test::call_and_read_body_json(&app, req).await;
    assert_eq!(layout.nodes.len(), 7);
    assert_eq!(layout.edges.len(), 6);
}
