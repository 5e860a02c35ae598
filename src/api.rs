// HTTP surface: health check and game creation.
use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderMap, Method, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::enums::{Army, Continent};
use crate::errors::{GameError, RiskError};
use crate::game::{Card, Game, Player, Territory};
use crate::store::GameStore;

const JSON: &str = "application/json";
const MISSING_FIELDS: &str = "Missing required fields \"name\" and \"players\"";
const UNEXPECTED: &str = "Oops! Something unexpected happened";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Success {
    pub success: bool,
}

/// Error body returned to clients. Never carries internal details.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewGame {
    pub name: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ArmyResponse {
    #[serde(rename = "type")]
    pub army_type: Army,
    pub value: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TerritoryResponse {
    pub name: String,
    pub continent: Continent,
    pub links: Vec<String>,
    pub owned_by: Option<Player>,
    pub armies: Vec<ArmyResponse>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CardOwnedResponse {
    pub owned_by: Player,
    pub card: Card,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CardsResponse {
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub owned: Vec<CardOwnedResponse>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GameResponse {
    pub name: String,
    pub golden_cavalry: u32,
    pub players: Vec<Player>,
    pub territories: Vec<TerritoryResponse>,
    pub cards: CardsResponse,
}

impl TerritoryResponse {
    fn from_territory(territory: &Territory, game: &Game) -> Self {
        Self {
            name: territory.name.clone(),
            continent: territory.continent,
            links: territory.links.clone(),
            owned_by: territory
                .owned_by
                .and_then(|id| game.player(id))
                .cloned(),
            armies: territory
                .armies
                .iter()
                .map(|(&army_type, &value)| ArmyResponse { army_type, value })
                .collect(),
        }
    }
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        let territories = game
            .territories
            .values()
            .map(|territory| TerritoryResponse::from_territory(territory, game))
            .collect();

        let owned = game
            .cards
            .owned_pairs()
            .filter_map(|(player_id, card)| {
                game.player(player_id).map(|player| CardOwnedResponse {
                    owned_by: player.clone(),
                    card: card.clone(),
                })
            })
            .collect();

        GameResponse {
            name: game.name.clone(),
            golden_cavalry: game.golden_cavalry,
            players: game.players.clone(),
            territories,
            cards: CardsResponse {
                draw_pile: game.cards.draw_pile.clone(),
                discard_pile: game.cards.discard_pile.clone(),
                owned,
            },
        }
    }
}

/// Errors a handler can return, mapped onto status codes.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(RiskError),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<RiskError> for ApiError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::Game(game_err) => game_err.into(),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(err) => {
                error!("Internal error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED.to_string())
            }
        };
        let body = ErrorBody {
            success: false,
            message,
        };
        (status, Json(body)).into_response()
    }
}

async fn health() -> Json<Success> {
    Json(Success { success: true })
}

async fn create_game(
    State(store): State<GameStore>,
    payload: Result<Json<NewGame>, JsonRejection>,
) -> Result<Json<GameResponse>, ApiError> {
    let Json(new_game) = payload.map_err(|rejection| {
        warn!("Rejected game request body: {}", rejection.body_text());
        ApiError::BadRequest(MISSING_FIELDS.to_string())
    })?;

    if new_game.name.is_empty() {
        warn!("Rejected game request with an empty name");
        return Err(ApiError::BadRequest(MISSING_FIELDS.to_string()));
    }

    info!(
        "Creating game '{}' with {} players",
        new_game.name,
        new_game.players.len()
    );

    let game = store.create_game(&new_game.name, new_game.players).await?;
    Ok(Json(GameResponse::from(&game)))
}

fn header_is(headers: &HeaderMap, name: axum::http::HeaderName, expected: &str) -> bool {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected)
}

fn header_rejection(status: StatusCode, message: &str) -> Response {
    let body = ErrorBody {
        success: false,
        message: message.to_string(),
    };
    (status, Json(body)).into_response()
}

/// Every request must accept JSON and declare a JSON body, exactly.
async fn require_json(request: Request, next: Next) -> Response {
    let headers = request.headers();
    if !header_is(headers, ACCEPT, JSON) {
        return header_rejection(
            StatusCode::NOT_ACCEPTABLE,
            "Request's HTTP 'Accept' header does not match 'application/json'",
        );
    }
    if !header_is(headers, CONTENT_TYPE, JSON) {
        return header_rejection(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Request's HTTP 'Content-Type' header is invalid, requires *only* 'application/json'",
        );
    }
    next.run(request).await
}

pub fn router(store: GameStore) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health))
        .route("/game", post(create_game))
        .with_state(store)
        .layer(middleware::from_fn(require_json))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_players() -> Vec<Player> {
        vec![
            Player::new(0, "Zero"),
            Player::new(1, "One"),
            Player::new(2, "Two"),
        ]
    }

    #[test]
    fn test_game_response_shape() {
        let game = Game::new("World Domination", three_players()).unwrap();
        let response = GameResponse::from(&game);

        assert_eq!(response.name, "World Domination");
        assert_eq!(response.players, three_players());
        assert_eq!(response.territories.len(), 42);
        assert_eq!(response.territories[0].name, "Alaska");
        assert_eq!(response.territories[0].owned_by, None);
        assert_eq!(response.territories[0].armies.len(), 3);
        assert_eq!(response.cards.draw_pile.len(), 44);
        assert!(response.cards.discard_pile.is_empty());
        assert!(response.cards.owned.is_empty());
    }

    #[test]
    fn test_owner_is_expanded() {
        let mut game = Game::new("World Domination", three_players()).unwrap();
        game.territories.get_mut("Peru").unwrap().owned_by = Some(2);
        game.cards.owned_by.get_mut(&1).unwrap().push(Card::Wild);

        let response = GameResponse::from(&game);
        let peru = response
            .territories
            .iter()
            .find(|t| t.name == "Peru")
            .unwrap();
        assert_eq!(peru.owned_by, Some(Player::new(2, "Two")));
        assert_eq!(
            response.cards.owned,
            vec![CardOwnedResponse {
                owned_by: Player::new(1, "One"),
                card: Card::Wild
            }]
        );
    }

    #[test]
    fn test_territory_json() {
        let game = Game::new("World Domination", three_players()).unwrap();
        let response = GameResponse::from(&game);
        let json = serde_json::to_value(&response.territories[0]).unwrap();

        assert_eq!(json["continent"], "North America");
        assert_eq!(json["owned_by"], serde_json::Value::Null);
        assert_eq!(json["armies"][0]["type"], "Infantry");
        assert_eq!(json["armies"][0]["value"], 0);
    }

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let response = ApiError::from(GameError::player_count(1)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::from(RiskError::Internal("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
