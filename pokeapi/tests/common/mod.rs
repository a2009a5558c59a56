//! Fixtures shared by the integration tests: a trimmed-down pikachu as
//! served by PokéAPI, with its artwork pointing back at the mock server.
#![allow(dead_code)]

use pokeapi::{Config, Session};

use serde_json::{Value, json};
use std::io;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ARTWORK_PATH: &str = "/media/sprites/pokemon/other/official-artwork/25.png";
pub const ARTWORK_SIZE: (u32, u32) = (4, 3);

pub fn session(server: &MockServer) -> Session {
    let base_url = format!("{}/api/v2", server.uri());

    Session::new(Config::new(base_url.parse().expect("Parse base URL")))
        .expect("Build session")
}

pub fn pikachu(server: &MockServer) -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "order": 35,
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "abilities": [
            { "is_hidden": false, "slot": 1, "ability": { "name": "static", "url": "https://pokeapi.co/api/v2/ability/9/" } },
            { "is_hidden": true, "slot": 3, "ability": { "name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/" } }
        ],
        "sprites": {
            "front_default": format!("{}/media/sprites/pokemon/25.png", server.uri()),
            "other": {
                "official-artwork": {
                    "front_default": format!("{}{ARTWORK_PATH}", server.uri()),
                    "front_shiny": null
                }
            }
        }
    })
}

pub fn artwork() -> Vec<u8> {
    let (width, height) = ARTWORK_SIZE;
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([246, 216, 48, 255]));
    let mut bytes = Vec::new();

    image
        .write_to(&mut io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Encode PNG");

    bytes
}

pub async fn serve_metadata(server: &MockServer, identifier: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/pokemon/{identifier}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn serve_artwork(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(ARTWORK_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Serves pikachu under both its id and its name, with valid artwork.
pub async fn serve_pikachu(server: &MockServer) {
    let body = pikachu(server);

    serve_metadata(server, "25", &body).await;
    serve_metadata(server, "pikachu", &body).await;
    serve_artwork(server, ResponseTemplate::new(200).set_body_bytes(artwork())).await;
}

pub fn assert_is_valid_pikachu(pokemon: &pokeapi::Pokemon) {
    assert_eq!(pokemon.id().get(), 25);
    assert_eq!(pokemon.name(), "pikachu");
    assert_eq!(pokemon.height(), Some(4));
    assert_eq!(pokemon.weight(), Some(60));
    assert_eq!(pokemon.base_experience(), Some(112));
    assert!(pokemon.types().iter().any(|kind| kind == "electric"));
    assert!(pokemon.abilities().iter().any(|ability| ability == "static"));
    assert!(pokemon.abilities().iter().any(|ability| ability == "lightning-rod"));

    let sprite = pokemon.sprite();
    assert!(!sprite.is_empty());
    assert_eq!((sprite.width(), sprite.height()), ARTWORK_SIZE);
}
