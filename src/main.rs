use pokeapi::blocking;
use pokeapi::{Config, Identifier, Pokemon, Session};

use anywho::anywho;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const USAGE: &str = "usage: pokedex <id|name> [--sprite <path.png>]";

pub fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt::init();

    let (identifier, sprite) = parse_args(env::args().skip(1))?;

    let session = blocking::Session::new(Session::new(config()?)?)?;
    let pokemon = session.resolve(&identifier)?;

    println!(
        "{}",
        ron::ser::to_string_pretty(&pokemon, ron::ser::PrettyConfig::default())?
    );

    describe_sprite(&pokemon);

    if let Some(path) = sprite {
        save_sprite(&pokemon, path)?;
    }

    Ok(())
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<(Identifier, Option<PathBuf>), anywho::Error> {
    let identifier: Identifier = args
        .next()
        .ok_or_else(|| anywho!("{USAGE}"))?
        .parse()?;

    let sprite = match args.next().as_deref() {
        None => None,
        Some("--sprite") => Some(PathBuf::from(
            args.next().ok_or_else(|| anywho!("--sprite expects a path\n{USAGE}"))?,
        )),
        Some(other) => return Err(anywho!("unexpected argument: {other}\n{USAGE}")),
    };

    Ok((identifier, sprite))
}

fn config() -> Result<Config, anywho::Error> {
    let mut config = Config::default();

    if let Ok(base_url) = env::var("POKEAPI_URL") {
        config.base_url = base_url.parse()?;
    }

    if let Ok(timeout) = env::var("POKEAPI_TIMEOUT") {
        config.timeout = Duration::from_secs(timeout.parse()?);
    }

    Ok(config)
}

fn describe_sprite(pokemon: &Pokemon) {
    let sprite = pokemon.sprite();

    if sprite.is_empty() {
        println!("sprite: none");
    } else {
        println!("sprite: {}x{}", sprite.width(), sprite.height());
    }
}

fn save_sprite(pokemon: &Pokemon, path: PathBuf) -> Result<(), anywho::Error> {
    let Some(image) = pokemon.sprite().to_image() else {
        log::warn!("{} has no artwork to save", pokemon.name());

        return Ok(());
    };

    image.save(&path)?;
    log::info!("Artwork saved to {}", path.display());

    Ok(())
}
