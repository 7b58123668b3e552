#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use anyhow::Result;
use clap::Parser;
use sentier::cli::{self, Cmd};
use sentier::config::AppConfig;
use sentier::form::FormInput;
use sentier::geo::FixedPosition;
use sentier::map::TextMap;
use sentier::persistence::Persistence;
use sentier::sidebar::{ClickTarget, HtmlSidebar, Node};
use sentier::storage::{KeyValueStore, MemoryStore, SqliteStore};
use sentier::types::{Coords, Workout, WorkoutKind};
use sentier::{App, utils};

#[macro_use]
extern crate sentier;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    if cli.memory {
        dlog!("storage=memory");
        run(cli, MemoryStore::new())
    } else {
        dlog!("storage=sqlite db={}", cli.db.display());
        let store = SqliteStore::open(&cli.db)?;
        run(cli, store)
    }
}

fn run<S: KeyValueStore>(cli: cli::Cli, store: S) -> Result<()> {
    let home = match (cli.home_lat, cli.home_lng) {
        (Some(lat), Some(lng)) => Some(Coords::new(lat, lng)),
        (None, None) => None,
        _ => anyhow::bail!("--home-lat and --home-lng must be given together"),
    };

    let config = AppConfig::default();
    let persistence = Persistence::new(store, config.storage_key.clone());
    let mut app = App::new(
        config,
        TextMap::new(),
        HtmlSidebar::new(),
        persistence,
        FixedPosition(home),
    );
    // reset starts the app itself, after the snapshot is gone; an unreadable
    // snapshot must not stop it
    if !matches!(cli.cmd, Some(Cmd::Reset)) {
        app.start()?;
    }

    match cli.cmd {
        Some(Cmd::Add(args)) => {
            let input = match args.kind {
                WorkoutKind::Running => FormInput::running(
                    args.distance,
                    args.duration,
                    args.cadence.unwrap_or(f64::NAN),
                ),
                WorkoutKind::Cycling => FormInput::cycling(
                    args.distance,
                    args.duration,
                    args.elev_gain.unwrap_or(f64::NAN),
                ),
            };

            if !app.is_map_ready() {
                anyhow::bail!(
                    "No map without a position; pass --home-lat and --home-lng to add workouts"
                );
            }
            app.handle_map_click(Coords::new(args.lat, args.lng));
            app.select_kind(input.kind);
            let workout = app.submit(input)?;
            println!("{}", row(workout));
        }
        Some(Cmd::Focus { id }) => {
            let target = ClickTarget::new(vec![Node::new("workout").with_data_id(id)]);
            match app.focus_workout(&target) {
                Some(center) => {
                    let zoom = app.map().zoom().unwrap_or_default();
                    println!("{center}\tzoom={zoom}");
                }
                None => tracing::warn!(id, "nothing to focus"),
            }
        }
        Some(Cmd::Reset) => {
            app.reset()?;
            println!("deleted all workouts");
        }
        Some(Cmd::List { html: true }) => println!("{}", app.sidebar().to_html()),
        Some(Cmd::List { html: false }) | None => {
            for workout in app.workouts().all().iter().rev() {
                println!("{}", row(workout));
            }
        }
    }

    Ok(())
}

fn row(w: &Workout) -> String {
    format!(
        "{}\t{}\t{}\t{} km\t{} min\t{:.1} {}\t{} {}\t{}",
        w.id(),
        w.kind(),
        utils::month_day(w.created_at()),
        w.distance(),
        w.duration(),
        w.derived_metric(),
        w.derived_metric_unit(),
        w.tertiary(),
        w.tertiary_unit(),
        w.coords(),
    )
}
