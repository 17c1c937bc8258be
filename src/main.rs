use std::time::{Duration, Instant};

use anyhow::Context;
use pacman_chase::config::Config;
use pacman_chase::constants::{TICK_INTERVAL, TICK_RATE, TILE_SIZE};
use pacman_chase::formatter::{self, TickFormatter};
use pacman_chase::game::events::GameEvent;
use pacman_chase::game::state::GamePhase;
use pacman_chase::game::{Game, GameSettings};
use pacman_chase::map::level::LevelTemplate;
use thousands::Separable;
use tracing::{debug, info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Running totals printed when the run ends.
#[derive(Debug, Default)]
struct Summary {
    pellets: u64,
    power_pellets: u64,
    ghosts_eaten: u64,
    deaths: u64,
    levels_cleared: u64,
}

impl Summary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PelletEaten { .. } => self.pellets += 1,
            GameEvent::PowerPelletEaten { .. } => self.power_pellets += 1,
            GameEvent::GhostEaten { .. } => self.ghosts_eaten += 1,
            GameEvent::PacmanDied { .. } => self.deaths += 1,
            GameEvent::AllPelletsCleared => self.levels_cleared += 1,
            GameEvent::GhostRespawned { .. } | GameEvent::GameOver { .. } => {}
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().event_format(TickFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")?;
    Ok(())
}

fn load_level(config: &Config) -> anyhow::Result<LevelTemplate> {
    let Some(path) = &config.level else {
        return Ok(LevelTemplate::classic()?);
    };

    let template =
        LevelTemplate::load(path, TILE_SIZE).with_context(|| format!("Could not load level {}", path.display()))?;
    Ok(template)
}

pub fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = Config::load()?;
    let template = load_level(&config)?;
    info!(?config, "Configuration loaded");

    let mut game = Game::new(template.clone(), GameSettings::from(&config));
    let mut summary = Summary::default();
    let mut now = Duration::ZERO;
    let started = Instant::now();

    info!(
        tick_ms = TICK_INTERVAL.as_secs_f32() * 1000.0,
        realtime = config.realtime,
        "Starting game loop"
    );

    loop {
        if config.max_ticks.is_some_and(|max| game.tick_count() >= max) {
            info!("Tick limit reached");
            break;
        }

        let frame_start = Instant::now();
        formatter::set_tick(game.tick_count() + 1);

        // Autopilot: a new random heading every second.
        if game.tick_count() % u64::from(TICK_RATE) == 0 {
            let direction = game.random_direction();
            debug!(direction = direction.as_ref(), "Autopilot steering");
            game.request_direction(direction);
        }

        now += TICK_INTERVAL;
        for event in game.tick(now) {
            debug!(event = event.as_ref(), "Game event");
            summary.record(&event);
        }

        match game.phase() {
            GamePhase::LevelComplete => game.next_level(template.clone(), now),
            GamePhase::GameOver => break,
            GamePhase::Playing | GamePhase::Paused => {}
        }

        if config.realtime {
            let elapsed = frame_start.elapsed();
            if elapsed < TICK_INTERVAL {
                spin_sleep::sleep(TICK_INTERVAL - elapsed);
            } else {
                warn!(behind = ?(elapsed - TICK_INTERVAL), "Game loop behind schedule");
            }
        }
    }

    println!("Ticks:          {}", game.tick_count().separate_with_commas());
    println!("Simulated time: {:.1}s", now.as_secs_f32());
    println!("Wall time:      {:.2?}", started.elapsed());
    println!("Score:          {}", game.score().separate_with_commas());
    println!("Level:          {}", game.level());
    println!("Lives left:     {}", game.lives());
    println!("Pellets:        {}", summary.pellets.separate_with_commas());
    println!("Power pellets:  {}", summary.power_pellets.separate_with_commas());
    println!("Ghosts eaten:   {}", summary.ghosts_eaten.separate_with_commas());
    println!("Deaths:         {}", summary.deaths.separate_with_commas());
    println!("Levels cleared: {}", summary.levels_cleared.separate_with_commas());
    Ok(())
}
