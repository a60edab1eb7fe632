mod clock;
mod engine;
mod game_engine;
mod input;
mod layout;
mod render_engine;

use clock::FrameClock;
use input::handle_events;
use snake_core::GameConfig;
use tracing::info;

use self::{engine::Engine, game_engine::GameEngine, render_engine::RenderEngine};
use std::io;

pub fn game_loop(config: GameConfig) -> snake_core::Result<()> {
    let mut game_engine = GameEngine::new(&config)?;
    let mut clock = FrameClock::new(config.frame_duration());
    info!(?config, frame = ?clock.frame(), "starting snake");

    let mut render_engine = RenderEngine::init_render_engine()?;
    let result = run(&mut game_engine, &mut render_engine, &mut clock);
    // restore the terminal even when the loop failed
    render_engine.deinit_render_engine()?;
    result?;

    info!(
        highest_score = game_engine.session().highest_score(),
        games = game_engine.session().games_started(),
        "bye"
    );
    Ok(())
}

fn run<E: Engine>(
    engine: &mut E,
    render_engine: &mut RenderEngine,
    clock: &mut FrameClock,
) -> io::Result<()> {
    let mut should_quit = false;
    while !should_quit {
        // tick
        let user_input = handle_events()?;
        let viewport = render_engine.size()?;
        should_quit = engine.tick(user_input, viewport);
        // rendering
        render_engine.render(|frame| engine.render_frame(frame))?;
        clock.tick();
    }
    Ok(())
}
