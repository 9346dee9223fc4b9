//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically.

use rand::Rng;

use super::ball::{Ball, BallKind};
use super::collision::{ball_brick_collision, ball_edge_collision, ball_paddle_collision};
use super::paddle::PaddleCommand;
use super::state::{GameEvent, GamePhase, GameState};
use super::traits::Movable;

/// Input commands for a single tick.
///
/// Paddle commands persist until replaced; every other field is one-shot.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left/right/stop (key down / key up)
    pub paddle: Option<PaddleCommand>,
    /// Launch / continue (space)
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
    /// Toggle bot mode
    pub toggle_bot: bool,
    /// Skip to next level (debug)
    pub skip_level: bool,
    /// Restore ball count (debug)
    pub reset_balls: bool,
    /// Override main ball speed (debug)
    pub ball_speed: Option<(i32, i32)>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    apply_input(state, input);

    // Debug: skip to next level
    if input.skip_level {
        state.skip_level();
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                state.timer.pause();
                log::debug!("paused at {}", state.timer);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                state.timer.start();
            }
            _ => {}
        }
    }

    // The bot never waits for a key press
    let launch = input.launch || state.bot_mode;

    match state.phase {
        GamePhase::Initializing => {
            if launch {
                state.begin();
            }
        }
        GamePhase::Running => step_running(state),
        GamePhase::LevelComplete => {
            if launch {
                state.advance_level();
            }
        }
        GamePhase::BallLost => state.resolve_ball_lost(launch),
        GamePhase::Paused | GamePhase::GameOver => {}
    }
}

/// Input only ever touches intent flags, never physics state
fn apply_input(state: &mut GameState, input: &TickInput) {
    if let Some(command) = input.paddle {
        state.paddle.command(command);
    }
    if input.toggle_bot {
        state.bot_mode = !state.bot_mode;
        log::info!("Bot mode {}", if state.bot_mode { "on" } else { "off" });
    }
    if input.reset_balls {
        state.reset_ball_count();
    }
    if let Some((x, y)) = input.ball_speed {
        state.set_ball_speed(x, y);
    }
}

fn step_running(state: &mut GameState) {
    state.time_ticks += 1;
    state.timer.tick();

    // 1. Paddle
    state.paddle.step();

    // 2. Balls
    state.ball.step();
    for clone in &mut state.clones {
        clone.step();
    }

    // 3. Play-area edges
    let area = state.area;
    if ball_edge_collision(&mut state.ball, &area) {
        state.lose_ball();
        return;
    }
    let events = &mut state.events;
    state.clones.retain_mut(|clone| {
        let fell_out = ball_edge_collision(clone, &area);
        let alive = !fell_out && clone.age();
        if !alive {
            log::debug!("clone {} gone", clone.id);
            events.push(GameEvent::CloneLost { ball_id: clone.id });
        }
        alive
    });

    // 4. Bricks: one impact per ball
    let mut broken = resolve_bricks(state, None);
    for i in 0..state.clones.len() {
        broken += resolve_bricks(state, Some(i));
    }

    // 5. Paddle
    if ball_paddle_collision(&mut state.ball, &state.paddle) {
        state.emit(GameEvent::PaddleHit);
    }
    for clone in &mut state.clones {
        if ball_paddle_collision(clone, &state.paddle) {
            state.events.push(GameEvent::PaddleHit);
        }
    }

    // 6. Level completion
    if state.is_level_done() {
        state.complete_level();
        return;
    }

    // 7. Bot
    if state.bot_mode {
        steer_bot(state);
    }

    // 8. Clones
    spawn_clones(state, broken);
}

/// Resolve one brick impact for the main ball (`None`) or a clone.
/// Returns 1 if a brick broke.
fn resolve_bricks(state: &mut GameState, clone: Option<usize>) -> u32 {
    let ball = match clone {
        None => &mut state.ball,
        Some(i) => &mut state.clones[i],
    };
    let Some(hit) = ball_brick_collision(ball, &mut state.bricks, &mut state.rng) else {
        return 0;
    };

    log::debug!(
        "ball {} hit brick {} ({:?}), broken={}",
        ball.id,
        hit.brick_id,
        hit.impact,
        hit.broken
    );
    if hit.broken {
        state.score += 1;
        state.emit(GameEvent::BrickBroken {
            brick_id: hit.brick_id,
        });
        1
    } else {
        state.emit(GameEvent::BrickDamaged {
            brick_id: hit.brick_id,
        });
        0
    }
}

/// Steer toward the ball most in need of saving: the lowest one that is
/// falling, otherwise the main ball.
fn steer_bot(state: &mut GameState) {
    let target = std::iter::once(&state.ball)
        .chain(state.clones.iter())
        .filter(|b| b.speed().1 > 0)
        .max_by(|a, b| a.center().y.total_cmp(&b.center().y))
        .unwrap_or(&state.ball);

    let dx = target.center().x - state.paddle.center_x();
    let command = if dx.abs() <= state.rules.paddle_step {
        PaddleCommand::Stop
    } else if dx < 0.0 {
        PaddleCommand::Left
    } else {
        PaddleCommand::Right
    };
    state.paddle.command(command);
}

/// Each brick broken this tick gets one roll at spawning a clone
fn spawn_clones(state: &mut GameState, broken: u32) {
    for _ in 0..broken {
        if state.clones.len() >= state.rules.max_clones {
            return;
        }
        if !state.rng.random_bool(state.rules.clone_chance) {
            continue;
        }
        let id = state.next_entity_id();
        let kind = BallKind::Clone {
            ttl_ticks: state.rules.clone_lifetime_ticks,
        };
        let clone = Ball::new(id, kind, state.ball.center(), &mut state.rng);
        log::debug!("clone {} spawned with speed {:?}", id, clone.speed());
        state.clones.push(clone);
        state.emit(GameEvent::CloneSpawned { ball_id: id });
    }
}
