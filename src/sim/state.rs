//! Game state and session lifecycle
//!
//! One `GameState` per running game. It owns every entity, the seeded RNG and
//! the level list; `tick` is the only thing that moves it forward.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallKind};
use super::brick::Brick;
use super::geom::Bounds;
use super::level::{LevelLayout, LevelSpec};
use super::paddle::Paddle;
use super::traits::{Impactable, Movable};
use crate::consts::*;
use crate::error::GameError;
use crate::settings::Settings;
use crate::timer::GameTimer;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Wall built, waiting for launch input
    Initializing,
    /// Active gameplay
    Running,
    /// Timer suspended, no physics
    Paused,
    /// Every brick in the wall is broken, waiting to advance
    LevelComplete,
    /// Main ball fell out, waiting to respawn
    BallLost,
    /// No balls left, or every level cleared
    GameOver,
}

/// Things that happened during a tick, for audio/score collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { level: usize },
    BrickDamaged { brick_id: u32 },
    BrickBroken { brick_id: u32 },
    PaddleHit,
    BallLost { balls_left: u32 },
    CloneSpawned { ball_id: u32 },
    CloneLost { ball_id: u32 },
    LevelComplete { level: usize, elapsed_ticks: u64 },
    GameOver { cleared_all: bool },
}

/// Tuning copied out of [`Settings`] when the session is built
#[derive(Debug, Clone, Copy)]
pub struct Rules {
    pub ball_count: u32,
    pub paddle_step: f32,
    pub clone_chance: f64,
    pub max_clones: usize,
    pub clone_lifetime_ticks: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Play area every ball is confined to
    pub area: Bounds,
    /// Where paddle (top center) and ball (center) restart
    pub start: Vec2,
    pub rules: Rules,
    levels: Vec<LevelSpec>,
    layout: LevelLayout,
    /// Current level index (0-based)
    pub level_index: usize,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Bonus balls (sorted by id)
    pub clones: Vec<Ball>,
    /// Active brick wall
    pub bricks: Vec<Brick>,
    /// Balls remaining, including the one in play
    pub balls_left: u32,
    /// Paddle follows the ball instead of input
    pub bot_mode: bool,
    /// Time spent on the current level
    pub timer: GameTimer,
    /// Bricks broken this game
    pub score: u32,
    /// Simulation ticks processed while running
    pub time_ticks: u64,
    /// Set when the last level was completed
    pub cleared_all: bool,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Build a session from settings.
    ///
    /// Every level name and the wall layout are checked here, so a bad level
    /// type is reported before the first tick.
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, GameError> {
        let levels = settings.level_specs()?;
        let clone_chance = settings.clone_chance()?;
        let area = Bounds::new(0.0, 0.0, AREA_WIDTH, AREA_HEIGHT);
        let layout = LevelLayout::new(
            &area,
            settings.brick_count,
            settings.line_count,
            settings.brick_size_ratio,
        )?;
        let rules = Rules {
            ball_count: settings.ball_count.max(1),
            paddle_step: settings.paddle_step.abs(),
            clone_chance,
            max_clones: settings.max_clones,
            clone_lifetime_ticks: settings.clone_lifetime_ticks.max(1),
        };

        let start = Vec2::new(START_X, START_Y);
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::with_size(
            start,
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            rules.paddle_step,
            &area,
        );
        let ball = Ball::new(1, BallKind::Main, start, &mut rng);

        let mut state = Self {
            seed,
            rng,
            area,
            start,
            rules,
            levels,
            layout,
            level_index: 0,
            phase: GamePhase::Initializing,
            paddle,
            ball,
            clones: Vec::new(),
            bricks: Vec::new(),
            balls_left: rules.ball_count,
            bot_mode: settings.bot_mode,
            timer: GameTimer::new(),
            score: 0,
            time_ticks: 0,
            cleared_all: false,
            events: Vec::new(),
            next_id: 2,
        };
        state.build_wall();
        log::info!(
            "New game: seed={}, {} levels, {} balls",
            seed,
            state.levels.len(),
            state.balls_left
        );
        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current_level(&self) -> &LevelSpec {
        &self.levels[self.level_index]
    }

    pub fn has_next_level(&self) -> bool {
        self.level_index + 1 < self.levels.len()
    }

    /// Unbroken bricks in the wall
    pub fn bricks_left(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_broken()).count()
    }

    pub fn is_level_done(&self) -> bool {
        self.bricks.iter().all(|b| b.is_broken())
    }

    /// Drain events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn build_wall(&mut self) {
        let spec = self.levels[self.level_index];
        self.bricks = spec
            .kind
            .build(&self.layout, spec.type_a, spec.type_b, &mut self.rng);
    }

    /// Put paddle and ball back at the start with a fresh launch speed
    pub fn reset_round(&mut self) {
        self.paddle.move_to(self.start);
        self.ball.move_to(self.start);
        self.ball.set_random_speed(&mut self.rng);
        self.clones.clear();
    }

    /// Launch from `Initializing`
    pub(crate) fn begin(&mut self) {
        self.phase = GamePhase::Running;
        self.timer.start();
        self.emit(GameEvent::LevelStarted {
            level: self.level_index,
        });
        log::info!("Level {} started", self.level_index + 1);
    }

    /// Main ball fell out of the play area
    pub(crate) fn lose_ball(&mut self) {
        self.balls_left = self.balls_left.saturating_sub(1);
        self.phase = GamePhase::BallLost;
        self.timer.pause();
        self.clones.clear();
        self.emit(GameEvent::BallLost {
            balls_left: self.balls_left,
        });
        log::info!("Ball lost, {} left", self.balls_left);
    }

    /// Respawn after `BallLost`, or end the game if none are left
    pub(crate) fn resolve_ball_lost(&mut self, launch: bool) {
        if self.balls_left == 0 {
            self.game_over(false);
        } else if launch {
            self.reset_round();
            self.phase = GamePhase::Running;
            self.timer.start();
        }
    }

    pub(crate) fn complete_level(&mut self) {
        self.phase = GamePhase::LevelComplete;
        self.timer.pause();
        self.clones.clear();
        self.emit(GameEvent::LevelComplete {
            level: self.level_index,
            elapsed_ticks: self.timer.elapsed_ticks(),
        });
        log::info!(
            "Level {} complete in {}",
            self.level_index + 1,
            self.timer
        );
    }

    /// Move on from `LevelComplete`: next wall, or game over if this was the last
    pub(crate) fn advance_level(&mut self) {
        if !self.has_next_level() {
            self.game_over(true);
            return;
        }
        self.level_index += 1;
        self.build_wall();
        self.reset_round();
        self.timer.reset();
        self.begin();
    }

    fn game_over(&mut self, cleared_all: bool) {
        self.phase = GamePhase::GameOver;
        self.cleared_all = cleared_all;
        self.timer.pause();
        self.emit(GameEvent::GameOver { cleared_all });
        if cleared_all {
            log::info!("All walls destroyed! score={}", self.score);
        } else {
            log::info!("Game over at level {}, score={}", self.level_index + 1, self.score);
        }
    }

    /// Debug: jump to the next wall and wait for launch
    pub fn skip_level(&mut self) {
        if !self.has_next_level() {
            log::debug!("skip_level ignored: already on the last level");
            return;
        }
        self.level_index += 1;
        self.build_wall();
        self.reset_round();
        self.timer.reset();
        self.phase = GamePhase::Initializing;
        log::info!("Skipped to level {}", self.level_index + 1);
    }

    /// Debug: restore the configured ball count
    pub fn reset_ball_count(&mut self) {
        self.balls_left = self.rules.ball_count;
    }

    /// Debug: override the main ball's speed
    pub fn set_ball_speed(&mut self, speed_x: i32, speed_y: i32) {
        self.ball.set_speed(speed_x, speed_y);
    }

    /// Repair the current wall and restore balls, then wait for launch
    pub fn reset_wall(&mut self) {
        for brick in &mut self.bricks {
            brick.repair();
        }
        self.reset_ball_count();
        self.reset_round();
        self.timer.reset();
        self.phase = GamePhase::Initializing;
    }

    /// Start over from the first level
    pub fn restart(&mut self) {
        self.level_index = 0;
        self.score = 0;
        self.cleared_all = false;
        self.build_wall();
        self.reset_ball_count();
        self.reset_round();
        self.timer.reset();
        self.phase = GamePhase::Initializing;
        log::info!("Game restarted");
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        let mut balls = Vec::with_capacity(1 + self.clones.len());
        balls.push(BallView::from(&self.ball));
        balls.extend(self.clones.iter().map(BallView::from));
        Snapshot {
            phase: self.phase,
            level: self.level_index,
            balls_left: self.balls_left,
            score: self.score,
            bot_mode: self.bot_mode,
            elapsed: self.timer.to_string(),
            paddle: self.paddle.bounds(),
            balls,
            bricks: self.bricks.iter().map(BrickView::from).collect(),
        }
    }
}

/// What a renderer needs to draw one ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallView {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
    pub clone: bool,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            id: ball.id,
            center: ball.center(),
            radius: ball.radius(),
            clone: ball.is_clone(),
        }
    }
}

/// What a renderer needs to draw one brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickView {
    pub id: u32,
    pub bounds: Bounds,
    pub inner_color: u32,
    pub border_color: u32,
    pub broken: bool,
    pub cracks: Vec<Vec<Vec2>>,
}

impl From<&Brick> for BrickView {
    fn from(brick: &Brick) -> Self {
        Self {
            id: brick.id,
            bounds: brick.bounds,
            inner_color: brick.inner_color(),
            border_color: brick.border_color(),
            broken: brick.is_broken(),
            cracks: brick
                .crack()
                .map(|c| c.paths().to_vec())
                .unwrap_or_default(),
        }
    }
}

/// Frame data handed to the renderer after each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub level: usize,
    pub balls_left: u32,
    pub score: u32,
    pub bot_mode: bool,
    /// Level timer as `mm:ss`
    pub elapsed: String,
    pub paddle: Bounds,
    /// Main ball first, then clones
    pub balls: Vec<BallView>,
    pub bricks: Vec<BrickView>,
}
