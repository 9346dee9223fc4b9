//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, passed into every random call
//! - Stable iteration order (wall order, then clones by ID)
//! - No rendering, audio or file I/O

pub mod ball;
pub mod brick;
pub mod collision;
pub mod crack;
pub mod geom;
pub mod level;
pub mod paddle;
pub mod state;
pub mod tick;
pub mod traits;

pub use ball::{Ball, BallKind, ContactPoints};
pub use brick::{Brick, BrickKind, Impact};
pub use collision::{BrickHit, ball_brick_collision, ball_edge_collision, ball_paddle_collision};
pub use crack::Crack;
pub use geom::{Bounds, Side};
pub use level::{LevelKind, LevelLayout, LevelSpec};
pub use paddle::{Paddle, PaddleCommand};
pub use state::{BallView, BrickView, GameEvent, GamePhase, GameState, Rules, Snapshot};
pub use tick::{TickInput, tick};
pub use traits::{Impactable, Movable};
