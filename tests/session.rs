//! End-to-end scenarios driven through the public API

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use brickfall::sim::{
    Ball, BallKind, Brick, BrickKind, GameEvent, GamePhase, GameState, Impact, Impactable,
    LevelKind, Movable, TickInput, ball_brick_collision, tick,
};
use brickfall::{GameError, HighScores, Settings};

fn launch() -> TickInput {
    TickInput {
        launch: true,
        ..Default::default()
    }
}

#[test]
fn test_clay_brick_broken_from_below() {
    let mut rng = Pcg32::seed_from_u64(3);
    let mut bricks = vec![Brick::new(
        1,
        BrickKind::Clay,
        Vec2::new(100.0, 100.0),
        Vec2::new(60.0, 20.0),
    )];
    // Moving up, only the up contact point sits inside the brick
    let mut ball = Ball::with_speed(1, BallKind::Main, Vec2::new(130.0, 123.0), 2, -3);

    let hit = ball_brick_collision(&mut ball, &mut bricks, &mut rng).unwrap();
    assert_eq!(hit.impact, Impact::Down);
    assert!(hit.broken);
    assert_eq!(ball.speed(), (2, 3));
    assert!(bricks[0].is_broken());
    assert!(bricks[0].crack().is_none());

    // A broken brick is invisible to the next scan
    ball.move_to(Vec2::new(130.0, 123.0));
    assert!(ball_brick_collision(&mut ball, &mut bricks, &mut rng).is_none());
}

#[test]
fn test_chain_wall_layout() {
    let mut rng = Pcg32::seed_from_u64(1);
    let area = brickfall::sim::Bounds::new(0.0, 0.0, 600.0, 450.0);
    let bricks = LevelKind::Chain
        .generate(
            &area,
            30,
            3,
            3.0,
            BrickKind::Clay,
            BrickKind::Cement,
            &mut rng,
        )
        .unwrap();
    assert_eq!(bricks.len(), 31);
    assert_eq!(bricks[0].bounds.size, Vec2::new(60.0, 20.0));
    // Odd row is shifted half a brick left
    assert_eq!(bricks[10].bounds.pos, Vec2::new(-30.0, 20.0));
    // The extra brick plugs the gap at the end of row 1
    assert_eq!(bricks[30].bounds.pos, Vec2::new(570.0, 20.0));

    let ids: Vec<u32> = bricks.iter().map(|b| b.id).collect();
    assert_eq!(ids, (1..=31).collect::<Vec<_>>());
}

#[test]
fn test_ball_falls_out_and_game_ends() {
    let settings = Settings {
        ball_count: 2,
        ..Default::default()
    };
    let mut state = GameState::new(&settings, 99).unwrap();
    tick(&mut state, &launch());

    for expected_left in [1, 0] {
        state.ball.move_to(Vec2::new(20.0, state.area.bottom()));
        state.set_ball_speed(5, 5);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::BallLost);
        assert_eq!(state.balls_left, expected_left);
        tick(&mut state, &launch());
    }

    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(!state.cleared_all);
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::GameOver { cleared_all: false }));
}

#[test]
fn test_unknown_brick_reported_at_start() {
    let mut settings = Settings::default();
    settings.levels[0].type_b = "marble".to_string();
    let err = GameState::new(&settings, 1).unwrap_err();
    assert_eq!(
        err,
        GameError::UnknownBrick {
            name: "marble".to_string()
        }
    );
    assert!(err.to_string().contains("marble"));
}

#[test]
fn test_clearing_every_wall_wins() {
    let mut rng = Pcg32::seed_from_u64(0);
    let mut state = GameState::new(&Settings::default(), 5).unwrap();
    tick(&mut state, &launch());

    let mut cleared = 0;
    while state.phase != GamePhase::GameOver {
        assert_eq!(state.phase, GamePhase::Running);
        for brick in &mut state.bricks {
            while !brick.is_broken() {
                brick.set_impact(Vec2::ZERO, Impact::Up, &mut rng);
            }
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::LevelComplete);
        cleared += 1;
        tick(&mut state, &launch());
    }

    assert_eq!(cleared, state.level_count());
    assert!(state.cleared_all);
}

#[test]
fn test_bot_session_is_deterministic() {
    let settings = Settings {
        bot_mode: true,
        ..Default::default()
    };
    let run = |seed| {
        let mut state = GameState::new(&settings, seed).unwrap();
        let mut events = Vec::new();
        for _ in 0..5_000 {
            tick(&mut state, &TickInput::default());
            events.extend(state.drain_events());
        }
        (state.score, state.ball.center(), state.level_index, events)
    };

    let (score, center, level, events) = run(17);
    assert_eq!(run(17), (score, center, level, events.clone()));
    // The bot launches on its own and gets some play in
    assert!(matches!(events.first(), Some(GameEvent::LevelStarted { level: 0 })));
    assert!(events.contains(&GameEvent::PaddleHit) || score > 0);
}

#[test]
fn test_completed_levels_feed_leaderboard() {
    let mut rng = Pcg32::seed_from_u64(0);
    let mut state = GameState::new(&Settings::default(), 8).unwrap();
    let mut scores = HighScores::new();
    tick(&mut state, &launch());
    for _ in 0..50 {
        tick(&mut state, &TickInput::default());
    }
    for brick in &mut state.bricks {
        while !brick.is_broken() {
            brick.set_impact(Vec2::ZERO, Impact::Up, &mut rng);
        }
    }
    tick(&mut state, &TickInput::default());

    let (level, elapsed_ticks) = state
        .drain_events()
        .into_iter()
        .find_map(|e| match e {
            GameEvent::LevelComplete {
                level,
                elapsed_ticks,
            } => Some((level, elapsed_ticks)),
            _ => None,
        })
        .unwrap();
    assert_eq!(level, 0);
    assert_eq!(elapsed_ticks, 51);

    let secs = elapsed_ticks as f64 / brickfall::consts::TICKS_PER_SEC as f64;
    assert_eq!(scores.add_record("ada", level as u32 + 1, secs, 0.0), Some(1));
}
