use anyhow::Result;
use common::{
    Direction, GameConfig, GameEvent, GameOverCause, GameState, GameStatus, Position,
};

fn positions(snake: &common::Snake) -> Vec<Position> {
    snake.segments().copied().collect()
}

fn started(config: GameConfig, seed: u64) -> Result<GameState> {
    let mut state = GameState::new(config, seed)?;
    state.start();
    Ok(state)
}

#[test]
fn test_single_tick_moves_up_and_drops_tail() -> Result<()> {
    let mut state = started(GameConfig::default(), 42)?;

    let events = state.tick();

    assert_eq!(
        positions(state.snake()),
        vec![Position::new(8, 6), Position::new(8, 7)]
    );
    assert_eq!(events, vec![GameEvent::Moved { head: Position::new(8, 6) }]);
    assert!(!state.is_game_over());
    assert_eq!(state.apple(), Position::new(8, 3));
    Ok(())
}

#[test]
fn test_eating_apple_grows_snake_and_respawns_apple() -> Result<()> {
    let mut state = started(GameConfig::default(), 42)?;

    // Head goes 7 -> 6 -> 5 -> 4, the fourth tick lands on the apple at (8, 3)
    for _ in 0..3 {
        state.tick();
    }
    assert_eq!(state.snake().len(), 2);

    let events = state.tick();
    assert_eq!(state.snake().len(), 3);
    assert_eq!(
        positions(state.snake()),
        vec![Position::new(8, 3), Position::new(8, 4), Position::new(8, 5)]
    );
    assert!(events.contains(&GameEvent::AppleEaten {
        position: Position::new(8, 3)
    }));
    assert!(!state.snake().contains(&state.apple()));
    assert!(state.config().contains(&state.apple()));
    assert_eq!(state.score(), 1);
    Ok(())
}

#[test]
fn test_length_changes_by_at_most_one_until_game_over() -> Result<()> {
    let mut state = started(GameConfig::default(), 7)?;
    let turns = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];

    for step in 0..400 {
        if step % 5 == 0 {
            state.set_direction(turns[(step / 5) % turns.len()]);
        }
        let before_snake = state.snake().clone();
        let before_apple = state.apple();

        let events = state.tick();

        if state.is_game_over() {
            // The fatal tick leaves snake and apple exactly as they were
            assert_eq!(state.snake(), &before_snake);
            assert_eq!(state.apple(), before_apple);
            break;
        }

        let ate = events
            .iter()
            .any(|e| matches!(e, GameEvent::AppleEaten { .. }));
        let growth = state.snake().len() - before_snake.len();
        assert_eq!(growth, if ate { 1 } else { 0 });
        assert!(!state.snake().contains(&state.apple()));
    }
    Ok(())
}

#[test]
fn test_wall_collision_ends_game_without_mutation() -> Result<()> {
    let config = GameConfig {
        snake_start: vec![Position::new(0, 5), Position::new(1, 5)],
        apple_start: Position::new(10, 10),
        initial_direction: Direction::Left,
        ..GameConfig::default()
    };
    let mut state = started(config, 1)?;
    let snake_before = state.snake().clone();

    let events = state.tick();

    assert_eq!(
        events,
        vec![GameEvent::GameOver {
            cause: GameOverCause::Wall
        }]
    );
    assert!(state.is_game_over());
    assert_eq!(state.snake(), &snake_before);
    assert_eq!(state.apple(), Position::new(10, 10));

    // Further ticks are ignored
    state.set_direction(Direction::Right);
    assert!(state.tick().is_empty());
    assert_eq!(state.snake(), &snake_before);
    assert!(state.is_game_over());
    Ok(())
}

#[test]
fn test_walls_on_every_side() -> Result<()> {
    let cases = [
        (Position::new(4, 0), Position::new(4, 1), Direction::Up),
        (Position::new(4, 19), Position::new(4, 18), Direction::Down),
        (Position::new(0, 4), Position::new(1, 4), Direction::Left),
        (Position::new(19, 4), Position::new(18, 4), Direction::Right),
    ];
    for (head, body, direction) in cases {
        let config = GameConfig {
            snake_start: vec![head, body],
            apple_start: Position::new(10, 10),
            initial_direction: direction,
            ..GameConfig::default()
        };
        let mut state = started(config, 3)?;
        state.tick();
        assert_eq!(
            state.game_over_cause(),
            Some(GameOverCause::Wall),
            "{:?}",
            direction
        );
    }
    Ok(())
}

#[test]
fn test_reversal_is_a_self_collision() -> Result<()> {
    let mut state = started(GameConfig::default(), 1)?;
    state.set_direction(Direction::Down);

    state.tick();

    assert_eq!(
        state.status(),
        GameStatus::GameOver {
            cause: GameOverCause::SelfCollision
        }
    );
    Ok(())
}

#[test]
fn test_start_restores_initial_state_from_any_state() -> Result<()> {
    let mut state = started(GameConfig::default(), 9)?;
    state.set_direction(Direction::Left);
    for _ in 0..30 {
        state.tick();
    }
    assert!(state.is_game_over());

    for _ in 0..2 {
        state.start();
        assert_eq!(
            positions(state.snake()),
            vec![Position::new(8, 7), Position::new(8, 8)]
        );
        assert_eq!(state.apple(), Position::new(8, 3));
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.direction().vector(), (0, -1));
        assert!(!state.is_game_over());
        assert!(state.is_running());
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 0);
    }
    Ok(())
}

#[test]
fn test_respawned_apple_never_lands_on_snake() -> Result<()> {
    let config = GameConfig {
        grid_width: 3,
        grid_height: 3,
        snake_start: vec![Position::new(1, 1), Position::new(0, 1)],
        apple_start: Position::new(2, 1),
        initial_direction: Direction::Right,
        ..GameConfig::default()
    };
    for seed in 0..300 {
        let mut state = started(config.clone(), seed)?;
        state.tick();
        assert_eq!(state.snake().len(), 3);
        assert!(
            !state.snake().contains(&state.apple()),
            "seed {} put apple on {:?}",
            seed,
            state.apple()
        );
    }
    Ok(())
}

#[test]
fn test_last_free_cell_gets_the_apple_then_board_fills() -> Result<()> {
    let config = GameConfig {
        grid_width: 4,
        grid_height: 1,
        snake_start: vec![Position::new(2, 0), Position::new(3, 0)],
        apple_start: Position::new(1, 0),
        initial_direction: Direction::Left,
        ..GameConfig::default()
    };
    let mut state = started(config, 5)?;

    state.tick();
    assert_eq!(state.apple(), Position::new(0, 0));

    let events = state.tick();
    assert_eq!(state.snake().len(), 4);
    assert_eq!(state.game_over_cause(), Some(GameOverCause::BoardFilled));
    assert_eq!(state.apple(), *state.snake().head());
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            cause: GameOverCause::BoardFilled
        })
    );
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        apple_start: Position::new(25, 0),
        ..GameConfig::default()
    };
    assert!(GameState::new(config, 0).is_err());
}
