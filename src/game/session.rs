use super::board::{Board, Cell};
use super::config::GameConfig;
use super::direction::{Coord, Direction};
use super::error::GameError;
use super::snake::{Obstacle, Snake};
use super::spawn::FruitSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    GameOver,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake consumed a fruit this tick
    pub ate_fruit: bool,
    /// What stopped the move, when it was not allowed
    pub obstacle: Option<Obstacle>,
    /// Whether the session has reached its terminal state
    pub game_over: bool,
}

impl TickResult {
    fn still_active() -> Self {
        Self {
            ate_fruit: false,
            obstacle: None,
            game_over: false,
        }
    }
}

/// One game: board, snake, fruit, score and the spawning strategy,
/// owned together so independent games can run side by side.
///
/// The score counts fruits placed, not eaten: every spawn (including
/// the initial one) increments it, and `final_score` subtracts one to
/// compensate. This matches the original scoring exactly.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    snake: Snake,
    fruit: Option<Coord>,
    fruit_source: FruitSource,
    score: i32,
    moves: u32,
    status: SessionStatus,
}

impl GameSession {
    /// Start a fresh game: bordered board, three-cell snake with no
    /// heading, and the first fruit already spawned.
    pub fn new(config: GameConfig, fruit_source: FruitSource) -> Result<Self, GameError> {
        let mut board = Board::new(config.playable_width, config.playable_height);
        let snake = Snake::place(&mut board, config.start());

        let mut session = Self {
            config,
            board,
            snake,
            fruit: None,
            fruit_source,
            score: 0,
            moves: 0,
            status: SessionStatus::Active,
        };
        session.spawn_fruit()?;
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Option<Coord> {
        self.fruit
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Running score; see `final_score` for the value reported at the end
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Score reported when the game ends, whether by death, quitting or
    /// hitting the move ceiling
    pub fn final_score(&self) -> i32 {
        self.score - 1
    }

    /// Moves that actually shifted the snake
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// What the head would run into when moving in `direction`
    pub fn probe(&self, direction: Direction) -> (bool, Obstacle) {
        self.snake.can_advance(&self.board, direction)
    }

    /// Advance the game by one tick.
    ///
    /// A supplied direction replaces the heading; otherwise the previous
    /// heading persists, modeling "keep going" between key presses.
    /// Before the first input there is no heading and the tick is a no-op.
    pub fn tick(&mut self, requested: Option<Direction>) -> Result<TickResult, GameError> {
        if self.status == SessionStatus::GameOver {
            return Ok(TickResult {
                ate_fruit: false,
                obstacle: None,
                game_over: true,
            });
        }

        let previous = self.snake.heading();
        if let Some(direction) = requested {
            self.snake.set_heading(Some(direction));
        }
        let Some(direction) = self.snake.heading() else {
            return Ok(TickResult::still_active());
        };

        let (allowed, obstacle) = self.snake.can_advance(&self.board, direction);
        if !allowed {
            if obstacle == Obstacle::Neck {
                // illegal reversal: drop it and keep the previous heading
                self.snake.set_heading(previous);
                return Ok(TickResult {
                    ate_fruit: false,
                    obstacle: Some(Obstacle::Neck),
                    game_over: false,
                });
            }
            self.status = SessionStatus::GameOver;
            return Ok(TickResult {
                ate_fruit: false,
                obstacle: Some(obstacle),
                game_over: true,
            });
        }

        let ate_fruit = obstacle == Obstacle::Fruit;
        if ate_fruit {
            self.snake.grow(&mut self.board, direction);
            self.spawn_fruit()?;
        } else {
            self.snake.advance(&mut self.board, direction);
        }
        self.moves += 1;

        Ok(TickResult {
            ate_fruit,
            obstacle: None,
            game_over: false,
        })
    }

    /// Place the next fruit and count it.
    ///
    /// A recorded plan can point at a cell the snake has since covered;
    /// the board write is skipped then so the rank path stays intact,
    /// but the cursor and score still advance.
    fn spawn_fruit(&mut self) -> Result<(), GameError> {
        self.fruit = self.fruit_source.next_fruit(&self.board)?;
        if let Some(at) = self.fruit {
            if self.board.at(at) == Cell::Empty {
                self.board.set(at, Cell::Fruit);
            } else {
                self.fruit = None;
            }
        }
        self.score += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::spawn::FruitPlan;

    fn recorded_session(fruits: Vec<Coord>) -> GameSession {
        GameSession::new(
            GameConfig::small(),
            FruitSource::recorded(FruitPlan::from_coords(fruits)),
        )
        .unwrap()
    }

    // small() starts the head at (4,2) with the body at (4,3) and (4,4)

    #[test]
    fn test_new_session() {
        let session = recorded_session(vec![Coord::new(1, 1), Coord::new(2, 1)]);
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.snake().len(session.board()), 3);
        // the initial spawn already counted one fruit
        assert_eq!(session.score(), 1);
        assert_eq!(session.fruit(), Some(Coord::new(1, 1)));
        assert_eq!(session.board().at(Coord::new(1, 1)), Cell::Fruit);
    }

    #[test]
    fn test_tick_without_heading_is_noop() {
        let mut session = recorded_session(vec![Coord::new(1, 1)]);
        let before = session.snake().head();

        let result = session.tick(None).unwrap();

        assert!(!result.game_over);
        assert_eq!(session.snake().head(), before);
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn test_heading_persists_across_ticks() {
        let mut session = recorded_session(vec![Coord::new(1, 1)]);

        session.tick(Some(Direction::Right)).unwrap();
        session.tick(None).unwrap();

        assert_eq!(session.snake().head(), Coord::new(6, 2));
        assert_eq!(session.moves(), 2);
    }

    #[test]
    fn test_neck_reversal_is_ignored_not_fatal() {
        let mut session = recorded_session(vec![Coord::new(1, 1)]);
        session.tick(Some(Direction::Right)).unwrap();
        let head = session.snake().head();

        // the neck now trails to the left of the head
        let result = session.tick(Some(Direction::Left)).unwrap();

        assert!(!result.game_over);
        assert_eq!(result.obstacle, Some(Obstacle::Neck));
        assert_eq!(session.snake().head(), head);
        // the previous heading survives, so the snake keeps moving right
        session.tick(None).unwrap();
        assert_eq!(session.snake().head(), head.moved_in(Direction::Right));
    }

    #[test]
    fn test_fruit_consumption_grows_and_scores() {
        // first fruit directly right of the head, second elsewhere
        let mut session = recorded_session(vec![Coord::new(5, 2), Coord::new(1, 1)]);

        let result = session.tick(Some(Direction::Right)).unwrap();

        assert!(result.ate_fruit);
        assert_eq!(session.snake().len(session.board()), 4);
        assert_eq!(session.score(), 2);
        assert_eq!(session.fruit(), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_wall_collision_ends_game_with_offset_score() {
        let mut session = recorded_session(vec![Coord::new(1, 5)]);

        // drive right into the wall; playable width is 8, head starts at x=4
        let mut result = session.tick(Some(Direction::Right)).unwrap();
        while !result.game_over {
            result = session.tick(None).unwrap();
        }

        assert_eq!(result.obstacle, Some(Obstacle::Wall));
        assert_eq!(session.status(), SessionStatus::GameOver);
        // one fruit spawned, none eaten: reported score is 1 - 1
        assert_eq!(session.final_score(), 0);
    }

    #[test]
    fn test_body_collision_ends_game() {
        // eat two fruits laid out along the path so the snake is long
        // enough to curl into itself
        let mut session = recorded_session(vec![
            Coord::new(5, 2),
            Coord::new(6, 2),
            Coord::new(1, 5),
            Coord::new(2, 5),
        ]);

        session.tick(Some(Direction::Right)).unwrap(); // eat (5,2), len 4
        session.tick(None).unwrap(); // eat (6,2), len 5
        session.tick(Some(Direction::Down)).unwrap();
        session.tick(Some(Direction::Left)).unwrap();
        // head (5,3); (5,2) holds a mid-body segment
        let result = session.tick(Some(Direction::Up)).unwrap();

        assert!(result.game_over);
        assert_eq!(result.obstacle, Some(Obstacle::Body));
        // two fruits eaten, three spawns happened
        assert_eq!(session.final_score(), 2);
    }

    #[test]
    fn test_ticks_after_game_over_are_rejected() {
        let mut session = recorded_session(vec![Coord::new(1, 5)]);
        let mut result = session.tick(Some(Direction::Up)).unwrap();
        while !result.game_over {
            result = session.tick(None).unwrap();
        }
        let board_after = session.board().clone();

        let result = session.tick(Some(Direction::Down)).unwrap();

        assert!(result.game_over);
        assert_eq!(session.board(), &board_after);
    }

    #[test]
    fn test_recorded_fruit_on_occupied_cell_is_skipped() {
        // second planned fruit lands on the snake's start column
        let mut session = recorded_session(vec![Coord::new(5, 2), Coord::new(4, 3)]);

        session.tick(Some(Direction::Right)).unwrap();

        // spawn counted, but no fruit is on the board this tick
        assert_eq!(session.score(), 2);
        assert_eq!(session.fruit(), None);
    }
}
