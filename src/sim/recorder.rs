use crate::game::{Direction, GameError, GameSession, SessionStatus};

use super::sources::MoveSource;

/// Ordered list of the directions taken in one game, one per tick
pub type GameSequence = Vec<Direction>;

/// Drive `session` with moves from `source` until the game ends or
/// `ceiling` moves have been recorded. Returns the full sequence,
/// including a fatal final move, and the reported score.
pub fn record_session(
    session: &mut GameSession,
    source: &mut dyn MoveSource,
    ceiling: usize,
) -> Result<(GameSequence, i32), GameError> {
    let mut sequence = GameSequence::new();
    while session.status() == SessionStatus::Active && sequence.len() < ceiling {
        let direction = source.next_move(session);
        session.tick(Some(direction))?;
        sequence.push(direction);
    }
    Ok((sequence, session.final_score()))
}

/// Replay `prefix` over `session`, then keep playing with `source`.
///
/// Prefix directions are fed to the session verbatim and positionally,
/// with no re-derivation. For the replay to reproduce the original
/// trajectory the session must have been created with the same recorded
/// fruit plan; the continuation then picks up exactly where the prefix
/// left off. Returns the prefix plus the newly generated tail.
pub fn replay_session(
    session: &mut GameSession,
    prefix: &[Direction],
    source: &mut dyn MoveSource,
    ceiling: usize,
) -> Result<(GameSequence, i32), GameError> {
    let mut sequence = GameSequence::with_capacity(prefix.len());

    for &direction in prefix {
        if session.status() != SessionStatus::Active || sequence.len() >= ceiling {
            break;
        }
        session.tick(Some(direction))?;
        sequence.push(direction);
    }

    while session.status() == SessionStatus::Active && sequence.len() < ceiling {
        let direction = source.next_move(session);
        session.tick(Some(direction))?;
        sequence.push(direction);
    }

    Ok((sequence, session.final_score()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, FruitPlan, FruitSource, GameConfig};
    use crate::sim::sources::RandomMoves;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Cycles through a fixed direction list forever
    struct Scripted {
        moves: Vec<Direction>,
        next: usize,
    }

    impl Scripted {
        fn new(moves: Vec<Direction>) -> Self {
            Self { moves, next: 0 }
        }
    }

    impl MoveSource for Scripted {
        fn next_move(&mut self, _session: &GameSession) -> Direction {
            let direction = self.moves[self.next % self.moves.len()];
            self.next += 1;
            direction
        }
    }

    fn fresh_session(plan: &FruitPlan) -> GameSession {
        GameSession::new(GameConfig::small(), FruitSource::recorded(plan.clone())).unwrap()
    }

    #[test]
    fn test_recording_stops_at_ceiling_without_death() {
        // head (4,2), body below; R,D,L,U walks a 2x2 loop forever while
        // the only planned fruit sits out of reach at (1,1)
        let plan = FruitPlan::from_coords(vec![Coord::new(1, 1)]);
        let mut session = fresh_session(&plan);
        let mut source = Scripted::new(vec![
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ]);

        let (sequence, score) = record_session(&mut session, &mut source, 25).unwrap();

        assert_eq!(sequence.len(), 25);
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_recording_ends_with_the_fatal_move() {
        let plan = FruitPlan::from_coords(vec![Coord::new(1, 5)]);
        let mut session = fresh_session(&plan);
        // straight up: one empty cell, then the wall
        let mut source = Scripted::new(vec![Direction::Up]);

        let (sequence, score) = record_session(&mut session, &mut source, 100).unwrap();

        assert_eq!(sequence, vec![Direction::Up; 2]);
        assert_eq!(session.status(), SessionStatus::GameOver);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_replay_reproduces_board_and_score_exactly() {
        let config = GameConfig::small();
        let plan = FruitPlan::generate(&mut StdRng::seed_from_u64(11), &config);

        let mut original = fresh_session(&plan);
        let mut source = RandomMoves::seeded(23);
        let (sequence, score) =
            record_session(&mut original, &mut source, config.max_sequence_len).unwrap();

        // an unseeded source proves the prefix alone decides the outcome
        let mut replayed = fresh_session(&plan);
        let mut live = RandomMoves::new();
        let (resequence, rescore) =
            replay_session(&mut replayed, &sequence, &mut live, sequence.len()).unwrap();

        assert_eq!(resequence, sequence);
        assert_eq!(rescore, score);
        assert_eq!(replayed.board(), original.board());
        assert_eq!(replayed.snake(), original.snake());
        assert_eq!(replayed.status(), original.status());
    }

    #[test]
    fn test_any_prefix_length_replays_identically() {
        let config = GameConfig::small();
        let plan = FruitPlan::generate(&mut StdRng::seed_from_u64(31), &config);

        let mut original = fresh_session(&plan);
        let mut source = RandomMoves::seeded(8);
        let (sequence, _) =
            record_session(&mut original, &mut source, config.max_sequence_len).unwrap();

        // two replays of the same half-length prefix must agree even with
        // unrelated live sources, since the ceiling stops them at the prefix
        let half = sequence.len() / 2;
        let mut a = fresh_session(&plan);
        let mut b = fresh_session(&plan);
        replay_session(&mut a, &sequence[..half], &mut RandomMoves::new(), half).unwrap();
        replay_session(&mut b, &sequence[..half], &mut RandomMoves::seeded(1), half).unwrap();

        assert_eq!(a.board(), b.board());
        assert_eq!(a.snake(), b.snake());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_replay_prefix_then_continues_with_live_source() {
        let plan = FruitPlan::from_coords(vec![Coord::new(1, 1)]);
        let mut session = fresh_session(&plan);

        let prefix = vec![Direction::Right, Direction::Down];
        let mut tail = Scripted::new(vec![Direction::Left, Direction::Up]);
        let (sequence, _) = replay_session(&mut session, &prefix, &mut tail, 4).unwrap();

        assert_eq!(
            sequence,
            vec![
                Direction::Right,
                Direction::Down,
                Direction::Left,
                Direction::Up,
            ]
        );
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn test_replay_stops_inside_a_fatal_prefix() {
        let plan = FruitPlan::from_coords(vec![Coord::new(1, 5)]);
        let mut session = fresh_session(&plan);

        // the second Up hits the wall; the trailing moves must not run
        let prefix = vec![Direction::Up; 6];
        let mut live = Scripted::new(vec![Direction::Down]);
        let (sequence, _) = replay_session(&mut session, &prefix, &mut live, 100).unwrap();

        assert_eq!(sequence.len(), 2);
        assert_eq!(session.status(), SessionStatus::GameOver);
    }
}
