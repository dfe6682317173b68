use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{Direction, FruitPlan, FruitSource, GameConfig, GameSession, SessionStatus};
use crate::sim::{record_session, replay_session, GameSequence, RandomMoves};

/// Autonomous play: record a random game against a pre-generated fruit
/// plan, then run replay-and-continue rounds that keep the best score.
///
/// Every round replays the best sequence so far (minus its fatal final
/// move, when it died) over the same fruit plan, so each attempt starts
/// from a reproduced board and only the tail of moves is new.
pub struct SimulateMode {
    config: GameConfig,
    rounds: usize,
    verbose: bool,
    seed: Option<u64>,
}

impl SimulateMode {
    pub fn new(config: GameConfig, rounds: usize, verbose: bool, seed: Option<u64>) -> Self {
        Self {
            config,
            rounds,
            verbose,
            seed,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut plan_rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let plan = FruitPlan::generate(&mut plan_rng, &self.config);
        let mut source = match self.seed {
            Some(seed) => RandomMoves::seeded(seed.wrapping_add(1)),
            None => RandomMoves::new(),
        };
        let ceiling = self.config.max_sequence_len;

        let mut session = self.fresh_session(&plan)?;
        let (mut best_sequence, mut best_score) =
            record_session(&mut session, &mut source, ceiling)?;
        let mut best_died = session.status() == SessionStatus::GameOver;
        info!(
            "round 0: score {best_score} over {} moves",
            best_sequence.len()
        );
        self.echo(&best_sequence);

        for round in 1..=self.rounds {
            // drop the fatal final move so the continuation has room to differ
            let prefix: &[Direction] = if best_died && !best_sequence.is_empty() {
                &best_sequence[..best_sequence.len() - 1]
            } else {
                &best_sequence
            };

            let mut session = self.fresh_session(&plan)?;
            let (sequence, score) = replay_session(&mut session, prefix, &mut source, ceiling)?;

            if score > best_score {
                info!("round {round}: improved score {best_score} -> {score}");
                best_sequence = sequence;
                best_score = score;
                best_died = session.status() == SessionStatus::GameOver;
                self.echo(&best_sequence);
            } else {
                debug!("round {round}: score {score}, keeping {best_score}");
            }
        }

        println!(
            "Best score {best_score} over {} moves after {} rounds",
            best_sequence.len(),
            self.rounds + 1
        );
        Ok(())
    }

    fn fresh_session(&self, plan: &FruitPlan) -> Result<GameSession> {
        Ok(GameSession::new(
            self.config.clone(),
            FruitSource::recorded(plan.clone()),
        )?)
    }

    fn echo(&self, sequence: &GameSequence) {
        if self.verbose {
            let tags: String = sequence.iter().map(Direction::tag).collect();
            println!("{tags}");
        }
    }
}
