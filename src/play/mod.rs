//! Interactive human-vs-agent console play.
//!
//! Thin glue over the engine and agent: prompts the human for moves,
//! rejects and re-prompts on invalid input via the engine's error
//! contract, and lets the agent answer greedily. The loop is generic
//! over its reader/writer so tests can script a whole game.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::agent::QLearningAgent;
use crate::core::{Action, GameRng, Piles, Player};
use crate::engine::Game;

/// Play one game against the agent on stdin/stdout.
///
/// `human` picks the human's seat; `None` assigns it at random. Returns
/// the recorded winner of the game.
pub fn play(agent: &mut QLearningAgent, human: Option<Player>) -> io::Result<Player> {
    let stdin = io::stdin();
    let mut rng = GameRng::from_entropy();
    run(
        agent,
        Piles::default(),
        human,
        &mut rng,
        stdin.lock(),
        io::stdout(),
    )
}

/// Play one game against the agent over arbitrary I/O.
///
/// The human is prompted for a `pile count` pair each turn; malformed
/// input and rejected moves print the reason and re-prompt. The agent
/// moves greedily (no exploration). Ends once the game has a winner and
/// reports whether it was the human or the agent.
pub fn run<R: BufRead, W: Write>(
    agent: &mut QLearningAgent,
    piles: Piles,
    human: Option<Player>,
    rng: &mut GameRng,
    mut input: R,
    mut output: W,
) -> io::Result<Player> {
    let human = human.unwrap_or_else(|| {
        if rng.gen_bool(0.5) {
            Player::One
        } else {
            Player::Two
        }
    });
    let mut game = Game::new(piles);

    loop {
        writeln!(output)?;
        writeln!(output, "Piles: {}", game.piles())?;

        if game.player() == human {
            prompt_human_move(&mut game, &mut input, &mut output)?;
        } else {
            let action = agent
                .choose_action(game.piles(), false)
                .expect("a game that is not over has at least one legal action");
            debug!(%action, "agent move");
            writeln!(output, "The agent takes {} from pile {}.", action.count, action.pile)?;
            game.apply_move(action)
                .expect("greedy action is legal for the current position");
        }

        if let Some(winner) = game.winner() {
            writeln!(output)?;
            if winner == human {
                writeln!(output, "You win!")?;
            } else {
                writeln!(output, "The agent wins!")?;
            }
            return Ok(winner);
        }
    }
}

/// Prompt until the human supplies a move the engine accepts.
fn prompt_human_move<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        write!(output, "Your move (pile count): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game ended",
            ));
        }

        match parse_move(&line) {
            Some(action) => match game.apply_move(action) {
                Ok(()) => return Ok(()),
                Err(err) => writeln!(output, "{err}")?,
            },
            None => writeln!(output, "enter two numbers: a pile index and a count")?,
        }
    }
}

/// Parse a `pile count` pair, e.g. `"3 1"`.
fn parse_move(line: &str) -> Option<Action> {
    let mut parts = line.split_whitespace();
    let pile = parts.next()?.parse().ok()?;
    let count = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Action::new(pile, count))
}
