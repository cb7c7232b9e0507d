//! Minimal line-oriented text protocol.
//!
//! A UCI-flavoured driver for manual use and scripting. Supported commands:
//! `uci`, `isready`, `ucinewgame`, `position startpos|fen <fen> [moves ...]`,
//! `go [depth N] [movetime MS] [nodes N]`, `eval`, `perft N`, `quit`.
//! Searches run synchronously, so there is no `stop`.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use thiserror::Error;

use crate::board::{FenError, MoveParseError, Position};
use crate::search::{SearchEngine, SearchLimits, SearchResult};

/// Depth used by `go` when no limit is given.
const DEFAULT_GO_DEPTH: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] FenError),
    #[error("invalid move '{notation}': {source}")]
    InvalidMove {
        notation: String,
        #[source]
        source: MoveParseError,
    },
    #[error("missing arguments for '{0}'")]
    MissingArguments(&'static str),
    #[error("bad number '{0}'")]
    BadNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Uci,
    IsReady,
    NewGame,
    Position(Vec<String>),
    Go(Vec<String>),
    Eval,
    Perft(u32),
    Quit,
    Unknown(String),
}

/// Split a line into a command. Blank lines give `None`.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let first = *parts.first()?;
    let owned = || parts[1..].iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match first {
        "uci" => Command::Uci,
        "isready" => Command::IsReady,
        "ucinewgame" => Command::NewGame,
        "position" => Command::Position(owned()),
        "go" => Command::Go(owned()),
        "eval" => Command::Eval,
        "perft" => Command::Perft(parts.get(1).and_then(|d| d.parse().ok()).unwrap_or(1)),
        "quit" => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    };
    Some(cmd)
}

/// Build a position from the arguments of a `position` command.
pub fn parse_position(args: &[String]) -> Result<Position, CommandError> {
    let moves_at = args.iter().position(|a| a == "moves").unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut pos = match setup.first().map(String::as_str) {
        Some("startpos") => Position::new(),
        Some("fen") if setup.len() > 1 => Position::try_from_fen(&setup[1..].join(" "))?,
        _ => return Err(CommandError::MissingArguments("position")),
    };

    for notation in moves.iter().skip(1) {
        let mv = pos
            .parse_move(notation)
            .map_err(|source| CommandError::InvalidMove {
                notation: notation.clone(),
                source,
            })?;
        pos.apply(mv);
    }
    Ok(pos)
}

/// Build search limits from the arguments of a `go` command.
pub fn parse_go(args: &[String]) -> Result<SearchLimits, CommandError> {
    fn number<T: std::str::FromStr>(value: Option<&String>) -> Result<T, CommandError> {
        let value = value.ok_or(CommandError::MissingArguments("go"))?;
        value
            .parse()
            .map_err(|_| CommandError::BadNumber(value.clone()))
    }

    let mut limits = SearchLimits::depth(DEFAULT_GO_DEPTH);
    let mut has_depth = false;
    let mut iter = args.iter();
    while let Some(key) = iter.next() {
        match key.as_str() {
            "depth" => {
                limits.max_depth = number(iter.next())?;
                has_depth = true;
            }
            "movetime" => {
                let ms: u64 = number(iter.next())?;
                limits.time = Some(Duration::from_millis(ms));
                if !has_depth {
                    limits.max_depth = crate::search::MAX_DEPTH;
                }
            }
            "nodes" => limits.nodes = Some(number(iter.next())?),
            _ => {}
        }
    }
    Ok(limits)
}

fn format_score(result: &SearchResult) -> String {
    match result.mate_in() {
        Some(moves) => format!("mate {moves}"),
        None => format!("cp {}", result.score),
    }
}

/// Run the protocol until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut engine = SearchEngine::default();
    let mut pos = Position::new();

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Uci => {
                writeln!(output, "id name bitboard_chess")?;
                writeln!(output, "uciok")?;
            }
            Command::IsReady => writeln!(output, "readyok")?,
            Command::NewGame => {
                engine.new_game();
                pos = Position::new();
            }
            Command::Position(args) => match parse_position(&args) {
                Ok(next) => pos = next,
                Err(e) => writeln!(output, "info string error: {e}")?,
            },
            Command::Go(args) => {
                let limits = match parse_go(&args) {
                    Ok(limits) => limits,
                    Err(e) => {
                        writeln!(output, "info string error: {e}")?;
                        continue;
                    }
                };
                let result = engine.search(&mut pos, &limits);
                let pv: Vec<String> = result.pv.iter().map(|m| m.to_uci()).collect();
                writeln!(
                    output,
                    "info depth {} score {} nodes {} time {} hashfull {} pv {}",
                    result.depth,
                    format_score(&result),
                    result.nodes,
                    result.elapsed.as_millis(),
                    engine.tt().hashfull_per_mille(),
                    pv.join(" ")
                )?;
                match result.best_move {
                    Some(mv) => writeln!(output, "bestmove {}", mv.to_uci())?,
                    None => writeln!(output, "bestmove 0000")?,
                }
            }
            Command::Eval => writeln!(output, "eval {}", pos.evaluate())?,
            Command::Perft(depth) => {
                let mut total = 0;
                for (mv, count) in pos.perft_divide(depth) {
                    writeln!(output, "{}: {count}", mv.to_uci())?;
                    total += count;
                }
                writeln!(output, "nodes {total}")?;
            }
            Command::Quit => break,
            Command::Unknown(text) => writeln!(output, "info string unknown command: {text}")?,
        }
        output.flush()?;
    }
    Ok(())
}
