use anyhow::{Context, Result, bail};
use castellan_core::{Board, Square};
use castellan_eval::ChessResult;
use tracing::{info, warn};

/// Validate `castellan FROM TO [FROM TO]...` against the starting position.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("castellan starting");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() % 2 != 0 {
        bail!("expected FROM TO pairs, got {} arguments", args.len());
    }

    let board = Board::starting_position();
    for pair in args.chunks_exact(2) {
        let (from, to) = match parse_pair(&pair[0], &pair[1]) {
            Ok(squares) => squares,
            Err(e) => {
                warn!(from = %pair[0], to = %pair[1], "{e:#}");
                continue;
            }
        };

        let Some(piece) = board.piece_at(from) else {
            warn!(%from, "no piece on source square");
            continue;
        };

        match piece.checked_path(&board, from, to) {
            Ok(path) => {
                let path: Vec<String> = path.iter().map(Square::to_string).collect();
                info!(%piece, %from, %to, path = ?path, "move accepted");
            }
            Err(e) => warn!(%piece, reason = %e.reason, "{e}"),
        }
    }

    let result = ChessResult::from_board(&board);
    info!(white = %result.white(), black = %result.black(), "material");
    Ok(())
}

fn parse_pair(from: &str, to: &str) -> Result<(Square, Square)> {
    let from: Square = from.parse().context("invalid source square")?;
    let to: Square = to.parse().context("invalid target square")?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::parse_pair;

    #[test]
    fn parse_pair_accepts_either_case() {
        let (from, to) = parse_pair("E2", "e4").unwrap();
        assert_eq!(from.to_string(), "e2");
        assert_eq!(to.to_string(), "e4");
    }

    #[test]
    fn parse_pair_names_the_bad_square() {
        let err = parse_pair("e2", "e9").unwrap_err();
        assert_eq!(err.to_string(), "invalid target square");
        let err = parse_pair("", "e4").unwrap_err();
        assert_eq!(err.to_string(), "invalid source square");
    }
}
