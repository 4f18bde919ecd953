use std::process::ExitCode;
use std::time::Instant;

use chess_0x88::board::{Board, STARTING_FEN};
use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Pseudo-legal perft counts on a 0x88 board")]
struct Args {
    /// Position to count from
    #[arg(long, value_name = "FEN", default_value = STARTING_FEN)]
    fen: String,
    /// Deepest ply to count; every depth from 0 up to this one is printed
    #[arg(long, default_value_t = 4)]
    depth: usize,
    /// Print per-move subtotals at the deepest ply
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut board = match Board::try_from_fen(&args.fen) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{board}");

    for depth in 0..=args.depth {
        let start = Instant::now();
        match board.perft(depth) {
            Ok(nodes) => {
                log::info!("depth {depth} finished in {:?}", start.elapsed());
                println!("perft({depth}) = {nodes}");
            }
            Err(e) => {
                eprintln!("error at depth {depth}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if args.divide && args.depth > 0 {
        match board.perft_divide(args.depth) {
            Ok(split) => {
                for (m, nodes) in &split {
                    println!("{m}: {nodes}");
                }
                println!("moves: {}", split.len());
            }
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
