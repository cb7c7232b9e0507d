use std::io;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    bitboard_chess::protocol::run(stdin.lock(), io::stdout().lock())
}
