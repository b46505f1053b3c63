use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lib::chess::{Board, Color, Move, Placement, Square};
use lib::util::Integer;

fn positions() -> Vec<Board> {
    [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
    ]
    .iter()
    .filter_map(|s| s.parse::<Placement>().ok())
    .map(Board::new)
    .collect()
}

fn moves(board: &Board) -> Vec<Move> {
    board
        .iter()
        .flat_map(|(wc, _)| board.destinations(wc).into_iter().map(move |wt| Move(wc, wt)))
        .collect()
}

fn bench(c: &mut Criterion) {
    let boards = positions();
    let mut group = c.benchmark_group("benches");

    group.bench_function("board/destinations", |b| {
        b.iter(|| {
            for board in &boards {
                for sq in Square::iter() {
                    black_box(board.destinations(sq));
                }
            }
        });
    });

    group.bench_function("board/play", |b| {
        let inputs: Vec<_> = boards.iter().map(|board| (board, moves(board))).collect();
        b.iter(|| {
            for (board, moves) in &inputs {
                for &m in moves {
                    let mut next = Board::clone(board);
                    black_box(next.play(m)).ok();
                }
            }
        });
    });

    group.bench_function("board/score", |b| {
        b.iter(|| {
            for board in &boards {
                for c in Color::iter() {
                    black_box(board.score(c));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
