use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elimination_tactics::core::{Board, GameRng, Side};
use elimination_tactics::rules::{all_moves, EliminationRule, RuleKind};
use elimination_tactics::search::{GreedySearch, WeightedEvaluator};

fn corpus() -> Vec<Board> {
    [
        "MMMM/..../..../HHHH",
        "M.MM/.M../H.H./.H.H",
        "HMH./MH../.HM./M...",
        "MM.M/H.M./.HH./H..H",
    ]
    .iter()
    .filter_map(|s| s.parse().ok())
    .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let boards = corpus();
    for rule in RuleKind::ALL {
        c.bench_function(&format!("resolve/{rule}"), |b| {
            b.iter(|| {
                let mut removed = 0;
                for board in &boards {
                    let mut board = board.clone();
                    removed += rule.resolve(&mut board).total();
                }
                black_box(removed)
            })
        });
    }
}

fn bench_select_move(c: &mut Criterion) {
    let boards = corpus();
    for rule in RuleKind::ALL {
        let search = GreedySearch::new(rule, WeightedEvaluator::default()).with_jitter(2);
        c.bench_function(&format!("select_move/{rule}"), |b| {
            let mut rng = GameRng::new(42);
            b.iter(|| {
                for board in &boards {
                    black_box(search.select_move(board, Side::Machine, &mut rng).ok());
                }
            })
        });
    }
}

fn bench_movegen(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("all_moves", |b| {
        b.iter(|| {
            let mut count = 0;
            for board in &boards {
                count += all_moves(board, Side::Human).len() + all_moves(board, Side::Machine).len();
            }
            black_box(count)
        })
    });
}

criterion_group!(benches, bench_movegen, bench_resolve, bench_select_move);
criterion_main!(benches);
