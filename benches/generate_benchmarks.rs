use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use sokogen::config::GeneratorConfig;
use sokogen::maze::{reduce_maze, MazeBuilder, TemplateCatalog};
use sokogen::puzzle::PuzzleFiller;

pub fn bench_build(c: &mut Criterion) {
    let catalog = TemplateCatalog::builtin();
    let config = GeneratorConfig::default();
    let builder = MazeBuilder::new(&catalog, &config.builder);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("build_and_reduce", |b| {
        b.iter(|| {
            let maze = builder.build(&mut rng).map(reduce_maze);
            black_box(maze)
        })
    });
}

pub fn bench_fill(c: &mut Criterion) {
    let catalog = TemplateCatalog::builtin();
    let config = GeneratorConfig::default();
    let builder = MazeBuilder::new(&catalog, &config.builder);
    let filler = PuzzleFiller::new(&config.filler);
    let mut rng = StdRng::seed_from_u64(2);

    c.bench_function("fill", |b| {
        b.iter_batched(
            || builder.build(&mut StdRng::seed_from_u64(3)).map(reduce_maze),
            |maze| {
                if let Ok(mut maze) = maze {
                    black_box(filler.fill(&mut maze, &mut rng)).ok();
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(generate_benches, bench_build, bench_fill);

criterion_main!(generate_benches);
