use criterion::{Criterion, black_box, criterion_group, criterion_main};
use shared_rope::*;

fn appended_rope(count: usize) -> SharedRope<u8> {
    let mut rope = SharedRope::new();

    for idx in 0..count {
        rope = rope.concat(&SharedRope::from_vec(vec![b'a' + (idx % 26) as u8; 8]));
    }

    rope
}

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");
    group.sample_size(20);

    let pieces = (0..1024).map(|idx| SharedRope::from_vec(vec![idx as u8; 8])).collect::<Vec<_>>();

    group.bench_function("concat_all", |b| {
        b.iter(|| {
            let rope = SharedRope::new().concat_all(black_box(&pieces));
            black_box(rope);
        });
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let mut builder = RopeBuilder::new();
            for piece in black_box(&pieces) {
                builder.append(piece);
            }
            black_box(builder.build());
        });
    });

    group.finish();
}

fn bench_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");
    group.sample_size(20);

    let rope = appended_rope(4096).rebalance();
    let len  = rope.len() as i64;

    group.bench_function("slice_middle", |b| {
        b.iter(|| {
            black_box(rope.slice(black_box(len / 3), black_box(2 * len / 3)));
        });
    });

    group.finish();
}

fn bench_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebalance");
    group.sample_size(20);

    let unbalanced = appended_rope(4096);

    group.bench_function("rebalance_appended", |b| {
        b.iter(|| {
            black_box(black_box(&unbalanced).rebalance());
        });
    });

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    group.sample_size(20);

    let rope = appended_rope(4096).rebalance();

    group.bench_function("reader_64", |b| {
        let mut buf = [0u8; 64];

        b.iter(|| {
            let mut reader  = rope.reader();
            let mut total   = 0;

            while let ReadResult::Cells(count) = reader.read(&mut buf) {
                total += count;
            }

            black_box(total);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_concat, bench_slice, bench_rebalance, bench_read);
criterion_main!(benches);
