use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use codevs_client::adapter::{read_turn, TokenReader};
use codevs_client::core::{fall_obstacle, Field, Pack};
use codevs_client::types::GameConfig;

fn bench_rotate(c: &mut Criterion) {
    let pack = Pack::from_rows(&[[1, 2], [3, 4]]).unwrap();

    c.bench_function("rotate_pack_3", |b| {
        b.iter(|| black_box(&pack).rotate(black_box(3)))
    });
}

fn bench_fall_obstacle(c: &mut Criterion) {
    let config = GameConfig::default();
    let visible = vec![5u8; config.width * (config.height - 4)];
    let mut cells = vec![0u8; config.width * 4];
    cells.extend(visible);
    let field = Field::from_visible(&config, &cells).unwrap();

    c.bench_function("fall_obstacle_row", |b| {
        b.iter(|| fall_obstacle(black_box(&field), black_box(25), &config))
    });
}

fn bench_read_turn(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut text = String::from("12\n");
    for _ in 0..2 {
        text.push_str("170000 12 40 300\n");
        for _ in 0..config.height {
            text.push_str("0 1 2 3 4 5 6 7 8 9\n");
        }
        text.push_str("END\n");
    }

    c.bench_function("read_turn", |b| {
        b.iter(|| {
            let mut sc = TokenReader::new(Cursor::new(text.as_bytes()));
            read_turn(&mut sc, &config).unwrap()
        })
    });
}

criterion_group!(benches, bench_rotate, bench_fall_obstacle, bench_read_turn);
criterion_main!(benches);
