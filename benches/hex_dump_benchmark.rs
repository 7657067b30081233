use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taglog_rs::timestamp::{timestamped_lines, Precision};
use taglog_rs::util::hex::{format_hex_dump, format_mac};

fn benchmark_hex_dump(c: &mut Criterion) {
    let frame: Vec<u8> = (0..=255u8).cycle().take(1024).collect();

    c.bench_function("format_hex_dump_1k", |b| {
        b.iter(|| {
            let dump = format_hex_dump(black_box(&frame));
            black_box(dump)
        })
    });

    c.bench_function("format_mac", |b| {
        let mac = [0x00, 0x1b, 0x44, 0x11, 0x3a, 0xb7];
        b.iter(|| black_box(format_mac(black_box(&mac))))
    });
}

fn benchmark_timestamped_lines(c: &mut Criterion) {
    let now = chrono::Local::now();
    let message = format_hex_dump(&[0xa5; 256]);

    c.bench_function("timestamped_lines", |b| {
        b.iter(|| black_box(timestamped_lines(black_box(&message), &now, Precision::Microseconds)))
    });
}

criterion_group!(benches, benchmark_hex_dump, benchmark_timestamped_lines);
criterion_main!(benches);
