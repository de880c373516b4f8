use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tpl_extract_formats::{decode_texels, PixelFormat};

const HEIGHT: u32 = 512;
const WIDTH: u32 = 512;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode texels (TPL -> RGBA8888)");

    for &format in PixelFormat::all_values() {
        if format.is_palette() {
            continue;
        }

        // Pseudo-random texels so branches on sample content aren't predicted trivially.
        let len = format.required_len(HEIGHT, WIDTH);
        let input: Vec<u8> = (0..len)
            .map(|i| (i.wrapping_mul(0x9E37_79B9) >> 7) as u8)
            .collect();

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("decode_texels", format), &input, |b, input| {
            b.iter(|| decode_texels(format, black_box(input), HEIGHT, WIDTH))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
