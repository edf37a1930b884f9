use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use qrveil_core::{embed, write_bits, Channel, Layout, RasterBuffer};

pub fn image_encoding(c: &mut Criterion) {
    let carrier = RasterBuffer::filled(512, 512, [255, 255, 255, 255]);
    let secret_message = [0x5a; 4096];

    c.bench_function("Raster Bit Encoding", |b| {
        let mut raster = carrier.clone();
        b.iter(|| write_bits(&mut raster, 512, Channel::Blue, &secret_message[..]))
    });

    c.bench_function("Raster Frame Embedding", |b| {
        b.iter_batched(
            || carrier.clone(),
            |raster| embed(raster, &secret_message[..], &Layout::default()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
