use criterion::{criterion_group, criterion_main, Criterion};
use qrveil_core::{embed, extract, read_bits, Channel, Layout, RasterBuffer};

pub fn image_decoding(c: &mut Criterion) {
    let carrier = RasterBuffer::filled(512, 512, [255, 255, 255, 255]);
    let secret = embed(carrier, &[0x5a; 4096], &Layout::default())
        .expect("Carrier too small for the secret message");

    c.bench_function("Raster Bit Decoding", |b| {
        b.iter(|| read_bits(&secret, 512, Channel::Blue, 4096))
    });

    c.bench_function("Raster Frame Extraction", |b| {
        b.iter(|| extract(&secret, &Layout::default()).expect("No frame found"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
