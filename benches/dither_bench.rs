use monodither::image::{ImageBuffer, Rgba};
use monodither::imgproc::{dithering, greyscale};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn dithering_bench(c: &mut Criterion) {
    c.bench_function("Stucki mono, 1k*1k", |b| {
        let mut img = ImageBuffer::new((1000, 1000).into(), Rgba::default());
        for y in 0..img.height() {
            for x in 0..img.width() {
                let v = ((x * 37 + y * 11) % 256) as u8;
                img.set(x, y, Rgba { r: v, g: v, b: v, a: 0xff });
            }
        }
        b.iter(|| black_box(dithering::stucki_mono(greyscale::from_rgba(&img))));
    });
}

criterion_group!(benches, dithering_bench);
criterion_main!(benches);
