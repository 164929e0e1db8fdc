use criterion::{Criterion, black_box, criterion_group, criterion_main};
use threadcircle::anchors::point_intersection;
use threadcircle::bindings::create_bindings;
use threadcircle::raster::bresenhams_line;
use threadcircle::reconcile::compare_bindings;
use threadcircle::{Color, PixelBuffer, Point};

fn bench_reconcile(c: &mut Criterion) {
    let mut g = c.benchmark_group("compare_bindings");
    let radius = 180.0;

    for n in [64usize, 256] {
        let bindings = create_bindings(Point::ORIGIN, radius, n).unwrap();
        let fan = point_intersection(Point::new(1.0, 0.0), Point::ORIGIN, radius, n / 2).unwrap();
        g.bench_function(format!("{n}_bindings"), |b| {
            b.iter(|| compare_bindings(black_box(&bindings), black_box(&fan), radius).unwrap());
        });
    }
    g.finish();
}

fn bench_line(c: &mut Criterion) {
    let mut buf = PixelBuffer::new(400, 400);
    let white = Color::WHITE;
    c.bench_function("bresenhams_line_diagonal", |b| {
        b.iter(|| {
            let from = black_box(Point::new(-180.0, -180.0));
            let to = black_box(Point::new(180.0, 180.0));
            bresenhams_line(&mut buf, from, to, white)
        });
    });
}

criterion_group!(benches, bench_reconcile, bench_line);
criterion_main!(benches);
