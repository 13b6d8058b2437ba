use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_brick::core::effects::spiral_order;
use tui_brick::core::surface::PixelBuffer;
use tui_brick::core::{glyphs, FrameDriver, MovingShape, Screen};
use tui_brick::types::{Point, PIXEL_HEIGHT, PIXEL_WIDTH};

fn bench_screen_step(c: &mut Criterion) {
    let mut screen = Screen::new();
    let mut buf = PixelBuffer::new(PIXEL_WIDTH, PIXEL_HEIGHT);
    screen.add_shape(MovingShape::from_vector(
        glyphs::NUM_8,
        Point::new(4, -4),
        Point::new(0, 1),
        1,
    ));
    screen.add_shape(MovingShape::from_vector(
        glyphs::PLAYER_TANK,
        Point::new(2, 5),
        Point::new(1, 0),
        0,
    ));

    c.bench_function("screen_step", |b| {
        b.iter(|| {
            screen.step(black_box(&mut buf));
        })
    });
}

fn bench_spiral_order(c: &mut Criterion) {
    c.bench_function("spiral_order_10x20", |b| {
        b.iter(|| spiral_order(black_box(PIXEL_WIDTH), black_box(PIXEL_HEIGHT)))
    });
}

fn bench_driver_frame(c: &mut Criterion) {
    let mut driver = FrameDriver::new();
    let mut buf = PixelBuffer::new(PIXEL_WIDTH, PIXEL_HEIGHT);

    c.bench_function("driver_frame_16ms", |b| {
        b.iter(|| {
            driver.on_frame(black_box(16.0), &mut buf);
        })
    });
}

criterion_group!(benches, bench_screen_step, bench_spiral_order, bench_driver_frame);
criterion_main!(benches);
