use criterion::{black_box, criterion_group, criterion_main, Criterion};
use walkthrough::core::{InputEvent, Key, PointerPosition};
use walkthrough::frame::FrameInfo;
use walkthrough::math::clamp_position;
use walkthrough::{CameraStateUpdater, WalkthroughConfig};

/// Benchmark: one tick with nothing held (idle breathing only)
fn bench_tick_idle(c: &mut Criterion) {
    let mut updater = CameraStateUpdater::new(&WalkthroughConfig::default());
    let mut n = 0u64;

    c.bench_function("tick_idle", |b| {
        b.iter(|| {
            n += 1;
            black_box(updater.tick(black_box(&FrameInfo::fixed(n))))
        })
    });
}

/// Benchmark: one tick while running and squatting, sway active
fn bench_tick_walking(c: &mut Criterion) {
    let mut updater = CameraStateUpdater::new(&WalkthroughConfig::default());
    updater.push_event(InputEvent::KeyDown(Key::KeyW));
    updater.push_event(InputEvent::KeyDown(Key::ShiftLeft));
    updater.push_event(InputEvent::KeyDown(Key::ControlLeft));
    let mut n = 0u64;

    c.bench_function("tick_walking", |b| {
        b.iter(|| {
            n += 1;
            black_box(updater.tick(black_box(&FrameInfo::fixed(n))))
        })
    });
}

/// Benchmark: draining a burst of pointer moves before the tick
fn bench_tick_drag_burst(c: &mut Criterion) {
    let mut updater = CameraStateUpdater::new(&WalkthroughConfig::default());
    updater.push_event(InputEvent::PointerDown(PointerPosition { x: 0.0, y: 0.0 }));
    let mut n = 0u64;

    c.bench_function("tick_drag_burst_16", |b| {
        b.iter(|| {
            n += 1;
            for i in 0..16 {
                let x = ((n * 16 + i) % 1000) as f64;
                updater.push_event(InputEvent::PointerMove(PointerPosition { x, y: x * 0.5 }));
            }
            black_box(updater.tick(black_box(&FrameInfo::fixed(n))))
        })
    });
}

/// Benchmark: bounds clamp alone
fn bench_clamp(c: &mut Criterion) {
    let config = WalkthroughConfig::default();
    let point = glam::DVec3::new(100.0, -4.0, 12.0);

    c.bench_function("clamp_position", |b| {
        b.iter(|| black_box(clamp_position(black_box(point), black_box(&config.bounds))))
    });
}

criterion_group!(
    benches,
    bench_tick_idle,
    bench_tick_walking,
    bench_tick_drag_burst,
    bench_clamp
);
criterion_main!(benches);
