// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast lifecycles through the overlay host.
//!
//! Measures the performance of:
//! - A full show, decay and removal cycle on simulated frame ticks
//! - A single frame tick with several toasts on screen
//! - Message wrapping used by layout and drawing

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_toast::domain::ToastPosition;
use iced_toast::overlay::Overlay;
use iced_toast::toast::{ToastController, ToastRequest};
use std::hint::black_box;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

fn setup() -> (Overlay, ToastController, Instant) {
    let start = Instant::now();
    let overlay = Overlay::new(start);
    overlay.resize(Size::new(400.0, 800.0));
    let controller = ToastController::new(overlay.host());
    (overlay, controller, start)
}

/// Benchmark one toast from `show` to removal.
fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_lifecycle");

    group.bench_function("show_decay_remove", |b| {
        b.iter(|| {
            let (overlay, controller, start) = setup();
            controller.show(ToastRequest::new("Saved").decay_in(Duration::from_secs(1)));
            let mut now = start;
            while overlay.is_busy() {
                now += FRAME;
                overlay.tick(now);
            }
            black_box(controller.live_count());
        });
    });

    group.finish();
}

/// Benchmark a single frame tick with toasts mid-animation.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_lifecycle");

    let (overlay, controller, start) = setup();
    for i in 0..8 {
        let position = if i % 2 == 0 {
            ToastPosition::Top
        } else {
            ToastPosition::Bottom
        };
        controller.show(ToastRequest::new(format!("Toast #{i}")).position(position));
    }
    let now = start + Duration::from_millis(250);

    group.bench_function("tick_eight_toasts", |b| {
        b.iter(|| overlay.tick(black_box(now)));
    });

    group.finish();
}

/// Benchmark greedy wrapping of a long message.
fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_lifecycle");

    let (_overlay, controller, _) = setup();
    let message = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let content = controller
        .present(ToastRequest::new(message))
        .ok()
        .and_then(|handle| handle.view())
        .map(|view| view.content().clone())
        .expect("overlay should provide a surface");

    group.bench_function("wrap_long_message", |b| {
        b.iter(|| black_box(content.wrapped_lines(black_box(384.0))));
    });

    group.finish();
}

criterion_group!(benches, bench_full_cycle, bench_tick, bench_wrap);
criterion_main!(benches);
