// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use tactile_controller::controller::{Controller, PointerEvent, PointerId};
use tactile_controller::scene::SceneView;
use tactile_gesture::pinch::Scale3;
use tactile_gesture::rotate::Euler;

/// A flat scene: node 0 is the container, nodes 1..=4 chain up to it.
struct ChainScene;

impl SceneView for ChainScene {
    type NodeId = u32;

    fn parent(&self, node: u32) -> Option<u32> {
        node.checked_sub(1)
    }

    fn is_container(&self, node: u32) -> bool {
        node == 0
    }

    fn orientation(&self, _node: u32) -> Option<Euler> {
        Some(Euler::ZERO)
    }

    fn scale(&self, _node: u32) -> Option<Scale3> {
        Some(Scale3::splat(0.5))
    }
}

fn drag_stream(moves: usize) -> Vec<PointerEvent<u32>> {
    let p = PointerId(1);
    let mut events = vec![PointerEvent::Down {
        pointer: p,
        pos: Point::new(0.0, 0.0),
        hit: Some(4),
    }];
    for i in 0..moves {
        events.push(PointerEvent::Move {
            pointer: p,
            pos: Point::new(i as f64, (i % 7) as f64),
        });
    }
    events.push(PointerEvent::Up {
        pointer: p,
        time_ms: moves as u64,
    });
    events
}

fn pinch_stream(moves: usize) -> Vec<PointerEvent<u32>> {
    let (a, b) = (PointerId(1), PointerId(2));
    let mut events = vec![
        PointerEvent::Down {
            pointer: a,
            pos: Point::new(0.0, 0.0),
            hit: Some(4),
        },
        PointerEvent::Down {
            pointer: b,
            pos: Point::new(100.0, 0.0),
            hit: Some(4),
        },
    ];
    for i in 0..moves {
        events.push(PointerEvent::Move {
            pointer: b,
            pos: Point::new(100.0 + (i % 40) as f64, 0.0),
        });
    }
    events.push(PointerEvent::Up {
        pointer: b,
        time_ms: moves as u64,
    });
    events.push(PointerEvent::Up {
        pointer: a,
        time_ms: moves as u64 + 1,
    });
    events
}

fn bench_event_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/handle");

    for moves in [256usize, 4_096] {
        group.throughput(Throughput::Elements(moves as u64));

        let drag = drag_stream(moves);
        group.bench_with_input(BenchmarkId::new("drag", moves), &drag, |b, events| {
            b.iter_batched(
                Controller::<u32>::default,
                |mut controller| {
                    for event in events {
                        black_box(controller.handle(&ChainScene, *event));
                    }
                    black_box(controller);
                },
                BatchSize::SmallInput,
            );
        });

        let pinch = pinch_stream(moves);
        group.bench_with_input(BenchmarkId::new("pinch", moves), &pinch, |b, events| {
            b.iter_batched(
                Controller::<u32>::default,
                |mut controller| {
                    for event in events {
                        black_box(controller.handle(&ChainScene, *event));
                    }
                    black_box(controller);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_event_streams);
criterion_main!(benches);
