use std::hint::black_box;

use busnet_core::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;

const GRID: usize = 20;

fn stop_name(row: usize, col: usize) -> String {
    format!("stop {row}-{col}")
}

/// Square grid of stops with one out-and-back route per row and per column
fn grid_catalogue() -> TransitCatalogue {
    let mut catalogue = TransitCatalogue::new();
    for row in 0..GRID {
        for col in 0..GRID {
            #[allow(clippy::cast_precision_loss)]
            let geometry = Point::new(37.0 + col as f64 * 0.005, 55.0 + row as f64 * 0.005);
            let mut neighbours = Vec::new();
            if col + 1 < GRID {
                neighbours.push((stop_name(row, col + 1), 400));
            }
            if row + 1 < GRID {
                neighbours.push((stop_name(row + 1, col), 450));
            }
            catalogue.add_stop(&stop_name(row, col), geometry, neighbours);
        }
    }
    for line in 0..GRID {
        let across: Vec<_> = (0..GRID).map(|col| stop_name(line, col)).collect();
        let down: Vec<_> = (0..GRID).map(|row| stop_name(row, line)).collect();
        catalogue
            .add_route(&format!("H{line}"), &across, false)
            .expect("grid route");
        catalogue
            .add_route(&format!("V{line}"), &down, false)
            .expect("grid route");
    }
    catalogue
}

fn bench_compile(c: &mut Criterion) {
    let catalogue = grid_catalogue();
    let settings = RouterSettings::new(6.0, 40.0);
    c.bench_function("compile grid graph", |b| {
        b.iter(|| TransitGraph::compile(black_box(&catalogue), &settings).expect("graph"));
    });
}

fn bench_route_info(c: &mut Criterion) {
    let model = TransitModel::new(grid_catalogue(), RouterSettings::new(6.0, 40.0)).expect("model");
    let from = stop_name(0, 0);
    let to = stop_name(GRID - 1, GRID - 1);
    c.bench_function("corner to corner itinerary", |b| {
        b.iter(|| model.route_info(black_box(&from), black_box(&to)).expect("itinerary"));
    });
}

fn bench_route_stats(c: &mut Criterion) {
    let catalogue = grid_catalogue();
    c.bench_function("route stats", |b| {
        b.iter(|| catalogue.route_stats(black_box("H7")));
    });
}

criterion_group!(benches, bench_compile, bench_route_info, bench_route_stats);
criterion_main!(benches);
