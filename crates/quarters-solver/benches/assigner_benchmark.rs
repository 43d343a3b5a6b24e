// Copyright (c) 2026 the quarters developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quarters_model::model::{Demand, Room, RoomCatalog, RoomId};
use quarters_solver::monitor::NoOperationMonitor;
use quarters_solver::occupancy::OccupancyAssigner;
use quarters_solver::price::PriceAssigner;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const QUERY_COUNT: usize = 20;

/// Builds a deterministic random catalog. The seed is fixed so every
/// benchmark run enumerates the same subsets.
fn random_catalog(num_rooms: usize, seed: u64) -> RoomCatalog<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rooms: Vec<Room<i64>> = (0..num_rooms)
        .map(|i| {
            let price = rng.random_range(10..200);
            let capacity = rng.random_range(1..8);
            Room::new(RoomId::new(i as u64), price, capacity)
        })
        .collect();
    RoomCatalog::from_rooms(rooms)
}

/// Demands roughly half the total capacity, which keeps both search trees
/// busy without exhausting them on the first subset.
fn half_capacity_demand(catalog: &RoomCatalog<i64>) -> Demand<i64> {
    let guests = catalog.total_capacity() / 2;
    Demand::new(guests, QUERY_COUNT)
}

fn bench_assigners(c: &mut Criterion) {
    let mut group = c.benchmark_group("assigner_benchmark");

    for &num_rooms in &[8usize, 12, 16, 20] {
        let catalog = random_catalog(num_rooms, 42);
        let demand = half_capacity_demand(&catalog);

        group.throughput(Throughput::Elements(num_rooms as u64));

        group.bench_with_input(
            BenchmarkId::new("price", num_rooms),
            &num_rooms,
            |b, _| {
                b.iter(|| {
                    let outcome = PriceAssigner::new()
                        .solve(
                            black_box(&catalog),
                            black_box(&demand),
                            NoOperationMonitor::new(),
                        )
                        .expect("demand is half of total capacity");
                    black_box(outcome)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("occupancy", num_rooms),
            &num_rooms,
            |b, _| {
                b.iter(|| {
                    let outcome = OccupancyAssigner::new()
                        .solve(
                            black_box(&catalog),
                            black_box(&demand),
                            NoOperationMonitor::new(),
                        )
                        .expect("demand is half of total capacity");
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_assigners);
criterion_main!(benches);
