//! Benchmark for the object pool hot path.
//!
//! TARGET: acquire + release well under 100ns once warm
//!
//! Run with: cargo bench --package ashfall_pool --bench pool_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use ashfall_pool::{Lifecycle, ObjectPool, PoolConfig};

/// A plausible gameplay entity: big enough that creation is not free.
#[derive(Clone)]
struct Projectile {
    position: [f32; 3],
    velocity: [f32; 3],
    life: f32,
}

struct ProjectileHooks;

impl Lifecycle for ProjectileHooks {
    type Item = Projectile;

    fn create(&mut self) -> Projectile {
        Projectile {
            position: [0.0; 3],
            velocity: [0.0; 3],
            life: 1.0,
        }
    }

    fn activate(&mut self, item: &mut Projectile) {
        item.life = 1.0;
    }

    fn deactivate(&mut self, item: &mut Projectile) {
        item.velocity = [0.0; 3];
    }
}

fn bench_acquire_release(c: &mut Criterion) {
    let config = PoolConfig {
        max_count: 4096,
        initial_capacity: 4096,
        prewarm_count: 4096,
        check_duplicates: false,
    };

    let mut group = c.benchmark_group("pool");
    group.throughput(Throughput::Elements(1));

    group.bench_function("acquire_release_warm", |b| {
        let mut pool = ObjectPool::new(&config, ProjectileHooks);
        pool.prewarm(config.prewarm_count).unwrap();
        b.iter(|| {
            let handle = pool.acquire().unwrap();
            let projectile = pool.get_mut(handle).unwrap();
            projectile.position = black_box([1.0, 2.0, 3.0]);
            black_box((projectile.position, projectile.velocity, projectile.life));
            pool.release(handle).unwrap();
        });
    });

    group.bench_function("acquire_release_burst_64", |b| {
        let mut pool = ObjectPool::new(&config, ProjectileHooks);
        pool.prewarm(config.prewarm_count).unwrap();
        let mut handles = Vec::with_capacity(64);
        b.iter(|| {
            for _ in 0..64 {
                handles.push(pool.acquire().unwrap());
            }
            for handle in handles.drain(..) {
                pool.release(black_box(handle)).unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_acquire_release);
criterion_main!(benches);
