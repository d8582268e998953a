//! Interactive spawner demo.
//!
//! Stdin lines stand in for keypresses: `f` spawns an enemy, `g` returns
//! the most recently spawned one, `c` prints counts, `d` destroys the
//! pool, `q` quits.
//!
//! Run with: cargo run --package ashfall_spawn --bin spawn_demo

use std::io::{self, BufRead};

use ashfall_spawn::{
    PoolHandle, PoolSpawner, Spawnable, Spawner, SpawnerConfig, TemplatePolicy, Transform,
};

/// The demo entity - a pooled enemy.
#[derive(Clone, Debug)]
struct Enemy {
    transform: Transform,
    active: bool,
    health: u32,
}

impl Enemy {
    const fn template() -> Self {
        Self {
            transform: Transform::new(ashfall_spawn::Vec3::ZERO, 0.0),
            active: false,
            health: 100,
        }
    }
}

impl Spawnable for Enemy {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.transform = *transform;
    }
}

fn print_help() {
    println!("Commands:");
    println!("  f - spawn an enemy");
    println!("  g - return the most recently spawned enemy");
    println!("  c - print pool counts");
    println!("  d - destroy the whole pool");
    println!("  q - quit");
}

fn print_counts(spawner: &impl PoolSpawner) {
    println!(
        "[POOL] active: {}, inactive: {}, total: {}",
        spawner.active_count(),
        spawner.inactive_count(),
        spawner.total_count()
    );
}

fn main() {
    let config = SpawnerConfig::load("data/spawner.toml").unwrap_or_else(|e| {
        println!("[DEMO] bad config: {e}");
        SpawnerConfig::default()
    });

    let mut spawner = Spawner::initialize(&config, TemplatePolicy::new(Enemy::template()));
    spawner.start().expect("pre-warming the pool failed");

    println!("[DEMO] spawner ready");
    print_counts(&spawner);
    print_help();

    // Handles for everything we spawned, most recent on top.
    let mut spawned: Vec<PoolHandle> = Vec::new();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match line.trim() {
            "f" => match spawner.spawn() {
                Ok(handle) => {
                    spawned.push(handle);
                    let enemy = spawner.entity(handle).expect("just spawned");
                    println!(
                        "[DEMO] spawned enemy at ({:.1}, {:.1}, {:.1}) with {} hp",
                        enemy.transform.position.x,
                        enemy.transform.position.y,
                        enemy.transform.position.z,
                        enemy.health
                    );
                }
                Err(e) => println!("[DEMO] spawn failed: {e}"),
            },
            "g" => {
                // Remove the last unit created.
                let Some(handle) = spawned.pop() else {
                    println!("[DEMO] attempting to return an enemy when none exist");
                    continue;
                };
                match spawner.return_to_pool(handle) {
                    Ok(()) => println!("[DEMO] enemy returned to the pool"),
                    Err(e) => println!("[DEMO] return failed: {e}"),
                }
            }
            "c" => print_counts(&spawner),
            "d" => {
                spawner.destroy_all();
                spawned.clear();
                println!("[DEMO] pool destroyed");
                print_counts(&spawner);
            }
            "q" => break,
            "" => {}
            other => {
                println!("[DEMO] unknown command: {other}");
                print_help();
            }
        }
    }
}
