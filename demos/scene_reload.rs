//! Scene Reload Example
//!
//! Demonstrates keyed events across a scene transition: permanent events,
//! owner-bound listeners and fault isolation.
//!
//! Run with: EVENTIDE_LOG_LEVEL=debug cargo run --example scene_reload

use eventide::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GameEvent {
    PlayerHit,
    ScoreChanged,
    Quit,
}

struct Enemy {
    name: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    eventide::eventide_log::init();

    println!("\n=== Scene Reload Example ===\n");

    // 1. Create controller
    println!("1. Creating Event Controller:");
    let events: EventController<GameEvent> = EventController::builder()
        .enable_logging(true)
        .catch_panics(true)
        .prune_stale(true)
        .build();
    events.mark_permanent(GameEvent::Quit);
    println!("   ✅ Controller created, Quit marked permanent\n");

    // 2. Register listeners
    println!("2. Registering Listeners:");
    let score = Arc::new(AtomicU32::new(0));
    let s = score.clone();
    events.on(GameEvent::ScoreChanged, move |points: u32| {
        let total = s.fetch_add(points, Ordering::SeqCst) + points;
        println!("   🏆 Score is now {}", total);
    })?;

    events.on(GameEvent::PlayerHit, |damage: u32, source: String| {
        if damage > 50 {
            return Err(format!("{} dealt {} damage, player shield broke", source, damage));
        }
        println!("   🛡️  Blocked {} damage from {}", damage, source);
        Ok(())
    })?;

    let enemy = Arc::new(Enemy { name: "goblin" });
    let listener = Listener::bound(&enemy, {
        let enemy = Arc::downgrade(&enemy);
        move |points: u32| {
            if let Some(enemy) = enemy.upgrade() {
                println!("   👹 {} sulks about {} points", enemy.name, points);
            }
        }
    })
    .named("goblin.on_score");
    events.add_listener(GameEvent::ScoreChanged, &listener)?;

    events.on(GameEvent::Quit, || println!("   👋 Saving settings before quit"))?;
    println!("   ✅ {} event(s) registered\n", events.keys().len());

    // 3. Trigger events
    println!("3. Triggering Events:");
    events.trigger(&GameEvent::ScoreChanged, (10u32,))?;
    events.trigger(&GameEvent::PlayerHit, (20u32, "arrow".to_string()))?;
    events.trigger(&GameEvent::PlayerHit, (80u32, "troll".to_string()))?;
    println!();

    // 4. Owner goes away
    println!("4. Dropping Enemy:");
    drop(enemy);
    events.trigger(&GameEvent::ScoreChanged, (5u32,))?;
    println!(
        "   ✅ {} ScoreChanged listener(s) left\n",
        events.listener_count(&GameEvent::ScoreChanged)
    );

    // 5. Shape mismatch
    println!("5. Triggering With Wrong Arguments:");
    if let Err(err) = events.trigger(&GameEvent::ScoreChanged, ("ten",)) {
        println!("   ❌ {}\n", err);
    }

    // 6. Scene reload
    println!("6. Reloading Scene:");
    events.cleanup();
    for key in [GameEvent::PlayerHit, GameEvent::ScoreChanged, GameEvent::Quit] {
        println!("   {:?}: registered = {}", key, events.contains(&key));
    }
    events.trigger(&GameEvent::Quit, ())?;

    println!("\n=== Final Score: {} ===\n", score.load(Ordering::SeqCst));
    Ok(())
}
