//! Headless playtest driver
//!
//! Fast-forwards a pet through simulated days under a naive caretaker
//! policy, printing the event log and a final summary. Useful for eyeballing
//! pacing after tuning the config.

use petpocket::actions::FoodId;
use petpocket::core::types::{format_age, Difficulty, Species};
use petpocket::{PetEngine, SimulationEvent};

/// Simulated cadence between ticks
const STEP_MS: u64 = 10 * 60_000;

/// Simulated days to run
const DAYS: u64 = 14;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut engine = PetEngine::from_seed(2024);
    let mut now: u64 = 0;
    engine
        .adopt("Pixel", Species::Drakeling, Difficulty::Normal, now)
        .expect("valid adoption");

    println!("Starting PetPocket Playtest");
    println!("===========================");
    println!(
        "Adopted {} the {} {} ({:?} difficulty, {} personality)",
        engine.state.name,
        engine.state.species.display_name(),
        engine.state.species.emoji(),
        engine.state.difficulty,
        engine.state.personality.display_name(),
    );
    println!(
        "Simulating {} days at a {}min cadence...",
        DAYS,
        STEP_MS / 60_000
    );
    println!();

    let steps = DAYS * 24 * 60 * 60_000 / STEP_MS;
    for _ in 0..steps {
        now += STEP_MS;
        for event in engine.tick(now) {
            println!("[{:>8}] {:?}", format_age(engine.state.age), event);
            if let SimulationEvent::Died { cause } = &event {
                println!("\n{} has died: {}", engine.state.name, cause);
            }
        }
        if engine.state.is_dead {
            break;
        }
        caretake(&mut engine, now);
    }

    println!();
    println!("--- Final Summary ---");
    let s = &engine.state;
    println!("Age: {} ({:?})", format_age(s.age), s.stage);
    println!(
        "Stats: hunger {:.0}, happiness {:.0}, health {:.0}, hygiene {:.0}, energy {:.0}",
        s.hunger, s.happiness, s.health, s.hygiene, s.energy
    );
    println!(
        "Economy: level {}, xp {:.0}, coins {}, bond {:.0}",
        s.level, s.xp, s.coins, s.bond
    );
    let form = engine.evolution();
    println!(
        "Form: {} {} ({} tier)",
        form.name,
        form.emoji,
        form.tier.label()
    );
    if s.is_dead {
        println!("Outcome: died ({})", s.death_cause);
    } else {
        println!("Outcome: alive and well");
    }

    let json = engine.snapshot_json().expect("state serializes");
    std::fs::write("playtest_state.json", &json).expect("Failed to write output");
    println!("\nFinal snapshot written to playtest_state.json");
}

/// A caretaker that answers the obvious signals every step
fn caretake(engine: &mut PetEngine, now: u64) {
    // Emergencies first
    if let Some(event) = engine.state.active_event {
        if let Some(required) = event.taps_required() {
            for _ in 0..required {
                if engine.tap_event() {
                    break;
                }
            }
        } else if !engine.resolve_event() {
            engine.dismiss_event(now);
        }
    }
    if let Some(misbehavior) = engine.state.active_misbehavior {
        let _ = engine.discipline(misbehavior.correct_response());
    }

    if engine.state.is_sleeping {
        if engine.state.energy >= 100.0 {
            engine.wake();
        }
        return;
    }
    if engine.state.energy < 15.0 {
        engine.sleep();
        return;
    }

    if engine.state.is_sick {
        engine.heal();
    }
    if engine.state.poops > 0 || engine.state.hygiene < 50.0 {
        engine.clean();
    }
    if engine.state.hunger < 50.0 {
        // Good food when flush, salad when broke (premium, so even a picky
        // eater takes it)
        if !engine.feed(FoodId::Steak) {
            let _ = engine.feed(FoodId::Salad);
        }
    }
    if engine.state.happiness < 60.0 && engine.state.energy > 30.0 {
        engine.play(now);
    }
}
