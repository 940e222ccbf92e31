//! End-to-end walk through one bingo game.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Seeded game** — a fixed seed so the output is reproducible.
//! 2. **Announcements** — a `WriterAnnouncer` on stdout, switched on after the
//!    first few calls to show the toggle.
//! 3. **Board and display state** — the master board mid-game, and the JSON a
//!    front end would render.
//! 4. **Completion** — the last call carries `is_last_call`; a further call is
//!    rejected; `reset` starts over.

use bingo_caller::{display_state, CallerEngine, EngineState, WriterAnnouncer};

fn main() {
    let mut engine = CallerEngine::with_seed(42)
        .with_announcer(Box::new(WriterAnnouncer::new(std::io::stdout())));

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  First five calls (announcements off)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for _ in 0..5 {
        if let Ok(call) = engine.call() {
            println!("  {call}  ({} left)", call.total_remaining);
        }
    }

    engine.toggle_announcements();
    println!();
    println!("  Next three calls (announcements on)");
    for _ in 0..3 {
        if let Ok(call) = engine.call() {
            println!("  {call}");
        }
    }

    println!();
    println!("  Board after {} calls ({}%):", engine.called().len(), engine.progress().percent);
    print!("{}", engine.board());

    let history: Vec<String> = engine
        .history()
        .iter()
        .map(|h| format!("{}{}", h.letter, h.number))
        .collect();
    println!("  History: {}", history.join(" "));

    engine.toggle_announcements();
    while let Ok(call) = engine.call() {
        if call.is_last_call {
            println!();
            println!("  Last ball: {call}");
        }
    }
    assert_eq!(engine.state(), EngineState::Finished);
    if let Err(rejected) = engine.call() {
        println!("  Another call: {rejected}");
    }

    engine.retire_current();
    let state = display_state(&engine);
    println!("  Caller display: {}", state["caller"]["number"]);

    engine.reset();
    println!("  After reset: {} balls in the pool, state {}", engine.pool().len(), engine.state());
}
