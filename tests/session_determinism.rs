//! Determinism: two sessions with the same seed fed the same inputs on the
//! same virtual timeline end in identical aggregates, golden-bonus spawns
//! included.

use idle_tycoon::game::types::BuildingId;
use idle_tycoon::game::GameSession;

fn scripted_run(seed: u64) -> GameSession {
    let mut session = GameSession::new(seed, 0);
    let mut t = 0u64;
    for round in 0..400u64 {
        t += 250;
        session.click(t);
        if round % 7 == 0 {
            let _ = session.buy_building(BuildingId::JuniorDev, t);
        }
        if round % 25 == 0 {
            t += 6_000;
            session.advance_to(t);
            // Claim whatever spawned, deterministically.
            let _ = session.click_golden(t);
        }
    }
    session.advance_to(t + 120_000);
    session
}

#[test]
fn same_seed_same_inputs_same_state() {
    let mut a = scripted_run(1234);
    let mut b = scripted_run(1234);
    assert_eq!(a.save_payload(), b.save_payload());
    assert_eq!(a.golden_bonus(), b.golden_bonus());
    assert_eq!(a.drain_notices(), b.drain_notices());
}

#[test]
fn different_seeds_diverge_only_in_randomized_outcomes() {
    let a = scripted_run(1);
    let b = scripted_run(2);
    // Click earnings and purchases are seed-independent...
    assert_eq!(a.state().total_clicks, b.state().total_clicks);
    // ...while golden-bonus luck may differ; both remain valid aggregates.
    assert!(a.state().money >= 0.0);
    assert!(b.state().money >= 0.0);
}
