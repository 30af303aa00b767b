//! Target-seek tests: bounded search and the periodic shortcut.

use pulsenet_core::Network;
use pulsenet_simulation::{SeekOutcome, SimulationRunner};

/// `rx` is fed by a single conjunction watching a two-stage flip-flop
/// chain: `b` first emits HIGH on press 2, so `inv` first emits LOW on
/// press 2.
const CHAIN: [&str; 4] = [
    "broadcaster -> a",
    "%a -> b",
    "%b -> inv",
    "&inv -> rx",
];

/// `con` is fed by two inverters with periods 2 (`inv1`, watching `a`)
/// and 4 (`inv2`, watching `b`); both are HIGH within press 4.
const TWO_PERIOD: [&str; 6] = [
    "broadcaster -> a",
    "%a -> b, inv1",
    "%b -> inv2",
    "&inv1 -> con",
    "&inv2 -> con",
    "&con -> rx",
];

fn runner(lines: impl IntoIterator<Item = &'static str>) -> SimulationRunner {
    SimulationRunner::new(Network::parse(lines).expect("valid configuration"))
}

#[test]
fn test_seek_finds_exact_press() {
    let mut runner = runner(CHAIN);
    assert_eq!(runner.seek_low("rx", 1000), Ok(SeekOutcome::Found(2)));
    assert_eq!(runner.presses(), 2, "search must stop at the hit");
}

/// Pressing up to (but not including) the answer must not trip the
/// condition: the boundary is exact.
#[test]
fn test_seek_boundary_by_brute_force() {
    let mut probe = runner(CHAIN);
    let rx = probe.network().resolve("rx").unwrap();

    let mut hit_presses = Vec::new();
    for press in 1..=4u64 {
        let mut hit = false;
        probe.press_with(|p| {
            if p.destination == rx && p.level.is_low() {
                hit = true;
            }
        });
        if hit {
            hit_presses.push(press);
        }
    }
    assert_eq!(hit_presses.first(), Some(&2));
}

#[test]
fn test_seek_cap_is_not_found() {
    let mut runner = runner(CHAIN);
    // The answer is press 2; a cap of 1 must terminate as NotFound.
    assert_eq!(runner.seek_low("rx", 1), Ok(SeekOutcome::NotFound));
    assert_eq!(runner.presses(), 1);
}

#[test]
fn test_periodic_agrees_with_brute_force() {
    let mut brute = runner(TWO_PERIOD);
    let mut periodic = runner(TWO_PERIOD);

    let expected = brute.seek_low("rx", 1000).unwrap();
    assert_eq!(expected, SeekOutcome::Found(4));
    assert_eq!(periodic.seek_low_periodic("rx", 1000).unwrap(), expected);
}

#[test]
fn test_periodic_agrees_on_single_input_chain() {
    let mut brute = runner(CHAIN);
    let mut periodic = runner(CHAIN);
    assert_eq!(
        periodic.seek_low_periodic("rx", 1000).unwrap(),
        brute.seek_low("rx", 1000).unwrap()
    );
}

#[test]
fn test_periodic_respects_cap() {
    let mut runner = runner(TWO_PERIOD);
    assert_eq!(
        runner.seek_low_periodic("rx", 1),
        Ok(SeekOutcome::NotFound)
    );
}
