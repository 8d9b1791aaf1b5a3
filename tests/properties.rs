//! Property-based tests over randomized machine configurations.
//!
//! Exercises the algebraic guarantees of the cipher — reciprocity,
//! bijectivity, plugboard involution, determinism, reset idempotence —
//! across the whole configuration space rather than hand-picked keys.

use proptest::array::uniform3;
use proptest::collection::vec;
use proptest::prelude::*;

use enigma_core::{Enigma, RotorSetting};

/// Strategy for one rotor slot: any model at any starting position.
fn rotor_setting() -> impl Strategy<Value = RotorSetting> {
    (1u8..=5, 0u8..26).prop_map(|(model, position)| RotorSetting::new(model, position))
}

/// Strategy for up to three disjoint plug pairs drawn from a shuffled
/// alphabet.
fn plug_pairs() -> impl Strategy<Value = Vec<(u8, u8)>> {
    let shuffled = Just((0u8..26).collect::<Vec<u8>>()).prop_shuffle();
    (shuffled, 0usize..=3).prop_map(|(alphabet, pairs)| {
        (0..pairs)
            .map(|i| (alphabet[2 * i], alphabet[2 * i + 1]))
            .collect()
    })
}

/// Strategy for a full machine key: three rotor settings plus plug pairs.
fn machine_key() -> impl Strategy<Value = ([RotorSetting; 3], Vec<(u8, u8)>)> {
    (uniform3(rotor_setting()), plug_pairs())
}

fn build(settings: [RotorSetting; 3], plugs: &[(u8, u8)]) -> Enigma {
    let mut machine = Enigma::new();
    machine.configure(settings).unwrap();
    for &(a, b) in plugs {
        machine.connect_plug(a, b).unwrap();
    }
    machine
}

proptest! {
    /// Two identically keyed machines invert each other over any message.
    #[test]
    fn reciprocity_over_full_messages(
        (settings, plugs) in machine_key(),
        plain in vec(0u8..26, 0..80),
    ) {
        let mut sender = build(settings, &plugs);
        let cipher = sender.encrypt_sequence(&plain).unwrap();
        let mut receiver = build(settings, &plugs);
        prop_assert_eq!(receiver.encrypt_sequence(&cipher).unwrap(), plain);
    }

    /// At any fixed state the composed substitution permutes the alphabet.
    #[test]
    fn fixed_state_substitution_is_bijective((settings, plugs) in machine_key()) {
        let mut seen = [false; 26];
        for symbol in 0..26u8 {
            let mut machine = build(settings, &plugs);
            let out = machine.encrypt(symbol).unwrap();
            prop_assert!(!seen[out as usize], "collision at output {}", out);
            seen[out as usize] = true;
        }
    }

    /// The reflector has no fixed points, so no letter encrypts to itself.
    #[test]
    fn no_symbol_maps_to_itself(
        (settings, plugs) in machine_key(),
        symbol in 0u8..26,
    ) {
        let mut machine = build(settings, &plugs);
        prop_assert_ne!(machine.encrypt(symbol).unwrap(), symbol);
    }

    /// `partner` is an involution after any sequence of plug operations.
    #[test]
    fn plugboard_partner_is_involutive((_, plugs) in machine_key(), probe in 0u8..26) {
        let mut machine = Enigma::new();
        for &(a, b) in &plugs {
            machine.connect_plug(a, b).unwrap();
        }
        let partner = machine.plug_partner(probe).unwrap();
        prop_assert_eq!(machine.plug_partner(partner).unwrap(), probe);
    }

    /// Identical key and input always produce identical output.
    #[test]
    fn encryption_is_deterministic(
        (settings, plugs) in machine_key(),
        plain in vec(0u8..26, 0..40),
    ) {
        let mut first = build(settings, &plugs);
        let mut second = build(settings, &plugs);
        prop_assert_eq!(
            first.encrypt_sequence(&plain).unwrap(),
            second.encrypt_sequence(&plain).unwrap()
        );
    }

    /// configure + clear_plugboard erases all prior history.
    #[test]
    fn reset_is_idempotent(
        (settings, plugs) in machine_key(),
        history in vec(0u8..26, 0..40),
        probe in vec(0u8..26, 1..10),
    ) {
        let mut used = build(settings, &plugs);
        used.encrypt_sequence(&history).unwrap();
        used.configure(settings).unwrap();
        used.clear_plugboard();

        let mut fresh = Enigma::new();
        fresh.configure(settings).unwrap();

        for slot in 1..=3u8 {
            prop_assert_eq!(used.rotor_position(slot).unwrap(), fresh.rotor_position(slot).unwrap());
            prop_assert_eq!(used.rotor_model(slot).unwrap(), fresh.rotor_model(slot).unwrap());
        }
        prop_assert_eq!(
            used.encrypt_sequence(&probe).unwrap(),
            fresh.encrypt_sequence(&probe).unwrap()
        );
    }

    /// Exactly one rotor moves per keystroke away from any notch, and the
    /// fast rotor always moves.
    #[test]
    fn fast_rotor_advances_every_keystroke(
        (settings, plugs) in machine_key(),
        symbol in 0u8..26,
    ) {
        let mut machine = build(settings, &plugs);
        let before = machine.rotor_position(1).unwrap();
        machine.encrypt(symbol).unwrap();
        prop_assert_eq!(machine.rotor_position(1).unwrap(), (before + 1) % 26);
    }
}
