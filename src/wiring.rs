//! Historical wiring tables for the Enigma I rotors and reflector.
//!
//! Each rotor table is a bijection over the 26-symbol alphabet plus a single
//! turnover notch. The reflector (UKW-B) is an involution with no fixed
//! points. These tables are the only place rotor-specific behavior lives;
//! everything else in the crate is generic over "a rotor".

/// Number of symbols in the alphabet.
pub(crate) const ALPHABET: usize = 26;

/// Forward permutation and turnover notch for one rotor model.
pub(crate) struct RotorWiring {
    /// Forward substitution: index = entry pin, value = exit pin.
    pub(crate) forward: [u8; ALPHABET],
    /// Offset at which this rotor carries its left neighbor.
    pub(crate) notch: u8,
}

/// Converts a historical wiring string (letters A-Z) into a pin table.
const fn pins(letters: &[u8; ALPHABET]) -> [u8; ALPHABET] {
    let mut out = [0u8; ALPHABET];
    let mut i = 0;
    while i < ALPHABET {
        out[i] = letters[i] - b'A';
        i += 1;
    }
    out
}

const fn letter(c: u8) -> u8 {
    c - b'A'
}

/// Rotor models I through V, indexed by `model - 1`.
static ROTORS: [RotorWiring; 5] = [
    // Rotor I, notch Q
    RotorWiring {
        forward: pins(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
        notch: letter(b'Q'),
    },
    // Rotor II, notch E
    RotorWiring {
        forward: pins(b"AJDKSIRUXBLHWTMCQGZNPYFVOE"),
        notch: letter(b'E'),
    },
    // Rotor III, notch V
    RotorWiring {
        forward: pins(b"BDFHJLCPRTXVZNYEIWGAKMUSQO"),
        notch: letter(b'V'),
    },
    // Rotor IV, notch J
    RotorWiring {
        forward: pins(b"ESOVPZJAYQUIRHXLNFTGKDCMWB"),
        notch: letter(b'J'),
    },
    // Rotor V, notch Z
    RotorWiring {
        forward: pins(b"VZBRGITYUPSDNHLXAWMJQOFECK"),
        notch: letter(b'Z'),
    },
];

/// Reflector B (UKW-B). Other reflectors existed but were uncommon on the
/// Enigma I and are not modeled.
pub(crate) static REFLECTOR_B: [u8; ALPHABET] = pins(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");

/// Looks up the wiring table for a rotor model id (1-5).
///
/// Returns `None` for an undefined model id; the caller maps this to a
/// configuration error.
pub(crate) fn rotor_wiring(model: u8) -> Option<&'static RotorWiring> {
    if (1..=5).contains(&model) {
        Some(&ROTORS[(model - 1) as usize])
    } else {
        None
    }
}
