//! Rotor instance: one wiring table plus a mutable rotational offset.
//!
//! A rotor substitutes asymmetrically, so the forward table is inverted once
//! at construction and both directions share the same offset-adjusted lookup:
//! shift the pin by the current offset, apply the table, shift back. All
//! arithmetic is modulo 26.

use crate::error::EnigmaError;
use crate::wiring::{rotor_wiring, RotorWiring, ALPHABET};

const MODULUS: u8 = ALPHABET as u8;

/// One mounted rotor: wiring reference, derived inverse table, and offset.
pub(crate) struct Rotor {
    model: u8,
    wiring: &'static RotorWiring,
    inverse: [u8; ALPHABET],
    offset: u8,
}

impl Rotor {
    /// Mounts a rotor of the given model (1-5) at the given offset (0-25).
    ///
    /// # Errors
    /// [`EnigmaError::InvalidRotorModel`] for an undefined model id,
    /// [`EnigmaError::InvalidRotorPosition`] for an out-of-range offset.
    pub(crate) fn new(model: u8, offset: u8) -> Result<Self, EnigmaError> {
        let wiring = rotor_wiring(model).ok_or(EnigmaError::InvalidRotorModel(model))?;
        if offset >= MODULUS {
            return Err(EnigmaError::InvalidRotorPosition(offset));
        }
        let mut inverse = [0u8; ALPHABET];
        for (pin, &out) in wiring.forward.iter().enumerate() {
            inverse[out as usize] = pin as u8;
        }
        Ok(Rotor {
            model,
            wiring,
            inverse,
            offset,
        })
    }

    /// Offset-adjusted table lookup shared by both signal directions.
    fn pass(&self, symbol: u8, table: &[u8; ALPHABET]) -> u8 {
        let pin = (symbol + self.offset) % MODULUS;
        let out = table[pin as usize];
        (out + MODULUS - self.offset) % MODULUS
    }

    /// Substitutes a symbol on the entry pass (keyboard toward reflector).
    pub(crate) fn forward(&self, symbol: u8) -> u8 {
        self.pass(symbol, &self.wiring.forward)
    }

    /// Substitutes a symbol on the return pass (reflector toward lampboard).
    pub(crate) fn backward(&self, symbol: u8) -> u8 {
        self.pass(symbol, &self.inverse)
    }

    /// Advances the rotor by one position.
    pub(crate) fn step(&mut self) {
        self.offset = (self.offset + 1) % MODULUS;
    }

    /// True when the rotor sits at its turnover notch.
    pub(crate) fn at_notch(&self) -> bool {
        self.offset == self.wiring.notch
    }

    pub(crate) fn model(&self) -> u8 {
        self.model
    }

    pub(crate) fn offset(&self) -> u8 {
        self.offset
    }

    /// Sets the offset directly. The caller validates the range.
    pub(crate) fn set_offset(&mut self, offset: u8) {
        debug_assert!(offset < MODULUS);
        self.offset = offset;
    }
}
