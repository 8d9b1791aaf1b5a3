//! Plugboard (Steckerbrett): a self-inverse substitution built from cables.
//!
//! The mapping is always either identity or a set of disjoint swapped pairs,
//! so applying it twice returns the original symbol. With 26 symbols at most
//! 13 cables can be connected at once.

use crate::error::EnigmaError;
use crate::wiring::ALPHABET;

/// Mutable plugboard state.
///
/// Invariant: `map` is an involution — `map[map[x]] == x` for every symbol,
/// and an unplugged symbol maps to itself. Every mutation below preserves
/// this by fully unpairing a symbol before re-pairing it.
pub(crate) struct Plugboard {
    map: [u8; ALPHABET],
}

fn check_symbol(symbol: u8) -> Result<(), EnigmaError> {
    if (symbol as usize) < ALPHABET {
        Ok(())
    } else {
        Err(EnigmaError::InvalidSymbol(symbol))
    }
}

impl Plugboard {
    /// Creates an empty plugboard (identity mapping).
    pub(crate) fn new() -> Self {
        let mut map = [0u8; ALPHABET];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { map }
    }

    /// Substitutes one symbol. The caller guarantees `symbol < 26`.
    pub(crate) fn substitute(&self, symbol: u8) -> u8 {
        self.map[symbol as usize]
    }

    /// Connects a cable between two distinct symbols.
    ///
    /// If either end is already paired with another symbol, that pairing is
    /// broken first, keeping all pairs disjoint.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] if either symbol is out of range,
    /// [`EnigmaError::SelfPlug`] if `a == b`.
    pub(crate) fn connect(&mut self, a: u8, b: u8) -> Result<(), EnigmaError> {
        check_symbol(a)?;
        check_symbol(b)?;
        if a == b {
            return Err(EnigmaError::SelfPlug(a));
        }
        self.unpair(a);
        self.unpair(b);
        self.map[a as usize] = b;
        self.map[b as usize] = a;
        Ok(())
    }

    /// Removes the cable attached to a symbol, if any.
    pub(crate) fn disconnect(&mut self, symbol: u8) -> Result<(), EnigmaError> {
        check_symbol(symbol)?;
        self.unpair(symbol);
        Ok(())
    }

    /// Returns a symbol's partner, or the symbol itself when unplugged.
    pub(crate) fn partner(&self, symbol: u8) -> Result<u8, EnigmaError> {
        check_symbol(symbol)?;
        Ok(self.map[symbol as usize])
    }

    /// True when a cable is attached to the symbol.
    pub(crate) fn is_connected(&self, symbol: u8) -> Result<bool, EnigmaError> {
        check_symbol(symbol)?;
        Ok(self.map[symbol as usize] != symbol)
    }

    /// Removes all cables.
    pub(crate) fn clear(&mut self) {
        for (i, slot) in self.map.iter_mut().enumerate() {
            *slot = i as u8;
        }
    }

    /// Restores a symbol and its partner to identity. Input already checked.
    fn unpair(&mut self, symbol: u8) {
        let partner = self.map[symbol as usize];
        if partner != symbol {
            self.map[partner as usize] = partner;
        }
        self.map[symbol as usize] = symbol;
    }
}
