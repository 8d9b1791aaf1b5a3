//! Enigma: the machine orchestrator.
//!
//! Owns the three mounted rotors and the plugboard, drives the stepping
//! mechanism, and runs the five-stage substitution pipeline for one symbol
//! at a time. This is the only surface the rest of an application touches.
//!
//! Reproduces the behavior of the original C engine, with the canonical
//! pre-step notch evaluation for the double-stepping anomaly.

use log::debug;

use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::rotor::Rotor;
use crate::wiring::REFLECTOR_B;

/// Model id and starting position for one rotor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSetting {
    /// Rotor model id, 1-5 (rotors I through V).
    pub model: u8,
    /// Starting offset, 0-25.
    pub position: u8,
}

impl RotorSetting {
    /// Convenience constructor.
    pub fn new(model: u8, position: u8) -> Self {
        RotorSetting { model, position }
    }
}

/// Simulated Enigma I machine.
///
/// Holds the full mutable machine state: three rotor instances addressed by
/// slot 1-3 (slot 1 is the rightmost, fastest-moving rotor — the signal
/// enters it first) and the plugboard. The reflector is fixed (UKW-B).
///
/// Encryption is reciprocal: with identical rotor positions and plugboard,
/// feeding the ciphertext back through the machine yields the plaintext.
///
/// # Examples
///
/// ```
/// use enigma_core::Enigma;
///
/// let mut machine = Enigma::new();
/// let cipher = machine.encrypt(0).unwrap(); // encrypt 'A'
/// assert_eq!(cipher, 5);                    // lamp 'F' lights up
/// assert_eq!(machine.rotor_position(1).unwrap(), 1);
/// ```
///
/// ```
/// use enigma_core::{Enigma, RotorSetting};
///
/// let settings = [
///     RotorSetting::new(4, 2),
///     RotorSetting::new(5, 11),
///     RotorSetting::new(1, 0),
/// ];
/// let mut sender = Enigma::new();
/// sender.configure(settings).unwrap();
/// sender.connect_plug(0, 25).unwrap();
///
/// let mut receiver = Enigma::new();
/// receiver.configure(settings).unwrap();
/// receiver.connect_plug(0, 25).unwrap();
///
/// let cipher = sender.encrypt_sequence(&[7, 4, 11, 11, 14]).unwrap();
/// let plain = receiver.encrypt_sequence(&cipher).unwrap();
/// assert_eq!(plain, vec![7, 4, 11, 11, 14]);
/// ```
pub struct Enigma {
    /// Slot 1 (fast) to slot 3 (slow).
    rotors: [Rotor; 3],
    plugboard: Plugboard,
}

impl Default for Enigma {
    fn default() -> Self {
        Self::new()
    }
}

impl Enigma {
    /// Creates a machine in the default configuration: rotors I, II, III in
    /// slots 1-3, all at position 0, empty plugboard.
    pub fn new() -> Self {
        // Models 1-3 at position 0 are always valid.
        let rotors = [
            Rotor::new(1, 0).expect("default rotor I"),
            Rotor::new(2, 0).expect("default rotor II"),
            Rotor::new(3, 0).expect("default rotor III"),
        ];
        debug!("machine created with default configuration I-II-III at 0-0-0");
        Enigma {
            rotors,
            plugboard: Plugboard::new(),
        }
    }

    /// Atomically replaces all three rotors' models and positions.
    ///
    /// `settings[0]` is slot 1 (rightmost, fastest). The plugboard is left
    /// untouched. Validation happens for all six values before any rotor is
    /// replaced, so a rejected call leaves the machine unchanged.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidRotorModel`] or
    /// [`EnigmaError::InvalidRotorPosition`] if any setting is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_core::{Enigma, RotorSetting};
    ///
    /// let mut machine = Enigma::new();
    /// machine
    ///     .configure([
    ///         RotorSetting::new(3, 25),
    ///         RotorSetting::new(1, 4),
    ///         RotorSetting::new(5, 0),
    ///     ])
    ///     .unwrap();
    /// assert_eq!(machine.rotor_position(1).unwrap(), 25);
    /// assert_eq!(machine.rotor_model(2).unwrap(), 1);
    /// ```
    ///
    /// ```
    /// use enigma_core::{Enigma, RotorSetting};
    ///
    /// let mut machine = Enigma::new();
    /// let result = machine.configure([
    ///     RotorSetting::new(6, 0),
    ///     RotorSetting::new(1, 0),
    ///     RotorSetting::new(2, 0),
    /// ]);
    /// assert!(result.is_err());
    /// // The failed call did not touch the machine.
    /// assert_eq!(machine.rotor_model(1).unwrap(), 1);
    /// ```
    pub fn configure(&mut self, settings: [RotorSetting; 3]) -> Result<(), EnigmaError> {
        let mounted = [
            Rotor::new(settings[0].model, settings[0].position)?,
            Rotor::new(settings[1].model, settings[1].position)?,
            Rotor::new(settings[2].model, settings[2].position)?,
        ];
        self.rotors = mounted;
        debug!(
            "machine configured: slot1={}@{} slot2={}@{} slot3={}@{}",
            settings[0].model,
            settings[0].position,
            settings[1].model,
            settings[1].position,
            settings[2].model,
            settings[2].position
        );
        Ok(())
    }

    /// Returns the current position of the rotor in a slot (1, 2, or 3).
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSlot`] for any other slot number.
    pub fn rotor_position(&self, slot: u8) -> Result<u8, EnigmaError> {
        Ok(self.rotor(slot)?.offset())
    }

    /// Returns the model id (1-5) of the rotor in a slot.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSlot`] for an invalid slot number.
    pub fn rotor_model(&self, slot: u8) -> Result<u8, EnigmaError> {
        Ok(self.rotor(slot)?.model())
    }

    /// Sets one rotor's position without changing its model.
    ///
    /// Used for manual adjustment of a single thumbwheel, independent of
    /// re-keying the whole machine.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSlot`] or [`EnigmaError::InvalidRotorPosition`].
    pub fn set_rotor_position(&mut self, slot: u8, position: u8) -> Result<(), EnigmaError> {
        if position > 25 {
            return Err(EnigmaError::InvalidRotorPosition(position));
        }
        self.rotor_mut(slot)?.set_offset(position);
        debug!("rotor slot {} set to position {}", slot, position);
        Ok(())
    }

    /// Connects a plugboard cable between two distinct symbols.
    ///
    /// An end already paired elsewhere is unplugged first, keeping all pairs
    /// disjoint.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] or [`EnigmaError::SelfPlug`].
    pub fn connect_plug(&mut self, a: u8, b: u8) -> Result<(), EnigmaError> {
        self.plugboard.connect(a, b)?;
        debug!("plug connected: {} <-> {}", a, b);
        Ok(())
    }

    /// Removes the cable attached to a symbol, if any.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] if the symbol is out of range.
    pub fn disconnect_plug(&mut self, symbol: u8) -> Result<(), EnigmaError> {
        self.plugboard.disconnect(symbol)?;
        debug!("plug disconnected: {}", symbol);
        Ok(())
    }

    /// True when a cable is attached to the symbol.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] if the symbol is out of range.
    pub fn is_plug_connected(&self, symbol: u8) -> Result<bool, EnigmaError> {
        self.plugboard.is_connected(symbol)
    }

    /// Combined surface operation matching the original two-click gesture:
    /// `set_plug(a, b)` connects `a` and `b`, while `set_plug(a, a)`
    /// disconnects `a`. Front ends wanting unambiguous semantics should call
    /// [`connect_plug`](Self::connect_plug) /
    /// [`disconnect_plug`](Self::disconnect_plug) directly.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] if either symbol is out of range.
    pub fn set_plug(&mut self, a: u8, b: u8) -> Result<(), EnigmaError> {
        if a == b {
            self.disconnect_plug(a)
        } else {
            self.connect_plug(a, b)
        }
    }

    /// Returns a symbol's plugboard partner, or the symbol itself when
    /// unplugged. Pure query, no side effect.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] if the symbol is out of range.
    pub fn plug_partner(&self, symbol: u8) -> Result<u8, EnigmaError> {
        self.plugboard.partner(symbol)
    }

    /// Removes all plugboard cables.
    pub fn clear_plugboard(&mut self) {
        self.plugboard.clear();
        debug!("plugboard cleared");
    }

    /// Encrypts one symbol (0-25 for A-Z), advancing the rotors first.
    ///
    /// The rotors step exactly once per accepted symbol, before the
    /// substitution; a rejected symbol does not move them. The signal path
    /// is plugboard, rotors 1-3 forward, reflector, rotors 3-1 inverse,
    /// plugboard.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] if the symbol is out of range. Callers
    /// are expected to pre-filter text to A-Z; the engine never passes
    /// non-letters through silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_core::Enigma;
    ///
    /// let mut machine = Enigma::new();
    /// assert_eq!(machine.encrypt(0).unwrap(), 5);
    /// assert!(machine.encrypt(26).is_err());
    /// ```
    pub fn encrypt(&mut self, symbol: u8) -> Result<u8, EnigmaError> {
        if symbol > 25 {
            return Err(EnigmaError::InvalidSymbol(symbol));
        }

        self.step_rotors();

        let mut signal = self.plugboard.substitute(symbol);
        signal = self.rotors[0].forward(signal);
        signal = self.rotors[1].forward(signal);
        signal = self.rotors[2].forward(signal);
        signal = REFLECTOR_B[signal as usize];
        signal = self.rotors[2].backward(signal);
        signal = self.rotors[1].backward(signal);
        signal = self.rotors[0].backward(signal);
        Ok(self.plugboard.substitute(signal))
    }

    /// Encrypts an ordered sequence of symbols, strictly in order.
    ///
    /// Each symbol's substitution depends on the stepping caused by all
    /// symbols before it, so the sequence is never reordered or
    /// parallelized. The whole input is validated up front; on error no
    /// symbol is encrypted and the rotors do not move.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSymbol`] on the first out-of-range symbol.
    pub fn encrypt_sequence(&mut self, symbols: &[u8]) -> Result<Vec<u8>, EnigmaError> {
        if let Some(&bad) = symbols.iter().find(|&&s| s > 25) {
            return Err(EnigmaError::InvalidSymbol(bad));
        }
        let mut out = Vec::with_capacity(symbols.len());
        for &symbol in symbols {
            out.push(self.encrypt(symbol)?);
        }
        Ok(out)
    }

    /// Advances the rotors for one keystroke.
    ///
    /// Notch conditions are evaluated against the offsets as they stand
    /// before any stepping this cycle: rotor 1 always steps; rotor 2 steps
    /// when rotor 1 or rotor 2 sits at its notch; rotor 3 steps when rotor 2
    /// sits at its notch. Evaluating rotor 2's notch pre-step is what makes
    /// it step twice in consecutive cycles (the double-stepping anomaly) —
    /// checking offsets after rotor 1 moves produces incorrect cycling.
    fn step_rotors(&mut self) {
        let r1_at_notch = self.rotors[0].at_notch();
        let r2_at_notch = self.rotors[1].at_notch();

        self.rotors[0].step();
        if r1_at_notch || r2_at_notch {
            self.rotors[1].step();
        }
        if r2_at_notch {
            self.rotors[2].step();
        }
    }

    fn rotor(&self, slot: u8) -> Result<&Rotor, EnigmaError> {
        match slot {
            1..=3 => Ok(&self.rotors[(slot - 1) as usize]),
            _ => Err(EnigmaError::InvalidSlot(slot)),
        }
    }

    fn rotor_mut(&mut self, slot: u8) -> Result<&mut Rotor, EnigmaError> {
        match slot {
            1..=3 => Ok(&mut self.rotors[(slot - 1) as usize]),
            _ => Err(EnigmaError::InvalidSlot(slot)),
        }
    }
}
