//! Enigma I electromechanical cipher machine engine.
//!
//! Simulates the Enigma I as a reciprocal, stateful, per-character
//! substitution cipher: three rotating wired rotors, a fixed reflector
//! (UKW-B), and a reconfigurable plugboard. The stepping mechanism
//! reproduces the historical double-stepping anomaly exactly.
//!
//! This crate is the cipher engine only. Rendering, sound, keyboard capture,
//! and UI state belong to a presentation layer driving the engine one
//! keystroke at a time through [`Enigma`].
//!
//! # Architecture
//!
//! ```text
//! Wiring tables (static data — rotor I-V permutations + notches, UKW-B)
//!     ↓ referenced by
//! Rotor      (one wiring table + a mutable offset; offset-adjusted lookup)
//! Plugboard  (involutive pair mapping, 0..=13 cables)
//!     ↓ owned by
//! Enigma     (orchestrator — stepping, 5-stage pipeline, config surface)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with identically keyed machines:
//!
//! ```
//! use enigma_core::{Enigma, RotorSetting};
//!
//! let settings = [
//!     RotorSetting::new(2, 0),
//!     RotorSetting::new(4, 11),
//!     RotorSetting::new(5, 24),
//! ];
//!
//! let mut sender = Enigma::new();
//! sender.configure(settings).unwrap();
//!
//! let mut receiver = Enigma::new();
//! receiver.configure(settings).unwrap();
//!
//! let plain = vec![0u8, 19, 19, 0, 2, 10]; // "ATTACK"
//! let cipher = sender.encrypt_sequence(&plain).unwrap();
//! assert_ne!(cipher, plain);
//! assert_eq!(receiver.encrypt_sequence(&cipher).unwrap(), plain);
//! ```
//!
//! Drive the machine one keystroke at a time and watch the rotors move:
//!
//! ```
//! use enigma_core::Enigma;
//!
//! let mut machine = Enigma::new();
//! machine.encrypt(0).unwrap();
//! assert_eq!(machine.rotor_position(1).unwrap(), 1);
//! assert_eq!(machine.rotor_position(2).unwrap(), 0);
//! ```

#![deny(clippy::all)]

pub mod error;

mod machine;
pub(crate) mod plugboard;
pub(crate) mod rotor;
pub(crate) mod wiring;

pub use error::EnigmaError;
pub use machine::{Enigma, RotorSetting};
