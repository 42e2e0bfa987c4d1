//! ANF equation-system generation for S-box circuit-complexity search.
//!
//! Given a fixed Boolean S-box, a cost model, and a bound, the encoder emits
//! a flat system of polynomial constraints in Algebraic Normal Form over
//! GF(2) (`+` for XOR, `*` for AND) that is satisfiable exactly when a
//! circuit within the bound computes the S-box on every input. The system is
//! meant to be fed to an external ANF/SAT solver; this crate constructs it
//! and never solves it.
//!
//! Quick start:
//! ```ignore
//! use anfgen_core::{CostModel, Sbox, encode_system};
//!
//! let sbox = Sbox::for_cipher("lac")?;
//! for line in encode_system(CostModel::MultiplicativeComplexity, &sbox, 4, 1) {
//!     println!("{line}");
//! }
//! ```
//!
//! Module map (data flow):
//! - `sbox`: built-in cipher S-box registry.
//! - `vars`: the shared variable namespace and its two-phase allocation
//!   (per-row wires vs. row-shared circuit-shape selectors).
//! - `poly`: terms, polynomials, and the emitted line format.
//! - `model`: the four cost models and their template forks.
//! - `encode`: the row-by-row system generator.
//! - `translate`: solver-claim translation back to named variables.

mod encode;
mod model;
mod poly;
mod sbox;
mod translate;
mod vars;


/// Errors returned by the generator library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("S-box table length must be a power of two of at least 2, got {0}")]
    TableNotPowerOfTwo(usize),
    #[error("S-box entry {value} at index {index} exceeds the {bits}-bit output range")]
    EntryOutOfRange { index: usize, value: u8, bits: usize },
    #[error("unknown cipher `{name}` (known ciphers: {known})")]
    UnknownCipher { name: String, known: String },
    #[error("claim file has no assignment line")]
    MissingClaimLine,
    #[error("invalid claim literal `{0}`")]
    InvalidClaimToken(String),
}

pub use crate::{
    encode::{Encoder, encode_system},
    model::CostModel,
    poly::{Line, Poly, Term},
    sbox::{Sbox, cipher_names},
    translate::{ResolveMap, translate_claim},
    vars::Var,
};
