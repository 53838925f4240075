//! # Valfield Order
//!
//! Linearly ordered commutative value groups with zero — the codomain Γ₀
//! of a valuation. Γ₀ is a monoid under multiplication whose nonzero
//! elements (the units Γ₀ˣ) form an ordered group, with an absorbing,
//! least element 0 adjoined:
//!
//! ```text
//! 0 < ... < γ < ... ,   0·γ = 0,   Γ₀ˣ = Γ₀ \ {0} a group
//! ```
//!
//! This crate is **carrier-agnostic**: it does not prescribe what the
//! magnitudes are, only how they multiply and compare. The one concrete
//! carrier shipped here, [`Level`], is the value group of every p-adic
//! valuation.

pub mod group;
pub mod level;

pub use group::ValueGroup;
pub use level::Level;
