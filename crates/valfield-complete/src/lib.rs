//! # Valfield Complete
//!
//! The completion K̂ of a valued field K, built from sequence-shaped
//! Cauchy data, with a total inverse and a continuously extended
//! valuation.
//!
//! ## Architecture
//!
//! ```text
//! CauchyApprox           ← lazy terms + Cauchy modulus (the filter, concretely)
//!     │
//! Apartness / Completable ← "bounded away from zero", as explicit witnesses
//!     │
//! Point / CompletionField ← K̂: embed, ring ops, total inv, eq_within
//!     │
//! extend_by_density       ← generic extension of uniformly continuous maps
//!     │
//! ExtendedValuation       ← v̂ with v̂∘ι = v and the closed-ball basis
//! ```
//!
//! The pipeline is fixed and total: basis → completability witness →
//! completion → inverse extension → field laws. There are no retries
//! and no runtime faults; a hypothesis either holds or the construction
//! is simply unavailable.
//!
//! Every classical existential of the underlying mathematics appears
//! here as an explicit function: the Cauchy modulus, the
//! [`Apartness`] oracle, [`inversion_modulus`], [`observe_apartness`].

pub mod cauchy;
pub mod completable;
pub mod completion;
pub mod error;
pub mod extend;
pub mod extension;
pub mod point;

pub use cauchy::CauchyApprox;
pub use completable::{Apartness, Completable, inversion_modulus, observe_apartness};
pub use completion::CompletionField;
pub use error::CompletionError;
pub use extend::{UniformMap, extend_by_density};
pub use extension::ExtendedValuation;
pub use point::Point;
