// ABOUTME: Algorithm abstraction layer for durability estimation and marathon prediction
// ABOUTME: Enum-based dispatch keeps the competing estimators separate and selectable

//! Algorithm Selection Module
//!
//! The durability estimators are deliberately kept as distinct, selectable
//! strategies: they were developed as alternative experimental models with
//! disjoint inputs and their own saturation ranges, and blending them would
//! manufacture a ground truth the data does not support.
//!
//! # Design
//!
//! - **Type safety**: estimators are enum variants, not strings or flags
//! - **Dispatch**: enum dispatch, no vtable for built-in strategies
//! - **Saturation**: every estimator clamps to its declared bounds instead
//!   of rejecting out-of-range results
//!
//! # Example
//!
//! ```rust,ignore
//! use strideplan::algorithms::{DurabilityAlgorithm, DurabilityInputs};
//!
//! let inputs = DurabilityInputs::default().with_ten_k(40.0).with_marathon(190.0);
//! let df = DurabilityAlgorithm::RaceRatio.calculate(&inputs)?;
//! ```

pub mod durability;
pub mod prediction;

// Re-export algorithm types
pub use durability::{clamp_manual, DurabilityAlgorithm, DurabilityInputs};
pub use prediction::{riegel_predict, MarathonTimeModel};
