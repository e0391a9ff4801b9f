// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive atom–atom contact matrix for macromolecular structures.
//!
//! Given a structure's atom coordinates, the crate computes the all-pairs
//! distance matrix, rasterizes it into a thresholded white → red heatmap,
//! and runs the pointer-driven selection state machine (hover, single-cell
//! pick, column-range drag) that sits on top of it.
//!
//! # Key entry points
//!
//! - [`engine::ContactMapEngine`] - one instance per displayed structure
//! - [`matrix::DistanceMatrix`] - O(N²) distance computation and contact
//!   queries
//! - [`raster::rasterize`] - matrix + threshold → RGBA heatmap
//! - [`overlay::compose`] - heatmap + selection → displayed image
//! - [`options::Options`] - threshold, size limit, overlay colors, key
//!   bindings
//!
//! # Data flow
//!
//! Coordinates arrive once per structure load and populate the distance
//! matrix; the heatmap is memoized on (structure, threshold). Pointer
//! events flow through the gesture classifier into the selection
//! controller, whose state is composited over the cached heatmap. Completed
//! range drags are reported to the host through the listener installed with
//! [`engine::ContactMapEngine::set_on_range_selected`].
//!
//! Comparing two structures means running two engines side by side.

pub mod engine;
pub mod error;
pub mod input;
pub mod matrix;
pub mod options;
pub mod overlay;
pub mod raster;
pub mod selection;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
