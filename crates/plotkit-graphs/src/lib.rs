//! # Plotkit Graphs
//!
//! The `Graph` and `Plotter` capability traits plus the Plotkit reference
//! backends.
//!
//! A caller obtains a [`Plotter`], asks it to create a [`Graph`] builder,
//! populates that builder via repeated node/edge calls, then asks the
//! plotter to render the accumulated graphs to a file. The reference
//! backends emit Graphviz DOT ([`DotPlotter`]) and a plain-text listing
//! ([`TextPlotter`]); layout is delegated to external tooling.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dot;
pub mod model;
pub mod policy;
pub mod registry;
pub mod text;
pub mod traits;

pub use dot::DotPlotter;
pub use model::{Edge, GraphModel, Node};
pub use policy::{DuplicateNodePolicy, GraphPolicy};
pub use registry::PlotterKind;
pub use text::TextPlotter;
pub use traits::{Graph, Plotter};
