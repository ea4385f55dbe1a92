//! Demo model construction
//!
//! The viewer core takes caller-supplied geometry; this module is the
//! caller. It assembles the demo wireframe and hands it to
//! [`WireModel::new`](wire3d_core::WireModel::new).

mod model_builder;

pub use model_builder::letter_p;
