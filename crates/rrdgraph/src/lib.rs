//! rrdgraph - Build `rrdtool graph` command lines.
//!
//! Validated graph attributes, a dependency graph of rrdtool graph commands,
//! and the serialization of both into the argument list rrdtool expects.
//! Running the command is delegated to a [`Runner`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use rrdgraph::{Graph, ProcessRunner};
//! use rrdgraph::element::{ConsolidationFunction, Def, Element, Line};
//! use rrdgraph::vname::VName;
//!
//! let mut graph = Graph::new();
//! graph.set_title("Load");
//! graph.set_format("PNG").expect("PNG is an allowed format");
//!
//! let load = Element::new(Def::new(
//!     VName::new("load").unwrap(),
//!     "load.rrd",
//!     "shortterm",
//!     ConsolidationFunction::Average,
//! ));
//! graph.add_element(Line::new(&load).unwrap());
//!
//! let png = graph
//!     .generate(&ProcessRunner::new())
//!     .expect("Failed to run rrdtool");
//! ```

pub mod config;
pub mod document;
pub mod runner;

#[path = "error.rs"]
mod graph_error;
mod graph;

pub use rrdgraph_core::{attribute, color, element, error, vname};

pub use graph_error::RrdGraphError;
pub use graph::{Graph, RRDTOOL};
pub use runner::{ProcessRunner, Runner, RunnerError};
