//! Graph elements and their dependency graph.
//!
//! This module provides the [`GraphElement`] trait implemented by every rrdtool
//! graph command, and the [`Element`] handle through which elements are shared.
//!
//! # Overview
//!
//! An element knows two things about itself: its textual command
//! ([`GraphElement::definition`]) and the elements it reads from
//! ([`GraphElement::dependencies`]). A `LINE` depends on the `DEF` or `CDEF`
//! that produces its values, a `CDEF` depends on its operands, and so on.
//!
//! Elements are shared through [`Element`], a reference counted handle. The
//! same `DEF` can feed several series while being defined only once. Two
//! handles are equal when they point at the same element.
//!
//! # Quick Start
//!
//! ```
//! use rrdgraph_core::element::{ConsolidationFunction, Def, Element, Line};
//! use rrdgraph_core::vname::VName;
//!
//! let def = Element::new(Def::new(
//!     VName::new("load").unwrap(),
//!     "load.rrd",
//!     "shortterm",
//!     ConsolidationFunction::Average,
//! ));
//! let line = Element::new(Line::new(&def).unwrap().with_legend("Load"));
//!
//! let all = line.all_dependencies();
//! assert_eq!(all, vec![def.clone(), line.clone()]);
//! assert_eq!(line.definition(), "LINE:load:Load");
//! ```

use std::{
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

use indexmap::IndexSet;
use log::warn;

use crate::{color::Color, error::ElementError, vname::VName};

mod area;
mod cdef;
mod comment;
mod def;
mod gprint;
mod hrule;
mod line;
mod vdef;

pub use area::Area;
pub use cdef::CDef;
pub use comment::Comment;
pub use def::{ConsolidationFunction, Def};
pub use gprint::GPrint;
pub use hrule::HRule;
pub use line::Line;
pub use vdef::VDef;

/// A single rrdtool graph command.
pub trait GraphElement: fmt::Debug {
    /// Returns the command in rrdtool's graph grammar, e.g. `DEF:a=a.rrd:ds:AVERAGE`.
    fn definition(&self) -> String;

    /// Returns the elements this element reads from directly.
    fn dependencies(&self) -> Vec<Element> {
        Vec::new()
    }

    /// Returns the variable name this element defines, if it defines one.
    ///
    /// Only data-producing commands (`DEF`, `CDEF`, `VDEF`) define a variable
    /// that other elements can use as a source.
    fn vname(&self) -> Option<&VName> {
        None
    }
}

/// Shared handle to a [`GraphElement`].
///
/// Cloning an `Element` clones the handle, not the element. Equality and
/// hashing use the identity of the underlying element.
#[derive(Clone)]
pub struct Element(Rc<dyn GraphElement>);

impl Element {
    /// Wraps `element` in a new shared handle.
    pub fn new(element: impl GraphElement + 'static) -> Self {
        Self(Rc::new(element))
    }

    /// Returns the element's command text.
    pub fn definition(&self) -> String {
        self.0.definition()
    }

    /// Returns the element's direct dependencies.
    pub fn dependencies(&self) -> Vec<Element> {
        self.0.dependencies()
    }

    /// Returns the variable name defined by this element, if any.
    pub fn vname(&self) -> Option<&VName> {
        self.0.vname()
    }

    /// Returns the transitive dependency set of this element, including itself.
    ///
    /// The result is in evaluation order: every element appears after all of
    /// its dependencies, and this element comes last. Elements reachable through
    /// several paths appear once.
    pub fn all_dependencies(&self) -> Vec<Element> {
        let mut resolved = IndexSet::new();
        self.collect_all_dependencies(&mut resolved);
        resolved.into_iter().collect()
    }

    /// Adds the transitive dependency set of this element to `resolved`.
    ///
    /// Elements already present in `resolved` are neither revisited nor moved,
    /// which lets callers union the closures of several elements in order.
    pub fn collect_all_dependencies(&self, resolved: &mut IndexSet<Element>) {
        let mut visiting = HashSet::new();
        self.visit(resolved, &mut visiting);
    }

    fn visit(&self, resolved: &mut IndexSet<Element>, visiting: &mut HashSet<Element>) {
        if resolved.contains(self) {
            return;
        }
        if !visiting.insert(self.clone()) {
            warn!(definition = self.definition(); "Dependency cycle detected, skipping element");
            return;
        }

        for dependency in self.dependencies() {
            dependency.visit(resolved, visiting);
        }

        visiting.remove(self);
        resolved.insert(self.clone());
    }

    /// Returns the vname of this element or fails if it does not define one.
    pub(crate) fn require_vname(&self) -> Result<VName, ElementError> {
        self.vname().cloned().ok_or_else(|| ElementError::NotAValue {
            definition: self.definition(),
        })
    }
}

impl<T: GraphElement + 'static> From<T> for Element {
    fn from(element: T) -> Self {
        Self::new(element)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as *const ()).hash(state);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.0).finish()
    }
}

/// Escapes `:` in free text, which rrdtool otherwise reads as a field separator.
pub(crate) fn escape_text(text: &str) -> String {
    text.replace(':', "\\:")
}

/// Renders the shared `LINE`/`AREA` form: `CMD:source[#color][:legend][:STACK]`.
pub(crate) fn series_definition(
    command: &str,
    source: &VName,
    color: Option<&Color>,
    legend: Option<&str>,
    stack: bool,
) -> String {
    let mut definition = format!("{command}:{source}");
    if let Some(color) = color {
        definition.push_str(&color.to_rrd_string());
    }
    if legend.is_some() || stack {
        definition.push(':');
        if let Some(legend) = legend {
            definition.push_str(&escape_text(legend));
        }
    }
    if stack {
        definition.push_str(":STACK");
    }
    definition
}
