//! `CDEF`: compute a new series from other series with an RPN expression.

use crate::{
    element::{Element, GraphElement},
    vname::VName,
};

/// Computes `vname` from an RPN `expression` over the given operands.
///
/// The operands are the elements whose variables the expression reads. They
/// become the dependencies of the `CDEF`, so they are emitted before it.
///
/// # Examples
///
/// ```
/// use rrdgraph_core::element::{CDef, ConsolidationFunction, Def, Element, GraphElement};
/// use rrdgraph_core::vname::VName;
///
/// let octets = Element::new(Def::new(
///     VName::new("octets").unwrap(),
///     "if.rrd",
///     "in",
///     ConsolidationFunction::Average,
/// ));
/// let bits = CDef::new(VName::new("bits").unwrap(), "octets,8,*", vec![octets]);
/// assert_eq!(bits.definition(), "CDEF:bits=octets,8,*");
/// ```
#[derive(Debug, Clone)]
pub struct CDef {
    vname: VName,
    expression: String,
    operands: Vec<Element>,
}

impl CDef {
    pub fn new(vname: VName, expression: impl Into<String>, operands: Vec<Element>) -> Self {
        Self {
            vname,
            expression: expression.into(),
            operands,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl GraphElement for CDef {
    fn definition(&self) -> String {
        format!("CDEF:{}={}", self.vname, self.expression)
    }

    fn dependencies(&self) -> Vec<Element> {
        self.operands.clone()
    }

    fn vname(&self) -> Option<&VName> {
        Some(&self.vname)
    }
}
