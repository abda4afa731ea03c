//! `VDEF`: reduce a series to a single value.

use crate::{
    element::{Element, GraphElement},
    error::ElementError,
    vname::VName,
};

/// Reduces `source` to a single value with `function` (e.g. `AVERAGE`, `95,PERCENT`).
#[derive(Debug, Clone)]
pub struct VDef {
    vname: VName,
    source: Element,
    source_name: VName,
    function: String,
}

impl VDef {
    /// # Errors
    ///
    /// Returns [`ElementError::NotAValue`] if `source` does not define a variable.
    pub fn new(
        vname: VName,
        source: &Element,
        function: impl Into<String>,
    ) -> Result<Self, ElementError> {
        Ok(Self {
            vname,
            source_name: source.require_vname()?,
            source: source.clone(),
            function: function.into(),
        })
    }
}

impl GraphElement for VDef {
    fn definition(&self) -> String {
        format!("VDEF:{}={},{}", self.vname, self.source_name, self.function)
    }

    fn dependencies(&self) -> Vec<Element> {
        vec![self.source.clone()]
    }

    fn vname(&self) -> Option<&VName> {
        Some(&self.vname)
    }
}
