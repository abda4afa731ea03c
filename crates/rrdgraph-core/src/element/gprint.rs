//! `GPRINT`: print a value in the graph legend.

use crate::{
    element::{Element, GraphElement, escape_text},
    error::ElementError,
    vname::VName,
};

/// Prints the value of `source` (usually a `VDEF`) using a printf-style `format`.
#[derive(Debug, Clone)]
pub struct GPrint {
    source: Element,
    source_name: VName,
    format: String,
}

impl GPrint {
    /// # Errors
    ///
    /// Returns [`ElementError::NotAValue`] if `source` does not define a variable.
    pub fn new(source: &Element, format: impl Into<String>) -> Result<Self, ElementError> {
        Ok(Self {
            source_name: source.require_vname()?,
            source: source.clone(),
            format: format.into(),
        })
    }
}

impl GraphElement for GPrint {
    fn definition(&self) -> String {
        format!("GPRINT:{}:{}", self.source_name, escape_text(&self.format))
    }

    fn dependencies(&self) -> Vec<Element> {
        vec![self.source.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{CDef, VDef};

    #[test]
    fn test_definition() {
        let load = Element::new(CDef::new(VName::new("load").unwrap(), "1", Vec::new()));
        let avg = Element::new(VDef::new(VName::new("avg").unwrap(), &load, "AVERAGE").unwrap());
        let print = GPrint::new(&avg, "Avg: %6.2lf").unwrap();

        assert_eq!(print.definition(), "GPRINT:avg:Avg\\: %6.2lf");
        assert_eq!(avg.all_dependencies(), vec![load, avg.clone()]);
        assert_eq!(print.dependencies(), vec![avg]);
    }
}
