//! `AREA`: draw a series as a filled area.

use crate::{
    color::Color,
    element::{Element, GraphElement, series_definition},
    error::ElementError,
    vname::VName,
};

/// Fills the area between the x-axis and `source`.
///
/// Renders as `AREA:<source>[#color][:<legend>][:STACK]`.
#[derive(Debug, Clone)]
pub struct Area {
    source: Element,
    source_name: VName,
    color: Option<Color>,
    legend: Option<String>,
    stack: bool,
}

impl Area {
    /// # Errors
    ///
    /// Returns [`ElementError::NotAValue`] if `source` does not define a variable.
    pub fn new(source: &Element) -> Result<Self, ElementError> {
        Ok(Self {
            source_name: source.require_vname()?,
            source: source.clone(),
            color: None,
            legend: None,
            stack: false,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    pub fn with_stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }
}

impl GraphElement for Area {
    fn definition(&self) -> String {
        series_definition(
            "AREA",
            &self.source_name,
            self.color.as_ref(),
            self.legend.as_deref(),
            self.stack,
        )
    }

    fn dependencies(&self) -> Vec<Element> {
        vec![self.source.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ConsolidationFunction, Def};

    #[test]
    fn test_definition() {
        let used = Element::new(Def::new(
            VName::new("used").unwrap(),
            "mem.rrd",
            "used",
            ConsolidationFunction::Average,
        ));
        let area = Area::new(&used)
            .unwrap()
            .with_color(Color::new("#00ff0080").unwrap())
            .with_legend("Used");

        assert_eq!(area.definition(), "AREA:used#00FF0080:Used");
        assert_eq!(area.dependencies(), vec![used]);
    }
}
