//! `LINE`: draw a series as a line.

use crate::{
    color::Color,
    element::{Element, GraphElement, series_definition},
    error::ElementError,
    vname::VName,
};

/// Draws `source` as a line, optionally with a width, color, legend and stacking.
///
/// Renders as `LINE[<width>]:<source>[#color][:<legend>][:STACK]`.
#[derive(Debug, Clone)]
pub struct Line {
    source: Element,
    source_name: VName,
    width: Option<f32>,
    color: Option<Color>,
    legend: Option<String>,
    stack: bool,
}

impl Line {
    /// # Errors
    ///
    /// Returns [`ElementError::NotAValue`] if `source` does not define a variable.
    pub fn new(source: &Element) -> Result<Self, ElementError> {
        Ok(Self {
            source_name: source.require_vname()?,
            source: source.clone(),
            width: None,
            color: None,
            legend: None,
            stack: false,
        })
    }

    /// Sets the stroke width in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidWidth`] unless `width` is positive and finite.
    pub fn with_width(mut self, width: f32) -> Result<Self, ElementError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ElementError::InvalidWidth(width.to_string()));
        }
        self.width = Some(width);
        Ok(self)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Stacks this line on top of the previous line or area.
    pub fn with_stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }
}

impl GraphElement for Line {
    fn definition(&self) -> String {
        let command = match self.width {
            Some(width) => format!("LINE{width}"),
            None => "LINE".to_string(),
        };
        series_definition(
            &command,
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
    use crate::element::{CDef, Comment};

    fn source() -> Element {
        Element::new(CDef::new(VName::new("foo").unwrap(), "1", Vec::new()))
    }

    #[test]
    fn test_bare_line() {
        let line = Line::new(&source()).unwrap();
        assert_eq!(line.definition(), "LINE:foo");
    }

    #[test]
    fn test_full_line() {
        let line = Line::new(&source())
            .unwrap()
            .with_width(2.0)
            .unwrap()
            .with_color(Color::new("#ff0000").unwrap())
            .with_legend("Requests: total")
            .with_stack(true);

        assert_eq!(line.definition(), "LINE2:foo#FF0000:Requests\\: total:STACK");
    }

    #[test]
    fn test_fractional_width() {
        let line = Line::new(&source()).unwrap().with_width(1.5).unwrap();
        assert_eq!(line.definition(), "LINE1.5:foo");
    }

    #[test]
    fn test_rejects_invalid_width() {
        for width in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = Line::new(&source()).unwrap().with_width(width).unwrap_err();
            assert!(matches!(err, ElementError::InvalidWidth(_)), "{width}");
        }
    }

    #[test]
    fn test_stack_without_legend_keeps_empty_field() {
        let line = Line::new(&source()).unwrap().with_stack(true);
        assert_eq!(line.definition(), "LINE:foo::STACK");
    }

    #[test]
    fn test_depends_on_source() {
        let source = source();
        let line = Line::new(&source).unwrap();
        assert_eq!(line.dependencies(), vec![source]);
    }

    #[test]
    fn test_rejects_non_value_source() {
        let comment = Element::new(Comment::new("x"));
        assert!(matches!(
            Line::new(&comment),
            Err(ElementError::NotAValue { .. })
        ));
    }
}
