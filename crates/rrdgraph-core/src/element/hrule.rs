//! `HRULE`: a horizontal line at a fixed value.

use crate::{
    color::Color,
    element::{GraphElement, escape_text},
};

/// Draws a horizontal rule at `value`.
///
/// Renders as `HRULE:<value><#color>[:<legend>]`.
#[derive(Debug, Clone)]
pub struct HRule {
    value: f64,
    color: Color,
    legend: Option<String>,
}

impl HRule {
    pub fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            legend: None,
        }
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }
}

impl GraphElement for HRule {
    fn definition(&self) -> String {
        let mut definition = format!("HRULE:{}{}", self.value, self.color.to_rrd_string());
        if let Some(legend) = &self.legend {
            definition.push(':');
            definition.push_str(&escape_text(legend));
        }
        definition
    }
}
