//! TOML graph documents.
//!
//! A graph document describes one graph: its attributes at the top level and
//! its elements as an ordered `[[elements]]` array. Elements refer to the
//! variables defined by earlier `def`, `cdef` and `vdef` entries by name.
//!
//! ```toml
//! title = "Load average"
//! start = 1700000000
//! end = "2023-11-15T00:00:00Z"
//! width = 640
//! format = "PNG"
//!
//! [[elements]]
//! type = "def"
//! name = "load"
//! rrd = "load.rrd"
//! ds = "shortterm"
//! cf = "AVERAGE"
//!
//! [[elements]]
//! type = "line"
//! source = "load"
//! width = 2
//! color = "#0000ff"
//! legend = "1 min"
//! ```
//!
//! Every entry is added to the graph as a top-level element in document order.

use std::{collections::HashMap, fmt};

use log::{debug, info};
use serde::Deserialize;

use rrdgraph_core::{
    attribute::{Dimension, ImageFormat, Timestamp},
    color::Color,
    element::{Area, CDef, Comment, ConsolidationFunction, Def, Element, GPrint, HRule, Line, VDef},
    vname::VName,
};

use crate::{Graph, RrdGraphError, config::GraphDefaults};

/// A parsed graph document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    start: Option<Timestamp>,
    #[serde(default)]
    end: Option<Timestamp>,
    #[serde(default)]
    title: Option<Title>,
    #[serde(default)]
    width: Option<Dimension>,
    #[serde(default)]
    height: Option<Dimension>,
    #[serde(default)]
    format: Option<ImageFormat>,
    #[serde(default)]
    elements: Vec<ElementEntry>,
}

/// Titles accept any scalar and keep its textual form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Title {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Title::Text(text) => f.write_str(text),
            Title::Integer(value) => write!(f, "{value}"),
            Title::Float(value) => write!(f, "{value}"),
            Title::Boolean(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
enum ElementEntry {
    Def {
        name: VName,
        rrd: String,
        ds: String,
        #[serde(default)]
        cf: ConsolidationFunction,
        #[serde(default)]
        step: Option<u32>,
        #[serde(default)]
        start: Option<Timestamp>,
        #[serde(default)]
        end: Option<Timestamp>,
    },
    Cdef {
        name: VName,
        expr: String,
        /// Variables the expression reads.
        #[serde(default)]
        uses: Vec<String>,
    },
    Vdef {
        name: VName,
        source: String,
        function: String,
    },
    Line {
        source: String,
        #[serde(default)]
        width: Option<f32>,
        #[serde(default)]
        color: Option<Color>,
        #[serde(default)]
        legend: Option<String>,
        #[serde(default)]
        stack: bool,
    },
    Area {
        source: String,
        #[serde(default)]
        color: Option<Color>,
        #[serde(default)]
        legend: Option<String>,
        #[serde(default)]
        stack: bool,
    },
    Gprint {
        source: String,
        format: String,
    },
    Comment {
        text: String,
    },
    Hrule {
        value: f64,
        color: Color,
        #[serde(default)]
        legend: Option<String>,
    },
}

/// Variables defined so far, by name.
type Scope = HashMap<String, Element>;

fn lookup(scope: &Scope, name: &str) -> Result<Element, RrdGraphError> {
    scope
        .get(name)
        .cloned()
        .ok_or_else(|| RrdGraphError::Document(format!("unknown variable `{name}`")))
}

impl ElementEntry {
    fn build(self, scope: &Scope) -> Result<Element, RrdGraphError> {
        let element = match self {
            Self::Def {
                name,
                rrd,
                ds,
                cf,
                step,
                start,
                end,
            } => {
                let mut def = Def::new(name, rrd, ds, cf);
                if let Some(step) = step {
                    def = def.with_step(step);
                }
                if let Some(start) = start {
                    def = def.with_start(start);
                }
                if let Some(end) = end {
                    def = def.with_end(end);
                }
                Element::new(def)
            }
            Self::Cdef { name, expr, uses } => {
                let operands = uses
                    .iter()
                    .map(|name| lookup(scope, name))
                    .collect::<Result<Vec<_>, _>>()?;
                Element::new(CDef::new(name, expr, operands))
            }
            Self::Vdef {
                name,
                source,
                function,
            } => Element::new(VDef::new(name, &lookup(scope, &source)?, function)?),
            Self::Line {
                source,
                width,
                color,
                legend,
                stack,
            } => {
                let mut line = Line::new(&lookup(scope, &source)?)?.with_stack(stack);
                if let Some(width) = width {
                    line = line.with_width(width)?;
                }
                if let Some(color) = color {
                    line = line.with_color(color);
                }
                if let Some(legend) = legend {
                    line = line.with_legend(legend);
                }
                Element::new(line)
            }
            Self::Area {
                source,
                color,
                legend,
                stack,
            } => {
                let mut area = Area::new(&lookup(scope, &source)?)?.with_stack(stack);
                if let Some(color) = color {
                    area = area.with_color(color);
                }
                if let Some(legend) = legend {
                    area = area.with_legend(legend);
                }
                Element::new(area)
            }
            Self::Gprint { source, format } => {
                Element::new(GPrint::new(&lookup(scope, &source)?, format)?)
            }
            Self::Comment { text } => Element::new(Comment::new(text)),
            Self::Hrule {
                value,
                color,
                legend,
            } => {
                let mut rule = HRule::new(value, color);
                if let Some(legend) = legend {
                    rule = rule.with_legend(legend);
                }
                Element::new(rule)
            }
        };
        Ok(element)
    }
}

impl GraphDocument {
    /// Parses a document from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`RrdGraphError::Parse`] with the source and the span of the
    /// offending value for syntax errors and invalid attribute or element
    /// values.
    pub fn parse(source: &str) -> Result<Self, RrdGraphError> {
        info!("Parsing graph document");
        let document: Self = toml::from_str(source).map_err(|err| {
            RrdGraphError::new_parse_error(err.message(), source, err.span())
        })?;
        debug!(elements_count = document.elements.len(); "Graph document parsed");
        Ok(document)
    }

    /// Builds a [`Graph`] from this document on top of `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`RrdGraphError::Document`], prefixed with the offending
    /// `elements[index]`, for references to unknown variables, variables
    /// defined twice and elements that cannot be constructed.
    pub fn into_graph(self, defaults: &GraphDefaults) -> Result<Graph, RrdGraphError> {
        let mut graph = Graph::with_defaults(defaults);

        if let Some(start) = self.start {
            graph.set_start(start)?;
        }
        if let Some(end) = self.end {
            graph.set_end(end)?;
        }
        if let Some(title) = self.title {
            graph.set_title(title);
        }
        if let Some(width) = self.width {
            graph.set_width(width)?;
        }
        if let Some(height) = self.height {
            graph.set_height(height)?;
        }
        if let Some(format) = self.format {
            graph.set_format(format)?;
        }

        let mut scope = Scope::new();
        for (index, entry) in self.elements.into_iter().enumerate() {
            let element = entry.build(&scope).map_err(|err| match err {
                RrdGraphError::Document(message) => {
                    RrdGraphError::Document(format!("elements[{index}]: {message}"))
                }
                RrdGraphError::Element(err) => {
                    RrdGraphError::Document(format!("elements[{index}]: {err}"))
                }
                other => other,
            })?;

            if let Some(name) = element.vname() {
                let name = name.to_string();
                if scope.insert(name.clone(), element.clone()).is_some() {
                    return Err(RrdGraphError::Document(format!(
                        "elements[{index}]: variable `{name}` is defined more than once"
                    )));
                }
            }

            graph.add_element(element);
        }

        Ok(graph)
    }
}
