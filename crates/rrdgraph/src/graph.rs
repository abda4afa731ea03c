//! The [`Graph`] builder.
//!
//! A graph holds the display and time attributes of one `rrdtool graph` call
//! together with its top-level elements, and flattens both into the argument
//! list handed to a [`Runner`].

use std::fmt;

use indexmap::IndexSet;
use log::{debug, info, trace, warn};

use rrdgraph_core::{
    attribute::{Dimension, ImageFormat, Timestamp},
    element::Element,
    error::AttributeError,
};

use crate::{
    config::GraphDefaults,
    runner::{Runner, RunnerError},
};

/// Program selected by the first argument of every generated command.
pub const RRDTOOL: &str = "rrdtool";

const GRAPH_SUBCOMMAND: &str = "graph";

/// Output file argument telling rrdtool to write the image to stdout.
const STDOUT: &str = "-";

/// Value of `--end` when no end time was set.
const END_DEFAULT: &str = "now";

/// Builder for a single `rrdtool graph` invocation.
///
/// Attribute setters validate their input immediately: a rejected value
/// returns an [`AttributeError`] and leaves the previous value in place.
///
/// # Examples
///
/// ```
/// use rrdgraph::Graph;
/// use rrdgraph::element::{CDef, Element, Line};
/// use rrdgraph::vname::VName;
///
/// let mut graph = Graph::new();
/// graph.set_title("Constant");
/// graph.set_width(640_u32).unwrap();
/// graph.set_format("PNG").unwrap();
///
/// let one = Element::new(CDef::new(VName::new("one").unwrap(), "1", Vec::new()));
/// graph.add_element(Line::new(&one).unwrap());
///
/// assert_eq!(
///     graph.command(),
///     [
///         "rrdtool", "graph", "-",
///         "--end", "now",
///         "--title", "Constant",
///         "--width", "640",
///         "--imgformat", "PNG",
///         "CDEF:one=1",
///         "LINE:one",
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    title: Option<String>,
    width: Option<Dimension>,
    height: Option<Dimension>,
    format: Option<ImageFormat>,
    elements: Vec<Element>,
}

impl Graph {
    /// Creates a graph with no attributes and no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph whose width, height and format start from `defaults`.
    pub fn with_defaults(defaults: &GraphDefaults) -> Self {
        Self {
            width: defaults.width(),
            height: defaults.height(),
            format: defaults.format(),
            ..Self::default()
        }
    }

    pub fn start(&self) -> Option<Timestamp> {
        self.start
    }

    /// Sets the start of the time range.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Type`] if `start` is not a timestamp.
    pub fn set_start<T>(&mut self, start: T) -> Result<(), AttributeError>
    where
        T: TryInto<Timestamp>,
        T::Error: Into<AttributeError>,
    {
        self.start = Some(convert("start", start)?);
        Ok(())
    }

    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// Sets the end of the time range. Unset, the graph ends `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Type`] if `end` is not a timestamp.
    pub fn set_end<T>(&mut self, end: T) -> Result<(), AttributeError>
    where
        T: TryInto<Timestamp>,
        T::Error: Into<AttributeError>,
    {
        self.end = Some(convert("end", end)?);
        Ok(())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets the title to the textual form of `title`.
    ///
    /// ```
    /// let mut graph = rrdgraph::Graph::new();
    /// graph.set_title(1);
    /// assert_eq!(graph.title(), Some("1"));
    /// ```
    pub fn set_title(&mut self, title: impl fmt::Display) {
        self.title = Some(title.to_string());
    }

    pub fn width(&self) -> Option<Dimension> {
        self.width
    }

    /// Sets the canvas width in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Type`] if `width` is not numeric.
    pub fn set_width<T>(&mut self, width: T) -> Result<(), AttributeError>
    where
        T: TryInto<Dimension>,
        T::Error: Into<AttributeError>,
    {
        self.width = Some(convert("width", width)?);
        Ok(())
    }

    pub fn height(&self) -> Option<Dimension> {
        self.height
    }

    /// Sets the canvas height in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Type`] if `height` is not numeric.
    pub fn set_height<T>(&mut self, height: T) -> Result<(), AttributeError>
    where
        T: TryInto<Dimension>,
        T::Error: Into<AttributeError>,
    {
        self.height = Some(convert("height", height)?);
        Ok(())
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Sets the output image format.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Validation`] if `format` is not one of
    /// [`ImageFormat::ALL`].
    pub fn set_format<T>(&mut self, format: T) -> Result<(), AttributeError>
    where
        T: TryInto<ImageFormat>,
        T::Error: Into<AttributeError>,
    {
        self.format = Some(convert("format", format)?);
        Ok(())
    }

    /// Appends a top-level element and returns its shared handle.
    ///
    /// Only [`GraphElement`](rrdgraph_core::element::GraphElement) implementors
    /// and [`Element`] handles are accepted:
    ///
    /// ```compile_fail
    /// let mut graph = rrdgraph::Graph::new();
    /// graph.add_element(123);
    /// ```
    pub fn add_element(&mut self, element: impl Into<Element>) -> Element {
        let element = element.into();
        debug!(definition = element.definition(); "Adding graph element");
        self.elements.push(element.clone());
        element
    }

    /// Returns the top-level elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns every element the graph needs: the top-level elements and their
    /// transitive dependencies, each exactly once.
    ///
    /// Callers should treat the result as a set. The current order is the
    /// evaluation order used by [`Graph::command_expressions`].
    pub fn dependencies(&self) -> IndexSet<Element> {
        let mut resolved = IndexSet::new();
        for element in &self.elements {
            element.collect_all_dependencies(&mut resolved);
        }
        resolved
    }

    /// Returns the attribute flags in a fixed order.
    ///
    /// `--end` is always present and defaults to `now`. Every other flag is
    /// omitted when its attribute is unset.
    pub fn command_flags(&self) -> Vec<String> {
        let mut flags = Vec::new();

        if let Some(start) = self.start {
            push_flag(&mut flags, "--start", start);
        }
        match self.end {
            Some(end) => push_flag(&mut flags, "--end", end),
            None => push_flag(&mut flags, "--end", END_DEFAULT),
        }
        if let Some(title) = &self.title {
            push_flag(&mut flags, "--title", title);
        }
        if let Some(width) = self.width {
            push_flag(&mut flags, "--width", width);
        }
        if let Some(height) = self.height {
            push_flag(&mut flags, "--height", height);
        }
        if let Some(format) = self.format {
            push_flag(&mut flags, "--imgformat", format);
        }

        flags
    }

    /// Returns the definitions of every element in evaluation order.
    ///
    /// Top-level elements are expanded in insertion order, each one preceded
    /// by its not-yet-emitted dependencies. An element shared between several
    /// series is emitted once, since rrdtool rejects duplicate variables.
    pub fn command_expressions(&self) -> Vec<String> {
        self.dependencies()
            .iter()
            .map(Element::definition)
            .collect()
    }

    /// Returns the full argument list: `rrdtool graph -`, flags, expressions.
    pub fn command(&self) -> Vec<String> {
        let flags = self.command_flags();
        let expressions = self.command_expressions();

        let mut command = Vec::with_capacity(3 + flags.len() + expressions.len());
        command.extend([RRDTOOL, GRAPH_SUBCOMMAND, STDOUT].map(String::from));
        command.extend(flags);
        command.extend(expressions);
        command
    }

    /// Runs the graph command through `runner` and returns its output.
    ///
    /// # Errors
    ///
    /// Propagates the runner's [`RunnerError`] unchanged.
    pub fn generate(&self, runner: &impl Runner) -> Result<Vec<u8>, RunnerError> {
        let command = self.command();
        info!(
            elements_count = self.elements.len(),
            args_count = command.len();
            "Generating graph"
        );
        trace!(command:?; "Graph command");

        let output = runner.run(&command)?;

        debug!(output_bytes = output.len(); "Graph generated");
        Ok(output)
    }
}

fn convert<T, V>(attribute: &'static str, value: T) -> Result<V, AttributeError>
where
    T: TryInto<V>,
    T::Error: Into<AttributeError>,
{
    value.try_into().map_err(|err| {
        let err = err.into();
        warn!(attribute = attribute, error = err.to_string(); "Rejected graph attribute");
        err
    })
}

fn push_flag(flags: &mut Vec<String>, name: &str, value: impl fmt::Display) {
    flags.push(name.to_string());
    flags.push(value.to_string());
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn time_range_strategy() -> impl Strategy<Value = (i64, i64)> {
        (0_i64..4_000_000_000, 1_i64..100_000_000).prop_map(|(start, len)| (start, start + len))
    }

    fn non_numeric_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z ]{0,15}"
    }

    // ===================
    // Property Test Functions
    // ===================

    fn check_time_range_reads_back(start: i64, end: i64) -> Result<(), TestCaseError> {
        let start = Timestamp::from_epoch_seconds(start).expect("in range");
        let end = Timestamp::from_epoch_seconds(end).expect("in range");

        let mut graph = Graph::new();
        prop_assert!(graph.set_start(start).is_ok());
        prop_assert!(graph.set_end(end).is_ok());
        prop_assert_eq!(graph.start(), Some(start));
        prop_assert_eq!(graph.end(), Some(end));

        let flags = graph.command_flags();
        prop_assert_eq!(&flags[1], &start.epoch_seconds().to_string());
        prop_assert_eq!(&flags[3], &end.epoch_seconds().to_string());
        Ok(())
    }

    fn check_rejected_input_keeps_previous_values(text: &str) -> Result<(), TestCaseError> {
        let mut graph = Graph::new();
        graph.set_width(320_u32).expect("infallible");
        graph.set_height(240_u32).expect("infallible");
        graph.set_format(ImageFormat::Png).expect("infallible");

        prop_assert!(graph.set_start(text).is_err());
        prop_assert!(graph.set_end(text).is_err());
        prop_assert!(graph.set_width(text).is_err());
        prop_assert!(graph.set_height(text).is_err());
        prop_assert!(graph.set_format(text).is_err());

        prop_assert_eq!(graph.start(), None);
        prop_assert_eq!(graph.end(), None);
        prop_assert_eq!(graph.width(), Some(Dimension::new(320)));
        prop_assert_eq!(graph.height(), Some(Dimension::new(240)));
        prop_assert_eq!(graph.format(), Some(ImageFormat::Png));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn time_range_reads_back((start, end) in time_range_strategy()) {
            check_time_range_reads_back(start, end)?;
        }

        #[test]
        fn rejected_input_keeps_previous_values(text in non_numeric_strategy()) {
            check_rejected_input_keeps_previous_values(&text)?;
        }

        #[test]
        fn numeric_title_reads_back_as_text(value in any::<i64>()) {
            let mut graph = Graph::new();
            graph.set_title(value);
            let expected = value.to_string();
            prop_assert_eq!(graph.title(), Some(expected.as_str()));
        }
    }
}
