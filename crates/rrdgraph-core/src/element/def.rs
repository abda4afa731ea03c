//! `DEF`: fetch a data source from an RRD file.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{
    attribute::Timestamp,
    element::{GraphElement, escape_text},
    error::ElementError,
    vname::VName,
};

/// Consolidation function used to read archived data points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ConsolidationFunction {
    #[default]
    Average,
    Min,
    Max,
    Last,
}

impl ConsolidationFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "AVERAGE",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Last => "LAST",
        }
    }
}

impl FromStr for ConsolidationFunction {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVERAGE" => Ok(Self::Average),
            "MIN" => Ok(Self::Min),
            "MAX" => Ok(Self::Max),
            "LAST" => Ok(Self::Last),
            _ => Err(ElementError::InvalidConsolidation(s.to_string())),
        }
    }
}

impl TryFrom<String> for ConsolidationFunction {
    type Error = ElementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ConsolidationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads data source `ds` from the RRD file `rrd` into the variable `vname`.
///
/// Renders as `DEF:<vname>=<rrd>:<ds>:<CF>[:step=<n>][:start=<t>][:end=<t>]`.
#[derive(Debug, Clone)]
pub struct Def {
    vname: VName,
    rrd: String,
    ds: String,
    cf: ConsolidationFunction,
    step: Option<u32>,
    start: Option<Timestamp>,
    end: Option<Timestamp>,
}

impl Def {
    pub fn new(
        vname: VName,
        rrd: impl Into<String>,
        ds: impl Into<String>,
        cf: ConsolidationFunction,
    ) -> Self {
        Self {
            vname,
            rrd: rrd.into(),
            ds: ds.into(),
            cf,
            step: None,
            start: None,
            end: None,
        }
    }

    /// Requests a specific resolution, in seconds.
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = Some(step);
        self
    }

    /// Overrides the graph's start time for this data source.
    pub fn with_start(mut self, start: Timestamp) -> Self {
        self.start = Some(start);
        self
    }

    /// Overrides the graph's end time for this data source.
    pub fn with_end(mut self, end: Timestamp) -> Self {
        self.end = Some(end);
        self
    }

    pub fn rrd(&self) -> &str {
        &self.rrd
    }

    pub fn ds(&self) -> &str {
        &self.ds
    }

    pub fn cf(&self) -> ConsolidationFunction {
        self.cf
    }
}

impl GraphElement for Def {
    fn definition(&self) -> String {
        let mut definition = format!(
            "DEF:{}={}:{}:{}",
            self.vname,
            escape_text(&self.rrd),
            self.ds,
            self.cf
        );
        if let Some(step) = self.step {
            definition.push_str(&format!(":step={step}"));
        }
        if let Some(start) = self.start {
            definition.push_str(&format!(":start={start}"));
        }
        if let Some(end) = self.end {
            definition.push_str(&format!(":end={end}"));
        }
        definition
    }

    fn vname(&self) -> Option<&VName> {
        Some(&self.vname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def() -> Def {
        Def::new(
            VName::new("inoctets").unwrap(),
            "router.rrd",
            "input",
            ConsolidationFunction::Average,
        )
    }

    #[test]
    fn test_definition() {
        assert_eq!(def().definition(), "DEF:inoctets=router.rrd:input:AVERAGE");
    }

    #[test]
    fn test_definition_with_options() {
        let def = def()
            .with_step(300)
            .with_start(Timestamp::from_epoch_seconds(1_000).unwrap())
            .with_end(Timestamp::from_epoch_seconds(2_000).unwrap());

        assert_eq!(
            def.definition(),
            "DEF:inoctets=router.rrd:input:AVERAGE:step=300:start=1000:end=2000"
        );
    }

    #[test]
    fn test_rrd_path_colons_are_escaped() {
        let def = Def::new(
            VName::new("a").unwrap(),
            "C:/data/a.rrd",
            "ds0",
            ConsolidationFunction::Max,
        );
        assert_eq!(def.definition(), "DEF:a=C\\:/data/a.rrd:ds0:MAX");
    }

    #[test]
    fn test_defines_vname_without_dependencies() {
        let def = def();
        assert_eq!(def.vname().map(VName::as_str), Some("inoctets"));
        assert!(def.dependencies().is_empty());
    }

    #[test]
    fn test_consolidation_function_from_str() {
        assert_eq!(
            "LAST".parse::<ConsolidationFunction>().unwrap(),
            ConsolidationFunction::Last
        );
        assert_eq!(
            "average".parse::<ConsolidationFunction>(),
            Err(ElementError::InvalidConsolidation("average".to_string()))
        );
    }
}
