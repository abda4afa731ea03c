//! `COMMENT`: free text in the legend.

use crate::element::{GraphElement, escape_text};

#[derive(Debug, Clone)]
pub struct Comment {
    text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl GraphElement for Comment {
    fn definition(&self) -> String {
        format!("COMMENT:{}", escape_text(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition() {
        assert_eq!(
            Comment::new("Last update: 12:00").definition(),
            "COMMENT:Last update\\: 12\\:00"
        );
        assert!(Comment::new("x").dependencies().is_empty());
        assert!(Comment::new("x").vname().is_none());
    }
}
