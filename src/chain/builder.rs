use std::fmt;

use tracing::{debug, info};

use crate::config::Config;
use crate::stages::StageKind;

/// Separator between stages in a chain expression
pub const SEPARATOR: &str = ",";

/// Strip surrounding whitespace and any run of trailing commas and whitespace
pub fn normalize_fragment(fragment: &str) -> &str {
    fragment
        .trim()
        .trim_end_matches(|c: char| c == ',' || c.is_whitespace())
}

/// An ordered list of non-empty stage expressions.
///
/// Rendering joins the stages with [`SEPARATOR`]. Because every stored
/// stage is non-empty, the rendered chain never has a leading, trailing or
/// doubled separator. A chain with no stages renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    stages: Vec<String>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the chain for a configuration, visiting stages in catalog order
    pub fn build(config: &Config) -> Self {
        let mut chain = Self::new();

        for kind in StageKind::ALL {
            match kind.build(config) {
                Some(expression) => {
                    if chain.push_fragment(&expression) {
                        debug!("Stage {}: {}", kind, expression);
                    } else {
                        debug!("Stage {} produced an empty expression, skipped", kind);
                    }
                }
                None => debug!("Stage {} absent", kind),
            }
        }

        info!("Built filter chain with {} stage(s)", chain.len());
        chain
    }

    /// Append a fragment after normalizing it.
    ///
    /// See [`normalize_fragment`]. A fragment that is empty afterwards is
    /// dropped. Returns whether it was kept.
    pub fn push_fragment(&mut self, fragment: &str) -> bool {
        let normalized = normalize_fragment(fragment);
        if normalized.is_empty() {
            return false;
        }

        self.stages.push(normalized.to_string());
        true
    }

    /// The stored stage expressions, in chain order
    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The joined chain expression
    pub fn as_expression(&self) -> String {
        self.stages.join(SEPARATOR)
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_expression())
    }
}
