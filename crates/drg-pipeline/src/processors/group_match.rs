//! Matching stage: runs the cascade matcher over the context's patient and
//! catalog.

use anyhow::{Result, bail};

use drg_match::GroupMatcher;

use crate::context::AnalysisContext;
use crate::processor::AnalysisProcessor;

/// Processor that reconciles the context's patient against its catalog and
/// stores the [`drg_model::MatchingResult`] back into the context, marking
/// the result ready for downstream profit/loss stages.
///
/// Missing patient data or catalog is a processor fault: the pipeline halts
/// rather than computing against nothing.
pub struct GroupMatchProcessor {
    matcher: GroupMatcher,
    order: i32,
    enabled: bool,
}

impl GroupMatchProcessor {
    pub fn new(order: i32) -> Self {
        Self {
            matcher: GroupMatcher::new(),
            order,
            enabled: true,
        }
    }

    /// Replaces the default matcher configuration.
    pub fn with_matcher(mut self, matcher: GroupMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl AnalysisProcessor for GroupMatchProcessor {
    fn name(&self) -> &str {
        "group_match"
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn process(&self, context: &mut AnalysisContext) -> Result<()> {
        let Some(patient) = context.patient.as_ref() else {
            bail!("patient data not loaded into context");
        };
        let Some(catalog) = context.catalog.as_ref() else {
            bail!("grouping catalog not loaded into context");
        };

        let result = self.matcher.match_patient(patient, catalog);
        context.matching = Some(result);
        context.mark_result_ready(true);
        Ok(())
    }
}
