use crate::alias_index::AliasIndex;
use crate::config::FillConfig;
use crate::fuzzy::FuzzyResolver;
use crate::grid::{is_blank, Grid};
use crate::qa_index::QuestionAnswerIndex;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of one fill pass: how many blank cells were populated, plus every
/// header and row label that could not be resolved, in scan order. Repeated
/// failures are reported repeatedly; nothing here is deduplicated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FillReport {
    pub filled_count: usize,
    pub unmatched_questions: Vec<String>,
    pub unmatched_parameters: Vec<String>,
}

/// Walks the target grid column by column, resolving each header to a
/// reference attribute and each row label to a reference entity, and fills
/// the cells that are blank and legitimately resolvable.
///
/// Unresolved headers and labels are reporting-only outcomes; the scan never
/// aborts for them. Existing cell contents are never overwritten.
pub struct FillEngine<'a> {
    config: &'a FillConfig,
    aliases: &'a AliasIndex,
    qa: &'a QuestionAnswerIndex,
}

impl<'a> FillEngine<'a> {
    pub fn new(
        config: &'a FillConfig,
        aliases: &'a AliasIndex,
        qa: &'a QuestionAnswerIndex,
    ) -> Self {
        Self {
            config,
            aliases,
            qa,
        }
    }

    pub fn run(&self, grid: &mut Grid) -> FillReport {
        let question_resolver = FuzzyResolver::new(self.config.question_cutoff);
        let parameter_resolver = FuzzyResolver::new(self.config.parameter_cutoff);
        let mut report = FillReport::default();

        for col in self.config.data_start_column..grid.n_cols() {
            let header = grid.cell(self.config.header_row, col).to_string();
            if is_blank(&header) {
                continue;
            }

            let Some(question) = question_resolver
                .best_match(&header, self.qa.questions().iter().map(String::as_str))
            else {
                debug!(col, header = %header.trim(), "header matched no mapping question");
                report.unmatched_questions.push(header.clone());
                continue;
            };

            // questions() and attribute_for share storage, so this lookup
            // cannot miss for a resolver-returned question.
            let Some(attribute) = self.qa.attribute_for(question) else {
                report.unmatched_questions.push(header.clone());
                continue;
            };
            if !self.aliases.has_attribute(attribute) {
                debug!(col, attribute, "mapped attribute absent from reference schema");
                report
                    .unmatched_questions
                    .push(format!("{} → {} (not in master)", header.trim(), attribute));
                continue;
            }

            self.fill_column(grid, col, attribute, &parameter_resolver, &mut report);
        }

        info!(
            filled = report.filled_count,
            unmatched_questions = report.unmatched_questions.len(),
            unmatched_parameters = report.unmatched_parameters.len(),
            "fill pass complete"
        );
        report
    }

    fn fill_column(
        &self,
        grid: &mut Grid,
        col: usize,
        attribute: &str,
        resolver: &FuzzyResolver,
        report: &mut FillReport,
    ) {
        for row in self.config.data_start_row..grid.n_rows() {
            let label = grid.cell(row, self.config.label_column).to_string();
            // A blank label ends the data region for this column.
            if is_blank(&label) {
                break;
            }
            if !grid.cell_is_blank(row, col) {
                continue;
            }

            let Some(variant) = resolver
                .best_match(&label, self.aliases.variant_keys().iter().map(String::as_str))
            else {
                report.unmatched_parameters.push(label);
                continue;
            };
            let Some(identifier) = self.aliases.resolve_variant(variant) else {
                report.unmatched_parameters.push(label);
                continue;
            };
            let Some(attributes) = self.aliases.attributes_of(identifier) else {
                report.unmatched_parameters.push(label);
                continue;
            };

            match attributes.get(attribute) {
                Some(value) if !is_blank(value) => {
                    debug!(row, col, attribute, "filled cell");
                    grid.set_cell(row, col, value.clone());
                    report.filled_count += 1;
                }
                // Entity resolved but the source value is absent or blank:
                // leave the cell alone, nothing to report.
                _ => {}
            }
        }
    }
}
