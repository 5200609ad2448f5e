use crate::grid::is_blank;
use tracing::warn;

/// One (question text, target attribute) pair from the mapping sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswerPair {
    pub question: String,
    pub attribute: String,
}

/// Position-ordered question-to-attribute mapping parsed from the two-row
/// mapping sheet. Row 0 holds questions, row 1 holds the attribute column
/// each question should be answered from.
#[derive(Debug, Clone, Default)]
pub struct QuestionAnswerIndex {
    pairs: Vec<QuestionAnswerPair>,
    questions: Vec<String>,
}

fn drop_trailing_blanks(row: &[String]) -> Vec<String> {
    let end = row
        .iter()
        .rposition(|cell| !is_blank(cell))
        .map_or(0, |idx| idx + 1);
    row[..end].iter().map(|cell| cell.trim().to_string()).collect()
}

impl QuestionAnswerIndex {
    /// Pair the two rows by position after dropping trailing blank cells from
    /// each independently. Attribute names are normalized to trimmed
    /// lowercase; question text keeps its original casing for reporting.
    /// A length mismatch is truncated to the shorter row, with a warning.
    pub fn build(question_row: &[String], answer_row: &[String]) -> Self {
        let questions = drop_trailing_blanks(question_row);
        let answers = drop_trailing_blanks(answer_row);

        if questions.len() != answers.len() {
            warn!(
                questions = questions.len(),
                answers = answers.len(),
                "mapping rows differ in length; pairing up to the shorter row"
            );
        }

        let pairs: Vec<QuestionAnswerPair> = questions
            .iter()
            .zip(answers.iter())
            .map(|(question, answer)| QuestionAnswerPair {
                question: question.clone(),
                attribute: answer.trim().to_lowercase(),
            })
            .collect();
        let questions = pairs.iter().map(|p| p.question.clone()).collect();

        Self { pairs, questions }
    }

    /// Stored question texts, in sheet order. Used as the fuzzy-matching
    /// vocabulary for incoming column headers.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Target attribute for a stored question string. `question` must be one
    /// of the values returned by `questions()` verbatim; the first positional
    /// match wins for duplicated question text.
    pub fn attribute_for(&self, question: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.question == question)
            .map(|p| p.attribute.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pairs_by_position_with_normalized_attributes() {
        let index = QuestionAnswerIndex::build(
            &strings(&["Potency?", "What is the pH?"]),
            &strings(&[" Potency ", "PH_VALUE"]),
        );
        assert_eq!(index.questions(), ["Potency?", "What is the pH?"]);
        assert_eq!(index.attribute_for("Potency?"), Some("potency"));
        assert_eq!(index.attribute_for("What is the pH?"), Some("ph_value"));
    }

    #[test]
    fn test_trailing_blanks_dropped_independently() {
        let index = QuestionAnswerIndex::build(
            &strings(&["Potency?", "", "  "]),
            &strings(&["potency"]),
        );
        assert_eq!(index.questions(), ["Potency?"]);
    }

    #[test]
    fn test_length_mismatch_truncates_to_shorter() {
        let index = QuestionAnswerIndex::build(
            &strings(&["Potency?", "Purity?"]),
            &strings(&["potency"]),
        );
        assert_eq!(index.questions(), ["Potency?"]);
        assert_eq!(index.attribute_for("Purity?"), None);
    }

    #[test]
    fn test_duplicate_question_first_wins() {
        let index = QuestionAnswerIndex::build(
            &strings(&["Potency?", "Potency?"]),
            &strings(&["potency", "purity"]),
        );
        assert_eq!(index.attribute_for("Potency?"), Some("potency"));
    }

    #[test]
    fn test_unknown_question_is_none() {
        let index = QuestionAnswerIndex::build(&strings(&["Potency?"]), &strings(&["potency"]));
        assert_eq!(index.attribute_for("potency?"), None);
    }
}
