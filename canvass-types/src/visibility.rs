//! Which questions a respondent currently sees, and how far along they are.
//!
//! The response form and the submission check both go through
//! [`SurveyDefinition::is_visible`], so they can never disagree about which
//! questions are shown.

use crate::{Question, QuestionId, Responses, SkipLogic, SurveyDefinition};

impl SurveyDefinition {
    /// Decide whether `question` is visible given the answers collected so far.
    ///
    /// A question without an enabled, complete skip-logic rule is always
    /// visible. A rule whose source question does not exist in this survey is
    /// ignored. Otherwise the rule's condition decides.
    ///
    /// Each question is judged against the raw answers; whether the source
    /// question is itself visible does not matter.
    pub fn is_visible(&self, question: &Question, responses: &Responses) -> bool {
        let Some(condition) = question.skip_logic().and_then(SkipLogic::active_condition) else {
            return true;
        };

        if self.question(&condition.question_id).is_none() {
            tracing::debug!(
                question = %question.id(),
                source = %condition.question_id,
                "skip logic references an unknown question, showing it"
            );
            return true;
        }

        condition.is_met(responses.get(&condition.question_id))
    }

    /// Visible questions, in display order.
    pub fn visible_questions<'a>(
        &'a self,
        responses: &'a Responses,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions
            .iter()
            .filter(move |question| self.is_visible(question, responses))
    }

    /// Compute the visible set and completion for the current answers.
    pub fn progress(&self, responses: &Responses) -> Progress {
        let mut visible = Vec::new();
        let mut answered = 0;
        for question in self.visible_questions(responses) {
            if responses.has_answer(question.id()) {
                answered += 1;
            }
            visible.push(question.id().clone());
        }
        Progress { visible, answered }
    }
}

/// Snapshot of the respondent's view of a survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Ids of the visible questions, in display order.
    pub visible: Vec<QuestionId>,

    /// Number of visible questions with a non-blank answer.
    pub answered: usize,
}

impl Progress {
    /// Check if a question is in the visible set.
    pub fn is_visible(&self, id: &QuestionId) -> bool {
        self.visible.contains(id)
    }

    /// Answered share of the visible questions, rounded to a whole percent.
    ///
    /// Zero when nothing is visible.
    pub fn percent(&self) -> u8 {
        if self.visible.is_empty() {
            return 0;
        }
        let ratio = self.answered as f64 / self.visible.len() as f64;
        (ratio * 100.0).round() as u8
    }
}
