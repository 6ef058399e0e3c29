//! Reduces submitted answers to a total score.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use mindcheck_core::models::answer::{AnswerValue, QuickAnswer, SubmittedAnswer};
use mindcheck_core::models::questionnaire::{Question, QuestionKind, Questionnaire};
use mindcheck_core::models::record::{ResponseTarget, ScoredResponse};

use crate::error::AssessmentError;
use crate::quick;

/// Total score plus the per-question contributions that make it up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub total: i64,
    pub responses: Vec<ScoredResponse>,
}

/// Score answers to a stored questionnaire.
///
/// Only required questions count toward the total. Answers to optional
/// questions are validated and kept with a score of zero.
pub fn aggregate_questionnaire(
    questionnaire: &Questionnaire,
    answers: &[SubmittedAnswer],
) -> Result<Aggregate, AssessmentError> {
    check_structure(questionnaire)?;

    let mut by_question: HashMap<Uuid, &AnswerValue> = HashMap::with_capacity(answers.len());
    for submitted in answers {
        if questionnaire.question(submitted.question_id).is_none() {
            return Err(AssessmentError::UnknownQuestion(submitted.question_id));
        }
        if by_question
            .insert(submitted.question_id, &submitted.answer)
            .is_some()
        {
            return Err(AssessmentError::DuplicateAnswer {
                question: submitted.question_id.to_string(),
            });
        }
    }

    let mut total = 0i64;
    let mut responses = Vec::with_capacity(by_question.len());
    for question in questionnaire.ordered_questions() {
        let answered = by_question
            .get(&question.id)
            .map(|answer| score_answer(question, answer))
            .transpose()?
            .filter(|response| !is_blank(response));

        match answered {
            Some(mut response) => {
                if question.is_required {
                    total += response.score;
                } else {
                    response.score = 0;
                }
                responses.push(response);
            }
            None if question.is_required => {
                return Err(AssessmentError::MissingRequiredAnswer {
                    question: question.id.to_string(),
                });
            }
            None => {}
        }
    }

    Ok(Aggregate { total, responses })
}

/// Score the fixed quick check. Every item is required.
pub fn aggregate_quick(answers: &[QuickAnswer]) -> Result<Aggregate, AssessmentError> {
    let mut by_item = HashMap::with_capacity(answers.len());
    for answer in answers {
        if by_item.insert(answer.item, answer.value).is_some() {
            return Err(AssessmentError::DuplicateAnswer {
                question: answer.item.to_string(),
            });
        }
    }

    let mut total = 0i64;
    let mut responses = Vec::with_capacity(answers.len());
    for question in quick::questions() {
        let raw = *by_item
            .get(&question.item)
            .ok_or_else(|| AssessmentError::MissingRequiredAnswer {
                question: question.item.to_string(),
            })?;
        if raw < question.min || raw > question.max {
            return Err(AssessmentError::OutOfRangeAnswer {
                question: question.item.to_string(),
                value: raw,
                min: question.min,
                max: question.max,
            });
        }

        let score = question.direction.contribution(raw, question.max);
        total += score;
        responses.push(ScoredResponse {
            target: ResponseTarget::Quick(question.item),
            selected_options: Vec::new(),
            scale_value: Some(raw),
            text_response: None,
            score,
        });
    }

    Ok(Aggregate { total, responses })
}

/// A required choice question must offer at least one option.
fn check_structure(questionnaire: &Questionnaire) -> Result<(), AssessmentError> {
    match questionnaire
        .required_questions()
        .find(|q| q.kind.is_choice() && q.options.is_empty())
    {
        Some(q) => Err(AssessmentError::MalformedQuestionnaire {
            question: q.id.to_string(),
        }),
        None => Ok(()),
    }
}

fn score_answer(question: &Question, answer: &AnswerValue) -> Result<ScoredResponse, AssessmentError> {
    let mut response = ScoredResponse {
        target: ResponseTarget::Question(question.id),
        selected_options: Vec::new(),
        scale_value: None,
        text_response: None,
        score: 0,
    };

    match (question.kind, answer) {
        (QuestionKind::SingleChoice, AnswerValue::Choice { option_id }) => {
            response.score = option_value(question, *option_id)?;
            response.selected_options.push(*option_id);
        }
        (QuestionKind::MultipleChoice, AnswerValue::Choices { option_ids }) => {
            let mut seen = HashSet::with_capacity(option_ids.len());
            for option_id in option_ids {
                if !seen.insert(*option_id) {
                    return Err(AssessmentError::DuplicateAnswer {
                        question: question.id.to_string(),
                    });
                }
                response.score += option_value(question, *option_id)?;
                response.selected_options.push(*option_id);
            }
        }
        (QuestionKind::Scale5 | QuestionKind::Scale10, AnswerValue::Scale { value }) => {
            if let Some((min, max)) = question.kind.scale_bounds()
                && (*value < min || *value > max)
            {
                return Err(AssessmentError::OutOfRangeAnswer {
                    question: question.id.to_string(),
                    value: *value,
                    min,
                    max,
                });
            }
            response.score = i64::from(*value);
            response.scale_value = Some(*value);
        }
        (QuestionKind::Text, AnswerValue::Text { text }) => {
            response.text_response = Some(text.clone());
        }
        (kind, other) => {
            return Err(AssessmentError::AnswerKindMismatch {
                question: question.id.to_string(),
                expected: kind.as_str(),
                found: other.shape(),
            });
        }
    }

    Ok(response)
}

fn option_value(question: &Question, option_id: Uuid) -> Result<i64, AssessmentError> {
    question
        .option(option_id)
        .map(|o| i64::from(o.value))
        .ok_or_else(|| AssessmentError::InvalidOptionReference {
            question: question.id.to_string(),
            option_id,
        })
}

/// An empty selection or blank text counts as no answer.
fn is_blank(response: &ScoredResponse) -> bool {
    response.selected_options.is_empty()
        && response.scale_value.is_none()
        && response
            .text_response
            .as_deref()
            .is_none_or(|t| t.trim().is_empty())
}
