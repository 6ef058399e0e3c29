#![allow(dead_code)]

use jiff::Timestamp;
use uuid::Uuid;

use mindcheck_core::models::answer::{AnswerValue, QuickAnswer, QuickItem, SubmittedAnswer};
use mindcheck_core::models::questionnaire::{Question, QuestionKind, QuestionOption, Questionnaire};

pub fn option(label: &str, value: i32) -> QuestionOption {
    QuestionOption {
        id: Uuid::new_v4(),
        label: label.to_string(),
        value,
        order: 0,
    }
}

/// Options labelled 1..=5 worth their own number.
pub fn five_point_options() -> Vec<QuestionOption> {
    (1..=5).map(|v| option(&v.to_string(), v)).collect()
}

pub fn question(kind: QuestionKind, is_required: bool, options: Vec<QuestionOption>) -> Question {
    Question {
        id: Uuid::new_v4(),
        text: format!("{kind} question"),
        kind,
        order: 0,
        is_required,
        options,
    }
}

pub fn questionnaire(questions: Vec<Question>) -> Questionnaire {
    let now: Timestamp = "2026-03-01T09:00:00Z".parse().unwrap();
    Questionnaire {
        id: Uuid::new_v4(),
        name: "Mental Health Self-Assessment".to_string(),
        description: "Weekly check-in".to_string(),
        is_active: true,
        questions,
        created_at: now,
        updated_at: now,
    }
}

/// Five required single-choice questions worth 1–5 points each.
pub fn five_question_form() -> Questionnaire {
    questionnaire(
        (0..5)
            .map(|_| question(QuestionKind::SingleChoice, true, five_point_options()))
            .collect(),
    )
}

/// Answers choosing, for each question in order, the option worth `values[i]`.
pub fn choose_values(questionnaire: &Questionnaire, values: &[i32]) -> Vec<SubmittedAnswer> {
    questionnaire
        .questions
        .iter()
        .zip(values)
        .map(|(q, v)| {
            let chosen = q.options.iter().find(|o| o.value == *v).unwrap();
            choice(q, chosen.id)
        })
        .collect()
}

pub fn choice(question: &Question, option_id: Uuid) -> SubmittedAnswer {
    SubmittedAnswer {
        question_id: question.id,
        answer: AnswerValue::Choice { option_id },
    }
}

pub fn scale(question: &Question, value: i32) -> SubmittedAnswer {
    SubmittedAnswer {
        question_id: question.id,
        answer: AnswerValue::Scale { value },
    }
}

pub fn text(question: &Question, text: &str) -> SubmittedAnswer {
    SubmittedAnswer {
        question_id: question.id,
        answer: AnswerValue::Text {
            text: text.to_string(),
        },
    }
}

/// Quick answers in item order: mood, sleep, stress, social, energy.
pub fn quick(values: [i32; 5]) -> Vec<QuickAnswer> {
    QuickItem::ALL
        .into_iter()
        .zip(values)
        .map(|(item, value)| QuickAnswer { item, value })
        .collect()
}
