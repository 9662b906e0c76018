use crate::cli::input::option_label;
use ampere_core::exam::ExamResult;
use ampere_core::view::{OptionMark, Outcome, QuestionView, QuizView};
use std::time::Duration;

fn marker(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Plain => " ",
        OptionMark::SelectedCorrect => "✔",
        OptionMark::SelectedIncorrect => "✘",
        OptionMark::CorrectAnswer => "→",
    }
}

fn block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// A question with its options, plus feedback once it is answered.
pub(crate) fn question(view: &QuestionView<'_>, header: bool) -> String {
    let mut lines = Vec::with_capacity(view.options.len() + 4);
    if header {
        lines.push(view.header());
    }
    lines.push(view.question.to_owned());
    lines.extend(view.options.iter().map(|option| {
        format!(
            " {} {}) {}",
            marker(option.mark),
            option_label(option.index),
            option.text
        )
    }));
    if let Some(outcome) = view.outcome {
        let verdict = match outcome {
            Outcome::Correct => "Correct!",
            Outcome::Incorrect => "Not quite.",
        };
        lines.push(verdict.to_owned());
    }
    if let Some(explanation) = view.explanation {
        lines.push(explanation.to_owned());
    }
    block(lines)
}

/// One line per question, then the score.
pub(crate) fn summary(view: &QuizView<'_>) -> String {
    let mut lines = vec![view.title.to_owned()];
    lines.extend(view.questions.iter().map(|question| {
        let mark = match question.outcome {
            Some(Outcome::Correct) => "✔",
            Some(Outcome::Incorrect) => "✘",
            None => "·",
        };
        format!(" {mark} {}. {}", question.number, question.question)
    }));
    if let Some(score) = view.score {
        lines.push(format!("Score: {score}"));
    }
    block(lines)
}

fn duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub(crate) fn exam_result(result: &ExamResult, time_limit: Option<Duration>) -> String {
    let verdict = if result.passed { "PASSED" } else { "FAILED" };
    let mut lines = vec![format!("{verdict} with {}", result.score)];
    match time_limit {
        Some(limit) => {
            lines.push(format!("Time: {} of {}", duration(result.elapsed), duration(limit)));
            if !result.within_time_limit {
                lines.push("Over the time limit".to_owned());
            }
        }
        None => lines.push(format!("Time: {}", duration(result.elapsed))),
    }
    block(lines)
}
