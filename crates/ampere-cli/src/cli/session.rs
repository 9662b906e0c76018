use crate::cli::input::{Input, InputParser};
use crate::cli::prompt::AnswerPrompt;
use crate::cli::render;
use ampere_core::quiz::{Progress, QuizSession};
use anyhow::Result;
use reedline::{Reedline, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ending {
    Completed,
    Exited,
}

/// Terminal front end for a quiz session, one question at a time.
pub(crate) struct Terminal {
    editor: Reedline,
    parser: InputParser,
}

impl Terminal {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            editor: Reedline::create(),
            parser: InputParser::new()?,
        })
    }

    /// Reads one line. `None` when the learner aborts or exits.
    pub(crate) fn read(&mut self, position: &str, options: usize) -> Result<Option<Input>> {
        let prompt = AnswerPrompt::new(position);
        loop {
            match self.editor.read_line(&prompt)? {
                Signal::Success(line) => match self.parser.parse(&line, options) {
                    Ok(Input::Exit) => return Ok(None),
                    Ok(input) => return Ok(Some(input)),
                    Err(err) => eprintln!("{err}"),
                },
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nAborted!");
                    return Ok(None);
                }
            }
        }
    }

    /// Walks through the open questions until all are answered. With `retake` the learner can
    /// reset a completed quiz and go again.
    pub(crate) fn run(&mut self, session: &mut QuizSession<'_>, retake: bool) -> Result<Ending> {
        loop {
            let Some(index) = session.next_unanswered() else {
                println!("{}", render::summary(&session.views()));
                if !retake {
                    return Ok(Ending::Completed);
                }
                println!("Type /reset to start over or /exit to leave.");
                match self.read("done", 0)? {
                    Some(Input::Reset) => {
                        session.reset();
                        continue;
                    }
                    Some(_) => continue,
                    None => return Ok(Ending::Completed),
                }
            };
            let Some(view) = session.view(index) else {
                return Ok(Ending::Exited);
            };
            println!("{}", render::question(&view, true));

            let position = format!("{}/{}", index + 1, session.len());
            match self.read(&position, view.options.len())? {
                None => return Ok(Ending::Exited),
                Some(Input::Reset) => {
                    session.reset();
                    println!("Answers cleared.");
                }
                Some(Input::Choice(option)) => {
                    let answer = session.select(index, option)?;
                    tracing::debug!(index, option, ?answer, "answered");
                    if let Some(view) = session.view(index) {
                        println!("{}", render::question(&view, false));
                    }
                    if let Progress::Pending { answered, total } = answer.progress {
                        println!("{answered} of {total} answered.\n");
                    }
                }
                Some(Input::Exit) => return Ok(Ending::Exited),
            }
        }
    }
}
