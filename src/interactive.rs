use crate::bank::Prompt;
use crate::error::{AssessError, Result};
use crate::session::{Session, Step};
use std::io::{BufRead, Write};

/// Maps what the respondent typed to an option key: an exact key first,
/// then a 1-based option number.
fn resolve_option(prompt: &Prompt, input: &str) -> String {
    if prompt.options.iter().any(|option| option.key == input) {
        return input.to_string();
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| prompt.options.get(index))
        .map(|option| option.key.clone())
        .unwrap_or_else(|| input.to_string())
}

fn show_prompt<W: Write>(out: &mut W, session: &Session, prompt: &Prompt) -> Result<()> {
    let step = session.step();
    let (position, total) = session.progress().unwrap_or((0, 0));
    writeln!(out)?;
    writeln!(
        out,
        "[step {}/{}] {} - {}",
        step.number(),
        Step::COUNT,
        step.title(),
        step.description()
    )?;
    writeln!(out, "Question {position} of {total} ({})", prompt.section)?;
    writeln!(out, "{}", prompt.text)?;
    for (index, option) in prompt.options.iter().enumerate() {
        writeln!(out, "  {}) {} [{}]", index + 1, option.label, option.key)?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Drives a session from line-oriented input until every instrument is
/// scored. `back` revisits the previous question; `quit` or end of input
/// abandons the run.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, session: Session) -> Result<Session> {
    writeln!(out, "Design Systems Assessment")?;
    writeln!(
        out,
        "Answer with an option number or key. Type 'back' to revisit a question."
    )?;

    let mut session = session;
    let mut lines = input.lines();
    loop {
        match session.step() {
            Step::Results => return Ok(session),
            Step::Intro => {
                session = session.start()?;
                continue;
            }
            _ => {}
        }

        let prompt = session
            .current_prompt()
            .ok_or_else(|| AssessError::InvalidTransition("no question to show".to_string()))?;
        show_prompt(out, &session, &prompt)?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(AssessError::IncompleteSession),
        };
        let typed = line.trim();
        match typed {
            "quit" | "q" => return Err(AssessError::IncompleteSession),
            "back" | "b" => {
                session = session.back()?;
                if session.step() == Step::Intro {
                    writeln!(out, "Back at the introduction.")?;
                }
                continue;
            }
            _ => {}
        }

        let key = resolve_option(&prompt, typed);
        session = match session.clone().answer(&key).and_then(Session::advance) {
            Ok(next) => next,
            Err(err @ AssessError::InvalidResponse { .. }) => {
                writeln!(out, "invalid answer: {err}")?;
                session
            }
            Err(err) => return Err(err),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{technical, Instrument};
    use crate::types::config::RecommendationThresholds;
    use crate::types::report::Decision;
    use std::io::Cursor;

    fn script(psychometric: &str, wiscar: &str) -> String {
        let mut lines = Vec::new();
        lines.extend(std::iter::repeat(psychometric.to_string()).take(Instrument::Psychometric.len()));
        lines.extend(technical::QUESTIONS.iter().map(|question| question.correct.to_string()));
        lines.extend(std::iter::repeat(wiscar.to_string()).take(Instrument::Wiscar.len()));
        lines.join("\n")
    }

    fn fresh() -> Session {
        Session::new(RecommendationThresholds::default())
    }

    #[test]
    fn scripted_run_reaches_results() {
        let mut out = Vec::new();
        let session = run(Cursor::new(script("3", "2")), &mut out, fresh()).expect("run completes");

        let result = session.final_result().expect("results available");
        // wiscar answers by option number: 2 on likert, second choice on weighted
        assert_eq!(result.decision, Decision::Maybe);

        let transcript = String::from_utf8(out).expect("utf8 output");
        assert!(transcript.contains("[step 2/5] Psychometric Evaluation"));
        assert!(transcript.contains("Question 9 of 9"));
    }

    #[test]
    fn invalid_answer_is_asked_again() {
        let input = format!("7\n{}", script("4", "4"));
        let mut out = Vec::new();
        let session = run(Cursor::new(input), &mut out, fresh()).expect("run completes");
        assert_eq!(session.step(), Step::Results);

        let transcript = String::from_utf8(out).expect("utf8 output");
        assert!(transcript.contains("invalid answer"));
    }

    #[test]
    fn end_of_input_is_incomplete() {
        let mut out = Vec::new();
        let err = run(Cursor::new("3\n3\n"), &mut out, fresh()).expect_err("input ran out");
        assert!(matches!(err, AssessError::IncompleteSession));
    }

    #[test]
    fn back_at_first_question_restarts_from_intro() {
        let input = format!("back\n{}", script("5", "5"));
        let mut out = Vec::new();
        let session = run(Cursor::new(input), &mut out, fresh()).expect("run completes");
        assert_eq!(session.step(), Step::Results);
        let transcript = String::from_utf8(out).expect("utf8 output");
        assert!(transcript.contains("Back at the introduction."));
    }

    #[test]
    fn option_numbers_resolve_to_keys() {
        let prompt = crate::bank::prompt(Instrument::Technical, 0).expect("apt1 prompt");
        assert_eq!(resolve_option(&prompt, "3"), "24");
        assert_eq!(resolve_option(&prompt, "24"), "24");
        assert_eq!(resolve_option(&prompt, "9"), "9");
    }
}
