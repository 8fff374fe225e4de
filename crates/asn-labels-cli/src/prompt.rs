use anyhow::{Result, bail};
use asn_labels::{InputSession, SessionStep, ValidatedParams};
use std::io::{BufRead, Write};

/// Ask for every value the session still needs, re-prompting on bad input.
///
/// Returns without reading anything when the session is already complete.
pub fn collect_params<R: BufRead, W: Write>(
    session: &mut InputSession,
    input: &mut R,
    output: &mut W,
) -> Result<ValidatedParams> {
    let mut step = session.step();

    loop {
        let field = match step {
            SessionStep::Done(params) => return Ok(params),
            SessionStep::Ask(field) => field,
            SessionStep::Retry { error, next } => {
                writeln!(output, "{error}")?;
                next
            }
        };

        write!(output, "{}", field.prompt())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for the {field}");
        }

        step = session.submit(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asn_labels::Field;
    use std::io::Cursor;

    fn run(answers: &str) -> (Result<ValidatedParams>, String) {
        let mut session = InputSession::new();
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = collect_params(&mut session, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_collects_all_four_values() {
        let (result, transcript) = run("1\n4\n2\n2\n");
        assert_eq!(result.unwrap(), ValidatedParams::new(1, 4, 2, 2).unwrap());
        assert!(transcript.contains(Field::Start.prompt()));
        assert!(transcript.contains(Field::Rows.prompt()));
    }

    #[test]
    fn test_garbage_reissues_prompt() {
        let (result, transcript) = run("abc\n1\n4\n2\n2\n");
        assert!(result.is_ok());
        assert_eq!(transcript.matches(Field::Start.prompt()).count(), 2);
        assert!(transcript.contains("Please enter valid whole numbers."));
    }

    #[test]
    fn test_reversed_range_reprompts_both_bounds() {
        let (result, transcript) = run("10\n5\n5\n10\n1\n1\n");
        assert_eq!(result.unwrap(), ValidatedParams::new(5, 10, 1, 1).unwrap());
        assert_eq!(transcript.matches(Field::Start.prompt()).count(), 2);
        assert_eq!(transcript.matches(Field::End.prompt()).count(), 2);
        assert!(transcript.contains("Starting number must be smaller than ending number"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let (result, _) = run("1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_presets_skip_prompts() {
        let mut session = InputSession::with_presets(Some(1), Some(9), Some(3), Some(3)).unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let params = collect_params(&mut session, &mut input, &mut output).unwrap();
        assert_eq!(params, ValidatedParams::new(1, 9, 3, 3).unwrap());
        assert!(output.is_empty());
    }
}
