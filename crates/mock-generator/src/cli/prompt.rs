//! Interactive mock selection.

use std::io::{BufRead, Write};

use tracing::warn;

use super::CliError;
use crate::mock::{MockName, MockSelection};

/// Question shown when no mock names are passed on the command line.
pub const PROMPT: &str = "Select one (or more) mock(s) [comma delimited]:";

/// Lists every mock, asks for a selection on `input`, and echoes the answer.
///
/// Choices may be mock names or their list indices, separated by commas. An
/// empty answer, or end of input, selects every mock. Unrecognised choices are
/// logged and dropped.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the question cannot be written or the answer
/// cannot be read.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// use mock_generator::MockName;
/// use mock_generator::cli::prompt_for_mocks;
///
/// let mut output = Vec::new();
/// let selection = prompt_for_mocks(Cursor::new("9, getChannelV8\n"), &mut output)
///     .expect("prompt answered");
///
/// let mocks: Vec<MockName> = selection.iter().collect();
/// assert_eq!(mocks, [MockName::GetChannelV8, MockName::GetReactions]);
/// ```
pub fn prompt_for_mocks<R, W>(mut input: R, output: &mut W) -> Result<MockSelection, CliError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let write_failed = |err: std::io::Error| CliError::io("write the prompt", &err);

    writeln!(output, " {PROMPT}").map_err(write_failed)?;
    for (index, mock) in MockName::ALL.iter().enumerate() {
        writeln!(output, "  [{index}] {mock}").map_err(write_failed)?;
    }
    write!(output, " > ").map_err(write_failed)?;
    output.flush().map_err(write_failed)?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|err| CliError::io("read the selection", &err))?;

    let selection = parse_answer(&answer);
    let names: Vec<&str> = selection.iter().map(MockName::as_str).collect();
    writeln!(output, "You have just selected: {}", names.join(", ")).map_err(write_failed)?;
    Ok(selection)
}

fn parse_answer(answer: &str) -> MockSelection {
    if answer.trim().is_empty() {
        return MockSelection::all();
    }
    answer
        .split(',')
        .map(str::trim)
        .filter(|choice| !choice.is_empty())
        .filter_map(|choice| {
            let resolved = resolve_choice(choice);
            if resolved.is_none() {
                warn!(choice, "ignoring unknown selection");
            }
            resolved
        })
        .collect()
}

fn resolve_choice(choice: &str) -> Option<MockName> {
    choice.parse::<usize>().map_or_else(
        |_| choice.parse().ok(),
        |index| MockName::ALL.get(index).copied(),
    )
}
