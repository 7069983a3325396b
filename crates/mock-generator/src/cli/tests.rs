//! Unit tests for argument parsing, the prompt, and console output.

use std::io::{self, Cursor};

use clap::CommandFactory;
use rstest::rstest;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("generate-mocks").chain(args.iter().copied()))
        .expect("arguments parse")
}

#[test]
fn parses_repeated_and_comma_delimited_names() {
    let cli = parse(&["getChannelV8,getGuildMember", "getReactions"]);

    assert_eq!(cli.mocks, ["getChannelV8", "getGuildMember", "getReactions"]);
    assert!(!cli.no_interaction);
}

#[rstest]
#[case(&["-d", "out"])]
#[case(&["--destination", "out"])]
#[case(&["--destination=out"])]
fn parses_destination_flags(#[case] args: &[&str]) {
    let cli = parse(args);
    assert_eq!(cli.destination.as_deref(), Some(Utf8Path::new("out")));
}

#[test]
fn parses_seed_and_no_interaction() {
    let cli = parse(&["--seed", "2021", "-n"]);

    assert_eq!(cli.seed, Some(2021));
    assert!(cli.no_interaction);
    assert!(cli.mocks.is_empty());
}

#[test]
fn rejects_a_non_numeric_seed() {
    let result = Cli::try_parse_from(["generate-mocks", "--seed", "abc"]);
    assert!(result.is_err());
}

#[rstest]
#[case(None, "data")]
#[case(Some("data/"), "data")]
#[case(Some("fixtures//"), "fixtures")]
#[case(Some("nested/out"), "nested/out")]
#[case(Some("/"), "/")]
fn resolves_destination(#[case] raw: Option<&str>, #[case] expected: &str) {
    assert_eq!(resolve_destination(raw.map(Utf8Path::new)), expected);
}

#[rstest]
#[case("", MockName::ALL.len())]
#[case("\n", MockName::ALL.len())]
#[case("   \n", MockName::ALL.len())]
#[case("getChannelV6\n", 1)]
#[case("0, 1, 1\n", 2)]
#[case("getEmojis, 42\n", 0)]
fn prompt_resolves_answers(#[case] answer: &str, #[case] expected: usize) {
    let mut output = Vec::new();

    let selection = prompt_for_mocks(Cursor::new(answer), &mut output).expect("prompt answered");

    assert_eq!(selection.len(), expected);
}

#[test]
fn prompt_lists_choices_and_echoes_the_selection() {
    let mut output = Vec::new();

    prompt_for_mocks(Cursor::new("getReactions,2\n"), &mut output).expect("prompt answered");

    let text = String::from_utf8(output).expect("UTF-8 output");
    assert!(text.contains(PROMPT));
    assert!(text.contains("[0] getChannelV6"));
    assert!(text.contains("[9] getReactions"));
    assert!(text.ends_with("You have just selected: getChannelsV6, getReactions\n"));
}

struct FailingReader;

impl io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stdin closed"))
    }
}

#[test]
fn prompt_reports_read_failures() {
    let mut output = Vec::new();

    let err = prompt_for_mocks(io::BufReader::new(FailingReader), &mut output)
        .expect_err("read fails");

    assert_eq!(
        err,
        CliError::Io {
            action: "read the selection",
            message: "stdin closed".to_owned(),
        }
    );
}

#[test]
fn console_observer_prints_title_and_confirmation() {
    let mut output = Vec::new();
    let mut observer = ConsoleObserver::new(&mut output);

    observer.mock_started(MockName::GetChannelV8);
    observer.mock_finished(&WrittenMock {
        mock: MockName::GetChannelV8,
        path: Utf8PathBuf::from("data/get-channel-v8-success.json"),
    });
    observer.finish().expect("writes succeed");

    let text = String::from_utf8(output).expect("UTF-8 output");
    assert_eq!(text, "\nGet Channel V8\n==============\n\n [OK] Finished\n");
}

struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn console_observer_defers_write_failures() {
    let mut observer = ConsoleObserver::new(FailingWriter);

    observer.mock_started(MockName::GetReactions);

    assert_eq!(
        observer.finish(),
        Err(CliError::Io {
            action: "write progress",
            message: "broken pipe".to_owned(),
        })
    );
}

#[test]
fn unmatched_names_skip_the_prompt_and_write_nothing() {
    let cli = parse(&[
        "getEmojis",
        "-d",
        "target/never-created-by-cli-tests",
        "--seed",
        "1",
    ]);
    let mut output = Vec::new();

    let written = run(&cli, Cursor::new("0\n"), &mut output).expect("run succeeds");

    assert!(written.is_empty());
    assert!(output.is_empty());
    assert!(!Utf8Path::new("target/never-created-by-cli-tests").exists());
}

#[test]
fn destination_help_names_the_working_directory() {
    let help = Cli::command().render_long_help().to_string();

    assert!(help.contains("current working directory"));
}

#[test]
fn generation_failures_are_returned_not_printed() {
    let parent = Utf8PathBuf::from_path_buf(std::env::temp_dir())
        .expect("UTF-8 temp dir")
        .join(format!("cli-blocked-{}", std::process::id()));
    std::fs::write(&parent, "occupied").expect("create blocking file");
    let cli = parse(&["getChannelV8", "-d", parent.as_str(), "--seed", "1"]);
    let mut output = Vec::new();

    let result = run(&cli, Cursor::new(""), &mut output);
    drop(std::fs::remove_file(&parent));

    assert!(matches!(result, Err(CliError::Mock(_))), "{result:?}");
    let text = String::from_utf8(output).expect("UTF-8 output");
    assert!(!text.contains("[OK] Finished"));
}
