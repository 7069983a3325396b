//! Tests for the `generate-mocks` command flow with in-memory streams.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use std::io::Cursor;

use clap::Parser;
use mock_generator::MockName;
use mock_generator::cli::{Cli, PROMPT, run};
use test_support::{fixture_names, unique_destination};

fn cli_for(args: &[&str], destination: &str) -> Cli {
    let argv = ["generate-mocks", "--seed", "99", "-d", destination]
        .into_iter()
        .chain(args.iter().copied());
    Cli::try_parse_from(argv).expect("arguments parse")
}

#[test]
fn no_interaction_generates_every_mock() {
    let destination = unique_destination("cli-all").expect("create test directory");
    let cli = cli_for(&["--no-interaction"], destination.as_str());
    let mut output = Vec::new();

    let written = run(&cli, Cursor::new(""), &mut output).expect("run succeeds");

    assert_eq!(written.len(), MockName::ALL.len());
    let mut expected: Vec<String> = MockName::ALL.iter().map(|mock| mock.file_name()).collect();
    expected.sort();
    assert_eq!(fixture_names(&destination).expect("list fixtures"), expected);

    let text = String::from_utf8(output).expect("UTF-8 output");
    assert_eq!(text.matches("[OK] Finished").count(), MockName::ALL.len());
    assert!(!text.contains(PROMPT));
}

#[test]
fn prompt_answer_drives_the_selection() {
    let destination = unique_destination("cli-prompt").expect("create test directory");
    let cli = cli_for(&[], destination.as_str());
    let mut output = Vec::new();

    let written = run(&cli, Cursor::new("getGuildRoles, 0\n"), &mut output).expect("run succeeds");

    let mocks: Vec<MockName> = written.iter().map(|entry| entry.mock).collect();
    assert_eq!(mocks, [MockName::GetChannelV6, MockName::GetGuildRoles]);
    let text = String::from_utf8(output).expect("UTF-8 output");
    assert!(text.contains("You have just selected: getChannelV6, getGuildRoles"));
    assert!(text.contains("Get Guild Roles\n==============="));
}

#[test]
fn positional_names_are_written_in_allow_list_order() {
    let destination = unique_destination("cli-order").expect("create test directory");
    let trailing = format!("{destination}/");
    let cli = cli_for(&["getReactions,getChannelsV8", "getReactions"], &trailing);
    let mut output = Vec::new();

    let written = run(&cli, Cursor::new(""), &mut output).expect("run succeeds");

    let paths: Vec<String> = written.iter().map(|entry| entry.path.to_string()).collect();
    assert_eq!(
        paths,
        [
            format!("{destination}/get-channels-v8-success.json"),
            format!("{destination}/get-reactions-success.json"),
        ]
    );
}
