//! Integration tests for mel CLI.

use clap::Parser;
use melops::cli::{Cli, run_cli};
use std::path::PathBuf;

const TRANSCRIPT: &str = r#"{"words": [
    {"text": "hello", "punctuatedText": "Hello", "start": 0.0, "end": 0.4, "sentenceIndex": 0},
    {"text": "there", "punctuatedText": "there.", "start": 0.4, "end": 0.8, "sentenceIndex": 0},
    {"text": "general", "punctuatedText": "General", "start": 1.2, "end": 1.6, "sentenceIndex": 1},
    {"text": "kenobi", "punctuatedText": "Kenobi!", "start": 1.6, "end": 2.1, "sentenceIndex": 1}
]}"#;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let temp_dir = std::env::temp_dir().join("melops-test");
    std::fs::create_dir_all(&temp_dir).expect("failed to create temp dir");

    let path = temp_dir.join(name);
    std::fs::write(&path, contents).expect("failed to write transcript");
    path
}

fn run(args: &[&str]) -> eyre::Result<()> {
    run_cli(Cli::parse_from(args))
}

#[test]
fn query_runs_on_transcript_file() {
    let path = write_temp("query.json", TRANSCRIPT);

    run(&["mel", "query", path.to_str().unwrap(), "0.5", "1.0", "1.7"]).expect("query failed");
}

#[test]
fn play_runs_to_the_end() {
    let path = write_temp("play.json", TRANSCRIPT);

    run(&["mel", "play", path.to_str().unwrap(), "--fps", "120", "--mode", "strict"])
        .expect("play failed");
}

#[test]
fn sentences_runs_with_preview() {
    let path = write_temp("sentences.json", TRANSCRIPT);

    run(&["mel", "sentences", path.to_str().unwrap(), "--preview"]).expect("sentences failed");
}

#[test]
fn rejects_inverted_word() {
    let path = write_temp(
        "inverted.json",
        r#"[{"text": "oops", "start": 2.0, "end": 1.0}]"#,
    );

    let err = run(&["mel", "query", path.to_str().unwrap(), "1.5"]).unwrap_err();

    assert!(
        format!("{err:?}").contains("precedes start"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn rejects_missing_file() {
    assert!(run(&["mel", "sentences", "no/such/transcript.json"]).is_err());
}

#[test]
fn rejects_negative_epsilon() {
    let path = write_temp("epsilon.json", TRANSCRIPT);

    assert!(run(&["mel", "query", path.to_str().unwrap(), "1.0", "--epsilon=-1"]).is_err());
}

#[test]
fn rejects_empty_playback_range() {
    let path = write_temp("range.json", TRANSCRIPT);

    assert!(run(&["mel", "play", path.to_str().unwrap(), "--from", "3", "--to", "1"]).is_err());
}

#[test]
fn rejects_unbounded_playback() {
    let path = write_temp("unbounded.json", TRANSCRIPT);
    let path = path.to_str().unwrap();

    assert!(run(&["mel", "play", path, "--to", "inf"]).is_err());
    assert!(run(&["mel", "play", path, "--fps", "1e308"]).is_err());
}
