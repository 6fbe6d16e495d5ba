use assert_cmd::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_stdin(args: &[&str], envs: &[(&str, &str)], input: &str) -> (String, bool) {
    let mut cmd = Command::cargo_bin("transcript-summarizer").unwrap();
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (k, v) in envs {
        cmd.env(k, v);
    }
    let mut child = cmd.spawn().unwrap();
    // ignore EPIPE: the process may exit before reading stdin (config errors)
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
    let out = child.wait_with_output().unwrap();
    (String::from_utf8(out.stdout).unwrap(), out.status.success())
}

/// Two cohesive halves with disjoint vocabulary, so topic segmentation has
/// one clear boundary at the midpoint.
fn transcript() -> String {
    let first = "The budget review covered projected spending and overall budget costs. ";
    let second = "Hiring plans added more engineering candidates to the recruiting pipeline. ";
    let mut text = String::new();
    for _ in 0..10 {
        text.push_str(first);
    }
    for _ in 0..10 {
        text.push_str(second);
    }
    text.trim().to_string()
}

#[test]
fn summarizes_stdin_to_success_envelope() {
    let (stdout, ok) = run_with_stdin(&["--max-sentences", "10"], &[], &transcript());
    assert!(ok);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["status"], "success");
    assert!(!v["summary"].as_str().unwrap().is_empty());
    assert!(!v["tldr"].as_str().unwrap().is_empty());
    let key_points = v["key_points"].as_array().unwrap();
    assert!(!key_points.is_empty() && key_points.len() <= 10);
    // every key point is a verbatim input sentence
    let input = transcript();
    for point in key_points {
        assert!(input.contains(point.as_str().unwrap()));
    }
}

#[test]
fn segments_vocabulary_shift_into_two_topics() {
    let (stdout, ok) = run_with_stdin(&[], &[], &transcript());
    assert!(ok);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let topics = v["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 2);
    assert!(topics[0]["summary"].as_str().unwrap().contains("budget"));
    assert!(topics[1]["summary"].as_str().unwrap().contains("candidate"));
    for topic in topics {
        assert!(!topic["title"].as_str().unwrap().is_empty());
        assert_eq!(topic["speakers"].as_array().unwrap().len(), 0);
    }
}

#[test]
fn empty_input_yields_error_envelope() {
    let (stdout, ok) = run_with_stdin(&[], &[], "   \n  ");
    assert!(ok, "engine errors are envelopes, not process failures");
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["status"], "error");
    assert_eq!(v["error"], "no text provided for summarization");
}

#[test]
fn output_is_deterministic() {
    let input = transcript();
    let (a, _) = run_with_stdin(&["--max-sentences", "8"], &[], &input);
    let (b, _) = run_with_stdin(&["--max-sentences", "8"], &[], &input);
    assert_eq!(a, b);
}

#[test]
fn reads_transcript_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meeting.txt");
    std::fs::write(&path, "We met at nine. The demo worked. Everyone left happy.").unwrap();

    let output = Command::cargo_bin("transcript-summarizer")
        .unwrap()
        .arg(&path)
        .arg("--max-sentences")
        .arg("5")
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["status"], "success");
    assert_eq!(
        v["summary"],
        "We met at nine. The demo worked. Everyone left happy."
    );
    assert_eq!(v["tldr"], "We met at nine.");
}

#[test]
fn lead_strategy_takes_leading_sentences() {
    let (stdout, ok) = run_with_stdin(
        &["--max-sentences", "2"],
        &[("SUMMARY_STRATEGY", "lead")],
        "First item. Second item. Third item. Fourth item.",
    );
    assert!(ok);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["summary"], "First item. Second item.");
    assert_eq!(v["topics"].as_array().unwrap().len(), 0);
}

#[test]
fn zero_max_sentences_is_a_config_error() {
    let (_, ok) = run_with_stdin(&["--max-sentences", "0"], &[], "Some text.");
    assert!(!ok);
}
