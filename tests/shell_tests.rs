//! Shell integration tests
//!
//! Drives the interactive menu with scripted input and inspects both the
//! printed output and the resulting library state.

#![allow(clippy::expect_used)]

use std::io::Cursor;

use clap::Parser;
use lending_desk::{Config, Library, Shell};

/// Run a shell over the default (seeded, logging) library with `script` as input
fn run_script(script: &str) -> (Library, String) {
    let library = Config::try_parse_from(["lending-desk"]).expect("defaults should parse").library();

    let mut shell = Shell::new(library, Cursor::new(script.to_string()), Vec::new());
    shell.run().expect("in-memory session should not fail");

    let (library, output) = shell.into_parts();
    (library, String::from_utf8(output).expect("output should be UTF-8"))
}

#[test]
fn test_check_out_and_return() {
    let (library, output) = run_script("4\nP102\ndune\n5\np102\nDune\n9\n");

    assert!(output.contains("Successfully checked out 'Dune' to Bob."));
    assert!(output.contains("Successfully returned 'Dune' from Bob."));
    assert!(output.contains("Exiting program. Goodbye!"));

    let dune = library.query().find_item("Dune").expect("Dune is seeded");
    assert!(dune.is_available());
    assert_eq!(library.history().len(), 2);
}

#[test]
fn test_rejections_are_reported() {
    let script = "4\nP102\nDune\n4\nP101\nDune\n5\nP101\nDune\n4\nP999\nDune\n4\nP101\nNo Such Book\n9\n";
    let (library, output) = run_script(script);

    assert!(output.contains("Sorry, 'Dune' is already checked out."));
    assert!(output.contains("This item was not checked out to this borrower."));
    assert!(output.contains("Borrower not found."));
    assert!(output.contains("Item not found."));

    let dune = library.query().find_item("dune").expect("Dune is seeded");
    assert_eq!(dune.holder(), Some("P102"));
    let alice = library.query().find_borrower("P101").expect("Alice is seeded");
    assert!(alice.held_titles().is_empty());
}

#[test]
fn test_add_and_search() {
    let script = "7\nAnimal Farm\nGeorge Orwell\nnineteen\n1945\n2\ngeorge orwell\n9\n";
    let (library, output) = run_script(script);

    assert!(output.contains("Invalid input. Please enter a number."));
    assert!(output.contains("Item added successfully: Animal Farm"));
    assert!(output.contains("Title: 1984"));
    assert!(output.contains("Title: Animal Farm"));
    assert_eq!(library.query().items().len(), 4);
}

#[test]
fn test_register_and_view_holdings() {
    let script = "8\nCarol\nP103\n4\nP103\n1984\n6\np103\n3\n9\n";
    let (_library, output) = run_script(script);

    assert!(output.contains("Borrower registered successfully: Carol"));
    assert!(output.contains("Items checked out by Carol"));
    assert!(output.contains("- 1984"));
    assert!(output.contains("Borrower: Carol | ID: P103"));
}

#[test]
fn test_invalid_choice_and_end_of_input() {
    let (_library, output) = run_script("42\nmenu\n");

    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.contains("Invalid input. Please enter a number."));
    assert!(!output.contains("Goodbye"));
}

#[test]
fn test_input_ending_mid_operation() {
    let (library, _output) = run_script("4\nP101\n");
    assert!(library.history().is_empty());
}

#[test]
fn test_activity_and_snapshot() {
    let (_library, output) = run_script("10\n4\nP101\n1984\n10\n11\n9\n");

    assert!(output.contains("No activity yet."));
    assert!(output.contains("1. '1984' checked out to Alice (P101)"));
    assert!(output.contains("\"CheckedOut\": \"P101\""));
    assert!(output.contains("\"held_titles\": ["));
}
