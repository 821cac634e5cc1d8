use std::path::Path;

use hoare_transcode::{transcode, Direction};
use test_generator::test_resources;

/// Renders the outcome of a transcoding the way the fixtures spell it out.
fn render(input: &str, direction: Direction) -> String {
    match transcode(input, direction) {
        Ok(pair) => format!(
            "condition: {}\nstatement: {}",
            pair.condition, pair.statement
        ),
        Err(err) => format!("error: {}", err),
    }
}

fn check(resource: &str, direction: Direction) {
    let input_file = Path::new(resource);
    let expected_file = input_file.with_extension("out");
    let input = std::fs::read_to_string(input_file).unwrap();
    let expected = std::fs::read_to_string(&expected_file).unwrap();
    assert_eq!(
        render(&input, direction),
        expected.trim_end(),
        "{}",
        resource
    );
}

#[test_resources("res/forward/*.in")]
fn test_forward(resource: &str) {
    check(resource, Direction::Forward);
}

#[test_resources("res/backward/*.in")]
fn test_backward(resource: &str) {
    check(resource, Direction::Backward);
}
