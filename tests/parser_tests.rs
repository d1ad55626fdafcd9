use flametext::parser::{parse_line, StackSample};
use flametext::utils::error::ParseError;

#[test]
fn test_parse_line_valid() {
    let sample = parse_line("unix`0xfffffffffb800c86;genunix`syscall_mstate 139").unwrap();
    assert_eq!(sample.stack, "unix`0xfffffffffb800c86;genunix`syscall_mstate");
    assert_eq!(sample.value, 139);
}

#[test]
fn test_parse_line_surrounding_whitespace() {
    let sample = parse_line("\ta;b 7 ").unwrap();
    assert_eq!(sample, StackSample::new("a;b", 7));
}

#[test]
fn test_parse_line_rejects_wrong_field_counts() {
    assert!(matches!(parse_line(""), Err(ParseError::FieldCount(0))));
    assert!(matches!(parse_line("a;b"), Err(ParseError::FieldCount(1))));
    assert!(matches!(
        parse_line("a;b 1 2"),
        Err(ParseError::FieldCount(3))
    ));
}

#[test]
fn test_parse_line_rejects_bad_values() {
    assert!(matches!(
        parse_line("a;b 12x"),
        Err(ParseError::InvalidValue(..))
    ));
    assert!(matches!(
        parse_line("a;b -3"),
        Err(ParseError::InvalidValue(..))
    ));
}

#[test]
fn test_parse_error_message_names_the_value() {
    let err = parse_line("a;b twelve").unwrap_err();
    assert!(err.to_string().contains("twelve"));
}

#[test]
fn test_frames_root_adjacent_first() {
    let sample = parse_line("main;handler;io_wait 52").unwrap();
    let frames: Vec<&str> = sample.frames().collect();
    assert_eq!(frames, vec!["main", "handler", "io_wait"]);
}
