use super::{Code, Diagnostic, Handler, Storage};
use crate::position::Position;

#[test]
fn diagnostic_display() {
    let diagnostic = Diagnostic::new(Position::new(0, 1), Code::UnknownCharacter);

    assert_eq!(
        diagnostic.to_string(),
        "Error E004: Unknown character at line 0:1"
    );
}

#[test]
fn diagnostic_display_with_detail() {
    let diagnostic = Diagnostic::with_detail(
        Position::new(3, 14),
        Code::SyntaxError,
        "Expected statement",
    );

    assert_eq!(
        diagnostic.to_string(),
        "Error E006: Syntax Error - Expected statement at line 3:14"
    );
}

#[test]
fn code_identifiers_are_stable() {
    assert_eq!(Code::UnexpectedToken.identifier(), "E001");
    assert_eq!(Code::UndefinedVariable.identifier(), "E002");
    assert_eq!(Code::InvalidFunctionCall.identifier(), "E003");
    assert_eq!(Code::UnknownCharacter.identifier(), "E004");
    assert_eq!(Code::UnterminatedStringLiteral.identifier(), "E005");
    assert_eq!(Code::SyntaxError.identifier(), "E006");
}

#[test]
fn storage_receives_and_clears() {
    let storage: Storage<Diagnostic> = Storage::new();

    assert!(!storage.has_errors());

    storage.receive(Diagnostic::new(Position::default(), Code::UnknownCharacter));
    storage.receive(Diagnostic::new(Position::new(0, 1), Code::UnknownCharacter));

    assert!(storage.has_errors());
    assert_eq!(storage.as_vec().len(), 2);

    storage.clear();

    assert!(!storage.has_errors());
}

#[test]
fn storage_formats_one_diagnostic_per_line() {
    let storage: Storage<Diagnostic> = Storage::new();

    storage.receive(Diagnostic::new(Position::new(0, 0), Code::UnknownCharacter));
    storage.receive(Diagnostic::new(
        Position::new(1, 2),
        Code::UnterminatedStringLiteral,
    ));

    let mut buffer = Vec::new();
    storage.format(&mut buffer).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "Error E004: Unknown character at line 0:0\n\
         Error E005: Unterminated string literal at line 1:2\n"
    );
}
