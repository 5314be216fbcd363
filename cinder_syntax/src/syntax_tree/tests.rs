use std::fmt::Display;

use cinder_base::position::Position;
use cinder_lexical::{
    lexer::Lexer,
    token::{KeywordKind, Token, TokenKind},
};
use cinder_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};

use super::{expression::Expression, statement::Statement, Program};
use crate::parser::Parser;

fn token(kind: TokenKind, line: usize, offset: usize) -> Token {
    Token::new(kind, Position::new(line, offset), None)
}

fn valued_token(kind: TokenKind, line: usize, offset: usize, value: &str) -> Token {
    Token::new(kind, Position::new(line, offset), Some(value.to_string()))
}

fn parse_source(source: &str) -> (Option<Program>, Parser) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();

    assert!(
        !lexer.diagnostics().has_errors(),
        "unexpected lexical diagnostics: {:#?}",
        lexer.diagnostics().as_vec()
    );

    let mut parser = Parser::new(tokens);
    let program = parser.parse();

    (program, parser)
}

#[test]
fn expression_identifier_statement() {
    let tokens = vec![
        token(TokenKind::StartOfFile, 0, 0),
        valued_token(TokenKind::Identifier, 0, 0, "var1"),
        token(TokenKind::Semicolon, 0, 4),
        token(TokenKind::EndOfFile, 0, 5),
    ];

    let mut parser = Parser::new(tokens);
    let program = parser.parse().unwrap();

    assert!(!parser.diagnostics().has_errors());

    let statements = program.scope().statements();
    assert_eq!(statements.len(), 1);

    let identifier = statements[0]
        .as_expression()
        .unwrap()
        .as_identifier()
        .unwrap();

    assert_eq!(identifier.name(), "var1");
}

#[test]
fn expression_string_literal_statement() {
    let tokens = vec![
        token(TokenKind::StartOfFile, 0, 0),
        valued_token(TokenKind::StringLiteral, 0, 0, "literal 1"),
        token(TokenKind::Semicolon, 0, 11),
        token(TokenKind::EndOfFile, 0, 12),
    ];

    let mut parser = Parser::new(tokens);
    let program = parser.parse().unwrap();

    assert!(!parser.diagnostics().has_errors());

    let literal = program.scope().statements()[0]
        .as_expression()
        .unwrap()
        .as_literal()
        .unwrap();

    assert_eq!(literal.as_string().unwrap(), "literal 1");
}

#[test]
fn expression_literal_statements_from_source() {
    let (program, parser) = parse_source("5123; 123.456; true; false; \"text\";");
    let program = program.unwrap();

    assert!(!parser.diagnostics().has_errors());

    let statements = program.scope().statements();
    assert_eq!(statements.len(), 5);

    let literal = |index: usize| statements[index].as_expression().unwrap().as_literal().unwrap();

    assert_eq!(literal(0).as_integer().copied(), Some(5123));
    assert_eq!(literal(1).as_float().copied(), Some(123.456));
    assert_eq!(literal(2).as_boolean().copied(), Some(true));
    assert_eq!(literal(3).as_boolean().copied(), Some(false));
    assert_eq!(literal(4).as_string().map(String::as_str), Some("text"));
}

#[test]
fn assignment_statement() {
    let (program, parser) = parse_source("var1 = 5123;");
    let program = program.unwrap();

    assert!(!parser.diagnostics().has_errors());

    let statements = program.scope().statements();
    assert_eq!(statements.len(), 1);

    let assignment = statements[0].as_assignment().unwrap();

    assert_eq!(assignment.identifier().name(), "var1");
    assert_eq!(
        assignment.expression().as_literal().unwrap().as_integer().copied(),
        Some(5123)
    );
}

#[test]
fn assignment_from_identifier() {
    let (program, parser) = parse_source("a = b;");
    let program = program.unwrap();

    assert!(!parser.diagnostics().has_errors());

    let (identifier, expression) = program.dissolve().dissolve().remove(0)
        .into_assignment()
        .unwrap()
        .dissolve();

    assert_eq!(identifier.dissolve(), "a");
    assert_eq!(expression.as_identifier().unwrap().name(), "b");
}

#[test]
fn parenthesized_expression_collapses_to_the_inner_expression() {
    let (program, _) = parse_source("(var1);");
    let program = program.unwrap();

    let expression = program.scope().statements()[0].as_expression().unwrap();
    assert_eq!(expression.as_identifier().unwrap().name(), "var1");

    let (program, _) = parse_source("((5));");
    let program = program.unwrap();

    let expression = program.scope().statements()[0].as_expression().unwrap();
    assert_eq!(
        expression.as_literal().unwrap().as_integer().copied(),
        Some(5)
    );
}

#[test]
fn multiple_statements() {
    let (program, parser) = parse_source("a = 1;\nb;\nc = \"x\";");
    let program = program.unwrap();

    assert!(!parser.diagnostics().has_errors());

    let statements = program.scope().statements();
    assert_eq!(statements.len(), 3);
    assert!(statements[0].is_assignment());
    assert!(statements[1].is_expression());
    assert!(statements[2].is_assignment());
}

#[test]
fn empty_source_parses_to_an_empty_program() {
    let (program, parser) = parse_source("");
    let program = program.unwrap();

    assert!(!parser.diagnostics().has_errors());
    assert!(program.scope().statements().is_empty());
}

#[test]
fn braced_outer_scope() {
    let (program, parser) = parse_source("{ a = 1; }");
    let program = program.unwrap();

    assert!(!parser.diagnostics().has_errors());
    assert_eq!(program.scope().statements().len(), 1);
}

#[test]
fn parse_scope_with_required_braces() {
    let tokens = vec![
        token(TokenKind::LeftBrace, 0, 0),
        valued_token(TokenKind::Identifier, 0, 2, "a"),
        token(TokenKind::Semicolon, 0, 3),
        token(TokenKind::RightBrace, 0, 5),
    ];

    let mut parser = Parser::new(tokens);
    let scope = parser.parse_scope(true).unwrap();

    assert!(!parser.diagnostics().has_errors());
    assert_eq!(scope.statements().len(), 1);
}

#[test]
fn parse_scope_with_required_braces_missing_open() {
    let tokens = vec![
        valued_token(TokenKind::Identifier, 0, 0, "a"),
        token(TokenKind::Semicolon, 0, 1),
    ];

    let mut parser = Parser::new(tokens);

    assert!(parser.parse_scope(true).is_none());
    assert!(parser.diagnostics().has_errors());
}

#[test]
fn missing_semicolon_fails_the_parse() {
    let (program, parser) = parse_source("a = 1");

    assert!(program.is_none());
    assert!(parser.diagnostics().has_errors());
}

#[test]
fn statement_matching_no_alternative_reports_expected_statement() {
    let (program, parser) = parse_source(";");

    assert!(program.is_none());

    let diagnostics = parser.diagnostics().as_vec();
    assert!(diagnostics
        .iter()
        .any(|diagnostic| diagnostic.detail().as_deref() == Some("Expected statement")));
}

#[test]
fn integer_literal_out_of_range_fails_the_literal_production() {
    let (program, parser) = parse_source("a = 99999999999999999999;");

    assert!(program.is_none());

    let diagnostics = parser.diagnostics().as_vec();
    assert!(diagnostics
        .iter()
        .any(|diagnostic| diagnostic.detail().as_deref() == Some("Integer literal out of range")));
}

#[test]
fn diagnostics_accumulate_even_on_success() {
    // the literal alternative fails (and records) before the parenthesized alternative succeeds
    let (program, parser) = parse_source("(5);");

    assert!(program.is_some());
    assert!(parser.diagnostics().has_errors());
}

#[test]
fn missing_sentinels_are_reported_but_do_not_abort() {
    let tokens = vec![
        valued_token(TokenKind::Identifier, 0, 0, "a"),
        token(TokenKind::Semicolon, 0, 1),
    ];

    let mut parser = Parser::new(tokens);
    let program = parser.parse().unwrap();

    assert_eq!(program.scope().statements().len(), 1);

    let diagnostics = parser.diagnostics().as_vec();
    assert_eq!(diagnostics.len(), 2);

    assert_eq!(diagnostics[0].position(), Position::new(0, 0));
    assert_eq!(
        diagnostics[0].detail().as_deref(),
        Some("Expected token type START_OF_FILE, got IDENTIFIER")
    );

    assert_eq!(diagnostics[1].position(), Position::new(0, 1));
    assert_eq!(
        diagnostics[1].detail().as_deref(),
        Some("Expected token type END_OF_FILE, got end of file")
    );
}

#[test]
fn backtracking_retries_the_consumed_identifier_as_an_expression() {
    // `var1` is first consumed by the assignment alternative, which fails at `;` and must hand
    // the identifier token back for the expression alternative to succeed
    let (program, parser) = parse_source("var1;");
    let program = program.unwrap();

    assert!(!parser.diagnostics().has_errors());

    let identifier = program.scope().statements()[0]
        .as_expression()
        .unwrap()
        .as_identifier()
        .unwrap();

    assert_eq!(identifier.name(), "var1");
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]*".prop_filter("identifiers must not spell a reserved word", |text| {
        text.parse::<KeywordKind>().is_err() && text.as_str() != "true" && text.as_str() != "false"
    })
}

/// Represents a literal input rendered into the generated source text.
#[derive(Debug, Clone, PartialEq)]
enum LiteralInput {
    String(String),
    Integer(i64),
    Float(String),
    Boolean(bool),
}

impl Arbitrary for LiteralInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            "[a-zA-Z0-9 ,.!?_]*".prop_map(Self::String),
            (0..=i64::MAX).prop_map(Self::Integer),
            "[0-9]{1,9}\\.[0-9]{1,9}".prop_map(Self::Float),
            proptest::bool::ANY.prop_map(Self::Boolean),
        ]
        .boxed()
    }
}

impl Display for LiteralInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(body) => write!(f, "\"{body}\""),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(text) => f.write_str(text),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl Input<&super::expression::Literal> for &LiteralInput {
    fn assert(self, output: &super::expression::Literal) -> TestCaseResult {
        use super::expression::Literal;

        match (self, output) {
            (LiteralInput::String(input), Literal::String(output)) => {
                prop_assert_eq!(input, output);
                Ok(())
            }
            (LiteralInput::Integer(input), Literal::Integer(output)) => {
                prop_assert_eq!(input, output);
                Ok(())
            }
            (LiteralInput::Float(text), Literal::Float(output)) => {
                prop_assert_eq!(text.parse::<f64>().unwrap(), *output);
                Ok(())
            }
            (LiteralInput::Boolean(input), Literal::Boolean(output)) => {
                prop_assert_eq!(input, output);
                Ok(())
            }
            (input, output) => Err(TestCaseError::fail(format!(
                "expected {input:?}, found {output:?}",
            ))),
        }
    }
}

/// Represents an expression input rendered into the generated source text.
#[derive(Debug, Clone, PartialEq)]
enum ExpressionInput {
    Identifier(String),
    Literal(LiteralInput),
    Parenthesized(Box<ExpressionInput>),
}

impl ExpressionInput {
    fn has_parenthesized(&self) -> bool { matches!(self, Self::Parenthesized(_)) }
}

impl Arbitrary for ExpressionInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            identifier().prop_map(Self::Identifier),
            LiteralInput::arbitrary().prop_map(Self::Literal),
        ];

        leaf.prop_recursive(4, 16, 1, |inner| {
            inner.prop_map(|expression| Self::Parenthesized(Box::new(expression)))
        })
        .boxed()
    }
}

impl Display for ExpressionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::Literal(literal) => Display::fmt(literal, f),
            Self::Parenthesized(inner) => write!(f, "({inner})"),
        }
    }
}

impl Input<&Expression> for &ExpressionInput {
    fn assert(self, output: &Expression) -> TestCaseResult {
        match (self, output) {
            (ExpressionInput::Identifier(name), Expression::Identifier(identifier)) => {
                prop_assert_eq!(name, identifier.name());
                Ok(())
            }
            (ExpressionInput::Literal(input), Expression::Literal(literal)) => {
                input.assert(literal)
            }
            // a parenthesized expression parses to its inner expression
            (ExpressionInput::Parenthesized(inner), _) => inner.as_ref().assert(output),
            (input, output) => Err(TestCaseError::fail(format!(
                "expected {input:?}, found {output:?}",
            ))),
        }
    }
}

/// Represents a statement input rendered into the generated source text.
#[derive(Debug, Clone, PartialEq)]
enum StatementInput {
    Assignment {
        identifier: String,
        expression: ExpressionInput,
    },
    Expression(ExpressionInput),
}

impl StatementInput {
    fn has_parenthesized(&self) -> bool {
        match self {
            Self::Assignment { expression, .. } | Self::Expression(expression) => {
                expression.has_parenthesized()
            }
        }
    }
}

impl Arbitrary for StatementInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            (identifier(), ExpressionInput::arbitrary()).prop_map(|(identifier, expression)| {
                Self::Assignment {
                    identifier,
                    expression,
                }
            }),
            ExpressionInput::arbitrary().prop_map(Self::Expression),
        ]
        .boxed()
    }
}

impl Display for StatementInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment {
                identifier,
                expression,
            } => write!(f, "{identifier} = {expression}"),
            Self::Expression(expression) => Display::fmt(expression, f),
        }
    }
}

impl Input<&Statement> for &StatementInput {
    fn assert(self, output: &Statement) -> TestCaseResult {
        match (self, output) {
            (
                StatementInput::Assignment {
                    identifier,
                    expression,
                },
                Statement::Assignment(output),
            ) => {
                prop_assert_eq!(identifier, output.identifier().name());
                expression.assert(output.expression())
            }
            (StatementInput::Expression(input), Statement::Expression(output)) => {
                input.assert(output)
            }
            (input, output) => Err(TestCaseError::fail(format!(
                "expected {input:?}, found {output:?}",
            ))),
        }
    }
}

proptest! {
    #[test]
    fn program_round_trip(
        inputs in proptest::collection::vec(StatementInput::arbitrary(), 0..8)
    ) {
        let source = inputs
            .iter()
            .map(|statement| format!("{statement};"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut lexer = Lexer::new(&source);
        let tokens = lexer.tokenize();

        prop_assert!(!lexer.diagnostics().has_errors());

        let mut parser = Parser::new(tokens);

        let Some(program) = parser.parse() else {
            return Err(TestCaseError::fail(format!(
                "failed to parse the source code: {source}",
            )));
        };

        // only the parenthesized alternative records diagnostics on its way to success
        if !inputs.iter().any(StatementInput::has_parenthesized) {
            prop_assert!(!parser.diagnostics().has_errors());
        }

        (&inputs).assert(program.scope().statements())?;
    }
}
