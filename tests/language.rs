use std::fs;

use rlox::{
    diagnostics::Diagnostics,
    error::{LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{TokenKind, scan},
        parser::{core::parse_expression, statement::parse},
        printer::AstPrinter,
        value::Value,
    },
    run,
};
use walkdir::WalkDir;

fn assert_success(src: &str) {
    let mut diagnostics = Diagnostics::new();
    run(src, &mut diagnostics);
    assert!(!diagnostics.had_error() && !diagnostics.had_runtime_error(),
            "Script failed: {src}");
}

fn assert_failure(src: &str) {
    let mut diagnostics = Diagnostics::new();
    run(src, &mut diagnostics);
    assert!(diagnostics.had_error() || diagnostics.had_runtime_error(),
            "Script succeeded but was expected to fail: {src}");
}

fn eval(src: &str) -> Result<Value, RuntimeError> {
    let (tokens, errors) = scan(src);
    assert!(errors.is_empty(), "lex errors in {src}: {errors:?}");
    let expr = parse_expression(&mut tokens.iter().peekable()).expect("parse error");
    Interpreter::new().evaluate(&expr)
}

fn render(src: &str) -> String {
    let (tokens, _) = scan(src);
    let expr = parse_expression(&mut tokens.iter().peekable()).expect("parse error");
    AstPrinter::render(&expr)
}

#[test]
fn script_corpus_works() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "lox")
                                              })
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        assert_success(&source);
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn eof_token_is_present_exactly_once_and_last() {
    for src in ["", "1 + 2;", "// only a comment", "\"abc"] {
        let (tokens, _) = scan(src);
        let eof_count = tokens.iter()
                              .filter(|t| t.kind == TokenKind::Eof)
                              .count();
        assert_eq!(eof_count, 1, "source: {src:?}");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof, "source: {src:?}");
    }
}

#[test]
fn maximal_munch_on_two_character_operators() {
    let (tokens, errors) = scan("! != = == < <= > >=");
    assert!(errors.is_empty());

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(kinds,
               vec![TokenKind::Bang,
                    TokenKind::BangEqual,
                    TokenKind::Equal,
                    TokenKind::EqualEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Eof]);
}

#[test]
fn comments_and_whitespace_produce_no_tokens() {
    let (tokens, errors) = scan("// nothing to see here\n\t \r");
    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn slash_alone_is_a_token() {
    let (tokens, _) = scan("1 / 2");
    assert_eq!(tokens[1].kind, TokenKind::Slash);
}

#[test]
fn bare_dot_is_not_part_of_a_number() {
    let (tokens, _) = scan("5.");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(kinds, vec![TokenKind::Number(5.0), TokenKind::Dot, TokenKind::Eof]);

    let (tokens, _) = scan(".5");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(kinds, vec![TokenKind::Dot, TokenKind::Number(5.0), TokenKind::Eof]);
}

#[test]
fn keywords_beat_identifiers() {
    let (tokens, _) = scan("print printer");
    assert_eq!(tokens[0].kind, TokenKind::Print);
    assert_eq!(tokens[1].kind, TokenKind::Identifier("printer".to_string()));
}

#[test]
fn string_literals_keep_contents_and_count_lines() {
    let (tokens, errors) = scan("\"one\ntwo\" nil");
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Str("one\ntwo".to_string()));
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn unterminated_string_is_a_single_lex_error() {
    let (tokens, errors) = scan("\"abc");
    assert_eq!(errors, vec![LexError::UnterminatedString { line: 1 }]);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn unexpected_character_is_recoverable() {
    let (tokens, errors) = scan("1 @ 2");
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], LexError::UnexpectedCharacter { character, line: 1 }
                     if character == "@"));

    // Scanning continued past the bad character.
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(kinds,
               vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]);
}

#[test]
fn adjacent_unexpected_characters_each_report() {
    let (tokens, errors) = scan("@#1");
    assert_eq!(errors.len(), 2);
    assert!(errors.iter()
                  .all(|e| matches!(e, LexError::UnexpectedCharacter { line: 1, .. })));

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(kinds, vec![TokenKind::Number(1.0), TokenKind::Eof]);
}

#[test]
fn terminated_string_beats_unterminated_prefix() {
    let (tokens, errors) = scan("\"ok\" \"bad");
    assert_eq!(errors, vec![LexError::UnterminatedString { line: 1 }]);
    assert_eq!(tokens[0].kind, TokenKind::Str("ok".to_string()));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(render("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(render("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(render("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(render("8 / 4 / 2"), "(/ (/ 8 4) 2)");
}

#[test]
fn unary_operators_are_right_associative() {
    assert_eq!(render("!!true"), "(! (! true))");
    assert_eq!(render("--1"), "(- (- 1))");
}

#[test]
fn literals_render_in_display_form() {
    assert_eq!(render("nil"), "nil");
    assert_eq!(render("4.0"), "4");
    assert_eq!(render("4.5"), "4.5");
    assert_eq!(render("\"foo\""), "foo");
}

#[test]
fn truthiness_table() {
    assert_eq!(eval("!nil").unwrap(), Value::Bool(true));
    assert_eq!(eval("!false").unwrap(), Value::Bool(true));
    assert_eq!(eval("!0").unwrap(), Value::Bool(false));
    assert_eq!(eval("!\"\"").unwrap(), Value::Bool(false));
}

#[test]
fn arithmetic_and_comparison() {
    assert_eq!(eval("1 + 2 * 3").unwrap(), Value::Number(7.0));
    assert_eq!(eval("-(8 - 5)").unwrap(), Value::Number(-3.0));
    assert_eq!(eval("2 < 3").unwrap(), Value::Bool(true));
    assert_eq!(eval("2 >= 3").unwrap(), Value::Bool(false));
}

#[test]
fn equality_rules() {
    assert_eq!(eval("nil == nil").unwrap(), Value::Bool(true));
    assert_eq!(eval("nil == false").unwrap(), Value::Bool(false));
    assert_eq!(eval("1 == 1").unwrap(), Value::Bool(true));
    assert_eq!(eval("1 == \"1\"").unwrap(), Value::Bool(false));
    assert_eq!(eval("\"a\" == \"a\"").unwrap(), Value::Bool(true));
    assert_eq!(eval("1 != 2").unwrap(), Value::Bool(true));
}

#[test]
fn string_concatenation() {
    assert_eq!(eval("\"foo\" + \"bar\"").unwrap(), Value::Str("foobar".to_string()));
}

#[test]
fn division_by_zero_follows_ieee_semantics() {
    assert_eq!(eval("1 / 0").unwrap(), Value::Number(f64::INFINITY));
    assert_eq!(eval("-1 / 0").unwrap(), Value::Number(f64::NEG_INFINITY));
}

#[test]
fn unary_minus_requires_a_number() {
    let err = eval("-\"muffin\"").unwrap_err();
    assert!(matches!(err, RuntimeError::OperandMustBeNumber { .. }));
    assert!(err.to_string().contains("Operand must be a number."));
}

#[test]
fn arithmetic_requires_numbers() {
    let err = eval("\"a\" - 1").unwrap_err();
    assert!(matches!(err, RuntimeError::OperandsMustBeNumbers { .. }));
    assert!(err.to_string().contains("Operands must be numbers."));

    let err = eval("1 < \"a\"").unwrap_err();
    assert!(matches!(err, RuntimeError::OperandsMustBeNumbers { .. }));
}

#[test]
fn mixed_plus_is_an_error() {
    let err = eval("1 + \"a\"").unwrap_err();
    assert!(matches!(err, RuntimeError::OperandsMustBeNumbersOrStrings { .. }));
    assert!(err.to_string()
               .contains("Operands must be two numbers or two strings."));
}

#[test]
fn runtime_errors_carry_the_operator_line() {
    let err = eval("1 +\n\"a\"").unwrap_err();
    assert!(matches!(err, RuntimeError::OperandsMustBeNumbersOrStrings { line: 1, .. }));
}

#[test]
fn number_display_trims_trailing_zero() {
    assert_eq!(Value::Number(4.0).to_string(), "4");
    assert_eq!(Value::Number(4.5).to_string(), "4.5");
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
}

#[test]
fn statements_parse() {
    let (tokens, _) = scan("print \"hi\"; 1 + 2;");
    let (statements, errors) = parse(&tokens);
    assert!(errors.is_empty());
    assert_eq!(statements.len(), 2);
}

#[test]
fn missing_semicolon_is_reported_at_end() {
    let (tokens, _) = scan("print 1");
    let (_, errors) = parse(&tokens);
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], ParseError::ExpectedSemicolonAfterValue { location }
                     if location.lexeme.is_none()));
    assert!(errors[0].to_string().contains("at end"));
}

#[test]
fn token_stream_without_eof_reports_at_end_of_line_one() {
    use rlox::interpreter::lexer::Token;

    let tokens: Vec<Token> = Vec::new();
    let err = parse_expression(&mut tokens.iter().peekable()).unwrap_err();
    assert!(matches!(&err, ParseError::ExpectedExpression { location }
                     if location.line == 1 && location.lexeme.is_none()));
    assert!(err.to_string().starts_with("[line 1] Error at end"));
}

#[test]
fn missing_closing_paren_is_reported() {
    let (tokens, _) = scan("(1 + 2;");
    let (_, errors) = parse(&tokens);
    assert!(matches!(&errors[0], ParseError::ExpectedClosingParen { location }
                     if location.lexeme.as_deref() == Some(";")));
    assert!(errors[0].to_string().contains("Expect ')' after expression."));
}

#[test]
fn two_malformed_statements_report_two_errors() {
    let (tokens, _) = scan("1 +; 2 +; print 3;");
    let (statements, errors) = parse(&tokens);
    assert_eq!(errors.len(), 2);
    // The valid trailing statement still parses.
    assert_eq!(statements.len(), 1);
}

#[test]
fn reserved_expression_forms_are_unsupported_not_crashes() {
    use rlox::{ast::Expr, interpreter::lexer::Token};

    let name = Token { kind:   TokenKind::Identifier("x".to_string()),
                       lexeme: "x".to_string(),
                       line:   3, };
    let expr = Expr::Variable { name };

    assert_eq!(AstPrinter::render(&expr), "Variable");

    let err = Interpreter::new().evaluate(&expr).unwrap_err();
    assert_eq!(err,
               RuntimeError::UnsupportedExpression { variant: "Variable",
                                                     line:    3, });
}

#[test]
fn non_operator_tokens_in_hand_built_nodes_do_not_panic() {
    use rlox::{
        ast::{Expr, LiteralValue},
        interpreter::lexer::Token,
    };

    let op = Token { kind:   TokenKind::Semicolon,
                     lexeme: ";".to_string(),
                     line:   2, };
    let one = || Box::new(Expr::Literal { value: LiteralValue::Number(1.0) });

    let unary = Expr::Unary { op: op.clone(),
                              right: one() };
    assert_eq!(Interpreter::new().evaluate(&unary).unwrap_err(),
               RuntimeError::UnsupportedExpression { variant: "Unary",
                                                     line:    2, });

    let binary = Expr::Binary { left: one(),
                                op,
                                right: one() };
    assert_eq!(Interpreter::new().evaluate(&binary).unwrap_err(),
               RuntimeError::UnsupportedExpression { variant: "Binary",
                                                     line:    2, });
}

#[test]
fn full_pipeline_success_and_failure() {
    assert_success("print 1 + 2;");
    assert_success("print \"foo\" + \"bar\";");
    assert_failure("print 1 +;");
    assert_failure("print -\"muffin\";");
    assert_failure("\"abc");
}

#[test]
fn lex_or_parse_errors_suppress_evaluation() {
    // The first statement would raise a runtime error if it ran, but the
    // parse error in the second suppresses evaluation entirely.
    let mut diagnostics = Diagnostics::new();
    run("print -\"muffin\"; print 1 +;", &mut diagnostics);
    assert!(diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn diagnostics_reset_between_prompt_lines() {
    let mut diagnostics = Diagnostics::new();
    run("1 +;", &mut diagnostics);
    assert!(diagnostics.had_error());

    diagnostics.reset();
    run("print 1;", &mut diagnostics);
    assert!(!diagnostics.had_error() && !diagnostics.had_runtime_error());
}
