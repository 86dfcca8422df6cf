use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use tally::{
    error::{Error, LexError, NameError, ParseError},
    interpret,
    interpreter::lexer::{Lexer, Token},
    source::{Position, Source},
};

fn scope_of(src: &str) -> BTreeMap<String, f64> {
    interpret(src, None).unwrap_or_else(|e| panic!("Script failed:\n{e}"))
}

fn error_of(src: &str) -> Error {
    match interpret(src, None) {
        Ok(scope) => panic!("Script succeeded but was expected to fail: {scope:?}"),
        Err(e) => e,
    }
}

fn tokens_of(line: &str) -> Vec<Token> {
    let source = Source::new(line, None);
    let mut lexer = Lexer::new(&source);
    let mut tokens = Vec::new();
    loop {
        let (token, _) = lexer.next_token()
                              .unwrap_or_else(|e| panic!("Line failed to lex:\n{e}"));
        if token == Token::Eof {
            break;
        }
        tokens.push(token);
    }
    tokens
}

#[test]
fn lexer_produces_tokens_with_positions() {
    let source = Source::new("a = 1", None);
    let mut lexer = Lexer::new(&source);

    let (token, position) = lexer.next_token().unwrap();
    assert_eq!(token, Token::Identifier("a".to_string()));
    assert_eq!(position, Position { line: 1, column: 1 });

    let (token, position) = lexer.next_token().unwrap();
    assert_eq!(token, Token::Equals);
    assert_eq!(position, Position { line: 1, column: 3 });

    let (token, position) = lexer.next_token().unwrap();
    assert_eq!(token, Token::Number(1.0));
    assert_eq!(position, Position { line: 1, column: 5 });
}

#[test]
fn lexer_returns_eof_forever_at_end_of_input() {
    let source = Source::new("x", None);
    let mut lexer = Lexer::new(&source);

    let (token, _) = lexer.next_token().unwrap();
    assert_eq!(token, Token::Identifier("x".to_string()));

    for _ in 0..4 {
        let (token, _) = lexer.next_token().unwrap();
        assert_eq!(token, Token::Eof);
    }
}

#[test]
fn two_character_operators_win_over_their_prefixes() {
    assert_eq!(tokens_of("a ** b << c >> d * e"),
               vec![Token::Identifier("a".to_string()),
                    Token::DoubleStar,
                    Token::Identifier("b".to_string()),
                    Token::ShiftLeft,
                    Token::Identifier("c".to_string()),
                    Token::ShiftRight,
                    Token::Identifier("d".to_string()),
                    Token::Star,
                    Token::Identifier("e".to_string())]);
}

#[test]
fn numeric_literal_forms() {
    let scope = scope_of("{ a = .5; b = 5.; c = 1.25; d = 42; }");
    assert_eq!(scope["a"], 0.5);
    assert_eq!(scope["b"], 5.0);
    assert_eq!(scope["c"], 1.25);
    assert_eq!(scope["d"], 42.0);
}

#[test]
fn assignment_and_basic_arithmetic() {
    let scope = scope_of("{ a = 5 + 2 * 3; b = a - 1; }");
    assert_eq!(scope["a"], 11.0);
    assert_eq!(scope["b"], 10.0);
    assert_eq!(scope.len(), 2);
}

#[test]
fn assignment_overwrites_previous_binding() {
    let scope = scope_of("{ a = 1; a = a + 1; a = a * 10; }");
    assert_eq!(scope["a"], 20.0);
}

#[test]
fn power_is_left_associative() {
    let scope = scope_of("{ a = 5 ** 2 ** 2; b = 2 ** 3 ** 2; }");
    assert_eq!(scope["a"], 625.0);
    assert_eq!(scope["b"], 64.0);
}

#[test]
fn modulo_and_bitwise_operators() {
    let scope = scope_of("{ a = 10 % 3; b = 7 & 3; c = 5 | 2; d = 5 ^ 1; e = ~0; f = 1 << 4; \
                          g = 256 >> 4; }");
    assert_eq!(scope["a"], 1.0);
    assert_eq!(scope["b"], 3.0);
    assert_eq!(scope["c"], 7.0);
    assert_eq!(scope["d"], 4.0);
    assert_eq!(scope["e"], -1.0);
    assert_eq!(scope["f"], 16.0);
    assert_eq!(scope["g"], 16.0);
}

#[test]
fn bitwise_operators_truncate_fractional_operands() {
    let scope = scope_of("{ a = 7.9 % 3; b = 7.9 & 3.9; }");
    assert_eq!(scope["a"], 1.0);
    assert_eq!(scope["b"], 3.0);
}

#[test]
fn additive_and_bitwise_operators_share_one_tier() {
    // All seven lowest-tier operators fold left to right, so the shift
    // applies to the completed sum.
    let scope = scope_of("{ a = 2 + 3 << 1; }");
    assert_eq!(scope["a"], 10.0);
}

#[test]
fn parentheses_override_precedence() {
    let scope = scope_of("{ a = 2 * (3 + 4); }");
    assert_eq!(scope["a"], 14.0);
}

#[test]
fn unary_operators() {
    let scope = scope_of("{ a = -5 + +3; b = ~~7; c = 5 * -2; d = --4; }");
    assert_eq!(scope["a"], -2.0);
    assert_eq!(scope["b"], 7.0);
    assert_eq!(scope["c"], -10.0);
    assert_eq!(scope["d"], 4.0);
}

#[test]
fn division_produces_fractions() {
    let scope = scope_of("{ a = 7 / 2; }");
    assert_eq!(scope["a"], 3.5);
}

#[test]
fn division_by_zero_follows_float_semantics() {
    let scope = scope_of("{ a = 1 / 0; b = -1 / 0; c = 0 / 0; }");
    assert_eq!(scope["a"], f64::INFINITY);
    assert_eq!(scope["b"], f64::NEG_INFINITY);
    assert!(scope["c"].is_nan());
}

#[test]
fn integer_modulo_by_zero_yields_nan() {
    let scope = scope_of("{ a = 1 % 0; }");
    assert!(scope["a"].is_nan());
}

#[test]
fn shift_counts_are_masked() {
    let scope = scope_of("{ a = 1 << 64; b = 2 >> 64; }");
    assert_eq!(scope["a"], 1.0);
    assert_eq!(scope["b"], 2.0);
}

#[test]
fn empty_block_yields_empty_scope() {
    let scope = scope_of("{ }");
    assert!(scope.is_empty());
}

#[test]
fn final_semicolon_is_optional() {
    let scope = scope_of("{ a = 1 }");
    assert_eq!(scope["a"], 1.0);
}

#[test]
fn nested_blocks_need_no_separating_semicolon() {
    let scope = scope_of("{ { a = 1; } a = a + 1; }");
    assert_eq!(scope["a"], 2.0);
}

#[test]
fn nested_blocks_share_the_global_scope() {
    let scope = scope_of("{ { { x = 1; } } y = x + 1; }");
    assert_eq!(scope["x"], 1.0);
    assert_eq!(scope["y"], 2.0);
}

#[test]
fn undefined_variable_is_a_name_error() {
    match error_of("{ x = y; }") {
        Error::Name(NameError { name, location }) => {
            assert_eq!(name, "y");
            assert_eq!(location.position, Position { line: 1, column: 7 });
        },
        other => panic!("Expected a name error, got: {other:?}"),
    }
}

#[test]
fn missing_expression_reports_expected_versus_actual() {
    match error_of("{ a = ; }") {
        Error::Parse(ParseError::UnexpectedToken { expected,
                                                   found,
                                                   location, }) => {
            assert_eq!(expected, "ID");
            assert_eq!(found, "SEMICOLON");
            assert_eq!(location.position, Position { line: 1, column: 7 });
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}

#[test]
fn bare_expression_statement_is_a_void_expression() {
    match error_of("{ 1 + 2; }") {
        Error::Parse(ParseError::VoidExpression { found, location }) => {
            assert_eq!(found, "NUMBER");
            assert_eq!(location.position, Position { line: 1, column: 3 });
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}

#[test]
fn semicolon_after_nested_block_is_rejected() {
    match error_of("{ { a = 1; }; b = 2; }") {
        Error::Parse(ParseError::VoidExpression { found, .. }) => {
            assert_eq!(found, "SEMICOLON");
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}

#[test]
fn unbalanced_braces_are_detected_at_end_of_input() {
    match error_of("{ a = 1;") {
        Error::Parse(ParseError::VoidExpression { found, .. }) => {
            assert_eq!(found, "EOF");
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}

#[test]
fn trailing_tokens_after_program_are_rejected() {
    match error_of("{ a = 1; } b") {
        Error::Parse(ParseError::TrailingInput { found, location }) => {
            assert_eq!(found, "ID");
            assert_eq!(location.position, Position { line: 1, column: 12 });
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}

#[test]
fn unrecognized_character_renders_the_full_diagnostic() {
    let err = error_of("{ a = $; }");
    assert_eq!(err.to_string(),
               "STDIN:1:7: error: unrecognized character '$'\n{ a = $; }\n      ^");
}

#[test]
fn diagnostics_use_the_file_name_when_given() {
    let err = interpret("{ a = $; }", Some("calc.tly")).unwrap_err();
    assert!(err.to_string().starts_with("calc.tly:1:7: error:"),
            "unexpected rendering: {err}");
}

#[test]
fn lone_comparison_characters_are_unrecognized() {
    // Only the two-character shifts exist; a single `<` or `>` starts no
    // token.
    match error_of("{ a = 1 < 2; }") {
        Error::Lex(LexError::UnrecognizedCharacter { character, .. }) => {
            assert_eq!(character, '<');
        },
        other => panic!("Expected a lex error, got: {other:?}"),
    }
}

#[test]
fn empty_source_is_missing_its_block() {
    match error_of("") {
        Error::Parse(ParseError::UnexpectedToken { expected, found, .. }) => {
            assert_eq!(expected, "BLOCK_BEGIN");
            assert_eq!(found, "EOF");
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}

#[test]
fn malformed_number_is_a_lex_error() {
    match error_of("{ a = 1.2.3; }") {
        Error::Lex(LexError::MalformedNumber { literal, location }) => {
            assert_eq!(literal, "1.2.3");
            assert_eq!(location.position, Position { line: 1, column: 7 });
        },
        other => panic!("Expected a lex error, got: {other:?}"),
    }
}

#[test]
fn errors_report_the_line_they_occur_on() {
    let src = "{\n  a = 5 $ 3;\n}";
    match error_of(src) {
        Error::Lex(LexError::UnrecognizedCharacter { character, location }) => {
            assert_eq!(character, '$');
            assert_eq!(location.position, Position { line: 2, column: 9 });
            assert_eq!(location.source_line, "  a = 5 $ 3;");
        },
        other => panic!("Expected a lex error, got: {other:?}"),
    }
}

#[test]
fn rendered_diagnostic_line_relexes_to_the_same_tokens() {
    let src = "{\n  a = 5 +;\n}";
    let original_line = src.lines().nth(1).unwrap();

    match error_of(src) {
        Error::Parse(ParseError::UnexpectedToken { location, .. }) => {
            assert_eq!(location.source_line, original_line);
            assert_eq!(tokens_of(&location.source_line), tokens_of(original_line));
            assert_eq!(tokens_of(&location.source_line),
                       vec![Token::Identifier("a".to_string()),
                            Token::Equals,
                            Token::Number(5.0),
                            Token::Plus,
                            Token::Semicolon]);
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}
