use mython::{
    error::LexerError,
    interpreter::lexer::{Lexer, Token},
};

/// Drains the whole token buffer, including the final `Eof`.
fn tokens(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source).expect("source should tokenize");
    let mut all = vec![lexer.current().clone()];
    while *lexer.current() != Token::Eof {
        all.push(lexer.next().clone());
    }
    all
}

fn id(name: &str) -> Token {
    Token::Id(name.to_string())
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(tokens(""), vec![Token::Eof]);
}

#[test]
fn whitespace_and_comment_only_input_is_just_eof() {
    assert_eq!(tokens("  \n\n# only a comment\n"), vec![Token::Eof]);
    assert_eq!(tokens("# comment without newline"), vec![Token::Eof]);
}

#[test]
fn indentation_produces_layout_tokens() {
    assert_eq!(tokens("a = 1\n  b = 2\nc = 3\n"),
               vec![id("a"),
                    Token::Char('='),
                    Token::Number(1),
                    Token::Newline,
                    Token::Indent,
                    id("b"),
                    Token::Char('='),
                    Token::Number(2),
                    Token::Newline,
                    Token::Dedent,
                    id("c"),
                    Token::Char('='),
                    Token::Number(3),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn missing_trailing_newline_is_synthesized() {
    assert_eq!(tokens("x = 1"),
               vec![id("x"), Token::Char('='), Token::Number(1), Token::Newline, Token::Eof]);
}

#[test]
fn dedents_drain_at_end_of_input() {
    // Even without a trailing newline the open indentation closes before Eof.
    assert_eq!(tokens("if True:\n  x = 1"),
               vec![Token::If,
                    Token::True,
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    id("x"),
                    Token::Char('='),
                    Token::Number(1),
                    Token::Newline,
                    Token::Dedent,
                    Token::Eof]);
}

#[test]
fn nested_indentation_closes_level_by_level() {
    let stream = tokens("class A:\n  def f(self):\n    return 1\n");
    let indents = stream.iter().filter(|t| **t == Token::Indent).count();
    let dedents = stream.iter().filter(|t| **t == Token::Dedent).count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);
    assert_eq!(stream.last(), Some(&Token::Eof));
    assert_eq!(stream[stream.len() - 2], Token::Dedent);
}

#[test]
fn blank_and_comment_lines_do_not_stack_newlines() {
    let stream = tokens("x = 1\n\n# a comment\n\n\ny = 2\n");
    for pair in stream.windows(2) {
        assert!(!matches!(pair, [Token::Newline, Token::Newline]),
                "consecutive newlines in {stream:?}");
    }
    assert_eq!(stream,
               vec![id("x"),
                    Token::Char('='),
                    Token::Number(1),
                    Token::Newline,
                    id("y"),
                    Token::Char('='),
                    Token::Number(2),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn trailing_comments_are_ignored() {
    assert_eq!(tokens("x = 1  # set x\n"),
               vec![id("x"), Token::Char('='), Token::Number(1), Token::Newline, Token::Eof]);
}

#[test]
fn keywords_are_distinguished_from_identifiers() {
    assert_eq!(tokens("class def if else return print or and not None True False classy\n"),
               vec![Token::Class,
                    Token::Def,
                    Token::If,
                    Token::Else,
                    Token::Return,
                    Token::Print,
                    Token::Or,
                    Token::And,
                    Token::Not,
                    Token::None,
                    Token::True,
                    Token::False,
                    id("classy"),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn compound_operators_take_two_characters() {
    assert_eq!(tokens("a == b != c <= d >= e < f > g = h\n"),
               vec![id("a"),
                    Token::Eq,
                    id("b"),
                    Token::NotEq,
                    id("c"),
                    Token::LessOrEq,
                    id("d"),
                    Token::GreaterOrEq,
                    id("e"),
                    Token::Char('<'),
                    id("f"),
                    Token::Char('>'),
                    id("g"),
                    Token::Char('='),
                    id("h"),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn string_literals_decode_escapes() {
    assert_eq!(tokens("s = 'a\\nb\\tc\\'d\\\"e'\n"),
               vec![id("s"),
                    Token::Char('='),
                    Token::String("a\nb\tc'd\"e".to_string()),
                    Token::Newline,
                    Token::Eof]);
    assert_eq!(tokens("\"double\"\n"),
               vec![Token::String("double".to_string()), Token::Newline, Token::Eof]);
}

#[test]
fn quotes_nest_inside_the_other_quote_kind() {
    assert_eq!(tokens("'he said \"hi\"'\n"),
               vec![Token::String("he said \"hi\"".to_string()), Token::Newline, Token::Eof]);
}

#[test]
fn unterminated_string_is_an_error() {
    assert!(matches!(Lexer::new("s = 'abc"),
                     Err(LexerError::UnterminatedString { .. })));
}

#[test]
fn line_break_inside_string_is_an_error() {
    assert!(matches!(Lexer::new("s = 'ab\ncd'"),
                     Err(LexerError::StrayLineBreak { .. })));
}

#[test]
fn unknown_escape_is_an_error() {
    assert!(matches!(Lexer::new("s = 'a\\qb'"),
                     Err(LexerError::UnknownEscape { escape: 'q', .. })));
}

#[test]
fn odd_indentation_is_an_error() {
    assert!(matches!(Lexer::new("if True:\n   x = 1\n"),
                     Err(LexerError::OddIndent { count: 3, .. })));
}

#[test]
fn oversized_number_literal_is_an_error() {
    assert!(matches!(Lexer::new("99999999999999999999\n"),
                     Err(LexerError::LiteralTooLarge { .. })));
}

#[test]
fn cursor_is_sticky_at_eof() {
    let mut lexer = Lexer::new("x").expect("source should tokenize");
    assert_eq!(*lexer.current(), Token::Id("x".to_string()));
    assert_eq!(*lexer.current(), Token::Id("x".to_string()));
    assert_eq!(*lexer.next(), Token::Newline);
    assert_eq!(*lexer.next(), Token::Eof);
    assert_eq!(*lexer.next(), Token::Eof);
    assert_eq!(*lexer.next(), Token::Eof);
}

#[test]
fn tokens_carry_their_source_line() {
    let mut lexer = Lexer::new("x = 1\ny = 2\n").expect("source should tokenize");
    assert_eq!(lexer.line(), 1);
    lexer.next();
    lexer.next();
    lexer.next();
    assert_eq!(lexer.line(), 1); // the newline belongs to line 1
    lexer.next();
    assert_eq!(*lexer.current(), Token::Id("y".to_string()));
    assert_eq!(lexer.line(), 2);
}

#[test]
fn blank_lines_may_be_oddly_indented() {
    // A line holding only spaces is blank for layout purposes, so its
    // space count is never measured against the two-space rule.
    assert_eq!(tokens("x = 1\n   \ny = 2\n"),
               vec![id("x"),
                    Token::Char('='),
                    Token::Number(1),
                    Token::Newline,
                    id("y"),
                    Token::Char('='),
                    Token::Number(2),
                    Token::Newline,
                    Token::Eof]);
}
