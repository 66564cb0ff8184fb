use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing character.
///
/// This utility is shared by argument lists and parameter lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma to continue the list or the closing character to end it. An
/// immediately encountered closing character produces an empty list.
///
/// Grammar (simplified): `list := [ item { "," item } ] closing`
///
/// # Parameters
/// - `lexer`: Token cursor positioned at the first item or the closing
///   character.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The character that terminates the list, e.g. `)`.
///
/// # Returns
/// A vector of parsed items, with the closing character consumed.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    lexer: &mut Lexer,
    mut parse_item: impl FnMut(&mut Lexer) -> ParseResult<T>,
    closing: char)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if *lexer.current() == Token::Char(closing) {
        lexer.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(lexer)?);
        match lexer.current() {
            Token::Char(',') => {
                lexer.next();
            },
            Token::Char(c) if *c == closing => {
                lexer.next();
                return Ok(items);
            },
            token => {
                return Err(ParseError::UnexpectedToken { token:
                                                             format!("Expected ',' or '{closing}', found {token:?}"),
                                                         line:  lexer.line(), });
            },
        }
    }
}

/// Parses a plain identifier and returns its name.
///
/// The current token must be [`Token::Id`].
pub(in crate::interpreter::parser) fn expect_identifier(lexer: &mut Lexer) -> ParseResult<String> {
    match lexer.current().clone() {
        Token::Id(name) => {
            lexer.next();
            Ok(name)
        },
        token => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {token:?}"),
                                              line:  lexer.line(), })
        },
    }
}

/// Consumes the expected single-character token or fails.
pub(in crate::interpreter::parser) fn expect_char(lexer: &mut Lexer, expected: char)
                                                  -> ParseResult<()> {
    expect_token(lexer, &Token::Char(expected))
}

/// Consumes the expected token or fails.
pub(in crate::interpreter::parser) fn expect_token(lexer: &mut Lexer, expected: &Token)
                                                   -> ParseResult<()> {
    if lexer.current() == expected {
        lexer.next();
        Ok(())
    } else {
        Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {:?}",
                                                         lexer.current()),
                                          line:  lexer.line(), })
    }
}
