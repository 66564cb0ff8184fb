use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{ComparisonOp, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::utils::{expect_char, expect_identifier, parse_comma_separated},
        value::{class::Class, core::Value},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The classes declared so far, visible to expression parsing so that
/// `Name(args)` can resolve to an instantiation of a concrete class.
pub(crate) type DeclaredClasses = HashMap<String, Rc<Class>>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := or_test`
///
/// # Parameters
/// - `lexer`: Token cursor positioned at the first token of the expression.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// The parsed expression node.
pub(crate) fn parse_expression(lexer: &mut Lexer, classes: &DeclaredClasses)
                               -> ParseResult<Statement> {
    parse_or_test(lexer, classes)
}

/// Grammar: `or_test := and_test { "or" and_test }`
fn parse_or_test(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    let mut lhs = parse_and_test(lexer, classes)?;
    while *lexer.current() == Token::Or {
        lexer.next();
        let rhs = parse_and_test(lexer, classes)?;
        lhs = Statement::Or { lhs: Box::new(lhs),
                              rhs: Box::new(rhs), };
    }
    Ok(lhs)
}

/// Grammar: `and_test := not_test { "and" not_test }`
fn parse_and_test(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    let mut lhs = parse_not_test(lexer, classes)?;
    while *lexer.current() == Token::And {
        lexer.next();
        let rhs = parse_not_test(lexer, classes)?;
        lhs = Statement::And { lhs: Box::new(lhs),
                               rhs: Box::new(rhs), };
    }
    Ok(lhs)
}

/// Grammar: `not_test := "not" not_test | comparison`
fn parse_not_test(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    if *lexer.current() == Token::Not {
        lexer.next();
        let argument = parse_not_test(lexer, classes)?;
        return Ok(Statement::Not { argument: Box::new(argument) });
    }
    parse_comparison(lexer, classes)
}

/// Grammar: `comparison := additive [ comp_op additive ]`
///
/// At most one comparison per level; comparisons do not chain.
fn parse_comparison(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    let lhs = parse_additive(lexer, classes)?;
    let op = match lexer.current() {
        Token::Eq => ComparisonOp::Equal,
        Token::NotEq => ComparisonOp::NotEqual,
        Token::Char('<') => ComparisonOp::Less,
        Token::Char('>') => ComparisonOp::Greater,
        Token::LessOrEq => ComparisonOp::LessOrEqual,
        Token::GreaterOrEq => ComparisonOp::GreaterOrEqual,
        _ => return Ok(lhs),
    };
    lexer.next();
    let rhs = parse_additive(lexer, classes)?;
    Ok(Statement::Comparison { op,
                               lhs: Box::new(lhs),
                               rhs: Box::new(rhs) })
}

/// Grammar: `additive := term { ("+" | "-") term }`
fn parse_additive(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    let mut lhs = parse_term(lexer, classes)?;
    loop {
        match lexer.current() {
            Token::Char('+') => {
                lexer.next();
                let rhs = parse_term(lexer, classes)?;
                lhs = Statement::Add { lhs: Box::new(lhs),
                                       rhs: Box::new(rhs), };
            },
            Token::Char('-') => {
                lexer.next();
                let rhs = parse_term(lexer, classes)?;
                lhs = Statement::Sub { lhs: Box::new(lhs),
                                       rhs: Box::new(rhs), };
            },
            _ => return Ok(lhs),
        }
    }
}

/// Grammar: `term := factor { ("*" | "/") factor }`
fn parse_term(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    let mut lhs = parse_factor(lexer, classes)?;
    loop {
        match lexer.current() {
            Token::Char('*') => {
                lexer.next();
                let rhs = parse_factor(lexer, classes)?;
                lhs = Statement::Mult { lhs: Box::new(lhs),
                                        rhs: Box::new(rhs), };
            },
            Token::Char('/') => {
                lexer.next();
                let rhs = parse_factor(lexer, classes)?;
                lhs = Statement::Div { lhs: Box::new(lhs),
                                       rhs: Box::new(rhs), };
            },
            _ => return Ok(lhs),
        }
    }
}

/// Grammar: `factor := "-" factor | primary`
///
/// Unary minus desugars to a subtraction from zero, keeping the node
/// inventory closed.
fn parse_factor(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    if *lexer.current() == Token::Char('-') {
        lexer.next();
        let operand = parse_factor(lexer, classes)?;
        return Ok(Statement::Sub { lhs: Box::new(Statement::Const { value: Value::Number(0) }),
                                   rhs: Box::new(operand), });
    }
    parse_primary(lexer, classes)
}

/// Parses a primary expression and any trailers attached to it.
///
/// Grammar:
/// `primary := literal | "(" expression ")" | callable { trailer }`
fn parse_primary(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    let line = lexer.line();
    let base = match lexer.current().clone() {
        Token::Number(n) => {
            lexer.next();
            Statement::Const { value: Value::Number(n) }
        },
        Token::String(s) => {
            lexer.next();
            Statement::Const { value: Value::String(s) }
        },
        Token::True => {
            lexer.next();
            Statement::Const { value: Value::Bool(true) }
        },
        Token::False => {
            lexer.next();
            Statement::Const { value: Value::Bool(false) }
        },
        Token::None => {
            lexer.next();
            Statement::Const { value: Value::None }
        },
        Token::Char('(') => {
            lexer.next();
            let inner = parse_expression(lexer, classes)?;
            expect_char(lexer, ')')?;
            inner
        },
        Token::Id(name) => {
            lexer.next();
            parse_callable(lexer, classes, name, line)?
        },
        token => {
            return Err(ParseError::UnexpectedToken { token:
                                                         format!("Expected an expression, found {token:?}"),
                                                     line });
        },
    };
    parse_trailers(lexer, classes, base)
}

/// Parses what follows a leading identifier: a `str(...)` stringification, an
/// instantiation of a declared class, or a plain variable reference.
fn parse_callable(lexer: &mut Lexer,
                  classes: &DeclaredClasses,
                  name: String,
                  line: usize)
                  -> ParseResult<Statement> {
    if *lexer.current() != Token::Char('(') {
        return Ok(Statement::VariableValue { dotted_ids: vec![name] });
    }
    lexer.next();

    if name == "str" {
        let argument = parse_expression(lexer, classes)?;
        expect_char(lexer, ')')?;
        return Ok(Statement::Stringify { argument: Box::new(argument) });
    }
    if let Some(class) = classes.get(&name) {
        let class = Rc::clone(class);
        let args = parse_comma_separated(lexer, |lexer| parse_expression(lexer, classes), ')')?;
        return Ok(Statement::NewInstance { class, args });
    }
    Err(ParseError::UnknownClass { name, line })
}

/// Parses the `.field` and `.method(args)` trailers of a primary.
///
/// Field reads extend a dotted variable chain; reading a field of anything
/// else has no tree representation and is rejected.
fn parse_trailers(lexer: &mut Lexer,
                  classes: &DeclaredClasses,
                  mut base: Statement)
                  -> ParseResult<Statement> {
    while *lexer.current() == Token::Char('.') {
        lexer.next();
        let line = lexer.line();
        let name = expect_identifier(lexer)?;
        if *lexer.current() == Token::Char('(') {
            lexer.next();
            let args = parse_comma_separated(lexer, |lexer| parse_expression(lexer, classes), ')')?;
            base = Statement::MethodCall { object: Box::new(base),
                                           method: name,
                                           args };
        } else if let Statement::VariableValue { dotted_ids } = &mut base {
            dotted_ids.push(name);
        } else {
            return Err(ParseError::InvalidFieldAccess { field: name, line });
        }
    }
    Ok(base)
}
