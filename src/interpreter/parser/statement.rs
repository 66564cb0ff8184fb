use std::rc::Rc;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            core::{DeclaredClasses, ParseResult, parse_expression},
            utils::{expect_char, expect_identifier, expect_token, parse_comma_separated},
        },
        value::{
            class::{Class, Method},
            core::Value,
        },
    },
};

/// Parses a complete program into a single compound statement.
///
/// Statements are parsed until the end of input; classes declared along the
/// way become visible to every later statement, so instantiations resolve to
/// their concrete class while the tree is built.
///
/// # Parameters
/// - `lexer`: Token cursor positioned at the first token of the program.
///
/// # Returns
/// A [`Statement::Compound`] holding the program's top-level statements.
///
/// # Errors
/// Returns a [`ParseError`] describing the first syntactic problem found.
pub fn parse_program(lexer: &mut Lexer) -> ParseResult<Statement> {
    let mut classes = DeclaredClasses::new();
    let mut statements = Vec::new();
    loop {
        skip_newlines(lexer);
        if *lexer.current() == Token::Eof {
            break;
        }
        statements.push(parse_statement(lexer, &mut classes)?);
    }
    Ok(Statement::Compound { statements })
}

/// Consumes stray newlines between statements. The lexer never emits two in
/// a row, but a comment line following a dedent leaves one behind.
fn skip_newlines(lexer: &mut Lexer) {
    while *lexer.current() == Token::Newline {
        lexer.next();
    }
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a class definition,
/// - an `if`/`else` conditional,
/// - a `return` statement,
/// - a `print` statement,
/// - an assignment to a variable or a field,
/// - an expression used as a statement.
///
/// Simple statements consume their terminating newline; suite-bearing
/// statements end at their suite's dedent.
fn parse_statement(lexer: &mut Lexer, classes: &mut DeclaredClasses) -> ParseResult<Statement> {
    match lexer.current() {
        Token::Class => parse_class_definition(lexer, classes),
        Token::If => parse_if_else(lexer, classes),
        Token::Return => {
            let statement = parse_return(lexer, classes)?;
            expect_token(lexer, &Token::Newline)?;
            Ok(statement)
        },
        Token::Print => {
            let statement = parse_print(lexer, classes)?;
            expect_token(lexer, &Token::Newline)?;
            Ok(statement)
        },
        _ => {
            let statement = parse_assignment_or_expression(lexer, classes)?;
            expect_token(lexer, &Token::Newline)?;
            Ok(statement)
        },
    }
}

/// Grammar: `return := "return" [ expression ]`
///
/// A bare `return` carries the `None` value.
fn parse_return(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    lexer.next();
    let statement = if *lexer.current() == Token::Newline {
        Statement::Const { value: Value::None }
    } else {
        parse_expression(lexer, classes)?
    };
    Ok(Statement::Return { statement: Box::new(statement) })
}

/// Grammar: `print := "print" [ expression { "," expression } ]`
fn parse_print(lexer: &mut Lexer, classes: &DeclaredClasses) -> ParseResult<Statement> {
    lexer.next();
    let mut args = Vec::new();
    if *lexer.current() != Token::Newline {
        args.push(parse_expression(lexer, classes)?);
        while *lexer.current() == Token::Char(',') {
            lexer.next();
            args.push(parse_expression(lexer, classes)?);
        }
    }
    Ok(Statement::Print { args })
}

/// Parses an assignment statement or falls back to an expression statement.
///
/// An assignment target is a dotted identifier chain followed by `=`; the
/// chain is recognized by bounded look-ahead before anything is consumed. A
/// single identifier binds a variable in the closure, a longer chain writes a
/// field of the instance the leading chain resolves to.
fn parse_assignment_or_expression(lexer: &mut Lexer,
                                  classes: &mut DeclaredClasses)
                                  -> ParseResult<Statement> {
    if !is_assignment_target(lexer) {
        return parse_expression(lexer, classes);
    }

    let mut dotted_ids = vec![expect_identifier(lexer)?];
    while *lexer.current() == Token::Char('.') {
        lexer.next();
        dotted_ids.push(expect_identifier(lexer)?);
    }
    expect_char(lexer, '=')?;
    let rv = Box::new(parse_expression(lexer, classes)?);

    let Some(field_name) = dotted_ids.pop() else {
        unreachable!()
    };
    if dotted_ids.is_empty() {
        Ok(Statement::Assignment { var: field_name,
                                   rv })
    } else {
        Ok(Statement::FieldAssignment { object: Box::new(Statement::VariableValue { dotted_ids }),
                                        field_name,
                                        rv })
    }
}

/// Reports whether the cursor rests on `Id { "." Id } "="`.
fn is_assignment_target(lexer: &Lexer) -> bool {
    if !matches!(lexer.current(), Token::Id(_)) {
        return false;
    }
    let mut offset = 1;
    loop {
        match lexer.peek(offset) {
            Token::Char('=') => return true,
            Token::Char('.') => {
                if !matches!(lexer.peek(offset + 1), Token::Id(_)) {
                    return false;
                }
                offset += 2;
            },
            _ => return false,
        }
    }
}

/// Grammar: `if_else := "if" expression suite [ "else" suite ]`
fn parse_if_else(lexer: &mut Lexer, classes: &mut DeclaredClasses) -> ParseResult<Statement> {
    lexer.next();
    let condition = parse_expression(lexer, classes)?;
    let if_body = parse_suite(lexer, classes)?;
    skip_newlines(lexer);
    let else_body = if *lexer.current() == Token::Else {
        lexer.next();
        Some(Box::new(parse_suite(lexer, classes)?))
    } else {
        None
    };
    Ok(Statement::IfElse { condition: Box::new(condition),
                           if_body: Box::new(if_body),
                           else_body })
}

/// Grammar: `suite := ":" NEWLINE INDENT { statement } DEDENT`
fn parse_suite(lexer: &mut Lexer, classes: &mut DeclaredClasses) -> ParseResult<Statement> {
    expect_char(lexer, ':')?;
    expect_token(lexer, &Token::Newline)?;
    expect_token(lexer, &Token::Indent)?;
    let mut statements = Vec::new();
    loop {
        skip_newlines(lexer);
        if *lexer.current() == Token::Dedent {
            break;
        }
        if *lexer.current() == Token::Eof {
            return Err(ParseError::UnexpectedEndOfInput { line: lexer.line() });
        }
        statements.push(parse_statement(lexer, classes)?);
    }
    lexer.next();
    Ok(Statement::Compound { statements })
}

/// Grammar:
/// `class_def := "class" Id [ "(" Id ")" ] ":" NEWLINE INDENT { method } DEDENT`
///
/// The base class must already be declared; the freshly parsed class is
/// registered before the definition statement is returned, so following
/// statements can instantiate and inherit from it.
fn parse_class_definition(lexer: &mut Lexer,
                          classes: &mut DeclaredClasses)
                          -> ParseResult<Statement> {
    lexer.next();
    let name = expect_identifier(lexer)?;

    let parent = if *lexer.current() == Token::Char('(') {
        lexer.next();
        let parent_line = lexer.line();
        let parent_name = expect_identifier(lexer)?;
        expect_char(lexer, ')')?;
        match classes.get(&parent_name) {
            Some(parent) => Some(Rc::clone(parent)),
            None => {
                return Err(ParseError::UnknownClass { name: parent_name,
                                                      line: parent_line, });
            },
        }
    } else {
        None
    };

    expect_char(lexer, ':')?;
    expect_token(lexer, &Token::Newline)?;
    expect_token(lexer, &Token::Indent)?;
    let mut methods = Vec::new();
    loop {
        skip_newlines(lexer);
        if *lexer.current() != Token::Def {
            break;
        }
        methods.push(Rc::new(parse_method(lexer, classes)?));
    }
    expect_token(lexer, &Token::Dedent)?;

    let class = Rc::new(Class::new(name.clone(), methods, parent.as_ref()));
    classes.insert(name, Rc::clone(&class));
    Ok(Statement::ClassDefinition { class })
}

/// Grammar: `method := "def" Id "(" "self" { "," Id } ")" suite`
///
/// The mandatory `self` parameter is stripped from the stored formal
/// parameter list, and the suite is wrapped in a method body so that a
/// nested `return` resolves here.
fn parse_method(lexer: &mut Lexer, classes: &mut DeclaredClasses) -> ParseResult<Method> {
    lexer.next();
    let line = lexer.line();
    let name = expect_identifier(lexer)?;
    expect_char(lexer, '(')?;
    let mut params = parse_comma_separated(lexer, expect_identifier, ')')?;

    if params.first().map(String::as_str) != Some("self") {
        return Err(ParseError::MissingSelfParameter { method: name, line });
    }
    let formal_params = params.split_off(1);

    let body = parse_suite(lexer, classes)?;
    Ok(Method { name,
                formal_params,
                body: Statement::MethodBody { body: Box::new(body) } })
}
