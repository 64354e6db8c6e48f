//! Line parser for command scripts.
//!
//! A script is a sequence of lines. Each line holds at most one command
//! followed by its arguments, separated by spaces or tabs. `#` starts a
//! comment that runs to the end of the line.
//!
//! ```text
//! variant dual
//! create 1 2 3 4 5        # or: create | create random [N]
//! insert 1 9
//! search 5
//! delete 2
//! modify 1 42
//! clear
//! ```
//!
//! The parser recovers at line boundaries: a bad line produces one
//! diagnostic and parsing resumes on the next line.

use winnow::{
    Parser as _,
    combinator::{alt, eof, not, opt, peek, preceded, repeat, terminated},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, one_of, take_till, take_while},
};

use linkviz_core::{control::ControlEvent, list::ListVariant};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::{Span, Spanned},
};

/// Error details attached to winnow errors via context.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScriptDiagnostic {
    code: ErrorCode,
    message: String,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<ScriptDiagnostic>>;

const COMMANDS_HELP: &str =
    "commands are `variant`, `create`, `insert`, `search`, `delete`, `modify` and `clear`";

/// A parsed command plus the arguments later checks need to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Statement {
    pub event: Spanned<ControlEvent>,
    /// Arguments that become node values.
    pub values: Vec<Spanned<i64>>,
    /// The `N` of `create random N`.
    pub length: Option<Spanned<i64>>,
}

impl Statement {
    fn new(event: ControlEvent, span: Span) -> Self {
        Self {
            event: Spanned::new(event, span),
            values: Vec::new(),
            length: None,
        }
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && c != '#'
}

fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn fail<O>(input: &Input<'_>, diagnostic: ScriptDiagnostic) -> IResult<O> {
    Err(ErrMode::Cut(ContextError::new().add_context(
        input,
        &input.checkpoint(),
        diagnostic,
    )))
}

/// Parse optional spaces and tabs
fn inline_space<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(0.., is_inline_space).parse_next(input)
}

/// Parse a run of characters up to whitespace or a comment
fn word<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., is_word_char).parse_next(input)
}

/// Parse the next space-separated word on the line, with its span
fn next_word<'a>(input: &mut Input<'a>) -> IResult<(&'a str, std::ops::Range<usize>)> {
    preceded(take_while(1.., is_inline_space), word.with_span()).parse_next(input)
}

/// Parse a comment starting with '#'
fn comment<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded('#', take_till(0.., '\n')).parse_next(input)
}

/// Parse trailing space and comment, then the newline or end of input
fn line_end(input: &mut Input<'_>) -> IResult<()> {
    (inline_space, opt(comment), alt(('\n'.void(), eof.void())))
        .void()
        .parse_next(input)
}

/// Parse one integer argument.
///
/// Backtracks if the line has no further word; a word that is not an
/// integer is a hard error.
fn integer(input: &mut Input<'_>) -> IResult<Spanned<i64>> {
    let (text, range) = next_word(input)?;
    match text.parse::<i64>() {
        Ok(value) => Ok(Spanned::new(value, Span::new(range))),
        Err(_) => fail(
            input,
            ScriptDiagnostic {
                code: ErrorCode::E101,
                message: format!("`{text}` is not an integer"),
                help: Some("arguments are whole numbers such as `9` or `-3`"),
                start: range.start,
            },
        ),
    }
}

/// Parse the `random` keyword of `create random`
fn random_keyword(input: &mut Input<'_>) -> IResult<()> {
    preceded(
        take_while(1.., is_inline_space),
        terminated(literal("random"), peek(not(one_of(is_word_char)))),
    )
    .void()
    .parse_next(input)
}

fn variant_args(input: &mut Input<'_>) -> IResult<ListVariant> {
    let Some((name, range)) = opt(next_word).parse_next(input)? else {
        let start = input.current_token_start();
        return fail(
            input,
            ScriptDiagnostic {
                code: ErrorCode::E103,
                message: "`variant` needs a list variant".to_string(),
                help: Some("choose `single`, `dual` or `circular`"),
                start,
            },
        );
    };
    match name.parse::<ListVariant>() {
        Ok(variant) => Ok(variant),
        Err(_) => fail(
            input,
            ScriptDiagnostic {
                code: ErrorCode::E102,
                message: format!("unknown list variant `{name}`"),
                help: Some("choose `single`, `dual` or `circular`"),
                start: range.start,
            },
        ),
    }
}

/// Parse a command and its arguments, stopping before any trailing text.
fn command(input: &mut Input<'_>) -> IResult<Statement> {
    let (keyword, keyword_range) = word.with_span().parse_next(input)?;
    let start = keyword_range.start;

    let statement = match keyword {
        "variant" => {
            let variant = variant_args(input)?;
            Statement::new(ControlEvent::SelectVariant(variant), Span::default())
        }
        "create" => {
            if opt(random_keyword).parse_next(input)?.is_some() {
                let length = opt(integer).parse_next(input)?;
                let mut statement = Statement::new(
                    ControlEvent::Create {
                        length: length.as_ref().map(|l| *l.inner()),
                        random: true,
                        values: Vec::new(),
                    },
                    Span::default(),
                );
                statement.length = length;
                statement
            } else {
                let values: Vec<Spanned<i64>> = repeat(0.., integer).parse_next(input)?;
                let mut statement = Statement::new(
                    ControlEvent::Create {
                        length: None,
                        random: false,
                        values: values.iter().map(|v| *v.inner()).collect(),
                    },
                    Span::default(),
                );
                statement.values = values;
                statement
            }
        }
        "insert" | "modify" => {
            let index = opt(integer).parse_next(input)?;
            let value = match index {
                Some(_) => opt(integer).parse_next(input)?,
                None => None,
            };
            let index_value = index.map(Spanned::into_inner);
            let event = if keyword == "insert" {
                ControlEvent::Insert {
                    index: index_value,
                    value: value.as_ref().map(|v| *v.inner()),
                }
            } else {
                ControlEvent::Modify {
                    index: index_value,
                    value: value.as_ref().map(|v| *v.inner()),
                }
            };
            let mut statement = Statement::new(event, Span::default());
            statement.values.extend(value);
            statement
        }
        "search" => {
            let value = opt(integer).parse_next(input)?;
            let mut statement = Statement::new(
                ControlEvent::Search {
                    value: value.as_ref().map(|v| *v.inner()),
                },
                Span::default(),
            );
            statement.values.extend(value);
            statement
        }
        "delete" => {
            let index = opt(integer).parse_next(input)?;
            Statement::new(
                ControlEvent::Delete {
                    index: index.map(Spanned::into_inner),
                },
                Span::default(),
            )
        }
        "clear" => Statement::new(ControlEvent::Clear, Span::default()),
        _ => {
            return fail(
                input,
                ScriptDiagnostic {
                    code: ErrorCode::E100,
                    message: format!("unknown command `{keyword}`"),
                    help: Some(COMMANDS_HELP),
                    start,
                },
            );
        }
    };

    let end = input.current_token_start();
    let Statement {
        event,
        values,
        length,
    } = statement;
    Ok(Statement {
        event: Spanned::new(event.into_inner(), Span::new(start..end)),
        values,
        length,
    })
}

/// Parse one line: an optional command, then the end of the line.
fn line(input: &mut Input<'_>) -> IResult<Option<Statement>> {
    inline_space.parse_next(input)?;
    let statement = opt(command).parse_next(input)?;

    let checkpoint = input.checkpoint();
    if line_end.parse_next(input).is_ok() {
        return Ok(statement);
    }
    input.reset(&checkpoint);

    inline_space.parse_next(input)?;
    let start = input.current_token_start();
    let extra = take_till(1.., |c: char| c.is_whitespace() || c == '#').parse_next(input)?;
    let diagnostic = match &statement {
        Some(statement) => ScriptDiagnostic {
            code: ErrorCode::E104,
            message: format!(
                "unexpected argument `{extra}` for `{}`",
                statement.event.inner().name()
            ),
            help: Some("remove the extra argument"),
            start,
        },
        None => ScriptDiagnostic {
            code: ErrorCode::E100,
            message: format!("expected a command, found `{extra}`"),
            help: Some(COMMANDS_HELP),
            start,
        },
    };
    fail(input, diagnostic)
}

/// Skip the rest of the current line, newline included
fn skip_line(input: &mut Input<'_>) -> IResult<()> {
    (take_till(0.., '\n'), opt('\n')).void().parse_next(input)
}

/// Line parser that accumulates statements and diagnostics.
struct ScriptParser {
    statements: Vec<Statement>,
}

impl ScriptParser {
    fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    fn parse(&mut self, mut input: Input<'_>, diagnostics: &mut DiagnosticCollector) {
        while !input.is_empty() {
            match line(&mut input) {
                Ok(Some(statement)) => self.statements.push(statement),
                Ok(None) => {}
                Err(e) => {
                    let error_pos = input.current_token_start();
                    diagnostics.emit(Self::convert_err_mode(e, error_pos));
                    if skip_line(&mut input).is_err() {
                        break;
                    }
                }
            }
        }
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Falls back to E100 when the error carries no context.
    fn convert_err_mode(err: ErrMode<ContextError<ScriptDiagnostic>>, error_pos: usize) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(ScriptDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = Span::new(*start..error_pos);
            let mut diag = Diagnostic::error(message.clone())
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = Span::new(error_pos..error_pos.saturating_add(1));
        Diagnostic::error("unrecognized input")
            .with_code(ErrorCode::E100)
            .with_label(span, ErrorCode::E100.description())
            .with_help(COMMANDS_HELP)
    }
}

/// Parse every line of `source`, reporting bad lines to `diagnostics`.
///
/// Statements from good lines are returned even when other lines fail.
pub(crate) fn parse_lines(source: &str, diagnostics: &mut DiagnosticCollector) -> Vec<Statement> {
    let mut parser = ScriptParser::new();
    parser.parse(LocatingSlice::new(source), diagnostics);
    parser.statements
}
