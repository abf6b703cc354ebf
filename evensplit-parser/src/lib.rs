#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_till, take_till1, take_while, take_while1},
    character::complete::{char, one_of},
    combinator::{eof, opt, peek, rest},
    multi::separated_list0,
    sequence::{delimited, preceded, terminated},
};

const KEYWORDS: [&str; 9] = [
    "members", "add", "balances", "expenses", "settle", "reset", "help", "quit", "exit",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    Members(Vec<&'a str>),
    /// The amount is kept as raw text; the ledger decides whether it is numeric.
    AddExpense {
        payer: &'a str,
        amount: &'a str,
        description: &'a str,
    },
    Balances,
    Expenses,
    Settle,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandWithLine<'a> {
    pub line: usize,
    pub command: Command<'a>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("The member list is empty.")]
    EmptyMemberList,
    #[error("Unknown command '{word}' at line {line}.")]
    UnknownCommand { word: String, line: usize },
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn sp(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn sp1(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

fn keyword<'a>(name: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input| terminated(tag_no_case(name), peek(alt((sp1, eof)))).parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

fn member_name(input: &str) -> IResult<&str, &str> {
    alt((quoted, word)).parse(input)
}

fn amount(input: &str) -> IResult<&str, &str> {
    preceded(opt(char('$')), word).parse(input)
}

fn is_separator(c: char) -> bool {
    c == ',' || c == '，'
}

fn member_list(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list0(one_of(",，"), take_till(is_separator))
        .map(|names: Vec<&str>| {
            names
                .into_iter()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect()
        })
        .parse(input)
}

fn members_command(input: &str) -> IResult<&str, Command<'_>> {
    (keyword("members"), sp, member_list)
        .map(|(_, _, names)| Command::Members(names))
        .parse(input)
}

// add {payer} {amount} {description...}
fn add_command(input: &str) -> IResult<&str, Command<'_>> {
    (keyword("add"), sp1, member_name, sp1, amount, rest)
        .map(|(_, _, payer, _, amount, description)| Command::AddExpense {
            payer,
            amount,
            description: description.trim(),
        })
        .parse(input)
}

fn command(input: &str) -> IResult<&str, Command<'_>> {
    alt((
        members_command,
        add_command,
        keyword("balances").map(|_| Command::Balances),
        keyword("expenses").map(|_| Command::Expenses),
        keyword("settle").map(|_| Command::Settle),
        keyword("reset").map(|_| Command::Reset),
        keyword("help").map(|_| Command::Help),
        alt((keyword("quit"), keyword("exit"))).map(|_| Command::Quit),
    ))
    .parse(input)
}

/// Splits a comma separated roster, trimming names and dropping empty entries.
pub fn parse_member_list(input: &str) -> Result<Vec<&str>, ParseError> {
    let names = match member_list(input) {
        Ok((_, names)) => names,
        Err(_) => Vec::new(),
    };
    if names.is_empty() {
        return Err(ParseError::EmptyMemberList);
    }
    Ok(names)
}

/// Parses a single line. Blank lines and `#` comments yield `None`.
pub fn parse_line(input: &str, line: usize) -> Result<Option<Command<'_>>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    match (command, sp).parse(trimmed) {
        Ok((rest, (command, _))) => {
            if !rest.is_empty() {
                return Err(ParseError::SyntaxError {
                    line,
                    detail: i18n::unparsed_detail(rest),
                });
            }
            if let Command::Members(names) = &command
                && names.is_empty()
            {
                return Err(ParseError::EmptyMemberList);
            }
            Ok(Some(command))
        }
        Err(_) => {
            let first = trimmed
                .split(char::is_whitespace)
                .next()
                .unwrap_or(trimmed);
            let lowered = first.to_lowercase();
            if KEYWORDS.contains(&lowered.as_str()) {
                Err(ParseError::SyntaxError {
                    line,
                    detail: i18n::usage(&lowered).to_string(),
                })
            } else {
                Err(ParseError::UnknownCommand {
                    word: first.to_string(),
                    line,
                })
            }
        }
    }
}

/// Parses an interactive command entered on its own.
pub fn parse_command(input: &str) -> Result<Option<Command<'_>>, ParseError> {
    parse_line(input, 1)
}

/// Parses a whole script, one command per line.
pub fn parse_script(input: &str) -> Result<Vec<CommandWithLine<'_>>, ParseError> {
    let mut commands = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if let Some(command) = parse_line(line, idx + 1)? {
            commands.push(CommandWithLine {
                line: idx + 1,
                command,
            });
        }
    }
    Ok(commands)
}
