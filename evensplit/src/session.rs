use crate::{CliResult, bootstrap::AppConfig};
use evensplit_application::{Ledger, LedgerError};
use evensplit_i18n as i18n;
use evensplit_parser::{Command, CommandWithLine, parse_command, parse_member_list, parse_script};
use evensplit_presentation::{
    BalancesPresenter, ExpensesPresenter, SettlementPresenter, format_ledger_error,
    format_parse_error,
};
use std::{
    borrow::Cow,
    io::{self, Write},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("members are already fixed for this session")]
    MembersAlreadySet,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A ledger plus the rendering settings used to answer commands.
pub struct Session {
    ledger: Ledger,
    currency: String,
}

impl Session {
    pub fn new(ledger: Ledger, currency: impl Into<String>) -> Self {
        Self {
            ledger,
            currency: currency.into(),
        }
    }

    pub fn execute<W: Write>(
        &mut self,
        command: &Command<'_>,
        out: &mut W,
    ) -> Result<Flow, SessionError> {
        match command {
            Command::Members(_) => return Err(SessionError::MembersAlreadySet),
            Command::AddExpense {
                payer,
                amount,
                description,
            } => {
                self.ledger.add_expense_text(payer, amount, *description)?;
                writeln!(out, "{}", i18n::EXPENSE_ADDED)?;
                self.write_balances(out)?;
            }
            Command::Balances => self.write_balances(out)?,
            Command::Expenses => write!(
                out,
                "{}",
                ExpensesPresenter::render_with_currency(self.ledger.expenses(), &self.currency)
            )?,
            Command::Settle => {
                let result = self.ledger.settle();
                write!(
                    out,
                    "{}",
                    SettlementPresenter::render_with_currency(&result.transfers, &self.currency)
                )?;
            }
            Command::Reset => {
                self.ledger.reset();
                writeln!(out, "{}", i18n::LEDGER_RESET)?;
            }
            Command::Help => writeln!(out, "{}", i18n::HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_balances<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(
            out,
            "{}",
            BalancesPresenter::render_with_currency(&self.ledger.balances(), &self.currency)
        )
    }
}

fn format_session_error(error: &SessionError) -> String {
    match error {
        SessionError::Ledger(err) => format_ledger_error(err),
        SessionError::MembersAlreadySet => i18n::MEMBERS_ALREADY_SET.to_string(),
        SessionError::Io(err) => err.to_string(),
    }
}

fn io_error(err: io::Error) -> Cow<'static, str> {
    format!("Failed to access the terminal: {err}").into()
}

fn ledger_from_roster(roster: &str) -> CliResult<Ledger> {
    let names = parse_member_list(roster).map_err(|_| Cow::Borrowed(i18n::NO_MEMBERS_ENTERED))?;
    Ledger::new(names).map_err(|err| format_ledger_error(&err).into())
}

/// Prompts for the roster unless it is configured, then answers commands
/// line by line until `quit` or end of input.
pub fn run_interactive<I, W>(mut lines: I, out: &mut W, config: &AppConfig) -> CliResult<()>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let ledger = match config.members.as_deref() {
        Some(roster) => ledger_from_roster(roster)?,
        None => {
            writeln!(out, "{}", i18n::MEMBERS_PROMPT).map_err(io_error)?;
            out.flush().map_err(io_error)?;
            let roster = lines.next().transpose().map_err(io_error)?.unwrap_or_default();
            ledger_from_roster(&roster)?
        }
    };

    tracing::info!(member_count = ledger.members().len(), "Session started");
    let mut session = Session::new(ledger, config.currency.as_str());

    loop {
        write!(out, "> ").map_err(io_error)?;
        out.flush().map_err(io_error)?;

        let Some(line) = lines.next().transpose().map_err(io_error)? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{}", format_parse_error(&err)).map_err(io_error)?;
                continue;
            }
        };

        match session.execute(&command, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(SessionError::Io(err)) => return Err(io_error(err)),
            Err(err) => {
                writeln!(out, "{}", format_session_error(&err)).map_err(io_error)?;
            }
        }
    }

    Ok(())
}

/// Runs a script whose first command is `members`, unless a roster is
/// configured. Prints the settlement at the end if the script never asked
/// for it.
pub fn run_script<W: Write>(source: &str, out: &mut W, config: &AppConfig) -> CliResult<()> {
    let commands = parse_script(source).map_err(|err| format_parse_error(&err))?;

    let (ledger, body) = match commands.split_first() {
        Some((
            CommandWithLine {
                command: Command::Members(names),
                ..
            },
            rest,
        )) => (
            Ledger::new(names.iter().copied()).map_err(|err| format_ledger_error(&err))?,
            rest,
        ),
        _ => match config.members.as_deref() {
            Some(roster) => (ledger_from_roster(roster)?, commands.as_slice()),
            None => return Err("Script must start with a `members` line".into()),
        },
    };

    let mut session = Session::new(ledger, config.currency.as_str());
    let mut settled = false;

    for CommandWithLine { line, command } in body {
        match session.execute(command, out) {
            Ok(Flow::Continue) => settled |= matches!(command, Command::Settle),
            Ok(Flow::Quit) => break,
            Err(err) => {
                tracing::warn!(line, error = %err, "Script command failed");
                return Err(format!("line {line}: {}", format_session_error(&err)).into());
            }
        }
    }

    if !settled {
        session
            .execute(&Command::Settle, out)
            .map_err(|err| format_session_error(&err))?;
    }

    Ok(())
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::{BufRead, Cursor};

    #[fixture]
    fn config() -> AppConfig {
        AppConfig::default()
    }

    fn interactive(input: &str, config: &AppConfig) -> (CliResult<()>, String) {
        let mut out = Vec::new();
        let result = run_interactive(Cursor::new(input).lines(), &mut out, config);
        (result, String::from_utf8(out).expect("utf8"))
    }

    fn script(source: &str, config: &AppConfig) -> (CliResult<()>, String) {
        let mut out = Vec::new();
        let result = run_script(source, &mut out, config);
        (result, String::from_utf8(out).expect("utf8"))
    }

    #[rstest]
    fn interactive_session_settles_after_expense(config: AppConfig) {
        let (result, output) =
            interactive("Alice, Bob, Carol\nadd Alice 30 dinner\nsettle\nquit\n", &config);

        assert!(result.is_ok());
        assert!(output.starts_with("Enter the names of group members separated by commas:"));
        assert!(output.contains("Expense added successfully!"));
        assert!(output.contains("Alice should receive: $20.00"));
        assert!(output.contains("Bob pays Alice: $10.00"));
        assert!(output.contains("Carol pays Alice: $10.00"));
    }

    #[rstest]
    fn interactive_session_reports_errors_and_continues(config: AppConfig) {
        let (result, output) = interactive(
            "Alice, Bob\nadd Alice ten\nadd Dave 5\nfrobnicate\nmembers Eve\nsettle\n",
            &config,
        );

        assert!(result.is_ok());
        assert!(output.contains("Please enter a valid numeric amount."));
        assert!(output.contains("'Dave' is not a member of this group"));
        assert!(output.contains("Unknown command 'frobnicate'"));
        assert!(output.contains("Members are already fixed for this session."));
        assert!(output.contains("Everyone is settled up!"));
    }

    #[rstest]
    #[case::empty_input("")]
    #[case::blank_roster("  ,  \n")]
    fn interactive_session_requires_members(config: AppConfig, #[case] input: &str) {
        let (result, _) = interactive(input, &config);

        assert_eq!(result, Err(Cow::Borrowed("No members entered. Exiting.")));
    }

    #[test]
    fn configured_roster_skips_prompt() {
        let config = AppConfig {
            members: Some("Alice, Bob".to_string()),
            currency: "€".to_string(),
        };

        let (result, output) = interactive("add Bob 8\nbalances\n", &config);

        assert!(result.is_ok());
        assert!(!output.contains("Enter the names"));
        assert!(output.contains("Bob should receive: €4.00"));
        assert!(output.contains("Alice owes: €4.00"));
    }

    #[rstest]
    fn script_runs_commands_in_order(config: AppConfig) {
        let source = "members Alice, Bob, Carol\nadd Alice 30\nexpenses\nsettle\n";

        let (result, output) = script(source, &config);

        assert!(result.is_ok());
        assert!(output.contains("1. Alice paid $30.00"));
        assert!(output.ends_with("Bob pays Alice: $10.00\nCarol pays Alice: $10.00\n"));
    }

    #[rstest]
    fn script_without_settle_prints_settlement(config: AppConfig) {
        let (result, output) = script("members A, B\nadd A 10\n", &config);

        assert!(result.is_ok());
        assert!(output.ends_with("B pays A: $5.00\n"));
    }

    #[rstest]
    fn script_stops_at_failing_line(config: AppConfig) {
        let (result, _) = script("members A, B\nadd A 10\nadd C 4\n", &config);

        assert_eq!(
            result,
            Err(Cow::Owned(
                "line 3: 'C' is not a member of this group".to_string()
            ))
        );
    }

    #[rstest]
    fn script_requires_members(config: AppConfig) {
        let (result, _) = script("add A 10\n", &config);

        assert!(result.is_err());
    }

    #[rstest]
    fn reset_clears_state(config: AppConfig) {
        let (result, output) = script("members A, B\nadd A 10\nreset\nsettle\n", &config);

        assert!(result.is_ok());
        assert!(output.contains("Expenses and balances have been cleared."));
        assert!(output.ends_with("Everyone is settled up!\n"));
    }
}
