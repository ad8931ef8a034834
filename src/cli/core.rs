use std::io;

use dialoguer::Confirm;
use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::{
    cli::output,
    config::{Config, ConfigManager},
    core::{
        format::{format_amount, format_progress},
        services::{parse_amount, LedgerService, SummaryService},
    },
    errors::FinanceError,
    ledger::Ledger,
    simulation::{budget_delta, project_savings, EstimatedSavings},
    storage::JsonStorage,
};

/// Environment variable that switches the shell into non-interactive script mode.
pub const SCRIPT_ENV: &str = "FINANCE_CORE_CLI_SCRIPT";

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Command names with their usage line, in help order.
const COMMANDS: &[(&str, &str)] = &[
    ("user", "user <id>                               select the active user"),
    ("add-budget", "add-budget <name> <amount>              append a budget"),
    ("delete-budget", "delete-budget <index>                   remove a budget"),
    ("add-expense", "add-expense <name> <category> <amount>  append an expense dated now"),
    ("delete-expense", "delete-expense <index>                  remove an expense"),
    ("add-goal", "add-goal <name> <target>                append a savings goal"),
    ("delete-goal", "delete-goal <index>                     remove a goal"),
    ("list", "list                                    show budgets, expenses and goals"),
    ("overview", "overview                                total budgets vs. total expenses"),
    ("goals", "goals                                   progress toward each goal"),
    ("project", "project <principal> <monthly> <rate%> <years>  savings projection"),
    ("delta", "delta <income> <expense>                monthly savings or deficit"),
    ("logout", "logout                                  forget the active user"),
    ("version", "version                                 build information"),
    ("help", "help                                    list commands"),
    ("exit", "exit                                    leave the shell"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No active user. Use `user <id>` first.")]
    NoActiveUser,
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    Core(#[from] FinanceError),
}

pub type CommandResult = Result<LoopControl, CommandError>;

/// Shell state: the active user plus the services it drives.
pub struct ShellContext {
    mode: CliMode,
    service: LedgerService,
    config_manager: ConfigManager,
    config: Config,
    user: Option<String>,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let storage = JsonStorage::new(Some(config_manager.store_path(&config)));
        tracing::debug!(store = %storage.path().display(), "shell storage ready");
        Ok(Self {
            mode,
            service: LedgerService::new(Box::new(storage)),
            user: config.last_user.clone(),
            config_manager,
            config,
            running: true,
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _)| *name).collect()
    }

    pub fn prompt(&self) -> String {
        match &self.user {
            Some(user) => format!("finance({user})> "),
            None => "finance> ".into(),
        }
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        match command {
            "user" => self.cmd_user(args),
            "logout" => self.cmd_logout(),
            "add-budget" => {
                let [name, amount] = expect_args::<2>(command, args)?;
                let user = self.active_user()?;
                let ledger = self.service.add_budget(&user, name, parse_amount(amount)?)?;
                output::success(format!("Budget added ({} total).", ledger.budgets.len()));
                Ok(LoopControl::Continue)
            }
            "delete-budget" => {
                let [index] = expect_args::<1>(command, args)?;
                let user = self.active_user()?;
                let ledger = self.service.delete_budget(&user, parse_index(index)?)?;
                output::success(format!("{} budget(s) remaining.", ledger.budgets.len()));
                Ok(LoopControl::Continue)
            }
            "add-expense" => {
                let [name, category, amount] = expect_args::<3>(command, args)?;
                let user = self.active_user()?;
                let ledger =
                    self.service
                        .add_expense(&user, name, category, parse_amount(amount)?)?;
                output::success(format!("Expense added ({} total).", ledger.expenses.len()));
                Ok(LoopControl::Continue)
            }
            "delete-expense" => {
                let [index] = expect_args::<1>(command, args)?;
                let user = self.active_user()?;
                let ledger = self.service.delete_expense(&user, parse_index(index)?)?;
                output::success(format!("{} expense(s) remaining.", ledger.expenses.len()));
                Ok(LoopControl::Continue)
            }
            "add-goal" => {
                let [name, target] = expect_args::<2>(command, args)?;
                let user = self.active_user()?;
                let ledger = self.service.add_goal(&user, name, parse_amount(target)?)?;
                output::success(format!("Goal added ({} total).", ledger.goals.len()));
                Ok(LoopControl::Continue)
            }
            "delete-goal" => {
                let [index] = expect_args::<1>(command, args)?;
                let user = self.active_user()?;
                let ledger = self.service.delete_goal(&user, parse_index(index)?)?;
                output::success(format!("{} goal(s) remaining.", ledger.goals.len()));
                Ok(LoopControl::Continue)
            }
            "list" => {
                let ledger = self.current_ledger()?;
                self.print_ledger(&ledger);
                Ok(LoopControl::Continue)
            }
            "overview" => {
                let ledger = self.current_ledger()?;
                let overview = SummaryService::overview(&ledger);
                output::section("Overview");
                output::info(format!("Budgets:  {}", self.money(overview.total_budget)));
                output::info(format!("Expenses: {}", self.money(overview.total_expense)));
                Ok(LoopControl::Continue)
            }
            "goals" => {
                let ledger = self.current_ledger()?;
                output::section("Goal Progress");
                for row in SummaryService::goals_progress(&ledger) {
                    output::info(format!(
                        "{}: {} ({} of {})",
                        row.name,
                        format_progress(row.progress),
                        self.money(row.saved),
                        self.money(row.target)
                    ));
                }
                Ok(LoopControl::Continue)
            }
            "project" => {
                let [principal, monthly, rate, years] = expect_args::<4>(command, args)?;
                let balance = project_savings(
                    parse_amount(principal)?,
                    parse_amount(monthly)?,
                    parse_amount(rate)?,
                    parse_amount(years)?,
                )?;
                output::info(EstimatedSavings(balance).label(&self.config.currency_symbol));
                Ok(LoopControl::Continue)
            }
            "delta" => {
                let [income, expense] = expect_args::<2>(command, args)?;
                let delta = budget_delta(parse_amount(income)?, parse_amount(expense)?);
                let label = delta.label(&self.config.currency_symbol);
                if delta.is_deficit {
                    output::warning(label);
                } else {
                    output::success(label);
                }
                Ok(LoopControl::Continue)
            }
            "version" => {
                output::info(format!(
                    "finance_core {} ({} {}, {} build, {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("FINANCE_CORE_BUILD_HASH"),
                    env!("FINANCE_CORE_BUILD_STATUS"),
                    env!("FINANCE_CORE_BUILD_PROFILE"),
                    env!("FINANCE_CORE_BUILD_TIMESTAMP"),
                ));
                Ok(LoopControl::Continue)
            }
            "help" => {
                output::section("Commands");
                for (_, usage) in COMMANDS {
                    output::info(usage);
                }
                Ok(LoopControl::Continue)
            }
            "exit" | "quit" => Ok(LoopControl::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::new()
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::UnknownCommand(input) => {
                output::warning(format!(
                    "Unknown command `{}`. Type `help` to see available commands.",
                    input
                ));
                if let Some(suggestion) = suggest_command(&input) {
                    output::hint(format!("Did you mean `{}`?", suggestion));
                }
            }
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Type `help` for usage details.");
            }
            other => output::error(other),
        }
    }

    fn cmd_user(&mut self, args: &[&str]) -> CommandResult {
        let [user] = expect_args::<1>("user", args)?;
        let user = user.trim();
        if user.is_empty() {
            return Err(CommandError::InvalidArguments("user id must not be empty".into()));
        }
        self.user = Some(user.to_string());
        self.config.last_user = Some(user.to_string());
        self.config_manager.save(&self.config)?;
        output::success(format!("Active user: {}", user));
        Ok(LoopControl::Continue)
    }

    fn cmd_logout(&mut self) -> CommandResult {
        self.user = None;
        self.config.last_user = None;
        self.config_manager.save(&self.config)?;
        output::success("Logged out.");
        Ok(LoopControl::Continue)
    }

    fn active_user(&self) -> Result<String, CommandError> {
        self.user.clone().ok_or(CommandError::NoActiveUser)
    }

    fn current_ledger(&self) -> Result<Ledger, CommandError> {
        let user = self.active_user()?;
        Ok(self.service.ledger(&user)?)
    }

    fn money(&self, value: f64) -> String {
        format_amount(value, &self.config.currency_symbol)
    }

    fn print_ledger(&self, ledger: &Ledger) {
        output::section("Budgets");
        for (index, budget) in ledger.budgets.iter().enumerate() {
            output::info(format!("[{index}] {} {}", budget.name, self.money(budget.amount)));
        }
        output::section("Expenses");
        for (index, expense) in ledger.expenses.iter().enumerate() {
            output::info(format!(
                "[{index}] {} ({}) {} on {}",
                expense.name,
                expense.category,
                self.money(expense.amount),
                expense.date.format("%Y-%m-%d")
            ));
        }
        output::section("Goals");
        for (index, goal) in ledger.goals.iter().enumerate() {
            output::info(format!(
                "[{index}] {} {} {}",
                goal.name,
                self.money(goal.target),
                format_progress(SummaryService::goal_progress(ledger, goal))
            ));
        }
    }
}

/// Closest known command within a small edit distance.
pub(crate) fn suggest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|(name, _)| (levenshtein(name, input), *name))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

fn expect_args<'a, const N: usize>(
    command: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| {
        let usage = COMMANDS
            .iter()
            .find(|(name, _)| *name == command)
            .map(|(_, usage)| usage.split_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_else(|| command.to_string());
        CommandError::InvalidArguments(format!(
            "expected {} argument(s): {}",
            N, usage
        ))
    })
}

fn parse_index(input: &str) -> Result<usize, CommandError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid index `{}`", input)))
}
