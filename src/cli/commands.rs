use fintrack_core::TransactionService;
use fintrack_domain::{CurrencyCode, Displayable, PRESET_CATEGORIES};

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters::{format_money, format_signed, render_breakdown, render_transactions};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::errors::FinanceError;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an income or expense",
            "add <amount> <currency> <category> <income|expense> [YYYY-MM-DD]",
            cmd_add,
        ),
        CommandEntry::new(
            "edit",
            "Change the amount of a transaction",
            "edit <index> <amount>",
            cmd_edit,
        ),
        CommandEntry::new("remove", "Delete a transaction", "remove <index>", cmd_remove)
            .with_aliases(&["delete"]),
        CommandEntry::new(
            "list",
            "Show all transactions in the home currency",
            "list",
            cmd_list,
        ),
        CommandEntry::new(
            "balance",
            "Show the running balance in the home currency",
            "balance",
            cmd_balance,
        ),
        CommandEntry::new(
            "breakdown",
            "Show expenses grouped by category",
            "breakdown",
            cmd_breakdown,
        )
        .with_aliases(&["chart"]),
        CommandEntry::new(
            "base",
            "Show or change the home currency",
            "base [currency]",
            cmd_base,
        ),
        CommandEntry::new(
            "currencies",
            "List supported currencies",
            "currencies",
            cmd_currencies,
        ),
        CommandEntry::new(
            "categories",
            "List suggested categories",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new("version", "Show build information", "version", cmd_version),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit).with_aliases(&["quit"]),
    ]
}

fn usage_error(context: &ShellContext, command: &str) -> CommandError {
    let usage = context
        .registry()
        .get(command)
        .map(|entry| entry.usage)
        .unwrap_or(command);
    CommandError::InvalidArguments(format!("usage: {usage}"))
}

fn parse_index(raw: &str) -> Result<i64, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid index `{raw}`")))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount, currency, category, kind, rest @ ..] = args else {
        return Err(usage_error(context, "add"));
    };
    if rest.len() > 1 {
        return Err(usage_error(context, "add"));
    }
    let transaction =
        TransactionService::build(amount, currency, category, kind, rest.first().copied())
            .map_err(FinanceError::from)?;
    let label = transaction.display_label();
    let manager = context.manager_mut();
    manager.add_transaction(transaction)?;
    let index = manager.transactions().len() - 1;
    output::success(format!("Added #{index}: {label}"));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [index, amount] = args else {
        return Err(usage_error(context, "edit"));
    };
    let index = parse_index(index)?;
    let amount = TransactionService::parse_amount(amount).map_err(FinanceError::from)?;
    if context.manager_mut().edit_amount(index, amount)? {
        output::success(format!("Updated #{index}."));
    } else {
        output::warning(format!("No transaction #{index}; nothing changed."));
    }
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [index] = args else {
        return Err(usage_error(context, "remove"));
    };
    let index = parse_index(index)?;
    match context.manager_mut().delete_transaction(index) {
        Some(removed) => output::success(format!("Removed #{index}: {}", removed.display_label())),
        None => output::warning(format!("No transaction #{index}; nothing changed.")),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let manager = context.manager_mut();
    if manager.transactions().is_empty() {
        output::info("No transactions recorded.");
        return Ok(());
    }
    let base = manager.home_currency();
    let rows = manager.rows();
    output::section("Transactions");
    println!("{}", render_transactions(&rows, base));
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let manager = context.manager_mut();
    let base = manager.home_currency();
    let summary = manager.balance_summary();
    println!("Balance: {}", format_signed(summary.balance, base));
    if summary.unconverted > 0 {
        output::warning(format!(
            "{} transaction(s) could not be converted to {base} and count as zero.",
            summary.unconverted
        ));
    }
    Ok(())
}

fn cmd_breakdown(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let manager = context.manager_mut();
    let base = manager.home_currency();
    let shares = manager.expense_breakdown();
    if shares.is_empty() {
        output::info("No expenses.");
        return Ok(());
    }
    let total: f64 = shares.iter().map(|share| share.total).sum();
    output::section(format!("Expenses by category ({})", format_money(total, base)));
    println!("{}", render_breakdown(&shares, base));
    Ok(())
}

fn cmd_base(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::info(format!("Home currency: {}", context.manager().home_currency()));
            Ok(())
        }
        [code] => {
            let currency =
                TransactionService::parse_currency(code).map_err(FinanceError::from)?;
            context.manager_mut().set_home_currency(currency);
            output::success(format!("Home currency set to {currency}."));
            Ok(())
        }
        _ => Err(usage_error(context, "base")),
    }
}

fn cmd_currencies(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let home = context.manager().home_currency();
    for currency in CurrencyCode::ALL {
        let marker = if currency == home { "  (home)" } else { "" };
        println!("{:<4} {}{marker}", currency.as_str(), currency.symbol());
    }
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    println!("{}", PRESET_CATEGORIES.join(", "));
    output::hint("Any other non-empty label works as well.");
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    println!("{}", build_info::current().summary());
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let [name] = args {
        let Some(entry) = context.registry().get(&name.to_ascii_lowercase()) else {
            return Err(CommandError::UnknownCommand(name.to_string()));
        };
        println!("{}\n  usage: {}", entry.description, entry.usage);
        if !entry.aliases.is_empty() {
            println!("  aliases: {}", entry.aliases.join(", "));
        }
        return Ok(());
    }

    output::section("Commands");
    let entries = context.registry().list();
    let width = entries.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
    for entry in entries {
        println!("  {:<width$}  {}", entry.name, entry.description);
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
