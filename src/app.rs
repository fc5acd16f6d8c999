use std::io::{self, BufRead, IsTerminal, Write};

use crate::cli::{Cli, Commands};
use crate::controller::{ConvertOutcome, Controller, UnitSide};
use crate::core::{Category, Converter, RateTable, UnitCatalog};
use crate::error::AppError;
use crate::history::{HistoryEntry, HistoryLog};
use crate::output::{
    output_categories_json, output_conversion_json, output_history_json, output_rates_json,
    output_units_json, render_categories_table, render_history, render_rates_table,
    render_units_table,
};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) catalog: &'a UnitCatalog,
    pub(crate) rates: &'a RateTable,
    pub(crate) history: &'a HistoryLog,
}

impl CommandContext<'_> {
    fn converter(&self) -> Converter<'_> {
        Converter::new(self.catalog, self.rates)
    }
}

/// Dispatch the parsed command. The form is the default.
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        None | Some(Commands::Form) => handle_form(ctx),
        Some(Commands::Categories) => {
            handle_categories(ctx);
            Ok(())
        }
        Some(Commands::Units { category }) => handle_units(ctx, category),
        Some(Commands::Convert {
            value,
            from,
            to,
            category,
            no_history,
        }) => handle_convert(ctx, value, from, to, category.as_deref(), *no_history),
        Some(Commands::History) => handle_history(ctx),
        Some(Commands::Clear) => handle_clear(ctx),
        Some(Commands::Rates) => {
            handle_rates(ctx);
            Ok(())
        }
    }
}

fn handle_categories(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_categories_json(ctx.catalog));
    } else {
        println!("{}", render_categories_table(ctx.catalog, ctx.cli.use_color()));
    }
}

fn handle_units(ctx: &CommandContext<'_>, name: &str) -> Result<(), AppError> {
    let (category, units) = ctx.catalog.units_for(name)?;
    if ctx.cli.json {
        println!("{}", output_units_json(category, units));
    } else {
        println!("{}", render_units_table(category, units, ctx.cli.use_color()));
    }
    Ok(())
}

fn handle_rates(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_rates_json(ctx.rates));
    } else {
        println!("{}", render_rates_table(ctx.rates, ctx.cli.use_color()));
    }
}

fn handle_history(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let lines = ctx.history.read_lines()?;
    if ctx.cli.json {
        println!("{}", output_history_json(ctx.history.path(), &lines));
    } else {
        print!("{}", render_history(&lines));
    }
    Ok(())
}

fn handle_clear(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    ctx.history.clear()?;
    if !ctx.cli.json {
        println!("History cleared ({})", ctx.history.path().display());
    }
    Ok(())
}

/// Category named explicitly, or the one that owns `from`
fn resolve_category(
    catalog: &UnitCatalog,
    explicit: Option<&str>,
    from: &str,
) -> Result<Category, AppError> {
    if let Some(name) = explicit {
        return Category::parse(name);
    }
    catalog
        .category_of(from)
        .ok_or_else(|| AppError::UnsupportedUnit {
            category: "any category".to_string(),
            unit: from.to_string(),
        })
}

fn handle_convert(
    ctx: &CommandContext<'_>,
    value: &str,
    from: &str,
    to: &str,
    category: Option<&str>,
    no_history: bool,
) -> Result<(), AppError> {
    let category = resolve_category(ctx.catalog, category, from)?;

    let (entry, saved) = if no_history {
        let unit = |u: &str| {
            ctx.catalog
                .canonical_unit(category, u)
                .ok_or_else(|| AppError::UnsupportedUnit {
                    category: category.name().to_string(),
                    unit: u.to_string(),
                })
        };
        let (from, to) = (unit(from)?, unit(to)?);
        let input = crate::controller::parse_value(value)?;
        let result = ctx.converter().convert(category, from, to, input)?;
        (HistoryEntry::new(input, from, result, to), false)
    } else {
        let (mut controller, load_error) = Controller::open(ctx.converter(), ctx.history);
        if let Some(e) = load_error {
            eprintln!("Warning: {e}");
        }
        controller.on_category_changed(category.name())?;
        controller.on_unit_selected(UnitSide::From, from)?;
        controller.on_unit_selected(UnitSide::To, to)?;
        match controller.on_convert_requested(value)? {
            ConvertOutcome::Converted {
                entry,
                persist_error,
            } => {
                if let Some(e) = &persist_error {
                    eprintln!("Warning: {e}");
                }
                (entry, persist_error.is_none())
            }
            ConvertOutcome::InvalidInput => {
                return Err(AppError::InvalidInput {
                    input: value.to_string(),
                });
            }
        }
    };

    if ctx.cli.json {
        println!("{}", output_conversion_json(category, &entry, saved));
    } else {
        println!("{entry}");
    }
    Ok(())
}

fn handle_form(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let (mut controller, load_error) = Controller::open(ctx.converter(), ctx.history);
    if let Some(e) = load_error {
        eprintln!("Warning: {e}");
    }
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = io::stdout();
    run_form(&mut controller, stdin.lock(), &mut stdout.lock(), interactive)
        .map_err(AppError::Console)
}

const FORM_HELP: &str = "\
Commands:
  category <name>   switch category (Length, Weight, Temperature, Currency)
  from <unit>       select the source unit
  to <unit>         select the destination unit
  convert <value>   convert with the current selection
  units             list units of the current category
  show              show the current selection and result
  history           show the conversion history
  clear             clear the conversion history
  help              show this help
  quit              leave the form";

fn write_selection<W: Write>(controller: &Controller<'_>, out: &mut W) -> io::Result<()> {
    let state = controller.state();
    writeln!(out, "Category: {}", state.category)?;
    writeln!(out, "Units: {}", state.units.join(", "))?;
    writeln!(out, "From: {}  To: {}", state.from_unit, state.to_unit)
}

/// Drive the controller from line commands until EOF or `quit`
pub(crate) fn run_form<R: BufRead, W: Write>(
    controller: &mut Controller<'_>,
    input: R,
    out: &mut W,
    prompt: bool,
) -> io::Result<()> {
    writeln!(out, "History file: {}", controller.history_log().path().display())?;
    write_selection(controller, out)?;
    write!(out, "{}", controller.history_pane())?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{FORM_HELP}")?,
            "category" => match controller.on_category_changed(arg) {
                Ok(_) => write_selection(controller, out)?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            "from" | "to" => {
                let side = if command.eq_ignore_ascii_case("from") {
                    UnitSide::From
                } else {
                    UnitSide::To
                };
                match controller.on_unit_selected(side, arg) {
                    Ok(_) => write_selection(controller, out)?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            "convert" => {
                let outcome = controller.on_convert_requested(arg);
                writeln!(out, "Converted Value: {}", controller.state().result)?;
                match outcome {
                    Ok(ConvertOutcome::Converted {
                        entry,
                        persist_error,
                    }) => {
                        writeln!(out, "{entry}")?;
                        if let Some(e) = persist_error {
                            writeln!(out, "Warning: {e}")?;
                        }
                    }
                    Ok(ConvertOutcome::InvalidInput) => {}
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            "units" => writeln!(out, "{}", controller.state().units.join(", "))?,
            "show" => {
                write_selection(controller, out)?;
                writeln!(out, "Converted Value: {}", controller.state().result)?;
            }
            "history" => write!(out, "{}", controller.history_pane())?,
            "clear" => {
                if let Err(e) = controller.on_clear_requested() {
                    writeln!(out, "Warning: {e}")?;
                }
                write!(out, "{}", controller.history_pane())?;
            }
            other => writeln!(out, "Unknown command: {other} (type 'help')")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(log: &HistoryLog, script: &str) -> String {
        let catalog = UnitCatalog::standard();
        let rates = RateTable::standard().unwrap();
        let (mut controller, _) = Controller::open(Converter::new(&catalog, &rates), log);
        let mut out = Vec::new();
        run_form(&mut controller, Cursor::new(script), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn form_converts_and_records() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("h.txt"));
        let out = run_script(
            &log,
            "category currency\nfrom USD\nto INR\nconvert 2\nquit\nconvert 3\n",
        );
        assert!(out.contains("Units: INR, USD, EUR, GBP"));
        assert!(out.contains("Converted Value: 166.0000"));
        assert!(out.contains("2.00 USD = 166.0000 INR"));
        // Nothing after quit runs
        assert_eq!(log.read_lines().unwrap(), vec!["2.00 USD = 166.0000 INR"]);
    }

    #[test]
    fn form_reports_invalid_input() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("h.txt"));
        let out = run_script(&log, "convert abc\n");
        assert!(out.contains("Converted Value: Invalid Input"));
        assert!(!log.path().exists());
    }

    #[test]
    fn form_category_change_resets_units() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("h.txt"));
        let out = run_script(&log, "to Feet\ncategory Temperature\nshow\n");
        assert!(out.contains("From: Kilometers  To: Feet"));
        assert!(out.contains("From: Celsius  To: Celsius"));
    }

    #[test]
    fn form_errors_do_not_stop_session() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("h.txt"));
        let out = run_script(
            &log,
            "category Volume\nfrom Grams\nfrobnicate\nto Meters\nconvert 1\n",
        );
        assert!(out.contains("Error: Unknown category \"Volume\""));
        assert!(out.contains("Error: Unit \"Grams\" is not supported in Length"));
        assert!(out.contains("Unknown command: frobnicate"));
        assert!(out.contains("1.00 Kilometers = 1000.0000 Meters"));
    }

    #[test]
    fn form_clear_resets_pane() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("h.txt"));
        std::fs::write(log.path(), "1.00 USD = 83.0000 INR\n").unwrap();
        let out = run_script(&log, "history\nclear\n");
        assert!(out.contains("Conversion History:\n1.00 USD = 83.0000 INR\n"));
        assert!(out.ends_with("Conversion History:\n"));
        assert!(log.read_lines().unwrap().is_empty());
    }

    #[test]
    fn resolve_category_from_unit() {
        let catalog = UnitCatalog::standard();
        assert_eq!(
            resolve_category(&catalog, None, "kelvin").unwrap(),
            Category::Temperature
        );
        assert_eq!(
            resolve_category(&catalog, Some("weight"), "Grams").unwrap(),
            Category::Weight
        );
        assert!(resolve_category(&catalog, None, "Parsecs").is_err());
    }
}
