use crate::core::controller::ListController;
use crate::core::parser::parse_entry;
use crate::core::view::TableState;
use crate::domain::model::{ProductId, SortDirection, SortField};
use crate::domain::ports::StateStore;
use crate::utils::error::ListError;
use std::io::{self, BufRead, Write};

/// Line-oriented frontend over the controller. Each input line is one
/// user event, handled synchronously to completion; the table state
/// (sort directive, marks) lives only for the session.
pub struct Session<S: StateStore> {
    controller: ListController<S>,
    table: TableState,
}

enum Command {
    Add(String),
    Sort(SortField),
    Mark(ProductId),
    Remove,
    List,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                Err("usage: add <name>[,<quantity>]".to_string())
            } else {
                Ok(Command::Add(rest.to_string()))
            }
        }
        "sort" => SortField::parse(rest)
            .map(Command::Sort)
            .ok_or_else(|| format!("unknown sort field '{rest}' (try 'name' or 'quantity')")),
        "mark" => rest
            .parse::<ProductId>()
            .map(Command::Mark)
            .map_err(|_| format!("'{rest}' is not a product id")),
        "remove" | "rm" => Ok(Command::Remove),
        "list" | "ls" | "" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        quantity.to_string()
    }
}

impl<S: StateStore> Session<S> {
    pub fn new(controller: ListController<S>) -> Self {
        Self {
            controller,
            table: TableState::new(),
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        self.render_table(&mut output)?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            match parse_command(&line?) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command, &mut output)?,
                Err(message) => writeln!(output, "❌ {message}")?,
            }
            write!(output, "> ")?;
            output.flush()?;
        }

        Ok(())
    }

    fn dispatch<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        match command {
            Command::Add(raw) => match parse_entry(&raw) {
                Ok(draft) => {
                    let snapshot = self.controller.add(draft);
                    if let Some(product) = snapshot.last() {
                        writeln!(output, "Added {}", product.name)?;
                    }
                    self.render_table(output)?;
                }
                Err(ListError::EmptyName) => {
                    writeln!(output, "❌ Please enter a product name.")?;
                }
                Err(e) => {
                    writeln!(output, "❌ {e}")?;
                }
            },
            Command::Sort(field) => {
                self.table.request_sort(field);
                self.render_table(output)?;
            }
            Command::Mark(id) => {
                if self.controller.find(id).is_some() {
                    self.table.toggle_mark(id);
                    self.render_table(output)?;
                } else {
                    writeln!(output, "❌ No product with id {id}")?;
                }
            }
            Command::Remove => {
                let marked = self.table.take_marked();
                if marked.is_empty() {
                    writeln!(output, "Nothing is marked.")?;
                } else {
                    self.controller.remove_by_ids(&marked);
                    writeln!(output, "Removed {} product(s)", marked.len())?;
                    self.render_table(output)?;
                }
            }
            Command::List => self.render_table(output)?,
            Command::Help => self.print_help(output)?,
            // Quit never reaches dispatch; the run loop breaks on it.
            Command::Quit => {}
        }
        Ok(())
    }

    fn render_table<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let rows = self.table.rows(self.controller.products());

        if let Some(directive) = self.table.sort_directive() {
            let arrow = match directive.direction {
                SortDirection::Ascending => "ascending",
                SortDirection::Descending => "descending",
            };
            writeln!(output, "sorted by {} ({})", directive.field.label(), arrow)?;
        }

        writeln!(output, "{:>6}  {:<24} {:>10}  marked", "id", "name", "quantity")?;
        for product in &rows {
            writeln!(
                output,
                "{:>6}  {:<24} {:>10}  [{}]",
                product.id,
                product.name,
                format_quantity(product.quantity),
                if self.table.is_marked(product.id) { "x" } else { " " }
            )?;
        }

        if rows.is_empty() {
            writeln!(output, "(list is empty)")?;
        }
        Ok(())
    }

    fn print_help<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "commands:")?;
        writeln!(output, "  add <name>[,<quantity>]   add a product (quantity defaults to 1)")?;
        writeln!(output, "  sort <name|quantity>      sort the table; repeat to flip direction")?;
        writeln!(output, "  mark <id>                 toggle the removal mark on a product")?;
        writeln!(output, "  remove                    remove all marked products")?;
        writeln!(output, "  list                      show the table")?;
        writeln!(output, "  quit                      save and exit")?;
        Ok(())
    }
}
