//! Line-oriented console menu over an `OrderStore`.

use crate::error::AppError;
use ordiolib::{
    error_log::ErrorLog,
    model::{parse_amount, parse_date, parse_id, DATE_FORMAT},
    Order, OrderPatch, OrderStore, OrdioError, SaveOutcome, SortKey,
};
use std::io::{BufRead, Write};
use std::path::Path;

const MENU: &str = "\
=== Order management ===
1. Load orders from file
2. Save orders to file
3. Show all orders
4. Sort orders
5. Search orders
6. Add order
7. Remove order
8. Edit order
9. Exit";

const SORT_MENU: &str = "\
Sort by:
1. ID
2. Client
3. Date
4. Amount
5. Status";

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    input: R,
    out: W,
    store: OrderStore,
    error_log: ErrorLog,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, error_log: ErrorLog) -> Self {
        Self {
            input,
            out,
            store: OrderStore::new(),
            error_log,
        }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// Loads `path` before the menu starts; failures are reported like any
    /// menu action and the session starts empty.
    pub fn preload(&mut self, path: &Path) -> Result<(), AppError> {
        match self.store.load(path) {
            Ok(count) => writeln!(self.out, "Loaded {count} orders from {}.", path.display())?,
            Err(e) => self.report(&e.into())?,
        }
        Ok(())
    }

    /// Runs until Exit is chosen or stdin ends. Only a broken console ends
    /// it with an error; every other failure is reported and the loop goes on.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            writeln!(self.out, "{MENU}")?;
            write!(self.out, "Choose an action: ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let Ok(choice) = line.trim().parse::<u32>() else {
                writeln!(self.out, "Invalid input. Please enter a number.")?;
                continue;
            };

            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(AppError::InputClosed) => return Ok(()),
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn dispatch(&mut self, choice: u32) -> Result<Flow, AppError> {
        match choice {
            1 => self.load()?,
            2 => self.save()?,
            3 => write_orders(&mut self.out, self.store.list())?,
            4 => self.sort()?,
            5 => self.search()?,
            6 => self.add()?,
            7 => self.remove()?,
            8 => self.edit()?,
            9 => return Ok(Flow::Exit),
            _ => writeln!(self.out, "Invalid choice. Try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &AppError) -> Result<(), AppError> {
        self.error_log.record(err);
        tracing::error!(error = %err, "menu action failed");
        writeln!(self.out, "Error: {err}")?;
        Ok(())
    }

    fn load(&mut self) -> Result<(), AppError> {
        let path = self.ask("Enter file path: ")?;
        let count = self.store.load(path.trim())?;
        writeln!(self.out, "Loaded {count} orders.")?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), AppError> {
        if self.store.is_empty() {
            writeln!(self.out, "No orders to save.")?;
            return Ok(());
        }
        let path = self.ask("Enter file path: ")?;
        match self.store.save(path.trim())? {
            SaveOutcome::Saved(n) => writeln!(self.out, "Saved {n} orders.")?,
            SaveOutcome::NothingToSave => writeln!(self.out, "No orders to save.")?,
        }
        Ok(())
    }

    fn sort(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "{SORT_MENU}")?;
        let answer = self.ask("Choose a sort key: ")?;
        let Ok(choice) = answer.trim().parse::<u32>() else {
            writeln!(self.out, "Invalid input.")?;
            return Ok(());
        };
        let sorted = match SortKey::from_menu_choice(choice) {
            Some(key) => self.store.sorted_by(key),
            None => self.store.list().to_vec(),
        };
        write_orders(&mut self.out, &sorted)?;
        Ok(())
    }

    fn search(&mut self) -> Result<(), AppError> {
        let term = self.ask("Enter search term: ")?;
        let found = self.store.search(&term);
        write_orders(&mut self.out, &found)?;
        writeln!(self.out, "Found {} orders.", found.len())?;
        Ok(())
    }

    fn add(&mut self) -> Result<(), AppError> {
        let id = parse_id(&self.ask("Enter ID: ")?)?;
        let client = self.ask("Enter client name: ")?;
        let order_date = parse_date(&self.ask("Enter order date (yyyy-MM-dd): ")?)?;
        let amount = parse_amount(&self.ask("Enter amount: ")?)?;
        let status = self.ask("Enter status: ")?;

        self.store.add(Order::new(id, client, order_date, amount, status));
        writeln!(self.out, "Order added.")?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), AppError> {
        let id = parse_id(&self.ask("Enter ID of the order to remove: ")?)?;
        self.store.remove(id).ok_or(OrdioError::NotFound(id))?;
        writeln!(self.out, "Order removed.")?;
        Ok(())
    }

    fn edit(&mut self) -> Result<(), AppError> {
        let id = parse_id(&self.ask("Enter ID of the order to edit: ")?)?;
        let current = self.store.get(id).cloned().ok_or(OrdioError::NotFound(id))?;

        writeln!(self.out, "Editing order:")?;
        writeln!(self.out, "{current}")?;
        writeln!(self.out, "Leave a field blank to keep its current value.")?;

        let client = self.ask(&format!("New client ({}): ", current.client))?;
        let date = self.ask(&format!(
            "New order date ({}): ",
            current.order_date.format(DATE_FORMAT)
        ))?;
        let amount = self.ask(&format!("New amount ({}): ", current.amount))?;
        let status = self.ask(&format!("New status ({}): ", current.status))?;

        // nothing is applied unless every answer parses
        let patch = OrderPatch::from_input(&client, &date, &amount, &status)?;
        self.store.edit(id, &patch).ok_or(OrdioError::NotFound(id))?;
        writeln!(self.out, "Order updated.")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.read_line()?.ok_or(AppError::InputClosed)
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn write_orders<W: Write>(out: &mut W, orders: &[Order]) -> std::io::Result<()> {
    if orders.is_empty() {
        return writeln!(out, "No orders to display.");
    }
    for o in orders {
        writeln!(out, "{o}")?;
    }
    Ok(())
}
