//! Command parsing and the interactive loop.

use core::str::FromStr;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use storefront_cart::{CartError, CartEvent, CartStore, KeyValueStore};
use storefront_catalog::{Catalog, Category, Product};
use storefront_core::{DomainError, ProductId};
use storefront_events::{Event, EventEnvelope, Subscription};

use crate::terminal::Terminal;

pub const HELP: &str = "\
commands:
  list                 show all products
  search <text>        search name, description, seller, category
  category <name>      fashion | home | wellness | jewelry | accessories | artisan
  add <id>             add one unit to the cart
  remove <id>          remove a product from the cart
  cart                 show or hide the cart
  clear                empty the cart
  checkout             place the order
  help                 this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Category(Category),
    Add(ProductId),
    Remove(ProductId),
    Cart,
    Clear,
    Checkout,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help`")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        let arg = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest)
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "search" | "find" => Ok(Command::Search(rest.to_string())),
            "category" | "cat" => Ok(Command::Category(arg("category")?.parse()?)),
            "add" => Ok(Command::Add(arg("add")?.parse()?)),
            "remove" | "rm" => Ok(Command::Remove(arg("remove")?.parse()?)),
            "cart" => Ok(Command::Cart),
            "clear" => Ok(Command::Clear),
            "checkout" => Ok(Command::Checkout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

type TerminalStore<C, S, R, W> = CartStore<C, S, Terminal<R, W>>;

/// Run one command against the store.
pub fn execute<C, S, R, W>(store: &mut TerminalStore<C, S, R, W>, command: Command) -> Flow
where
    C: Catalog,
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    match command {
        Command::List => {
            let products = store.catalog().list().to_vec();
            show(store.presenter_mut(), &products);
        }
        Command::Search(query) => {
            let hits: Vec<Product> = store.catalog().search(&query).into_iter().cloned().collect();
            show(store.presenter_mut(), &hits);
        }
        Command::Category(category) => {
            let hits: Vec<Product> = store
                .catalog()
                .filter_by_category(category)
                .into_iter()
                .cloned()
                .collect();
            show(store.presenter_mut(), &hits);
        }
        Command::Add(id) => {
            if let Err(CartError::NotFound(id)) = store.add_item(id) {
                store.presenter_mut().line(format_args!("No product with id {id}."));
            }
        }
        Command::Remove(id) => {
            store.remove_item(id);
        }
        Command::Cart => {
            store.presenter_mut().toggle_cart();
            store.refresh();
        }
        Command::Clear => {
            store.clear();
        }
        Command::Checkout => match store.checkout() {
            Ok(receipt) => tracing::debug!(order_ref = %receipt.order_ref, "checkout complete"),
            // Already reported through the acknowledgment dialog.
            Err(CartError::EmptyCart) => {}
            Err(e @ CartError::NotFound(_)) => {
                store.presenter_mut().line(format_args!("Checkout failed: {e}"));
            }
        },
        Command::Help => store.presenter_mut().line(HELP),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn show<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>, products: &[Product]) {
    let refs: Vec<&Product> = products.iter().collect();
    terminal.show_products(&refs);
}

/// Read commands until `quit` or end of input.
pub fn run<C, S, R, W>(store: &mut TerminalStore<C, S, R, W>) -> io::Result<()>
where
    C: Catalog,
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let events = store.subscribe();
    store.presenter_mut().line("Type `help` for commands.");

    while let Some(line) = store.presenter_mut().read_command()? {
        if line.is_empty() {
            continue;
        }
        let flow = match line.parse::<Command>() {
            Ok(command) => execute(store, command),
            Err(e) => {
                store.presenter_mut().line(&e);
                Flow::Continue
            }
        };
        log_events(&events);
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn log_events(events: &Subscription<EventEnvelope<CartEvent>>) {
    for envelope in events.drain() {
        tracing::debug!(
            event = envelope.payload().event_type(),
            seq = envelope.sequence_number(),
            event_id = %envelope.event_id(),
            "cart event"
        );
    }
}
