use std::fs;
use std::io;

use anyhow::Context;
use storefront_cart::{CartStore, FileKeyValueStore};
use storefront_catalog::{Catalog, StaticCatalog};
use storefront_cli::{Config, Terminal, repl};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid storefront configuration")?;
    storefront_observability::init(config.log_format);

    let catalog = load_catalog(&config)?;
    let storage = FileKeyValueStore::new(&config.data_file);
    tracing::info!(
        data_file = %config.data_file.display(),
        products = catalog.len(),
        "storefront starting"
    );

    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let products: Vec<_> = catalog.list().iter().collect();
    terminal.show_products(&products);

    let mut store = CartStore::open(catalog, storage, terminal);
    repl::run(&mut store).context("terminal io failed")?;

    tracing::info!(items = store.item_count(), "storefront exiting");
    Ok(())
}

fn load_catalog(config: &Config) -> anyhow::Result<StaticCatalog> {
    let Some(path) = &config.catalog_file else {
        return Ok(StaticCatalog::demo());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog at {}", path.display()))?;
    StaticCatalog::from_json(&json)
        .with_context(|| format!("failed to load catalog from {}", path.display()))
}
