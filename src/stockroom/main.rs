use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use stockroom::codec::Codec;
use stockroom::config::StockroomConfig;
use stockroom::error::Result;
use stockroom::inventory::Inventory;
use stockroom::item::Item;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, ItemFields};

const DATA_FILENAME: &str = "inventory.csv";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    inventory: Inventory,
    codec: Codec,
    data_file: PathBuf,
    trace: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let proj_dirs =
        ProjectDirs::from("com", "stockroom", "stockroom").expect("Could not determine data dir");
    let data_dir = proj_dirs.data_dir().to_path_buf();
    let config = StockroomConfig::load(&data_dir).unwrap_or_default();
    let trace = cli.verbose || config.trace;
    init_tracing(trace);

    let mut ctx = init_context(&cli, &config, &data_dir, trace)?;

    match cli.command {
        Commands::Add(fields) => handle_add(&mut ctx, &fields),
        Commands::List => handle_list(&ctx),
        Commands::Find { id } => handle_find(&ctx, id),
        Commands::Delete { id, index } => handle_delete(&mut ctx, id, index),
        Commands::Update(fields) => handle_update(&mut ctx, &fields),
        Commands::Load { path } => handle_load(&mut ctx, path),
        Commands::Save { path } => handle_save(&ctx, path),
    }
}

fn init_tracing(trace: bool) {
    let default = if trace {
        "stockroom=debug"
    } else {
        "stockroom=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(
    cli: &Cli,
    config: &StockroomConfig,
    data_dir: &std::path::Path,
    trace: bool,
) -> Result<AppContext> {
    let data_file = cli
        .file
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| data_dir.join(DATA_FILENAME));

    let codec = Codec::new().with_trace(trace);
    let inventory = if data_file.exists() {
        Inventory::from_items(codec.read_file(&data_file)?)?.with_trace(trace)
    } else {
        Inventory::new().with_trace(trace)
    };

    Ok(AppContext {
        inventory,
        codec,
        data_file,
        trace,
    })
}

fn persist(ctx: &AppContext) -> Result<()> {
    if let Some(parent) = ctx.data_file.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    ctx.codec.write_file(&ctx.data_file, ctx.inventory.items())
}

fn handle_add(ctx: &mut AppContext, fields: &ItemFields) -> Result<()> {
    let item = parse_fields(fields)?;
    let id = item.id;

    ctx.inventory.add(item)?;
    persist(ctx)?;

    let position = ctx.inventory.find_by_id(id).map(|i| i + 1).unwrap_or(0);
    success(&format!(
        "Item {} added at position {} of {}.",
        id,
        position,
        ctx.inventory.len()
    ));
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_items(ctx.inventory.items());
    Ok(())
}

fn handle_find(ctx: &AppContext, id: i64) -> Result<()> {
    match ctx.inventory.find_item(id) {
        Some(item) => println!("{}", item.display_row()),
        None => info(&format!("No item with id '{}' was found.", id)),
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: Option<i64>, index: Option<usize>) -> Result<()> {
    let removed = if let Some(index) = index {
        ctx.inventory.delete_by_index(index)?
    } else if let Some(id) = id {
        ctx.inventory.delete_by_id(id)?
    } else {
        // clap requires one of the two
        return Ok(());
    };

    persist(ctx)?;
    success(&format!("Item {} deleted: {}", removed.id, removed.name));
    Ok(())
}

fn handle_update(ctx: &mut AppContext, fields: &ItemFields) -> Result<()> {
    let new_item = parse_fields(fields)?;

    match ctx.inventory.find_by_id(new_item.id) {
        None => {
            info(&format!("No item with id '{}' was found.", new_item.id));
            Ok(())
        }
        Some(position) => {
            let id = new_item.id;
            ctx.inventory.replace(position, new_item)?;
            persist(ctx)?;
            success(&format!("Item {} updated.", id));
            Ok(())
        }
    }
}

fn handle_load(ctx: &mut AppContext, path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path else {
        info("No file selected, nothing to load.");
        return Ok(());
    };

    if !path.exists() {
        warning(&format!("File not found: {}", path.display()));
        return Ok(());
    }

    let items = ctx.codec.read_file(&path)?;
    let count = items.len();
    ctx.inventory = Inventory::from_items(items)?.with_trace(ctx.trace);
    persist(ctx)?;

    success(&format!("Loaded {} items from {}.", count, path.display()));
    Ok(())
}

fn handle_save(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path else {
        info("No file selected, nothing to save.");
        return Ok(());
    };

    ctx.codec.write_file(&path, ctx.inventory.items())?;
    success(&format!("File saved to {}.", path.display()));
    Ok(())
}

fn parse_fields(fields: &ItemFields) -> Result<Item> {
    Item::parse(
        &fields.id,
        &fields.quantity,
        &fields.name,
        &fields.location,
        &fields.description,
    )
}

fn info(content: &str) {
    println!("{}", content.dimmed());
}

fn success(content: &str) {
    println!("{}", content.green());
}

fn warning(content: &str) {
    println!("{}", content.yellow());
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No items in inventory.");
        return;
    }

    let name_width = column_width(items.iter().map(|i| i.name.as_str()));
    let location_width = column_width(items.iter().map(|i| i.location.as_str()));

    for item in items {
        println!(
            "{}  {:>8}  {}  {}  {}",
            format!("{:>6}", item.id).yellow(),
            item.quantity,
            pad_to_width(&item.name, name_width),
            pad_to_width(&item.location, location_width),
            item.description.dimmed()
        );
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
