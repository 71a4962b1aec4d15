use chrono::Utc;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use trove::api::{CmdMessage, ConfigAction, MessageLevel};
use trove::error::Result;
use trove::init::{self, TroveContext};
use trove::model::Record;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = init::initialize(&cwd, cli.store.as_deref());

    if let Some(warning) = ctx.api.load_warning() {
        eprintln!("{}", format!("Warning: {}", warning).yellow());
    }

    match cli.command {
        Some(Commands::Create { title, description }) => {
            handle_create(&mut ctx, &title, description.as_deref().unwrap_or(""))
        }
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Update {
            id,
            title,
            description,
        }) => handle_update(&mut ctx, id, title.as_deref(), description.as_deref()),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx),
    }
}

fn handle_create(ctx: &mut TroveContext, title: &str, description: &str) -> Result<()> {
    let result = ctx.api.create_record(title, description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &TroveContext) -> Result<()> {
    let result = ctx.api.list_records()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &TroveContext, id: u64) -> Result<()> {
    let result = ctx.api.view_record(id)?;
    print_full_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut TroveContext,
    id: u64,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let result = ctx.api.update_record(id, title, description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut TroveContext, id: u64) -> Result<()> {
    let result = ctx.api.delete_record(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &TroveContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("store-file = {}", config.store_file);
        println!("pretty = {}", config.pretty);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &TroveContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_records(records: &[Record]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("#{}", record.id).yellow(),
            record.title.bold()
        );
        println!("--------------------------------");
        if !record.description.is_empty() {
            println!("{}", record.description);
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    let id_width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);

    for record in records {
        let idx_str = format!("{:>width$}. ", record.id, width = id_width);

        let description_preview: String = record
            .description
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let row_text = if description_preview.is_empty() {
            record.title.clone()
        } else {
            format!("{} {}", record.title, description_preview)
        };

        let fixed_width = 2 + idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let row_display = truncate_to_width(&row_text, available);
        let padding = available.saturating_sub(row_display.width());

        let time_ago = format_time_ago(record.created_at);

        println!(
            "  {}{}{}  {}",
            idx_str,
            row_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
