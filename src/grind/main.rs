use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use grind::api::{CmdMessage, ConfigAction, GrindApi, MessageLevel};
use grind::catalog::Catalog;
use grind::config::GrindConfig;
use grind::editor::edit_note;
use grind::error::{GrindError, Result};
use grind::filter::{FilterCriteria, FilterOutcome, QuestionRow, TopicSection};
use grind::model::Difficulty;
use grind::store::fs::FileStore;
use grind::view::SheetState;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();
}

struct AppContext {
    api: GrindApi<FileStore>,
    catalog: Catalog,
    data_dir: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            difficulty,
            status,
            revision,
            search,
            platform,
            company,
            open,
            all,
        }) => {
            let criteria = FilterCriteria {
                difficulty,
                status: status.unwrap_or_default(),
                revision: revision.unwrap_or_default(),
                search,
                platform,
                company,
            };
            handle_list(&ctx, &criteria, &open, all)
        }
        Some(Commands::Solve { keys }) => handle_solve(&mut ctx, keys),
        Some(Commands::Revise { keys }) => handle_revise(&mut ctx, keys),
        Some(Commands::Note { key, text }) => handle_note(&mut ctx, key, text),
        Some(Commands::View { keys }) => handle_view(&ctx, keys),
        Some(Commands::Random) => handle_random(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, &FilterCriteria::default(), &[], false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match std::env::var_os("GRIND_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "grind", "grind")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| GrindError::Store("Could not determine data directory".to_string()))?,
    };

    let config = GrindConfig::load(&data_dir).unwrap_or_default();

    let catalog = if let Some(path) = &cli.sheet {
        Catalog::load(path)?
    } else if let Some(path) = &config.sheet {
        Catalog::load(path)?
    } else {
        Catalog::builtin().clone()
    };

    let store = FileStore::new(data_dir.clone());
    Ok(AppContext {
        api: GrindApi::new(store),
        catalog,
        data_dir,
    })
}

fn handle_list(ctx: &AppContext, criteria: &FilterCriteria, open: &[u32], all: bool) -> Result<()> {
    let mut state = SheetState::new();
    if all {
        state.open_all(&ctx.catalog);
    }
    for id in open {
        state.toggle_topic(*id);
    }

    let result = ctx.api.list(&ctx.catalog, criteria)?;
    match &result.outcome {
        Some(FilterOutcome::NoMatches) => print_empty_state(
            "No questions match your filters",
            "Try removing or changing some filters to see results.",
        ),
        Some(FilterOutcome::Matches { total, sections }) => {
            print_sheet(sections, &state);
            println!("{}", format!("{} questions shown", total).dimmed());
        }
        None => {}
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_solve(ctx: &mut AppContext, keys: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_solved(&ctx.catalog, &keys)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_revise(ctx: &mut AppContext, keys: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_revision(&ctx.catalog, &keys)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note(ctx: &mut AppContext, key: String, text: Option<String>) -> Result<()> {
    let final_text = match text {
        Some(text) => text,
        None => {
            // Seed the editor buffer with the current note; edits are live.
            let current = ctx
                .api
                .view_questions(&ctx.catalog, &[key.as_str()])?
                .rows
                .first()
                .and_then(|row| row.note.clone())
                .unwrap_or_default();
            edit_note(&current)?
        }
    };

    let result = ctx.api.set_note(&ctx.catalog, &key, final_text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, keys: Vec<String>) -> Result<()> {
    let result = ctx.api.view_questions(&ctx.catalog, &keys)?;
    print_question_details(&result.rows);
    print_messages(&result.messages);
    Ok(())
}

fn handle_random(ctx: &AppContext) -> Result<()> {
    let mut state = SheetState::new();
    let result = ctx.api.random(&ctx.catalog, &mut state)?;
    if let Some(row) = &result.spotlight {
        println!("{}", "Random question".bold());
        print_question_details(std::slice::from_ref(row));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("sheet"), None) => ConfigAction::ShowKey("sheet".to_string()),
        (Some("sheet"), Some(v)) => ConfigAction::SetSheet(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        println!("sheet = {}", config.sheet.as_deref().unwrap_or("(built-in)"));
    }
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

const LINE_WIDTH: usize = 100;
const TITLE_WIDTH: usize = 44;
const DIFF_WIDTH: usize = 6;

fn print_sheet(sections: &[TopicSection], state: &SheetState) {
    for section in sections {
        print_topic_header(section, state.is_open(section.id));
        if state.is_open(section.id) {
            print_topic_rows(&section.rows);
            println!();
        }
    }
}

fn print_topic_header(section: &TopicSection, open: bool) {
    let arrow = if open { "▾" } else { "▸" };
    let label = format!("{} {}. {}", arrow, section.id, section.name);
    let progress = if section.completed() {
        "completed".to_string()
    } else {
        format!("{}/{} solved", section.solved, section.total)
    };

    let padding = LINE_WIDTH.saturating_sub(label.width() + progress.width());
    let progress_colored = if section.completed() {
        progress.green()
    } else {
        progress.dimmed()
    };

    println!("{}{}{}", label.bold(), " ".repeat(padding), progress_colored);
}

fn print_topic_rows(rows: &[QuestionRow]) {
    for row in rows {
        let key_str = format!("{:>7}", format!("{}.", row.key));
        let solved_box = if row.solved {
            "[x]".green()
        } else {
            "[ ]".normal()
        };
        let revise_box = if row.marked {
            "[r]".red()
        } else {
            "[ ]".normal()
        };

        let title_display = truncate_to_width(&row.question.title, TITLE_WIDTH);
        let title_padding = " ".repeat(TITLE_WIDTH.saturating_sub(title_display.width()));

        let difficulty = row.question.difficulty.to_string();
        let diff_padding = " ".repeat(DIFF_WIDTH.saturating_sub(difficulty.width()));
        let difficulty_colored = match row.question.difficulty {
            Difficulty::Easy => difficulty.green(),
            Difficulty::Medium => difficulty.yellow(),
            Difficulty::Hard => difficulty.red(),
        };

        let platforms: Vec<&str> = row.question.links.keys().map(|p| p.as_str()).collect();
        let platforms_str = if platforms.is_empty() {
            "-".to_string()
        } else {
            platforms.join(",")
        };

        let solution_marker = if row.question.solution_link.is_some() {
            "sol".cyan()
        } else {
            "   ".normal()
        };
        let note_marker = if row.has_note() {
            "✎".yellow()
        } else {
            " ".normal()
        };

        println!(
            "  {} {} {}  {}{}  {}{}  {}  {} {}",
            key_str.dimmed(),
            solved_box,
            revise_box,
            title_display,
            title_padding,
            difficulty_colored,
            diff_padding,
            platforms_str.dimmed(),
            solution_marker,
            note_marker
        );
    }
}

fn print_question_details(rows: &[QuestionRow]) {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            row.key.to_string().yellow(),
            row.question.title.bold()
        );
        println!("--------------------------------");

        let difficulty = row.question.difficulty.to_string();
        let difficulty_colored = match row.question.difficulty {
            Difficulty::Easy => difficulty.green(),
            Difficulty::Medium => difficulty.yellow(),
            Difficulty::Hard => difficulty.red(),
        };
        println!("Difficulty: {}", difficulty_colored);

        let solved = match (row.solved, row.solved_at) {
            (true, Some(at)) => format!("yes, {}", format_time_ago(at)),
            (true, None) => "yes".to_string(),
            (false, _) => "no".to_string(),
        };
        println!("Solved:     {}", solved);
        println!("Revision:   {}", if row.marked { "marked" } else { "-" });

        for (platform, url) in &row.question.links {
            println!("{}", format!("{:>13}: {}", platform.label(), url).dimmed());
        }
        if let Some(url) = &row.question.solution_link {
            println!("{}", format!("{:>13}: {}", "Solution", url).cyan());
        }
        if !row.question.companies.is_empty() {
            println!("Companies:  {}", row.question.companies.join(", "));
        }

        if let Some(note) = &row.note {
            if !note.trim().is_empty() {
                println!();
                println!("{}", "Note".bold());
                println!("{}", note);
            }
        }
    }
}

fn print_empty_state(message: &str, suggestion: &str) {
    println!();
    println!("  {}", message.bold());
    println!("  {}", suggestion.dimmed());
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

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
