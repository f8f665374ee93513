mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use minuit_core::{
    CompleteTask, DegradedStore, FileStore, HistoryRepository, ShoppingRepository,
    ShoppingService, StatsRepository, StatsService, TaskRepository, TaskService,
    DEFAULT_WINDOW_DAYS,
};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "minuit")]
#[command(about = "A chore tracker that ranks tasks by decaying urgency", long_about = None)]
struct Cli {
    /// Data directory (default: ~/.minuit)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List open tasks, most urgent first
    List {
        /// Only show tasks carrying this hashtag
        #[arg(long)]
        hashtag: Option<String>,
    },
    /// Add a new task
    Add {
        name: String,
        /// Days until the task reaches priority 50
        #[arg(long, default_value_t = 1.0)]
        half_life: f64,
        /// Stars credited to the daily ledger on completion
        #[arg(long, default_value_t = 1)]
        difficulty: u32,
        /// Reset instead of delete when completed
        #[arg(long)]
        recurrent: bool,
        #[arg(long)]
        hashtag: Option<String>,
    },
    /// Rewrite a task's fields (its decay clock keeps running)
    Update {
        id: Uuid,
        name: String,
        #[arg(long, default_value_t = 1.0)]
        half_life: f64,
        #[arg(long, default_value_t = 1)]
        difficulty: u32,
        #[arg(long)]
        recurrent: bool,
        #[arg(long)]
        hashtag: Option<String>,
    },
    /// Complete a task: credit stars, log it, then reset or remove it
    Done { id: Uuid },
    /// Delete a task without completing it
    Delete { id: Uuid },
    /// Show the trailing daily star totals
    Stats {
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: usize,
    },
    /// Manage the shopping list
    Shop {
        #[command(subcommand)]
        command: ShopCommands,
    },
}

#[derive(Subcommand)]
enum ShopCommands {
    /// List items; checked items older than a day are dropped
    List,
    /// Add an item (unchecked)
    Add { name: String },
    /// Mark an item as bought
    Check { id: Uuid },
    /// Put an item back on the list
    Uncheck { id: Uuid },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match FileStore::open(cli.data_dir) {
        Ok(store) => run(store, cli.command),
        Err(e) => {
            eprintln!(
                "Warning: could not open the data directory ({}). \
                 Running without storage; nothing will be saved.",
                e
            );
            run(DegradedStore, cli.command)
        }
    }
}

fn run<S>(store: S, command: Commands) -> Result<()>
where
    S: TaskRepository + StatsRepository + HistoryRepository + ShoppingRepository + Clone,
{
    match command {
        Commands::List { hashtag } => {
            let mut tasks = TaskService::new(store).list_tasks()?;
            if let Some(tag) = &hashtag {
                tasks.retain(|t| t.hashtag.as_deref() == Some(tag.as_str()));
            }
            render::print_tasks(&tasks);
        }
        Commands::Add {
            name,
            half_life,
            difficulty,
            recurrent,
            hashtag,
        } => {
            let created =
                TaskService::new(store).add_task(name, half_life, difficulty, recurrent, hashtag)?;
            println!("Task added: {} (ID: {})", created.name, created.id);
            println!(
                "  Half-life: {} days, difficulty: {}{}",
                created.half_life,
                created.difficulty,
                if created.is_recurrent { ", recurrent" } else { "" }
            );
        }
        Commands::Update {
            id,
            name,
            half_life,
            difficulty,
            recurrent,
            hashtag,
        } => {
            let updated = TaskService::new(store)
                .update_task(&id, name, half_life, difficulty, recurrent, hashtag)?;
            if updated {
                println!("Task updated.");
            } else {
                println!("No task with ID {}.", id);
            }
        }
        Commands::Done { id } => {
            let stats = StatsService::new(store.clone());
            let lifecycle = CompleteTask::new(&store, &stats, &store);
            if lifecycle.complete(&id)? {
                println!("Done! Stars recorded for today.");
            } else {
                println!("No task with ID {}.", id);
            }
        }
        Commands::Delete { id } => {
            if TaskService::new(store).delete_task(&id)? {
                println!("Task deleted.");
            } else {
                println!("No task with ID {}.", id);
            }
        }
        Commands::Stats { days } => {
            let window = StatsService::new(store).trailing_window(days)?;
            render::print_stats(&window);
        }
        Commands::Shop { command } => {
            let service = ShoppingService::new(store);
            match command {
                ShopCommands::List => {
                    let items = service.list_items()?;
                    render::print_shopping(&items);
                }
                ShopCommands::Add { name } => {
                    let item = service.add_item(name)?;
                    println!("Added to the list: {} (ID: {})", item.name, item.id);
                }
                ShopCommands::Check { id } => {
                    if service.toggle_item(&id, true)? {
                        println!("Checked off.");
                    } else {
                        println!("No item with ID {}.", id);
                    }
                }
                ShopCommands::Uncheck { id } => {
                    if service.toggle_item(&id, false)? {
                        println!("Back on the list.");
                    } else {
                        println!("No item with ID {}.", id);
                    }
                }
            }
        }
    }

    Ok(())
}
