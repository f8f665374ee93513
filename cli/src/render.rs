use chrono::Utc;
use minuit_core::{DailyStat, ShoppingItem, TaskDto};
use tabled::settings::Style;
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Task")]
    name: String,
    #[tabled(rename = "Stars")]
    difficulty: u32,
    #[tabled(rename = "Half-life (d)")]
    half_life: String,
    #[tabled(rename = "Age (d)")]
    age: String,
    #[tabled(rename = "Repeats")]
    recurrent: String,
    #[tabled(rename = "Tag")]
    hashtag: String,
    #[tabled(rename = "ID")]
    id: String,
}

pub fn print_tasks(tasks: &[TaskDto]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let now = Utc::now();
    let rows: Vec<TaskRow> = tasks
        .iter()
        .map(|t| TaskRow {
            priority: format!("{:5.1}", t.priority),
            name: t.name.clone(),
            difficulty: t.difficulty,
            half_life: format!("{:.1}", t.half_life),
            age: format!("{:.1}", (now - t.created_at).num_hours() as f64 / 24.0),
            recurrent: if t.is_recurrent { "yes" } else { "" }.to_string(),
            hashtag: t
                .hashtag
                .as_ref()
                .map(|h| format!("#{}", h))
                .unwrap_or_default(),
            id: t.id.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn print_stats(window: &[DailyStat]) {
    println!("\x1b[1;36mStars, last {} days\x1b[0m", window.len());
    for stat in window {
        println!(
            "  {} {}  {:>3}  {}",
            stat.day_name,
            stat.date,
            stat.total,
            "*".repeat(stat.total as usize)
        );
    }
    let total: u32 = window.iter().map(|s| s.total).sum();
    println!("  Total: {} stars", total);
}

pub fn print_shopping(items: &[ShoppingItem]) {
    if items.is_empty() {
        println!("Shopping list is empty.");
        return;
    }
    for item in items {
        let mark = if item.checked { "x" } else { " " };
        println!("  [{}] {}  ({})", mark, item.name, item.id);
    }
}
