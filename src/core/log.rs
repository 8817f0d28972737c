use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for each logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct LogRow {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal `log` table, one line per row, oldest first.
    pub fn render(pool: &DbPool) -> AppResult<Vec<String>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let mut lines = Vec::with_capacity(entries.len());
        for e in entries {
            let color = color_for_operation(&e.operation);

            let mut visible = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            if visible.chars().count() > MAX_OP_WIDTH {
                visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
            }

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));

            lines.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(lines)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        println!("📜 Internal log:\n");
        for line in Self::render(pool)? {
            println!("{line}");
        }
        Ok(())
    }
}
