use crate::errors::AppResult;
use crate::store::Storage;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "stop" => Colour::Red,
        "addtype" => Colour::Yellow,
        "seed" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(storage: &Storage) -> AppResult<()> {
        let entries = storage.log.load_all()?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(usize, String, String, String, String)> = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (i + 1, date, e.operation, op_target, e.message)
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rows.len().to_string().len();
        let date_w = rows
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(0);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);

            let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                let mut s = op_target.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
