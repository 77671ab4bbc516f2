//! Natural-language style command parser
//!
//! Turns one input line into a [`Command`]. Keywords are matched
//! case-insensitively; names keep their exact spelling and may be
//! double-quoted to include spaces.

use crate::command::Command;

/// Parse one line of input. Returns `None` when the line matches no
/// command shape.
pub fn parse(input: &str) -> Option<Command> {
    let tokens = split_tokens(input);
    if tokens.is_empty() {
        return None;
    }
    let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let kw = |i: usize, word: &str| lower.get(i).map(String::as_str) == Some(word);

    if lower.len() == 1 && (kw(0, "exit") || kw(0, "quit")) {
        return Some(Command::Exit);
    }

    if kw(0, "help") {
        return Some(Command::Help);
    }

    if lower.len() == 2 && kw(0, "show") && kw(1, "table") {
        return Some(Command::ShowTable);
    }

    if lower.len() == 2 && kw(0, "show") && kw(1, "tables") {
        return Some(Command::ShowTables);
    }

    if lower.len() == 4 && kw(0, "create") && kw(1, "table") && kw(2, "named") {
        return Some(Command::CreateTable {
            name: tokens[3].clone(),
        });
    }

    if lower.len() == 3 && kw(0, "delete") && kw(1, "table") {
        return Some(Command::DeleteTable {
            name: tokens[2].clone(),
        });
    }

    if lower.len() == 3 && kw(0, "switch") && kw(1, "table") {
        return Some(Command::SwitchTable {
            name: tokens[2].clone(),
        });
    }

    if lower.len() >= 3 && kw(0, "add") && kw(1, "rows") {
        return Some(Command::AddRows {
            names: tokens[2..].to_vec(),
        });
    }

    if lower.len() >= 3 && kw(0, "delete") && kw(1, "rows") {
        return Some(Command::DeleteRows {
            names: tokens[2..].to_vec(),
        });
    }

    if lower.len() >= 3 && kw(0, "add") && kw(1, "columns") {
        return Some(Command::AddColumns {
            names: tokens[2..].to_vec(),
        });
    }

    if lower.len() >= 3 && kw(0, "delete") && kw(1, "columns") {
        return Some(Command::DeleteColumns {
            names: tokens[2..].to_vec(),
        });
    }

    // `fill column ... with ...` must win over `fill <row> with ...`
    if lower.len() >= 5 && kw(0, "fill") && kw(1, "column") && kw(3, "with") {
        return Some(Command::FillColumn {
            column: tokens[2].clone(),
            values: tokens[4..].to_vec(),
        });
    }

    if lower.len() >= 4 && kw(0, "fill") && kw(2, "with") {
        return Some(Command::FillRow {
            row: tokens[1].clone(),
            values: tokens[3..].to_vec(),
        });
    }

    // The value may span several tokens (formulas like `= 1 + 2`).
    if lower.len() >= 5 && kw(0, "set") && kw(3, "to") {
        return Some(Command::SetCell {
            row: tokens[1].clone(),
            column: tokens[2].clone(),
            value: tokens[4..].join(" "),
        });
    }

    if lower.len() == 5 && kw(0, "rename") && kw(1, "row") && kw(3, "to") {
        return Some(Command::RenameRow {
            old: tokens[2].clone(),
            new: tokens[4].clone(),
        });
    }

    if lower.len() == 5 && kw(0, "rename") && kw(1, "column") && kw(3, "to") {
        return Some(Command::RenameColumn {
            old: tokens[2].clone(),
            new: tokens[4].clone(),
        });
    }

    if lower.len() == 5 && kw(0, "copy") && kw(1, "table") && kw(3, "to") {
        return Some(Command::CopyTable {
            source: tokens[2].clone(),
            destination: tokens[4].clone(),
        });
    }

    if lower.len() == 4 && kw(0, "export") && kw(1, "table") && kw(2, "to") {
        return Some(Command::ExportTable {
            file: tokens[3].clone(),
        });
    }

    if lower.len() == 4 && kw(0, "import") && kw(1, "table") && kw(2, "from") {
        return Some(Command::ImportTable {
            file: tokens[3].clone(),
        });
    }

    if lower.len() == 4 && kw(0, "define") && kw(2, "as") {
        return Some(Command::DefineConstant {
            name: tokens[1].clone(),
            value: tokens[3].clone(),
        });
    }

    None
}

/// Split a line into tokens, honoring double quotes.
///
/// `fill "Row One" with a b` → `["fill", "Row One", "with", "a", "b"]`.
/// An unterminated quote runs to the end of the line.
fn split_tokens(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                if in_quotes {
                    tokens.push(std::mem::take(&mut current));
                }
                in_quotes = !in_quotes;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() || in_quotes {
        tokens.push(current);
    }
    tokens
}
