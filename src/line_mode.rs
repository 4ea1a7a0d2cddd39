use std::io::{stdin, stdout, Write};

use exprcalc::calc_engine::Evaluator;
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};

// Maps a cursor position counted in chars to the byte offset string edits need.
fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or_else(|| s.len())
}

pub fn run_line() {
    println!("exprcalc - arithmetic expression calculator");
    println!("Supports: +, -, *, /, parentheses, unary minus, decimals");
    println!("Division by zero evaluates to NaN");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Special commands: 'quit' to exit, 'clear' to reset history\n");

    let mut stdout = stdout().into_raw_mode().unwrap();
    let mut calc = Evaluator::new();
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;

    loop {
        write!(stdout, "{}Expression: ", ClearLine).unwrap();
        stdout.flush().unwrap();

        let mut expression = String::new();
        let mut cursor_pos = 0; // counted in chars, not bytes
        let (_, initial_y) = stdout.cursor_pos().unwrap();

        let stdin = stdin();
        let mut keys = stdin.keys();

        loop {
            write!(
                stdout,
                "{}{}Expression: {}",
                Goto(1, initial_y),
                ClearLine,
                expression
            )
            .unwrap();

            let byte_pos = char_index_to_byte_index(&expression, cursor_pos);
            write!(stdout, "{}", Goto((12 + byte_pos) as u16, initial_y)).unwrap();
            stdout.flush().unwrap();

            match keys.next().unwrap().unwrap() {
                Key::Char('\n') => break,
                Key::Char(c) => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    expression.insert(byte_idx, c);
                    cursor_pos += 1;
                }
                Key::Backspace if cursor_pos > 0 => {
                    cursor_pos -= 1;
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    let next_char = expression[byte_idx..].chars().next();
                    if let Some(c) = next_char {
                        let end = byte_idx + c.len_utf8();
                        expression.drain(byte_idx..end);
                    }
                }
                Key::Delete if cursor_pos < expression.chars().count() => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    let next_char = expression[byte_idx..].chars().next();
                    if let Some(c) = next_char {
                        let end = byte_idx + c.len_utf8();
                        expression.drain(byte_idx..end);
                    }
                }
                Key::Left if cursor_pos > 0 => cursor_pos -= 1,
                Key::Right if cursor_pos < expression.chars().count() => cursor_pos += 1,
                Key::Home => cursor_pos = 0,
                Key::End => cursor_pos = expression.chars().count(),
                Key::Up => {
                    if history_index > 0 {
                        history_index -= 1;
                        expression = history[history_index].clone();
                        cursor_pos = expression.chars().count();
                    }
                }
                Key::Down => {
                    if history_index < history.len().saturating_sub(1) {
                        history_index += 1;
                        expression = history[history_index].clone();
                        cursor_pos = expression.chars().count();
                    } else {
                        history_index = history.len();
                        expression.clear();
                        cursor_pos = 0;
                    }
                }
                _ => {}
            }
        }

        let input = expression.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("\r\nGoodbye!");
                return;
            }
            "clear" | "reset" => {
                history.clear();
                history_index = 0;
                println!("\r\nHistory cleared\n");
                continue;
            }
            _ => {}
        }

        history.push(input.to_string());
        history_index = history.len();

        match calc.parse(input) {
            Ok(value) => {
                print!("\r\n  {} = {}\n", input, value);
            }
            Err(e) => {
                println!("\r\n  {} = Syntax Error: {}\n", input, e);
            }
        }
    }
}
