// line mode is a fallback front-end; the TUI takes precedence when both
// features are enabled
#[cfg(all(feature = "line", not(feature = "tui")))]
mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::Result;

fn main() -> Result<()> {
    run()
}

#[cfg(feature = "tui")]
fn run() -> Result<()> {
    tui_mode::run_tui()
}

#[cfg(all(feature = "line", not(feature = "tui")))]
fn run() -> Result<()> {
    line_mode::run_line();
    Ok(())
}

// Plain read-eval-print fallback when neither terminal front-end is built in.
#[cfg(not(any(feature = "tui", feature = "line")))]
fn run() -> Result<()> {
    use std::io::{BufRead, Write};

    use exprcalc::calc_engine::Evaluator;

    println!("exprcalc - arithmetic expression calculator");
    println!("Operators: +, -, *, / with parentheses and unary minus");
    println!("Type 'quit' to exit");

    let mut calc = Evaluator::new();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "" => continue,
            _ => {}
        }

        match calc.parse(input) {
            Ok(value) => println!("{}", value),
            Err(e) => println!("Syntax Error: {}", e),
        }
    }
    Ok(())
}
