use std::rc::Rc;

use egg::{global_scope, parse, EvalErr, Evaluator, Scope, SpecialForms, Value, DEFAULT_MAX_DEPTH};
use tracing::debug;

const HISTORY: &str = ".egg_history";

// Enable with EGG_LOG=egg=trace (RUST_LOG works too)
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    let filter = match EnvFilter::try_from_env("EGG_LOG") {
        Ok(filter) => filter,
        Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
        Err(_) => return,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn max_depth() -> Result<usize, String> {
    match std::env::var("EGG_MAX_DEPTH") {
        Ok(depth) => depth
            .parse()
            .map_err(|e| format!("EGG_MAX_DEPTH={}: {}", depth, e)),
        Err(_) => Ok(DEFAULT_MAX_DEPTH),
    }
}

fn eval_source(evaluator: &Evaluator, source: &str, scope: &Rc<Scope>) -> Result<Value, EvalErr> {
    let program = parse(source)?;
    debug!(%program, "parsed");
    let value = evaluator.eval(&program, scope)?;
    debug!(?value, "evaluated");
    Ok(value)
}

fn history_path() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME").map(|home| std::path::Path::new(&home).join(HISTORY))
}

fn repl(evaluator: &Evaluator) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let history = history_path();
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }
    let scope = global_scope();
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                if let Some(source) = line.trim_start().strip_prefix(":ast") {
                    match parse(source) {
                        Err(e) => println!("Parse err: {}", e),
                        Ok(program) => println!("{:#?}", program),
                    }
                    continue;
                }
                match eval_source(evaluator, &line, &scope) {
                    Err(e) => println!("Eval err: {}", e),
                    Ok(value) => println!("{:?}", value),
                }
            }
        }
    }
    if let Some(ref path) = history {
        let _ = rl.save_history(path);
    }
    Ok(())
}

fn main() -> Result<(), String> {
    init_tracing();
    let forms = SpecialForms::standard();
    let evaluator = Evaluator::new(&forms).with_max_depth(max_depth()?);

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    match args.first().map(String::as_str) {
        None => repl(&evaluator),
        Some("-h") | Some("--help") => {
            println!("usage: egg [script | -e expr...]");
            Ok(())
        }
        Some("-e") => {
            let source = args[1..].join(" ");
            let value = eval_source(&evaluator, &source, &global_scope())
                .map_err(|e| e.to_string())?;
            println!("{:?}", value);
            Ok(())
        }
        Some(path) if args.len() == 1 => {
            let source = std::fs::read_to_string(path)
                .map_err(|e| format!("egg: failed to read source file {}: {}", path, e))?;
            eval_source(&evaluator, &source, &global_scope())
                .map(|_| ())
                .map_err(|e| format!("{}: {}", path, e))
        }
        Some(_) => Err("usage: egg [script | -e expr...]".to_string()),
    }
}
