use clap::Parser as _;
use owo_colors::OwoColorize;
use rlox::cli::{Args, Commands, generate_completions};
use rlox::config::AppConfig;
use rlox::diagnostic::render_diagnostics;
use rlox::interpreter::{Interpreter, Parser};
use rlox::{lexer, Stmt};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = &args.command {
        generate_completions(*shell);
        return ExitCode::SUCCESS;
    }

    let config = AppConfig::from_args(&args);

    match &args.script {
        Some(path) => run_file(path, &config),
        None => run_prompt(&config),
    }
}

fn run_file(path: &Path, config: &AppConfig) -> ExitCode {
    verbose_log(config, &format!("Running script: {}", path.display()));

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            error_message(config, &format!("Failed to read {}: {}", path.display(), err));
            return ExitCode::from(66);
        }
    };

    let tokens = match lexer::scan(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!(
                "{}",
                render_diagnostics(&source, &[err.to_diagnostic()], config.color_enabled)
            );
            return ExitCode::from(65);
        }
    };
    verbose_log(config, &format!("Scanned {} tokens", tokens.len()));

    let parsed = Parser::new(tokens).parse();
    if !parsed.is_ok() {
        let diagnostics: Vec<_> = parsed.errors.iter().map(|e| e.to_diagnostic()).collect();
        eprint!(
            "{}",
            render_diagnostics(&source, &diagnostics, config.color_enabled)
        );
        return ExitCode::from(65);
    }
    verbose_log(
        config,
        &format!("Parsed {} statements", parsed.statements.len()),
    );

    let mut interpreter = Interpreter::new();
    if let Err(err) = interpreter.interpret(&parsed.statements) {
        eprint!(
            "{}",
            render_diagnostics(&source, &[err.to_diagnostic()], config.color_enabled)
        );
        return ExitCode::from(70);
    }

    ExitCode::SUCCESS
}

fn run_prompt(config: &AppConfig) -> ExitCode {
    println!("rlox {}", env!("CARGO_PKG_VERSION"));
    println!("Exit with Ctrl+D (Ctrl+Z on Windows) or type 'exit'.");

    let stdin = io::stdin();
    let mut interpreter = Interpreter::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                error_message(config, &format!("Error reading input: {}", err));
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        run_line(&line, &mut interpreter, config);
    }

    ExitCode::SUCCESS
}

fn run_line(source: &str, interpreter: &mut Interpreter<io::Stdout>, config: &AppConfig) {
    let tokens = match lexer::scan(source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!(
                "{}",
                render_diagnostics(source, &[err.to_diagnostic()], config.color_enabled)
            );
            return;
        }
    };

    let parsed = Parser::new(tokens).parse();
    if !parsed.is_ok() {
        let diagnostics: Vec<_> = parsed.errors.iter().map(|e| e.to_diagnostic()).collect();
        eprint!(
            "{}",
            render_diagnostics(source, &diagnostics, config.color_enabled)
        );
        return;
    }

    // A lone expression statement is echoed back with its value.
    let result = match parsed.statements.as_slice() {
        [Stmt::Expression(expr)] => match interpreter.evaluate(expr) {
            Ok(value) => {
                println!("{}", value);
                Ok(())
            }
            Err(err) => Err(err),
        },
        statements => interpreter.interpret(statements),
    };

    if let Err(err) = result {
        eprint!(
            "{}",
            render_diagnostics(source, &[err.to_diagnostic()], config.color_enabled)
        );
    }
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[rlox:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
