use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use times_tables::game::quiz::settings::{
    QuestionCount, QuizSettings, MAX_TABLE, MIN_TABLE, QUESTION_COUNT_OPTIONS,
};
use times_tables::game::settings::Settings;
use times_tables::game::Game;
use times_tables::output::terminal::TerminalOutput;

const SETTINGS_VARIABLE: &str = "TIMES_TABLES_SETTINGS";
const TICK_DURATION: Duration = Duration::from_millis(50);

enum Command {
    Start(Option<QuizSettings>),
    Answer(usize),
    Acknowledge,
    End,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        None => Command::Acknowledge,
        Some("start") => match (words.next(), words.next()) {
            (None, _) => Command::Start(None),
            (Some(table), count) => {
                let table: u32 = table
                    .parse()
                    .with_context(|| format!("Invalid multiplication table: {:?}", table))?;
                let count: QuestionCount = count.unwrap_or("5").parse()?;
                Command::Start(Some(QuizSettings::new(table, count)?))
            }
        },
        Some("end") => Command::End,
        Some("quit") | Some("exit") => Command::Quit,
        Some(number) => {
            let number: usize = number
                .parse()
                .with_context(|| format!("Unknown command: {:?}", line.trim()))?;
            if number == 0 {
                return Err(anyhow!("Choices are numbered from 1"));
            }
            Command::Answer(number - 1)
        }
    };
    Ok(command)
}

fn load_settings() -> Result<Settings> {
    match env::var(SETTINGS_VARIABLE) {
        Ok(path) => Settings::open(Path::new(&path)),
        Err(_) => Ok(Settings::default()),
    }
}

fn print_usage(settings: &Settings) {
    let options: Vec<String> = QUESTION_COUNT_OPTIONS.iter().map(|c| c.to_string()).collect();
    println!("Multiplication table");
    println!(
        "  start [table {}-{}] [questions {}]   (default: {} {})",
        MIN_TABLE,
        MAX_TABLE,
        options.join("|"),
        settings.table,
        settings.question_count
    );
    println!("  <number>  pick an answer");
    println!("  <enter>   dismiss an alert");
    println!("  end       end the game");
    println!("  quit      leave");
}

fn run(game: &mut Game<TerminalOutput>, command: Command) -> Result<bool> {
    match command {
        Command::Start(selection) => {
            let selection = selection.unwrap_or_else(|| game.selection());
            game.begin(selection);
        }
        Command::Answer(index) => {
            game.answer(index)?;
        }
        Command::Acknowledge => {
            if game.alert().is_some() {
                game.acknowledge()?;
            }
        }
        Command::End => game.end(),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let settings = load_settings()?;
    info!("Loaded settings: {:?}", settings);
    print_usage(&settings);
    let mut game = Game::new(settings, TerminalOutput::new())?;

    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Could not read input: {}", e);
                    break;
                }
            }
        }
    });

    let mut last_tick = Instant::now();
    loop {
        match receiver.recv_timeout(TICK_DURATION) {
            Ok(line) => {
                let result = parse_command(&line).and_then(|command| run(&mut game, command));
                match result {
                    Ok(true) => (),
                    Ok(false) => break,
                    Err(e) => {
                        warn!("{:#}", e);
                        println!("{}", e);
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => (),
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = Instant::now();
        game.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    info!("Leaving");
    Ok(())
}
