use clap::Parser;
use log::info;

use hausa_trainer::config::{Args, Command, Config};
use hausa_trainer::store::short_title;
use hausa_trainer::{
    AppError, Catalog, DeadlineScheduler, FileStore, QuizEngine, ScoreStore, Trainer,
    builtin_catalog, load_catalog_from_json, logging,
};

fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = logging::init(&config) {
        eprintln!("Could not open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), AppError> {
    let mut scores = ScoreStore::new(FileStore::open(config.data_dir.clone())?);
    info!("using data directory {}", config.data_dir.display());

    match config.command {
        Command::Play => {
            let catalog = load_catalog(&config)?;
            let engine = QuizEngine::new(catalog, DeadlineScheduler::new())
                .with_auto_advance_delay(config.auto_advance_delay);
            Trainer::with_engine(engine, scores).run()
        }
        Command::Stats => {
            print_stats(&scores);
            Ok(())
        }
        Command::ClearHistory => {
            scores.clear_all()?;
            println!("All results deleted.");
            Ok(())
        }
    }
}

fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    match &config.catalog {
        Some(path) => Ok(load_catalog_from_json(path)?),
        None => Ok(builtin_catalog()?),
    }
}

fn print_stats(scores: &ScoreStore) {
    let history = scores.load_history();
    if history.is_empty() {
        println!("No results yet. Finish a quiz to see your statistics here.");
        return;
    }

    let stats = hausa_trainer::compute_stats(&history);
    println!("Attempts: {}", stats.total_attempts);
    println!("Average:  {}%", stats.average_percentage);
    println!("Best:     {}%", stats.best_percentage);
    println!(
        "Correct:  {}/{}",
        stats.total_correct_answers, stats.total_questions_answered
    );

    println!();
    println!(
        "Quiz progress ({}% of discovered quizzes done)",
        stats.completion_percentage()
    );
    for (id, progress) in &stats.per_quiz_progress {
        println!(
            "  Q{:<3} {:<26} best {:>3}%  ({} attempt{})",
            id,
            progress.short_title,
            progress.best_percentage,
            progress.attempt_count,
            if progress.attempt_count > 1 { "s" } else { "" }
        );
    }

    println!();
    println!("Recent results");
    for attempt in &history {
        println!(
            "  {:<32} {}/{} ({}%)  {}",
            short_title(attempt.quiz_title()),
            attempt.score(),
            attempt.total_questions(),
            attempt.percentage(),
            attempt.completed_at()
        );
    }
}
