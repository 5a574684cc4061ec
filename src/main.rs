use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use trenlog::application::{
    author_overview, entries_for_author_name, list_entries, sample_diary, search_entries,
};
use trenlog::cli::{format_author_overview, format_entry_list, Cli, Commands};
use trenlog::error::{DiaryError, Result};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // No persistence: every invocation works on the seeded demo diary
    let diary = sample_diary()?;

    match cli.command {
        Some(Commands::Show) => {
            println!("-WorkoutDiary-");
            print!("{}", format_entry_list(&list_entries(&diary)));
            Ok(())
        }
        Some(Commands::Authors) => {
            print!("{}", format_author_overview(&author_overview(&diary)));
            Ok(())
        }
        Some(Commands::Search { word, from, to }) => {
            if let Some(word) = word {
                let matches = search_entries::search_by_word(&diary, &word)?;
                print!("{}", format_entry_list(&matches));
                Ok(())
            } else if let (Some(from), Some(to)) = (&from, &to) {
                let matches = search_entries::search_by_date(
                    &diary,
                    parse_search_date(from)?,
                    parse_search_date(to)?,
                )?;
                print!("{}", format_entry_list(&matches));
                Ok(())
            } else {
                // Neither a word nor a full date range, show usage
                println!(
                    "Usage: trenlog search [--word <WORD> | --from <DD-MM-YYYY> --to <DD-MM-YYYY>]"
                );
                Ok(())
            }
        }
        Some(Commands::Author { name }) => {
            let results = entries_for_author_name(&diary, &name)?;
            if results.is_empty() {
                println!("No authors found matching '{}'", name);
                return Ok(());
            }
            for (author, entries) in results {
                println!("{}", author);
                print!("{}", format_entry_list(&entries));
            }
            Ok(())
        }
        Some(Commands::Export) => {
            let json = serde_json::to_string_pretty(&list_entries(&diary))?;
            println!("{}", json);
            Ok(())
        }
        None => {
            println!("trenlog - Workout diary demo application");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Parse a DD-MM-YYYY search bound and widen it to start of day, UTC.
fn parse_search_date(input: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%d-%m-%Y").map_err(|_| {
        DiaryError::InvalidArgument(format!("invalid date '{}', expected DD-MM-YYYY", input))
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
