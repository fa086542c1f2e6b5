use chrono::Local;
use clap::Parser;
use sitelog::application::{month_view, total_hours, triage, ConfigService, DueItem, TimesheetRow};
use sitelog::cli::{format_hours, format_month, format_triage, parse_date, Cli, Commands};
use sitelog::error::SitelogError;
use sitelog::infrastructure::Config;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SitelogError> {
    match cli.command {
        Some(Commands::Due {
            dates,
            label,
            today,
        }) => {
            let today = match today {
                Some(input) => parse_date(&input)?,
                None => Local::now().date_naive(),
            };

            let mut items = Vec::with_capacity(dates.len());
            for (index, raw) in dates.iter().enumerate() {
                // '-' stands for an item with no due date
                let due = if raw == "-" {
                    None
                } else {
                    Some(parse_date(raw)?)
                };
                let name = label
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| raw.to_string());
                items.push(DueItem::new(name, due));
            }

            print!("{}", format_triage(&triage(items, today)));
            Ok(())
        }
        Some(Commands::Hours {
            start,
            finish,
            lunch,
        }) => {
            let lunch = match lunch {
                Some(minutes) => minutes,
                None => {
                    let root = std::env::current_dir()?;
                    Config::load_or_default(&root)?.default_lunch_minutes
                }
            };

            let row = TimesheetRow::new(start, finish, lunch);
            println!("{}", format_hours(total_hours(&[row])));
            Ok(())
        }
        Some(Commands::Cal { year, month }) => {
            let today = Local::now().date_naive();
            let grid = month_view(year, month, today)?;
            print!("{}", format_month(&grid, Some(today)));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let root = std::env::current_dir()?;
            let service = ConfigService::new(root);

            if list {
                let config = service.list()?;
                println!("default_lunch_minutes = {}", config.default_lunch_minutes);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: sitelog config [--list | <key> [<value>]]");
                println!("Valid keys: default_lunch_minutes, created");
                Ok(())
            }
        }
        None => {
            println!("sitelog - Construction-site daily log utilities");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
