use tracing_subscriber::EnvFilter;

use crate::analyzers::{get_daylight_temperature, get_most_similar_date, get_sub40f_wind_chill};
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::metrics::{EuclideanSimilarity, NwsWindChill};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::DaylightTemp { date, dataset } => {
            match get_daylight_temperature(date, &dataset)? {
                Some(result) => {
                    println!("Daylight dry-bulb temperature for {date}:");
                    println!("  mean:    {:.2} F", result.mean);
                    println!("  std dev: {:.2} F", result.std_dev);
                }
                None => println!("No dry-bulb readings for {date}"),
            }
        }

        Commands::WindChill { date, dataset } => {
            let chill = get_sub40f_wind_chill(date, &dataset, &NwsWindChill::new())?;
            println!("Sub-40F wind chill for {date}: {chill} F");
        }

        Commands::MostSimilar {
            dataset_a,
            dataset_b,
        } => {
            match get_most_similar_date(&dataset_a, &dataset_b, &EuclideanSimilarity::new())? {
                Some(day) => println!("Most similar day: {day}"),
                None => println!("The datasets share no calendar days"),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_directives = if verbose { "lcd_analyzer=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
