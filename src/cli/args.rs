use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lcd-analyzer")]
#[command(about = "Statistics and similarity queries over NOAA LCD hourly weather observations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mean and standard deviation of dry-bulb temperature between sunrise and sunset
    DaylightTemp {
        #[arg(short, long, help = "Date to evaluate (YYYY-MM-DD)")]
        date: NaiveDate,

        #[arg(short = 's', long, help = "LCD csv export")]
        dataset: PathBuf,
    },

    /// Wind chill over sub-40F readings, rounded to the nearest integer
    WindChill {
        #[arg(short, long, help = "Date to evaluate (YYYY-MM-DD)")]
        date: NaiveDate,

        #[arg(short = 's', long, help = "LCD csv export")]
        dataset: PathBuf,
    },

    /// Shared calendar day on which two datasets were most similar
    MostSimilar {
        #[arg(short = 'a', long, help = "First LCD csv export")]
        dataset_a: PathBuf,

        #[arg(short = 'b', long, help = "Second LCD csv export")]
        dataset_b: PathBuf,
    },
}
