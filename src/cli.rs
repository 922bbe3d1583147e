use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::daily_intake::Gender;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Nutrition CSV file, repeatable; rows are searched in the order given
    #[arg(short, long = "data", required = true)]
    pub data_files: Vec<PathBuf>,

    /// Never query the translation and USDA services
    #[arg(long)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Annotate recipe ingredient lines such as "닭가슴살 1개(200g)"
    Ingredient {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Total the calories of a list of foods
    Meal {
        #[arg(required = true)]
        foods: Vec<String>,
    },
    /// Compare a day's meals with the recommended intake
    Daily {
        /// Body weight in kg
        #[arg(long)]
        weight: f64,
        #[arg(long, value_enum)]
        gender: Gender,
        #[arg(long, value_delimiter = ',')]
        breakfast: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        lunch: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        dinner: Vec<String>,
    },
    /// List the food names available in the loaded tables
    Foods,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_daily_command() {
        let cli = Cli::try_parse_from([
            "recipe-calories",
            "--offline",
            "--data",
            "a.csv",
            "-d",
            "b.csv",
            "daily",
            "--weight",
            "70",
            "--gender",
            "male",
            "--breakfast",
            "쌀밥,김치",
        ])
        .unwrap();

        assert!(cli.offline);
        assert_eq!(cli.data_files, vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        match cli.command {
            Command::Daily { weight, gender, breakfast, lunch, .. } => {
                assert_eq!(weight, 70.0);
                assert_eq!(gender, Gender::Male);
                assert_eq!(breakfast, vec!["쌀밥", "김치"]);
                assert!(lunch.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_data_file_required() {
        assert!(Cli::try_parse_from(["recipe-calories", "foods"]).is_err());
    }
}
