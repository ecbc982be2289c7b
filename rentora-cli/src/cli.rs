use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rentora_catalog::{BookingDuration, PriceBand};

#[derive(Debug, Parser)]
#[command(name = "rentora")]
#[command(about = "Browse, list and book short-term spaces across Delhi NCR")]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse all spaces, optionally filtered
    List(ListArgs),
    /// Show the category list
    Categories,
    /// Show one listing in detail
    Show { id: u32 },
    /// List your own space
    Add(AddArgs),
    /// Spaces you have listed
    Mine,
    /// Price breakdown for a booking
    Quote {
        id: u32,
        #[command(flatten)]
        duration: DurationArgs,
    },
    /// Reserve and pay for a space
    Book(BookArgs),
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Args, Default)]
pub struct ListArgs {
    /// Category id, or `all`
    #[arg(long)]
    pub category: Option<String>,
    /// Delhi, Noida or Greater Noida
    #[arg(long)]
    pub location: Option<String>,
    /// under-500, 500-2000 or 2000+
    #[arg(long)]
    pub price: Option<PriceBand>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub location: String,
    /// Hourly rate in rupees
    #[arg(long)]
    pub hourly: u32,
    /// Daily rate in rupees; four hours' worth if omitted
    #[arg(long)]
    pub daily: Option<u32>,
    #[arg(long)]
    pub description: Option<String>,
    /// Cover image URL or data URI
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub host: Option<String>,
    /// Repeat for each amenity; defaults to WiFi and AC
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
}

#[derive(Debug, Args, Default)]
pub struct DurationArgs {
    /// Number of hours (1-12)
    #[arg(long, conflicts_with = "daily")]
    pub hours: Option<u32>,
    /// Book the whole day at the daily rate
    #[arg(long)]
    pub daily: bool,
}

impl DurationArgs {
    pub fn duration(&self) -> BookingDuration {
        match (self.daily, self.hours) {
            (true, _) => BookingDuration::Daily,
            (false, Some(hours)) => BookingDuration::Hourly { hours },
            (false, None) => BookingDuration::default(),
        }
    }
}

#[derive(Debug, Args)]
pub struct BookArgs {
    pub id: u32,
    #[command(flatten)]
    pub duration: DurationArgs,
    /// Defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Cardholder name
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub card: String,
    /// MM/YY
    #[arg(long)]
    pub expiry: String,
    #[arg(long)]
    pub cvv: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "rentora", "list", "--category", "studio", "--price", "500-2000",
        ])
        .unwrap();

        match cli.command {
            Command::List(args) => {
                assert_eq!(args.category.as_deref(), Some("studio"));
                assert_eq!(args.price, Some(PriceBand::From500To2000));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_duration_flags() {
        let cli = Cli::try_parse_from(["rentora", "quote", "3", "--hours", "4"]).unwrap();
        match cli.command {
            Command::Quote { id, duration } => {
                assert_eq!(id, 3);
                assert_eq!(duration.duration(), BookingDuration::Hourly { hours: 4 });
            }
            other => panic!("unexpected command {:?}", other),
        }

        assert!(Cli::try_parse_from(["rentora", "quote", "3", "--hours", "4", "--daily"]).is_err());
        assert_eq!(DurationArgs::default().duration(), BookingDuration::Hourly { hours: 2 });
    }

    #[test]
    fn test_add_collects_amenities() {
        let cli = Cli::try_parse_from([
            "rentora", "add", "--title", "Loft", "--category", "coworking", "--location",
            "Delhi", "--hourly", "300", "--amenity", "WiFi", "--amenity", "Parking",
        ])
        .unwrap();

        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.amenities, vec!["WiFi", "Parking"]);
                assert_eq!(args.daily, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
