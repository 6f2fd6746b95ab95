use clap::{Parser, Subcommand};
use natal::{
    BirthData, Body, Sign, chart_for, geocentric_longitude, moon_longitude, sun_longitude,
    sun_sign_for_date, to_julian_day,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "natal", about = "Natal chart engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a natal chart from birth data
    Chart {
        /// Birth year (negative = BCE, astronomical convention)
        #[arg(long)]
        year: i32,
        /// Birth month (1-12)
        #[arg(long)]
        month: u32,
        /// Birth day of month (default 1)
        #[arg(long)]
        day: Option<u32>,
        /// Birth hour, local time (default 12)
        #[arg(long)]
        hour: Option<u32>,
        /// Birth minute (default 0)
        #[arg(long)]
        minute: Option<u32>,
        /// Latitude in degrees, north positive (default 0)
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive (default 0)
        #[arg(long)]
        lon: Option<f64>,
        /// Timezone offset from UT in hours (default 0)
        #[arg(long)]
        timezone: Option<f64>,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sun sign for a calendar date (traditional boundaries)
    SunSign {
        /// Month (1-12)
        month: u32,
        /// Day of month
        day: u32,
    },
    /// Julian Day for a calendar date and UT time
    JulianDay {
        /// Year
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Day of month
        day: u32,
        /// Hour, UT (default 0)
        #[arg(default_value = "0")]
        hour: f64,
        /// Minute (default 0)
        #[arg(default_value = "0")]
        minute: f64,
    },
    /// Geocentric ecliptic longitude of a body at a UT date
    Position {
        /// Body name (sun, moon, mercury .. pluto)
        body: String,
        /// Year
        #[arg(long)]
        year: i32,
        /// Month (1-12)
        #[arg(long)]
        month: u32,
        /// Day of month
        #[arg(long)]
        day: u32,
        /// Hour, UT (default 12)
        #[arg(long, default_value = "12")]
        hour: f64,
    },
}

fn parse_body(s: &str) -> Body {
    match s.to_lowercase().as_str() {
        "sun" => Body::Sun,
        "moon" => Body::Moon,
        "mercury" => Body::Mercury,
        "venus" => Body::Venus,
        "mars" => Body::Mars,
        "jupiter" => Body::Jupiter,
        "saturn" => Body::Saturn,
        "uranus" => Body::Uranus,
        "neptune" => Body::Neptune,
        "pluto" => Body::Pluto,
        other => {
            eprintln!("Invalid body name: {other}");
            eprintln!("Valid: sun, moon, mercury, venus, mars, jupiter, saturn, uranus, neptune, pluto");
            std::process::exit(1);
        }
    }
}

fn fmt_position(sign: Sign, degrees: f64) -> String {
    format!("{degrees:.2}\u{b0} {sign}")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            year,
            month,
            day,
            hour,
            minute,
            lat,
            lon,
            timezone,
            json,
        } => {
            let birth = BirthData {
                year,
                month,
                day,
                hour,
                minute,
                latitude: lat,
                longitude: lon,
                timezone,
            };
            let chart = chart_for(&birth).unwrap_or_else(|e| {
                eprintln!("Failed to compute chart: {e}");
                std::process::exit(1);
            });

            if json {
                let out = serde_json::to_string_pretty(&chart).unwrap_or_else(|e| {
                    eprintln!("Failed to serialize chart: {e}");
                    std::process::exit(1);
                });
                println!("{out}");
                return;
            }

            for p in chart.planets() {
                let retro = if p.retrograde { " R" } else { "" };
                println!(
                    "{:<8} {} (house {}){retro}",
                    p.planet.to_string(),
                    fmt_position(p.sign, p.degrees),
                    p.house
                );
            }
            println!(
                "{:<8} {}",
                "asc",
                fmt_position(chart.ascendant.sign, chart.ascendant.degrees)
            );
            println!(
                "{:<8} {}",
                "mc",
                fmt_position(chart.midheaven.sign, chart.midheaven.degrees)
            );
            for a in &chart.aspects {
                println!(
                    "{} {} {} (orb {:.2}\u{b0})",
                    a.planet1, a.aspect_symbol, a.planet2, a.orb
                );
            }
        }

        Commands::SunSign { month, day } => {
            println!("{}", sun_sign_for_date(month, day));
        }

        Commands::JulianDay {
            year,
            month,
            day,
            hour,
            minute,
        } => {
            println!("{:.5}", to_julian_day(year, month, day, hour, minute));
        }

        Commands::Position {
            body,
            year,
            month,
            day,
            hour,
        } => {
            let body = parse_body(&body);
            let jd = to_julian_day(year, month, day, hour, 0.0);
            let lon_deg = match body {
                Body::Sun => sun_longitude(jd),
                Body::Moon => moon_longitude(jd),
                other => geocentric_longitude(other, jd).unwrap_or_else(|e| {
                    eprintln!("Failed to compute position: {e}");
                    std::process::exit(1);
                }),
            };
            println!("{body}: {lon_deg:.4}\u{b0}");
        }
    }
}
