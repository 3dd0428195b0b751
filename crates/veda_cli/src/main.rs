mod parse;

use std::path::PathBuf;

use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use veda_config::VedaConfig;
use veda_ephem::{AnalyticEphemeris, AyanamshaSystem, HouseSystem};
use veda_search::{
    BirthData, ChartConfig, ChartEntry, ChartSnapshot, DateMatch, calculate_chart, find_date,
    now_jd,
};
use veda_time::{CivilTime, jd_from_date, jd_to_date};
use veda_vedic_base::dasha::{DashaPeriod, current_dasha, vimshottari_mahadashas};
use veda_vedic_base::{
    ALL_GRAHAS, deg_to_dms, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};

use crate::parse::{SearchOverrides, load_observation, parse_date, parse_time};

#[derive(Parser)]
#[command(name = "veda", about = "Sidereal charts, Vimshottari dasha and reverse date search")]
struct Cli {
    /// Configuration file (TOML); defaults to $VEDA_CONFIG or ./veda.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart for a birth instant and place
    Chart {
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (HH:MM)
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Offset of the local clock from UTC, hours
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<f64>,
        /// Ayanamsha: lahiri, true-lahiri, kp, raman, fagan-bradley
        #[arg(long)]
        ayanamsha: Option<String>,
        /// House system: equal, porphyry
        #[arg(long)]
        houses: Option<String>,
        /// Report the dasha running on this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        reference: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Earliest date on which observed sign placements held
    FindDate {
        /// Observation JSON, e.g. '{"Jupiter": "Leo", "Saturn": "Virgo"}'
        #[arg(long, conflicts_with = "observation_file")]
        observation: Option<String>,
        /// File containing the observation JSON
        #[arg(long)]
        observation_file: Option<PathBuf>,
        /// First year searched
        #[arg(long)]
        start_year: Option<i32>,
        /// Last year searched
        #[arg(long)]
        end_year: Option<i32>,
        /// Placements allowed to mismatch
        #[arg(long)]
        tolerance: Option<u32>,
        /// Evaluate on one thread
        #[arg(long)]
        serial: bool,
        /// Give up after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Vimshottari dasha from a Moon longitude and birth date
    Dasha {
        /// Sidereal Moon longitude at birth, degrees
        #[arg(long, allow_hyphen_values = true)]
        moon_lon: f64,
        /// Birth date (YYYY-MM-DD), taken at 0h UT
        #[arg(long)]
        birth: String,
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        reference: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    let level = match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

fn date_of(jd: f64) -> String {
    jd_to_date(jd).map_or_else(|_| format!("JD {jd:.2}"), |d| d.to_string())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON encoding failed: {e}"))
}

fn entry_line(label: &str, e: &ChartEntry) -> String {
    format!(
        "{label:<8} {:<11} {:>12}  {} pada {}",
        format!("{} ({})", e.rashi.name(), e.rashi.western_name()),
        deg_to_dms(e.degrees_in_rashi).to_string(),
        e.nakshatra.name(),
        e.pada
    )
}

fn print_chart(chart: &ChartSnapshot, civil: &CivilTime, ayanamsha: AyanamshaSystem) {
    println!("Birth: {civil} (JD {:.5} UT)", chart.jd_ut);
    println!("Ayanamsha ({}): {:.4} deg", ayanamsha.name(), chart.ayanamsha);
    println!();
    println!("{}", entry_line("Lagna", &chart.lagna));
    for g in ALL_GRAHAS {
        println!("{}", entry_line(g.name(), chart.graha(g)));
    }
    println!();
    print!("Cusps:");
    for c in chart.cusps {
        print!(" {c:.2}");
    }
    println!();
    let d = &chart.dasha;
    println!(
        "Dasha: {} mahadasha until {} ({:.2} years left), {} antardasha until {}",
        d.mahadasha.lord.name(),
        date_of(d.mahadasha.end_jd),
        d.mahadasha.balance_years,
        d.antardasha.lord.name(),
        date_of(d.antardasha.end_jd)
    );
}

fn print_match(found: &DateMatch) {
    println!(
        "Match: {} ({}/{} placements, JD {:.1})",
        found.date, found.matched, found.required, found.jd
    );
    if !found.mismatched.is_empty() {
        let names: Vec<&str> = found.mismatched.iter().map(|g| g.name()).collect();
        println!("Mismatched: {}", names.join(", "));
    }
    let s = found.stats;
    println!(
        "Searched {} grid points, {} candidate eras, {} days ({} position queries)",
        s.grid_points, s.candidate_eras, s.fine_days, s.oracle_calls
    );
}

fn print_periods(periods: &[DashaPeriod]) {
    for p in periods {
        println!(
            "  {:>2}. {:<8} {} .. {}  ({:.2} years)",
            p.order,
            p.lord.name(),
            date_of(p.start_jd),
            date_of(p.end_jd),
            p.duration_years()
        );
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada), lord {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada,
                info.nakshatra.lord().name()
            );
        }

        Commands::Dasha {
            moon_lon,
            birth,
            reference,
            json,
        } => {
            let birth_jd = jd_from_date(parse_date(&birth)?);
            let reference_jd = match reference {
                Some(r) => jd_from_date(parse_date(&r)?),
                None => now_jd(),
            };
            let moon = normalize_360(moon_lon);
            let current = current_dasha(moon, birth_jd, reference_jd).map_err(|e| e.to_string())?;
            let periods = vimshottari_mahadashas(birth_jd, moon).map_err(|e| e.to_string())?;
            if json {
                println!(
                    "{}",
                    to_json(&serde_json::json!({ "current": current, "mahadashas": periods }))?
                );
            } else {
                println!(
                    "Mahadasha: {} ({:.4} years left, ends {})",
                    current.mahadasha.lord.name(),
                    current.mahadasha.balance_years,
                    date_of(current.mahadasha.end_jd)
                );
                println!(
                    "Antardasha: {} (ends {})",
                    current.antardasha.lord.name(),
                    date_of(current.antardasha.end_jd)
                );
                println!("First cycle:");
                print_periods(&periods);
            }
        }

        Commands::Chart {
            date,
            time,
            lat,
            lon,
            utc_offset,
            ayanamsha,
            houses,
            reference,
            json,
        } => {
            let cfg = VedaConfig::discover(cli.config.as_deref()).map_err(|e| e.to_string())?;
            let mut provider_config = cfg.provider;
            if let Some(name) = ayanamsha {
                provider_config.ayanamsha = AyanamshaSystem::from_name(&name)
                    .ok_or_else(|| format!("unknown ayanamsha: {name}"))?;
            }
            if let Some(name) = houses {
                provider_config.house_system = HouseSystem::from_name(&name)
                    .ok_or_else(|| format!("unknown house system: {name}"))?;
            }
            let (latitude, longitude) = match (lat, lon, cfg.location) {
                (Some(la), Some(lo), _) => (la, lo),
                (None, None, Some(loc)) => (loc.latitude, loc.longitude),
                _ => return Err("pass both --lat and --lon, or set [location] in the config".into()),
            };

            let d = parse_date(&date)?;
            let (hour, minute) = parse_time(&time)?;
            let birth = BirthData::new(d.year(), d.month(), d.day(), hour, minute, latitude, longitude);
            let chart_config = ChartConfig {
                utc_offset_hours: utc_offset.unwrap_or(cfg.chart.utc_offset_hours),
                dasha_reference_jd: reference
                    .as_deref()
                    .map(parse_date)
                    .transpose()?
                    .map(jd_from_date),
            };

            let provider = AnalyticEphemeris::new(provider_config);
            let chart = calculate_chart(&provider, &birth, &chart_config).map_err(|e| e.to_string())?;
            if json {
                println!("{}", to_json(&chart)?);
            } else {
                let civil = birth.civil_time(chart_config.utc_offset_hours);
                print_chart(&chart, &civil, provider_config.ayanamsha);
            }
        }

        Commands::FindDate {
            observation,
            observation_file,
            start_year,
            end_year,
            tolerance,
            serial,
            timeout_secs,
            json,
        } => {
            let cfg = VedaConfig::discover(cli.config.as_deref()).map_err(|e| e.to_string())?;
            let obs = load_observation(observation.as_deref(), observation_file.as_deref())?;
            let search = SearchOverrides {
                start_year,
                end_year,
                tolerance,
                serial,
                timeout_secs,
            }
            .apply(cfg.search_config());

            let provider = AnalyticEphemeris::new(cfg.provider);
            let found = find_date(&provider, &obs, &search).map_err(|e| e.to_string())?;
            if json {
                println!("{}", to_json(&found)?);
            } else {
                for r in obs.rejected() {
                    println!(
                        "Ignored: {} -> {} ({})",
                        r.body,
                        r.sign.as_deref().unwrap_or("-"),
                        r.reason.describe()
                    );
                }
                match &found {
                    Some(m) => print_match(m),
                    None if obs.is_empty() => println!("Observation is empty; nothing to search"),
                    None => println!(
                        "No matching date in {}..={}",
                        search.start_year, search.end_year
                    ),
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
