use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kundli_config::KundliConfig;
use kundli_engine::{BirthRequest, KundliEngine, KundliResponse};
use kundli_geo::{GeoCoordinate, StaticResolver};
use kundli_time::{UtcTime, gst_hours};
use kundli_vedic_base::{
    ayanamsha_deg, deg_to_dms, equal_bhavas, lagna_longitude_deg, nakshatra_from_longitude,
    rashi_from_longitude, sidereal_longitude, sun_tropical_longitude_deg,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundli", about = "Vedic birth chart (kundli) CLI", version)]
struct Cli {
    /// Path to a TOML config file (default: ./kundli.toml if present)
    #[arg(long, global = true, env = "KUNDLI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full birth chart as JSON
    Chart {
        /// Full name
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD, UTC)
        #[arg(long)]
        dob: String,
        /// Time of birth (HH:MM or HH:MM:SS, UTC)
        #[arg(long)]
        tob: String,
        /// Place of birth
        #[arg(long)]
        pob: String,
        /// Gender (echoed back)
        #[arg(long)]
        gender: Option<String>,
        /// Latitude in degrees; skips the geocoder when given with --lng
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in degrees east
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },
    /// Julian Day of a UTC date and time
    Jd {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Time (HH:MM or HH:MM:SS)
        time: String,
    },
    /// Greenwich sidereal time in hours
    Gst {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Lahiri ayanamsa
    Ayanamsa {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Tropical and sidereal Sun with nakshatra
    Sun {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Simplified ascendant (lagna)
    Lagna {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees east
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// 12 equal houses from an ascendant longitude
    Houses {
        /// Ascendant longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        asc: f64,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print a chart response as JSON. Returns false for an error body.
fn print_response(response: &KundliResponse) -> anyhow::Result<bool> {
    println!("{}", serde_json::to_string_pretty(response)?);
    match response {
        KundliResponse::Chart(_) => Ok(true),
        KundliResponse::Error(err) => {
            warn!(kind = ?err.kind, error = %err.error, "chart not generated");
            Ok(false)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = KundliConfig::load(cli.config.as_deref())?;
    init_tracing(&config.log_level);
    debug!(
        geocoder = %config.geocoder.base_url,
        timeout_secs = config.geocoder.timeout.as_secs(),
        "configuration loaded"
    );

    match cli.command {
        Commands::Chart {
            name,
            dob,
            tob,
            pob,
            gender,
            lat,
            lng,
        } => {
            let mut request = BirthRequest::new(&name, &dob, &tob, &pob);
            request.gender = gender;

            let response = match (lat, lng) {
                (Some(lat), Some(lng)) => {
                    let resolver = StaticResolver::fixed(GeoCoordinate::new(lat, lng)?);
                    KundliEngine::new(resolver, &config.default_gender)
                        .respond(&request)
                        .await
                }
                _ => {
                    KundliEngine::from_config(&config)?
                        .respond(&request)
                        .await
                }
            };

            if !print_response(&response)? {
                std::process::exit(1);
            }
        }

        Commands::Jd { date, time } => {
            let t = UtcTime::parse(&date, &time)?;
            println!("{t}");
            println!("JD: {:.6}", t.to_jd());
        }

        Commands::Gst { jd } => {
            let gst = gst_hours(jd);
            println!("GST: {gst:.9} h ({:.6} deg)", gst * 15.0);
        }

        Commands::Ayanamsa { jd } => {
            let aya = ayanamsha_deg(jd);
            println!("Lahiri ayanamsa: {aya:.6} deg ({})", deg_to_dms(aya));
        }

        Commands::Sun { jd } => {
            let tropical = sun_tropical_longitude_deg(jd);
            let aya = ayanamsha_deg(jd);
            let sidereal = sidereal_longitude(tropical, aya);
            let trop_info = rashi_from_longitude(tropical);
            let sid_info = rashi_from_longitude(sidereal);
            let nak = nakshatra_from_longitude(sidereal)?;
            println!(
                "Tropical: {tropical:.6} deg  {} {}",
                trop_info.rashi.western_name(),
                trop_info.dms
            );
            println!(
                "Sidereal: {sidereal:.6} deg  {} ({}) {}",
                sid_info.rashi.name(),
                sid_info.rashi.western_name(),
                sid_info.dms
            );
            println!(
                "Nakshatra: {} (index {}) - Pada {}, lord {}",
                nak.nakshatra.name(),
                nak.nakshatra_index,
                nak.pada,
                nak.lord.english_name()
            );
        }

        Commands::Lagna { jd, lat, lng } => {
            let coord = GeoCoordinate::new(lat, lng)?;
            let lagna = lagna_longitude_deg(jd, coord.lat(), coord.lng());
            let info = rashi_from_longitude(lagna);
            println!(
                "Lagna: {lagna:.6} deg  {} ({}) {}",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms
            );
        }

        Commands::Houses { asc } => {
            for b in equal_bhavas(asc) {
                println!(
                    "{:>2} {:<8} {:>10.4} deg  {} ({}) {}",
                    b.number,
                    b.name(),
                    b.start_deg,
                    b.rashi.rashi.name(),
                    b.rashi.rashi.western_name(),
                    b.rashi.dms
                );
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon)?;
            println!(
                "{} (index {}) - Pada {}, lord {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.lord.name(),
                info.degrees_in_nakshatra
            );
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            let sign = if deg < 0.0 { "-" } else { "" };
            println!("{sign}{dms}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use kundli_engine::{ErrorKind, ErrorResponse};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn error_response_is_reported_and_logged() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let response = KundliResponse::Error(ErrorResponse {
            error: "Could not find coordinates for place of birth: Atlantis".into(),
            kind: ErrorKind::Geocoding,
            details: None,
            required_fields: None,
        });

        let ok = tracing::subscriber::with_default(subscriber, || print_response(&response))
            .unwrap();
        assert!(!ok);

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"), "logs: {text}");
        assert!(text.contains("chart not generated"));
        assert!(text.contains("Geocoding"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn chart_with_offline_coordinates() {
        let cli = Cli::try_parse_from([
            "kundli", "chart", "--name", "A", "--dob", "2000-01-01", "--tob", "12:00", "--pob",
            "Quito", "--lat", "-0.18", "--lng", "-78.47",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { lat, lng, .. } => {
                assert_eq!(lat, Some(-0.18));
                assert_eq!(lng, Some(-78.47));
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn lat_requires_lng() {
        assert!(
            Cli::try_parse_from([
                "kundli", "chart", "--name", "A", "--dob", "2000-01-01", "--tob", "12:00",
                "--pob", "X", "--lat", "1.0",
            ])
            .is_err()
        );
    }

    #[test]
    fn negative_positional_longitude() {
        let cli = Cli::try_parse_from(["kundli", "rashi", "-15"]).unwrap();
        assert!(matches!(cli.command, Commands::Rashi { lon } if lon == -15.0));
    }
}
