use std::{io::Write, path::PathBuf};

use calorie_burnt::{SharedActivityTracker, api};
use csv::Reader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ActivityCsv {
    activity: String,
    minutes: i64,
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file location with columns `Activity,Minutes`
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("activities.csv"), required = false)]
    pub input: PathBuf,
    /// Print known activities and their calorie rate, then exit
    #[arg(short, long, default_value_t = false, required = false)]
    pub list: bool,
    /// Print the whole log as json instead of a table
    #[arg(short, long, default_value_t = false, required = false)]
    pub print: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Record every row the catalog knows. Returns number of skipped rows.
fn load_log(
    rows: impl IntoIterator<Item = ActivityCsv>,
    tracker: &SharedActivityTracker,
) -> usize {
    let mut skipped = 0;

    for ActivityCsv { activity, minutes } in rows {
        match api::activity_burn(&activity, minutes) {
            Ok(burn) => api::tracker_record(tracker, burn),
            Err(e) => {
                tracing::warn!("Skipping '{activity}': {e}");
                skipped += 1;
            }
        }
    }

    skipped
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let Args { input, list, print } = <Args as clap::Parser>::parse();

    let mut io = std::io::stdout().lock();

    if list {
        for (name, rate) in api::list_activities() {
            writeln!(io, "{name}: {rate} kcal/min")?;
        }

        return Ok(());
    }

    let mut reader = Reader::from_path(&input)
        .map_err(|e| format!("Failed to open input file. Reason: {e}"))?;

    let rows = reader
        .deserialize::<ActivityCsv>()
        .filter_map(|row| {
            row.map_err(|e| tracing::warn!("Skipping malformed row: {e}"))
                .ok()
        })
        .collect::<Vec<_>>();

    let tracker = SharedActivityTracker::new();
    let skipped = load_log(rows, &tracker);

    match print {
        true => writeln!(io, "{}", serde_json::to_string_pretty(&tracker.report())?)?,
        false => {
            for record in api::tracker_records(&tracker) {
                writeln!(
                    io,
                    "{} | {:20} | {:4} min | {:8.2} kcal",
                    record.timestamp,
                    record.activity_name,
                    record.duration_minutes,
                    record.calories_burned
                )?;
            }
        }
    }

    writeln!(
        io,
        "Total: {} kcal ({skipped} skipped)",
        api::tracker_total(&tracker)
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
Activity,Minutes
วิ่ง,30
โยคะ,15
skydiving,10
นอน,0
เล่นเกม,45
";

    #[test]
    fn records_known_activities_only() {
        let rows = Reader::from_reader(LOG.as_bytes())
            .deserialize::<ActivityCsv>()
            .collect::<Result<Vec<_>, _>>()
            .expect("fixture is well formed");

        let tracker = SharedActivityTracker::new();
        let skipped = load_log(rows, &tracker);

        assert_eq!(skipped, 2);
        assert_eq!(tracker.records().len(), 3);
        // 240 + 45 + 67.5
        assert_eq!(api::tracker_total(&tracker), 352.5);
    }
}
