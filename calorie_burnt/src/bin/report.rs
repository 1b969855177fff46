use std::{fs::File, io::Write, path::PathBuf};

use calorie_burnt::{CalorieSummary, api};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PersonCsv {
    name: String,
    age: i64,
    weight: f64,
    height: f64,
    gender: String,
    intensity: String,
}

#[derive(Debug, serde::Serialize)]
pub struct Report {
    name: String,
    bmi: f64,
    bmi_category: &'static str,
    bmr: f64,
    activity_level: &'static str,
    tdee: f64,
    lose_weight: f64,
    maintain: f64,
    gain_weight: f64,
}

impl From<&CalorieSummary> for Report {
    fn from(summary: &CalorieSummary) -> Self {
        Self {
            name: summary.person.name.clone(),
            bmi: summary.person.bmi,
            bmi_category: summary.person.bmi_category.label(),
            bmr: summary.bmr,
            activity_level: summary.activity_level.name(),
            tdee: summary.tdee,
            lose_weight: summary.daily_goal.lose_weight,
            maintain: summary.daily_goal.maintain,
            gain_weight: summary.daily_goal.gain_weight,
        }
    }
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file location with columns `Name,Age,Weight,Height,Gender,Intensity`
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("people.csv"), required = false)]
    pub input: PathBuf,
    /// Output csv file. _Note_: will truncate old file if exists
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("report.csv"), required = false)]
    pub output: PathBuf,
    /// Don't save changes
    #[arg(short, long, default_value_t = false, required = false)]
    pub dry: bool,
    /// Print summaries to stdout as json
    #[arg(short, long, default_value_t = false, required = false)]
    pub print: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn summarize(
    PersonCsv {
        name,
        age,
        weight,
        height,
        gender,
        intensity,
    }: PersonCsv,
) -> calorie_burnt::Result<CalorieSummary> {
    let person = api::create_person(&name, age, weight, height, &gender)?;

    api::summary(&person, &intensity)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let Args {
        input,
        output,
        dry,
        print,
    } = <Args as clap::Parser>::parse();

    let mut rdr = csv::Reader::from_reader(
        File::open(input).map_err(|e| format!("Failed to read input file. Reason: {e}"))?,
    );

    let mut wrt = match dry {
        true => None,
        false => Some(
            csv::Writer::from_path(&output)
                .map_err(|e| format!("Failed to open output file. Reason: {e}"))?,
        ),
    };

    let mut io = std::io::stdout().lock();
    let mut total = 0;

    for (line, row) in rdr.deserialize::<PersonCsv>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("Skipping row {}: {e}", line + 1);
                continue;
            }
        };

        let summary = match summarize(row) {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Skipping row {}: {e}", line + 1);
                continue;
            }
        };

        total += 1;

        if print {
            writeln!(io, "{}", serde_json::to_string(&summary)?)?;
        }

        if let Some(wrt) = &mut wrt {
            wrt.serialize(Report::from(&summary))?;
        }
    }

    println!("Total: {total} people");

    if let Some(mut wrt) = wrt {
        println!("Saving to {}", output.to_string_lossy());
        wrt.flush()?;
    }

    println!("Done!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE: &str = "\
Name,Age,Weight,Height,Gender,Intensity
Somchai,30,75,175,male,moderate
Malee,28,55,160,female,sedentary
Ghost,30,75,175,male,lazy
";

    fn rows() -> Vec<PersonCsv> {
        csv::Reader::from_reader(PEOPLE.as_bytes())
            .deserialize::<PersonCsv>()
            .collect::<Result<_, _>>()
            .expect("fixture is well formed")
    }

    #[test]
    fn summarizes_valid_rows() {
        let reports = rows()
            .into_iter()
            .filter_map(|row| summarize(row).ok())
            .map(|summary| Report::from(&summary))
            .collect::<Vec<_>>();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "Somchai");
        assert_eq!(reports[0].bmr, 1698.75);
        assert_eq!(reports[0].tdee, 2633.06);
        assert_eq!(reports[0].activity_level, "MODERATELY_ACTIVE");
        assert_eq!(reports[1].bmi_category, "normal");
    }

    #[test]
    fn rejects_unknown_intensity() {
        let ghost = rows().pop().expect("three rows");
        assert!(summarize(ghost).is_err());
    }
}
