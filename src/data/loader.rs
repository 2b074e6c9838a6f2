use std::path::Path;

use anyhow::{Context, Result, bail};
use image::RgbaImage;

use super::points::DataPoint;

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// Chart data points
// ---------------------------------------------------------------------------

/// Load chart points from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row `label,value`
/// * `.json` – `[{ "label": "A", "value": 10 }, ...]`
///
/// Every row goes through the same validation as a hand-entered point; one
/// bad row rejects the whole file.
pub fn load_points(path: &Path) -> Result<Vec<DataPoint>> {
    match extension(path).as_str() {
        "csv" => {
            let text = std::fs::read_to_string(path).context("reading CSV file")?;
            parse_points_csv(&text)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_points_json(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Save chart points, format chosen by extension.
pub fn save_points(path: &Path, points: &[DataPoint]) -> Result<()> {
    let text = match extension(path).as_str() {
        "csv" => points_to_csv(points)?,
        "json" => serde_json::to_string_pretty(points).context("encoding JSON")?,
        other => bail!("Unsupported file extension: .{other}"),
    };
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

pub fn parse_points_csv(text: &str) -> Result<Vec<DataPoint>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let label_idx = headers
        .iter()
        .position(|h| h == "label")
        .context("CSV missing 'label' column")?;
    let value_idx = headers
        .iter()
        .position(|h| h == "value")
        .context("CSV missing 'value' column")?;

    let mut points = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let label = record.get(label_idx).unwrap_or("");
        let value = record.get(value_idx).unwrap_or("");
        let point =
            DataPoint::parse(label, value).with_context(|| format!("CSV row {row_no}"))?;
        points.push(point);
    }
    Ok(points)
}

fn points_to_csv(points: &[DataPoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for p in points {
        writer.serialize(p).context("encoding CSV row")?;
    }
    let bytes = writer.into_inner().context("flushing CSV")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

/// JSON rows are re-validated: labels are trimmed, values must be finite.
pub fn parse_points_json(text: &str) -> Result<Vec<DataPoint>> {
    let rows: Vec<DataPoint> = serde_json::from_str(text).context("parsing JSON")?;
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            if !row.value.is_finite() {
                bail!("Row {i}: value is not finite");
            }
            DataPoint::parse(&row.label, &row.value.to_string())
                .with_context(|| format!("Row {i}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Word lists
// ---------------------------------------------------------------------------

/// Plain text, words separated by commas or line breaks.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(split_word_file(&text))
}

pub fn split_word_file(text: &str) -> Vec<String> {
    text.split([',', '\n', '\r'])
        .filter(|w| !w.trim().is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

pub fn save_png(path: &Path, img: &RgbaImage) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::points::DataTable;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rusty-classroom-{}-{name}", std::process::id()))
    }

    #[test]
    fn csv_round_trip_of_default_points() {
        let table = DataTable::default();
        let path = temp_path("points.csv");
        save_points(&path, table.points()).unwrap();
        let loaded = load_points(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, table.points());
    }

    #[test]
    fn json_round_trip_of_default_points() {
        let table = DataTable::default();
        let path = temp_path("points.json");
        save_points(&path, table.points()).unwrap();
        let loaded = load_points(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, table.points());
    }

    #[test]
    fn csv_header_order_and_case_do_not_matter() {
        let pts = parse_points_csv("Value,Label\n3, x \n4.5,y\n").unwrap();
        assert_eq!(
            pts,
            vec![
                DataPoint { label: "x".into(), value: 3.0 },
                DataPoint { label: "y".into(), value: 4.5 },
            ]
        );
    }

    #[test]
    fn one_bad_row_rejects_the_file() {
        let err = parse_points_csv("label,value\nA,1\nB,abc\n").unwrap_err();
        assert!(format!("{err:#}").contains("row 1"));
        assert!(parse_points_csv("label,value\n ,1\n").is_err());
        assert!(parse_points_csv("name,value\nA,1\n").is_err());
        assert!(parse_points_json(r#"[{"label": "", "value": 1}]"#).is_err());
        assert!(parse_points_json(r#"[{"label": "A"}]"#).is_err());
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        assert!(load_points(Path::new("data.xlsx")).is_err());
        assert!(save_points(Path::new("data.txt"), &[]).is_err());
    }

    #[test]
    fn word_file_splits_on_commas_and_lines() {
        assert_eq!(
            split_word_file("sun, moon\nstars\r\n,\ncomet"),
            vec!["sun", " moon", "stars", "comet"]
        );
    }
}
