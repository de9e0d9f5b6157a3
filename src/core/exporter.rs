use crate::core::{OutputFormat, UserField, UserRecord};
use crate::utils::error::{EtlError, Result};

pub fn render(format: OutputFormat, records: &[UserRecord]) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => render_json(records),
        OutputFormat::Csv => render_csv(records),
    }
}

/// Indented JSON array keyed by the column labels.
pub fn render_json(records: &[UserRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Header row plus one row per record. The header is written even when
/// there are no records.
pub fn render_csv(records: &[UserRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(UserField::ALL.iter().map(|field| field.label()))?;
    for record in records {
        writer.write_record(UserField::ALL.iter().map(|field| record.get(*field)))?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<UserRecord> {
        vec![
            UserRecord::new("Ann", "Lee", "a@x.com", "1").unwrap(),
            UserRecord::new("Bob \"B\"", "Ray", "bob,ray@x.com", "2").unwrap(),
            UserRecord::new("Cy", "Multi\nLine", "c@x.com", "3").unwrap(),
        ]
    }

    #[test]
    fn test_json_round_trip() {
        let records = sample();
        let bytes = render(OutputFormat::Json, &records).unwrap();

        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with("[\n  {"));

        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.len(), 3);
        for (value, record) in parsed.iter().zip(&records) {
            let object = value.as_object().unwrap();
            assert_eq!(object.len(), 4);
            for field in UserField::ALL {
                assert_eq!(object[field.label()], record.get(field));
            }
        }

        let decoded: Vec<UserRecord> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_csv_quotes_special_characters() {
        let bytes = render(OutputFormat::Csv, &sample()).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();

        assert!(text.starts_with("First name,Last name,Email,Source ID\n"));
        assert!(text.contains("\"bob,ray@x.com\""));
        assert!(text.contains("\"Bob \"\"B\"\"\""));

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            ["First name", "Last name", "Email", "Source ID"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "Bob \"B\"");
        assert_eq!(&rows[1][2], "bob,ray@x.com");
        assert_eq!(&rows[2][1], "Multi\nLine");
    }

    #[test]
    fn test_csv_empty_collection_has_header_only() {
        let bytes = render_csv(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "First name,Last name,Email,Source ID\n"
        );
    }

    #[test]
    fn test_json_empty_collection() {
        let bytes = render_json(&[]).unwrap();
        assert_eq!(bytes, b"[]");
    }
}
