//! CSV import/export: player rosters in, standings and pairings out.

use crate::models::{Pairing, StandingsRow};
use crate::store::StoreError;
use serde::Deserialize;
use std::io::{Read, Write};

#[derive(Deserialize)]
struct RosterEntry {
    name: String,
}

/// Read the `name` column of a roster CSV (header row required). Blank names are skipped.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<String>, StoreError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut names = Vec::new();
    for entry in rdr.deserialize::<RosterEntry>() {
        let entry = entry?;
        if !entry.name.is_empty() {
            names.push(entry.name);
        }
    }
    Ok(names)
}

/// Write standings as CSV with a header row: `rank,id,name,wins,matches`.
pub fn write_standings<W: Write>(rows: &[StandingsRow], writer: W) -> Result<(), StoreError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["rank", "id", "name", "wins", "matches"])?;
    for (i, r) in rows.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            r.id.to_string(),
            r.name.clone(),
            r.wins.to_string(),
            r.matches.to_string(),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write pairings as CSV with a header row: `table,id_1,name_1,id_2,name_2`.
pub fn write_pairings<W: Write>(pairings: &[Pairing], writer: W) -> Result<(), StoreError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["table", "id_1", "name_1", "id_2", "name_2"])?;
    for (i, p) in pairings.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            p.id_1.to_string(),
            p.name_1.clone(),
            p.id_2.to_string(),
            p.name_2.clone(),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_reads_name_column() {
        let input = "name,club\n Ada ,North\n,South\nBo,East\n";
        let names = read_roster(input.as_bytes()).unwrap();
        assert_eq!(names, vec!["Ada", "Bo"]);
    }

    #[test]
    fn roster_without_name_column_fails() {
        let input = "player\nAda\n";
        assert!(matches!(read_roster(input.as_bytes()), Err(StoreError::Csv(_))));
    }

    #[test]
    fn standings_csv_has_rank_column() {
        let rows = vec![
            StandingsRow {
                id: 3,
                name: "Cy".into(),
                wins: 2,
                matches: 2,
            },
            StandingsRow {
                id: 1,
                name: "Ada".into(),
                wins: 0,
                matches: 2,
            },
        ];
        let mut out = Vec::new();
        write_standings(&rows, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "rank,id,name,wins,matches\n1,3,Cy,2,2\n2,1,Ada,0,2\n"
        );
    }

    #[test]
    fn pairings_csv_numbers_tables() {
        let pairings = vec![Pairing {
            id_1: 1,
            name_1: "Ada".into(),
            id_2: 2,
            name_2: "Bo, Jr".into(),
        }];
        let mut out = Vec::new();
        write_pairings(&pairings, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "table,id_1,name_1,id_2,name_2\n1,1,Ada,2,\"Bo, Jr\"\n"
        );
    }
}
