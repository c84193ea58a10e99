//! Report storage: save, load, list, and delete reports.

use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::model::Report;

use super::{Result, Storage, StorageError};

impl Storage {
    /// Saves a new report.
    ///
    /// Reports whose emissions are not finite are refused; JSON has no
    /// way to store them.
    pub fn save_report(&self, report: &Report) -> Result<()> {
        if !report.result.emissions_kg_co2e.is_finite() {
            return Err(StorageError::NonFiniteEmissions(report.id));
        }
        let conn = self.open_db()?;
        if report_exists(&conn, report.id)? {
            return Err(StorageError::ReportAlreadyExists(report.id));
        }
        let payload = serde_json::to_string(report)?;
        conn.execute(
            "INSERT INTO report (id, category, emissions_kg_co2e, unit_label, computed_at, payload)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                report.id.to_string(),
                report.result.category.label(),
                report.result.emissions_kg_co2e,
                &report.result.unit_label,
                report.result.computed_at.to_string(),
                payload,
            ],
        )?;
        tracing::info!(id = %report.id, category = %report.result.category, "saved report");
        Ok(())
    }

    /// Loads a single report.
    pub fn load_report(&self, id: Uuid) -> Result<Report> {
        let conn = self.open_db()?;
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM report WHERE id = ?1",
                [id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        let payload = payload.ok_or(StorageError::ReportNotFound(id))?;
        parse_payload(id, &payload)
    }

    /// Lists all reports, oldest computation first.
    ///
    /// Rows that fail to decode are skipped with a warning. They can still
    /// be removed with [`Storage::delete_report`].
    pub fn list_reports(&self) -> Result<Vec<Report>> {
        let conn = self.open_db()?;
        let mut stmt = conn.prepare("SELECT id, payload FROM report")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut reports = Vec::new();
        for row in rows {
            let (id_str, payload) = row?;
            let Ok(id) = id_str.parse::<Uuid>() else {
                tracing::warn!(id = %id_str, "skipping report row with invalid id");
                continue;
            };
            match parse_payload(id, &payload) {
                Ok(report) => reports.push(report),
                Err(e) => tracing::warn!(%id, error = %e, "skipping unreadable report"),
            }
        }
        reports.sort_by(|a, b| {
            a.result
                .computed_at
                .cmp(&b.result.computed_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(reports)
    }

    /// The most recently computed report, if any exist.
    pub fn latest_report(&self) -> Result<Option<Report>> {
        Ok(self.list_reports()?.pop())
    }

    /// Deletes a report.
    pub fn delete_report(&self, id: Uuid) -> Result<()> {
        let conn = self.open_db()?;
        let rows = conn.execute("DELETE FROM report WHERE id = ?1", [id.to_string()])?;
        if rows == 0 {
            return Err(StorageError::ReportNotFound(id));
        }
        tracing::info!(%id, "deleted report");
        Ok(())
    }
}

fn report_exists(conn: &Connection, id: Uuid) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM report WHERE id = ?1",
            [id.to_string()],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Decodes a stored payload, checking it belongs to the row it came from.
fn parse_payload(id: Uuid, payload: &str) -> Result<Report> {
    let report: Report = serde_json::from_str(payload)
        .map_err(|e| StorageError::Corrupt(format!("report {id}: {e}")))?;
    if report.id != id {
        return Err(StorageError::Corrupt(format!(
            "row {id} holds report {}",
            report.id
        )));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;
    use tempfile::TempDir;

    use crate::model::{ActivityInput, Category, FuelType};

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("data")).unwrap();
        (dir, storage)
    }

    fn sample_report(computed_at: Timestamp) -> Report {
        let input = ActivityInput::new(Category::DieselCombustion, 1500.0, "litres")
            .with_fuel(FuelType::Diesel);
        let result = crate::compute(&input, computed_at);
        let recommendations = crate::generate(result.category, result.emissions_kg_co2e);
        Report::new(input, result, recommendations)
    }

    #[test]
    fn save_and_load_report() {
        let (_dir, storage) = test_storage();
        let report = sample_report(Timestamp::now());

        storage.save_report(&report).unwrap();
        let loaded = storage.load_report(report.id).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn save_duplicate_report_fails() {
        let (_dir, storage) = test_storage();
        let report = sample_report(Timestamp::now());

        storage.save_report(&report).unwrap();
        let err = storage.save_report(&report).unwrap_err();

        assert!(matches!(err, StorageError::ReportAlreadyExists(_)));
    }

    #[test]
    fn load_nonexistent_report_fails() {
        let (_dir, storage) = test_storage();
        let err = storage.load_report(Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, StorageError::ReportNotFound(_)));
    }

    #[test]
    fn list_reports_empty() {
        let (_dir, storage) = test_storage();

        assert!(storage.list_reports().unwrap().is_empty());
        assert!(storage.latest_report().unwrap().is_none());
    }

    #[test]
    fn list_reports_sorted_by_computed_at() {
        let (_dir, storage) = test_storage();

        let first = sample_report(Timestamp::new(1_000_000_000, 0).unwrap());
        let second = sample_report(Timestamp::new(2_000_000_000, 500).unwrap());
        let third = sample_report(Timestamp::new(2_000_000_000, 0).unwrap());

        // Save out of order to verify sorting.
        storage.save_report(&second).unwrap();
        storage.save_report(&first).unwrap();
        storage.save_report(&third).unwrap();

        let ids: Vec<Uuid> = storage

            .list_reports()

            .unwrap()

            .iter()

            .map(|r| r.id)

            .collect();
        assert_eq!(ids, [first.id, third.id, second.id]);

        let latest = storage.latest_report().unwrap().unwrap();
        assert_eq!(latest.id, second.id);
    }

    #[test]
    fn delete_report_removes_it() {
        let (_dir, storage) = test_storage();
        let report = sample_report(Timestamp::now());
        storage.save_report(&report).unwrap();

        storage.delete_report(report.id).unwrap();

        assert!(matches!(
            storage.load_report(report.id).unwrap_err(),
            StorageError::ReportNotFound(_)
        ));
        assert!(storage.list_reports().unwrap().is_empty());
    }

    #[test]
    fn delete_nonexistent_report_fails() {
        let (_dir, storage) = test_storage();
        let err = storage.delete_report(Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, StorageError::ReportNotFound(_)));
    }

    fn insert_raw(storage: &Storage, id: &str, payload: &str) {
        let conn = storage.open_db().unwrap();
        conn.execute(
            "INSERT INTO report (id, category, emissions_kg_co2e, unit_label, computed_at, payload)
             VALUES (?1, 'Explosives Usage', 0, 'tons', '2024-01-01T00:00:00Z', ?2)",
            rusqlite::params![id, payload],
        )
        .unwrap();
    }

    #[test]
    fn save_refuses_non_finite_emissions() {
        let (_dir, storage) = test_storage();
        let mut report = sample_report(Timestamp::now());
        report.result.emissions_kg_co2e = f64::INFINITY;

        let err = storage.save_report(&report).unwrap_err();

        assert!(matches!(err, StorageError::NonFiniteEmissions(id) if id == report.id));
        assert!(storage.list_reports().unwrap().is_empty());
    }

    #[test]
    fn unreadable_row_is_corrupt_and_named() {
        let (_dir, storage) = test_storage();
        let id = Uuid::new_v4();
        insert_raw(&storage, &id.to_string(), r#"{"id": null}"#);

        let err = storage.load_report(id).unwrap_err();

        assert!(matches!(err, StorageError::Corrupt(_)));
        assert!(err.to_string().contains(&id.to_string()), "{err}");
    }

    #[test]
    fn unreadable_rows_do_not_block_listing() {
        let (_dir, storage) = test_storage();
        let good = sample_report(Timestamp::now());
        storage.save_report(&good).unwrap();
        let bad = Uuid::new_v4();
        insert_raw(&storage, &bad.to_string(), "not json");
        insert_raw(&storage, "not-a-uuid", "{}");

        let ids: Vec<Uuid> = storage

            .list_reports()

            .unwrap()

            .iter()

            .map(|r| r.id)

            .collect();
        assert_eq!(ids, [good.id]);
        assert_eq!(storage.latest_report().unwrap().unwrap().id, good.id);

        storage.delete_report(bad).unwrap();
        assert!(matches!(
            storage.load_report(bad).unwrap_err(),
            StorageError::ReportNotFound(_)
        ));
    }

    #[test]
    fn reports_survive_reopening() {
        let (dir, storage) = test_storage();
        let report = sample_report(Timestamp::now());
        storage.save_report(&report).unwrap();
        drop(storage);

        let reopened = Storage::new(dir.path().join("data")).unwrap();
        assert_eq!(reopened.load_report(report.id).unwrap(), report);
    }
}
