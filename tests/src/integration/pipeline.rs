//! # CSV Pipeline
//!
//! Identifiers read from CSV files, assigned, verified, and written back
//! through the outbound ports, the same path the `xo-assign` tool takes.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use xo_01_assignment::{
        AssignmentApi, AssignmentConfig, AssignmentService, AssignmentSink, IdentifierSource,
        InMemorySink,
    };
    use xo_02_tabular::{read_column, ColumnSelector, CsvAssignmentWriter, CsvColumnReader};

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn service() -> AssignmentService {
        AssignmentService::with_config(AssignmentConfig {
            assignment_percentage: 0.2,
            crossover_percentage: 0.5,
            seed: Some(2024),
            ..Default::default()
        })
    }

    #[test]
    fn test_csv_round_trip_through_ports() {
        let dir = tempfile::tempdir().unwrap();

        let users_csv = write_file(
            dir.path(),
            "users.csv",
            "name,user_id\nalice,u1\nbob,u2\ncarol,u3\ndave,u4\n",
        );
        let mut objects = String::from("object_id\n");
        for i in 100..150 {
            objects.push_str(&format!("{i}\n"));
        }
        let objects_csv = write_file(dir.path(), "objects.csv", &objects);

        let users = CsvColumnReader::new(&users_csv, "user_id".parse().unwrap())
            .read_identifiers()
            .unwrap();
        let objects = CsvColumnReader::new(&objects_csv, ColumnSelector::Index(0))
            .read_identifiers()
            .unwrap();
        assert_eq!(users, vec!["u1", "u2", "u3", "u4"]);
        assert_eq!(objects.len(), 50);
        assert_eq!(objects[0], "100");

        let service = service();
        let assignment = service.assign(&users, &objects).unwrap();
        let report = service.verify(&assignment, &users, objects.len());
        assert!(report.is_valid(), "{:?}", report.violations);

        let out_path = dir.path().join("assignments.csv");
        let mut writer = CsvAssignmentWriter::create(&out_path).unwrap();
        let written = writer.write_assignment(&assignment).unwrap();
        drop(writer);
        assert_eq!(written, assignment.total_assigned());

        let out = fs::read(&out_path).unwrap();
        let user_col = read_column(out.as_slice(), &ColumnSelector::Name("user_id".into())).unwrap();
        let object_col =
            read_column(out.as_slice(), &ColumnSelector::Name("object_id".into())).unwrap();
        let read_back: Vec<(String, String)> = user_col.into_iter().zip(object_col).collect();

        let expected: Vec<(String, String)> = assignment
            .rows()
            .map(|(u, o)| (u.clone(), o.clone()))
            .collect();
        assert_eq!(read_back, expected);
    }

    #[test]
    fn test_file_and_memory_sinks_agree() {
        let users: Vec<String> = (1..=3).map(|i| format!("u{i}")).collect();
        let objects: Vec<String> = (1..=40).map(|i| format!("o{i}")).collect();
        let assignment = service().assign(&users, &objects).unwrap();

        let mut memory = InMemorySink::default();
        memory.write_assignment(&assignment).unwrap();

        let mut csv = CsvAssignmentWriter::new(Vec::new());
        csv.write_assignment(&assignment).unwrap();
        let bytes = csv.into_inner().unwrap();

        let mut expected = String::from("user_id,object_id\n");
        for (user, obj) in &memory.rows {
            expected.push_str(&format!("{user},{obj}\n"));
        }
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }
}
