use crate::utils::Result;
use std::fs;
use std::path::Path;

/// Parameters of one motif search task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifTask {
    pub required_occurrences: usize,
    pub window_len: usize,
    pub max_mismatch: usize,
    pub sequence: String,
}

/// Reads a motif task file: the first line holds
/// `<occurrences> <window length> <max mismatch>`, the second the sequence.
pub fn read_motif_task(path: &Path) -> Result<MotifTask> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let mut lines = contents.lines().map(str::trim);

    let params = lines
        .next()
        .ok_or_else(|| format!("{}: missing parameter line", path.display()))?;
    let fields: Vec<&str> = params.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(format!(
            "{}: expected 3 whitespace-separated parameters, got {}",
            path.display(),
            fields.len()
        ));
    }
    let parse_count = |name: &str, value: &str| -> Result<usize> {
        value
            .parse()
            .map_err(|_| format!("{}: invalid {}: {}", path.display(), name, value))
    };
    let sequence = lines
        .next()
        .ok_or_else(|| format!("{}: missing sequence line", path.display()))?;

    Ok(MotifTask {
        required_occurrences: parse_count("occurrence count", fields[0])?,
        window_len: parse_count("window length", fields[1])?,
        max_mismatch: parse_count("mismatch limit", fields[2])?,
        sequence: sequence.to_string(),
    })
}

/// Reads a population task file: a header line followed by one
/// `<start> <a> <b>` triple per line. Blank lines are skipped.
pub fn read_population_tasks(path: &Path) -> Result<Vec<(f64, f64, f64)>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let mut tasks = Vec::new();
    for (line_no, line) in contents.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let values: Vec<f64> = line
            .split_whitespace()
            .filter_map(|x| x.parse().ok())
            .collect();
        if values.len() != 3 {
            return Err(format!(
                "{}: line {}: expected `<start> <a> <b>`, got: {}",
                path.display(),
                line_no + 1,
                line
            ));
        }
        tasks.push((values[0], values[1], values[2]));
    }
    Ok(tasks)
}

pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut contents = lines.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_read_motif_task() {
        let file = file_with("2 3 0\nATGCCATGCTCG\n");
        let task = read_motif_task(file.path()).unwrap();
        assert_eq!(
            task,
            MotifTask {
                required_occurrences: 2,
                window_len: 3,
                max_mismatch: 0,
                sequence: "ATGCCATGCTCG".to_string(),
            }
        );
    }

    #[test]
    fn test_read_motif_task_bad_parameter_count() {
        let file = file_with("2 3\nATGC\n");
        assert!(read_motif_task(file.path()).is_err());
    }

    #[test]
    fn test_read_motif_task_missing_sequence() {
        let file = file_with("2 3 0\n");
        assert!(read_motif_task(file.path()).is_err());
    }

    #[test]
    fn test_read_motif_task_non_numeric() {
        let file = file_with("two 3 0\nATGC\n");
        assert!(read_motif_task(file.path()).is_err());
    }

    #[test]
    fn test_read_population_tasks_skips_header_and_blanks() {
        let file = file_with("3\n4.593 1.357 1.232\n\n0 2 1\n");
        let tasks = read_population_tasks(file.path()).unwrap();
        assert_eq!(tasks, vec![(4.593, 1.357, 1.232), (0.0, 2.0, 1.0)]);
    }

    #[test]
    fn test_read_population_tasks_bad_line() {
        let file = file_with("header\n1.0 2.0\n");
        assert!(read_population_tasks(file.path()).is_err());
    }

    #[test]
    fn test_write_lines_round_trip() {
        let file = NamedTempFile::new().unwrap();
        write_lines(
            file.path(),
            &["ATG".to_string(), "1 3M".to_string(), "6 3M".to_string()],
        )
        .unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "ATG\n1 3M\n6 3M\n");
    }

    #[test]
    fn test_write_no_lines() {
        let file = NamedTempFile::new().unwrap();
        write_lines(file.path(), &[]).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }
}
