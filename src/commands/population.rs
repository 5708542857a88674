use crate::cli::PopulationArgs;
use crate::population::population_limit;
use crate::utils::{read_population_tasks, write_lines, Result};

pub fn population(args: PopulationArgs) -> Result<()> {
    let tasks = read_population_tasks(&args.input_path)?;
    log::info!(
        "Evaluating {} population task(s) over {} days",
        tasks.len(),
        args.final_day
    );

    let lines: Vec<String> = tasks
        .iter()
        .map(
            |&(start, a, b)| match population_limit(start, a, b, args.final_day) {
                Some(limit) => limit.to_string(),
                // Unbounded growth keeps the reference sentinel
                None => "-1".to_string(),
            },
        )
        .collect();
    write_lines(&args.output_path, &lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_population_command_end_to_end() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "3\n4.593 1.357 1.232\n1 1.1 0\n0 2 1\n").unwrap();
        let output = NamedTempFile::new().unwrap();

        let args = PopulationArgs {
            input_path: input.path().to_path_buf(),
            output_path: output.path().to_path_buf(),
            final_day: 100_000,
        };
        population(args).unwrap();

        let contents = fs::read_to_string(output.path()).unwrap();
        assert_eq!(contents, "0\n-1\n0\n");
    }
}
