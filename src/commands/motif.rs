use crate::align::compact;
use crate::cli::MotifArgs;
use crate::motif::find_motif;
use crate::utils::{read_motif_task, write_lines, Result};

pub fn motif(args: MotifArgs) -> Result<()> {
    let task = read_motif_task(&args.input_path)?;
    log::info!(
        "Searching for a {}-base motif with at least {} occurrence(s), max mismatch {}",
        task.window_len,
        task.required_occurrences,
        task.max_mismatch
    );

    let result = find_motif(
        task.required_occurrences,
        task.window_len,
        task.max_mismatch,
        &task.sequence,
    )
    .ok_or_else(|| {
        format!(
            "No {}-base substring occurs {} or more times within {} mismatch(es)",
            task.window_len, task.required_occurrences, task.max_mismatch
        )
    })?;

    let mut lines = vec![result.motif.clone()];
    for occurrence in &result.occurrences {
        lines.push(format!(
            "{} {}",
            occurrence.start,
            compact(&occurrence.align.ops)
        ));
    }
    write_lines(&args.output_path, &lines)?;

    log::info!(
        "Found motif {} with {} occurrence(s)",
        result.motif,
        result.occurrences.len()
    );
    Ok(())
}
