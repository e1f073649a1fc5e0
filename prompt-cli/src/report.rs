//! Human-readable sync summaries.

use prompt_babel::sync::{FailureStage, SyncReport};
use prompt_babel::Target;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

const RULE_WIDTH: usize = 50;

/// Print per-target results, totals and installation hints.
///
/// `cwd` is used to shorten output paths; `output_root` is shown as given.
pub fn write_summary<W: Write>(
    out: &mut W,
    report: &SyncReport,
    targets: &[Target],
    output_root: &Path,
    cwd: &Path,
    dry_run: bool,
) -> io::Result<()> {
    for target in targets {
        writeln!(out)?;
        writeln!(out, "Processing files for {}...", target.display_name())?;
        for written in report.written.iter().filter(|w| w.target == *target) {
            writeln!(
                out,
                "  ✓ {} → {}",
                written.source.display(),
                relative_to(&written.output, cwd).display()
            )?;
        }
        writeln!(
            out,
            "Processed {} file(s) for {}",
            report.processed_for(*target),
            target.display_name()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    if dry_run {
        writeln!(out, "Dry run complete, nothing was written.")?;
    } else if report.is_clean() {
        writeln!(out, "✓ Conversion complete!")?;
    } else {
        writeln!(out, "Conversion finished with {} failure(s).", report.failures.len())?;
    }
    writeln!(out, "Total files processed: {}", report.total_written())?;
    writeln!(out, "Output directory: {}", absolute(output_root, cwd).display())?;

    if !targets.is_empty() {
        writeln!(out)?;
        writeln!(out, "Installation instructions:")?;
        for target in targets {
            writeln!(out)?;
            writeln!(out, "{}:", target.display_name())?;
            for hint in target.install_hints() {
                writeln!(out, "  {hint}")?;
            }
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Print one line per failed document.
pub fn write_failures<W: Write>(out: &mut W, report: &SyncReport) -> io::Result<()> {
    for failure in &report.failures {
        let action = match failure.stage {
            FailureStage::Read => "read",
            FailureStage::CreateDir => "create directory for",
            FailureStage::Write => "write",
        };
        writeln!(
            out,
            "  ✗ [{}] could not {action} {}: {}",
            failure.target,
            failure.source.display(),
            failure.error
        )?;
    }
    Ok(())
}

fn relative_to(path: &Path, cwd: &Path) -> PathBuf {
    let absolute_path = absolute(path, cwd);
    pathdiff::diff_paths(&absolute_path, cwd).unwrap_or(absolute_path)
}

fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    // `./` segments only; `..` is left alone since it may cross a symlink.
    joined
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
