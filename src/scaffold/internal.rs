//! Internal implementation for the scaffold pipeline

use std::fs;
use std::path::{Component, Path, PathBuf};

use colored::Colorize;
use tracing::{debug, info};

use super::{ScaffoldConfig, ScaffoldRequest};
use crate::error::{ScaffoldError, Stage};
use crate::layout;
use crate::runner::CommandRunner;

pub(super) fn run_pipeline(
    runner: &impl CommandRunner,
    config: &ScaffoldConfig,
    request: &ScaffoldRequest,
    base_dir: &Path,
) -> Result<PathBuf, ScaffoldError> {
    let name = request.project_name();
    // name must stay a single component under base_dir
    validate_project_name(name)?;

    let project_dir = resolve_project_dir(base_dir, name)?;
    info!(project = name, dir = %project_dir.display(), "scaffolding");

    // === STAGE 1: CREATE ===
    println!("🦀 Creating new Bevy project: {name}");
    run_stage(runner, config, Stage::Create, &["new", name], base_dir)?;

    // === STAGE 2: ADD DEPENDENCY ===
    println!("➕ Adding {} dependency", config.dependency);
    run_stage(
        runner,
        config,
        Stage::AddDependency,
        &["add", config.dependency.as_str()],
        &project_dir,
    )?;

    // === STAGE 3: DIRECTORIES ===
    println!("📁 Creating asset and source directories...");
    make_directories(&project_dir)?;

    // === STAGE 4: ENTRY POINT ===
    println!("🧾 Writing {} ...", layout::ENTRY_POINT);
    write_entry_point(&project_dir)?;

    println!(
        "\n{}",
        format!("✅ Project '{name}' created successfully!").green()
    );
    println!("➡️  Next steps:");
    println!("   cd {name}");
    println!("   {} run", config.program);

    // === STAGE 5: RUN (optional) ===
    if request.run_after_create() {
        println!("\n🚀 Running project...");
        run_stage(runner, config, Stage::Run, &["run"], &project_dir)?;
    }

    Ok(project_dir)
}

/// Reject names that aren't exactly one normal path component
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    let reject = |reason| {
        Err(ScaffoldError::InvalidInput {
            name: name.to_string(),
            reason,
        })
    };

    if name.trim().is_empty() {
        return reject("name is empty");
    }
    if name.contains('\0') {
        return reject("name contains a NUL byte");
    }
    if name.contains('/') || name.contains('\\') {
        return reject("name must not contain path separators");
    }
    if name.starts_with('-') {
        return reject("name must not start with '-'");
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => reject("name must be a single directory name"),
    }
}

/// Create every layout directory under `project_dir`
///
/// Existing directories are left alone, so re-running converges.
pub fn make_directories(project_dir: &Path) -> Result<(), ScaffoldError> {
    for dir in layout::layout_dirs(project_dir) {
        fs::create_dir_all(&dir).map_err(|source| ScaffoldError::Filesystem {
            path: dir.clone(),
            source,
        })?;
        debug!(dir = %dir.display(), "directory ready");
    }
    Ok(())
}

/// Write the entry point template, replacing whatever is there
pub fn write_entry_point(project_dir: &Path) -> Result<(), ScaffoldError> {
    let path = layout::entry_point_path(project_dir);
    fs::write(&path, layout::ENTRY_POINT_TEMPLATE)
        .map_err(|source| ScaffoldError::Filesystem {
            path: path.clone(),
            source,
        })?;
    debug!(path = %path.display(), "entry point written");
    Ok(())
}

fn resolve_project_dir(base_dir: &Path, name: &str) -> Result<PathBuf, ScaffoldError> {
    let base = if base_dir.is_absolute() {
        base_dir.to_path_buf()
    } else {
        std::path::absolute(base_dir).map_err(|source| ScaffoldError::Filesystem {
            path: base_dir.to_path_buf(),
            source,
        })?
    };
    Ok(base.join(name))
}

fn run_stage(
    runner: &impl CommandRunner,
    config: &ScaffoldConfig,
    stage: Stage,
    args: &[&str],
    cwd: &Path,
) -> Result<(), ScaffoldError> {
    let command = std::iter::once(config.program.as_str())
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    info!(%stage, %command, cwd = %cwd.display(), "running stage");

    let status = runner
        .run(&config.program, args, cwd)
        .map_err(|e| ScaffoldError::ExternalCommandFailed {
            stage,
            command: command.clone(),
            exit_code: None,
            output: Some(e.to_string()),
        })?;

    if !status.success() {
        return Err(ScaffoldError::ExternalCommandFailed {
            stage,
            command,
            exit_code: status.code,
            output: status.output,
        });
    }

    Ok(())
}
