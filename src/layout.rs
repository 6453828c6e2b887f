//! Single source of truth for the generated project layout.
//!
//! Everything here is constant data: which directories a new Bevy
//! project gets and what its entry point contains. The scaffold stages
//! read from this module and never hard-code names of their own.
//!
//! ```text
//! <project>/
//! ├── assets/
//! │   ├── images/  sounds/  models/  shaders/  fonts/
//! │   └── levels/  configs/  atlases/  animations/  materials/
//! ├── src/
//! │   ├── systems/  components/  resources/  states/  utils/
//! │   └── main.rs              # ENTRY_POINT_TEMPLATE
//! └── Cargo.toml               # owned by cargo
//! ```

use std::path::{Path, PathBuf};

/// Subdirectories created under `assets/`
pub const ASSET_DIRS: [&str; 10] = [
    "images",
    "sounds",
    "models",
    "shaders",
    "fonts",
    "levels",
    "configs",
    "atlases",
    "animations",
    "materials",
];

/// Subdirectories created under `src/`
pub const SOURCE_DIRS: [&str; 5] = ["systems", "components", "resources", "states", "utils"];

/// Category root → subdirectories
pub const PROJECT_LAYOUT: [(&str, &[&str]); 2] = [("assets", &ASSET_DIRS), ("src", &SOURCE_DIRS)];

/// Entry point, relative to the project root
pub const ENTRY_POINT: &str = "src/main.rs";

/// Contents of `src/main.rs`. Identical for every project.
pub const ENTRY_POINT_TEMPLATE: &str = "\
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .run();
}
";

/// Every layout directory, relative to the project root
pub fn relative_dirs() -> Vec<PathBuf> {
    PROJECT_LAYOUT
        .iter()
        .flat_map(|(root, subs)| subs.iter().map(move |sub| Path::new(root).join(sub)))
        .collect()
}

/// Every layout directory under `project_dir`
pub fn layout_dirs(project_dir: &Path) -> Vec<PathBuf> {
    relative_dirs()
        .into_iter()
        .map(|rel| project_dir.join(rel))
        .collect()
}

/// `src/main.rs` under `project_dir`
pub fn entry_point_path(project_dir: &Path) -> PathBuf {
    project_dir.join(ENTRY_POINT)
}
