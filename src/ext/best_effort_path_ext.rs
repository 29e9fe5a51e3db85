use std::path::{Path, PathBuf};

/// Renders a path for error messages.
///
/// Canonicalizes when the filesystem allows it, so messages carry an
/// absolute path where one can be resolved. Paths that do not exist
/// (a common situation for the errors that quote them) fall back to
/// their raw display form.
pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        match self.canonicalize() {
            Ok(canonical) => canonical.display().to_string(),
            Err(_) => self.display().to_string(),
        }
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        self.as_path().best_effort_path_display()
    }
}
