use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Locates executables for unqualified command tokens. A token containing a
/// path separator is used verbatim and never searched; otherwise the search
/// list is walked in order and the first executable hit wins. Resolution
/// only reads file metadata, it never runs anything.
#[derive(Clone, Default)]
pub struct Resolver;

impl Resolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, token: &str, search_list: Option<&str>) -> Option<PathBuf> {
        if token.contains('/') {
            // Verbatim tokens only need to name a regular file; a missing
            // execute bit is the launcher's EACCES, reported as 126, not
            // as a resolution failure.
            let candidate = PathBuf::from(token);
            return self.is_command(&candidate).then_some(candidate);
        }

        for dir in search_list?.split(':') {
            // An empty search-list segment means the current directory.
            let candidate = if dir.is_empty() {
                Path::new(".").join(token)
            } else {
                Path::new(dir).join(token)
            };
            if self.is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Regular file with at least one execute bit set.
    pub fn is_executable(&self, path: &Path) -> bool {
        fs::metadata(path)
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    /// Regular file, executable or not.
    pub fn is_command(&self, path: &Path) -> bool {
        fs::metadata(path)
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("minish_resolver_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn place_program(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_separator_bypasses_search() {
        let dir = fixture_dir("bypass");
        let program = place_program(&dir, "prog", 0o755);
        let token = program.to_str().unwrap();

        // The search list points elsewhere and must not be consulted
        let resolved = Resolver::new().resolve(token, Some("/nonexistent_dir"));
        assert_eq!(resolved, Some(program));
    }

    #[test]
    fn test_separator_resolves_without_execute_bit() {
        // Verbatim tokens resolve even when the file is not executable;
        // the launcher reports the permission failure.
        let dir = fixture_dir("bypass_perm");
        let program = place_program(&dir, "locked", 0o644);
        let token = program.to_str().unwrap();

        let resolved = Resolver::new().resolve(token, Some("/bin"));
        assert_eq!(resolved, Some(program));
    }

    #[test]
    fn test_separator_missing_file() {
        let resolved = Resolver::new().resolve("/bin/doesnotexist_minish", Some("/bin"));
        assert!(resolved.is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let first = fixture_dir("order_first");
        let second = fixture_dir("order_second");
        let expected = place_program(&first, "dup", 0o755);
        place_program(&second, "dup", 0o755);

        let search = format!("{}:{}", first.display(), second.display());
        let resolved = Resolver::new().resolve("dup", Some(&search));
        assert_eq!(resolved, Some(expected));
    }

    #[test]
    fn test_skips_non_executable() {
        let first = fixture_dir("perm_first");
        let second = fixture_dir("perm_second");
        place_program(&first, "tool", 0o644);
        let expected = place_program(&second, "tool", 0o755);

        let search = format!("{}:{}", first.display(), second.display());
        let resolved = Resolver::new().resolve("tool", Some(&search));
        assert_eq!(resolved, Some(expected));
    }

    #[test]
    fn test_unset_search_list() {
        let resolved = Resolver::new().resolve("anything", None);
        assert!(resolved.is_none());
    }

    #[test]
    fn test_not_in_any_directory() {
        let dir = fixture_dir("missing");
        let search = dir.display().to_string();
        assert!(Resolver::new()
            .resolve("minish_no_such_cmd", Some(&search))
            .is_none());
    }

    #[test]
    fn test_idempotent() {
        let dir = fixture_dir("idempotent");
        place_program(&dir, "stable", 0o755);
        let search = dir.display().to_string();

        let resolver = Resolver::new();
        let first = resolver.resolve("stable", Some(&search));
        let second = resolver.resolve("stable", Some(&search));
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_executable_rejects_directory() {
        let dir = fixture_dir("dir_check");
        assert!(!Resolver::new().is_executable(&dir));
    }
}
