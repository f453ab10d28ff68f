use std::fmt;
use std::path::Path;

const LIB_PREFIX: &str = "lib/";
const TEST_PREFIX: &str = "test/";
const SOURCE_SUFFIX: &str = ".ex";
const TEST_SUFFIX: &str = "_test.exs";

/// The project tree a relative path lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tree {
    Lib,
    Test,
}

/// A workspace-relative path known to start with `lib/` or `test/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePath {
    path: String,
    tree: Tree,
}

impl RelativePath {
    /// Classify `path`; anything outside `lib/` and `test/` is rejected.
    pub fn parse(path: &str) -> Option<Self> {
        let tree = if path.starts_with(LIB_PREFIX) {
            Tree::Lib
        } else if path.starts_with(TEST_PREFIX) {
            Tree::Test
        } else {
            return None;
        };

        Some(Self {
            path: path.to_string(),
            tree,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn tree(&self) -> Tree {
        self.tree
    }

    pub fn is_test(&self) -> bool {
        self.tree == Tree::Test
    }

    /// The ExUnit file covering this path. Test files map to themselves.
    pub fn test_path(&self) -> String {
        test_path_for(&self.path)
    }

    pub fn source_path(&self) -> String {
        source_path_for(&self.path)
    }

    /// The file on the other side of the `lib/` ⇄ `test/` mirror.
    pub fn counterpart(&self) -> String {
        match self.tree {
            Tree::Test => self.source_path(),
            Tree::Lib => self.test_path(),
        }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Strip `root` from `active` and keep the result only when it lands in
/// `lib/` or `test/`. A missing root, a file outside the root, or a file
/// in any other directory all resolve to `None`.
pub fn relative_path(active: &Path, root: Option<&Path>) -> Option<RelativePath> {
    let root = root?.to_string_lossy();
    let active = active.to_string_lossy();

    let stripped = active.strip_prefix(&*root)?;
    let stripped = stripped.strip_prefix('/').unwrap_or(stripped);

    RelativePath::parse(stripped)
}

/// `lib/<stem>.ex` or `test/<stem>_test.exs` to `test/<stem>_test.exs`.
pub fn test_path_for(relative: &str) -> String {
    let neutral = relative
        .strip_prefix(LIB_PREFIX)
        .or_else(|| relative.strip_prefix(TEST_PREFIX))
        .unwrap_or(relative);
    let neutral = neutral
        .strip_suffix(TEST_SUFFIX)
        .or_else(|| neutral.strip_suffix(SOURCE_SUFFIX))
        .unwrap_or(neutral);

    format!("{TEST_PREFIX}{neutral}{TEST_SUFFIX}")
}

/// `test/<stem>_test.exs` to `lib/<stem>.ex`.
///
/// Only the first `_test` and the first `.exs` are rewritten, so a stem that
/// itself contains `_test` does not survive the round trip.
pub fn source_path_for(relative: &str) -> String {
    let in_lib = match relative.strip_prefix(TEST_PREFIX) {
        Some(rest) => format!("{LIB_PREFIX}{rest}"),
        None => relative.to_string(),
    };

    in_lib.replacen("_test", "", 1).replacen(".exs", ".ex", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn resolve(active: &str, root: &str) -> Option<RelativePath> {
        relative_path(&PathBuf::from(active), Some(Path::new(root)))
    }

    #[test]
    fn test_relative_path_in_lib() {
        let rel = resolve("/home/dev/app/lib/app/user.ex", "/home/dev/app").unwrap();
        assert_eq!(rel.as_str(), "lib/app/user.ex");
        assert_eq!(rel.tree(), Tree::Lib);
    }

    #[test]
    fn test_relative_path_in_test() {
        let rel = resolve("/home/dev/app/test/app/user_test.exs", "/home/dev/app").unwrap();
        assert_eq!(rel.as_str(), "test/app/user_test.exs");
        assert!(rel.is_test());
    }

    #[test]
    fn test_relative_path_root_with_trailing_slash() {
        let rel = resolve("/srv/app/lib/app.ex", "/srv/app/").unwrap();
        assert_eq!(rel.as_str(), "lib/app.ex");
    }

    #[test]
    fn test_relative_path_outside_known_trees() {
        assert!(resolve("/srv/app/config/config.exs", "/srv/app").is_none());
        assert!(resolve("/srv/app/mix.exs", "/srv/app").is_none());
        assert!(resolve("/srv/app/priv/lib/x.ex", "/srv/app").is_none());
    }

    #[test]
    fn test_relative_path_is_case_sensitive() {
        assert!(resolve("/srv/app/Lib/app.ex", "/srv/app").is_none());
        assert!(resolve("/srv/app/TEST/app_test.exs", "/srv/app").is_none());
    }

    #[test]
    fn test_relative_path_outside_root() {
        assert!(resolve("/elsewhere/lib/app.ex", "/srv/app").is_none());
    }

    #[test]
    fn test_relative_path_without_root() {
        assert!(relative_path(Path::new("/srv/app/lib/app.ex"), None).is_none());
    }

    #[test]
    fn test_test_path_for_source() {
        assert_eq!(test_path_for("lib/a/b.ex"), "test/a/b_test.exs");
        assert_eq!(test_path_for("lib/app.ex"), "test/app_test.exs");
    }

    #[test]
    fn test_test_path_for_test_is_identity() {
        assert_eq!(test_path_for("test/a/b_test.exs"), "test/a/b_test.exs");
    }

    #[test]
    fn test_test_path_for_keeps_unknown_extensions() {
        // .exs scripts under lib/ are not sources; only the prefix goes
        assert_eq!(test_path_for("lib/tasks/seed.exs"), "test/tasks/seed.exs_test.exs");
    }

    #[test]
    fn test_source_path_for() {
        assert_eq!(source_path_for("test/a/b_test.exs"), "lib/a/b.ex");
    }

    #[test]
    fn test_source_path_for_embedded_test_in_stem() {
        assert_eq!(
            source_path_for("test/my_test_helper_test.exs"),
            "lib/my_helper_test.ex"
        );
    }

    #[test]
    fn test_round_trip() {
        for source in ["lib/a/b.ex", "lib/app.ex", "lib/deep/er/nested/mod.ex"] {
            assert_eq!(source_path_for(&test_path_for(source)), source);
        }
    }

    #[test]
    fn test_counterpart_both_directions() {
        let lib = RelativePath::parse("lib/shop/cart.ex").unwrap();
        assert_eq!(lib.counterpart(), "test/shop/cart_test.exs");

        let test = RelativePath::parse("test/shop/cart_test.exs").unwrap();
        assert_eq!(test.counterpart(), "lib/shop/cart.ex");
    }
}
