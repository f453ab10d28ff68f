//! Source/test path resolution
//!
//! Mix projects keep sources under `lib/` and ExUnit tests under `test/`,
//! mirroring each other: `lib/a/b.ex` is tested by `test/a/b_test.exs`.
//! Everything here is a pure string transform over `/`-separated paths;
//! nothing touches the filesystem.

mod relative;

pub use relative::{RelativePath, Tree, relative_path, source_path_for, test_path_for};
