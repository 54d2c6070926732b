//! Runs the `ptree` binary against fixture process tables.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Adds a live process. `children == None` leaves out the listing file.
    fn process(self, pid: u32, cmdline: &str, children: Option<&str>) -> Self {
        let dir = self.dir.path().join(pid.to_string());
        fs::create_dir_all(&dir).unwrap();
        symlink("/bin/sh", dir.join("exe")).unwrap();
        fs::write(dir.join("cmdline"), cmdline.replace(' ', "\0")).unwrap();
        if let Some(children) = children {
            let task = dir.join("task").join(pid.to_string());
            fs::create_dir_all(&task).unwrap();
            fs::write(task.join("children"), children).unwrap();
        }
        self
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ptree"))
            .arg("--proc-root")
            .arg(self.root())
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

/// Root 1 ("root") with children 2 ("a") and 3 (empty cmdline); 3 has child 4 ("d").
fn sample() -> Fixture {
    Fixture::new()
        .process(1, "root", Some("2 3"))
        .process(2, "a --flag", Some(""))
        .process(3, "", Some("4"))
        .process(4, "d", Some(""))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_full_tree() {
    let output = sample().run(&["1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1: root\n  2: a\n  3\n    4: d\n");
}

#[test]
fn depth_limit_hides_grandchildren() {
    let output = sample().run(&["-d", "1", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1: root\n  2: a\n  3\n");
}

#[test]
fn depth_zero_is_unbounded() {
    let output = sample().run(&["-d", "0", "1"]);
    assert_eq!(stdout(&output), "1: root\n  2: a\n  3\n    4: d\n");
}

#[test]
fn subtree_root() {
    let output = sample().run(&["3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "3\n  4: d\n");
}

#[test]
fn exited_child_is_skipped_silently() {
    let fixture = Fixture::new()
        .process(1, "init", Some("2 9 3"))
        .process(2, "a", Some(""))
        .process(3, "b", Some(""));
    let output = fixture.run(&["1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1: init\n  2: a\n  3: b\n");
}

#[test]
fn missing_listing_prints_rest_and_exits_2() {
    let fixture = Fixture::new()
        .process(1, "init", Some("2 3"))
        .process(2, "a", None)
        .process(3, "b", Some("4"))
        .process(4, "c", Some(""));
    let output = fixture.run(&["1"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "1: init\n  2: a\n  3: b\n    4: c\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("PID 2"));
}

#[test]
fn non_utf8_name_is_printed_lossily() {
    let fixture = Fixture::new().process(1, "init", Some("5")).process(5, "", Some(""));
    fs::write(fixture.root().join("5").join("cmdline"), b"caf\xe9\0-x\0").unwrap();

    let output = fixture.run(&["1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1: init\n  5: caf\u{FFFD}\n");
}

#[test]
fn dead_root_prints_nothing() {
    let output = sample().run(&["77"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn usage_errors_exit_1() {
    let fixture = sample();
    let cases: [&[&str]; 5] = [&[], &["-d", "-1", "1"], &["-d", "1"], &["1", "2"], &["x"]];
    for args in cases {
        let output = fixture.run(args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(output.stdout.is_empty());
    }
}
