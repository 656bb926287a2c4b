use std::path::PathBuf;

/// Writes `source` to a fresh file under the system temp dir and returns its
/// path. Integration tests exercise the interpreter exactly as the CLI would
/// — by pointing `Rocks::run_file` (or the `rocks` binary, for the ERR cases)
/// at a real file on disk — so Lox source lives inline in each test instead
/// of as a committed `.rocks` fixture.
pub fn write_fixture(scope: &str, name: &str, source: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("rocks-test-{scope}-{name}.rocks"));
    std::fs::write(&path, source).expect("write test fixture");
    path
}

#[macro_export]
macro_rules! tests {
    ($file:ident in $scope:ident is OK $source:expr; $($expected:expr)*) => {
        #[test]
        fn $file() {
            use std::cell::RefCell;
            use std::rc::Rc;
            use rocks_lang::Rocks;

            let mut expected = vec![$($expected),*];

            // if exists, concat expected lines with new lines
            let expected = match expected.len() {
                0 => "".to_string(),
                _ => {
                    // add empty string to end to add new line to end of output
                    expected.push("");
                    expected.join("\n")
                }
            };

            let output: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
            let mut rocks = Rocks::new(Rc::clone(&output));

            let path = crate::common::write_fixture(stringify!($scope), stringify!($file), $source);
            rocks.run_file(&path);

            // drop rocks here to release the borrow on output before reading it
            drop(rocks);
            let _ = std::fs::remove_file(&path);

            assert_eq!(expected, std::str::from_utf8(&output.borrow()).unwrap());
        }
    };

    ($file:ident in $scope:ident is ERR $source:expr; $($expected:expr)+) => {
        #[test]
        fn $file() {
            use assert_cmd::Command;

            // output concats expected with new line
            let output = vec![$($expected),+].join("\n");
            let path = crate::common::write_fixture(stringify!($scope), stringify!($file), $source);

            Command::cargo_bin("rocks").unwrap()
                .arg(&path)
                .assert()
                .stderr(format!("{output}\n"))
                .failure();

            let _ = std::fs::remove_file(&path);
        }
    };
}
