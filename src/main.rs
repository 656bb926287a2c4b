use std::cell::RefCell;
use std::env;
use std::io;
use std::process::ExitCode;
use std::rc::Rc;

use rocks_lang::Rocks;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let stdout = Rc::new(RefCell::new(io::stdout()));
    let mut rocks = Rocks::new(stdout);

    match args.len() {
        1 => {
            rocks.run_prompt();
            ExitCode::SUCCESS
        }
        2 => rocks.run_file(&args[1]),
        _ => {
            println!("Usage: rocks [script]");
            ExitCode::from(64)
        }
    }
}
