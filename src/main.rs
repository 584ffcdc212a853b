use minish::flags::Flags;
use minish::shell::Shell;
use std::{env, process};

fn main() {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("minish: {}", e);
        process::exit(2);
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("minish {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let code = match Shell::new(flags).and_then(|mut shell| shell.run()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("minish: {}", e);
            1
        }
    };
    process::exit(code);
}
