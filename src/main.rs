use std::process::ExitCode;

use thompson_regex::is_match;

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("{e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let pattern = args.next().ok_or("usage: thompson-regex <pattern> <input>")?;
    let input = args.next().ok_or("usage: thompson-regex <pattern> <input>")?;

    println!("{}", is_match(&pattern, &input)?);

    Ok(())
}
