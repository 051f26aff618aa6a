use propedit_core::{CommitOutcome, Verdict};

pub fn print_info(message: &str) {
    println!("{message}");
}

pub fn print_error(message: &str) {
    eprintln!("[propedit][ERROR]: {message}");
}

pub fn print_verdict(verdict: Verdict) {
    match verdict {
        Verdict::Accepted => print_info("valid"),
        Verdict::Rejected => print_info("invalid"),
    }
}

pub fn print_outcome(outcome: &CommitOutcome, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        print_info(&outcome.display);
    }
    Ok(())
}
