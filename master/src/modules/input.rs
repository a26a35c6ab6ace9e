/// ----- INPUT MODULE -----
/// Reads manual hall calls from stdin, one per line, as `<floor> <up|down>`.

use std::io::{self, BufRead};

use crossbeam_channel::Sender;
use log::{info, warn};

use shared_resources::call::Call;

pub fn parse_hall_call(line: &str) -> Option<(u8, Call)> {
    let mut parts = line.split_whitespace();
    let floor = parts.next()?.parse::<u8>().ok()?;
    let call = Call::parse(parts.next()?)?;
    if parts.next().is_some() {
        return None
    }
    Some((floor, call))
}

pub fn main(hall_call_tx: Sender<(u8, Call)>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not read from stdin: {}", e);
                return
            },
        };
        if line.trim().is_empty() {
            continue
        }
        match parse_hall_call(&line) {
            Some(hall_call) => {
                if hall_call_tx.send(hall_call).is_err() {
                    return
                }
            },
            None => warn!("Could not parse \"{}\", expected \"<floor> <up|down>\"", line.trim()),
        }
    }
    info!("Stdin closed, no more manual requests");
}
