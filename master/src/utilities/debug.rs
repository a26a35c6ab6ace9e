use std::io::{stdout, Stdout, Write};

use crossbeam_channel::Receiver;
use crossterm::{cursor, terminal, ExecutableCommand, Result};
use log::warn;

use shared_resources::status_message::StatusMessage;

/// Redraws the status tables in place every time a snapshot arrives.
pub fn main(status_rx: Receiver<StatusMessage>) -> Result<()> {
    let mut stdout = stdout();
    let mut printed_lines: u16 = 0;

    for status in status_rx.iter() {
        printed_lines = printstatus(&mut stdout, &status, printed_lines)?;
    }
    Ok(())
}

/// One JSON document per snapshot, one per line.
pub fn print_json(status_rx: Receiver<StatusMessage>) {
    for status in status_rx.iter() {
        match status.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Could not serialize status of tick {}: {}", status.tick, e),
        }
    }
}

fn printstatus(stdout: &mut Stdout, status: &StatusMessage, previous_lines: u16) -> Result<u16> {
    if previous_lines > 0 {
        stdout.execute(cursor::MoveUp(previous_lines))?;
    }
    stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

    let lines = render_status(status);
    for line in &lines {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()?;
    Ok(lines.len() as u16)
}

pub fn render_status(status: &StatusMessage) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(String::from("+---------------------------------------------------+"));
    lines.push(format!("| {0:<49} |", format!("HALL CALLS   tick {}   floors {}", status.tick, status.floors)));
    lines.push(String::from("+------------+------------+------------+------------+"));
    lines.push(format!("| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", "FLOOR", "DIRECTION", "STATUS", "CAR"));
    lines.push(String::from("+------------+------------+------------+------------+"));
    for request in &status.requests {
        let car = match request.assigned_car {
            Some(id) => id.to_string(),
            None => String::from("-"),
        };
        lines.push(format!(
            "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
            request.floor, request.call.as_string(), request.status.as_string(), car
        ));
    }
    lines.push(String::from("+------------+------------+------------+------------+"));
    lines.push(String::new());

    lines.push(String::from("+------------------------------------------------------------+"));
    lines.push(String::from("| ELEVATORS                                                  |"));
    lines.push(String::from("+------------+------------+------------+---------------------+"));
    lines.push(format!("| {0:<10} | {1:<10} | {2:<10} | {3:<19} |", "ID", "FLOOR", "DIRECTION", "STOPS"));
    lines.push(String::from("+------------+------------+------------+---------------------+"));
    for car in &status.elevators {
        let stops: Vec<String> = car.stops.iter().map(|stop| stop.to_string()).collect();
        lines.push(format!(
            "| {0:<10} | {1:<10} | {2:<10} | {3:<19} |",
            car.id, car.floor, car.direction.as_string(), stops.join(" ")
        ));
    }
    lines.push(String::from("+------------+------------+------------+---------------------+"));
    lines
}
