//! Channel dashboard demo: click a column header to sort the table.

use std::fs::File;
use std::time::Duration;

use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuitable::{
    Alignment, ClickOutcome, Column, Event, Key, Line, Row, Span, Table, Terminal, TextStyle,
};

fn main() -> std::io::Result<()> {
    let log_file = File::create("tuitable-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");
    info!("Starting tuitable demo");

    let mut table = channels_table();
    let mut term = Terminal::new()?;
    term.draw(&ui(&table))?;

    loop {
        let events = term.poll(Some(Duration::from_millis(100)))?;

        let mut dirty = false;
        for event in events {
            match event {
                Event::Key { key: Key::Char('q'), .. } | Event::Key { key: Key::Escape, .. } => {
                    info!("Quit");
                    return Ok(());
                }
                Event::Key { key: Key::Char('c'), modifiers } if modifiers.ctrl => {
                    info!("Quit (ctrl-c)");
                    return Ok(());
                }
                Event::Click { x, y, .. } => {
                    if let ClickOutcome::Sorted { column, direction } = table.handle_click(x, y) {
                        debug!("Sorted column {column} ({direction:?})");
                        dirty = true;
                    }
                }
                Event::Resize { .. } => dirty = true,
                _ => {}
            }
        }

        if dirty {
            term.draw(&ui(&table))?;
        }
    }
}

fn ui(table: &Table) -> Vec<Line> {
    let mut lines = tuitable::render(table);
    lines.push(Line { spans: Vec::new() });
    lines.push(Line {
        spans: vec![Span::styled(
            "click a header to sort · q quits",
            TextStyle::new().dim(),
        )],
    });
    lines
}

fn channels_table() -> Table {
    let columns = vec![
        Column::new("Peer", 22),
        Column::new("Capacity (sat)", 16).align(Alignment::Right),
        Column::new("Local %", 10).align(Alignment::Right),
        Column::new("Uptime %", 11).align(Alignment::Right),
        Column::new("Last Update", 21),
    ];
    let rows = vec![
        Row::new(["ACINQ", "16,777,215", "42%", "99.7%", "2024-01-05 11:02:41"]),
        Row::new(["WalletOfSatoshi.com", "5,000,000", "81%", "98.2%", "2024-01-05 09:15:03"]),
        Row::new(["kraken", "2,345,678", "12%", "99.9%", "2023-12-28 22:47:10"]),
        Row::new(["bfx-lnd0", "10,000,000", "N/A", "97.4%", "2024-01-04 17:30:59"]),
        Row::new(["1ML.com node ALPHA", "700,000", "55%", "N/A", "2023-11-30 02:11:27"]),
        Row::new(["Boltz", "4,200,000", "67%", "99.1%", "-"]),
        Row::new(["okx", "25,000,000", "8%", "96.8%", "2024-01-03 05:54:36"]),
        Row::new(["LOOP", "1,250,000", "-", "99.5%", "2023-12-15 13:26:48"]),
    ];
    Table::with_rows(columns, rows)
}
