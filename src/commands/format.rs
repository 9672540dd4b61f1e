//! Format command handler

use anyhow::Result;

use cueplay::time::{format_time, format_time_pair};

/// Print a time label, or a "current / total" pair.
#[cfg(not(tarpaulin_include))]
pub fn handle(seconds: f64, total: Option<f64>) -> Result<()> {
    match total {
        Some(total) => {
            let (current, total) = format_time_pair(seconds, total);
            println!("{} / {}", current, total);
        }
        None => println!("{}", format_time(seconds)),
    }
    Ok(())
}
