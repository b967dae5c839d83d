pub mod decrypt;
pub mod encrypt;

use serde::Serialize;

/// Writes `value` to stdout as pretty JSON.
fn emit<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
