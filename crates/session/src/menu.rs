use core_types::PetRecord;
use std::io::{self, Write};

/// Renders the 1-based numbered list of pet names plus the quit option.
/// Pure display; never touches the records.
pub fn render<W: Write>(out: &mut W, pets: &[PetRecord]) -> io::Result<()> {
    writeln!(out, "\nPlease choose a pet from the list below:")?;
    writeln!(out)?;
    for (index, pet) in pets.iter().enumerate() {
        writeln!(out, "[{}] {}", index + 1, pet.name)?;
    }
    writeln!(out)?;
    writeln!(out, "[Q] Quit")?;
    Ok(())
}
