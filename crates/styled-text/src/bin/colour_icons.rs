//! Writes the full set of circular colour-swatch icons.

use anyhow::Result;

use styled_text::icons;

fn main() -> Result<()> {
    env_logger::init();
    icons::write_all(icons::OUTPUT_DIR)?;
    Ok(())
}
