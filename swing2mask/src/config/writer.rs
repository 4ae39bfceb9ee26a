use maskfield_core::{Definition, MaskConfig, Result};
use std::io::Write;

/// Renders a [`MaskConfig`] into the `Inputmask({...})` invocation text the
/// masking runtime evaluates. The layout reproduces the deployed template
/// verbatim, down to its spacing; duplicate letters are written as-is and
/// resolved by the runtime's object semantics.
pub struct ConfigWriter<W: Write> {
    writer: W,
}

impl<W: Write> ConfigWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_config(mut self, config: &MaskConfig) -> Result<()> {
        writeln!(self.writer, "Inputmask({{")?;
        writeln!(self.writer, "    mask: \"{}\",", config.mask)?;
        writeln!(self.writer, "    greedy: {},", config.greedy)?;

        write!(self.writer, "    definitions: ")?;
        self.write_definitions(&config.definitions)?;

        if let Some(placeholder) = &config.placeholder {
            writeln!(self.writer, ",")?;
            writeln!(self.writer, "    placeholder: \"{}\",", placeholder)?;
        }

        write!(self.writer, "}})")?;
        Ok(())
    }

    fn write_definitions(&mut self, definitions: &[Definition]) -> Result<()> {
        writeln!(self.writer, "{{")?;
        for (i, definition) in definitions.iter().enumerate() {
            self.write_definition(definition)?;
            if i < definitions.len() - 1 {
                writeln!(self.writer, ",")?;
            }
        }
        write!(self.writer, "  \n}}")?;
        Ok(())
    }

    fn write_definition(&mut self, definition: &Definition) -> Result<()> {
        writeln!(self.writer, "     \"{}\": {{", definition.letter)?;

        write!(self.writer, "       validator: \"{}\"", definition.validator)?;
        if definition.casing.is_some() || definition.definition_symbol.is_some() {
            writeln!(self.writer, ",")?;
        } else {
            writeln!(self.writer)?;
        }

        if let Some(casing) = definition.casing {
            let trailing = if definition.definition_symbol.is_some() {
                ","
            } else {
                ""
            };
            writeln!(self.writer, "       casing: \"{}\"{} ", casing.as_str(), trailing)?;
        }
        if let Some(symbol) = &definition.definition_symbol {
            write!(self.writer, "       definitionSymbol: {}", symbol)?;
        }

        write!(self.writer, "     }}")?;
        Ok(())
    }
}
