use super::{
    validate_confidence, validate_impact, validate_positive, CONFIDENCE_RULE, EFFORT_RULE,
    IMPACT_RULE, REACH_RULE,
};
use crate::error::{Result, SprintKitError};
use crate::types::feature::{Feature, Impact};
use std::io::{BufRead, Write};

const RULE: &str = "======================================================================";

/// Line-oriented feature entry; end of input counts as a cancel.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn collect_features(&mut self) -> Result<Vec<Feature>> {
        self.print_banner()?;

        let mut features = Vec::new();
        loop {
            writeln!(self.output, "\n--- Feature {} ---", features.len() + 1)?;

            let name = self.read_name("Feature name (or 'done' to finish): ")?;
            if name.eq_ignore_ascii_case("done") {
                if !features.is_empty() {
                    break;
                }
                writeln!(self.output, "Please enter at least one feature")?;
                continue;
            }

            let reach = self.read_number(
                "Reach (users affected per time period): ",
                validate_positive,
                REACH_RULE,
            )?;
            let impact =
                self.read_number("Impact (0.25, 0.5, 1, 2, or 3): ", validate_impact, IMPACT_RULE)?;
            let confidence =
                self.read_number("Confidence (0-100%): ", validate_confidence, CONFIDENCE_RULE)?;
            let effort =
                self.read_number("Effort (person-months): ", validate_positive, EFFORT_RULE)?;

            let feature = Feature::new(&name, reach, impact, confidence, effort)?;
            writeln!(
                self.output,
                "\nAdded: {} (RICE Score: {:.2})",
                feature.name, feature.rice_score
            )?;
            features.push(feature);
        }

        Ok(features)
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "RICE Score Calculator - Interactive Mode")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(
            self.output,
            "\nRICE = (Reach x Impact x Confidence) / Effort\n"
        )?;
        writeln!(self.output, "Impact Scale:")?;
        for impact in Impact::ALL {
            writeln!(
                self.output,
                "  {:<4} = {} impact",
                impact.value(),
                impact.label()
            )?;
        }
        writeln!(
            self.output,
            "\nEnter features one at a time. Type 'done' when finished."
        )?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SprintKitError::Cancelled);
        }
        Ok(line.trim().to_string())
    }

    fn read_name(&mut self, prompt: &str) -> Result<String> {
        loop {
            let name = self.read_line(prompt)?;
            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.output, "Error: Input cannot be empty")?;
        }
    }

    fn read_number(&mut self, prompt: &str, check: fn(f64) -> bool, rule: &str) -> Result<f64> {
        loop {
            let raw = self.read_line(prompt)?;
            match raw.parse::<f64>() {
                Ok(value) if check(value) => return Ok(value),
                Ok(_) => writeln!(self.output, "Error: {rule}")?,
                Err(_) => writeln!(self.output, "Error: Please enter a valid number")?,
            }
        }
    }
}
