//! Interactive prize entry

use std::io::{self, BufRead, Write};

use raffle_core::PrizeTier;

/// Collects prize tiers from an operator, one (value, quantity) pair at a
/// time. Invalid entries are reported and asked again.
pub struct PrizeCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PrizeCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read tiers until the operator declines to add more or input ends
    pub fn collect(&mut self) -> io::Result<Vec<PrizeTier>> {
        let mut tiers = Vec::new();

        loop {
            let Some(value) = self.ask("Enter the prize value (e.g., 50): ")? else {
                break;
            };
            let Some(quantity) = self.ask("Enter the quantity of this prize: ")? else {
                break;
            };

            match PrizeTier::parse(&value, &quantity) {
                Ok(tier) => {
                    log::debug!("Prize tier added: ${} x{}", tier.value, tier.quantity);
                    tiers.push(tier);
                }
                Err(e) => {
                    writeln!(self.output, "Invalid input: {e}. Please try again.")?;
                    continue;
                }
            }

            match self.ask("Add another prize? [y/N]: ")? {
                Some(answer) if is_yes(&answer) => continue,
                _ => break,
            }
        }

        Ok(tiers)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
