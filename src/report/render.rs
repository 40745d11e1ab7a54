use std::fmt;

use crate::report::driver::{Report, TargetResult};

impl fmt::Display for TargetResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.solution {
            Some(solution) => {
                let steps = if solution.len() == 1 { "step" } else { "steps" };
                write!(
                    f,
                    "{} = {}  ({} {})",
                    self.target,
                    solution.expression(),
                    solution.len(),
                    steps
                )?;
                for line in solution.trace() {
                    write!(f, "\n    {}", line)?;
                }
                Ok(())
            }
            None => write!(f, "{}: unreachable", self.target),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for result in self.results() {
            if !result.is_found() && self.truncated() {
                writeln!(f, "{}: not found within the search budget", result.target)?;
            } else {
                writeln!(f, "{}", result)?;
            }
        }

        let stats = self.stats();
        match self.truncation() {
            Some(reason) => write!(
                f,
                "Search truncated ({}) after {} expanded states",
                reason, stats.expanded
            )?,
            None => write!(
                f,
                "Search exhausted after {} expanded states",
                stats.expanded
            )?,
        }
        write!(
            f,
            " ({} discovered, {:.3}s)",
            stats.discovered,
            stats.elapsed.as_secs_f64()
        )
    }
}
