//! Output surface for the shell: paced printing, spinners and screen control.

use console::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::Display;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CLEAR: &str = "\x1b[2J\x1b[1;1H";

/// Sleep-based delays used purely for visual effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    pub typing: Duration,
    pub spinner_tick: Duration,
    /// Scales every explicit pause; 0.0 disables pacing.
    pub scale: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(30),
            spinner_tick: Duration::from_millis(100),
            scale: 1.0,
        }
    }
}

impl Pacing {
    pub fn instant() -> Self {
        Self { typing: Duration::ZERO, spinner_tick: Duration::ZERO, scale: 0.0 }
    }

    pub fn is_instant(&self) -> bool {
        self.scale == 0.0
    }

    fn scaled(&self, secs: f64) -> Duration {
        Duration::from_secs_f64((secs * self.scale).max(0.0))
    }
}

pub struct Screen<W: Write> {
    out: W,
    pacing: Pacing,
    rng: StdRng,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, pacing: Pacing) -> Self {
        Self { out, pacing, rng: StdRng::from_entropy() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn write(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Section heading followed by a rule.
    pub fn heading(&mut self, title: impl Display) -> io::Result<()> {
        writeln!(self.out, "\n{}", style(title).cyan().bold())?;
        writeln!(self.out, "{}\n", style("═".repeat(60)).black().bright())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.write(CLEAR)
    }

    /// Pause for `secs` seconds, scaled by the pacing factor.
    pub fn pause(&mut self, secs: f64) -> io::Result<()> {
        self.out.flush()?;
        if !self.pacing.is_instant() {
            thread::sleep(self.pacing.scaled(secs));
        }
        Ok(())
    }

    /// Print one character at a time.
    pub fn type_out(&mut self, text: &str) -> io::Result<()> {
        if self.pacing.is_instant() || self.pacing.typing.is_zero() {
            return self.line(text);
        }
        for ch in text.chars() {
            write!(self.out, "{ch}")?;
            self.out.flush()?;
            thread::sleep(self.pacing.typing);
        }
        writeln!(self.out)
    }

    /// Braille spinner shown for `secs` seconds, then a done marker.
    pub fn spinner(&mut self, label: &str, secs: f64) -> io::Result<()> {
        let total = self.pacing.scaled(secs);
        let tick = self.pacing.spinner_tick;
        let frames = if tick.is_zero() {
            1
        } else {
            (total.as_millis() / tick.as_millis().max(1)).max(1) as usize
        };

        for i in 0..frames {
            let frame = SPINNER_FRAMES[i % SPINNER_FRAMES.len()];
            write!(self.out, "\r{}", style(format!("{frame} {label}...")).cyan())?;
            self.out.flush()?;
            if !self.pacing.is_instant() {
                thread::sleep(tick);
            }
        }
        writeln!(self.out, "\r{}           ", style("✓ Done!").green())
    }
}
