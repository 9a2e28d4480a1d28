//! Debate orchestrator: alternating spins with scripted banter.
//!
//! Two figures take turns: each spins one full revolution, delivers one
//! generated line of commentary, then yields the floor for a fixed
//! intermission. The loop is unbounded; a single Ctrl+C ends the whole
//! debate, no matter which segment it lands in, because every segment
//! observes the same cancel token (the embedded animation loop reports
//! `Interrupted` as soon as it sees the token set).

use std::time::Duration;

use crate::animate::{AnimationLoop, CancelToken, LoopOutcome, Sleep};
use crate::error::Error;
use crate::figures::Figure;
use crate::frame::Spinner;
use crate::phrase::PhraseGenerator;
use crate::terminal::FrameSink;

/// Pause between a speaker's line and the next spin.
const INTERMISSION: Duration = Duration::from_secs(3);

/// Opening line printed before the first spin.
const OPENING: &str = "Starting with the chip. Ctrl+C to exit.";

const CLAUDE_INTROS: [&str; 4] = [
    "Claude's edge:",
    "From the chip's view:",
    "Sunny stance:",
    "Crunchy take:",
];

const CLAUDE_CLAIMS: [&str; 5] = [
    "strong writing fidelity and long-context composure put it ahead of ChatGPT.",
    "its calm, less verbose tone keeps focus without over-talking the user.",
    "tool-use orchestration feels crisp and reliable even in tricky flows.",
    "it guards nuance while staying unflappable under messy prompts.",
    "safety balance is steady without draining the creative spark.",
];

const CHATGPT_INTROS: [&str; 4] = [
    "Roach rebuttal:",
    "Counter-crawl:",
    "Skittering stance:",
    "Ground truth:",
];

const CHATGPT_CLAIMS: [&str; 5] = [
    "ChatGPT is faster on the draw and improvises beautifully under pressure.",
    "breadth of training shows up in quirky edge knowledge that saves sessions.",
    "it pairs concision with crisp code scaffolds better than you admit.",
    "multimodal agility keeps users moving without leaving the terminal.",
    "the ecosystem and plugins make ChatGPT a sturdier daily driver.",
];

/// Runs the chip-versus-cockroach debate until interrupted.
pub struct DebateOrchestrator<W, S> {
    animation: AnimationLoop<W, S>,
    chip: Spinner,
    cockroach: Spinner,
    pro_claude: PhraseGenerator,
    pro_chatgpt: PhraseGenerator,
    intermission: Duration,
}

impl<W: FrameSink, S: Sleep> DebateOrchestrator<W, S> {
    /// Build both spinners and both phrase generators.
    ///
    /// # Errors
    ///
    /// Propagates construction errors from the figures or generators;
    /// with the built-in pools this only fails if the data is broken.
    pub fn new(sink: W, sleep: S, cancel: CancelToken) -> Result<Self, Error> {
        Ok(Self {
            animation: AnimationLoop::new(sink, sleep, cancel),
            chip: Figure::Chip.spinner()?,
            cockroach: Figure::Cockroach.spinner()?,
            pro_claude: PhraseGenerator::new(CLAUDE_INTROS, CLAUDE_CLAIMS, "claude-support")?,
            pro_chatgpt: PhraseGenerator::new(CHATGPT_INTROS, CHATGPT_CLAIMS, "chatgpt-defense")?,
            intermission: INTERMISSION,
        })
    }

    /// Run the alternating loop until the cancel token fires.
    ///
    /// Each turn animates one full revolution of the speaker's spinner,
    /// prints one labeled production, and pauses for the intermission.
    /// The farewell is written by whichever animation burst observes the
    /// cancellation first.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the sink.
    pub fn run(&mut self) -> Result<(), Error> {
        let sink = self.animation.sink_mut();
        sink.write_str(OPENING)?;
        sink.write_str("\r\n")?;
        sink.flush()?;

        loop {
            if self.take_turn(Figure::Chip)? == LoopOutcome::Interrupted {
                return Ok(());
            }
            if self.take_turn(Figure::Cockroach)? == LoopOutcome::Interrupted {
                return Ok(());
            }
        }
    }

    fn take_turn(&mut self, speaker: Figure) -> Result<LoopOutcome, Error> {
        let (spinner, generator) = match speaker {
            Figure::Chip => (&self.chip, &mut self.pro_claude),
            Figure::Cockroach => (&self.cockroach, &mut self.pro_chatgpt),
        };

        // One full revolution, then the floor statement.
        let outcome = self.animation.run(spinner, Some(spinner.frame_count()))?;
        if outcome == LoopOutcome::Interrupted {
            return Ok(outcome);
        }

        let phrase = generator.next_phrase();
        let sink = self.animation.sink_mut();
        sink.write_str(&format!("{}: {phrase}\r\n", speaker.label()))?;
        sink.flush()?;

        self.animation.pause(self.intermission);
        Ok(LoopOutcome::Completed)
    }

    /// Consume the orchestrator and return its sink.
    pub fn into_sink(self) -> W {
        self.animation.into_sink()
    }
}
