//! Terminal front end: a line-based input provider and a narrating observer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use game_core::{Dungeon, InputClosed, InputProvider, LogEvent, Outcome, RunObserver, RunReport};
use log::warn;

/// Answers prompts by writing them to `output` and reading one line from `input`.
pub struct ConsoleInput<R, W> {
    input: R,
    output: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn request(&mut self, prompt: &str, _options: &[&str]) -> Result<String, InputClosed> {
        write!(self.output, "{prompt}").and_then(|()| self.output.flush()).map_err(|e| {
            warn!("could not write prompt: {e}");
            InputClosed
        })?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(InputClosed),
            Ok(_) => Ok(line),
            Err(e) => {
                warn!("could not read answer: {e}");
                Err(InputClosed)
            }
        }
    }
}

pub fn banner(text: &str) -> String {
    let rule = "=".repeat(text.chars().count() + 4);
    format!("{rule}\n  {text}\n{rule}")
}

/// Prints the game as it unfolds: preamble, turn headers, moves, maps and the ending.
///
/// Write failures are remembered and reported by [`ConsoleNarrator::finish`].
pub struct ConsoleNarrator<W> {
    output: W,
    start_prompt: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(output: W) -> Self {
        Self { output, start_prompt: false, error: None }
    }

    /// Waits for enter on stdin after the first map instead of starting straight away.
    pub fn with_start_prompt(mut self, start_prompt: bool) -> Self {
        self.start_prompt = start_prompt;
        self
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.output),
        }
    }

    fn say(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.output, "{text}") {
            self.error = Some(e);
        }
    }

    fn preamble(&mut self, dungeon: &Dungeon) {
        let adventurer = dungeon.adventurer();
        let troll = dungeon.troll();
        self.say(&banner("Troll Treasure"));
        self.say(&format!(
            "\nThe {} is looking for treasure in a mysterious dungeon.\n\
             Will they succeed or be dinner for the {} that lurks there?\n",
            adventurer.name, troll.name
        ));
        self.say("The map of the dungeon is below:");
        self.say("o : an empty room");
        self.say("o - o : connected rooms");
        self.say(&format!("{} : {}", troll.symbol, troll.name));
        self.say(&format!("{} : {}", adventurer.symbol, adventurer.name));
        self.say(&format!("{} : the treasure\n", dungeon.treasure().symbol));
    }

    fn wait_for_enter(&mut self) {
        if let Err(e) = write!(self.output, "\nPress enter to continue...")
            .and_then(|()| self.output.flush())
        {
            self.error = Some(e);
            return;
        }
        let mut line = String::new();
        if let Err(e) = io::stdin().read_line(&mut line) {
            warn!("could not read from stdin: {e}");
        }
    }
}

impl<W: Write> RunObserver for ConsoleNarrator<W> {
    fn on_start(&mut self, dungeon: &Dungeon) {
        self.preamble(dungeon);
        self.say(&dungeon.draw());
        if self.start_prompt {
            self.wait_for_enter();
        } else {
            self.say("\nLet the hunt begin!");
        }
    }

    fn on_turn(&mut self, turn: u32, _dungeon: &Dungeon) {
        self.say(&format!("\nTurn {turn}"));
    }

    fn on_update(&mut self, dungeon: &Dungeon, events: &[LogEvent]) {
        for event in events {
            let name = &dungeon.agent(event.role()).name;
            let line = match event {
                LogEvent::Moved { direction, .. } => format!("{name} moves {direction}"),
                LogEvent::Trapped { .. } => format!("{name} is trapped"),
            };
            self.say(&line);
        }
        self.say("");
        self.say(&dungeon.draw());
    }

    fn on_finish(&mut self, dungeon: &Dungeon, report: &RunReport) {
        let adventurer = &dungeon.adventurer().name;
        let troll = &dungeon.troll().name;
        let (line, title) = match report.outcome {
            Outcome::AdventurerWins => {
                (format!("\n{adventurer} gets the treasure and returns a hero!"), "WINNER")
            }
            Outcome::TrollWins => (format!("\n{troll} will eat tonight!"), "GAME OVER"),
            Outcome::Ongoing => {
                (format!("\nNo one saw {adventurer} or {troll} again."), "STALEMATE")
            }
        };
        self.say(&line);
        self.say(&banner(title));
    }
}
