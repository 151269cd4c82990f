//! Shell command parsing

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <card>`
    Add(String),
    /// `deal`
    Deal,
    /// `black`
    Black,
    /// `play <challenge>`
    Play(String),
    /// `judge <blackCard>`
    Judge(String),
    /// `list`
    List,
    /// `clear`
    Clear,
    /// `models`
    Models,
    /// `help`
    Help,
    /// `exit` / `quit`
    Exit,
    /// Blank line
    Empty,
    /// Known command without its required argument; holds the usage line
    Usage(&'static str),
    /// Anything else; holds the first word
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, unquote(rest.trim())),
            None => (line, ""),
        };

        let with_arg = |make: fn(String) -> Command, usage: &'static str| {
            if rest.is_empty() {
                Command::Usage(usage)
            } else {
                make(rest.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            "add" => with_arg(Command::Add, "add <card>"),
            "play" => with_arg(Command::Play, "play <challenge>"),
            "judge" => with_arg(Command::Judge, "judge <blackCard>"),
            "deal" => Command::Deal,
            "black" => Command::Black,
            "list" => Command::List,
            "clear" => Command::Clear,
            "models" => Command::Models,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

/// Strip one pair of matching surrounding quotes
fn unquote(arg: &str) -> &str {
    for quote in ['"', '\''] {
        if arg.len() >= 2 && arg.starts_with(quote) && arg.ends_with(quote) {
            return &arg[1..arg.len() - 1];
        }
    }
    arg
}

pub const HELP: &str = "\
Commands:
  add <card>          Adds a card to the hand.
  deal                Replaces the hand with random cards from the white collection.
  black               Draws the next black card and lets the AI play against it.
  play <challenge>    Lets the AI pick a card from the hand for the challenge and plays it.
  judge <blackCard>   Lets the AI judge submissions, entered one per line, \"done\" to finish.
  list                Lists all cards in the hand.
  clear               Clears all cards from the hand.
  models              Lists available models and lets you select one.
  help                Shows this help.
  exit                Leaves the game.";
