//! Interactive command shell
//!
//! Reads commands line by line and maps each one onto exactly one session or
//! turn operation. No command error escapes [`Shell::execute`]: failures are
//! reported to the user and the loop continues.

pub mod command;
pub mod spinner;

pub use command::Command;
pub use spinner::Spinner;

use crate::client::CompletionClient;
use crate::game::{collect_submissions, Session, TurnController, DEFAULT_HAND_SIZE};
use crate::input::LineSource;
use crate::{CahError, Result};
use std::fmt::Display;
use std::io::Write;
use std::ops::ControlFlow;

pub const PROMPT: &str = "> ";
const MODEL_CHOICE_PROMPT: &str = "Enter the number of the model to use: ";

/// The game shell
pub struct Shell<C, L, W> {
    controller: TurnController<C>,
    session: Session,
    input: L,
    out: W,
    hand_size: usize,
    progress: bool,
}

impl<C, L, W> Shell<C, L, W>
where
    C: CompletionClient,
    L: LineSource,
    W: Write,
{
    pub fn new(controller: TurnController<C>, session: Session, input: L, out: W) -> Self {
        Shell {
            controller,
            session,
            input,
            out,
            hand_size: DEFAULT_HAND_SIZE,
            progress: false,
        }
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Show a spinner while waiting on the model
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn controller(&self) -> &TurnController<C> {
        &self.controller
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until `exit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        while let Some(line) = self.input.read_line(PROMPT).await? {
            if self.execute(Command::parse(&line)).await.is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command to completion
    pub async fn execute(&mut self, command: Command) -> ControlFlow<()> {
        tracing::debug!(?command, "executing");
        match command {
            Command::Add(card) => {
                let card = self.session.add_card(card);
                self.say(format_args!("Card \"{card}\" added to the hand."));
            }
            Command::Deal => {
                let dealt = self.session.deal(self.hand_size);
                self.say(format_args!("Dealt {dealt} new cards to your hand."));
            }
            Command::Black => match self.session.next_black() {
                Some(card) => {
                    self.say(format_args!("Black card: {card}"));
                    self.play(card.as_str()).await;
                }
                None => self.say("No black cards available."),
            },
            Command::Play(challenge) => self.play(&challenge).await,
            Command::Judge(black_card) => self.judge(&black_card).await,
            Command::List => self.list(),
            Command::Clear => {
                self.session.clear_hand();
                self.say("Hand has been cleared.");
            }
            Command::Models => self.choose_model().await,
            Command::Help => self.say(command::HELP),
            Command::Exit => return ControlFlow::Break(()),
            Command::Empty => {}
            Command::Usage(usage) => self.say(format_args!("Usage: {usage}")),
            Command::Unknown(word) => self.say(format_args!("Unknown command: {word}")),
        }
        ControlFlow::Continue(())
    }

    async fn play(&mut self, challenge: &str) {
        self.say("Waiting for AI...");
        let spinner = self.progress.then(Spinner::start);
        let result = self.controller.play_turn(&mut self.session, challenge).await;
        if let Some(spinner) = spinner {
            spinner.stop().await;
        }

        match result {
            Ok(accepted) => {
                for card in &accepted.played {
                    self.say(format_args!(" + PLAY {card}"));
                }
            }
            Err(e) => self.fail(&e),
        }
    }

    async fn judge(&mut self, black_card: &str) {
        self.say(format_args!("Judging for black card: \"{black_card}\""));

        let submissions = match collect_submissions(&mut self.input).await {
            Ok(submissions) => submissions,
            Err(e) => {
                self.fail(&e);
                return;
            }
        };
        self.say(format_args!("Submissions collected: {}", submissions.len()));
        self.say("Waiting for AI to judge...");

        let spinner = self.progress.then(Spinner::start);
        let result = self
            .controller
            .judge_turn(&self.session, black_card, submissions.as_slice())
            .await;
        if let Some(spinner) = spinner {
            spinner.stop().await;
        }

        match result {
            Ok(judgment) => {
                self.say(format_args!("The winner is... \"{}\"", judgment.winner));
                self.say(format_args!("\" {} \"", judgment.quip));
            }
            Err(e) => self.fail(&e),
        }
    }

    fn list(&mut self) {
        if self.session.hand().is_empty() {
            self.say("No cards in hand.");
            return;
        }
        let lines: Vec<String> = self
            .session
            .hand()
            .iter()
            .enumerate()
            .map(|(idx, card)| format!("{}: {card}", idx + 1))
            .collect();
        self.say("Cards in hand:");
        for line in lines {
            self.say(line);
        }
    }

    async fn choose_model(&mut self) {
        let models = match self.controller.client().list_models().await {
            Ok(models) => models,
            Err(e) => {
                self.say(format_args!("Failed to retrieve models: {e}"));
                return;
            }
        };

        self.say("Available models:");
        for (idx, model) in models.iter().enumerate() {
            self.say(format_args!("{}: {model}", idx + 1));
        }

        loop {
            let line = match self.input.read_line(MODEL_CHOICE_PROMPT).await {
                Ok(Some(line)) => line,
                Ok(None) => return,
                Err(e) => {
                    self.fail(&e);
                    return;
                }
            };
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=models.len()).contains(&choice) => {
                    let model = &models[choice - 1];
                    self.session.set_model(model.as_str());
                    tracing::info!(model = %model, "model selected");
                    self.say(format_args!("Model set to: {model}"));
                    return;
                }
                _ => self.say("Invalid selection"),
            }
        }
    }

    fn fail(&mut self, error: &CahError) {
        tracing::warn!(error = %error, "turn failed");
        let message = match error {
            CahError::NoDecision(_) => "No suitable answer in the model output.".to_string(),
            other => other.to_string(),
        };
        self.say(format_args!(" + FAILED: {message}"));
    }

    fn say(&mut self, message: impl Display) {
        // Output errors (closed pipe) must not end the session
        let _ = writeln!(self.out, "{message}");
    }
}
