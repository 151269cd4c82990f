//! Turn controller
//!
//! Runs one play-turn or judge-turn: render the prompt, ask the model, classify
//! and validate its decision, and only then touch the hand. Every failure ends
//! the turn with an error and leaves the session exactly as it was.

use crate::client::{CompletionClient, JsonObject};
use crate::game::decision::{validate_judge, validate_play, AcceptedPlay, Decision, JudgePolicy, Judgment};
use crate::game::Session;
use crate::loader::TemplateSet;
use crate::{CahError, Result};

/// Drives model-mediated turns against a session
pub struct TurnController<C> {
    client: C,
    templates: TemplateSet,
    judge_policy: JudgePolicy,
}

impl<C: CompletionClient> TurnController<C> {
    pub fn new(client: C, templates: TemplateSet) -> Self {
        TurnController {
            client,
            templates,
            judge_policy: JudgePolicy::default(),
        }
    }

    pub fn with_judge_policy(mut self, policy: JudgePolicy) -> Self {
        self.judge_policy = policy;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn judge_policy(&self) -> JudgePolicy {
        self.judge_policy
    }

    /// Let the model play card(s) from the hand against `challenge`
    ///
    /// The hand is only mutated after the decision validates. An empty hand is
    /// rejected before any completion call.
    pub async fn play_turn(&self, session: &mut Session, challenge: &str) -> Result<AcceptedPlay> {
        if session.hand().is_empty() {
            return Err(CahError::EmptyHand);
        }

        let template = self.templates.load_play().await?;
        let prompt = template.render_play(challenge, session.hand().cards());

        let object = self.request_decision(session.model(), &prompt).await?;
        let decision = Decision::for_play(object);

        let accepted = validate_play(&decision, session.hand_mut()).inspect_err(|e| {
            tracing::warn!(error = %e, ?decision, "play rejected");
        })?;

        for card in &accepted.played {
            tracing::info!(card = %card, "played");
        }
        Ok(accepted)
    }

    /// Let the model pick a winner among `submissions` for `black_card`
    ///
    /// Submissions are turn-local; nothing in the session changes.
    pub async fn judge_turn<S: AsRef<str>>(
        &self,
        session: &Session,
        black_card: &str,
        submissions: &[S],
    ) -> Result<Judgment> {
        if submissions.is_empty() {
            return Err(CahError::NoSubmissions);
        }

        let template = self.templates.load_judge().await?;
        let prompt = template.render_judge(black_card, submissions);

        let object = self.request_decision(session.model(), &prompt).await?;
        let decision = Decision::for_judge(object);

        let judgment = validate_judge(&decision, submissions, self.judge_policy).inspect_err(|e| {
            tracing::warn!(error = %e, ?decision, "judgment rejected");
        })?;

        tracing::info!(winner = %judgment.winner, quip = %judgment.quip, "judged");
        Ok(judgment)
    }

    /// Completion plus extraction; transport failures become `CompletionFailed`
    async fn request_decision(&self, model: &str, prompt: &str) -> Result<JsonObject> {
        tracing::debug!(model, prompt, "requesting decision");
        let object = self
            .client
            .complete_json(model, prompt)
            .await
            .map_err(|e| match e {
                CahError::EndpointUnreachable(message) => CahError::CompletionFailed(message),
                other => other,
            })?;

        object.ok_or_else(|| {
            CahError::NoDecision("model output contained no trailing JSON object".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ScriptedClient;
    use crate::core::Deck;
    use std::path::Path;

    fn templates(dir: &Path) -> TemplateSet {
        let play = dir.join("play.txt");
        let judge = dir.join("judge.txt");
        std::fs::write(&play, "Challenge: {challenge}\n{cards}").unwrap();
        std::fs::write(&judge, "Black: {prompt}\n{submissions}").unwrap();
        TemplateSet::new(play, judge)
    }

    #[tokio::test]
    async fn test_play_prompt_numbers_hand() {
        let dir = tempfile::tempdir().unwrap();
        let client = ScriptedClient::new(["m"]).reply("{\"card\":\"B\"}");
        let controller = TurnController::new(client, templates(dir.path()));
        let mut session = Session::with_hand("m", Deck::from_cards(["A", "B"]));

        controller.play_turn(&mut session, "Why?").await.unwrap();

        let prompts = controller.client().prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].0, "m");
        assert_eq!(prompts[0].1, "Challenge: Why?\n1. A\n2. B");
    }

    #[tokio::test]
    async fn test_empty_hand_issues_no_completion() {
        let dir = tempfile::tempdir().unwrap();
        let client = ScriptedClient::new(["m"]).reply("{\"card\":\"A\"}");
        let controller = TurnController::new(client, templates(dir.path()));
        let mut session = Session::with_hand("m", Deck::new());

        let err = controller.play_turn(&mut session, "Why?").await.unwrap_err();
        assert!(matches!(err, CahError::EmptyHand));
        assert_eq!(controller.client().calls(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_completion_failed() {
        let dir = tempfile::tempdir().unwrap();
        let client = ScriptedClient::new(["m"]).fail("connection refused");
        let controller = TurnController::new(client, templates(dir.path()));
        let mut session = Session::with_hand("m", Deck::from_cards(["A"]));

        let err = controller.play_turn(&mut session, "Why?").await.unwrap_err();
        assert!(matches!(err, CahError::CompletionFailed(ref m) if m == "connection refused"));
        assert_eq!(session.hand().len(), 1);
    }

    #[tokio::test]
    async fn test_judge_without_submissions() {
        let dir = tempfile::tempdir().unwrap();
        let controller = TurnController::new(ScriptedClient::new(["m"]), templates(dir.path()));
        let session = Session::with_hand("m", Deck::new());

        let err = controller
            .judge_turn::<String>(&session, "Why?", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, CahError::NoSubmissions));
        assert_eq!(controller.client().calls(), 0);
    }
}
