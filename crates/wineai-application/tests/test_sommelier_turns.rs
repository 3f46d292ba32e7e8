use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use wineai_application::{
    ChatSession, PROVIDER_ERROR_REPLY, SommelierUseCase, TurnFailure, TurnOutcome,
    UNEXPECTED_ERROR_REPLY,
};
use wineai_core::completion::{
    CompletionClient, CompletionError, CompletionRequest, GenerationParams,
};
use wineai_core::conversation::MessageRole;
use wineai_core::filter::{FilterSelection, Grape, PriceRange, Region};
use wineai_core::persona::WELCOME_MESSAGE;

/// Replays scripted results and remembers every request it was given.
struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Result<String, CompletionError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn provider_name(&self) -> &str {
        "OpenAI"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().await.push(request.clone());
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::InvalidResponse("script exhausted".into())))
    }
}

fn usecase(client: Arc<ScriptedClient>) -> SommelierUseCase {
    SommelierUseCase::new(client, GenerationParams::default())
}

fn napa_filters() -> FilterSelection {
    FilterSelection {
        grape: Grape::Any,
        region: Region::NapaValley,
        price: PriceRange::new(20, 80),
    }
}

#[tokio::test]
async fn test_turn_records_split_reply() {
    let client = ScriptedClient::new(vec![Ok(
        "Try a Napa Cabernet, bold and celebratory.\nImage Search Suggestion: Silver Oak Cabernet Bottle"
            .to_string(),
    )]);
    let usecase = usecase(client.clone());
    let mut session = ChatSession::new();

    let outcome = usecase
        .handle_turn(&mut session, &napa_filters(), Some("I'm feeling celebratory!"))
        .await
        .unwrap();

    let TurnOutcome::Replied(turn) = outcome else {
        panic!("expected a reply");
    };
    assert_eq!(turn.user_text, "I'm feeling celebratory!");
    assert_eq!(
        turn.reply.display_text,
        "Try a Napa Cabernet, bold and celebratory."
    );
    assert_eq!(turn.reply.image_query(), Some("Silver Oak Cabernet Bottle"));
    assert!(turn.failure.is_none());

    let history = session.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].content, WELCOME_MESSAGE);
    assert_eq!(history[1].content, "I'm feeling celebratory!");
    assert_eq!(history[2].role, MessageRole::Assistant);
    assert_eq!(
        history[2].content,
        "Try a Napa Cabernet, bold and celebratory."
    );
}

#[tokio::test]
async fn test_outbound_request_carries_filters_but_log_does_not() {
    let client = ScriptedClient::new(vec![Ok("A Riesling.".to_string())]);
    let usecase = usecase(client.clone());
    let mut session = ChatSession::new();

    usecase
        .handle_turn(&mut session, &napa_filters(), Some("Something light"))
        .await
        .unwrap();

    let requests = client.requests().await;
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.messages.len(), 3);
    assert_eq!(request.messages[0].role, MessageRole::System);
    assert_eq!(
        request.messages[2].content,
        "User Preferences: Grape=[Not Specified], Region=[Napa Valley (USA)], Price Range=[$20 - $80].\n\nUser Mood/Request: Something light"
    );
    assert_eq!(request.params.temperature, 0.7);
    assert_eq!(request.params.max_tokens, 300);
    assert!(!request.params.stream);

    assert_eq!(session.log().messages()[2].content, "Something light");
}

#[tokio::test]
async fn test_only_latest_user_message_is_decorated() {
    let client = ScriptedClient::new(vec![Ok("First.".to_string()), Ok("Second.".to_string())]);
    let usecase = usecase(client.clone());
    let mut session = ChatSession::new();

    usecase
        .handle_turn(&mut session, &napa_filters(), Some("first request"))
        .await
        .unwrap();
    usecase
        .handle_turn(&mut session, &FilterSelection::default(), Some("second request"))
        .await
        .unwrap();

    let requests = client.requests().await;
    let second = &requests[1];
    assert_eq!(second.messages.len(), 5);
    assert_eq!(second.messages[2].content, "first request");
    assert_eq!(second.messages[3].content, "First.");
    assert!(second.messages[4].content.starts_with(
        "User Preferences: Grape=[Not Specified], Region=[Not Specified]"
    ));
    assert!(second.messages[4].content.ends_with("User Mood/Request: second request"));
}

#[tokio::test]
async fn test_blank_input_makes_no_call() {
    let client = ScriptedClient::new(vec![]);
    let usecase = usecase(client.clone());
    let mut session = ChatSession::new();

    let outcome = usecase
        .handle_turn(&mut session, &napa_filters(), Some("   "))
        .await
        .unwrap();

    assert_eq!(outcome, TurnOutcome::Skipped);
    assert!(client.requests().await.is_empty());
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_preset_overrides_typed_input_once() {
    let client = ScriptedClient::new(vec![Ok("Bubbles.".to_string()), Ok("Tea.".to_string())]);
    let usecase = usecase(client.clone());
    let mut session = ChatSession::new();
    session.select_prompt("I'm feeling celebratory!");

    usecase
        .handle_turn(&mut session, &napa_filters(), Some("ignored"))
        .await
        .unwrap();
    usecase
        .handle_turn(&mut session, &napa_filters(), Some("typed"))
        .await
        .unwrap();

    let history = session.history();
    assert_eq!(history[1].content, "I'm feeling celebratory!");
    assert_eq!(history[3].content, "typed");
}

#[tokio::test]
async fn test_provider_failure_becomes_apology() {
    let client = ScriptedClient::new(vec![
        Err(CompletionError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
            retryable: false,
        }),
        Ok("Recovered.".to_string()),
    ]);
    let usecase = usecase(client.clone());
    let mut session = ChatSession::new();

    let TurnOutcome::Replied(turn) = usecase
        .handle_turn(&mut session, &napa_filters(), Some("Anything red"))
        .await
        .unwrap()
    else {
        panic!("expected a reply");
    };

    assert_eq!(turn.reply.display_text, PROVIDER_ERROR_REPLY);
    assert!(turn.reply.image_query().is_none());
    let failure = turn.failure.unwrap();
    assert!(matches!(failure, TurnFailure::Provider { .. }));
    assert!(failure.banner().starts_with("OpenAI API Error: "));

    let last = session.log().last().unwrap();
    assert_eq!(last.role, MessageRole::Assistant);
    assert_eq!(last.content, PROVIDER_ERROR_REPLY);

    // The session keeps working after a failure.
    let next = usecase
        .handle_turn(&mut session, &napa_filters(), Some("Try again"))
        .await
        .unwrap();
    assert!(matches!(next, TurnOutcome::Replied(ref turn) if turn.failure.is_none()));
    assert_eq!(session.history().len(), 5);
}

#[tokio::test]
async fn test_invalid_response_becomes_unexpected_apology() {
    let client = ScriptedClient::new(vec![Err(CompletionError::InvalidResponse(
        "missing choices".to_string(),
    ))]);
    let usecase = usecase(client);
    let mut session = ChatSession::new();

    let TurnOutcome::Replied(turn) = usecase
        .handle_turn(&mut session, &napa_filters(), Some("Something bold"))
        .await
        .unwrap()
    else {
        panic!("expected a reply");
    };

    assert_eq!(turn.reply.display_text, UNEXPECTED_ERROR_REPLY);
    assert_eq!(
        turn.failure.unwrap().banner(),
        "An unexpected error occurred: invalid response: missing choices"
    );
}

#[tokio::test]
async fn test_blank_reply_becomes_unexpected_apology() {
    let client = ScriptedClient::new(vec![Ok("   \n  ".to_string()), Ok("A Barolo.".to_string())]);
    let usecase = usecase(client.clone());
    let mut session = ChatSession::new();

    let TurnOutcome::Replied(turn) = usecase
        .handle_turn(&mut session, &napa_filters(), Some("Something earthy"))
        .await
        .unwrap()
    else {
        panic!("expected a reply");
    };

    assert_eq!(turn.reply.display_text, UNEXPECTED_ERROR_REPLY);
    assert!(matches!(turn.failure, Some(TurnFailure::Unexpected { .. })));

    usecase
        .handle_turn(&mut session, &napa_filters(), Some("Try again"))
        .await
        .unwrap();

    // No empty assistant message is ever sent back to the provider.
    let requests = client.requests().await;
    assert!(requests[1].messages.iter().all(|message| !message.content.trim().is_empty()));
    assert_eq!(requests[1].messages[3].content, UNEXPECTED_ERROR_REPLY);
}

#[tokio::test]
async fn test_complete_turn_without_user_message_is_rejected() {
    let client = ScriptedClient::new(vec![]);
    let usecase = usecase(client.clone());
    let mut session = ChatSession::new();

    let err = usecase
        .complete_turn(&mut session, &napa_filters())
        .await
        .unwrap_err();

    assert!(err.is_internal());
    assert!(client.requests().await.is_empty());
}
