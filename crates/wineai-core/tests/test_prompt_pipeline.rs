use wineai_core::conversation::{ConversationLog, MessageRole, compose};
use wineai_core::filter::{FilterSelection, Grape, PriceRange, Region};
use wineai_core::persona::SYSTEM_PROMPT;
use wineai_core::reply::split_reply;

fn napa_filters() -> FilterSelection {
    FilterSelection {
        grape: Grape::Any,
        region: Region::NapaValley,
        price: PriceRange::new(20, 80),
    }
}

#[test]
fn test_full_turn_keeps_canonical_log_clean() {
    let mut log = ConversationLog::new();
    log.initialize();
    assert!(log.append_user("I'm feeling celebratory!"));

    let outbound = compose(&log, &napa_filters()).expect("log ends with a user message");

    // Outbound copy carries the filter context
    assert_eq!(outbound[0].role, MessageRole::System);
    assert_eq!(outbound[0].content, SYSTEM_PROMPT);
    assert_eq!(
        outbound.last().unwrap().content,
        "User Preferences: Grape=[Not Specified], Region=[Napa Valley (USA)], Price Range=[$20 - $80].\n\nUser Mood/Request: I'm feeling celebratory!"
    );

    // Canonical log keeps the raw text
    assert_eq!(log.last().unwrap().content, "I'm feeling celebratory!");

    let reply = split_reply(
        "A Schramsberg Blanc de Blancs would be perfect.\nImage Search Suggestion: Schramsberg Blanc de Blancs Bottle",
    );
    log.append_assistant(&reply.display_text);

    let history = log.history();
    assert_eq!(history.len(), 3);
    assert_eq!(
        history.last().unwrap().content,
        "A Schramsberg Blanc de Blancs would be perfect."
    );
    assert_eq!(
        reply.image_query(),
        Some("Schramsberg Blanc de Blancs Bottle")
    );
}

#[test]
fn test_second_turn_only_decorates_latest_message() {
    let mut log = ConversationLog::new();
    log.initialize();
    log.append_user("Something adventurous and bold?");
    log.append_assistant("Try a Barossa Shiraz.");
    log.append_user("Cheaper, please.");

    let filters = FilterSelection {
        grape: Grape::SyrahShiraz,
        region: Region::Any,
        price: PriceRange::new(10, 25),
    };
    let outbound = compose(&log, &filters).unwrap();

    assert_eq!(outbound.len(), 5);
    // Earlier user turn goes out verbatim
    assert_eq!(outbound[2].content, "Something adventurous and bold?");
    assert!(outbound[4]
        .content
        .starts_with("User Preferences: Grape=[Syrah/Shiraz], Region=[Not Specified], Price Range=[$10 - $25]."));
    assert!(outbound[4].content.ends_with("User Mood/Request: Cheaper, please."));
}
