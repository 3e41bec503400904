//! Serialized shapes of the public records.

#![cfg(feature = "serde")]

use bjhouse::{
    Card, Event, EventRecord, GameResult, Identity, PlayerAction, ScriptedShoe, Table,
    TableOptions, UNIT,
};
use serde_json::json;

#[test]
fn card_serializes_as_rank() {
    let card = Card::new(12).unwrap();
    assert_eq!(serde_json::to_value(card).unwrap(), json!(12));
    assert_eq!(serde_json::from_value::<Card>(json!(1)).unwrap(), Card::ACE);
    assert!(serde_json::from_value::<Card>(json!(14)).is_err());
    assert!(serde_json::from_value::<Card>(json!(0)).is_err());
}

#[test]
fn event_shapes() {
    let dealt = Event::CardDealt {
        game_id: 4,
        player: Identity::new(9),
        card: Card::KING,
        is_dealer: true,
    };
    assert_eq!(
        serde_json::to_value(dealt).unwrap(),
        json!({
            "CardDealt": { "game_id": 4, "player": 9, "card": 13, "is_dealer": true }
        })
    );

    let action = Event::PlayerAction {
        game_id: 4,
        player: Identity::new(9),
        action: PlayerAction::Hit,
    };
    assert_eq!(
        serde_json::to_value(action).unwrap(),
        json!({ "PlayerAction": { "game_id": 4, "player": 9, "action": "hit" } })
    );

    let ended = Event::GameEnded {
        game_id: 4,
        player: Identity::new(9),
        result: GameResult::Blackjack,
        payout: 25,
    };
    assert_eq!(
        serde_json::to_value(ended).unwrap(),
        json!({
            "GameEnded": { "game_id": 4, "player": 9, "result": "Blackjack", "payout": 25 }
        })
    );
}

#[test]
fn recorded_events_round_trip() {
    let shoe = ScriptedShoe::from_ranks(&[10, 9, 10, 7]).unwrap();
    let table = Table::with_source(Identity::new(1), TableOptions::default(), shoe).unwrap();
    table.deposit(Identity::new(1), UNIT).unwrap();
    let game_id = table.start_game(Identity::new(2), UNIT / 10).unwrap();
    table.stand(game_id, Identity::new(2)).unwrap();

    let records = table.events_since(0);
    let text = serde_json::to_string(&records).unwrap();
    let parsed: Vec<EventRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, records);

    let view = table.game_state(game_id).unwrap();
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["state"], json!("Settled"));
    assert_eq!(value["result"], json!("PlayerWin"));
    assert_eq!(value["dealer_cards"], json!([10, 7]));
}
