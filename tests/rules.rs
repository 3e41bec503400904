//! Hand evaluation, dealer policy, payout and card source tests.

use bjhouse::game::dealer::play;
use bjhouse::{
    Card, CardSource, ChaChaShoe, GameResult, InvalidRank, LimitError, MAX_WAGER, ScriptedShoe,
    TableOptions, UNIT, evaluate, settle,
};

fn card(rank: u8) -> Card {
    Card::new(rank).unwrap()
}

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(rank)).collect()
}

#[test]
fn ace_and_ten_is_blackjack() {
    let value = evaluate(&cards(&[1, 10]));
    assert_eq!(value.total, 21);
    assert!(value.is_blackjack);
    assert!(!value.is_bust);
    assert!(value.is_soft);

    let face = evaluate(&cards(&[12, 1]));
    assert_eq!(face.total, 21);
    assert!(face.is_blackjack);
}

#[test]
fn over_21_without_aces_busts() {
    let value = evaluate(&cards(&[10, 10, 5]));
    assert_eq!(value.total, 25);
    assert!(value.is_bust);
    assert!(!value.is_blackjack);
}

#[test]
fn aces_soften_only_as_needed() {
    assert_eq!(evaluate(&cards(&[1, 1])).total, 12);
    assert_eq!(evaluate(&cards(&[1, 1, 1])).total, 13);

    let soft = evaluate(&cards(&[1, 6]));
    assert_eq!(soft.total, 17);
    assert!(soft.is_soft);

    let hard = evaluate(&cards(&[1, 6, 10]));
    assert_eq!(hard.total, 17);
    assert!(!hard.is_soft);

    let three_card_21 = evaluate(&cards(&[1, 1, 9]));
    assert_eq!(three_card_21.total, 21);
    assert!(!three_card_21.is_blackjack);
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(evaluate(&cards(&[11, 12])).total, 20);
    assert_eq!(evaluate(&cards(&[13, 2])).total, 12);
}

#[test]
fn card_rank_validation() {
    assert!(Card::new(0).is_none());
    assert!(Card::new(14).is_none());
    assert_eq!(Card::try_from(14_u8), Err(InvalidRank(14)));
    assert_eq!(u8::from(card(7)), 7);
    assert_eq!(card(1).to_string(), "A");
    assert_eq!(card(12).to_string(), "Q");
    assert_eq!(card(9).to_string(), "9");
}

#[test]
fn dealer_stops_at_17() {
    let mut hand = cards(&[10, 7]);
    let drawn = play(&mut hand, || panic!("dealer must not draw on 17"));
    assert!(drawn.is_empty());

    let mut soft = cards(&[1, 6]);
    let drawn = play(&mut soft, || panic!("dealer stands on soft 17"));
    assert!(drawn.is_empty());
}

#[test]
fn dealer_draws_in_order_until_done() {
    let mut hand = cards(&[2, 3]);
    let mut draws = cards(&[4, 2, 5, 1, 10]).into_iter();
    let drawn = play(&mut hand, || draws.next().unwrap());

    // 16 after three draws; the ace has to count as 1, giving a hard 17.
    assert_eq!(drawn, cards(&[4, 2, 5, 1]));
    assert_eq!(hand.len(), 6);
    let value = evaluate(&hand);
    assert_eq!(value.total, 17);
    assert!(!value.is_soft);
    assert_eq!(draws.next(), Some(card(10)));
}

#[test]
fn dealer_never_leaves_a_live_hand_below_17() {
    for seed in 0..200 {
        let mut shoe = ChaChaShoe::new(seed);
        let mut hand = vec![shoe.draw(), shoe.draw()];
        play(&mut hand, || shoe.draw());

        let value = evaluate(&hand);
        assert!(value.is_bust || value.total >= 17, "seed {seed}: {value:?}");
        if !value.is_bust {
            assert!(value.total <= 21);
        }
    }
}

#[test]
fn dealer_busting_on_the_last_draw() {
    let mut hand = cards(&[3, 10]);
    let drawn = play(&mut hand, || card(9));
    assert_eq!(drawn.len(), 1);
    let value = evaluate(&hand);
    assert_eq!(value.total, 22);
    assert!(value.is_bust);
}

#[test]
fn payouts_by_outcome() {
    let bet = 100;
    let twenty = evaluate(&cards(&[10, 10]));
    let nineteen = evaluate(&cards(&[10, 9]));
    let bust = evaluate(&cards(&[10, 9, 5]));
    let blackjack = evaluate(&cards(&[1, 13]));

    let win = settle(bet, twenty, nineteen);
    assert_eq!(win.result, GameResult::PlayerWin);
    assert_eq!(win.payout, 2 * bet);

    let push = settle(bet, twenty, twenty);
    assert_eq!(push.result, GameResult::Push);
    assert_eq!(push.payout, bet);

    let loss = settle(bet, nineteen, twenty);
    assert_eq!(loss.result, GameResult::DealerWin);
    assert_eq!(loss.payout, 0);

    let natural = settle(bet, blackjack, twenty);
    assert_eq!(natural.result, GameResult::Blackjack);
    assert_eq!(natural.payout, 250);

    let dealer_bust = settle(bet, nineteen, bust);
    assert_eq!(dealer_bust.result, GameResult::PlayerWin);
    assert_eq!(dealer_bust.payout, 2 * bet);
}

#[test]
fn payout_rule_precedence() {
    let bust = evaluate(&cards(&[10, 6, 8]));
    let blackjack = evaluate(&cards(&[1, 10]));
    let twenty_one = evaluate(&cards(&[7, 7, 7]));

    // A player bust loses even when the dealer busts too.
    assert_eq!(settle(10, bust, bust).result, GameResult::DealerWin);
    // A dealer bust is checked before the blackjack bonus.
    let against_bust = settle(10, blackjack, bust);
    assert_eq!(against_bust.result, GameResult::PlayerWin);
    assert_eq!(against_bust.payout, 20);
    // Two naturals push.
    assert_eq!(settle(10, blackjack, blackjack).result, GameResult::Push);
    // A natural beats a three-card 21.
    assert_eq!(settle(10, blackjack, twenty_one).result, GameResult::Blackjack);
    // A three-card 21 does not beat a natural.
    assert_eq!(settle(10, twenty_one, blackjack).result, GameResult::Push);
}

#[test]
fn blackjack_payout_rounds_down() {
    let blackjack = evaluate(&cards(&[1, 11]));
    let eighteen = evaluate(&cards(&[10, 8]));

    assert_eq!(settle(1, blackjack, eighteen).payout, 2);
    assert_eq!(settle(3, blackjack, eighteen).payout, 7);
    assert_eq!(settle(UNIT / 10, blackjack, eighteen).payout, UNIT / 4);
}

#[test]
fn largest_wager_does_not_overflow() {
    let blackjack = evaluate(&cards(&[1, 11]));
    let eighteen = evaluate(&cards(&[10, 8]));

    let settlement = settle(MAX_WAGER, blackjack, eighteen);
    assert_eq!(settlement.payout, 2 * MAX_WAGER + MAX_WAGER / 2);
}

#[test]
fn options_validation() {
    assert!(TableOptions::default().validate().is_ok());
    assert_eq!(TableOptions::default().min_bet, UNIT / 1000);
    assert_eq!(TableOptions::default().max_bet, UNIT);

    let zero = TableOptions::default().with_min_bet(0);
    assert_eq!(zero.validate(), Err(LimitError::InvalidRange));

    let inverted = TableOptions::default().with_min_bet(5).with_max_bet(4);
    assert_eq!(inverted.validate(), Err(LimitError::InvalidRange));

    let huge = TableOptions::default().with_max_bet(MAX_WAGER + 1);
    assert_eq!(huge.validate(), Err(LimitError::InvalidRange));

    let exact = TableOptions::default().with_min_bet(7).with_max_bet(7);
    assert!(exact.validate().is_ok());
    assert!(exact.accepts(7));
    assert!(!exact.accepts(6));
    assert!(!exact.accepts(8));
}

#[test]
fn chacha_shoe_covers_every_rank() {
    let mut shoe = ChaChaShoe::new(7);
    let mut seen = [0u32; 14];
    for _ in 0..2_000 {
        let rank = shoe.draw().rank();
        assert!((1..=13).contains(&rank));
        seen[rank as usize] += 1;
    }
    assert!(seen[1..].iter().all(|&count| count > 0));
}

#[test]
fn chacha_shoe_is_reproducible() {
    let mut first = ChaChaShoe::new(99);
    let mut second = ChaChaShoe::new(99);
    for _ in 0..50 {
        assert_eq!(first.draw(), second.draw());
    }
}

#[test]
fn scripted_shoe_replays_then_falls_back() {
    let mut shoe = ScriptedShoe::from_ranks(&[5, 6]).unwrap().with_fallback_seed(3);
    assert_eq!(shoe.remaining(), 2);
    assert_eq!(shoe.draw(), card(5));
    assert_eq!(shoe.draw(), card(6));
    assert_eq!(shoe.remaining(), 0);

    let mut reference = ChaChaShoe::new(3);
    for _ in 0..10 {
        assert_eq!(shoe.draw(), reference.draw());
    }

    assert_eq!(ScriptedShoe::from_ranks(&[3, 0]).unwrap_err(), InvalidRank(0));
}
