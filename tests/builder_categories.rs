use poker_hands::builder::{classify, BuilderChain, HandBuilder, TuplesBuilder};
use poker_hands::cards::{parse_cards, Card, Suit, ACE_LOW};
use poker_hands::hand::HandData;
use poker_hands::rules::names;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid cards")
}

fn category(s: &str) -> String {
    let chain = BuilderChain::standard();
    chain.classify(&cards(s)).expect("standard chain always matches").name().to_string()
}

#[test]
fn category_royal_flush() {
    assert_eq!(category("Ah Kh Qh Jh Th"), names::ROYAL_FLUSH);
}

#[test]
fn category_straight_flush() {
    assert_eq!(category("9s 8s 7s 6s 5s"), names::STRAIGHT_FLUSH);
    assert_eq!(category("As 2s 3s 4s 5s"), names::STRAIGHT_FLUSH);
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(category("9c 9d 9h 9s Ac"), names::FOUR_OF_A_KIND);
    assert_eq!(category("2c 2d 2h 2s 7c"), names::FOUR_OF_A_KIND);
}

#[test]
fn category_full_house() {
    assert_eq!(category("3c 3d 3h Js Jc"), names::FULL_HOUSE);
    assert_eq!(category("Ac Ad Kh Ks Kc"), names::FULL_HOUSE);
}

#[test]
fn category_flush() {
    assert_eq!(category("Kh Th 8h 6h 3h"), names::FLUSH);
}

#[test]
fn category_straight() {
    assert_eq!(category("Ac 5c 4d 3h 2s"), names::STRAIGHT);
    assert_eq!(category("Tc Jd Qh Ks Ac"), names::STRAIGHT);
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(category("Qc Qd Qh Ts 2c"), names::THREE_OF_A_KIND);
}

#[test]
fn category_two_pair() {
    assert_eq!(category("Jc Jd 9c 9h 2s"), names::TWO_PAIR);
}

#[test]
fn category_pair() {
    assert_eq!(category("Ah Ad Ts 9c 2d"), names::PAIR);
}

#[test]
fn category_high_card() {
    assert_eq!(category("Ah Kd 7s 5c 2d"), names::HIGH_CARD);
    assert_eq!(category(""), names::HIGH_CARD);
}

#[test]
fn ranks_follow_chain_order() {
    let chain = BuilderChain::standard();
    let rank = |s: &str| chain.classify(&cards(s)).unwrap().rank();
    assert_eq!(rank("Ah Kh Qh Jh Th"), 10);
    assert_eq!(rank("9s 8s 7s 6s 5s"), 9);
    assert_eq!(rank("Kh Th 8h 6h 3h"), 6);
    assert_eq!(rank("Ah Kd 7s 5c 2d"), 1);
}

#[test]
fn seven_card_sets() {
    assert_eq!(category("Ah Kh Qh Jh Th 2c 2d"), names::ROYAL_FLUSH);
    assert_eq!(category("2c 2d 2h 5s 5c 9d Kh"), names::FULL_HOUSE);
    assert_eq!(category("2c 3d 4h 5s 6c 6d 6h"), names::STRAIGHT);
    assert_eq!(category("2h 7h 9h Jh Kh Kd Kc"), names::FLUSH);
}

#[test]
fn classify_leaves_caller_cards_untouched() {
    let chain = BuilderChain::standard();
    let input = vec![
        Card::from_value(ACE_LOW, Suit::Hearts).unwrap(),
        Card::from_value(13, Suit::Hearts).unwrap(),
        Card::from_value(12, Suit::Hearts).unwrap(),
        Card::from_value(11, Suit::Hearts).unwrap(),
        Card::from_value(10, Suit::Hearts).unwrap(),
    ];
    let before: Vec<u8> = input.iter().map(|c| c.value()).collect();
    let hand = classify(&input, &chain).unwrap();
    assert_eq!(hand.name(), names::ROYAL_FLUSH);
    let after: Vec<u8> = input.iter().map(|c| c.value()).collect();
    assert_eq!(before, after);
}

#[test]
fn two_pair_builder_rejects_quads_alone() {
    let two_pair = TuplesBuilder::try_new(names::TWO_PAIR, 2, Some(2), Some(2)).unwrap();
    assert!(two_pair.build(&cards("2c 2d 2h 2s 7c")).is_none());
}

#[test]
fn royal_payload_is_ace_high() {
    let chain = BuilderChain::standard();
    let hand = chain.classify(&cards("Th Jh Qh Kh Ah")).unwrap();
    let HandData::Straight { straight_cards, remaining } = hand.data() else {
        panic!("royal flush carries a straight payload");
    };
    let values: Vec<u8> = straight_cards.iter().map(|c| c.value()).collect();
    assert_eq!(values, vec![14, 13, 12, 11, 10]);
    assert!(remaining.is_empty());
}

#[test]
fn chain_is_shareable_across_threads() {
    let chain = BuilderChain::standard();
    let inputs = ["Ah Kh Qh Jh Th", "2c 2d 2h 2s 7c", "Ac 5c 4d 3h 2s", "Ah Kd 7s 5c 2d"];
    let expected = [names::ROYAL_FLUSH, names::FOUR_OF_A_KIND, names::STRAIGHT, names::HIGH_CARD];
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|s| {
                let chain = &chain;
                scope.spawn(move || chain.classify(&cards(s)).unwrap().name().to_string())
            })
            .collect();
        for (handle, want) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), want);
        }
    });
}
