use crate::cards_types::{Card, Face, Rank, Suit};
use crate::combos::ComboType;
use crate::compare::compare_combos;
use crate::legality::{face_counts, is_valid_play, legal_plays};
use crate::tricks::Trick;
use crate::trump::TrumpInfo;
use crate::try_parse_cards;

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

fn spades() -> TrumpInfo {
    TrumpInfo::new(Rank::Two, Suit::Spades)
}

/// Pick cards out of `hand` by token, first unused match each time.
fn pick(hand: &[Card], tokens: &[&str]) -> Vec<Card> {
    let mut picked: Vec<Card> = Vec::new();
    for tok in tokens {
        let face: Face = tok.parse().expect("hardcoded valid card token");
        let card = hand
            .iter()
            .copied()
            .find(|c| c.face == face && !picked.contains(c))
            .expect("token present in hand");
        picked.push(card);
    }
    picked
}

fn follows(hand: &[Card], tokens: &[&str], lead: &[Card], trump: TrumpInfo) -> bool {
    is_valid_play(&pick(hand, tokens), Some(lead), hand, trump)
}

/// Legal answers as sorted token lists, for readable assertions.
fn answers(hand: &[Card], lead: &[Card], trump: TrumpInfo) -> Vec<Vec<String>> {
    let trick = Trick::new(0, lead.to_vec());
    let mut out: Vec<Vec<String>> = legal_plays(hand, Some(&trick), trump)
        .into_iter()
        .map(|combo| {
            let mut toks: Vec<String> = combo.cards.iter().map(ToString::to_string).collect();
            toks.sort();
            toks
        })
        .collect();
    out.sort();
    out
}

fn toks(tokens: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    v.sort();
    v
}

#[test]
fn follow_suit_exhaustion_keeps_the_single_diamond() {
    let lead = parse_cards(&["9D", "9D"]);
    let hand = parse_cards(&["KD", "5C", "7H", "AH"]);
    let trump = spades();

    assert!(follows(&hand, &["KD", "5C"], &lead, trump));
    assert!(!follows(&hand, &["5C", "7H"], &lead, trump));

    let got = answers(&hand, &lead, trump);
    assert_eq!(got.len(), 3);
    assert!(got.iter().all(|play| play.contains(&"KD".to_string())));
}

#[test]
fn trump_lead_exhaustion_forces_the_trump_single() {
    let lead = parse_cards(&["SJ", "SJ"]);
    let hand = parse_cards(&["3S", "7H", "7H", "9C"]);
    let trump = spades();

    assert!(!follows(&hand, &["7H", "7H"], &lead, trump));
    assert!(follows(&hand, &["3S", "7H"], &lead, trump));
    assert_eq!(
        answers(&hand, &lead, trump),
        vec![toks(&["3S", "7H"]), toks(&["3S", "9C"])]
    );
}

#[test]
fn trump_pair_lead_answered_by_loose_trumps() {
    let trump = spades();
    let lead = parse_cards(&["5S", "5S"]);
    let hand = parse_cards(&["AS", "QS", "7H"]);
    let follow = pick(&hand, &["AS", "QS"]);

    assert!(is_valid_play(&follow, Some(lead.as_slice()), &hand, trump));
    assert!(!follows(&hand, &["AS", "7H"], &lead, trump));
    assert_eq!(
        compare_combos(&lead, &follow, trump),
        Ok(std::cmp::Ordering::Greater)
    );
}

#[test]
fn held_pair_must_answer_a_pair() {
    let lead = parse_cards(&["9H", "9H"]);
    let hand = parse_cards(&["3H", "3H", "KH", "5C"]);
    let trump = spades();

    assert!(!follows(&hand, &["3H", "KH"], &lead, trump));
    assert_eq!(answers(&hand, &lead, trump), vec![toks(&["3H", "3H"])]);
}

#[test]
fn cross_suit_trump_rank_pair_answers_a_trump_pair() {
    let trump = TrumpInfo::new(Rank::Four, Suit::Hearts);
    let lead = parse_cards(&["4S", "4S"]);
    let hand = parse_cards(&["4D", "4H", "8H", "9C"]);

    assert!(!follows(&hand, &["4D", "8H"], &lead, trump));
    assert_eq!(answers(&hand, &lead, trump), vec![toks(&["4D", "4H"])]);
}

#[test]
fn off_suit_trump_ranks_of_two_suits_are_not_a_pair() {
    let trump = TrumpInfo::new(Rank::Four, Suit::Hearts);
    let lead = parse_cards(&["4S", "4S"]);
    let hand = parse_cards(&["4D", "4C", "8H", "9C"]);

    assert!(follows(&hand, &["4D", "8H"], &lead, trump));
    assert!(follows(&hand, &["4C", "8H"], &lead, trump));
    assert_eq!(
        answers(&hand, &lead, trump),
        vec![toks(&["4C", "4D"]), toks(&["4C", "8H"]), toks(&["4D", "8H"])]
    );
}

#[test]
fn tractor_must_answer_a_tractor() {
    let lead = parse_cards(&["5H", "5H", "6H", "6H"]);
    let hand = parse_cards(&["9H", "9H", "TH", "TH", "KH", "2C"]);
    let trump = spades();

    assert!(!follows(&hand, &["9H", "9H", "TH", "KH"], &lead, trump));
    assert_eq!(
        answers(&hand, &lead, trump),
        vec![toks(&["9H", "9H", "TH", "TH"])]
    );
}

#[test]
fn tractor_lead_without_tractor_takes_every_pair() {
    let lead = parse_cards(&["5H", "5H", "6H", "6H"]);
    let hand = parse_cards(&["9H", "9H", "QH", "QH", "KH", "3C"]);
    let trump = spades();

    assert!(!follows(&hand, &["9H", "9H", "QH", "KH"], &lead, trump));
    assert_eq!(
        answers(&hand, &lead, trump),
        vec![toks(&["9H", "9H", "QH", "QH"])]
    );
}

#[test]
fn tractor_lead_with_one_pair_keeps_it() {
    let lead = parse_cards(&["5H", "5H", "6H", "6H"]);
    let hand = parse_cards(&["9H", "9H", "QH", "KH", "AH"]);
    let trump = spades();

    assert!(!follows(&hand, &["9H", "QH", "KH", "AH"], &lead, trump));
    let got = answers(&hand, &lead, trump);
    assert_eq!(got.len(), 3);
    assert!(got
        .iter()
        .all(|play| play.iter().filter(|t| t.as_str() == "9H").count() == 2));
}

#[test]
fn filler_uses_singles_before_breaking_pairs() {
    let lead = parse_cards(&["9D", "9D"]);
    let hand = parse_cards(&["KD", "7C", "7C", "8H"]);
    let trump = spades();

    assert!(!follows(&hand, &["KD", "7C"], &lead, trump));
    assert_eq!(answers(&hand, &lead, trump), vec![toks(&["8H", "KD"])]);
}

#[test]
fn void_hand_may_discard_anything() {
    let lead = parse_cards(&["9D", "9D"]);
    let hand = parse_cards(&["SJ", "3C", "7H"]);
    let trump = spades();

    // Not a pair, and trump mixed with a plain card: still legal when void.
    assert!(follows(&hand, &["SJ", "3C"], &lead, trump));
    assert_eq!(answers(&hand, &lead, trump).len(), 3);
}

#[test]
fn leads_must_be_real_combinations() {
    let hand = parse_cards(&["3H", "3H", "4H", "4H", "5C"]);
    let hearts = TrumpInfo::new(Rank::Two, Suit::Hearts);

    assert!(is_valid_play(&pick(&hand, &["3H", "3H", "4H", "4H"]), None, &hand, hearts));
    assert!(is_valid_play(&pick(&hand, &["3H", "3H"]), None, &hand, hearts));
    assert!(!is_valid_play(&pick(&hand, &["3H", "5C"]), None, &hand, hearts));
    assert!(!is_valid_play(&pick(&hand, &["3H", "4H", "4H"]), None, &hand, hearts));
}

#[test]
fn off_suit_trump_rank_pairs_do_not_lead_as_tractor() {
    let hand = parse_cards(&["2H", "2H", "3H", "3H"]);
    let trump = spades();

    assert!(!is_valid_play(&hand, None, &hand, trump));
    let plays = legal_plays(&hand, None, trump);
    // 2H, 3H, 2H2H, 3H3H
    assert_eq!(plays.len(), 4);
    assert!(plays.iter().all(|p| p.len() <= 2));
    assert!(plays.iter().all(|p| p.combo_type != ComboType::Tractor));
}

#[test]
fn leading_lists_each_tractor_window() {
    let hand = parse_cards(&["7D", "7D", "8D", "8D", "9D", "9D"]);
    let plays = legal_plays(&hand, None, spades());
    let tractors: Vec<usize> = plays
        .iter()
        .filter(|p| p.combo_type == ComboType::Tractor)
        .map(|p| p.len())
        .collect();
    assert_eq!(tractors.len(), 3);
    assert_eq!(tractors.iter().filter(|&&n| n == 6).count(), 1);
}

#[test]
fn identical_copies_are_listed_once() {
    let lead = parse_cards(&["9D"]);
    let hand = parse_cards(&["KD", "KD", "3D"]);
    let trick = Trick::new(0, lead);
    let plays = legal_plays(&hand, Some(&trick), spades());
    assert_eq!(plays.len(), 2);
    let counts: Vec<_> = plays.iter().map(|p| face_counts(&p.cards)).collect();
    assert_ne!(counts[0], counts[1]);
}

#[test]
fn short_hand_falls_back_instead_of_returning_nothing() {
    let lead = parse_cards(&["9D", "9D"]);
    let hand = parse_cards(&["3C"]);
    let trick = Trick::new(0, lead);
    let plays = legal_plays(&hand, Some(&trick), spades());
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].cards, hand);
}

#[test]
fn empty_hand_has_no_plays() {
    assert!(legal_plays(&[], None, spades()).is_empty());
}
