//! Card decoding tests.

use niurs::{Card, DecodeError, Face, Rank, Suit};

fn decode(code: &str) -> Card {
    Card::decode(code).unwrap()
}

#[test]
fn rank_table() {
    assert_eq!(decode("As").rank(), Rank::Ace);
    assert_eq!(decode("Js").rank(), Rank::Face(Face::Jack));
    assert_eq!(decode("qh").rank(), Rank::Face(Face::Queen));
    assert_eq!(decode("KD").rank(), Rank::Face(Face::King));
    assert_eq!(decode("3c").rank(), Rank::Three);
    assert_eq!(decode("6c").rank(), Rank::Six);
    for n in [2, 4, 5, 7, 8, 9, 10] {
        assert_eq!(decode(&format!("{n}h")).rank(), Rank::Number(n));
    }
}

#[test]
fn candidate_values() {
    assert_eq!(decode("as").values().as_slice(), &[1]);
    assert_eq!(decode("kh").values().as_slice(), &[10]);
    assert_eq!(decode("3d").values().as_slice(), &[3, 6]);
    assert_eq!(decode("6d").values().as_slice(), &[6, 3]);
    assert_eq!(decode("7d").values().as_slice(), &[7]);
    assert_eq!(decode("10d").values().as_slice(), &[10]);
    assert_eq!(decode("6d").values().primary(), 6);
    assert_eq!(decode("3d").values().len(), 2);
}

#[test]
fn face_and_spade_ace_flags() {
    assert!(decode("Jh").is_face());
    assert!(decode("Qc").is_face());
    assert!(decode("Ks").is_face());
    assert!(!decode("10s").is_face());
    assert!(!decode("As").is_face());

    assert!(decode("As").is_spade_ace());
    assert!(decode("aS").is_spade_ace());
    assert!(!decode("Ah").is_spade_ace());
    assert!(!decode("Ks").is_spade_ace());
}

#[test]
fn suits_are_case_insensitive() {
    assert_eq!(decode("As").suit(), Suit::Spades);
    assert_eq!(decode("AH").suit(), Suit::Hearts);
    assert_eq!(decode("Ad").suit(), Suit::Diamonds);
    assert_eq!(decode("AC").suit(), Suit::Clubs);
}

#[test]
fn unknown_rank_degrades_to_zero() {
    let card = decode("Xs");
    assert_eq!(card.rank(), Rank::Unknown);
    assert_eq!(card.values().as_slice(), &[0]);
    assert!(!card.is_face());
    assert_eq!(card.suit(), Suit::Spades);

    // Only the listed numeric tokens are numbers.
    assert_eq!(decode("1s").rank(), Rank::Unknown);
    assert_eq!(decode("11s").rank(), Rank::Unknown);
    assert_eq!(decode("s").rank(), Rank::Unknown);
}

#[test]
fn unmatched_suit_is_preserved() {
    let card = decode("7x");
    assert_eq!(card.rank(), Rank::Number(7));
    assert_eq!(card.suit(), Suit::Other('x'));
    assert_eq!(card.code(), "7x");
    assert_eq!(card.label(), "7x");

    assert_eq!(decode("7X").suit(), Suit::Other('X'));
}

#[test]
fn empty_code_fails() {
    assert_eq!(Card::decode(""), Err(DecodeError::Empty));
    assert_eq!("".parse::<Card>(), Err(DecodeError::Empty));
}

#[test]
fn strict_decoding_rejects_unknowns() {
    assert_eq!(
        Card::decode_strict("Xs"),
        Err(DecodeError::UnknownRank("X".to_string()))
    );
    assert_eq!(Card::decode_strict("7x"), Err(DecodeError::UnknownSuit('x')));
    assert_eq!(Card::decode_strict(""), Err(DecodeError::Empty));
    assert_eq!(Card::decode_strict("10c").unwrap().rank(), Rank::Number(10));
}

#[test]
fn code_is_kept_verbatim() {
    let card: Card = "QD".parse().unwrap();
    assert_eq!(card.code(), "QD");
    assert_eq!(card.rank(), Rank::Face(Face::Queen));
}

#[test]
fn labels() {
    assert_eq!(decode("as").label(), "A♠");
    assert_eq!(decode("10h").to_string(), "10♥");
    assert_eq!(decode("kD").label(), "K♦");
    assert_eq!(decode("3c").label(), "3♣");
    assert_eq!(decode("Zz").label(), "Zz");
}
