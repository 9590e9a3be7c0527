use hearts_core::model::card::Card;
use hearts_core::model::hand::Hand;
use hearts_core::model::player::PlayerPosition;

/// Hand rendering in the table's house style: `|2C| |9D| |QS|`.
pub fn render_hand(hand: &Hand) -> String {
    hand.iter()
        .map(|card| format!("|{card}|"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format!("|{card}|"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Long-form phrase for narration: `Queen of spades`, `10 of hearts`.
pub fn card_phrase(card: Card) -> String {
    format!("{} of {}", card.rank.word(), card.suit.name())
}

pub fn score_table(names: &[String; 4], totals: &[u32; 4]) -> String {
    let mut lines = Vec::with_capacity(4);
    for seat in PlayerPosition::LOOP {
        lines.push(format!("  {:<12} {:>4}", names[seat.index()], totals[seat.index()]));
    }
    lines.join("\n")
}
