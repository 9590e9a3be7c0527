use hearts_core::model::card::{Card, ParseCardError};
use thiserror::Error;

/// Out-of-band requests a player may type instead of a card. Commands are
/// answered on the spot and never consume the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowHand,
    ShowScores,
    ShowTricks,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Command(Command),
    Card(Card),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("{0}")]
    Card(#[from] ParseCardError),
    #[error("unknown command -{0}; commands are -hand, -scores, -tricks, -help")]
    UnknownCommand(String),
}

/// Splits raw input into commands (leading `-`) and card tokens. Card
/// tokens are upper-cased before parsing so `qs` and `QS` both work.
pub fn parse_token(raw: &str) -> Result<Token, TokenError> {
    let trimmed = raw.trim();

    if let Some(name) = trimmed.strip_prefix('-') {
        let command = match name.to_ascii_lowercase().as_str() {
            "hand" => Command::ShowHand,
            "scores" => Command::ShowScores,
            "tricks" => Command::ShowTricks,
            "help" => Command::Help,
            other => return Err(TokenError::UnknownCommand(other.to_string())),
        };
        return Ok(Token::Command(command));
    }

    let card = trimmed.to_ascii_uppercase().parse::<Card>()?;
    Ok(Token::Card(card))
}

#[cfg(test)]
mod tests {
    use super::{Command, Token, TokenError, parse_token};
    use hearts_core::model::card::{Card, ParseCardError};
    use hearts_core::model::rank::Rank;
    use hearts_core::model::suit::Suit;

    #[test]
    fn commands_are_intercepted_before_card_parsing() {
        assert_eq!(parse_token("-hand"), Ok(Token::Command(Command::ShowHand)));
        assert_eq!(parse_token(" -SCORES "), Ok(Token::Command(Command::ShowScores)));
        assert_eq!(parse_token("-tricks"), Ok(Token::Command(Command::ShowTricks)));
        assert_eq!(
            parse_token("-moon"),
            Err(TokenError::UnknownCommand("moon".to_string()))
        );
    }

    #[test]
    fn card_tokens_parse_case_insensitively() {
        assert_eq!(
            parse_token("qs"),
            Ok(Token::Card(Card::QUEEN_OF_SPADES))
        );
        assert_eq!(
            parse_token("10h "),
            Ok(Token::Card(Card::new(Rank::Ten, Suit::Hearts)))
        );
    }

    #[test]
    fn malformed_cards_surface_the_parse_error() {
        assert_eq!(
            parse_token(""),
            Err(TokenError::Card(ParseCardError::Empty))
        );
        assert_eq!(
            parse_token("11D"),
            Err(TokenError::Card(ParseCardError::UnknownRank("11".to_string())))
        );
    }
}
