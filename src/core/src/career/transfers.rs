use crate::career::{Career, CareerError};
use crate::club::{Player, PlayerId};
use log::info;

/// Flat signing fee, the only price the market knows.
pub const TRANSFER_FEE: i64 = 50_000;

/// Signs players between clubs for a flat fee. No negotiation, no
/// contracts, no windows.
pub struct TransferMarket;

impl TransferMarket {
    /// Signs `player_id` for the career club. The fee is charged before
    /// the player moves, so a failed debit leaves everything untouched.
    pub fn sign(
        career: &mut Career,
        players: &mut [Player],
        player_id: PlayerId,
    ) -> Result<(), CareerError> {
        let player = players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(CareerError::PlayerNotFound(player_id))?;

        if player.club_id == career.club_id {
            return Err(CareerError::AlreadySigned(player_id));
        }

        career.finances.debit(TRANSFER_FEE)?;
        player.club_id = career.club_id;

        info!(
            "{} signed {} for {} (balance {})",
            career.club_name, player.name, TRANSFER_FEE, career.finances.balance
        );

        Ok(())
    }

    /// Every player not already at the career club.
    pub fn available<'p>(career: &Career, players: &'p [Player]) -> Vec<&'p Player> {
        players
            .iter()
            .filter(|p| p.club_id != career.club_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerPosition;

    fn career() -> Career {
        Career::new("Tite", "Brazil", None, "2025/2026", 1, "Palmeiras").unwrap()
    }

    fn roster() -> Vec<Player> {
        vec![
            Player::new(
                10,
                1,
                "Weverton".to_string(),
                PlayerPosition::Goalkeeper,
                80,
                37,
                "Brazil".to_string(),
            ),
            Player::new(
                20,
                2,
                "Pedro".to_string(),
                PlayerPosition::Forward,
                83,
                28,
                "Brazil".to_string(),
            ),
        ]
    }

    #[test]
    fn signing_debits_the_flat_fee_and_moves_the_player() {
        let mut career = career();
        let mut players = roster();

        TransferMarket::sign(&mut career, &mut players, 20).unwrap();

        assert_eq!(career.finances.balance, 1_000_000 - TRANSFER_FEE);
        assert_eq!(players[1].club_id, 1);
    }

    #[test]
    fn own_players_cannot_be_signed_again() {
        let mut career = career();
        let mut players = roster();

        assert_eq!(
            TransferMarket::sign(&mut career, &mut players, 10),
            Err(CareerError::AlreadySigned(10))
        );
        assert_eq!(career.finances.balance, 1_000_000);
    }

    #[test]
    fn unknown_player_is_reported() {
        let mut career = career();
        let mut players = roster();

        assert_eq!(
            TransferMarket::sign(&mut career, &mut players, 999),
            Err(CareerError::PlayerNotFound(999))
        );
    }

    #[test]
    fn insufficient_funds_leaves_both_sides_untouched() {
        let mut career = career();
        career.finances.balance = 100;
        let mut players = roster();

        let result = TransferMarket::sign(&mut career, &mut players, 20);

        assert_eq!(
            result,
            Err(CareerError::InsufficientFunds {
                required: TRANSFER_FEE,
                available: 100
            })
        );
        assert_eq!(career.finances.balance, 100);
        assert_eq!(players[1].club_id, 2);
    }

    #[test]
    fn available_lists_only_other_clubs() {
        let career = career();
        let players = roster();

        let listed = TransferMarket::available(&career, &players);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 20);
    }
}
