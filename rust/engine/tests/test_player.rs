use war_engine::cards::{Card, Rank, Suit};
use war_engine::player::Player;

fn card(rank: Rank) -> Card {
    Card {
        rank,
        suit: Suit::Spades,
    }
}

#[test]
fn draws_come_from_the_front_in_fifo_order() {
    let mut player = Player::new("You");
    player.add_to_bottom([card(Rank::Two), card(Rank::Five), card(Rank::Nine)]);

    assert_eq!(player.draw_card(), Some(card(Rank::Two)));
    assert_eq!(player.draw_card(), Some(card(Rank::Five)));
    assert_eq!(player.draw_card(), Some(card(Rank::Nine)));
    assert_eq!(player.draw_card(), None);
}

#[test]
fn add_to_bottom_preserves_input_order() {
    let mut player = Player::new("You");
    player.add_to_bottom([card(Rank::Ace)]);
    player.add_to_bottom([card(Rank::Three), card(Rank::Four)]);

    assert_eq!(player.card_count(), 3);
    assert_eq!(player.draw_card(), Some(card(Rank::Ace)));
    assert_eq!(player.draw_card(), Some(card(Rank::Three)));
    assert_eq!(player.draw_card(), Some(card(Rank::Four)));
}

#[test]
fn empty_pile_reports_no_cards() {
    let mut player = Player::new("CPU");
    assert!(!player.has_cards());
    assert_eq!(player.card_count(), 0);
    assert_eq!(player.draw_card(), None);
}

#[test]
fn clear_empties_the_pile() {
    let mut player = Player::new("CPU");
    player.add_to_bottom([card(Rank::King), card(Rank::Queen)]);
    assert!(player.has_cards());
    player.clear();
    assert!(!player.has_cards());
    assert_eq!(player.card_count(), 0);
}

#[test]
fn name_is_retained() {
    let player = Player::new("You");
    assert_eq!(player.name(), "You");
}
