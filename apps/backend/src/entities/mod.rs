pub mod card_suit;
pub mod cards;
pub mod dealings;
pub mod entries;
pub mod game_players;
pub mod game_winners;
pub mod games;
pub mod rounds;
pub mod users;

pub use card_suit::CardSuit;
pub use cards::Entity as Cards;
pub use dealings::Entity as Dealings;
pub use entries::Entity as Entries;
pub use game_players::Entity as GamePlayers;
pub use game_winners::Entity as GameWinners;
pub use games::{Entity as Games, GameType};
pub use rounds::Entity as Rounds;
pub use users::Entity as Users;
