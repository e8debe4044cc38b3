mod lobby;

pub use lobby::Lobby;
