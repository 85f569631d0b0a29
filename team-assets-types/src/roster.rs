use crate::token::TokenId;

/// Number of players in a team.
pub const TEAM_SIZE: usize = 11;

/// An ordered, fixed-size list of player token ids claimed to compose a team.
///
/// Order is significant: it is part of the attested claim, so the same ids in
/// a different order describe a different team. The fixed length makes a
/// wrong roster size a type error rather than a runtime check.
pub type Roster = [TokenId; TEAM_SIZE];
