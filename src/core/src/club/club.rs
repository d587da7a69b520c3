use crate::club::ClubId;

/// A club entered into a competition. Roster and strength live in
/// [`crate::club::Squad`]; the club itself is identity plus data-pack
/// presentation fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub league: String,
    pub logo: String,
    pub country: String,
}

impl Club {
    pub fn new(id: ClubId, name: String, league: String, logo: String, country: String) -> Self {
        Club {
            id,
            name,
            league,
            logo,
            country,
        }
    }
}
