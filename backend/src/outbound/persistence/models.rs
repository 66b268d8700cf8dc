//! Internal Diesel row types. Never exposed outside the persistence adapter.

use diesel::prelude::*;

use crate::domain::{Player, PlayerFields, PlayerId};

use super::schema::players;

/// A full `players` row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlayerRow {
    pub id: i64,
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player::new(
            PlayerId::new(row.id),
            PlayerFields {
                name: row.name,
                team: row.team,
                position: row.position,
            },
        )
    }
}

/// Writable columns, shared by insert and full update.
///
/// `treat_none_as_null` makes an update clear optional columns the caller
/// omitted, so an update replaces every attribute.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = players)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct PlayerFieldsRow<'a> {
    pub name: &'a str,
    pub team: Option<&'a str>,
    pub position: Option<&'a str>,
}

impl<'a> From<&'a PlayerFields> for PlayerFieldsRow<'a> {
    fn from(fields: &'a PlayerFields) -> Self {
        Self {
            name: &fields.name,
            team: fields.team.as_deref(),
            position: fields.position.as_deref(),
        }
    }
}
